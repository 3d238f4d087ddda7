/*
[INPUT]:  Caller-supplied token sources (static values, closures, caches)
[OUTPUT]: Bearer tokens fetched fresh before every request
[POS]:    Auth layer - token capability consumed by the request pipeline
[UPDATE]: When adding token sources or changing the provider contract
*/

pub mod provider;
pub mod store;

pub use provider::{StaticToken, TokenProvider};
pub use store::{TokenData, TokenStore};
