/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Clipper API client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod api;
pub mod auth;
pub mod clipper;
pub mod http;
pub mod types;

pub use clipper::ClipperClient;

// Re-export commonly used types from auth
pub use auth::{StaticToken, TokenData, TokenProvider, TokenStore};

// Re-export commonly used types from http
pub use http::{
    ApiClient,
    ApiError,
    ClientConfig,
    DEFAULT_TIMEOUT,
    ErrorCode,
    RequestOptions,
    Result,
    TransportFailure,
};

// Re-export resource clients
pub use api::{
    BalanceClient,
    CampaignsClient,
    ClipsClient,
    DisputesClient,
    NotificationsClient,
    StudiosClient,
    UsersClient,
};

// Re-export all types
pub use types::*;
