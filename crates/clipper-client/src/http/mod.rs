/*
[INPUT]:  Client configuration and per-request options
[OUTPUT]: Decoded JSON bodies and normalized errors
[POS]:    HTTP layer - transport pipeline
[UPDATE]: When changing the pipeline surface or error model
*/

pub mod client;
pub mod error;
pub mod options;

pub use client::{ApiClient, ClientConfig, DEFAULT_TIMEOUT};
pub use error::{
    ApiError, ErrorBody, ErrorCode, ErrorEnvelope, FailedResponse, Result, TransportFailure,
};
pub use options::RequestOptions;
