/*
[INPUT]:  Query parameter structs and extra headers for a single call
[OUTPUT]: Per-request options consumed by the pipeline verbs
[POS]:    HTTP layer - request decoration
[UPDATE]: When adding per-request knobs
*/

use serde::Serialize;
use serde_json::Value;

use super::error::{Result, TransportFailure};

/// Options applied to one request only
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options whose query string mirrors a parameter struct
    ///
    /// Fields serializing to `null` are left out, so `Option::None` never
    /// reaches the wire.
    pub fn with_query<Q: Serialize + ?Sized>(params: &Q) -> Result<Self> {
        Ok(Self {
            query: query_pairs(params)?,
            headers: Vec::new(),
        })
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

fn query_pairs<Q: Serialize + ?Sized>(params: &Q) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params)
        .map_err(|e| TransportFailure::local(format!("Failed to encode query parameters: {e}")))?;

    let object = match value {
        Value::Object(object) => object,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(TransportFailure::local(format!(
                "Query parameters must serialize to an object, got {other}"
            ))
            .into());
        }
    };

    Ok(object
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect())
}
