/*
[INPUT]:  Tokens obtained by the caller's own login/refresh flow
[OUTPUT]: Token retrieval and expiration status
[POS]:    Auth layer - shared token cache usable as a TokenProvider
[UPDATE]: When changing storage strategy or expiry semantics
*/

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use super::TokenProvider;

/// Stored token data with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct TokenData {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenData {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() > at)
    }
}

/// Thread-safe token cache
///
/// Clones share the same slot, so a refresh task can hold one clone while
/// the client reads through another.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    data: Arc<RwLock<Option<TokenData>>>,
}

impl TokenStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token valid for `expires_seconds`
    ///
    /// A lifetime past what `DateTime<Utc>` can represent is stored without expiry.
    pub fn set_token(&self, token: impl Into<String>, expires_seconds: u64) {
        let expires_at = i64::try_from(expires_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));
        self.replace(Some(TokenData {
            token: token.into(),
            expires_at,
        }));
    }

    /// Store a token with no known expiry
    pub fn set_token_without_expiry(&self, token: impl Into<String>) {
        self.replace(Some(TokenData {
            token: token.into(),
            expires_at: None,
        }));
    }

    /// Get the current token, treating an expired one as absent
    pub fn get_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .filter(|data| !data.is_expired())
            .map(|data| data.token.clone())
    }

    /// True when no usable token is stored
    pub fn is_expired(&self) -> bool {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().is_none_or(TokenData::is_expired)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().and_then(|data| data.expires_at)
    }

    /// Get token data if available
    pub fn token_data(&self) -> Option<TokenData> {
        let guard = self.data.read().unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }

    /// Clear the stored token
    pub fn clear(&self) {
        self.replace(None);
    }

    fn replace(&self, value: Option<TokenData>) {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        *guard = value;
    }
}

#[async_trait]
impl TokenProvider for TokenStore {
    async fn token(&self) -> Option<String> {
        self.get_token()
    }
}
