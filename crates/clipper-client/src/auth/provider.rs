/*
[INPUT]:  Caller-defined token lookup (session store, env, refresh logic)
[OUTPUT]: Current bearer token, or None for anonymous requests
[POS]:    Auth layer - token capability abstraction
[UPDATE]: When adding new provider implementations
*/

use std::future::Future;

use async_trait::async_trait;

/// Source of the bearer token attached to outgoing requests
///
/// The pipeline calls [`TokenProvider::token`] once per request and never
/// caches the result, so rotation and refresh stay entirely on the caller's
/// side. Returning `None` sends the request without an `Authorization` header.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Option<String>;
}

/// A token that never changes
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Option<String> {
        Some(self.token.clone())
    }
}

/// Any async closure returning an optional token
#[async_trait]
impl<F, Fut> TokenProvider for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Option<String>> + Send,
{
    async fn token(&self) -> Option<String> {
        (self)().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_static_token() {
        let provider = StaticToken::new("abc123");
        assert_eq!(provider.token().await, Some("abc123".to_string()));
    }

    #[tokio::test]
    async fn test_closure_provider_is_called_each_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let provider = move || {
            let counter = counter.clone();
            async move {
                let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                Some(format!("token-{n}"))
            }
        };

        assert_eq!(provider.token().await, Some("token-1".to_string()));
        assert_eq!(provider.token().await, Some("token-2".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_closure_provider_can_return_none() {
        let provider = || async { None::<String> };
        assert_eq!(provider.token().await, None);
    }
}
