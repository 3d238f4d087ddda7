/*
[INPUT]:  Client configuration (base URL, token provider, timeout)
[OUTPUT]: Decoded response bodies or normalized ApiError values
[POS]:    HTTP layer - request pipeline shared by every resource client
[UPDATE]: When adding connection options or changing request hooks
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::error::{Result, TransportFailure};
use super::options::RequestOptions;
use crate::auth::TokenProvider;

/// Request timeout used when the configuration does not set one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Client configuration
///
/// Built once by the caller and handed by reference to every client
/// constructor; the pipeline copies what it needs and never mutates it.
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token_provider: Option<Arc<dyn TokenProvider>>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_provider: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Attach a token provider consulted before every request
    pub fn with_token_provider<P: TokenProvider + 'static>(self, provider: P) -> Self {
        self.with_shared_token_provider(Arc::new(provider))
    }

    pub fn with_shared_token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token_provider", &self.token_provider.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Request pipeline: auth injection before send, error normalization after
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("token_provider", &self.token_provider.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Create a pipeline from configuration
    ///
    /// Fails with `CLIENT_ERROR` when the base URL is blank or unparsable.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = config.base_url.trim();
        if base.is_empty() {
            return Err(TransportFailure::local("Base URL is required").into());
        }
        let base_url = Url::parse(base)
            .map_err(|e| TransportFailure::local(format!("Invalid base URL '{base}': {e}")))?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TransportFailure::from)?;

        Ok(Self {
            http_client,
            base_url,
            token_provider: config.token_provider.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `path`
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        self.send::<T, ()>(Method::GET, path, None, options).await
    }

    /// POST `path` with an optional JSON body
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, body, options).await
    }

    /// PUT `path` with an optional JSON body
    pub async fn put<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, body, options).await
    }

    /// PATCH `path` with an optional JSON body
    pub async fn patch<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::PATCH, path, body, options).await
    }

    /// DELETE `path`
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        self.send::<T, ()>(Method::DELETE, path, None, options).await
    }

    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match self.execute(method.clone(), path, body, options).await {
            Ok(value) => Ok(value),
            Err(failure) => {
                let err = failure.normalize();
                warn!(
                    method = %method,
                    path,
                    code = %err.code,
                    status = err.status,
                    "request failed"
                );
                Err(err)
            }
        }
    }

    async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> std::result::Result<T, TransportFailure>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let mut builder = self.http_client.request(method.clone(), url.clone());

        if let Some(options) = options {
            if !options.query.is_empty() {
                builder = builder.query(&options.query);
            }
            for (name, value) in &options.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let (builder, authenticated) = self.authorize(builder).await;
        debug!(method = %method, url = %url, authenticated, "sending request");

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "response received");

        if !status.is_success() {
            return Err(TransportFailure::from_response(status.as_u16(), &bytes));
        }
        decode_body(status.as_u16(), &bytes)
    }

    /// Pre-request hook: ask the provider for a fresh token every time
    async fn authorize(&self, builder: RequestBuilder) -> (RequestBuilder, bool) {
        let Some(provider) = &self.token_provider else {
            return (builder, false);
        };
        match provider.token().await {
            Some(token) => (builder.bearer_auth(token), true),
            None => (builder, false),
        }
    }

    /// Append `path` to the base URL, keeping any base path prefix
    fn url(&self, path: &str) -> std::result::Result<Url, TransportFailure> {
        let mut joined = self.base_url.as_str().trim_end_matches('/').to_string();
        if !path.starts_with('/') {
            joined.push('/');
        }
        joined.push_str(path);
        Ok(Url::parse(&joined)?)
    }
}

fn decode_body<T: DeserializeOwned>(
    status: u16,
    bytes: &[u8],
) -> std::result::Result<T, TransportFailure> {
    // Empty bodies (204, bare 200) decode as JSON null.
    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        bytes
    };
    serde_json::from_slice(bytes).map_err(|e| TransportFailure::undecodable(status, &e))
}
