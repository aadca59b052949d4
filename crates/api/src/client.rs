//! The HTTP client and its cross-cutting request/response policy.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shopfront_storage::ClientStorage;

use crate::error::{ApiError, classify};
use crate::notify::Notifier;
use crate::session;

/// Storage key holding the bearer credential.
pub const TOKEN_KEY: &str = "token";

/// Client for the storefront backend.
///
/// Cheap to clone; share one instance across stores.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    storage: Arc<dyn ClientStorage>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        storage: Arc<dyn ClientStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            storage,
            notifier,
        }
    }

    pub fn storage(&self) -> Arc<dyn ClientStorage> {
        Arc::clone(&self.storage)
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::clone(&self.notifier)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with the bearer credential attached when present.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.storage.get(TOKEN_KEY) {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Start a request that additionally carries the guest-session header.
    pub(crate) fn guest_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request(method, path).header(
            session::SESSION_HEADER,
            session::session_id(self.storage.as_ref()),
        )
    }

    /// Issue the request and decode a JSON body.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(builder).await?;
        match response.json::<T>().await {
            Ok(value) => Ok(value),
            Err(err) => {
                let err = ApiError::Decode(err.to_string());
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Issue the request, discarding any response body.
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.dispatch(builder).await.map(|_| ())
    }

    /// Issue a request where 404 means "no": returns `Ok(None)`
    /// without raising a not-found notice.
    pub(crate) async fn send_optional<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<T>, ApiError> {
        match self.dispatch_inner(builder).await {
            Ok(response) => match response.json::<T>().await {
                Ok(value) => Ok(Some(value)),
                Err(err) => {
                    let err = ApiError::Decode(err.to_string());
                    self.report(&err);
                    Err(err)
                }
            },
            Err(ApiError::NotFound) => Ok(None),
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Issue the request and classify any failure, funneling it through
    /// the notifier.
    async fn dispatch(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        match self.dispatch_inner(builder).await {
            Ok(response) => Ok(response),
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    async fn dispatch_inner(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(failure_to_error(
            self.storage.as_ref(),
            status.as_u16(),
            &body,
        ))
    }

    fn report(&self, err: &ApiError) {
        tracing::warn!(%err, "request failed");
        self.notifier.error(&err.user_message());
    }
}

/// Classify a non-success response and apply its storage side effect.
///
/// Session end is signaled by the backend, never by a local timer; a 401
/// clears the stored credential unconditionally, whatever the body said.
pub(crate) fn failure_to_error(storage: &dyn ClientStorage, status: u16, body: &str) -> ApiError {
    let err = classify(status, body);
    if matches!(err, ApiError::Unauthorized) {
        if let Err(storage_err) = storage.remove(TOKEN_KEY) {
            tracing::warn!(%storage_err, "failed to clear stored credentials");
        }
    }
    err
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
