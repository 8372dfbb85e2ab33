//! The authenticated HTTP adapter.
//!
//! Every SDK request flows through `ApiClient`: a request stage that
//! attaches the bearer credential when one is active, the transport call,
//! and a response stage that classifies every outcome into the
//! `client-core` taxonomy and applies the single side-effecting policy —
//! a 401 from a protected endpoint destroys the session and redirects to
//! the login page. There is no retry, no backoff, and no queueing: each
//! call completes or fails exactly once.

use std::time::Duration;

use client_core::ApiError;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiSettings;
use crate::session::SessionHandle;

use super::navigator::Navigator;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionHandle,
    navigator: Navigator,
}

impl ApiClient {
    pub fn new(
        settings: &ApiSettings,
        session: SessionHandle,
        navigator: Navigator,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| ApiError::unclassified(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path);
        self.dispatch(request, path).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path).query(query);
        self.dispatch(request, path).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path).json(body);
        self.dispatch(request, path).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::PUT, path).json(body);
        self.dispatch(request, path).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::PATCH, path);
        self.dispatch(request, path).await
    }

    pub async fn patch_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.request(Method::PATCH, path).query(query);
        self.dispatch(request, path).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, path);
        self.dispatch_ignoring_body(request, path).await
    }

    /// Request stage: build the request and attach `Authorization: Bearer`
    /// iff a credential is currently active. Auth endpoints are sent
    /// without one by construction (no session exists yet).
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match self.session.credential() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Transport call plus response stage, yielding a typed body.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<T, ApiError> {
        let bytes = self.send(request, path).await?;
        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::error!(path, "failed to decode response body: {err}");
            ApiError::unclassified(format!("Malformed response from {path}: {err}"))
        })
    }

    /// Transport call plus response stage for endpoints whose success body
    /// is irrelevant (deletes return text or nothing).
    async fn dispatch_ignoring_body(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<(), ApiError> {
        self.send(request, path).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(path, "transport failure: {err}");
                return Err(classify_transport(&err));
            }
        };

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ApiError::unclassified(format!("Failed to read response: {err}")))?;

        if status.is_success() {
            tracing::debug!(path, status = %status, "request succeeded");
            return Ok(bytes.to_vec());
        }

        let error = ApiError::from_response(status, &bytes);
        tracing::warn!(path, status = %status, message = error.user_message(), "request failed");
        if status == StatusCode::UNAUTHORIZED {
            self.apply_unauthorized_policy(path);
        }
        Err(error)
    }

    /// The one caller-invisible side effect: a 401 from a protected
    /// endpoint means the credential is no longer honored, so the session
    /// is destroyed and the client is redirected to the login page. Auth
    /// endpoints and the auth pages themselves are exempt, which keeps a
    /// failed login from looping back into itself.
    fn apply_unauthorized_policy(&self, path: &str) {
        if path.starts_with("/auth") || self.navigator.on_auth_page() {
            return;
        }
        tracing::info!(path, "credential rejected, clearing session");
        self.session.force_clear();
        self.navigator.push_redirect("/login");
    }
}

fn classify_transport(err: &reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::timeout()
    } else if err.is_connect() {
        ApiError::network_unreachable()
    } else {
        ApiError::unclassified(err.to_string())
    }
}
