//! The single owner of session mutations.
//!
//! Constructed once at startup and passed to whatever needs it; there is
//! no ambient singleton. Mutators are expected to be driven serially by
//! user actions — overlapping logout/login calls resolve last-writer-wins,
//! an accepted limitation rather than a guarantee.

use std::sync::Arc;

use client_core::ApiError;
use validator::Validate;

use crate::api::AuthApi;
use crate::http::ApiClient;
use crate::models::{
    Identity, IdentityUpdate, LoginRequest, RegisterRequest, RegisteredUser, Session,
};

use super::handle::{SessionHandle, SessionState};

pub struct SessionManager {
    auth: AuthApi,
    handle: SessionHandle,
}

impl SessionManager {
    pub fn new(api: Arc<ApiClient>, handle: SessionHandle) -> Self {
        Self {
            auth: AuthApi::new(api),
            handle,
        }
    }

    pub fn handle(&self) -> &SessionHandle {
        &self.handle
    }

    /// Populate the in-memory session from durable storage.
    ///
    /// Missing or unreadable data yields an anonymous state and clears
    /// whatever was stored; the token is trusted locally until a protected
    /// request rejects it — no network validation happens here.
    pub fn restore(&self) -> SessionState {
        let restored = match self.handle.store().load() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!("discarding unreadable persisted session: {err}");
                if let Err(err) = self.handle.store().clear() {
                    tracing::warn!("failed to clear persisted session: {err}");
                }
                None
            }
        };

        match restored {
            Some(session) => {
                tracing::info!(user_id = session.identity.id, "session restored");
                self.handle.set_active(session);
            }
            None => self.handle.set_anonymous(),
        }
        self.handle.state()
    }

    /// Authenticate against the backend and establish a session.
    ///
    /// A 2xx response without a token is a failure — the server's own
    /// message is surfaced when it sent one — and never establishes a
    /// session. On success the credential and identity are persisted and
    /// activated together.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate().map_err(validation_error)?;

        let response = self.auth.login(&request).await?;

        let token = match response.token {
            Some(token) if !token.is_empty() => token,
            _ => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Login failed: no token received from server".to_string());
                tracing::warn!("login response carried no token");
                return Err(ApiError::unclassified(message));
            }
        };

        let identity = match (response.user_id, response.role) {
            (Some(id), Some(role)) => Identity {
                id,
                name: response.name.unwrap_or_default(),
                email: request.email,
                role,
            },
            _ => {
                tracing::warn!("login response carried no usable identity");
                return Err(ApiError::unclassified(
                    "Login failed: incomplete response from server",
                ));
            }
        };

        let session = Session { token, identity };
        if let Err(err) = self.handle.store().save(&session) {
            // The session still works for this run; the next restore just
            // finds nothing.
            tracing::warn!("failed to persist session: {err}");
        }
        self.handle.set_active(session.clone());
        tracing::info!(user_id = session.identity.id, role = %session.identity.role, "logged in");
        Ok(session)
    }

    /// Create an account. Never establishes a session; callers log in
    /// explicitly afterwards.
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisteredUser, ApiError> {
        request.validate().map_err(validation_error)?;
        let user = self.auth.register(&request).await?;
        tracing::info!(user_id = user.id, role = %user.role, "registered");
        Ok(user)
    }

    /// Clear the session from memory and durable storage. Idempotent, no
    /// network call, cannot fail from the caller's point of view.
    pub fn logout(&self) {
        self.handle.force_clear();
        tracing::info!("logged out");
    }

    /// Merge profile fields into the active identity and re-persist. The
    /// role and id never change. Fails when no session is active.
    pub fn update_identity(&self, update: IdentityUpdate) -> Result<Identity, ApiError> {
        let mut session = match self.handle.state() {
            SessionState::Active(session) => session,
            _ => {
                return Err(ApiError::unclassified(
                    "Cannot update profile without an active session",
                ))
            }
        };

        if let Some(name) = update.name {
            session.identity.name = name;
        }
        if let Some(email) = update.email {
            session.identity.email = email;
        }

        if let Err(err) = self.handle.store().save(&session) {
            tracing::warn!("failed to persist updated identity: {err}");
        }
        let identity = session.identity.clone();
        self.handle.set_active(session);
        Ok(identity)
    }
}

fn validation_error(errors: validator::ValidationErrors) -> ApiError {
    let mut messages = Vec::new();
    for (field, failures) in errors.field_errors() {
        for failure in failures {
            match &failure.message {
                Some(message) => messages.push(message.to_string()),
                None => messages.push(format!("Invalid value for {field}")),
            }
        }
    }
    if messages.is_empty() {
        ApiError::validation("Invalid input")
    } else {
        ApiError::validation(messages.join(", "))
    }
}
