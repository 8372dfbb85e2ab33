//! Authentication endpoints. These are the only calls sent before a
//! credential exists; the adapter simply has nothing to attach yet.

use std::sync::Arc;

use client_core::ApiError;

use crate::http::ApiClient;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisteredUser};

pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.client.post("/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        self.client.post("/auth/register", request).await
    }
}
