//! Patient directory and profile endpoints.

use std::sync::Arc;

use client_core::ApiError;

use crate::http::ApiClient;
use crate::models::{Patient, PatientProfileRequest};

pub struct PatientApi {
    client: Arc<ApiClient>,
}

impl PatientApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Patient>, ApiError> {
        self.client.get("/api/patients").await
    }

    pub async fn get(&self, id: i64) -> Result<Patient, ApiError> {
        self.client.get(&format!("/api/patients/{id}")).await
    }

    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Patient>, ApiError> {
        self.client
            .get_query("/api/patients/search", &[("name", name.to_string())])
            .await
    }

    /// The authenticated patient's own profile.
    pub async fn my_profile(&self) -> Result<Patient, ApiError> {
        self.client.get("/api/patients/my-profile").await
    }

    pub async fn create(&self, profile: &PatientProfileRequest) -> Result<Patient, ApiError> {
        self.client.post("/api/patients", profile).await
    }

    pub async fn update(&self, id: i64, profile: &PatientProfileRequest) -> Result<Patient, ApiError> {
        self.client.put(&format!("/api/patients/{id}"), profile).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/patients/{id}")).await
    }
}
