//! Doctor directory and profile endpoints.

use std::sync::Arc;

use client_core::ApiError;

use crate::http::ApiClient;
use crate::models::{Doctor, DoctorProfileRequest};

pub struct DoctorApi {
    client: Arc<ApiClient>,
}

impl DoctorApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Doctor>, ApiError> {
        self.client.get("/api/doctors").await
    }

    pub async fn get(&self, id: i64) -> Result<Doctor, ApiError> {
        self.client.get(&format!("/api/doctors/{id}")).await
    }

    pub async fn by_specialization(&self, specialization: &str) -> Result<Vec<Doctor>, ApiError> {
        self.client
            .get_query(
                "/api/doctors/specialization",
                &[("specialization", specialization.to_string())],
            )
            .await
    }

    pub async fn by_availability(&self, available: bool) -> Result<Vec<Doctor>, ApiError> {
        self.client
            .get_query("/api/doctors/availability", &[("status", available.to_string())])
            .await
    }

    /// The authenticated doctor's own profile.
    pub async fn my_profile(&self) -> Result<Doctor, ApiError> {
        self.client.get("/api/doctors/my-profile").await
    }

    pub async fn create_profile(&self, profile: &DoctorProfileRequest) -> Result<Doctor, ApiError> {
        self.client.post("/api/doctors/my-profile", profile).await
    }

    pub async fn update(&self, id: i64, profile: &DoctorProfileRequest) -> Result<Doctor, ApiError> {
        self.client.put(&format!("/api/doctors/{id}"), profile).await
    }

    pub async fn update_availability(&self, id: i64, available: bool) -> Result<Doctor, ApiError> {
        self.client
            .patch_query(
                &format!("/api/doctors/{id}/availability"),
                &[("status", available.to_string())],
            )
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/doctors/{id}")).await
    }
}
