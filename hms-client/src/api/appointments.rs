//! Appointment booking and lifecycle endpoints.

use std::sync::Arc;

use client_core::ApiError;

use crate::http::ApiClient;
use crate::models::{Appointment, AppointmentRequest};

pub struct AppointmentApi {
    client: Arc<ApiClient>,
}

impl AppointmentApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Appointment>, ApiError> {
        self.client.get("/api/appointments").await
    }

    pub async fn get(&self, id: i64) -> Result<Appointment, ApiError> {
        self.client.get(&format!("/api/appointments/{id}")).await
    }

    pub async fn by_patient(&self, patient_id: i64) -> Result<Vec<Appointment>, ApiError> {
        self.client
            .get(&format!("/api/appointments/patient/{patient_id}"))
            .await
    }

    pub async fn by_doctor(&self, doctor_id: i64) -> Result<Vec<Appointment>, ApiError> {
        self.client
            .get(&format!("/api/appointments/doctor/{doctor_id}"))
            .await
    }

    pub async fn create(&self, request: &AppointmentRequest) -> Result<Appointment, ApiError> {
        self.client.post("/api/appointments", request).await
    }

    pub async fn update(&self, id: i64, request: &AppointmentRequest) -> Result<Appointment, ApiError> {
        self.client.put(&format!("/api/appointments/{id}"), request).await
    }

    pub async fn cancel(&self, id: i64) -> Result<Appointment, ApiError> {
        self.client.patch(&format!("/api/appointments/{id}/cancel")).await
    }
}
