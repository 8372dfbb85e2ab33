//! Medical record endpoints.

use std::sync::Arc;

use client_core::ApiError;

use crate::http::ApiClient;
use crate::models::{MedicalRecord, MedicalRecordRequest};

pub struct MedicalRecordApi {
    client: Arc<ApiClient>,
}

impl MedicalRecordApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &MedicalRecordRequest) -> Result<MedicalRecord, ApiError> {
        self.client.post("/api/medical-records", request).await
    }

    pub async fn get(&self, id: i64) -> Result<MedicalRecord, ApiError> {
        self.client.get(&format!("/api/medical-records/{id}")).await
    }

    /// The record attached to a completed appointment, when one exists.
    pub async fn by_appointment(&self, appointment_id: i64) -> Result<MedicalRecord, ApiError> {
        self.client
            .get(&format!("/api/medical-records/appointment/{appointment_id}"))
            .await
    }

    pub async fn by_patient(&self, patient_id: i64) -> Result<Vec<MedicalRecord>, ApiError> {
        self.client
            .get(&format!("/api/medical-records/patient/{patient_id}"))
            .await
    }

    pub async fn by_doctor(&self, doctor_id: i64) -> Result<Vec<MedicalRecord>, ApiError> {
        self.client
            .get(&format!("/api/medical-records/doctor/{doctor_id}"))
            .await
    }

    pub async fn update(
        &self,
        id: i64,
        request: &MedicalRecordRequest,
    ) -> Result<MedicalRecord, ApiError> {
        self.client
            .put(&format!("/api/medical-records/{id}"), request)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/medical-records/{id}")).await
    }
}
