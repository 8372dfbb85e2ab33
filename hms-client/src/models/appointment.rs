//! Appointment records as served by the appointment service.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Appointment lifecycle states. The backend persists timestamps without a
/// zone, so `NaiveDateTime` matches the wire format exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    #[serde(default)]
    pub patient_email: Option<String>,
    pub doctor_id: i64,
    pub appointment_time: NaiveDateTime,
    #[serde(default)]
    pub reason_for_visit: Option<String>,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for booking or rescheduling an appointment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub appointment_time: NaiveDateTime,
    pub reason_for_visit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
}
