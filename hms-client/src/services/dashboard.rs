//! Patient dashboard assembly.
//!
//! Appointments come back from the appointment service carrying only a
//! doctor id; the dashboard wants names. Lookups for each appointment run
//! concurrently and independently: no ordering is guaranteed, and one
//! failed lookup substitutes a placeholder instead of aborting the batch.

use chrono::NaiveDateTime;
use client_core::ApiError;
use futures::future::join_all;

use crate::api::{AppointmentApi, DoctorApi};
use crate::models::{Appointment, AppointmentStatus};

/// Placeholder shown when a doctor lookup fails.
const FALLBACK_DOCTOR_NAME: &str = "Doctor";

/// How many upcoming appointments the overview enriches with names.
const UPCOMING_PREVIEW: usize = 3;

#[derive(Debug, Clone)]
pub struct EnrichedAppointment {
    pub appointment: Appointment,
    pub doctor_name: String,
}

#[derive(Debug)]
pub struct PatientOverview {
    /// The nearest upcoming appointments, enriched with doctor names.
    pub upcoming: Vec<EnrichedAppointment>,
    pub upcoming_count: usize,
    pub past_count: usize,
}

/// Fetch and summarize a patient's appointments as the dashboard shows
/// them: upcoming means in the future and not cancelled, past means
/// elapsed or completed.
pub async fn patient_overview(
    appointments: &AppointmentApi,
    doctors: &DoctorApi,
    patient_id: i64,
    now: NaiveDateTime,
) -> Result<PatientOverview, ApiError> {
    let all = appointments.by_patient(patient_id).await?;

    let upcoming: Vec<Appointment> = all
        .iter()
        .filter(|apt| apt.appointment_time > now && apt.status != AppointmentStatus::Cancelled)
        .cloned()
        .collect();
    let past_count = all
        .iter()
        .filter(|apt| apt.appointment_time <= now || apt.status == AppointmentStatus::Completed)
        .count();

    let upcoming_count = upcoming.len();
    let preview: Vec<Appointment> = upcoming.into_iter().take(UPCOMING_PREVIEW).collect();
    let enriched = enrich_with_doctor_names(doctors, preview).await;

    Ok(PatientOverview {
        upcoming: enriched,
        upcoming_count,
        past_count,
    })
}

/// Resolve doctor names for a batch of appointments with one concurrent
/// fetch per appointment. Failures are caught per appointment and replaced
/// with a fallback name.
pub async fn enrich_with_doctor_names(
    doctors: &DoctorApi,
    appointments: Vec<Appointment>,
) -> Vec<EnrichedAppointment> {
    let lookups = appointments.into_iter().map(|appointment| async move {
        let doctor_name = match doctors.get(appointment.doctor_id).await {
            Ok(doctor) => doctor.name,
            Err(err) => {
                tracing::warn!(
                    doctor_id = appointment.doctor_id,
                    "failed to fetch doctor, using placeholder: {}",
                    err.user_message()
                );
                FALLBACK_DOCTOR_NAME.to_string()
            }
        };
        EnrichedAppointment {
            appointment,
            doctor_name,
        }
    });

    join_all(lookups).await
}
