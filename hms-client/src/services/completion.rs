//! Doctor "complete appointment" flow.
//!
//! Marks the appointment completed, then writes the visit's medical
//! record: an existing record tied to the appointment is updated in
//! place, and one is created only when the lookup says none exists. Any
//! other lookup failure aborts the flow rather than risking a duplicate
//! record over unknown server state.

use client_core::ApiError;

use crate::api::{AppointmentApi, MedicalRecordApi};
use crate::models::{
    Appointment, AppointmentRequest, AppointmentStatus, MedicalRecord, MedicalRecordRequest,
};

/// What the doctor recorded for the visit.
#[derive(Debug, Clone)]
pub struct VisitOutcome {
    pub diagnosis: String,
    pub prescription: String,
    pub doctor_notes: Option<String>,
}

#[derive(Debug)]
pub struct CompletionReport {
    pub appointment: Appointment,
    pub record: MedicalRecord,
}

pub async fn complete_appointment(
    appointments: &AppointmentApi,
    records: &MedicalRecordApi,
    appointment: &Appointment,
    outcome: VisitOutcome,
) -> Result<CompletionReport, ApiError> {
    let update = AppointmentRequest {
        patient_id: appointment.patient_id,
        doctor_id: appointment.doctor_id,
        appointment_time: appointment.appointment_time,
        reason_for_visit: appointment.reason_for_visit.clone().unwrap_or_default(),
        status: Some(AppointmentStatus::Completed),
    };
    let completed = appointments.update(appointment.id, &update).await?;

    let record_request = MedicalRecordRequest {
        appointment_id: appointment.id,
        patient_id: appointment.patient_id,
        doctor_id: appointment.doctor_id,
        diagnosis: outcome.diagnosis,
        prescription: outcome.prescription,
        doctor_notes: outcome.doctor_notes,
    };

    let record = match records.by_appointment(appointment.id).await {
        Ok(existing) => {
            tracing::info!(record_id = existing.id, "updating existing medical record");
            records.update(existing.id, &record_request).await?
        }
        Err(err) if err.is_not_found() => {
            tracing::info!(appointment_id = appointment.id, "creating medical record");
            records.create(&record_request).await?
        }
        Err(err) => return Err(err),
    };

    Ok(CompletionReport {
        appointment: completed,
        record,
    })
}
