//! Flows that compose several resource clients.

pub mod completion;
pub mod dashboard;

pub use completion::{complete_appointment, CompletionReport, VisitOutcome};
pub use dashboard::{enrich_with_doctor_names, patient_overview, EnrichedAppointment, PatientOverview};
