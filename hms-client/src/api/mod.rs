//! Typed clients over the resource endpoints of the hospital API.

pub mod appointments;
pub mod auth;
pub mod doctors;
pub mod medical_records;
pub mod patients;

pub use appointments::AppointmentApi;
pub use auth::AuthApi;
pub use doctors::DoctorApi;
pub use medical_records::MedicalRecordApi;
pub use patients::PatientApi;
