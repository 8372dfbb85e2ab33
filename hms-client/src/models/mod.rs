pub mod appointment;
pub mod doctor;
pub mod medical_record;
pub mod patient;
pub mod user;

pub use appointment::{Appointment, AppointmentRequest, AppointmentStatus};
pub use doctor::{Doctor, DoctorProfileRequest};
pub use medical_record::{MedicalRecord, MedicalRecordRequest};
pub use patient::{Patient, PatientProfileRequest};
pub use user::{
    Identity, IdentityUpdate, LoginRequest, LoginResponse, RegisterRequest, RegisteredUser, Role,
    Session,
};
