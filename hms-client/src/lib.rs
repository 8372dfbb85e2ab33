//! hms-client: Rust client SDK for the hospital-management API.
//!
//! The SDK owns three cooperating pieces: the session manager (single
//! source of truth for who is logged in, durable across restarts), the
//! authenticated HTTP adapter with its normalized error taxonomy, and the
//! role-gated access guard consulted on every navigation. Resource clients
//! for doctors, patients, appointments, and medical records sit on top of
//! the adapter.

pub mod api;
pub mod config;
pub mod guard;
pub mod http;
pub mod models;
pub mod services;
pub mod session;

use std::sync::Arc;

use client_core::ApiError;

use api::{AppointmentApi, DoctorApi, MedicalRecordApi, PatientApi};
use config::Settings;
use guard::{AccessDecision, RouteTable};
use http::{ApiClient, Navigator};
use session::{FileSessionStore, MemorySessionStore, SessionManager, SessionStore};

/// One fully wired client instance: adapter, session, guard, and the
/// resource clients, all sharing the same session handle and navigator.
/// Construct it once at startup and pass it by reference.
pub struct HmsClient {
    api: Arc<ApiClient>,
    session: SessionManager,
    navigator: Navigator,
    doctors: DoctorApi,
    patients: PatientApi,
    appointments: AppointmentApi,
    medical_records: MedicalRecordApi,
}

impl HmsClient {
    /// Build a client from settings, picking the file-backed session store
    /// when a storage path is configured and the in-memory store otherwise.
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let store: Arc<dyn SessionStore> = match &settings.session.storage_path {
            Some(path) => Arc::new(FileSessionStore::new(path)),
            None => Arc::new(MemorySessionStore::new()),
        };
        Self::with_store(settings, store)
    }

    pub fn with_store(
        settings: &Settings,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, ApiError> {
        let handle = session::SessionHandle::new(store);
        let navigator = Navigator::new();
        let api = Arc::new(ApiClient::new(
            &settings.api,
            handle.clone(),
            navigator.clone(),
        )?);
        let session = SessionManager::new(Arc::clone(&api), handle);

        Ok(Self {
            doctors: DoctorApi::new(Arc::clone(&api)),
            patients: PatientApi::new(Arc::clone(&api)),
            appointments: AppointmentApi::new(Arc::clone(&api)),
            medical_records: MedicalRecordApi::new(Arc::clone(&api)),
            api,
            session,
            navigator,
        })
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn doctors(&self) -> &DoctorApi {
        &self.doctors
    }

    pub fn patients(&self) -> &PatientApi {
        &self.patients
    }

    pub fn appointments(&self) -> &AppointmentApi {
        &self.appointments
    }

    pub fn medical_records(&self) -> &MedicalRecordApi {
        &self.medical_records
    }

    /// Guard decision for `path` under the current session state, without
    /// moving the client.
    pub fn decide(&self, path: &str) -> AccessDecision {
        RouteTable::default_table().decide(&self.session.handle().state(), path)
    }

    /// Record a route change and return the guard's decision for it.
    pub fn navigate(&self, path: &str) -> AccessDecision {
        self.navigator.navigate(path);
        self.decide(path)
    }
}
