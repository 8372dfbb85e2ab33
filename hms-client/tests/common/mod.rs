//! Test harness: an in-process mock of the hospital API.
//!
//! Spawns an axum router on an OS-assigned port and wires a full SDK
//! instance against it. Mock behavior is driven through `MockState` so
//! individual tests can stage users, doctors, appointments, and failure
//! modes.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use hms_client::config::{ApiSettings, Settings, SessionSettings};
use hms_client::session::SessionStore;
use hms_client::HmsClient;

pub const VALID_EMAIL: &str = "jane@example.com";
pub const VALID_PASSWORD: &str = "secret123";
pub const VALID_TOKEN: &str = "bearer-token-1";

#[derive(Default)]
pub struct MockState {
    /// When set, login answers 200 with a message but no token.
    pub login_omits_token: bool,
    /// When set, every protected endpoint rejects the bearer token,
    /// simulating server-side expiry.
    pub revoke_tokens: bool,
    /// Doctor id -> name. Ids in `failing_doctor_ids` answer 500 instead.
    pub doctors: HashMap<i64, String>,
    pub failing_doctor_ids: HashSet<i64>,
    /// Appointments as raw wire objects.
    pub appointments: Vec<Value>,
    /// Medical records as raw wire objects, keyed by id.
    pub medical_records: HashMap<i64, Value>,
    pub next_record_id: i64,
    pub record_creates: usize,
    pub record_updates: usize,
    /// Emails already registered; used for 409s.
    pub registered_emails: HashSet<String>,
}

pub type SharedState = Arc<Mutex<MockState>>;

pub struct TestApp {
    pub base_url: String,
    pub state: SharedState,
}

impl TestApp {
    pub async fn spawn() -> anyhow::Result<TestApp> {
        client_core::observability::init_test_tracing();

        let state: SharedState = Arc::new(Mutex::new(MockState {
            next_record_id: 1,
            ..MockState::default()
        }));

        let app = mock_router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server failed");
        });

        Ok(TestApp {
            base_url: format!("http://{address}"),
            state,
        })
    }

    pub fn settings(&self) -> Settings {
        self.settings_with_timeout(5)
    }

    pub fn settings_with_timeout(&self, timeout_secs: u64) -> Settings {
        Settings {
            api: ApiSettings {
                base_url: self.base_url.clone(),
                timeout_secs,
            },
            session: SessionSettings { storage_path: None },
        }
    }

    /// SDK instance with an in-memory session store.
    pub fn client(&self) -> HmsClient {
        HmsClient::new(&self.settings()).expect("failed to build client")
    }

    /// SDK instance over a caller-provided store, for persistence tests.
    pub fn client_with_store(&self, store: Arc<dyn SessionStore>) -> HmsClient {
        HmsClient::with_store(&self.settings(), store).expect("failed to build client")
    }

    pub fn client_with_timeout(&self, timeout_secs: u64) -> HmsClient {
        HmsClient::new(&self.settings_with_timeout(timeout_secs)).expect("failed to build client")
    }

    pub fn revoke_tokens(&self) {
        self.state.lock().unwrap().revoke_tokens = true;
    }

    pub fn add_doctor(&self, id: i64, name: &str) {
        self.state.lock().unwrap().doctors.insert(id, name.to_string());
    }

    pub fn fail_doctor(&self, id: i64) {
        self.state.lock().unwrap().failing_doctor_ids.insert(id);
    }

    pub fn add_appointment(&self, id: i64, patient_id: i64, doctor_id: i64, time: &str) {
        self.state.lock().unwrap().appointments.push(json!({
            "id": id,
            "patientId": patient_id,
            "doctorId": doctor_id,
            "appointmentTime": time,
            "reasonForVisit": "Checkup",
            "status": "SCHEDULED",
        }));
    }
}

fn mock_router(state: SharedState) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/api/doctors/:id", get(get_doctor))
        .route("/api/appointments/patient/:id", get(appointments_by_patient))
        .route(
            "/api/appointments/:id",
            get(get_appointment).put(update_appointment),
        )
        .route(
            "/api/medical-records/appointment/:id",
            get(record_by_appointment),
        )
        .route("/api/medical-records", post(create_record))
        .route("/api/medical-records/:id", put(update_record))
        .route("/api/patients/my-profile", get(my_patient_profile))
        .route("/api/slow", get(slow_endpoint))
        .with_state(state)
}

async fn slow_endpoint() -> Response {
    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    Json(json!({})).into_response()
}

fn authorized(state: &SharedState, headers: &HeaderMap) -> bool {
    !state.lock().unwrap().revoke_tokens && bearer_token(headers) == Some(VALID_TOKEN)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "Invalid or expired token" })),
    )
        .into_response()
}

async fn login(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    if state.lock().unwrap().login_omits_token {
        return (StatusCode::OK, Json(json!({ "message": "ok" }))).into_response();
    }

    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if email == VALID_EMAIL && password == VALID_PASSWORD {
        (
            StatusCode::OK,
            Json(json!({
                "message": "Login Successful!",
                "token": VALID_TOKEN,
                "userId": 7,
                "name": "Jane Doe",
                "role": "PATIENT",
            })),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid Username or Password" })),
        )
            .into_response()
    }
}

async fn register(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let mut state = state.lock().unwrap();
    if !state.registered_emails.insert(email.clone()) {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "This email is already registered." })),
        )
            .into_response();
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": 42,
            "name": body["name"],
            "email": email,
            "role": body["role"],
        })),
    )
        .into_response()
}

async fn get_doctor(State(state): State<SharedState>, Path(id): Path<i64>) -> Response {
    let state = state.lock().unwrap();
    if state.failing_doctor_ids.contains(&id) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "doctor service exploded" })),
        )
            .into_response();
    }
    match state.doctors.get(&id) {
        Some(name) => Json(json!({
            "id": id,
            "name": name,
            "phoneNumber": "555-0000",
            "specialization": "General Medicine",
            "isAvailable": true,
        }))
        .into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn appointments_by_patient(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(patient_id): Path<i64>,
) -> Response {
    if !authorized(&state, &headers) {
        return unauthorized();
    }
    let state = state.lock().unwrap();
    let matching: Vec<&Value> = state
        .appointments
        .iter()
        .filter(|apt| apt["patientId"].as_i64() == Some(patient_id))
        .collect();
    Json(json!(matching)).into_response()
}

async fn get_appointment(State(state): State<SharedState>, Path(id): Path<i64>) -> Response {
    let state = state.lock().unwrap();
    let existing = state
        .appointments
        .iter()
        .find(|apt| apt["id"].as_i64() == Some(id));
    match existing {
        Some(appointment) => Json(appointment.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn update_appointment(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let state = state.lock().unwrap();
    let existing = state
        .appointments
        .iter()
        .find(|apt| apt["id"].as_i64() == Some(id));
    match existing {
        Some(existing) => {
            let mut updated = existing.clone();
            updated["status"] = body["status"].clone();
            updated["appointmentTime"] = body["appointmentTime"].clone();
            Json(updated).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn record_by_appointment(
    State(state): State<SharedState>,
    Path(appointment_id): Path<i64>,
) -> Response {
    let state = state.lock().unwrap();
    let existing = state
        .medical_records
        .values()
        .find(|record| record["appointmentId"].as_i64() == Some(appointment_id));
    match existing {
        Some(record) => Json(record.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn create_record(State(state): State<SharedState>, Json(body): Json<Value>) -> Response {
    let mut state = state.lock().unwrap();
    let id = state.next_record_id;
    state.next_record_id += 1;
    state.record_creates += 1;

    let mut record = body;
    record["id"] = json!(id);
    state.medical_records.insert(id, record.clone());
    Json(record).into_response()
}

async fn update_record(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.record_updates += 1;

    let mut record = body;
    record["id"] = json!(id);
    state.medical_records.insert(id, record.clone());
    Json(record).into_response()
}

async fn my_patient_profile(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    if !authorized(&state, &headers) {
        return unauthorized();
    }
    Json(json!({
        "id": 3,
        "firstName": "Jane",
        "lastName": "Doe",
        "age": 34,
        "phoneNumber": "555-1234",
    }))
    .into_response()
}
