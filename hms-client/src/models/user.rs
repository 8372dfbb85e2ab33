//! Accounts, roles, and the authenticated session record.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User role. Closed set, no hierarchy: an admin does not implicitly
/// satisfy a doctor-only or patient-only route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "PATIENT",
            Role::Doctor => "DOCTOR",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user's profile as issued by the server at login.
///
/// `id` and `role` never change for the lifetime of a session; `name` and
/// `email` may be refreshed through `SessionManager::update_identity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// The pairing of bearer token and identity currently active in the
/// client. Both fields are always set together; "authenticated" means the
/// whole record is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
}

/// Profile fields a caller may change on the active identity.
#[derive(Debug, Clone, Default)]
pub struct IdentityUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// The backend's login response: `{ message, token, userId, name, role }`.
///
/// Every field is optional on the wire; a nominally successful response
/// without a token is treated as a login failure, never a session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: Option<String>,
    pub token: Option<String>,
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    pub role: Role,
}

/// Sanitized account record returned by registration. Registration never
/// yields a token; a subsequent explicit login is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}
