//! client-core: Shared infrastructure for the hms client SDK.
pub mod error;
pub mod observability;

pub use error::ApiError;

pub use serde;
pub use serde_json;
pub use tracing;
