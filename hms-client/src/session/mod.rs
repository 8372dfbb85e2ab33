pub mod handle;
pub mod manager;
pub mod store;

pub use handle::{SessionHandle, SessionState};
pub use manager::SessionManager;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoreError};
