//! Tracks where the client currently "is" and any redirect the SDK has
//! requested. The embedding UI drives `navigate` on every route change and
//! drains `take_redirect` to honor forced redirects (today only the 401
//! logout-and-redirect-to-login policy).

use std::sync::{Arc, RwLock};

const AUTH_PAGES: &[&str] = &["/login", "/register"];

struct NavigatorInner {
    current_path: String,
    pending_redirect: Option<String>,
}

#[derive(Clone)]
pub struct Navigator {
    inner: Arc<RwLock<NavigatorInner>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(NavigatorInner {
                current_path: "/".to_string(),
                pending_redirect: None,
            })),
        }
    }

    /// Record a route change made by the embedding application.
    pub fn navigate(&self, path: &str) {
        let mut inner = self.inner.write().unwrap();
        inner.current_path = path.to_string();
    }

    pub fn current_path(&self) -> String {
        self.inner.read().unwrap().current_path.clone()
    }

    /// Whether the client is on one of the public auth pages.
    pub fn on_auth_page(&self) -> bool {
        let inner = self.inner.read().unwrap();
        AUTH_PAGES.contains(&inner.current_path.as_str())
    }

    pub(crate) fn push_redirect(&self, path: &str) {
        let mut inner = self.inner.write().unwrap();
        inner.pending_redirect = Some(path.to_string());
    }

    /// Consume the pending redirect, if any.
    pub fn take_redirect(&self) -> Option<String> {
        self.inner.write().unwrap().pending_redirect.take()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
