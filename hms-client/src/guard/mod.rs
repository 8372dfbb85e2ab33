//! Role-gated navigation decisions.
//!
//! The guard is a pure, synchronous function over the session state and a
//! declared navigation target. It never mutates the session and holds no
//! state of its own; the route table is the static declaration of which
//! roles may enter which subtree.

use once_cell::sync::Lazy;

use crate::models::Role;
use crate::session::SessionState;

/// A declared route and the roles allowed to enter it. An empty role set
/// means the route is public.
#[derive(Debug, Clone)]
pub struct NavigationTarget {
    pattern: RoutePattern,
    allowed_roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Matches the path exactly.
    Exact(&'static str),
    /// Matches the prefix itself and everything below it, respecting
    /// segment boundaries: `/doctor` matches `/doctor/settings` but not
    /// `/doctors`.
    Subtree(&'static str),
}

impl NavigationTarget {
    pub fn public(pattern: RoutePattern) -> Self {
        Self {
            pattern,
            allowed_roles: Vec::new(),
        }
    }

    pub fn restricted(pattern: RoutePattern, allowed_roles: &[Role]) -> Self {
        Self {
            pattern,
            allowed_roles: allowed_roles.to_vec(),
        }
    }

    pub fn is_public(&self) -> bool {
        self.allowed_roles.is_empty()
    }

    pub fn allows(&self, role: Role) -> bool {
        self.is_public() || self.allowed_roles.contains(&role)
    }

    fn matches(&self, path: &str) -> bool {
        match self.pattern {
            RoutePattern::Exact(pattern) => path == pattern,
            RoutePattern::Subtree(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

/// Outcome of evaluating a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session restore has not finished; show a placeholder.
    Loading,
    /// Render the target.
    Render,
    /// No session and the target needs one. Carries the originally
    /// requested path so login can return the user afterward.
    RedirectToLogin { return_to: String },
    /// Session active but the role is not permitted.
    RedirectHome,
}

/// Decide what happens for `path` given the current session state.
///
/// Public targets render regardless of session state, including while the
/// restore is still pending.
pub fn evaluate(state: &SessionState, target: &NavigationTarget, path: &str) -> AccessDecision {
    if target.is_public() {
        return AccessDecision::Render;
    }
    match state {
        SessionState::Restoring => AccessDecision::Loading,
        SessionState::Anonymous => AccessDecision::RedirectToLogin {
            return_to: path.to_string(),
        },
        SessionState::Active(session) => {
            if target.allows(session.identity.role) {
                AccessDecision::Render
            } else {
                AccessDecision::RedirectHome
            }
        }
    }
}

/// The application's static route table.
pub struct RouteTable {
    routes: Vec<NavigationTarget>,
}

impl RouteTable {
    pub fn new(routes: Vec<NavigationTarget>) -> Self {
        Self { routes }
    }

    /// The hospital application's route map: public marketing pages, the
    /// auth pages, and one role-gated subtree per dashboard.
    pub fn default_table() -> &'static RouteTable {
        static TABLE: Lazy<RouteTable> = Lazy::new(|| {
            use RoutePattern::{Exact, Subtree};
            RouteTable::new(vec![
                NavigationTarget::public(Exact("/")),
                NavigationTarget::public(Exact("/about")),
                NavigationTarget::public(Exact("/services")),
                NavigationTarget::public(Subtree("/doctors")),
                NavigationTarget::public(Exact("/appointments")),
                NavigationTarget::public(Exact("/contact")),
                NavigationTarget::public(Exact("/blog")),
                NavigationTarget::public(Exact("/testimonials")),
                NavigationTarget::public(Exact("/login")),
                NavigationTarget::public(Exact("/register")),
                NavigationTarget::restricted(Subtree("/patient"), &[Role::Patient]),
                NavigationTarget::restricted(Subtree("/doctor"), &[Role::Doctor]),
                NavigationTarget::restricted(Subtree("/admin"), &[Role::Admin]),
            ])
        });
        &TABLE
    }

    pub fn lookup(&self, path: &str) -> Option<&NavigationTarget> {
        self.routes.iter().find(|target| target.matches(path))
    }

    /// Route resolution plus guard evaluation. Unknown paths redirect home,
    /// matching the application's catch-all route.
    pub fn decide(&self, state: &SessionState, path: &str) -> AccessDecision {
        match self.lookup(path) {
            Some(target) => evaluate(state, target, path),
            None => AccessDecision::RedirectHome,
        }
    }
}
