//! Static route table for the dashboard.

use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("duplicate route name: {0}")]
    DuplicateName(String),
    #[error("no route matches path: {0}")]
    NotFound(String),
    #[error("unknown route name: {0}")]
    UnknownRoute(String),
}

/// Renderable unit bound to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Dashboard,
    AddTask,
    ChangePassword,
    Signup,
    UpdateProfile,
    EmailVerification,
}

/// A named, path-addressable navigation target.
///
/// `requires_auth` has no default: every descriptor states its access
/// requirement when it is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub requires_auth: bool,
}

impl RouteDescriptor {
    #[must_use]
    pub const fn new(path: &'static str, name: &'static str, view: View, requires_auth: bool) -> Self {
        Self {
            path,
            name,
            view,
            requires_auth,
        }
    }

    /// Structural match against a requested location.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        normalize_path(self.path) == normalize_path(path)
    }
}

const STANDARD_ROUTES: [RouteDescriptor; 7] = [
    RouteDescriptor::new("/", "login", View::Login, false),
    RouteDescriptor::new("/dashboard", "dashboard", View::Dashboard, true),
    RouteDescriptor::new("/add-task", "add-task", View::AddTask, true),
    RouteDescriptor::new("/change-password", "change-password", View::ChangePassword, true),
    RouteDescriptor::new("/signup", "signup", View::Signup, false),
    RouteDescriptor::new("/update-profile", "update-profile", View::UpdateProfile, true),
    RouteDescriptor::new("/verify-email/", "verify-email", View::EmailVerification, false),
];

/// Immutable, ordered collection of route descriptors with unique names.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Build a table from descriptors in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateName`] if two descriptors share a name.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteError> {
        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            if !seen.insert(route.name) {
                return Err(RouteError::DuplicateName(route.name.to_string()));
            }
        }

        Ok(Self { routes })
    }

    /// The dashboard's route table.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            routes: STANDARD_ROUTES.to_vec(),
        }
    }

    /// First descriptor whose path structurally matches `path`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.matches(path))
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

// Query and fragment are dropped, the trailing slash is optional and matching
// is case-insensitive.
fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_ascii_lowercase()
    } else {
        format!("/{}", trimmed.to_ascii_lowercase())
    }
}
