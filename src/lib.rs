//! # Taskboard (route gate & verification proxy)
//!
//! `taskboard` holds the two server-independent pieces of the task management
//! dashboard:
//!
//! ## Route access control
//!
//! The dashboard's routes are a static table of descriptors, each carrying an
//! explicit `requires_auth` flag. On every transition the navigation guard
//! checks the target's flag and, for protected routes, asks an injected
//! credential provider whether an `access_token` marker is present. Absent
//! marker means a redirect to the route named `login`. The marker is never
//! validated here; this is a UX gate, real access control lives on the API.
//!
//! ## Email verification proxy
//!
//! `GET /api/proxy?token=...` forwards the token to the backend's
//! `/api/verify-email/<token>/` endpoint and relays the upstream status and
//! JSON body verbatim. Connection failures surface as `500`.

pub mod api;
pub mod cli;
pub mod router;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
