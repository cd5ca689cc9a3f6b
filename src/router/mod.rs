//! Client-side route access control.
//!
//! The pieces compose leaves first: a [`CredentialStore`] holds the opaque
//! marker, [`StoredCredential`] turns it into a presence signal, the
//! [`RouteTable`] maps paths to descriptors, and the [`NavigationGuard`]
//! combines both into an allow/redirect [`Decision`].

pub mod credentials;
pub mod guard;
pub mod routes;

pub use self::credentials::{
    ACCESS_TOKEN_KEY, CredentialPresence, CredentialStore, FileStore, MemoryStore,
    StoredCredential,
};
pub use self::guard::{Decision, LOGIN_ROUTE, Navigation, NavigationGuard, NavigationIntent};
pub use self::routes::{RouteDescriptor, RouteError, RouteTable, View};
