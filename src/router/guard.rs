//! Navigation guard.

use super::credentials::CredentialPresence;
use super::routes::{RouteDescriptor, RouteError, RouteTable};
use tracing::{debug, info};

/// Name of the route unauthenticated navigations are sent to. Redirects go by
/// name so they survive path edits.
pub const LOGIN_ROUTE: &str = "login";

/// One route transition; `source` is `None` on the first navigation.
#[derive(Clone, Copy, Debug)]
pub struct NavigationIntent<'a> {
    pub target: &'a RouteDescriptor,
    pub source: Option<&'a RouteDescriptor>,
}

impl<'a> NavigationIntent<'a> {
    #[must_use]
    pub const fn new(target: &'a RouteDescriptor, source: Option<&'a RouteDescriptor>) -> Self {
        Self { target, source }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect { name: &'static str },
}

/// Outcome of [`NavigationGuard::navigate`]: where the client ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation<'a> {
    pub decision: Decision,
    pub destination: &'a RouteDescriptor,
}

pub struct NavigationGuard<P> {
    presence: P,
}

impl<P: CredentialPresence> NavigationGuard<P> {
    pub const fn new(presence: P) -> Self {
        Self { presence }
    }

    /// Allow public targets; allow protected targets only when a credential
    /// marker is present, otherwise redirect to [`LOGIN_ROUTE`].
    pub fn decide(&self, intent: &NavigationIntent<'_>) -> Decision {
        // Public targets never consult the credential store.
        let authenticated = intent
            .target
            .requires_auth
            .then(|| self.presence.is_authenticated());
        let decision = decide(intent.target.requires_auth, authenticated.unwrap_or(false));
        log_decision(intent, authenticated, decision);
        decision
    }

    /// Resolve `path` in `table`, run the guard and resolve the redirect.
    ///
    /// # Errors
    ///
    /// [`RouteError::NotFound`] if nothing matches `path`, and
    /// [`RouteError::UnknownRoute`] if the table has no login route to
    /// redirect to.
    pub fn navigate<'t>(
        &self,
        table: &'t RouteTable,
        path: &str,
        source: Option<&'t RouteDescriptor>,
    ) -> Result<Navigation<'t>, RouteError> {
        let target = table
            .resolve(path)
            .ok_or_else(|| RouteError::NotFound(path.to_string()))?;

        let decision = self.decide(&NavigationIntent::new(target, source));
        let destination = match decision {
            Decision::Allow => target,
            Decision::Redirect { name } => table
                .by_name(name)
                .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?,
        };

        Ok(Navigation {
            decision,
            destination,
        })
    }
}

const fn decide(requires_auth: bool, authenticated: bool) -> Decision {
    if !requires_auth || authenticated {
        Decision::Allow
    } else {
        Decision::Redirect { name: LOGIN_ROUTE }
    }
}

fn log_decision(intent: &NavigationIntent<'_>, authenticated: Option<bool>, decision: Decision) {
    let route = intent.target.name;
    let source = intent.source.map_or("none", |route| route.name);
    match decision {
        Decision::Allow => debug!(route, source, ?authenticated, "navigation allowed"),
        Decision::Redirect { name } => info!(
            route,
            source,
            ?authenticated,
            redirect = name,
            "navigation redirected"
        ),
    }
}
