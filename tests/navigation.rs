//! Navigation guard scenarios over the dashboard route table.

use taskboard::router::{
    Decision, MemoryStore, NavigationGuard, NavigationIntent, RouteError, RouteTable,
    StoredCredential, ACCESS_TOKEN_KEY, LOGIN_ROUTE,
};

#[test]
fn dashboard_without_marker_redirects_to_login() -> Result<(), RouteError> {
    let table = RouteTable::standard();
    let store = MemoryStore::new();
    let guard = NavigationGuard::new(StoredCredential::new(&store));

    let navigation = guard.navigate(&table, "/dashboard", None)?;
    assert_eq!(navigation.decision, Decision::Redirect { name: LOGIN_ROUTE });
    assert_eq!(navigation.destination.name, "login");

    Ok(())
}

#[test]
fn signup_without_marker_is_allowed() -> Result<(), RouteError> {
    let table = RouteTable::standard();
    let store = MemoryStore::new();
    let guard = NavigationGuard::new(StoredCredential::new(&store));

    let navigation = guard.navigate(&table, "/signup", None)?;
    assert_eq!(navigation.decision, Decision::Allow);
    assert_eq!(navigation.destination.name, "signup");

    Ok(())
}

#[test]
fn login_then_logout_flips_protected_routes() {
    let table = RouteTable::standard();
    let store = MemoryStore::new();
    let guard = NavigationGuard::new(StoredCredential::new(&store));

    let protected: Vec<_> = table.iter().filter(|route| route.requires_auth).collect();
    assert_eq!(protected.len(), 4);

    store.set(ACCESS_TOKEN_KEY, "opaque-token");
    for route in &protected {
        let source = table.by_name("login");
        assert_eq!(guard.decide(&NavigationIntent::new(route, source)), Decision::Allow);
    }

    store.remove(ACCESS_TOKEN_KEY);
    for route in &protected {
        assert_eq!(
            guard.decide(&NavigationIntent::new(route, None)),
            Decision::Redirect { name: LOGIN_ROUTE }
        );
    }
}

#[test]
fn public_routes_ignore_marker_state() -> Result<(), RouteError> {
    let table = RouteTable::standard();
    let store = MemoryStore::new();
    let guard = NavigationGuard::new(StoredCredential::new(&store));

    for path in ["/", "/signup", "/verify-email/", "/verify-email?token=abc"] {
        assert_eq!(guard.navigate(&table, path, None)?.decision, Decision::Allow);
        store.set(ACCESS_TOKEN_KEY, "opaque-token");
        assert_eq!(guard.navigate(&table, path, None)?.decision, Decision::Allow);
        store.remove(ACCESS_TOKEN_KEY);
    }

    Ok(())
}
