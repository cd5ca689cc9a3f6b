use crate::router::{
    Decision, FileStore, NavigationGuard, RouteError, RouteTable, StoredCredential,
};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Args {
    pub path: String,
    pub from: Option<String>,
    pub storage: PathBuf,
}

/// Run the guard for `args.path` and describe where the client lands.
///
/// # Errors
/// Returns an error if the target or source path matches no route.
pub fn outcome(args: &Args) -> Result<String> {
    let table = RouteTable::standard();
    let guard = NavigationGuard::new(StoredCredential::new(FileStore::new(&args.storage)));

    let source = match &args.from {
        Some(from) => Some(
            table
                .resolve(from)
                .ok_or_else(|| RouteError::NotFound(from.clone()))?,
        ),
        None => None,
    };

    let navigation = guard.navigate(&table, &args.path, source)?;
    let destination = navigation.destination;

    Ok(match navigation.decision {
        Decision::Allow => format!("allow {} ({})", destination.path, destination.name),
        Decision::Redirect { name } => format!("redirect {} ({name})", destination.path),
    })
}

/// Execute the navigate action.
/// # Errors
/// Returns an error if the target or source path matches no route.
pub fn execute(args: &Args) -> Result<()> {
    println!("{}", outcome(args)?);

    Ok(())
}
