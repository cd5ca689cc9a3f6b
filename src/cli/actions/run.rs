use crate::cli::actions::{navigate, proxy, Action};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Proxy(args) => proxy::execute(args).await,
        Action::Navigate(args) => navigate::execute(&args),
    }
}
