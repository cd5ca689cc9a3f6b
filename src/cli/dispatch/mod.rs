//! Command-line argument dispatch.
//!
//! Maps the matched subcommand to the action the binary executes.

use crate::cli::actions::{navigate, proxy, Action};
use crate::cli::commands::{navigate::CMD_NAVIGATE, proxy::CMD_PROXY};
use crate::cli::commands::{navigate as navigate_cmd, proxy as proxy_cmd};
use anyhow::{anyhow, Result};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((CMD_PROXY, sub_m)) => {
            let options = proxy_cmd::Options::parse(sub_m)?;

            Ok(Action::Proxy(proxy::Args {
                port: options.port,
                upstream_url: options.upstream_url,
            }))
        }
        Some((CMD_NAVIGATE, sub_m)) => {
            let options = navigate_cmd::Options::parse(sub_m)?;

            Ok(Action::Navigate(navigate::Args {
                path: options.path,
                from: options.from,
                storage: options.storage,
            }))
        }
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}
