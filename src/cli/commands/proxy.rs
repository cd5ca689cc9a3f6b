use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub const CMD_PROXY: &str = "proxy";
pub const ARG_PORT: &str = "port";
pub const ARG_UPSTREAM_URL: &str = "upstream-url";

/// Backend the proxy forwards to unless configured otherwise.
pub const DEFAULT_UPSTREAM_URL: &str = "https://task-management-backend-production-3436.up.railway.app";

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_PROXY)
        .about("Serve the email verification proxy")
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("TASKBOARD_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_UPSTREAM_URL)
                .short('u')
                .long(ARG_UPSTREAM_URL)
                .help("Base URL of the verification backend")
                .long_help(
                    "Base URL of the verification backend. Requests are forwarded to <URL>/api/verify-email/<token>/.",
                )
                .default_value(DEFAULT_UPSTREAM_URL)
                .env("TASKBOARD_UPSTREAM_URL"),
        )
}

#[derive(Debug)]
pub struct Options {
    pub port: u16,
    pub upstream_url: String,
}

impl Options {
    /// # Errors
    /// Returns an error if a required argument is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
        let upstream_url = matches
            .get_one::<String>(ARG_UPSTREAM_URL)
            .cloned()
            .context("missing required argument: --upstream-url")?;

        Ok(Self { port, upstream_url })
    }
}
