use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

pub const CMD_NAVIGATE: &str = "navigate";
pub const ARG_PATH: &str = "path";
pub const ARG_FROM: &str = "from";
pub const ARG_STORAGE: &str = "storage";

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_NAVIGATE)
        .about("Evaluate the navigation guard for a dashboard path")
        .arg(
            Arg::new(ARG_PATH)
                .help("Target path, e.g. /dashboard")
                .required(true),
        )
        .arg(
            Arg::new(ARG_FROM)
                .long("from")
                .help("Path the navigation starts from"),
        )
        .arg(
            Arg::new(ARG_STORAGE)
                .short('s')
                .long("storage")
                .help("JSON snapshot of client storage holding the access_token marker")
                .default_value("storage.json")
                .env("TASKBOARD_STORAGE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

#[derive(Debug)]
pub struct Options {
    pub path: String,
    pub from: Option<String>,
    pub storage: PathBuf,
}

impl Options {
    /// # Errors
    /// Returns an error if the target path is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let path = matches
            .get_one::<String>(ARG_PATH)
            .cloned()
            .context("missing required argument: <path>")?;
        let from = matches.get_one::<String>(ARG_FROM).cloned();
        let storage = matches
            .get_one::<PathBuf>(ARG_STORAGE)
            .cloned()
            .unwrap_or_else(|| PathBuf::from("storage.json"));

        Ok(Self {
            path,
            from,
            storage,
        })
    }
}
