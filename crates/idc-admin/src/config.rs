//! Command-line configuration.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use thiserror::Error;

use crate::api::DEFAULT_ENDPOINT;
use crate::domain::{Credentials, TableLayout};

/// Configuration errors detected before any network or UI activity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Please provide both username and password")]
    MissingCredentials,
}

/// IDC-Admin: Dallas IDC server console
#[derive(Parser, Debug)]
#[command(name = "idc-admin")]
#[command(version, about = "TUI console for listing and managing Dallas IDC servers")]
pub struct Args {
    /// API username
    #[arg(long)]
    pub username: Option<String>,

    /// API password
    #[arg(long)]
    pub password: Option<String>,

    /// Server collection endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Table column set
    #[arg(long, value_enum, default_value_t = TableLayout::Full)]
    pub layout: TableLayout,

    /// Log filter directive (e.g. `info`, `idc_admin=debug`)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Append logs to this file; logging is off without it
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Credentials from the flags. Both must be present and non-empty.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => {
                Ok(Credentials::new(user, pass))
            }
            _ => Err(ConfigError::MissingCredentials),
        }
    }
}

/// Usage text printed when the credentials are missing.
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// Startup check run before logging, the network or the terminal.
///
/// On failure returns the full stderr text: the error followed by usage.
pub fn credentials_or_usage(args: &Args) -> Result<Credentials, String> {
    args.credentials().map_err(|e| format!("{}\n{}", e, usage()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("idc-admin").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--username", "ops", "--password", "secret"]);
        assert_eq!(args.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(args.layout, TableLayout::Full);
        assert_eq!(args.log_level, "info");
        assert!(args.log_file.is_none());
        assert_eq!(
            args.credentials().unwrap(),
            Credentials::new("ops", "secret")
        );
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let args = parse(&["--username", "", "--password", ""]);
        assert_eq!(args.credentials(), Err(ConfigError::MissingCredentials));
    }

    #[test]
    fn test_missing_password_rejected() {
        let args = parse(&["--username", "ops"]);
        assert_eq!(args.credentials(), Err(ConfigError::MissingCredentials));
        assert_eq!(parse(&[]).credentials(), Err(ConfigError::MissingCredentials));
    }

    #[test]
    fn test_layout_and_endpoint_flags() {
        let args = parse(&[
            "--username",
            "ops",
            "--password",
            "secret",
            "--layout",
            "compact",
            "--endpoint",
            "http://127.0.0.1:8080/v1/server",
        ]);
        assert_eq!(args.layout, TableLayout::Compact);
        assert_eq!(args.endpoint, "http://127.0.0.1:8080/v1/server");
    }

    #[test]
    fn test_startup_check_prints_usage() {
        let args = parse(&["--username", "", "--password", ""]);
        let message = credentials_or_usage(&args).unwrap_err();
        assert!(message.starts_with("Please provide both username and password\n"));
        assert!(message.contains("--username"));
        assert!(message.contains("--password"));

        let args = parse(&["--username", "ops", "--password", "secret"]);
        assert_eq!(
            credentials_or_usage(&args).unwrap(),
            Credentials::new("ops", "secret")
        );
    }

    #[test]
    fn test_usage_lists_flags() {
        let text = usage();
        assert!(text.contains("--username"));
        assert!(text.contains("--password"));
    }
}
