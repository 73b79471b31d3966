//! Tracing setup.
//!
//! The terminal belongs to the UI while the console runs, so log output only
//! goes to a file and only when one is configured.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Does nothing when `log_file` is `None`.
pub fn init(level: &str, log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let env_filter =
        EnvFilter::try_new(level).with_context(|| format!("Invalid log level {:?}", level))?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_file() {
        assert!(init("not a [valid filter", None).is_ok());
    }

    #[test]
    fn test_rejects_bad_filter() {
        let path = std::env::temp_dir().join("idc-admin-logging-test.log");
        assert!(init("idc_admin=loudest", Some(&path)).is_err());
    }
}
