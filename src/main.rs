//! Entry point for the textbook reader bridge.
//!
//! Responsibilities here are intentionally minimal:
//! - Load user configuration from `conf/config.toml`.
//! - Build the catalog (a JSON file if given, the sample library otherwise).
//! - Run the JSON command bridge on stdin/stdout until EOF.
//!
//! Logs go to stderr so stdout carries only bridge responses.

mod bridge;

use anyhow::{Context, Result};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use textbook_core::config::{AppConfig, load_config};
use textbook_core::{Catalog, ReaderSession};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(level = %config.log_level, "Starting textbook reader");

    let catalog = load_catalog(parse_args(), &config)?;
    let mut session = ReaderSession::new(catalog, &config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let responses = bridge::run_bridge(&mut session, stdin.lock(), stdout.lock())
        .context("Command bridge failed")?;
    info!(responses, "Input closed; shutting down");
    Ok(())
}

/// Optional first argument: path to a JSON catalog, overriding the config.
fn parse_args() -> Option<PathBuf> {
    env::args().nth(1).map(PathBuf::from)
}

fn load_catalog(arg: Option<PathBuf>, config: &AppConfig) -> Result<Catalog> {
    let path = arg.or_else(|| config.catalog_path.as_ref().map(PathBuf::from));
    match path {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            info!("Using built-in sample catalog");
            Ok(Catalog::sample())
        }
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    if env::var_os("RUST_LOG").is_some() {
        info!("RUST_LOG is set; keeping its filter");
        return;
    }
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_overrides_config_catalog_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string(&Catalog::sample().list_documents()[1..]).unwrap();
        std::fs::write(&path, json).unwrap();

        let config = AppConfig {
            catalog_path: Some("does/not/exist.json".to_string()),
            ..AppConfig::default()
        };
        let catalog = load_catalog(Some(path), &config).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.initial_document().map(|doc| doc.id.as_str()),
            Some("physics-101")
        );
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let config = AppConfig {
            catalog_path: Some("does/not/exist.json".to_string()),
            ..AppConfig::default()
        };
        let err = load_catalog(None, &config).unwrap_err();
        assert!(format!("{err:?}").contains("does/not/exist.json"));
    }

    #[test]
    fn falls_back_to_sample_catalog() {
        let catalog = load_catalog(None, &AppConfig::default()).unwrap();
        assert_eq!(catalog, Catalog::sample());
    }
}
