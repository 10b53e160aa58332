//! Configuration loading for the textbook reader.
//!
//! Settings are read from `conf/config.toml` if present. Missing or invalid
//! entries fall back to defaults so the reader always starts.

mod defaults;
mod io;
mod models;

pub use io::{load_config, parse_config, serialize_config};
pub use models::{AppConfig, FontSize, LogLevel};
