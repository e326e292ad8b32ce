//! Parsing and validation of `kiln.toml` project configuration files.
//!
//! This crate reads the optional project configuration file and produces a
//! strongly-typed [`KilnConfig`] whose values override the placer's derived
//! defaults. Every field is optional; unset fields fall back to whatever the
//! caller derives from the netlist.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{discover_config, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
