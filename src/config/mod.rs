//! Configuration: TOML file with command-line overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SourceConfig, DEFAULT_CATALOG_URL};
