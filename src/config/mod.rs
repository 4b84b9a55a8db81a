//! Configuration: TOML file with CLI overrides.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, StoreConfig};
