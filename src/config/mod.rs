//! Generator configuration: defaults for the unit header and service settings.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, StorageConfig};
