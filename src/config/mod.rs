//! TOML configuration for transition defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AnimationCatalog, Config, Defaults};
