//! Configuration loading, env substitution, and env overrides.
//!
//! Config files: `bacbot.toml`, `bacbot.yaml`, or `bacbot.json`
//! Searched in `./` then `~/.config/bacbot/`.
//!
//! Supports `${ENV_VAR}` substitution in all string values.

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{apply_env_overrides, config_dir, discover_and_load, load_config},
    schema::{BacbotConfig, CatalogConfig, MessengerConfig, ServerConfig},
};
