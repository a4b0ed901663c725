//! Configuration module for tagtree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TAGTREE_*)
//! 3. Explicit `--config <PATH>` or `./tagtree.toml`
//! 4. User config (`<config dir>/tagtree/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, ForestConfig, OutputConfig, Verbosity};
