//! Configuration: types, default paths, XML settings file, env overrides,
//! and validation. Re-exports keep the public surface flat for callers.

pub mod env;
pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use env::apply_env_overrides;
pub use paths::{CONFIG_ENV, default_config_path, default_log_path};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, ensure_default_config_exists, load_config};

/// Defaults used when neither config file, env vars nor flags say otherwise.
pub const SOURCE_ROOT_DEFAULT: &str = "unsorted";
pub const TARGET_ROOT_DEFAULT: &str = "sorted";
