//! Configuration system for innkeep.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (data directory and explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`INNKEEP_*`)
//! 3. Explicit config file (`--config`)
//! 4. Data directory config (`~/.innkeep/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use innkeep::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir("/srv/innkeep")
//!     .build()
//!     .unwrap();
//!
//! println!("lock wait: {:?}", config.lock_wait());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{BookingConfig, CatalogConfig, Config, OutputFormat};
pub use validator::ConfigValidator;
