//! Configuration system for dotmine.
//!
//! The only setting is the location of the mine. It is resolved from
//! several sources with the following precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`, used for `--mine`)
//! 2. Environment variables (`DOTMINE_DIR`)
//! 3. The configuration file (`~/.config/dotmine/config.yaml`, or `--config`)
//! 4. Built-in defaults (`~/dotmine`)
//!
//! # Examples
//!
//! ```no_run
//! use dotmine::config::ConfigBuilder;
//!
//! let roots = ConfigBuilder::new().build_roots().unwrap();
//! println!("mine: {}", roots.mine().display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, MINE_ENV};
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_MINE_DIR};
pub use validator::ConfigValidator;
