//! R-Droid Core - project configuration and build sessions
//! 
//! Loads a project's variant configuration, resolves its options into a
//! typed snapshot and hands out one path resolver per declared variant.

pub mod config;
pub mod error;
pub mod session;

pub use config::{ProjectConfig, SigningConfig, CONFIG_FILE_NAME};
pub use error::{CoreError, Result};
pub use session::{location_overrides, BuildSession, VariantReport};

/// R-Droid version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
