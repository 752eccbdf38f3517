//! R-Droid 2026 - project options and variant output layout
//! 
//! Resolves a project's build options and computes stable, collision-free
//! names and output locations for every build variant.
//! 
//! ## Architecture
//! 
//! - `r-droid-options`: typed, versioned registry of project options
//! - `r-droid-variant`: variant naming and build directory layout
//! - `r-droid-core`: project configuration and build sessions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;

// Re-export main components for library usage
pub use r_droid_core as core;
pub use r_droid_options as options;
pub use r_droid_variant as variant;

/// Prelude module for convenient imports
pub mod prelude {
    pub use r_droid_core::{BuildSession, ProjectConfig};
    pub use r_droid_options::{
        ApiStage, BooleanOption, IntegerOption, ProjectOption, ProjectOptions, RawValue,
        StringOption,
    };
    pub use r_droid_variant::{
        BuildDirectory, ComponentKind, NamingPolicy, VariantIdentity, VariantPathResolver,
    };
}
