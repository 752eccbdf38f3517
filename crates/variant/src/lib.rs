//! Variant Paths
//!
//! Computes names and build-output locations for build variants. Every
//! variant identity maps to its own directory tree under the build root,
//! and the same identity always maps to the same strings.

pub mod identity;
pub mod naming;
pub mod directory;
pub mod output;
pub mod resolver;

pub use identity::{ComponentKind, FlavorSelection, VariantIdentity};
pub use naming::{
    append_capitalized, combine_as_camel_case, compute_base_name, compute_base_name_with_splits,
    compute_full_name, compute_full_name_with_splits,
};
pub use directory::{BuildDirectory, Directory, DirectoryProvider};
pub use output::{AlwaysUnsigned, LocationOverrides, OutputSuffixPolicy, SigningReadiness};
pub use resolver::{NamingPolicy, VariantPathResolver};

/// Build output category directories
pub const FD_INTERMEDIATES: &str = "intermediates";
pub const FD_OUTPUTS: &str = "outputs";
pub const FD_GENERATED: &str = "generated";
pub const FD_REPORTS: &str = "reports";

/// Variant path errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    #[error("Directory should not contain '.': segment '{segment}' in '{path}'")]
    PathConfiguration { segment: String, path: String },
    #[error("{what} requested for unexpected component '{component}'")]
    UnexpectedComponent { component: String, what: &'static str },
    #[error("Invalid variant identity: {0}")]
    InvalidIdentity(String),
}
