//! Output artifact naming
//!
//! The packaged file suffix depends on signing readiness and module kind;
//! the APK location depends on IDE overrides. Both are supplied by the
//! caller.

use std::path::PathBuf;
use serde::Serialize;

/// APK file extension
pub const DOT_ANDROID_PACKAGE: &str = ".apk";

/// Suffix for packages that are not known to be signed
pub const UNSIGNED_SUFFIX: &str = "-unsigned.apk";

/// Chooses the suffix of a packaged artifact
pub trait OutputSuffixPolicy: Send + Sync + std::fmt::Debug {
    fn suffix(&self) -> &'static str;
}

/// Signing state known at configuration time.
///
/// Only the base module knows whether it is signed; other modules are never
/// marked unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SigningReadiness {
    pub signed: bool,
    pub base_module: bool,
}

impl OutputSuffixPolicy for SigningReadiness {
    fn suffix(&self) -> &'static str {
        if self.signed || !self.base_module {
            DOT_ANDROID_PACKAGE
        } else {
            UNSIGNED_SUFFIX
        }
    }
}

/// Always names packages as unsigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlwaysUnsigned;

impl OutputSuffixPolicy for AlwaysUnsigned {
    fn suffix(&self) -> &'static str {
        UNSIGNED_SUFFIX
    }
}

/// Where packaged APKs go, in priority order:
/// explicit location, then the device-targeted location, then the default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationOverrides {
    /// Explicit location requested by the IDE
    pub explicit_location: Option<PathBuf>,
    /// Build optimized for one device (density, ABI or API set)
    pub custom_build: bool,
}
