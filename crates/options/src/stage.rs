//! Option lifecycle stages

use std::fmt;
use serde::Serialize;

/// Release in which an option stopped having any effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Version {
    /// Removed before 4.0; exact release unknown
    Before4_0,
    V7_0,
    V8_0,
}

impl Version {
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Before4_0 => "4.0",
            Version::V7_0 => "7.0",
            Version::V8_0 => "8.0",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API stage of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum ApiStage {
    /// Supported; accepted silently
    Stable,
    /// Accepted with a warning
    Experimental,
    /// No longer has any effect. Values still parse so old configurations load.
    Removed {
        since: Version,
        message: &'static str,
    },
}

impl ApiStage {
    pub fn is_removed(&self) -> bool {
        matches!(self, ApiStage::Removed { .. })
    }

    pub fn is_experimental(&self) -> bool {
        matches!(self, ApiStage::Experimental)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApiStage::Stable => "stable",
            ApiStage::Experimental => "experimental",
            ApiStage::Removed { .. } => "removed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_stage() {
        let stage = ApiStage::Removed {
            since: Version::Before4_0,
            message: "gone",
        };
        assert!(stage.is_removed());
        assert!(!stage.is_experimental());
        assert_eq!(stage.label(), "removed");
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::V7_0.to_string(), "7.0");
        assert_eq!(Version::Before4_0.to_string(), "4.0");
    }
}
