//! String project options

use serde::Serialize;

use crate::{ApiStage, OptionError, ProjectOption, RawValue, Version};

/// Options whose values are free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StringOption {
    /// Explicit location for packaged APKs
    IdeApkLocation,
    /// Screen density of the device an IDE build targets
    IdeBuildTargetDensity,
    /// ABIs of the device an IDE build targets
    IdeBuildTargetAbi,
    IdeSigningStoreFile,
    Aapt2FromMavenOverride,
    LintHeapSize,

    // Removed
    BuildCacheDir,
}

impl ProjectOption for StringOption {
    type Value = String;

    const ALL: &'static [Self] = &[
        StringOption::IdeApkLocation,
        StringOption::IdeBuildTargetDensity,
        StringOption::IdeBuildTargetAbi,
        StringOption::IdeSigningStoreFile,
        StringOption::Aapt2FromMavenOverride,
        StringOption::LintHeapSize,
        StringOption::BuildCacheDir,
    ];

    const KIND: &'static str = "string";

    fn property_name(&self) -> &'static str {
        match self {
            StringOption::IdeApkLocation => "android.injected.apk.location",
            StringOption::IdeBuildTargetDensity => "android.injected.build.density",
            StringOption::IdeBuildTargetAbi => "android.injected.build.abi",
            StringOption::IdeSigningStoreFile => "android.injected.signing.store.file",
            StringOption::Aapt2FromMavenOverride => "android.aapt2FromMavenOverride",
            StringOption::LintHeapSize => "android.experimental.lint.heapSize",
            StringOption::BuildCacheDir => "android.buildCacheDir",
        }
    }

    fn stage(&self) -> ApiStage {
        match self {
            StringOption::Aapt2FromMavenOverride | StringOption::LintHeapSize => {
                ApiStage::Experimental
            }
            StringOption::BuildCacheDir => ApiStage::Removed {
                since: Version::V7_0,
                message: "The build cache directory is managed by the build engine; remove this property",
            },
            _ => ApiStage::Stable,
        }
    }

    fn parse(&self, value: &RawValue) -> Result<String, OptionError> {
        match value {
            RawValue::Text(text) => Ok(text.clone()),
            RawValue::Integer(_) | RawValue::Float(_) => Ok(value.to_string()),
            RawValue::Boolean(_) => Err(self.invalid_value(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_and_numbers() {
        let option = StringOption::IdeBuildTargetDensity;
        assert_eq!(option.parse(&RawValue::from("xxhdpi")), Ok("xxhdpi".to_string()));
        assert_eq!(option.parse(&RawValue::Integer(480)), Ok("480".to_string()));
    }

    #[test]
    fn test_parse_rejects_boolean() {
        assert!(StringOption::IdeApkLocation
            .parse(&RawValue::Boolean(false))
            .is_err());
    }
}
