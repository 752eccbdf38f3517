//! Boolean project options

use serde::Serialize;

use crate::{ApiStage, OptionError, ProjectOption, RawValue, Version};

/// Options whose values are flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BooleanOption {
    UseAndroidX,
    EnableJetifier,
    NonTransitiveRClass,
    EnableR8FullMode,
    /// Set by an IDE when it drives the build
    IdeInvokedFromIde,
    BuildConfigAsBytecode,
    TestFixturesKotlinSupport,

    // Removed
    EnableAapt2,
    EnableD8,
}

impl BooleanOption {
    /// Value assumed when no source sets the option
    pub fn default_value(&self) -> bool {
        match self {
            BooleanOption::NonTransitiveRClass
            | BooleanOption::EnableR8FullMode
            | BooleanOption::EnableAapt2
            | BooleanOption::EnableD8 => true,
            _ => false,
        }
    }
}

impl ProjectOption for BooleanOption {
    type Value = bool;

    const ALL: &'static [Self] = &[
        BooleanOption::UseAndroidX,
        BooleanOption::EnableJetifier,
        BooleanOption::NonTransitiveRClass,
        BooleanOption::EnableR8FullMode,
        BooleanOption::IdeInvokedFromIde,
        BooleanOption::BuildConfigAsBytecode,
        BooleanOption::TestFixturesKotlinSupport,
        BooleanOption::EnableAapt2,
        BooleanOption::EnableD8,
    ];

    const KIND: &'static str = "boolean";

    fn property_name(&self) -> &'static str {
        match self {
            BooleanOption::UseAndroidX => "android.useAndroidX",
            BooleanOption::EnableJetifier => "android.enableJetifier",
            BooleanOption::NonTransitiveRClass => "android.nonTransitiveRClass",
            BooleanOption::EnableR8FullMode => "android.enableR8.fullMode",
            BooleanOption::IdeInvokedFromIde => "android.injected.invoked.from.ide",
            BooleanOption::BuildConfigAsBytecode => "android.enableBuildConfigAsBytecode",
            BooleanOption::TestFixturesKotlinSupport => {
                "android.experimental.enableTestFixturesKotlinSupport"
            }
            BooleanOption::EnableAapt2 => "android.enableAapt2",
            BooleanOption::EnableD8 => "android.enableD8",
        }
    }

    fn stage(&self) -> ApiStage {
        match self {
            BooleanOption::BuildConfigAsBytecode | BooleanOption::TestFixturesKotlinSupport => {
                ApiStage::Experimental
            }
            BooleanOption::EnableAapt2 => ApiStage::Removed {
                since: Version::Before4_0,
                message: "AAPT2 is the only supported resource compiler",
            },
            BooleanOption::EnableD8 => ApiStage::Removed {
                since: Version::V7_0,
                message: "D8 is the only supported dexer; remove this property",
            },
            _ => ApiStage::Stable,
        }
    }

    fn parse(&self, value: &RawValue) -> Result<bool, OptionError> {
        match value {
            RawValue::Boolean(b) => Ok(*b),
            RawValue::Text(text) if text.eq_ignore_ascii_case("true") => Ok(true),
            RawValue::Text(text) if text.eq_ignore_ascii_case("false") => Ok(false),
            _ => Err(self.invalid_value(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens_ignore_case() {
        let option = BooleanOption::UseAndroidX;
        assert_eq!(option.parse(&RawValue::from("TRUE")), Ok(true));
        assert_eq!(option.parse(&RawValue::from("False")), Ok(false));
        assert_eq!(option.parse(&RawValue::Boolean(true)), Ok(true));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        let option = BooleanOption::EnableJetifier;
        assert!(option.parse(&RawValue::from("yes")).is_err());
        assert!(option.parse(&RawValue::Integer(1)).is_err());
    }

    #[test]
    fn test_removed_stage_carries_guidance() {
        match BooleanOption::EnableD8.stage() {
            ApiStage::Removed { since, message } => {
                assert_eq!(since, Version::V7_0);
                assert!(!message.is_empty());
            }
            other => panic!("unexpected stage: {other:?}"),
        }
    }
}
