//! Project Options
//!
//! Declares every project property the build understands, grouped into
//! closed families by value kind, and parses raw values from any
//! configuration source into typed values.

pub mod stage;
pub mod raw;
pub mod integer;
pub mod boolean;
pub mod string;
pub mod project_options;

pub use stage::{ApiStage, Version};
pub use raw::{RawValue, RawValueKind};
pub use integer::IntegerOption;
pub use boolean::BooleanOption;
pub use string::StringOption;
pub use project_options::{
    OptionDiagnostic, ProjectOptions, ProjectOptionsBuilder, ResolvedOption, ResolvedValue,
};

/// Option errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionError {
    #[error("Cannot parse project property {property}='{value}' of type '{kind}' as {expected}.")]
    InvalidValue {
        property: &'static str,
        value: String,
        kind: RawValueKind,
        expected: &'static str,
    },
    #[error("The option '{property}' was removed in version {since}. {message}")]
    RemovedOptionUsed {
        property: &'static str,
        since: Version,
        message: &'static str,
    },
}

/// A declared project option.
///
/// Implemented by the option family enums. Declarations are compile-time
/// data: there is no runtime registration.
pub trait ProjectOption: Copy + Eq + Ord + std::fmt::Debug + 'static {
    /// Typed value produced by [`ProjectOption::parse`]
    type Value: Clone + std::fmt::Debug;

    /// Every declared option of this family
    const ALL: &'static [Self];

    /// Name of the value kind used in parse errors ("integer", "boolean", "string")
    const KIND: &'static str;

    /// Stable external key, e.g. `android.r8.maxWorkers`
    fn property_name(&self) -> &'static str;

    /// Lifecycle stage
    fn stage(&self) -> ApiStage;

    /// Parse a raw value into the typed value
    fn parse(&self, value: &RawValue) -> Result<Self::Value, OptionError>;

    /// Look up an option by its external key
    fn from_property_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.property_name() == name)
    }

    /// Error for a value whose shape does not match this option's kind
    fn invalid_value(&self, value: &RawValue) -> OptionError {
        OptionError::InvalidValue {
            property: self.property_name(),
            value: value.to_string(),
            kind: value.kind(),
            expected: Self::KIND,
        }
    }
}

/// Stage of an option, for callers holding only the declaration.
pub fn stage_of<O: ProjectOption>(option: O) -> ApiStage {
    option.stage()
}

/// Parse `value` as `option`. Removed options still parse.
pub fn parse<O: ProjectOption>(option: O, value: &RawValue) -> Result<O::Value, OptionError> {
    option.parse(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_have_unique_names() {
        fn check<O: ProjectOption>() {
            let mut names: Vec<_> = O::ALL.iter().map(|o| o.property_name()).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate {} option name", O::KIND);
        }

        check::<IntegerOption>();
        check::<BooleanOption>();
        check::<StringOption>();
    }

    #[test]
    fn test_invalid_value_message() {
        let err = parse(IntegerOption::R8MaxWorkers, &RawValue::from("many")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot parse project property android.r8.maxWorkers='many' of type 'string' as integer."
        );
    }
}
