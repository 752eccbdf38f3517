//! Variant identities
//!
//! An identity is the ordered tuple of dimension values that names one
//! variant: the build type, one flavor per dimension, the component kind
//! and an optional split.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::{naming, VariantError};

/// Role a variant plays in the build
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// The main deliverable
    #[default]
    Main,
    UnitTest,
    AndroidTest,
    TestFixtures,
    /// Any other nested component with its own name tokens
    Nested { prefix: String, suffix: String },
}

impl ComponentKind {
    pub fn is_nested(&self) -> bool {
        !matches!(self, ComponentKind::Main)
    }

    pub fn is_test_component(&self) -> bool {
        matches!(self, ComponentKind::UnitTest | ComponentKind::AndroidTest)
    }

    /// Whether the component is packaged as an APK of its own
    pub fn is_apk(&self) -> bool {
        matches!(self, ComponentKind::Main | ComponentKind::AndroidTest)
    }

    /// Token used in dash-joined names and directory segments
    pub fn prefix(&self) -> Option<&str> {
        match self {
            ComponentKind::Main => None,
            ComponentKind::UnitTest => Some("unitTest"),
            ComponentKind::AndroidTest => Some("androidTest"),
            ComponentKind::TestFixtures => Some("testFixtures"),
            ComponentKind::Nested { prefix, .. } => Some(prefix),
        }
    }

    /// Token appended verbatim to camelCase names
    pub fn suffix(&self) -> Option<&str> {
        match self {
            ComponentKind::Main => None,
            ComponentKind::UnitTest => Some("UnitTest"),
            ComponentKind::AndroidTest => Some("AndroidTest"),
            ComponentKind::TestFixtures => Some("TestFixtures"),
            ComponentKind::Nested { suffix, .. } => Some(suffix),
        }
    }

    pub fn name(&self) -> &str {
        self.prefix().unwrap_or("main")
    }
}

/// The flavor selected for one dimension
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlavorSelection {
    pub dimension: String,
    pub name: String,
}

/// Identity of one variant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VariantIdentity {
    #[serde(default)]
    pub build_type: Option<String>,
    /// One entry per dimension, in declared dimension order
    #[serde(default)]
    pub flavors: Vec<FlavorSelection>,
    #[serde(default)]
    pub component: ComponentKind,
    #[serde(default)]
    pub split: Option<String>,
}

impl VariantIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build_type(mut self, build_type: &str) -> Self {
        self.build_type = Some(build_type.to_string());
        self
    }

    pub fn with_flavor(mut self, dimension: &str, name: &str) -> Self {
        self.flavors.push(FlavorSelection {
            dimension: dimension.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_component(mut self, component: ComponentKind) -> Self {
        self.component = component;
        self
    }

    pub fn with_split(mut self, split: &str) -> Self {
        self.split = Some(split.to_string());
        self
    }

    /// Flavor names in dimension order
    pub fn flavor_names(&self) -> impl Iterator<Item = &str> {
        self.flavors.iter().map(|f| f.name.as_str())
    }

    /// Combined camelCase flavor name, `None` without flavors
    pub fn flavor_name(&self) -> Option<String> {
        if self.flavors.is_empty() {
            None
        } else {
            Some(naming::combine_as_camel_case(self.flavor_names()))
        }
    }

    /// Reject names that cannot be used as path segments or that would
    /// shadow a nested component's directory.
    pub fn validate(&self) -> Result<(), VariantError> {
        let names = self
            .flavors
            .iter()
            .map(|f| ("flavor", f.name.as_str()))
            .chain(self.build_type.iter().map(|b| ("build type", b.as_str())));

        for (what, name) in names {
            if name.is_empty() {
                return Err(VariantError::InvalidIdentity(format!("empty {} name", what)));
            }
            if name.contains(['/', '\\', '.', '-']) {
                return Err(VariantError::InvalidIdentity(format!(
                    "{} name '{}' contains a separator",
                    what, name
                )));
            }
            for reserved in ["androidTest", "test"] {
                if name.starts_with(reserved) {
                    return Err(VariantError::InvalidIdentity(format!(
                        "{} name '{}' cannot start with '{}'",
                        what, name, reserved
                    )));
                }
            }
        }

        if let ComponentKind::Nested { prefix, suffix } = &self.component {
            if prefix.is_empty() || suffix.is_empty() {
                return Err(VariantError::InvalidIdentity(
                    "nested component needs a prefix and a suffix".into(),
                ));
            }
            if prefix.contains(['/', '\\', '.', '-']) || suffix.contains(['/', '\\', '.', '-']) {
                return Err(VariantError::InvalidIdentity(format!(
                    "nested component '{}' contains a separator",
                    prefix
                )));
            }
        }

        if let Some(split) = &self.split {
            if split.is_empty() {
                return Err(VariantError::InvalidIdentity("empty split name".into()));
            }
        }
        Ok(())
    }
}

impl fmt::Display for VariantIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&naming::compute_full_name(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_tokens() {
        assert_eq!(ComponentKind::Main.prefix(), None);
        assert_eq!(ComponentKind::AndroidTest.prefix(), Some("androidTest"));
        assert_eq!(ComponentKind::UnitTest.suffix(), Some("UnitTest"));
        assert!(ComponentKind::TestFixtures.is_nested());
        assert!(!ComponentKind::TestFixtures.is_test_component());
    }

    #[test]
    fn test_deserialize_identity() {
        let identity: VariantIdentity = toml::from_str(
            r#"
            build_type = "debug"
            flavors = [
                { dimension = "tier", name = "free" },
                { dimension = "env", name = "demo" },
            ]
            component = { nested = { prefix = "benchmark", suffix = "Benchmark" } }
            "#,
        )
        .unwrap();

        assert_eq!(identity.flavor_name().as_deref(), Some("freeDemo"));
        assert_eq!(identity.component.prefix(), Some("benchmark"));
        assert!(identity.split.is_none());
    }

    #[test]
    fn test_validate() {
        assert!(VariantIdentity::new().with_build_type("debug").validate().is_ok());
        assert!(VariantIdentity::new().with_flavor("tier", "fr.ee").validate().is_err());
        assert!(VariantIdentity::new().with_flavor("tier", "testing").validate().is_err());
        assert!(VariantIdentity::new().with_build_type("").validate().is_err());
    }

    fn nested(prefix: &str, suffix: &str) -> VariantIdentity {
        VariantIdentity::new().with_component(ComponentKind::Nested {
            prefix: prefix.into(),
            suffix: suffix.into(),
        })
    }

    #[test]
    fn test_validate_nested_tokens() {
        assert!(nested("benchmark", "Benchmark").validate().is_ok());

        for identity in [
            nested("", ""),
            nested("", "Benchmark"),
            nested("benchmark", ""),
            nested("bench/mark", "Benchmark"),
            nested("bench.mark", "Benchmark"),
            nested("benchmark", "Bench.mark"),
        ] {
            assert!(
                matches!(identity.validate(), Err(VariantError::InvalidIdentity(_))),
                "{:?} should be rejected",
                identity.component
            );
        }
    }
}
