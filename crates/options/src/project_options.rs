//! Resolved project options
//!
//! A `ProjectOptions` is the typed snapshot of every recognized property
//! for one configuration pass. Sources are layered in the order they are
//! added; a later layer replaces values from an earlier one.

use std::collections::BTreeMap;
use std::fmt;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    ApiStage, BooleanOption, IntegerOption, OptionError, ProjectOption, RawValue, StringOption,
    Version,
};

/// Typed value of a resolved option
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    Integer(i32),
    Boolean(bool),
    String(String),
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedValue::Integer(n) => write!(f, "{}", n),
            ResolvedValue::Boolean(b) => write!(f, "{}", b),
            ResolvedValue::String(s) => f.write_str(s),
        }
    }
}

/// An option paired with its parsed value
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedOption {
    pub property: &'static str,
    pub stage: ApiStage,
    pub value: ResolvedValue,
    /// Name of the layer the value came from
    pub source: String,
}

/// Something the caller should tell the user about
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionDiagnostic {
    ExperimentalOptionUsed {
        property: &'static str,
        value: String,
        source: String,
    },
    RemovedOptionUsed {
        property: &'static str,
        since: Version,
        message: &'static str,
        source: String,
    },
}

impl OptionDiagnostic {
    pub fn property(&self) -> &'static str {
        match self {
            OptionDiagnostic::ExperimentalOptionUsed { property, .. }
            | OptionDiagnostic::RemovedOptionUsed { property, .. } => *property,
        }
    }

    /// Escalate to an error. Experimental use never escalates.
    pub fn to_error(&self) -> Option<OptionError> {
        match self {
            OptionDiagnostic::RemovedOptionUsed { property, since, message, .. } => {
                Some(OptionError::RemovedOptionUsed {
                    property: *property,
                    since: *since,
                    message: *message,
                })
            }
            OptionDiagnostic::ExperimentalOptionUsed { .. } => None,
        }
    }
}

impl fmt::Display for OptionDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionDiagnostic::ExperimentalOptionUsed { property, value, source } => write!(
                f,
                "The option setting '{}={}' ({}) is experimental.",
                property, value, source
            ),
            OptionDiagnostic::RemovedOptionUsed { property, since, message, source } => write!(
                f,
                "The option '{}' ({}) was removed in version {}. {}",
                property, source, since, message
            ),
        }
    }
}

/// Typed snapshot of all recognized options
#[derive(Debug, Clone, Default)]
pub struct ProjectOptions {
    integers: BTreeMap<IntegerOption, i32>,
    booleans: BTreeMap<BooleanOption, bool>,
    strings: BTreeMap<StringOption, String>,
    resolved: Vec<ResolvedOption>,
    diagnostics: Vec<OptionDiagnostic>,
}

impl ProjectOptions {
    pub fn builder() -> ProjectOptionsBuilder {
        ProjectOptionsBuilder::default()
    }

    pub fn get_int(&self, option: IntegerOption) -> Option<i32> {
        self.integers.get(&option).copied()
    }

    /// Explicit value, or the option's declared default
    pub fn get_bool(&self, option: BooleanOption) -> bool {
        self.booleans
            .get(&option)
            .copied()
            .unwrap_or_else(|| option.default_value())
    }

    pub fn get_string(&self, option: StringOption) -> Option<&str> {
        self.strings.get(&option).map(String::as_str)
    }

    /// Every explicitly set option, ordered by property name
    pub fn resolved(&self) -> &[ResolvedOption] {
        &self.resolved
    }

    pub fn diagnostics(&self) -> &[OptionDiagnostic] {
        &self.diagnostics
    }

    /// Fail on the first removed option that was set
    pub fn ensure_no_removed(&self) -> Result<(), OptionError> {
        match self.diagnostics.iter().find_map(OptionDiagnostic::to_error) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn record<O>(
        &mut self,
        option: O,
        raw: &RawValue,
        source: &str,
        wrap: fn(O::Value) -> ResolvedValue,
    ) -> Result<O::Value, OptionError>
    where
        O: ProjectOption,
    {
        let value = option.parse(raw)?;
        let stage = option.stage();

        match stage {
            ApiStage::Stable => {}
            ApiStage::Experimental => {
                warn!(
                    "The option setting '{}={}' is experimental",
                    option.property_name(),
                    raw
                );
                self.diagnostics.push(OptionDiagnostic::ExperimentalOptionUsed {
                    property: option.property_name(),
                    value: raw.to_string(),
                    source: source.to_string(),
                });
            }
            ApiStage::Removed { since, message } => {
                warn!(
                    "The option '{}' was removed in version {}. {}",
                    option.property_name(),
                    since,
                    message
                );
                self.diagnostics.push(OptionDiagnostic::RemovedOptionUsed {
                    property: option.property_name(),
                    since,
                    message,
                    source: source.to_string(),
                });
            }
        }

        self.resolved.push(ResolvedOption {
            property: option.property_name(),
            stage,
            value: wrap(value.clone()),
            source: source.to_string(),
        });
        Ok(value)
    }
}

/// Collects raw values from option sources
#[derive(Debug, Clone, Default)]
pub struct ProjectOptionsBuilder {
    values: BTreeMap<String, (String, RawValue)>,
}

impl ProjectOptionsBuilder {
    /// Add a source. Values replace those of earlier layers with the same key.
    pub fn layer<I, K>(mut self, source: &str, values: I) -> Self
    where
        I: IntoIterator<Item = (K, RawValue)>,
        K: Into<String>,
    {
        for (name, value) in values {
            let name = name.into();
            if let Some((previous, _)) = self.values.get(&name) {
                debug!("{} overrides {} from {}", source, name, previous);
            }
            self.values.insert(name, (source.to_string(), value));
        }
        self
    }

    /// Parse every recognized property. The first malformed value aborts.
    pub fn build(self) -> Result<ProjectOptions, OptionError> {
        let mut options = ProjectOptions::default();

        for (name, (source, raw)) in &self.values {
            let mut recognized = false;

            if let Some(option) = IntegerOption::from_property_name(name) {
                let value = options.record(option, raw, source, ResolvedValue::Integer)?;
                options.integers.insert(option, value);
                recognized = true;
            }
            if let Some(option) = BooleanOption::from_property_name(name) {
                let value = options.record(option, raw, source, ResolvedValue::Boolean)?;
                options.booleans.insert(option, value);
                recognized = true;
            }
            if let Some(option) = StringOption::from_property_name(name) {
                let value = options.record(option, raw, source, ResolvedValue::String)?;
                options.strings.insert(option, value);
                recognized = true;
            }

            if !recognized {
                debug!("Ignoring unrecognized property {} from {}", name, source);
            }
        }

        Ok(options)
    }
}
