//! Error types for R-Droid variant resolution
//! 
//! Centralized error handling using thiserror.

use thiserror::Error;

use r_droid_options::OptionError;
use r_droid_variant::VariantError;

/// Main error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error(transparent)]
    Options(#[from] OptionError),

    #[error(transparent)]
    Variant(#[from] VariantError),

    #[error("Variant '{0}' is declared more than once")]
    DuplicateVariant(String),

    #[error("Variants '{first}' and '{second}' both use directory '{dir_name}'")]
    DirNameCollision {
        dir_name: String,
        first: String,
        second: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Whether the error comes from user-supplied configuration rather than
    /// a defect in the calling code
    pub fn is_user_error(&self) -> bool {
        match self {
            CoreError::Variant(VariantError::PathConfiguration { .. }) => false,
            CoreError::Variant(VariantError::UnexpectedComponent { .. }) => false,
            CoreError::Io(_) => false,
            _ => true,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Io(e) => format!("File operation failed: {}", e),
            CoreError::TomlParse(e) => format!("Invalid project file: {}", e),
            CoreError::Options(e) => format!("Invalid project option: {}", e),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_errors_are_not_user_errors() {
        let err = CoreError::from(VariantError::PathConfiguration {
            segment: "a.b".into(),
            path: "intermediates/a.b".into(),
        });
        assert!(!err.is_user_error());
        assert!(CoreError::DuplicateVariant("freeDebug".into()).is_user_error());
        assert!(!CoreError::from(std::io::Error::from(std::io::ErrorKind::NotFound)).is_user_error());
    }
}
