//! Project Configuration
//!
//! The variant configuration of one project (`rdroid-variants.toml`):
//! - archive naming and build directory
//! - signing state used for output file names
//! - raw project options
//! - the declared variant matrix

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use r_droid_options::RawValue;
use r_droid_variant::{
    AlwaysUnsigned, NamingPolicy, OutputSuffixPolicy, SigningReadiness, VariantIdentity,
};

use crate::error::{CoreError, Result};

/// Default project file name
pub const CONFIG_FILE_NAME: &str = "rdroid-variants.toml";

/// How packaged outputs are named with respect to signing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum SigningConfig {
    /// Every package is named `-unsigned.apk`
    AlwaysUnsigned,
    /// Named from the signing state known at configuration time
    Readiness { signed: bool, base_module: bool },
}

impl Default for SigningConfig {
    fn default() -> Self {
        SigningConfig::AlwaysUnsigned
    }
}

impl SigningConfig {
    pub fn policy(&self) -> Arc<dyn OutputSuffixPolicy> {
        match self {
            SigningConfig::AlwaysUnsigned => Arc::new(AlwaysUnsigned),
            SigningConfig::Readiness { signed, base_module } => Arc::new(SigningReadiness {
                signed: *signed,
                base_module: *base_module,
            }),
        }
    }
}

/// Variant configuration of a project
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory the configuration was loaded from
    #[serde(skip)]
    pub project_dir: PathBuf,
    /// Prefix of packaged file names
    pub archives_base_name: String,
    /// Build root, relative to the project directory unless absolute
    pub build_dir: PathBuf,
    pub naming: NamingPolicy,
    pub signing: SigningConfig,
    /// Fail instead of warning when a removed option is set
    pub strict_options: bool,
    /// Raw project options, keyed by property name
    pub options: BTreeMap<String, RawValue>,
    pub variants: Vec<VariantIdentity>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            archives_base_name: "app".to_string(),
            build_dir: PathBuf::from("build"),
            naming: NamingPolicy::default(),
            signing: SigningConfig::default(),
            strict_options: false,
            options: BTreeMap::new(),
            variants: Vec::new(),
        }
    }
}

impl ProjectConfig {
    /// Parse a configuration; relative paths resolve against `project_dir`
    pub fn from_toml_str(contents: &str, project_dir: &Path) -> Result<Self> {
        let mut config: ProjectConfig = toml::from_str(contents)?;
        config.project_dir = project_dir.to_path_buf();

        if config.archives_base_name.is_empty() {
            return Err(CoreError::Config("archives_base_name must not be empty".into()));
        }
        Ok(config)
    }

    /// Load configuration from file
    pub async fn load(path: &Path) -> Result<Self> {
        debug!("Loading variant configuration from {:?}", path);
        let contents = tokio::fs::read_to_string(path).await?;
        let project_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let config = Self::from_toml_str(&contents, project_dir)?;

        info!(
            "Loaded {} variant(s) and {} option(s) from {:?}",
            config.variants.len(),
            config.options.len(),
            path
        );
        Ok(config)
    }

    /// Load `rdroid-variants.toml` from a project directory
    pub async fn load_from_dir(project_dir: &Path) -> Result<Self> {
        Self::load(&project_dir.join(CONFIG_FILE_NAME)).await
    }

    /// Absolute build root
    pub fn build_root(&self) -> PathBuf {
        self.resolve_path(&self.build_dir)
    }

    /// Resolve a path relative to the project directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_dir.join(path)
        }
    }
}
