//! Build Session
//!
//! One configuration pass: options are parsed once into a typed snapshot,
//! then every declared variant gets its own path resolver. Resolvers are
//! shared behind `Arc` so workers can resolve variants concurrently.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use serde::Serialize;
use tracing::{debug, info, warn};

use r_droid_options::{IntegerOption, ProjectOptions, RawValue, StringOption};
use r_droid_variant::{
    BuildDirectory, DirectoryProvider, LocationOverrides, NamingPolicy, VariantIdentity,
    VariantPathResolver,
};

use crate::config::ProjectConfig;
use crate::error::{CoreError, Result};

/// Option source names, in precedence order
pub const PROJECT_FILE_SOURCE: &str = "project file";
pub const COMMAND_LINE_SOURCE: &str = "command line";

/// APK location policy inputs taken from IDE options.
///
/// An explicit location wins; a build targeting one device (density, ABI or
/// API given) goes to the deployment location.
pub fn location_overrides(options: &ProjectOptions, project_dir: &Path) -> LocationOverrides {
    let explicit_location = options
        .get_string(StringOption::IdeApkLocation)
        .map(|location| {
            let path = Path::new(location);
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_dir.join(path)
            }
        });

    let custom_build = options.get_string(StringOption::IdeBuildTargetDensity).is_some()
        || options.get_string(StringOption::IdeBuildTargetAbi).is_some()
        || options.get_int(IntegerOption::IdeTargetDeviceApi).is_some();

    LocationOverrides {
        explicit_location,
        custom_build,
    }
}

/// Resolved names and locations of one variant
#[derive(Debug, Clone, Serialize)]
pub struct VariantReport {
    pub full_name: String,
    pub base_name: String,
    pub dir_name: String,
    pub output_file_name: String,
    pub apk_location: PathBuf,
    pub manifest_output_directory: Option<PathBuf>,
    pub build_config_source_output_dir: PathBuf,
    pub coverage_report_dir: PathBuf,
}

/// Options and resolvers for one configuration pass
#[derive(Debug)]
pub struct BuildSession {
    config: ProjectConfig,
    options: ProjectOptions,
    build_dir: Arc<dyn DirectoryProvider>,
    resolvers: Vec<Arc<VariantPathResolver>>,
}

impl BuildSession {
    /// Resolve options (project file first, then `overrides`) and create a
    /// resolver for every declared variant
    pub fn new(config: ProjectConfig, overrides: Vec<(String, RawValue)>) -> Result<Self> {
        let options = ProjectOptions::builder()
            .layer(PROJECT_FILE_SOURCE, config.options.clone())
            .layer(COMMAND_LINE_SOURCE, overrides)
            .build()?;

        for diagnostic in options.diagnostics() {
            debug!("Option diagnostic: {}", diagnostic);
        }
        if config.strict_options {
            options.ensure_no_removed()?;
        }

        let build_dir: Arc<dyn DirectoryProvider> =
            Arc::new(BuildDirectory::new(config.build_root()));
        let overrides = location_overrides(&options, &config.project_dir);
        let output_policy = config.signing.policy();

        let mut resolvers = Vec::with_capacity(config.variants.len());
        for identity in &config.variants {
            identity.validate()?;
            let resolver = VariantPathResolver::new(identity.clone(), Arc::clone(&build_dir))
                .with_naming(config.naming)
                .with_location_overrides(overrides.clone())
                .with_output_policy(Arc::clone(&output_policy));
            resolvers.push(Arc::new(resolver));
        }

        Self::check_unique(&resolvers, config.naming)?;

        info!(
            "Configured {} variant(s) under {:?}",
            resolvers.len(),
            build_dir.root()
        );

        Ok(Self {
            config,
            options,
            build_dir,
            resolvers,
        })
    }

    /// Identities must be distinct; with dimension-aware naming so must
    /// their directories. Splits of one variant share its directory.
    fn check_unique(resolvers: &[Arc<VariantPathResolver>], naming: NamingPolicy) -> Result<()> {
        let mut identities = HashSet::new();
        let mut dir_names: HashMap<&str, (VariantIdentity, String)> = HashMap::new();

        for resolver in resolvers {
            if !identities.insert(resolver.identity()) {
                return Err(CoreError::DuplicateVariant(resolver.variant_name()));
            }

            if naming == NamingPolicy::SplitOnly {
                continue;
            }
            let unsplit = VariantIdentity {
                split: None,
                ..resolver.identity().clone()
            };
            match dir_names.get(resolver.dir_name()) {
                Some((owner, _)) if *owner == unsplit => {}
                Some((_, first)) => {
                    return Err(CoreError::DirNameCollision {
                        dir_name: resolver.dir_name().to_string(),
                        first: first.clone(),
                        second: resolver.variant_name(),
                    });
                }
                None => {
                    dir_names.insert(resolver.dir_name(), (unsplit, resolver.variant_name()));
                }
            }
        }

        if naming == NamingPolicy::SplitOnly && resolvers.len() > 1 {
            warn!("Split-only naming places all variants in the same directories");
        }
        Ok(())
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn options(&self) -> &ProjectOptions {
        &self.options
    }

    pub fn build_dir(&self) -> &Arc<dyn DirectoryProvider> {
        &self.build_dir
    }

    pub fn resolvers(&self) -> &[Arc<VariantPathResolver>] {
        &self.resolvers
    }

    /// Resolver by variant name including any split, e.g. `freeDebug` or
    /// `freeHdpiRelease`
    pub fn resolver(&self, name: &str) -> Option<&Arc<VariantPathResolver>> {
        self.resolvers.iter().find(|r| r.variant_name() == name)
    }

    /// Names and locations of one variant
    pub fn report_for(&self, resolver: &VariantPathResolver) -> Result<VariantReport> {
        let base_name = resolver.variant_base_name();
        let full_name = resolver.variant_name();

        let manifest_output_directory = match resolver.manifest_output_directory() {
            Ok(dir) => Some(dir.to_path_buf()),
            Err(err) => {
                debug!("{}: {}", full_name, err);
                None
            }
        };

        Ok(VariantReport {
            output_file_name: resolver
                .output_file_name(&self.config.archives_base_name, &base_name),
            apk_location: resolver.apk_location()?.clone(),
            build_config_source_output_dir: resolver.build_config_source_output_dir()?.to_path_buf(),
            coverage_report_dir: resolver.coverage_report_dir()?.to_path_buf(),
            dir_name: resolver.dir_name().to_string(),
            manifest_output_directory,
            base_name,
            full_name,
        })
    }

    /// Reports for every variant, in declaration order
    pub fn report(&self) -> Result<Vec<VariantReport>> {
        self.resolvers
            .iter()
            .map(|resolver| self.report_for(resolver))
            .collect()
    }
}
