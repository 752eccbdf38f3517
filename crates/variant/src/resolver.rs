//! Variant path resolver
//!
//! One resolver per variant. Derived names and directories are computed on
//! first access and kept for the resolver's lifetime; concurrent first
//! accesses compute at most once.

use std::path::PathBuf;
use std::sync::Arc;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    naming, AlwaysUnsigned, Directory, DirectoryProvider, LocationOverrides,
    OutputSuffixPolicy, VariantError, VariantIdentity, FD_GENERATED, FD_INTERMEDIATES,
    FD_OUTPUTS, FD_REPORTS,
};

/// How the resolver names directories
///
/// `SplitOnly` matches the layout older builds produce but gives every
/// variant the same directories, so distinct variants overwrite each
/// other's outputs. `DimensionAware` keeps directories distinct and is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingPolicy {
    /// Every dimension contributes to directory names
    #[default]
    DimensionAware,
    /// Directories ignore flavors, build type and component; split-aware
    /// names reduce to the split name. Kept for layouts produced before
    /// dimension-aware naming.
    SplitOnly,
}

type Result<T> = std::result::Result<T, VariantError>;

/// Names and output locations for one variant
#[derive(Debug)]
pub struct VariantPathResolver {
    identity: VariantIdentity,
    build_dir: Arc<dyn DirectoryProvider>,
    naming: NamingPolicy,
    overrides: LocationOverrides,
    output_policy: Arc<dyn OutputSuffixPolicy>,

    directory_segments: OnceCell<Vec<String>>,
    dir_name: OnceCell<String>,
    base_name: OnceCell<String>,
    full_name: OnceCell<String>,
    build_config_source_output_dir: OnceCell<Directory>,
    renderscript_obj_output_dir: OnceCell<Directory>,
    coverage_report_dir: OnceCell<Directory>,
    default_apk_location: OnceCell<Directory>,
    deployment_apk_location: OnceCell<Directory>,
    aar_location: OnceCell<Directory>,
    apk_location: OnceCell<PathBuf>,
}

impl VariantPathResolver {
    pub fn new(identity: VariantIdentity, build_dir: Arc<dyn DirectoryProvider>) -> Self {
        Self {
            identity,
            build_dir,
            naming: NamingPolicy::default(),
            overrides: LocationOverrides::default(),
            output_policy: Arc::new(AlwaysUnsigned),
            directory_segments: OnceCell::new(),
            dir_name: OnceCell::new(),
            base_name: OnceCell::new(),
            full_name: OnceCell::new(),
            build_config_source_output_dir: OnceCell::new(),
            renderscript_obj_output_dir: OnceCell::new(),
            coverage_report_dir: OnceCell::new(),
            default_apk_location: OnceCell::new(),
            deployment_apk_location: OnceCell::new(),
            aar_location: OnceCell::new(),
            apk_location: OnceCell::new(),
        }
    }

    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_location_overrides(mut self, overrides: LocationOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_output_policy(mut self, policy: Arc<dyn OutputSuffixPolicy>) -> Self {
        self.output_policy = policy;
        self
    }

    pub fn identity(&self) -> &VariantIdentity {
        &self.identity
    }

    pub fn naming(&self) -> NamingPolicy {
        self.naming
    }

    /// Directory names for the variant: component prefix, combined flavors,
    /// build type.
    pub fn directory_segments(&self) -> &[String] {
        self.directory_segments.get_or_init(|| match self.naming {
            NamingPolicy::SplitOnly => Vec::new(),
            NamingPolicy::DimensionAware => {
                let mut segments = Vec::new();
                if let Some(prefix) = self.identity.component.prefix() {
                    segments.push(prefix.to_string());
                }
                if let Some(flavor_name) = self.identity.flavor_name() {
                    segments.push(flavor_name);
                }
                if let Some(build_type) = &self.identity.build_type {
                    segments.push(build_type.clone());
                }
                segments
            }
        })
    }

    /// Unique directory name (possibly several folders), always `/`-separated
    pub fn dir_name(&self) -> &str {
        self.dir_name
            .get_or_init(|| self.directory_segments().join("/"))
    }

    /// Dash-joined unique name of the variant
    pub fn base_name(&self) -> &str {
        self.base_name.get_or_init(|| match self.naming {
            NamingPolicy::SplitOnly => String::new(),
            NamingPolicy::DimensionAware => naming::compute_base_name(&self.identity),
        })
    }

    /// camelCase unique name of the variant
    pub fn full_name(&self) -> &str {
        self.full_name
            .get_or_init(|| naming::compute_full_name(&self.identity))
    }

    pub fn full_name_with_splits(&self, split_name: &str) -> String {
        match self.naming {
            NamingPolicy::SplitOnly => split_name.to_string(),
            NamingPolicy::DimensionAware => {
                naming::compute_full_name_with_splits(&self.identity, split_name)
            }
        }
    }

    pub fn base_name_with_splits(&self, split_name: &str) -> String {
        match self.naming {
            NamingPolicy::SplitOnly => split_name.to_string(),
            NamingPolicy::DimensionAware => {
                naming::compute_base_name_with_splits(&self.identity, split_name)
            }
        }
    }

    /// Name of the variant including its split, e.g. `freeHdpiRelease`
    pub fn variant_name(&self) -> String {
        match &self.identity.split {
            Some(split) => self.full_name_with_splits(split),
            None => self.full_name().to_string(),
        }
    }

    /// Dash-joined name including the split, e.g. `free-hdpi-release`
    pub fn variant_base_name(&self) -> String {
        match &self.identity.split {
            Some(split) => self.base_name_with_splits(split),
            None => self.base_name().to_string(),
        }
    }

    /// Expected packaged file name, e.g. `app-free-debug.apk`
    pub fn output_file_name(&self, archives_base_name: &str, base_name: &str) -> String {
        format!("{}-{}{}", archives_base_name, base_name, self.output_policy.suffix())
    }

    pub fn intermediates_dir(&self, sub_dirs: &[&str]) -> Result<Directory> {
        self.build_sub_dir(FD_INTERMEDIATES, sub_dirs)
    }

    pub fn output_dir(&self, sub_dirs: &[&str]) -> Result<Directory> {
        self.build_sub_dir(FD_OUTPUTS, sub_dirs)
    }

    pub fn generated_dir(&self, sub_dirs: &[&str]) -> Result<Directory> {
        self.build_sub_dir(FD_GENERATED, sub_dirs)
    }

    pub fn reports_dir(&self, sub_dirs: &[&str]) -> Result<Directory> {
        self.build_sub_dir(FD_REPORTS, sub_dirs)
    }

    pub fn build_config_source_output_dir(&self) -> Result<&Directory> {
        self.build_config_source_output_dir
            .get_or_try_init(|| self.generated_dir(&["source", "buildConfig", self.dir_name()]))
    }

    pub fn renderscript_obj_output_dir(&self) -> Result<&Directory> {
        self.renderscript_obj_output_dir.get_or_try_init(|| {
            let mut sub_dirs = vec!["rs"];
            sub_dirs.extend(self.directory_segments().iter().map(String::as_str));
            sub_dirs.push("obj");
            self.intermediates_dir(&sub_dirs)
        })
    }

    pub fn coverage_report_dir(&self) -> Result<&Directory> {
        self.coverage_report_dir
            .get_or_try_init(|| self.reports_dir(&["coverage", self.dir_name()]))
    }

    pub fn aar_location(&self) -> Result<&Directory> {
        self.aar_location
            .get_or_try_init(|| self.output_dir(&["aar"]))
    }

    /// Default location for APKs
    pub fn default_apk_location(&self) -> Result<&Directory> {
        self.default_apk_location
            .get_or_try_init(|| self.output_dir(&["apk"]))
    }

    /// APKs built for one device go to intermediates so they are not
    /// mistaken for regular outputs
    pub fn deployment_apk_location(&self) -> Result<&Directory> {
        self.deployment_apk_location
            .get_or_try_init(|| self.intermediates_dir(&["apk"]))
    }

    /// Where packaged APKs for this variant are placed
    pub fn apk_location(&self) -> Result<&PathBuf> {
        self.apk_location.get_or_try_init(|| -> Result<PathBuf> {
            let base = match &self.overrides.explicit_location {
                Some(location) => {
                    debug!("{}: using explicit APK location {:?}", self.full_name(), location);
                    location.clone()
                }
                None if self.overrides.custom_build => {
                    debug!("{}: device-targeted build, using deployment location", self.full_name());
                    self.deployment_apk_location()?.to_path_buf()
                }
                None => self.default_apk_location()?.to_path_buf(),
            };

            Ok(self
                .directory_segments()
                .iter()
                .fold(base, |path, segment| path.join(segment)))
        })
    }

    pub fn manifest_output_directory(&self) -> Result<Directory> {
        let component = &self.identity.component;
        if self.naming == NamingPolicy::DimensionAware && component.is_test_component() {
            if component.is_apk() {
                return self.intermediates_dir(&["manifest", self.dir_name()]);
            }
            return Err(VariantError::UnexpectedComponent {
                component: component.name().to_string(),
                what: "Manifest output directory",
            });
        }
        self.intermediates_dir(&["manifests", "full", self.dir_name()])
    }

    /// Incremental state for one task; `task_name` must be unique per task
    pub fn incremental_dir(&self, task_name: &str) -> Result<PathBuf> {
        Ok(self.intermediates_dir(&["incremental", task_name])?.to_path_buf())
    }

    pub fn generated_resources_dir(&self, task_name: &str) -> Result<Directory> {
        let mut sub_dirs = vec!["res", task_name];
        sub_dirs.extend(self.directory_segments().iter().map(String::as_str));
        self.generated_dir(&sub_dirs)
    }

    fn build_sub_dir(&self, child_dir: &str, sub_dirs: &[&str]) -> Result<Directory> {
        // Guards against passing file names where directories are expected.
        if let Some(segment) = sub_dirs.iter().find(|s| s.contains('.')) {
            return Err(VariantError::PathConfiguration {
                segment: segment.to_string(),
                path: format!("{}/{}", child_dir, sub_dirs.join("/")),
            });
        }

        let relative = std::iter::once(child_dir)
            .chain(sub_dirs.iter().copied().filter(|s| !s.is_empty()))
            .collect::<Vec<_>>()
            .join("/");
        Ok(self.build_dir.dir(&relative))
    }
}
