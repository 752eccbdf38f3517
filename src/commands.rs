//! CLI commands for R-Droid variant resolution
//!
//! Provides command-line interface functionality for automation and scripting.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use tracing::info;

use r_droid_core::{BuildSession, ProjectConfig};
use r_droid_options::RawValue;

/// Parse a `name=value` project property given on the command line
pub fn parse_property(arg: &str) -> Result<(String, RawValue)> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => {
            Ok((name.to_string(), RawValue::Text(value.to_string())))
        }
        _ => bail!("Expected a project property as name=value, got '{}'", arg),
    }
}

/// Load the project configuration from a file or a project directory
async fn load_session(project_path: &Path, properties: &[(String, RawValue)]) -> Result<BuildSession> {
    let config = if project_path.is_dir() {
        ProjectConfig::load_from_dir(project_path).await
    } else {
        ProjectConfig::load(project_path).await
    }
    .with_context(|| format!("Failed to load project configuration from {:?}", project_path))?;

    let session = BuildSession::new(config, properties.to_vec())
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    Ok(session)
}

/// Paths command options
pub struct PathsCommand {
    /// Project directory or configuration file
    pub project_path: PathBuf,
    /// Command-line project properties
    pub properties: Vec<(String, RawValue)>,
    /// Only report this variant (full name including any split)
    pub variant: Option<String>,
    /// Render JSON instead of text
    pub json: bool,
}

impl PathsCommand {
    /// Execute the paths command and render its output
    pub async fn execute(&self) -> Result<String> {
        let session = load_session(&self.project_path, &self.properties).await?;

        let reports = match &self.variant {
            Some(name) => {
                let resolver = session
                    .resolver(name)
                    .with_context(|| format!("No variant named '{}'", name))?;
                vec![session.report_for(resolver)?]
            }
            None => session.report()?,
        };
        info!("Resolved {} variant(s)", reports.len());

        if self.json {
            return Ok(serde_json::to_string_pretty(&reports)?);
        }

        let mut out = String::new();
        for report in &reports {
            writeln!(out, "{}", report.full_name)?;
            writeln!(out, "  base name:      {}", report.base_name)?;
            writeln!(out, "  directory:      {}", report.dir_name)?;
            writeln!(out, "  output file:    {}", report.output_file_name)?;
            writeln!(out, "  apk location:   {}", report.apk_location.display())?;
            if let Some(manifest) = &report.manifest_output_directory {
                writeln!(out, "  manifests:      {}", manifest.display())?;
            }
            writeln!(out, "  build config:   {}", report.build_config_source_output_dir.display())?;
            writeln!(out, "  coverage:       {}", report.coverage_report_dir.display())?;
        }
        Ok(out)
    }
}

/// Options command options
pub struct OptionsCommand {
    /// Project directory or configuration file
    pub project_path: PathBuf,
    /// Command-line project properties
    pub properties: Vec<(String, RawValue)>,
    /// Render JSON instead of text
    pub json: bool,
}

impl OptionsCommand {
    /// Execute the options command and render its output
    pub async fn execute(&self) -> Result<String> {
        let session = load_session(&self.project_path, &self.properties).await?;
        let options = session.options();

        if self.json {
            let value = serde_json::json!({
                "options": options.resolved(),
                "diagnostics": options.diagnostics(),
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut out = String::new();
        for option in options.resolved() {
            writeln!(
                out,
                "{} = {} [{}, from {}]",
                option.property,
                option.value,
                option.stage.label(),
                option.source
            )?;
        }
        for diagnostic in options.diagnostics() {
            writeln!(out, "warning: {}", diagnostic)?;
        }
        Ok(out)
    }
}
