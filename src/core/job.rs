//! Job module - TOML description of a single render
//!
//! ```toml
//! template_file = "Dockerfile.tpl"
//! output_file = "Dockerfile"
//!
//! [variables]
//! BASE_IMAGE = "alpine:3.18"
//! PORT = 8080
//! ```
//!
//! Relative paths are resolved against the directory holding the job file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::config;
use super::renderer::{Substitution, TemplateRenderer};
use super::store::TextStore;
use super::variables::Variables;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    pub template_file: Option<PathBuf>,
    pub template: Option<String>,
    pub output_file: Option<PathBuf>,
    #[serde(default)]
    pub single_pass: bool,
    #[serde(default)]
    pub variables: toml::Table,
}

impl Job {
    /// Load a job file; a directory is searched for the default job file name
    pub fn load(path: &Path) -> Result<Self> {
        let path = if path.is_dir() {
            path.join(config::job::DEFAULT_FILE)
        } else {
            path.to_path_buf()
        };

        let content = std::fs::read_to_string(&path)
            .context(format!("Failed to read job file: {}", path.display()))?;
        let mut job = Self::parse(&content)
            .context(format!("Invalid job file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            job.resolve_paths(base);
        }

        Ok(job)
    }

    /// Parse job TOML without touching paths
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validated variables of this job, in file order
    pub fn variables(&self) -> Result<Variables> {
        Ok(Variables::try_from(self.variables.clone())?)
    }

    pub fn substitution(&self) -> Substitution {
        if self.single_pass {
            Substitution::SinglePass
        } else {
            Substitution::Sequential
        }
    }

    /// Copy this job's settings onto `renderer`
    pub fn apply<S: TextStore>(&self, renderer: &mut TemplateRenderer<S>) -> Result<()> {
        if let Some(path) = &self.template_file {
            renderer.set_template_file(path)?;
        }
        if let Some(template) = &self.template {
            renderer.set_template(template.as_str());
        }
        if let Some(path) = &self.output_file {
            renderer.set_output_file(path)?;
        }
        renderer
            .set_variables(self.variables()?)
            .set_substitution(self.substitution());
        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.template_file, &mut self.output_file]
            .into_iter()
            .flatten()
        {
            if path.is_relative() && !path.as_os_str().is_empty() {
                *path = base.join(&*path);
            }
        }
    }
}
