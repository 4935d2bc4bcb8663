//! Módulo de comandos do Stencil

pub mod placeholders;
pub mod render;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use stencil::core::Variables;

/// Variables from an optional TOML file, then `KEY=VALUE` overrides
pub fn collect_variables(vars_file: Option<&Path>, assignments: &[String]) -> Result<Variables> {
    let mut variables = Variables::new();

    if let Some(path) = vars_file {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read variables file: {}", path.display()))?;
        let table: toml::Table = toml::from_str(&content)
            .context(format!("Invalid TOML in variables file: {}", path.display()))?;
        variables = Variables::try_from(table)
            .context(format!("Invalid variables in {}", path.display()))?;
        debug!("Loaded {} variables from {}", variables.len(), path.display());
    }

    for assignment in assignments {
        variables
            .insert_assignment(assignment)
            .context("Invalid --var")?;
    }

    Ok(variables)
}
