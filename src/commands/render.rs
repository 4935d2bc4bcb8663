//! Comando render - Renderiza um template

use anyhow::{Context, Result};
use colored::*;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use stencil::core::utils::Status;
use stencil::core::{Job, TemplateRenderer, placeholders};

pub struct RenderOptions {
    pub job: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub inline: Option<String>,
    pub vars_file: Option<PathBuf>,
    pub vars: Vec<String>,
    pub output: Option<PathBuf>,
    pub single_pass: bool,
    pub strict: bool,
}

pub fn run(options: RenderOptions, status: &Status) -> Result<()> {
    let mut job = match &options.job {
        Some(path) => {
            status.step(&format!("Job: {}", path.display().to_string().bright_cyan()));
            Job::load(path)?
        }
        None => Job::default(),
    };

    // Command line wins over the job file
    if let Some(path) = options.template {
        job.template_file = Some(path);
        job.template = None;
    }
    if let Some(text) = options.inline {
        job.template = Some(text);
        job.template_file = None;
    }
    if let Some(path) = options.output {
        job.output_file = Some(path);
    }
    if options.single_pass {
        job.single_pass = true;
    }

    let mut renderer = TemplateRenderer::new();
    job.apply(&mut renderer)?;

    let mut variables = renderer.variables().clone();
    variables.merge(super::collect_variables(
        options.vars_file.as_deref(),
        &options.vars,
    )?);
    renderer.set_variables(variables);

    debug!(
        "Rendering with {} variables ({:?})",
        renderer.variables().len(),
        renderer.substitution()
    );

    if let Some(path) = renderer.template_file() {
        status.step(&format!("Template: {}", path.display()));
    }

    let rendered = renderer.render()?;

    if options.strict {
        let leftover = placeholders(&rendered, renderer.delimiters());
        if !leftover.is_empty() {
            anyhow::bail!("Placeholders sem valor: {}", leftover.join(", "));
        }
    }

    if let Some(path) = renderer.output_file() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    renderer.write_output(&rendered)?;

    match renderer.output_file() {
        Some(path) => {
            status.success(&format!(
                "Arquivo gerado: {} ({} bytes)",
                path.display().to_string().bright_cyan(),
                rendered.len()
            ));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
