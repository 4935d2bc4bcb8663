//! Comando placeholders - Lista os placeholders de um template

use anyhow::Result;
use colored::*;
use std::path::Path;

use stencil::core::utils::Status;
use stencil::core::{TemplateRenderer, placeholders};

pub fn run(
    template: &Path,
    vars_file: Option<&Path>,
    vars: &[String],
    status: &Status,
) -> Result<()> {
    let variables = super::collect_variables(vars_file, vars)?;

    let mut renderer = TemplateRenderer::new();
    renderer.set_template_file(template)?;
    let text = renderer.load_template()?;

    let names = placeholders(&text, renderer.delimiters());
    status.info(&format!(
        "{} placeholders em {}",
        names.len(),
        template.display().to_string().bright_cyan()
    ));

    let mut unbound = 0;
    for name in &names {
        match variables.get(name) {
            Some(value) => println!("  {} {} = {}", "✓".bright_green(), name, value),
            None => {
                unbound += 1;
                println!("  {} {}", "✗".bright_red(), name);
            }
        }
    }

    let unused: Vec<&str> = variables
        .names()
        .filter(|name| !names.iter().any(|n| n == name))
        .collect();

    if !variables.is_empty() && unbound > 0 {
        status.warning(&format!("{} placeholders sem valor", unbound));
    }
    if !unused.is_empty() {
        status.warning(&format!("Variáveis não usadas: {}", unused.join(", ")));
    }

    Ok(())
}
