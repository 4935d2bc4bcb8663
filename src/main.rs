//! Stencil - Gerador de arquivos a partir de templates
//!
//! O molde onde forjamos Dockerfiles e arquivos de configuração.
//!
//! # Uso
//! ```bash
//! stencil render -t Dockerfile.tpl -V BASE_IMAGE=alpine:3.18 -o Dockerfile
//! stencil render --job stencil.toml
//! stencil placeholders Dockerfile.tpl --vars vars.toml
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use stencil::core::utils::Status;

mod commands;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "📐 Stencil - Gera arquivos a partir de templates %%VAR%%", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Renderiza um template
    Render {
        /// Arquivo de job (TOML) com template, saída e variáveis
        #[arg(long)]
        job: Option<PathBuf>,

        /// Arquivo de template
        #[arg(short, long, conflicts_with = "inline")]
        template: Option<PathBuf>,

        /// Template inline
        #[arg(short, long)]
        inline: Option<String>,

        /// Arquivo de variáveis (TOML)
        #[arg(long = "vars")]
        vars_file: Option<PathBuf>,

        /// Variável (KEY=VALUE), pode repetir
        #[arg(short = 'V', long = "var")]
        vars: Vec<String>,

        /// Arquivo de saída (padrão: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Substitui tudo numa única passada, sem reprocessar valores
        #[arg(long)]
        single_pass: bool,

        /// Falha se sobrar algum placeholder sem valor
        #[arg(long)]
        strict: bool,
    },

    /// Lista os placeholders de um template
    Placeholders {
        /// Arquivo de template
        template: PathBuf,

        /// Arquivo de variáveis (TOML)
        #[arg(long = "vars")]
        vars_file: Option<PathBuf>,

        /// Variável (KEY=VALUE), pode repetir
        #[arg(short = 'V', long = "var")]
        vars: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    debug!("Logging initialized with level: {}", level);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let status = Status::new(cli.quiet);

    // Banner
    if !status.is_quiet() {
        eprintln!("{}", "📐 Stencil - Gerador de arquivos".bright_cyan().bold());
        eprintln!("{}", "   O molde onde forjamos a configuração".bright_black());
        eprintln!();
    }

    let result = match cli.command {
        Commands::Render {
            job,
            template,
            inline,
            vars_file,
            vars,
            output,
            single_pass,
            strict,
        } => commands::render::run(
            commands::render::RenderOptions {
                job,
                template,
                inline,
                vars_file,
                vars,
                output,
                single_pass,
                strict,
            },
            &status,
        ),
        Commands::Placeholders {
            template,
            vars_file,
            vars,
        } => commands::placeholders::run(&template, vars_file.as_deref(), &vars, &status),
    };

    if let Err(e) = result {
        status.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
