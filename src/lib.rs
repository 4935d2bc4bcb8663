//! Stencil - Gerador de arquivos a partir de templates
//!
//! Substitui placeholders `%%NOME%%` por valores escalares, tipicamente para
//! gerar Dockerfiles e arquivos de configuração.
//!
//! # Uso
//! ```
//! use stencil::core::{TemplateRenderer, Variables};
//!
//! let mut vars = Variables::new();
//! vars.insert("BASE_IMAGE", "alpine:3.18").unwrap();
//!
//! let mut renderer = TemplateRenderer::new();
//! renderer.set_template("FROM %%BASE_IMAGE%%").set_variables(vars);
//! assert_eq!(renderer.process().unwrap(), "FROM alpine:3.18");
//! ```

pub mod core;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
