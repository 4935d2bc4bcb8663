//! Módulo core - Lógica central do Stencil

pub mod config;
pub mod error;
pub mod job;
pub mod renderer;
pub mod store;
pub mod utils;
pub mod variables;

pub use error::{Result, TemplateError};
pub use job::Job;
pub use renderer::{Delimiters, Substitution, TemplateRenderer, placeholders};
pub use store::{FsStore, TextStore};
pub use variables::{Number, Scalar, Variables};
