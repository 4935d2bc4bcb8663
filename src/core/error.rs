//! Error types for template configuration and rendering

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    /// A setter or a variable constructor received an invalid value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "Either a template or a template file must be set. \
         Use set_template() or set_template_file() to set them."
    )]
    NoTemplateConfigured,

    #[error("Template file does not exist: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TemplateError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
