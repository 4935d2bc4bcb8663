//! Configuration module - Placeholder syntax and defaults

/// Placeholder delimiters
pub mod delimiters {
    /// Default opening marker
    pub const OPEN: &str = "%%";

    /// Default closing marker
    pub const CLOSE: &str = "%%";
}

/// Variable naming rules
pub mod names {
    /// Pattern every variable name must match
    pub const PATTERN: &str = r"^[A-Za-z0-9_.-]+$";
}

/// Job file defaults
pub mod job {
    /// File name looked up when `--job` points at a directory
    pub const DEFAULT_FILE: &str = "stencil.toml";
}
