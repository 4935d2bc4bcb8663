//! Store module - Text I/O used by the renderer
//!
//! The renderer never touches the filesystem directly; it goes through a
//! [`TextStore`], which keeps the substitution logic testable in memory.

use std::io;
use std::path::Path;
use tracing::debug;

/// Text file access needed by the renderer
pub trait TextStore {
    /// Whether a file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8 text
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Write `text` to `path`, replacing any previous content
    fn write_text(&self, path: &Path, text: &str) -> io::Result<()>;
}

/// Filesystem-backed store
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl TextStore for FsStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        let text = std::fs::read_to_string(path)?;
        debug!("Read template {} ({} bytes)", path.display(), text.len());
        Ok(text)
    }

    fn write_text(&self, path: &Path, text: &str) -> io::Result<()> {
        std::fs::write(path, text)?;
        debug!("Wrote {} ({} bytes)", path.display(), text.len());
        Ok(())
    }
}

impl<S: TextStore + ?Sized> TextStore for &S {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        (**self).read_text(path)
    }

    fn write_text(&self, path: &Path, text: &str) -> io::Result<()> {
        (**self).write_text(path, text)
    }
}
