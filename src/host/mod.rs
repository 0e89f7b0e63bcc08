//! Host abstraction consumed by the task provider and command handler.
//!
//! [`Host`] is the full surface this crate reads from its surroundings:
//! platform identification, a configuration snapshot, active-editor
//! introspection, and the shell-execution primitive. Task registration
//! and enumeration are *not* part of it; they live in
//! [`Extension`](crate::extension::Extension), which models the host's
//! task subsystem.
//!
//! Two implementations ship with the crate:
//!
//! - [`local::LocalHost`] runs tasks through the platform shell, for use
//!   outside an editor.
//! - [`mock::MockHost`] records executions, for tests and dry runs.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::platform::Platform;
use crate::types::settings::WorkspaceSettings;
use crate::types::task::Task;

pub mod local;
pub mod mock;

pub use local::LocalHost;

/// The document open in the host's active editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    /// Full path of the document's file.
    pub file_name: String,
}

impl ActiveDocument {
    /// Creates an active document for the given file path.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// The file's base name (final path component).
    ///
    /// # Examples
    ///
    /// ```
    /// use povray_tasks::host::ActiveDocument;
    ///
    /// let doc = ActiveDocument::new("/scenes/teapot.pov");
    /// assert_eq!(doc.basename(), "teapot.pov");
    /// ```
    pub fn basename(&self) -> &str {
        self.file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.file_name)
    }

    /// The file's extension including the leading dot, or `None` when
    /// the base name has no dot (or only a leading one).
    ///
    /// # Examples
    ///
    /// ```
    /// use povray_tasks::host::ActiveDocument;
    ///
    /// assert_eq!(ActiveDocument::new("a/teapot.pov").extension(), Some(".pov"));
    /// assert_eq!(ActiveDocument::new("Makefile").extension(), None);
    /// assert_eq!(ActiveDocument::new(".gitignore").extension(), None);
    /// ```
    pub fn extension(&self) -> Option<&str> {
        let basename = self.basename();
        match basename.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&basename[idx..]),
        }
    }
}

/// The host runtime surface the integration consumes.
///
/// Implementations must be cheap to query: `configuration` and
/// `active_document` return snapshots, so callbacks stay free of shared
/// mutable state.
#[async_trait]
pub trait Host: Send + Sync {
    /// The platform tasks will run on.
    fn platform(&self) -> Platform;

    /// A snapshot of the current workspace configuration.
    fn configuration(&self) -> WorkspaceSettings;

    /// The document in the active editor, if any.
    fn active_document(&self) -> Option<ActiveDocument>;

    /// Runs the task's shell command. The renderer's own failures (spawn
    /// errors, non-zero exit) surface here and nowhere else.
    async fn execute_task(&self, task: &Task) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_handles_both_separators() {
        assert_eq!(
            ActiveDocument::new("/scenes/teapot.pov").basename(),
            "teapot.pov"
        );
        assert_eq!(
            ActiveDocument::new(r"C:\scenes\teapot.pov").basename(),
            "teapot.pov"
        );
        assert_eq!(ActiveDocument::new("teapot.pov").basename(), "teapot.pov");
    }

    #[test]
    fn extension_includes_leading_dot() {
        assert_eq!(
            ActiveDocument::new("/scenes/teapot.pov").extension(),
            Some(".pov")
        );
        assert_eq!(
            ActiveDocument::new("render-settings.ini").extension(),
            Some(".ini")
        );
    }

    #[test]
    fn extension_absent_for_dotless_and_hidden_files() {
        assert_eq!(ActiveDocument::new("/scenes/Makefile").extension(), None);
        assert_eq!(ActiveDocument::new("/scenes/.hidden").extension(), None);
    }

    #[test]
    fn extension_uses_last_dot() {
        assert_eq!(
            ActiveDocument::new("scene.final.pov").extension(),
            Some(".pov")
        );
    }
}
