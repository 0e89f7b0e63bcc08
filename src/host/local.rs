//! A standalone host that runs tasks through the platform shell.
//!
//! [`LocalHost`] fills the host role when no editor is around: settings
//! come from a [`WorkspaceSettings`] value (typically loaded from a TOML
//! file), the "active document" is whatever the caller points it at, and
//! task execution expands `${fileBasename}` and spawns the command
//! through `cmd /C` or `sh -c`.
//!
//! # Examples
//!
//! ```no_run
//! use povray_tasks::host::local::LocalHost;
//! use povray_tasks::types::settings::WorkspaceSettings;
//! use povray_tasks::{activate, RENDER_COMMAND_ID};
//!
//! # async fn example() -> povray_tasks::Result<()> {
//! let host = LocalHost::new(WorkspaceSettings::load(".povray.toml")?);
//! host.open_document("scenes/teapot.pov");
//!
//! let extension = activate()?;
//! extension.run_command(RENDER_COMMAND_ID, &host).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::process::Command;

use crate::command::FILE_BASENAME_PLACEHOLDER;
use crate::error::{Error, Result};
use crate::types::platform::Platform;
use crate::types::settings::WorkspaceSettings;
use crate::types::task::Task;

use super::{ActiveDocument, Host};

/// Host implementation that executes tasks on the local machine.
#[derive(Debug)]
pub struct LocalHost {
    settings: RwLock<WorkspaceSettings>,
    active_document: RwLock<Option<ActiveDocument>>,
    platform: Platform,
}

impl LocalHost {
    /// Creates a host with the given settings, no active document, and
    /// the current platform.
    pub fn new(settings: WorkspaceSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
            active_document: RwLock::new(None),
            platform: Platform::current(),
        }
    }

    /// Overrides the detected platform. Mostly useful for exercising the
    /// Windows branch off-platform; execution still uses the real shell.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Replaces the workspace settings.
    pub fn update_settings(&self, settings: WorkspaceSettings) {
        *self.settings.write() = settings;
    }

    /// Points the active document at the given file.
    pub fn open_document(&self, file_name: impl Into<String>) {
        *self.active_document.write() = Some(ActiveDocument::new(file_name));
    }

    /// Clears the active document.
    pub fn close_document(&self) {
        *self.active_document.write() = None;
    }

    /// Expands host variables in a command line against the active
    /// document. With no active document the placeholder is left as-is
    /// and the shell will report the missing file.
    fn expand_variables(&self, command_line: &str) -> String {
        match self.active_document.read().as_ref() {
            Some(doc) => command_line.replace(FILE_BASENAME_PLACEHOLDER, doc.basename()),
            None => command_line.to_string(),
        }
    }
}

#[async_trait]
impl Host for LocalHost {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn configuration(&self) -> WorkspaceSettings {
        self.settings.read().clone()
    }

    fn active_document(&self) -> Option<ActiveDocument> {
        self.active_document.read().clone()
    }

    async fn execute_task(&self, task: &Task) -> Result<()> {
        let command_line = self.expand_variables(&task.execution.command_line);
        tracing::info!(task = %task.name, command = %command_line, "executing task");

        let mut command = if Platform::current().is_windows() {
            let mut c = Command::new("cmd");
            c.args(["/C", &command_line]);
            c
        } else {
            let mut c = Command::new("sh");
            c.args(["-c", &command_line]);
            c
        };

        let status = command
            .status()
            .await
            .map_err(|e| Error::execution(format!("failed to spawn {command_line:?}: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::execution(format!(
                "{command_line:?} exited with {status}"
            )))
        }
    }
}
