//! Scriptable host for tests and dry runs.
//!
//! [`MockHost`] answers every [`Host`] query from configured values and
//! records executed tasks instead of spawning anything. Execution can be
//! told to fail to exercise error paths.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::types::platform::Platform;
use crate::types::settings::WorkspaceSettings;
use crate::types::task::Task;

use super::{ActiveDocument, Host};

/// A host whose answers are entirely configured by the test.
///
/// # Examples
///
/// ```
/// use povray_tasks::host::mock::MockHost;
/// use povray_tasks::types::platform::Platform;
///
/// let host = MockHost::new()
///     .with_platform(Platform::Linux)
///     .with_active_document("/scenes/teapot.pov");
///
/// assert!(host.executed_tasks().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MockHost {
    settings: WorkspaceSettings,
    active_document: Option<ActiveDocument>,
    platform: Platform,
    fail_execution: bool,
    executed: Mutex<Vec<Task>>,
}

impl MockHost {
    /// Creates a host with default settings, no active document, and the
    /// current platform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the workspace settings snapshot.
    pub fn with_settings(mut self, settings: WorkspaceSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the reported platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Sets the active document.
    pub fn with_active_document(mut self, file_name: impl Into<String>) -> Self {
        self.active_document = Some(ActiveDocument::new(file_name));
        self
    }

    /// Makes every `execute_task` call fail with an execution error.
    pub fn with_failing_execution(mut self) -> Self {
        self.fail_execution = true;
        self
    }

    /// The tasks executed so far, in order.
    pub fn executed_tasks(&self) -> Vec<Task> {
        self.executed.lock().clone()
    }
}

#[async_trait]
impl Host for MockHost {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn configuration(&self) -> WorkspaceSettings {
        self.settings.clone()
    }

    fn active_document(&self) -> Option<ActiveDocument> {
        self.active_document.clone()
    }

    async fn execute_task(&self, task: &Task) -> Result<()> {
        if self.fail_execution {
            return Err(Error::execution(format!(
                "mock host refused to run {}",
                task.name
            )));
        }
        self.executed.lock().push(task.clone());
        Ok(())
    }
}
