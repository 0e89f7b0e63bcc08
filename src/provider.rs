//! The POV-Ray render task provider.
//!
//! Each `provide_tasks` call snapshots the host's configuration and
//! active document, assembles the render command for that state, and
//! returns exactly one build task. Nothing is cached between calls; the
//! task's `reevaluate_on_rerun` flag tells the host to come back here on
//! every rerun so setting and file changes take effect immediately.

use async_trait::async_trait;

use crate::command::{assemble_render_command, RenderContext};
use crate::error::Result;
use crate::extension::TaskProvider;
use crate::host::Host;
use crate::types::task::{
    PresentationOptions, RunOptions, ShellExecution, Task, TaskDefinition, TaskGroup,
    POVRAY_PROBLEM_MATCHER, RENDER_TASK_NAME, TASK_SOURCE,
};

/// Provides the `Render Scene` build task.
///
/// # Examples
///
/// ```
/// use povray_tasks::extension::TaskProvider;
/// use povray_tasks::host::mock::MockHost;
/// use povray_tasks::RenderTaskProvider;
///
/// # async fn example() -> povray_tasks::Result<()> {
/// let host = MockHost::new().with_active_document("/scenes/teapot.pov");
/// let tasks = RenderTaskProvider::new().provide_tasks(&host).await?;
/// assert_eq!(tasks.len(), 1);
/// assert_eq!(tasks[0].name, "Render Scene");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderTaskProvider;

impl RenderTaskProvider {
    /// Creates the provider.
    pub fn new() -> Self {
        Self
    }

    /// Builds the assembly context from a host snapshot.
    fn render_context(host: &dyn Host) -> RenderContext {
        let settings = host.configuration();
        let file_extension = host
            .active_document()
            .and_then(|doc| doc.extension().map(str::to_string));

        RenderContext {
            windows_shell: settings.windows_shell().map(str::to_string),
            settings: settings.povray,
            platform: host.platform(),
            file_extension,
        }
    }
}

#[async_trait]
impl TaskProvider for RenderTaskProvider {
    async fn provide_tasks(&self, host: &dyn Host) -> Result<Vec<Task>> {
        let command = assemble_render_command(&Self::render_context(host));

        let task = Task::new(
            TaskDefinition::povray(),
            RENDER_TASK_NAME,
            TASK_SOURCE,
            ShellExecution::new(command),
        )
        .with_group(TaskGroup::Build)
        .with_problem_matcher(POVRAY_PROBLEM_MATCHER)
        .with_presentation(PresentationOptions {
            clear: true,
            show_reuse_message: false,
        })
        .with_run_options(RunOptions {
            reevaluate_on_rerun: true,
        });

        Ok(vec![task])
    }
}
