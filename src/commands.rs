//! The render command handler.
//!
//! `povray.render` is the externally invocable action: enumerate the
//! `povray` tasks, pick the `Render Scene` build task, and hand it to
//! the host. When nothing matches, the handler logs a warning and
//! reports [`CommandOutcome::NotFound`]; it never errors for that case
//! (the host may simply not have finished registering tasks).

use async_trait::async_trait;

use crate::error::Result;
use crate::extension::{CommandContext, CommandHandler, CommandOutcome};
use crate::types::task::{TaskDefinition, TaskGroup, RENDER_TASK_NAME};

/// Finds and executes the `Render Scene` build task.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderSceneCommand;

impl RenderSceneCommand {
    /// Creates the handler.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandHandler for RenderSceneCommand {
    async fn handle(&self, ctx: CommandContext<'_>) -> Result<CommandOutcome> {
        let tasks = ctx.fetch_tasks(&TaskDefinition::povray()).await?;

        let render_task = tasks
            .iter()
            .find(|task| task.matches(RENDER_TASK_NAME, TaskGroup::Build));

        match render_task {
            Some(task) => {
                ctx.execute(task).await?;
                Ok(CommandOutcome::Executed {
                    task_name: task.name.clone(),
                })
            }
            None => {
                tracing::warn!(
                    task = RENDER_TASK_NAME,
                    group = %TaskGroup::Build,
                    "no matching render task; nothing executed"
                );
                Ok(CommandOutcome::NotFound)
            }
        }
    }
}
