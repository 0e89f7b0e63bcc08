//! Provider/command registries and activation.
//!
//! This module models the slice of a host's task subsystem the
//! integration touches: providers registered by task type, commands
//! registered by id, and the fetch-then-execute pipeline a command
//! handler runs through. The host-driven callbacks are two narrow
//! traits -- [`TaskProvider`] and [`CommandHandler`] -- and the
//! [`Extension`] registry wires them to whatever [`Host`] is in play.
//!
//! [`activate`] is the one-call entry point that performs the two
//! POV-Ray registrations: the render task provider under `povray` and
//! the render command under `povray.render`.

use async_trait::async_trait;

use crate::commands::RenderSceneCommand;
use crate::error::Result;
use crate::host::Host;
use crate::provider::RenderTaskProvider;
use crate::types::task::{Task, TaskDefinition, POVRAY_TASK_TYPE, RENDER_COMMAND_ID};

pub mod builder;
pub mod core;

pub use self::builder::ExtensionBuilder;
pub use self::core::Extension;

/// Supplies buildable tasks on demand.
///
/// The host (here, [`Extension`]) queries providers when tasks are
/// enumerated; providers read host state through the `Host` reference
/// they are handed and never hold state of their own between calls.
#[async_trait]
pub trait TaskProvider: Send + Sync {
    /// Describes the tasks currently available from this provider.
    async fn provide_tasks(&self, host: &dyn Host) -> Result<Vec<Task>>;

    /// Fills in a host-recalled task. The default is pass-through.
    async fn resolve_task(&self, task: Task, _host: &dyn Host) -> Result<Task> {
        Ok(task)
    }
}

/// Handles an externally invoked command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Runs the command against the given context.
    async fn handle(&self, ctx: CommandContext<'_>) -> Result<CommandOutcome>;
}

/// What invoking a command did.
///
/// A failed task lookup is an outcome, not an error: the host may simply
/// not have the task registered yet. Callers that want to surface it can
/// match on [`CommandOutcome::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A matching task was found and handed to the host for execution.
    Executed {
        /// Name of the executed task.
        task_name: String,
    },
    /// No registered task matched the lookup predicate; nothing ran.
    NotFound,
}

/// The two-step pipeline a command handler works with: enumerate
/// candidate tasks, then execute one.
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    extension: &'a Extension,
    host: &'a dyn Host,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(extension: &'a Extension, host: &'a dyn Host) -> Self {
        Self { extension, host }
    }

    /// The host the command was invoked against.
    pub fn host(&self) -> &'a dyn Host {
        self.host
    }

    /// Fetches the tasks matching a definition by querying the provider
    /// registered for its type.
    pub async fn fetch_tasks(&self, definition: &TaskDefinition) -> Result<Vec<Task>> {
        self.extension
            .provide_tasks(&definition.task_type, self.host)
            .await
    }

    /// Hands a task to the host for execution.
    pub async fn execute(&self, task: &Task) -> Result<()> {
        self.host.execute_task(task).await
    }
}

impl std::fmt::Debug for CommandContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext").finish_non_exhaustive()
    }
}

/// Builds the POV-Ray extension: one render task provider and one render
/// command, the same registrations the editor activation performs.
///
/// # Errors
///
/// Propagates [`Error::Validation`](crate::Error::Validation) from the
/// builder; with the fixed registrations used here that does not happen
/// in practice.
///
/// # Examples
///
/// ```
/// let extension = povray_tasks::activate().unwrap();
/// assert!(extension.has_command(povray_tasks::RENDER_COMMAND_ID));
/// ```
pub fn activate() -> Result<Extension> {
    ExtensionBuilder::new()
        .name("povray")
        .version(env!("CARGO_PKG_VERSION"))
        .task_provider(POVRAY_TASK_TYPE, RenderTaskProvider::new())
        .command(RENDER_COMMAND_ID, RenderSceneCommand::new())
        .build()
}
