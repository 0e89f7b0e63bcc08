//! The extension registry: providers by task type, commands by id.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::extension::{CommandContext, CommandHandler, CommandOutcome, TaskProvider};
use crate::host::Host;
use crate::types::task::Task;

/// An activated extension: the registered task providers and commands.
///
/// `Extension` stands in for the host's task/command subsystem. It owns
/// no other state; every query flows through to a provider or handler
/// with a fresh view of the host.
pub struct Extension {
    name: String,
    version: String,
    providers: HashMap<String, Arc<dyn TaskProvider>>,
    commands: HashMap<String, Arc<dyn CommandHandler>>,
}

impl Extension {
    pub(crate) fn new(
        name: String,
        version: String,
        providers: HashMap<String, Arc<dyn TaskProvider>>,
        commands: HashMap<String, Arc<dyn CommandHandler>>,
    ) -> Self {
        Self {
            name,
            version,
            providers,
            commands,
        }
    }

    /// The extension name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The extension version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns `true` when a provider is registered for the task type.
    pub fn has_provider(&self, task_type: &str) -> bool {
        self.providers.contains_key(task_type)
    }

    /// Returns `true` when a handler is registered for the command id.
    pub fn has_command(&self, command_id: &str) -> bool {
        self.commands.contains_key(command_id)
    }

    /// Enumerates the tasks for a task type by querying its provider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProvider`] when no provider is registered for
    /// the type; provider errors propagate.
    pub async fn provide_tasks(&self, task_type: &str, host: &dyn Host) -> Result<Vec<Task>> {
        let provider = self
            .providers
            .get(task_type)
            .ok_or_else(|| Error::NoProvider {
                task_type: task_type.to_string(),
            })?;

        provider.provide_tasks(host).await
    }

    /// Resolves a host-recalled task through its type's provider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoProvider`] when no provider is registered for
    /// the task's type.
    pub async fn resolve_task(&self, task: Task, host: &dyn Host) -> Result<Task> {
        let provider = self
            .providers
            .get(&task.definition.task_type)
            .ok_or_else(|| Error::NoProvider {
                task_type: task.definition.task_type.clone(),
            })?;

        provider.resolve_task(task, host).await
    }

    /// Invokes a registered command against a host.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCommand`] for an unregistered id; handler
    /// errors propagate. A failed *task* lookup is not an error -- it
    /// comes back as [`CommandOutcome::NotFound`].
    pub async fn run_command(
        &self,
        command_id: &str,
        host: &dyn Host,
    ) -> Result<CommandOutcome> {
        let handler = self
            .commands
            .get(command_id)
            .ok_or_else(|| Error::UnknownCommand {
                command_id: command_id.to_string(),
            })?;

        tracing::debug!(command = command_id, "running command");
        handler.handle(CommandContext::new(self, host)).await
    }
}

impl std::fmt::Debug for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extension")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::ExtensionBuilder;
    use crate::host::mock::MockHost;
    use crate::types::task::TaskDefinition;
    use async_trait::async_trait;

    struct EmptyProvider;

    #[async_trait]
    impl TaskProvider for EmptyProvider {
        async fn provide_tasks(&self, _host: &dyn Host) -> Result<Vec<Task>> {
            Ok(Vec::new())
        }
    }

    fn extension_with_empty_provider() -> Extension {
        ExtensionBuilder::new()
            .name("povray")
            .version("0.1.0")
            .task_provider("povray", EmptyProvider)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn provide_tasks_requires_registered_provider() {
        let extension = extension_with_empty_provider();
        let host = MockHost::new();

        assert!(extension.provide_tasks("povray", &host).await.is_ok());

        let err = extension.provide_tasks("make", &host).await.unwrap_err();
        assert!(matches!(err, Error::NoProvider { .. }));
    }

    #[tokio::test]
    async fn run_command_rejects_unknown_id() {
        let extension = extension_with_empty_provider();
        let host = MockHost::new();

        let err = extension
            .run_command("povray.render", &host)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnknownCommand { .. }));
    }

    #[tokio::test]
    async fn resolve_task_defaults_to_pass_through() {
        let extension = extension_with_empty_provider();
        let host = MockHost::new();
        let task = Task::new(
            TaskDefinition::povray(),
            "anything",
            "test",
            crate::types::task::ShellExecution::new("povray x.pov"),
        );

        let resolved = extension.resolve_task(task.clone(), &host).await.unwrap();
        assert_eq!(resolved, task);
    }
}
