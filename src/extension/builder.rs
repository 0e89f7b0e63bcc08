//! Builder pattern for constructing [`Extension`] instances.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::extension::core::Extension;
use crate::extension::{CommandHandler, TaskProvider};

/// Builder for constructing an [`Extension`].
///
/// Registrations mirror what an editor activation does: providers keyed
/// by task type, command handlers keyed by command id.
///
/// # Examples
///
/// ```
/// use povray_tasks::extension::ExtensionBuilder;
/// use povray_tasks::{RenderSceneCommand, RenderTaskProvider};
///
/// let extension = ExtensionBuilder::new()
///     .name("povray")
///     .version("0.1.0")
///     .task_provider("povray", RenderTaskProvider::new())
///     .command("povray.render", RenderSceneCommand::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(extension.name(), "povray");
/// ```
#[derive(Default)]
pub struct ExtensionBuilder {
    name: Option<String>,
    version: Option<String>,
    providers: HashMap<String, Arc<dyn TaskProvider>>,
    commands: HashMap<String, Arc<dyn CommandHandler>>,
}

impl ExtensionBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the extension name. Required.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the extension version. Required.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Registers a task provider for a task type.
    ///
    /// Registering a second provider for the same type replaces the
    /// first, as a host's re-registration would.
    pub fn task_provider(
        mut self,
        task_type: impl Into<String>,
        provider: impl TaskProvider + 'static,
    ) -> Self {
        self.providers
            .insert(task_type.into(), Arc::new(provider) as Arc<dyn TaskProvider>);
        self
    }

    /// Registers a task provider from an existing `Arc`.
    pub fn task_provider_arc(
        mut self,
        task_type: impl Into<String>,
        provider: Arc<dyn TaskProvider>,
    ) -> Self {
        self.providers.insert(task_type.into(), provider);
        self
    }

    /// Registers a command handler for a command id.
    pub fn command(
        mut self,
        command_id: impl Into<String>,
        handler: impl CommandHandler + 'static,
    ) -> Self {
        self.commands.insert(
            command_id.into(),
            Arc::new(handler) as Arc<dyn CommandHandler>,
        );
        self
    }

    /// Registers a command handler from an existing `Arc`.
    pub fn command_arc(
        mut self,
        command_id: impl Into<String>,
        handler: Arc<dyn CommandHandler>,
    ) -> Self {
        self.commands.insert(command_id.into(), handler);
        self
    }

    /// Builds the extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when name or version is missing.
    pub fn build(self) -> Result<Extension> {
        let name = self
            .name
            .ok_or_else(|| Error::validation("extension name is required"))?;
        let version = self
            .version
            .ok_or_else(|| Error::validation("extension version is required"))?;

        Ok(Extension::new(name, version, self.providers, self.commands))
    }
}

impl std::fmt::Debug for ExtensionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionBuilder")
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
    use crate::commands::RenderSceneCommand;
    use crate::provider::RenderTaskProvider;

    #[test]
    fn build_requires_name() {
        let err = ExtensionBuilder::new().version("0.1.0").build().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn build_requires_version() {
        let err = ExtensionBuilder::new().name("povray").build().unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn build_with_registrations() {
        let extension = ExtensionBuilder::new()
            .name("povray")
            .version("0.1.0")
            .task_provider("povray", RenderTaskProvider::new())
            .command("povray.render", RenderSceneCommand::new())
            .build()
            .unwrap();

        assert!(extension.has_provider("povray"));
        assert!(extension.has_command("povray.render"));
        assert!(!extension.has_provider("make"));
    }

    #[tokio::test]
    async fn arc_registrations_share_one_handler_across_extensions() {
        use crate::extension::{CommandOutcome, TaskProvider};
        use crate::host::mock::MockHost;

        let provider: Arc<dyn TaskProvider> = Arc::new(RenderTaskProvider::new());
        let handler: Arc<dyn CommandHandler> = Arc::new(RenderSceneCommand::new());

        let build = |provider: Arc<dyn TaskProvider>, handler: Arc<dyn CommandHandler>| {
            ExtensionBuilder::new()
                .name("povray")
                .version("0.1.0")
                .task_provider_arc("povray", provider)
                .command_arc("povray.render", handler)
                .build()
                .unwrap()
        };

        let first = build(Arc::clone(&provider), Arc::clone(&handler));
        let second = build(provider, handler);

        let host = MockHost::new().with_active_document("/scenes/teapot.pov");
        for extension in [&first, &second] {
            let outcome = extension.run_command("povray.render", &host).await.unwrap();
            assert!(matches!(outcome, CommandOutcome::Executed { .. }));
        }
        assert_eq!(host.executed_tasks().len(), 2);
    }

    #[test]
    fn later_provider_replaces_earlier() {
        let extension = ExtensionBuilder::new()
            .name("povray")
            .version("0.1.0")
            .task_provider("povray", RenderTaskProvider::new())
            .task_provider("povray", RenderTaskProvider::new())
            .build()
            .unwrap();

        assert!(extension.has_provider("povray"));
    }
}
