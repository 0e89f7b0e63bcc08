//! Host-agnostic POV-Ray render task integration.
//!
//! This crate is the glue between an editor-like host and the external
//! POV-Ray renderer. It assembles the renderer's shell command line from
//! user configuration and the active file, exposes that command to the
//! host as a buildable, re-runnable task, and provides a command that
//! finds and re-executes the task by name and group.
//!
//! The crate is deliberately host-agnostic. All host-owned state
//! (settings, active document, platform) flows explicitly into a pure
//! command-assembly function, and the host-driven callbacks are modeled
//! as two narrow async traits wired together by a thin registry:
//!
//! - [`TaskProvider`] -- "describe available build actions"
//! - [`CommandHandler`] -- "handle invocation"
//!
//! # Module Organization
//!
//! - [`command`] - Pure render command-line assembly
//! - [`types`] - Settings, platform, and task wire types
//! - [`host`] - The [`Host`] trait plus local and mock implementations
//! - [`extension`] - Provider/command registries and activation
//! - [`provider`] - The POV-Ray render task provider
//! - [`commands`] - The render command handler
//! - [`error`] - Crate-wide error type
//!
//! # Examples
//!
//! ```
//! use povray_tasks::host::mock::MockHost;
//! use povray_tasks::types::settings::WorkspaceSettings;
//! use povray_tasks::{activate, CommandOutcome, RENDER_COMMAND_ID};
//!
//! # async fn example() -> povray_tasks::Result<()> {
//! let extension = activate()?;
//!
//! let host = MockHost::new()
//!     .with_settings(WorkspaceSettings::default())
//!     .with_active_document("/scenes/teapot.pov");
//!
//! match extension.run_command(RENDER_COMMAND_ID, &host).await? {
//!     CommandOutcome::Executed { task_name } => println!("ran {task_name}"),
//!     CommandOutcome::NotFound => println!("no render task available"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod commands;
pub mod error;
pub mod extension;
pub mod host;
#[cfg(feature = "logging")]
pub mod logging;
pub mod provider;
pub mod types;

// Re-exports for ergonomic access
pub use command::{assemble_render_command, RenderContext};
pub use commands::RenderSceneCommand;
pub use error::{Error, Result};
pub use extension::{
    activate, CommandContext, CommandHandler, CommandOutcome, Extension, ExtensionBuilder,
    TaskProvider,
};
pub use host::{ActiveDocument, Host};
pub use provider::RenderTaskProvider;
pub use types::platform::Platform;
pub use types::settings::{RenderSettings, WorkspaceSettings};
pub use types::task::{
    Task, TaskDefinition, TaskGroup, POVRAY_TASK_TYPE, RENDER_COMMAND_ID, RENDER_TASK_NAME,
};
