//! Settings, platform, and task wire types.
//!
//! - [`settings`] - User configuration (`povray.*`, `terminal.*` sections)
//! - [`platform`] - Platform family detection
//! - [`task`] - Task wire types in the host's schema

pub mod platform;
pub mod settings;
pub mod task;

pub use platform::Platform;
pub use settings::{RenderSettings, TerminalSettings, WorkspaceSettings};
pub use task::{
    PresentationOptions, RunOptions, ShellExecution, Task, TaskDefinition, TaskGroup,
};
