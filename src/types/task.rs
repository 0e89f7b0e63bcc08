//! Task wire types in the host's task schema.
//!
//! These types serialize to the shape an editor-like host expects for
//! task descriptions: `camelCase` fields, a `definition` object carrying
//! the task type plus arbitrary extra keys, and a shell-execution
//! payload. They have no lifecycle beyond a single provide/execute round
//! trip; the host owns scheduling, terminals, and output parsing.
//!
//! The fixed identifiers of the POV-Ray integration live here too:
//! the task type, the render task name and source, the problem matcher
//! name (opaque to this layer), and the externally invocable command id.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Task type registered with the host's task subsystem.
pub const POVRAY_TASK_TYPE: &str = "povray";

/// Name of the render build task.
pub const RENDER_TASK_NAME: &str = "Render Scene";

/// Source label shown by the host next to the task name.
pub const TASK_SOURCE: &str = "POV-Ray";

/// Problem matcher the host applies to the renderer's output.
///
/// The matcher definition itself lives in the host's manifest; this
/// layer only names it.
pub const POVRAY_PROBLEM_MATCHER: &str = "$povray";

/// Externally invocable command id that triggers the render task.
pub const RENDER_COMMAND_ID: &str = "povray.render";

/// Identifies a task to the host's task subsystem.
///
/// # Examples
///
/// ```
/// use povray_tasks::types::task::TaskDefinition;
///
/// let definition = TaskDefinition::povray();
/// let json = serde_json::to_value(&definition).unwrap();
/// assert_eq!(json["type"], "povray");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    /// The task type, matched against registered providers.
    #[serde(rename = "type")]
    pub task_type: String,

    /// Host-defined extra keys; carried opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TaskDefinition {
    /// Creates a definition for the given task type.
    pub fn new(task_type: impl Into<String>) -> Self {
        Self {
            task_type: task_type.into(),
            extra: Map::new(),
        }
    }

    /// Creates the definition for POV-Ray render tasks.
    pub fn povray() -> Self {
        Self::new(POVRAY_TASK_TYPE)
    }
}

/// The host's task groups.
///
/// Only [`TaskGroup::Build`] is produced by this crate; the other groups
/// exist so lookups can express "build group only" against tasks from
/// any provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskGroup {
    /// Build tasks (compile, render, package).
    Build,
    /// Cleanup tasks.
    Clean,
    /// Clean-then-build tasks.
    Rebuild,
    /// Test tasks.
    Test,
}

impl fmt::Display for TaskGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build => write!(f, "build"),
            Self::Clean => write!(f, "clean"),
            Self::Rebuild => write!(f, "rebuild"),
            Self::Test => write!(f, "test"),
        }
    }
}

/// A command line the host runs through the platform shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellExecution {
    /// The full command line, including host variables such as
    /// `${fileBasename}` that the executing host expands.
    pub command_line: String,
}

impl ShellExecution {
    /// Creates a shell execution for the given command line.
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
        }
    }
}

/// How the host presents the running task's terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationOptions {
    /// Clear the terminal before each run.
    pub clear: bool,

    /// Show the host's "terminal will be reused" hint.
    pub show_reuse_message: bool,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            clear: false,
            show_reuse_message: true,
        }
    }
}

/// How the host re-runs the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunOptions {
    /// Re-query the provider (and thus re-read settings and the active
    /// file) on every rerun instead of replaying the cached command.
    pub reevaluate_on_rerun: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            reevaluate_on_rerun: false,
        }
    }
}

/// A buildable, re-runnable task description.
///
/// # Examples
///
/// ```
/// use povray_tasks::types::task::{
///     ShellExecution, Task, TaskDefinition, TaskGroup, RENDER_TASK_NAME,
/// };
///
/// let task = Task::new(
///     TaskDefinition::povray(),
///     RENDER_TASK_NAME,
///     "POV-Ray",
///     ShellExecution::new("povray ${fileBasename} -D"),
/// )
/// .with_group(TaskGroup::Build);
///
/// assert!(task.matches(RENDER_TASK_NAME, TaskGroup::Build));
/// assert!(!task.matches(RENDER_TASK_NAME, TaskGroup::Test));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// The definition matched against providers.
    pub definition: TaskDefinition,

    /// Task name shown by the host and matched by command lookup.
    pub name: String,

    /// Source label, e.g. `POV-Ray`.
    pub source: String,

    /// Task group, if the task belongs to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<TaskGroup>,

    /// The shell command the host runs.
    pub execution: ShellExecution,

    /// Names of problem matchers the host applies to the output.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub problem_matchers: Vec<String>,

    /// Terminal presentation options.
    #[serde(default)]
    pub presentation: PresentationOptions,

    /// Re-run behavior.
    #[serde(default)]
    pub run_options: RunOptions,
}

impl Task {
    /// Creates a task with no group, no matchers, and default options.
    pub fn new(
        definition: TaskDefinition,
        name: impl Into<String>,
        source: impl Into<String>,
        execution: ShellExecution,
    ) -> Self {
        Self {
            definition,
            name: name.into(),
            source: source.into(),
            group: None,
            execution,
            problem_matchers: Vec::new(),
            presentation: PresentationOptions::default(),
            run_options: RunOptions::default(),
        }
    }

    /// Sets the task group.
    pub fn with_group(mut self, group: TaskGroup) -> Self {
        self.group = Some(group);
        self
    }

    /// Adds a problem matcher by name.
    pub fn with_problem_matcher(mut self, matcher: impl Into<String>) -> Self {
        self.problem_matchers.push(matcher.into());
        self
    }

    /// Sets the presentation options.
    pub fn with_presentation(mut self, presentation: PresentationOptions) -> Self {
        self.presentation = presentation;
        self
    }

    /// Sets the run options.
    pub fn with_run_options(mut self, run_options: RunOptions) -> Self {
        self.run_options = run_options;
        self
    }

    /// Returns `true` when the task carries the given name and group.
    ///
    /// This is the fixed predicate command lookup filters with.
    pub fn matches(&self, name: &str, group: TaskGroup) -> bool {
        self.name == name && self.group == Some(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_task() -> Task {
        Task::new(
            TaskDefinition::povray(),
            RENDER_TASK_NAME,
            TASK_SOURCE,
            ShellExecution::new("povray ${fileBasename} -D"),
        )
        .with_group(TaskGroup::Build)
        .with_problem_matcher(POVRAY_PROBLEM_MATCHER)
    }

    #[test]
    fn definition_serializes_type_key() {
        let json = serde_json::to_value(TaskDefinition::povray()).unwrap();
        assert_eq!(json["type"], "povray");
    }

    #[test]
    fn definition_preserves_extra_keys() {
        let parsed: TaskDefinition = serde_json::from_str(
            r#"{"type": "povray", "label": "custom", "priority": 3}"#,
        )
        .unwrap();
        assert_eq!(parsed.task_type, "povray");
        assert_eq!(parsed.extra["label"], "custom");
        assert_eq!(parsed.extra["priority"], 3);

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["label"], "custom");
    }

    #[test]
    fn task_serializes_camel_case() {
        let json = serde_json::to_value(render_task()).unwrap();
        assert_eq!(json["definition"]["type"], "povray");
        assert_eq!(json["name"], "Render Scene");
        assert_eq!(json["source"], "POV-Ray");
        assert_eq!(json["group"], "build");
        assert_eq!(
            json["execution"]["commandLine"],
            "povray ${fileBasename} -D"
        );
        assert_eq!(json["problemMatchers"][0], "$povray");
        assert!(json["presentation"]["showReuseMessage"].is_boolean());
        assert!(json["runOptions"]["reevaluateOnRerun"].is_boolean());
    }

    #[test]
    fn group_omitted_when_none() {
        let task = Task::new(
            TaskDefinition::povray(),
            "ad-hoc",
            TASK_SOURCE,
            ShellExecution::new("povray scene.pov"),
        );
        let json = serde_json::to_value(task).unwrap();
        assert!(json.get("group").is_none());
    }

    #[test]
    fn matches_requires_name_and_group() {
        let task = render_task();
        assert!(task.matches(RENDER_TASK_NAME, TaskGroup::Build));
        assert!(!task.matches(RENDER_TASK_NAME, TaskGroup::Clean));
        assert!(!task.matches("Other", TaskGroup::Build));

        let ungrouped = Task::new(
            TaskDefinition::povray(),
            RENDER_TASK_NAME,
            TASK_SOURCE,
            ShellExecution::new("povray scene.pov"),
        );
        assert!(!ungrouped.matches(RENDER_TASK_NAME, TaskGroup::Build));
    }

    #[test]
    fn task_round_trip_deserialization() {
        let task = render_task();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }

    #[test]
    fn group_display_matches_serde() {
        for group in [
            TaskGroup::Build,
            TaskGroup::Clean,
            TaskGroup::Rebuild,
            TaskGroup::Test,
        ] {
            let json = serde_json::to_value(group).unwrap();
            assert_eq!(json, group.to_string());
        }
    }
}
