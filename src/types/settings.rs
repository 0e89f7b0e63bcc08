//! User configuration for render tasks.
//!
//! Mirrors the host configuration sections the integration reads: the
//! `povray` section (output path, library path, default render size) and
//! the `terminal` section (the configured Windows shell, read only to
//! decide the platform branch during command assembly).
//!
//! [`WorkspaceSettings`] loads from a TOML file; a missing file yields the
//! defaults, so an unconfigured workspace still renders. Field names use
//! `camelCase` to match the host's settings keys.
//!
//! # Examples
//!
//! ```
//! use povray_tasks::types::settings::WorkspaceSettings;
//!
//! let settings: WorkspaceSettings = toml::from_str(
//!     r#"
//!     [povray]
//!     outputPath = "renders"
//!     defaultRenderWidth = "800"
//!     defaultRenderHeight = "600"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.povray.output_path, "renders");
//! assert_eq!(settings.povray.normalized_output_path(), "renders/");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings for the `povray` configuration section.
///
/// Width and height are kept as strings: they are interpolated verbatim
/// into the renderer's command line and never used arithmetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderSettings {
    /// Directory the renderer writes images into. Empty means "next to
    /// the scene file".
    pub output_path: String,

    /// Directory of include files passed as `Library_Path`. Empty means
    /// the renderer's own default search path.
    pub library_path: String,

    /// Render width passed as `Width=` for scene files.
    pub default_render_width: String,

    /// Render height passed as `Height=` for scene files.
    pub default_render_height: String,
}

impl RenderSettings {
    /// The trimmed output path with a trailing separator guaranteed.
    ///
    /// The renderer treats a directory argument without a trailing
    /// separator as a filename prefix, so any non-empty path that ends
    /// with neither `/` nor `\` gains a `/`. Empty stays empty.
    pub fn normalized_output_path(&self) -> String {
        ensure_trailing_separator(self.output_path.trim())
    }

    /// The trimmed library path with a trailing separator guaranteed.
    ///
    /// Same rule as [`normalized_output_path`](Self::normalized_output_path).
    pub fn normalized_library_path(&self) -> String {
        ensure_trailing_separator(self.library_path.trim())
    }
}

/// Appends `/` to a non-empty path that ends with neither separator.
fn ensure_trailing_separator(path: &str) -> String {
    if !path.is_empty() && !path.ends_with('/') && !path.ends_with('\\') {
        format!("{path}/")
    } else {
        path.to_string()
    }
}

/// Settings for the `terminal` configuration section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalSettings {
    /// The host's integrated terminal settings.
    pub integrated: IntegratedTerminalSettings,
}

/// The `terminal.integrated` subsection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegratedTerminalSettings {
    /// The `terminal.integrated.shell` subsection.
    pub shell: ShellSettings,
}

/// The `terminal.integrated.shell` subsection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    /// The shell configured for Windows, e.g. `C:\Windows\System32\cmd.exe`
    /// or a WSL/Git `bash`. `None` when the host has no explicit setting.
    pub windows: Option<String>,
}

/// The full workspace configuration consumed by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    /// The `povray` section.
    pub povray: RenderSettings,

    /// The `terminal` section.
    pub terminal: TerminalSettings,
}

impl WorkspaceSettings {
    /// Loads settings from a TOML file.
    ///
    /// A missing file is not an error; it yields [`WorkspaceSettings::default`]
    /// so an unconfigured workspace still produces a usable render command.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| Error::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses settings from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The configured Windows shell, if any.
    pub fn windows_shell(&self) -> Option<&str> {
        self.terminal.integrated.shell.windows.as_deref()
    }
}
