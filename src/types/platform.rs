//! Platform family detection.
//!
//! The renderer invocation differs on Windows (the GUI `pvengine` binary
//! with fixed flags) from every POSIX-like platform (the `povray`
//! command-line binary). Only the Windows/non-Windows distinction affects
//! command assembly; the finer variants exist so hosts can report what
//! they actually run on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The platform family a host runs on.
///
/// # Examples
///
/// ```
/// use povray_tasks::types::platform::Platform;
///
/// let platform = Platform::current();
/// if platform.is_windows() {
///     // the GUI renderer branch may apply
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Windows.
    Windows,
    /// macOS.
    #[serde(rename = "macos")]
    MacOs,
    /// Linux.
    Linux,
    /// Any other platform; treated like Linux for command assembly.
    Other,
}

impl Platform {
    /// Detects the platform this process is running on.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    /// Returns `true` on the Windows platform family.
    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl Default for Platform {
    /// Defaults to the platform of the current process.
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::MacOs => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
            Self::Other => write!(f, "other"),
        }
    }
}
