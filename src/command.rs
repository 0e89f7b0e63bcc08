//! Pure render command-line assembly.
//!
//! Everything the host owns (settings, active file, platform, shell
//! configuration) arrives by value in a [`RenderContext`];
//! [`assemble_render_command`] is a pure function of it. Absent or
//! malformed settings silently produce a shorter command string; nothing
//! here errors or touches the outside world.
//!
//! The assembled shape is
//!
//! ```text
//! <executable> ${fileBasename} -D [Width=<w> Height=<h>]
//!     [Output_File_Name=<path>] [Library_Path=<path>]
//! ```
//!
//! where `${fileBasename}` is a host variable expanded by whichever host
//! executes the task. On Windows, when the configured shell is not a
//! bash-like shell (WSL or Git Bash), the command-line `povray` binary is
//! replaced by the GUI `pvengine` binary with fixed exit/render flags and
//! both directory arguments are normalized to backslash separators.

use crate::types::platform::Platform;
use crate::types::settings::RenderSettings;

/// Command-line renderer executable used on POSIX-like shells.
pub const POVRAY_EXECUTABLE: &str = "povray";

/// GUI renderer invocation used with native Windows shells. `/EXIT`
/// closes the GUI when the render finishes; `/RENDER` starts it
/// immediately.
pub const PVENGINE_INVOCATION: &str = "pvengine /EXIT /RENDER";

/// Host variable standing for the active file's base name.
pub const FILE_BASENAME_PLACEHOLDER: &str = "${fileBasename}";

/// Extension of scene files that receive explicit `Width=`/`Height=`
/// arguments. Other inputs (notably `.ini`) carry their own resolution
/// directives.
pub const SCENE_FILE_EXTENSION: &str = ".pov";

/// Renderer flag that disables the display preview.
pub const DISPLAY_OFF_FLAG: &str = "-D";

/// Everything command assembly depends on, passed explicitly.
///
/// # Examples
///
/// ```
/// use povray_tasks::command::{assemble_render_command, RenderContext};
/// use povray_tasks::types::platform::Platform;
/// use povray_tasks::types::settings::RenderSettings;
///
/// let ctx = RenderContext {
///     settings: RenderSettings::default(),
///     platform: Platform::Linux,
///     windows_shell: None,
///     file_extension: None,
/// };
/// assert_eq!(assemble_render_command(&ctx), "povray ${fileBasename} -D");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// The `povray` settings section.
    pub settings: RenderSettings,

    /// Platform family the task will run on.
    pub platform: Platform,

    /// The host's configured Windows shell, if any. Only consulted on
    /// Windows; a value containing `bash` keeps the POSIX invocation.
    pub windows_shell: Option<String>,

    /// Extension of the active file, including the leading dot
    /// (e.g. `.pov`). `None` when no editor is active.
    pub file_extension: Option<String>,
}

/// Assembles the renderer shell command for the given context.
///
/// Pure and idempotent: identical contexts yield byte-identical strings.
///
/// # Examples
///
/// ```
/// use povray_tasks::command::{assemble_render_command, RenderContext};
/// use povray_tasks::types::platform::Platform;
/// use povray_tasks::types::settings::RenderSettings;
///
/// let ctx = RenderContext {
///     settings: RenderSettings {
///         output_path: "renders".to_string(),
///         default_render_width: "800".to_string(),
///         default_render_height: "600".to_string(),
///         ..RenderSettings::default()
///     },
///     platform: Platform::Linux,
///     windows_shell: None,
///     file_extension: Some(".pov".to_string()),
/// };
///
/// assert_eq!(
///     assemble_render_command(&ctx),
///     "povray ${fileBasename} -D Width=800 Height=600 Output_File_Name=renders/",
/// );
/// ```
pub fn assemble_render_command(ctx: &RenderContext) -> String {
    let mut output_path = ctx.settings.normalized_output_path();
    let mut library_path = ctx.settings.normalized_library_path();

    // Default to the command-line binary (Linux, macOS, WSL, Git Bash).
    let mut executable = POVRAY_EXECUTABLE;

    if ctx.platform.is_windows() {
        // A native Windows shell cannot run the POSIX binary; switch to
        // the GUI renderer. An unset shell, or one naming bash, keeps it.
        if let Some(shell) = ctx.windows_shell.as_deref() {
            if !shell.contains("bash") {
                executable = PVENGINE_INVOCATION;

                if !output_path.is_empty() {
                    output_path = normalize_windows_path(&output_path);
                }
                if !library_path.is_empty() {
                    library_path = normalize_windows_path(&library_path);
                }
            }
        }
    }

    let mut command = format!("{executable} {FILE_BASENAME_PLACEHOLDER} {DISPLAY_OFF_FLAG}");

    // Scene files get the configured resolution; .ini inputs are assumed
    // to carry their own Width/Height directives.
    if ctx.file_extension.as_deref() == Some(SCENE_FILE_EXTENSION) {
        command.push_str(&format!(
            " Width={} Height={}",
            ctx.settings.default_render_width, ctx.settings.default_render_height
        ));
    }

    if !output_path.is_empty() {
        command.push_str(&format!(" Output_File_Name={output_path}"));
    }

    if !library_path.is_empty() {
        command.push_str(&format!(" Library_Path={library_path}"));
    }

    tracing::debug!(command = %command, "assembled render command");

    command
}

/// Normalizes a path to Windows filesystem conventions.
///
/// Forward slashes become backslashes, duplicate separators collapse,
/// `.` segments drop, `..` segments resolve against their parent, and a
/// trailing separator survives as `\` so directory arguments remain
/// directory arguments.
///
/// # Examples
///
/// ```
/// use povray_tasks::command::normalize_windows_path;
///
/// assert_eq!(normalize_windows_path("renders/"), r"renders\");
/// assert_eq!(normalize_windows_path(r"C:\libs/povray//include"), r"C:\libs\povray\include");
/// assert_eq!(normalize_windows_path("a/b/../c"), r"a\c");
/// ```
pub fn normalize_windows_path(path: &str) -> String {
    let trailing_separator = path.ends_with('/') || path.ends_with('\\');

    // Split off a drive prefix such as `C:` so it survives untouched.
    let bytes = path.as_bytes();
    let (drive, rest) = if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        (&path[..2], &path[2..])
    } else {
        ("", path)
    };

    let absolute = rest.starts_with('/') || rest.starts_with('\\');

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                let parent_escapes = matches!(segments.last(), Some(&".."));
                if parent_escapes || (segments.is_empty() && !absolute && drive.is_empty()) {
                    segments.push("..");
                } else {
                    segments.pop();
                }
            }
            other => segments.push(other),
        }
    }

    let mut normalized = String::from(drive);
    if absolute {
        normalized.push('\\');
    }
    normalized.push_str(&segments.join("\\"));

    if normalized.is_empty() {
        normalized.push('.');
    }
    if trailing_separator && !normalized.ends_with('\\') {
        normalized.push('\\');
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn linux_ctx(settings: RenderSettings, ext: Option<&str>) -> RenderContext {
        RenderContext {
            settings,
            platform: Platform::Linux,
            windows_shell: None,
            file_extension: ext.map(str::to_string),
        }
    }

    #[test]
    fn empty_settings_reduce_to_bare_command() {
        let ctx = linux_ctx(RenderSettings::default(), None);
        assert_eq!(assemble_render_command(&ctx), "povray ${fileBasename} -D");
    }

    #[test]
    fn output_path_gains_trailing_slash_and_library_stays_absent() {
        let ctx = linux_ctx(
            RenderSettings {
                output_path: "renders".to_string(),
                ..RenderSettings::default()
            },
            None,
        );
        let command = assemble_render_command(&ctx);
        assert!(command.contains("Output_File_Name=renders/"));
        assert!(!command.contains("Library_Path="));
    }

    #[test_case(Some(".pov"), true; "scene file gets resolution")]
    #[test_case(Some(".ini"), false; "ini file carries its own resolution")]
    #[test_case(None, false; "no active file")]
    fn resolution_arguments_depend_on_extension(ext: Option<&str>, expected: bool) {
        let ctx = linux_ctx(
            RenderSettings {
                default_render_width: "800".to_string(),
                default_render_height: "600".to_string(),
                ..RenderSettings::default()
            },
            ext,
        );
        let command = assemble_render_command(&ctx);
        assert_eq!(command.contains("Width=800 Height=600"), expected);
    }

    #[test]
    fn argument_order_is_fixed() {
        let ctx = linux_ctx(
            RenderSettings {
                output_path: "out".to_string(),
                library_path: "libs".to_string(),
                default_render_width: "320".to_string(),
                default_render_height: "240".to_string(),
            },
            Some(".pov"),
        );
        assert_eq!(
            assemble_render_command(&ctx),
            "povray ${fileBasename} -D Width=320 Height=240 \
             Output_File_Name=out/ Library_Path=libs/",
        );
    }

    #[test]
    fn windows_native_shell_switches_to_pvengine() {
        let ctx = RenderContext {
            settings: RenderSettings {
                library_path: r"C:\libs".to_string(),
                ..RenderSettings::default()
            },
            platform: Platform::Windows,
            windows_shell: Some(r"C:\Windows\System32\cmd.exe".to_string()),
            file_extension: Some(".pov".to_string()),
        };
        let command = assemble_render_command(&ctx);
        assert!(command.starts_with("pvengine /EXIT /RENDER ${fileBasename} -D"));
        assert!(command.contains(r"Library_Path=C:\libs\"));
    }

    #[test]
    fn windows_bash_shell_keeps_povray() {
        for shell in [
            r"C:\Windows\System32\bash.exe",
            r"C:\Program Files\Git\bin\bash.exe",
        ] {
            let ctx = RenderContext {
                settings: RenderSettings {
                    output_path: "renders".to_string(),
                    ..RenderSettings::default()
                },
                platform: Platform::Windows,
                windows_shell: Some(shell.to_string()),
                file_extension: None,
            };
            let command = assemble_render_command(&ctx);
            assert!(command.starts_with("povray "), "shell {shell} should keep povray");
            // bash branch keeps forward slashes
            assert!(command.contains("Output_File_Name=renders/"));
        }
    }

    #[test]
    fn windows_without_shell_setting_keeps_povray() {
        let ctx = RenderContext {
            settings: RenderSettings::default(),
            platform: Platform::Windows,
            windows_shell: None,
            file_extension: None,
        };
        assert_eq!(assemble_render_command(&ctx), "povray ${fileBasename} -D");
    }

    #[test]
    fn non_windows_ignores_shell_setting() {
        let ctx = RenderContext {
            settings: RenderSettings::default(),
            platform: Platform::MacOs,
            windows_shell: Some(r"C:\Windows\System32\cmd.exe".to_string()),
            file_extension: None,
        };
        assert_eq!(assemble_render_command(&ctx), "povray ${fileBasename} -D");
    }

    #[test]
    fn assembly_is_idempotent() {
        let ctx = RenderContext {
            settings: RenderSettings {
                output_path: "renders".to_string(),
                library_path: r"C:\libs".to_string(),
                default_render_width: "800".to_string(),
                default_render_height: "600".to_string(),
            },
            platform: Platform::Windows,
            windows_shell: Some("powershell.exe".to_string()),
            file_extension: Some(".pov".to_string()),
        };
        assert_eq!(assemble_render_command(&ctx), assemble_render_command(&ctx));
    }

    #[test_case("renders/", r"renders\"; "trailing slash becomes backslash")]
    #[test_case(r"C:\libs/", r"C:\libs\"; "drive path keeps drive")]
    #[test_case("a//b///c", r"a\b\c"; "duplicate separators collapse")]
    #[test_case("a/./b", r"a\b"; "dot segments drop")]
    #[test_case("a/b/../c", r"a\c"; "dot dot resolves")]
    #[test_case("../up", r"..\up"; "leading dot dot survives relative paths")]
    #[test_case("/abs/path/", r"\abs\path\"; "absolute path keeps root")]
    #[test_case(".", "."; "bare dot")]
    #[test_case("a/..", "."; "fully collapsed path")]
    #[test_case("a/../", r".\"; "fully collapsed path keeps trailing separator")]
    fn windows_path_normalization(input: &str, expected: &str) {
        assert_eq!(normalize_windows_path(input), expected);
    }
}
