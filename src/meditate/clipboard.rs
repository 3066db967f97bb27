use crate::error::{MeditateError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard programs to try, in order, for the current platform.
#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[];

/// Copies text to the system clipboard using the first clipboard program that starts.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_error = None;
    for (program, args) in CLIPBOARD_COMMANDS {
        match pipe_to(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => {
                tracing::debug!(program, error = %e, "clipboard program failed");
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        MeditateError::Clipboard("Clipboard not supported on this platform".to_string())
    }))
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| MeditateError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            MeditateError::Clipboard(format!("Failed to write to {}: {}", program, e))
        })?;
    }

    let status = child
        .wait()
        .map_err(|e| MeditateError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(MeditateError::Clipboard(format!("{} exited with error", program)))
    }
}

/// Formats a session for the clipboard (title + blank line + script)
pub fn format_for_clipboard(title: &str, script: &str) -> String {
    if title.is_empty() {
        script.to_string()
    } else {
        format!("{}\n\n{}", title, script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_clipboard_with_title() {
        let result = format_for_clipboard("Body Scan Sleep", "Welcome......");
        assert_eq!(result, "Body Scan Sleep\n\nWelcome......");
    }

    #[test]
    fn test_format_for_clipboard_without_title() {
        let result = format_for_clipboard("", "Welcome......");
        assert_eq!(result, "Welcome......");
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let err = pipe_to("meditate-no-such-clipboard-tool", &[], "x").unwrap_err();
        assert!(matches!(err, MeditateError::Clipboard(_)));
        assert!(err.to_string().starts_with("Clipboard error: Failed to spawn"));
    }
}
