//! Copying rendered summaries to the system clipboard.
//!
//! The platform clipboard is reached through whichever helper program is
//! installed (`pbcopy`, `wl-copy`, `xclip`, `xsel`, `clip`).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool found (tried {0})")]
    Unavailable(String),
    #[error("failed to run clipboard tool: {0}")]
    Spawn(#[from] io::Error),
    #[error("`{tool}` exited with {status}")]
    Failed { tool: String, status: ExitStatus },
    #[error("{0}")]
    Rejected(String),
}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Helper program and the arguments that make it read stdin into the
/// clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClipboardTool {
    program: &'static str,
    args: &'static [&'static str],
}

const PBCOPY: ClipboardTool = ClipboardTool {
    program: "pbcopy",
    args: &[],
};
const WL_COPY: ClipboardTool = ClipboardTool {
    program: "wl-copy",
    args: &[],
};
const XCLIP: ClipboardTool = ClipboardTool {
    program: "xclip",
    args: &["-selection", "clipboard"],
};
const XSEL: ClipboardTool = ClipboardTool {
    program: "xsel",
    args: &["--clipboard", "--input"],
};
const CLIP: ClipboardTool = ClipboardTool {
    program: "clip",
    args: &[],
};

fn candidates() -> Vec<ClipboardTool> {
    if cfg!(target_os = "macos") {
        vec![PBCOPY]
    } else if cfg!(windows) {
        vec![CLIP]
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        vec![WL_COPY, XCLIP, XSEL]
    } else {
        vec![XCLIP, XSEL, WL_COPY]
    }
}

/// Clipboard backed by the first helper program found on `PATH`.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    tool: ClipboardTool,
    path: PathBuf,
}

impl SystemClipboard {
    pub fn detect() -> Result<Self, ClipboardError> {
        let tools = candidates();
        for tool in &tools {
            if let Ok(path) = which::which(tool.program) {
                tracing::debug!(tool = tool.program, path = %path.display(), "clipboard tool found");
                return Ok(Self { tool: *tool, path });
            }
        }
        let tried: Vec<&str> = tools.iter().map(|tool| tool.program).collect();
        Err(ClipboardError::Unavailable(tried.join(", ")))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.path)
            .args(self.tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                let _ = child.wait();
                return Err(ClipboardError::Spawn(err));
            }
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Failed {
                tool: self.tool.program.to_string(),
                status,
            })
        }
    }
}

/// In-process clipboard, selected with `ORDER_FORM_CLIPBOARD=memory`.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail: bool,
}

impl MemoryClipboard {
    /// A clipboard whose every copy is rejected.
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Rejected("clipboard refused the write".into()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_copy() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.contents(), None);
        clipboard.copy("first").unwrap();
        clipboard.copy("").unwrap();
        assert_eq!(clipboard.contents(), Some(""));
    }

    #[test]
    fn failing_clipboard_reports_error() {
        let mut clipboard = MemoryClipboard::failing();
        let err = clipboard.copy("text").unwrap_err();
        assert_eq!(err.to_string(), "clipboard refused the write");
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn candidates_are_never_empty() {
        assert!(!candidates().is_empty());
    }

    #[cfg(unix)]
    fn stand_in(program: &'static str) -> SystemClipboard {
        SystemClipboard {
            tool: ClipboardTool { program, args: &[] },
            path: which::which(program).unwrap(),
        }
    }

    #[cfg(unix)]
    #[test]
    fn tool_reading_stdin_succeeds() {
        let mut clipboard = stand_in("cat");
        clipboard.copy("-Name: Minh").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn tool_exiting_before_reading_is_an_error() {
        // Larger than any pipe buffer, so the write outlives `true`.
        let text = "x".repeat(4 * 1024 * 1024);
        let mut clipboard = stand_in("true");
        let err = clipboard.copy(&text).unwrap_err();
        assert!(matches!(err, ClipboardError::Spawn(_)), "{err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn failing_tool_reports_status() {
        let mut clipboard = stand_in("false");
        let err = clipboard.copy("").unwrap_err();
        assert!(matches!(err, ClipboardError::Failed { ref tool, .. } if tool == "false"));
    }
}
