use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::error::ClipboardError;

/// System clipboard tools, tried in order.
const TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

/// Write `text` to the system clipboard through the first tool found on the
/// `PATH`. Returns the name of the tool that accepted the text.
pub fn copy_to_clipboard(text: &str) -> Result<&'static str, ClipboardError> {
    for &(tool, args) in TOOLS {
        match pipe_into(tool, args, text) {
            Err(ClipboardError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                log::trace!("{tool} not available");
            }
            other => return other.map(|()| tool),
        }
    }

    let tried: Vec<&str> = TOOLS.iter().map(|&(tool, _)| tool).collect();
    Err(ClipboardError::Unavailable(tried.join(", ")))
}

fn pipe_into(tool: &'static str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
    let io_err = |source| ClipboardError::Io { tool, source };

    let mut child = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(io_err)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(io_err)?;
    }

    let status = child.wait().map_err(io_err)?;
    if !status.success() {
        return Err(ClipboardError::Failed { tool, status });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_not_found() {
        let err = pipe_into("p2o-no-such-clipboard-tool", &[], "x").unwrap_err();
        match err {
            ClipboardError::Io { source, .. } => assert_eq!(source.kind(), ErrorKind::NotFound),
            other => panic!("expected io error, got {other}"),
        }
    }
}
