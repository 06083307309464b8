use crate::error::{QuoteError, Result};
use crate::model::Quote;
use std::process::Command;

/// Destination for copied quotes.
pub trait ClipboardSink {
    fn copy(&self, text: &str) -> Result<()>;
}

/// The OS clipboard, reached through the platform's command line tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }
}

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to(Command::new("pbcopy"), "pbcopy", text)
    }

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        match pipe_to(xclip, "xclip", text) {
            Ok(()) => Ok(()),
            Err(first) => {
                tracing::debug!(error = %first, "xclip failed, trying xsel");
                let mut xsel = Command::new("xsel");
                xsel.args(["--clipboard", "--input"]);
                pipe_to(xsel, "xsel", text).map_err(|_| {
                    QuoteError::Clipboard(format!("{}. Install xclip or xsel.", first))
                })
            }
        }
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to(Command::new("clip"), "clip", text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(QuoteError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(mut command: Command, name: &str, text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| QuoteError::Clipboard(format!("Failed to spawn {}: {}", name, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| QuoteError::Clipboard(format!("Failed to write to {}: {}", name, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| QuoteError::Clipboard(format!("Failed to wait for {}: {}", name, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(QuoteError::Clipboard(format!("{} exited with error", name)))
    }
}

/// Formats a quote for the clipboard: the quotation in double quotes, then the
/// author on its own line when there is one.
pub fn format_for_clipboard(quote: &Quote) -> String {
    match quote.attribution() {
        Some(author) => format!("\"{}\"\n— {}", quote.text(), author),
        None => format!("\"{}\"", quote.text()),
    }
}
