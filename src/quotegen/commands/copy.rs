use crate::clipboard::{format_for_clipboard, ClipboardSink};
use crate::commands::{CmdMessage, CmdResult};
use crate::model::Quote;
use tracing::warn;

/// Copies a quote to the clipboard.
///
/// Failures are reported as warnings rather than errors: a failed copy must
/// never disturb whatever state the caller holds.
pub fn run<C: ClipboardSink + ?Sized>(sink: &C, quote: Option<&Quote>) -> CmdResult {
    let Some(quote) = quote else {
        return CmdResult::default().with_message(CmdMessage::warning("Nothing to copy"));
    };

    match sink.copy(&format_for_clipboard(quote)) {
        Ok(()) => CmdResult::default().with_message(CmdMessage::success("Quote copied to clipboard")),
        Err(e) => {
            warn!(error = %e, "clipboard copy failed");
            CmdResult::default().with_message(CmdMessage::warning(format!(
                "Could not copy quote: {}",
                e
            )))
        }
    }
}
