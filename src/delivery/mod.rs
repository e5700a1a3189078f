//! Hands an exported stylesheet to the user: clipboard first, console otherwise.

use std::io::Write;

use crate::clipboard::ClipboardBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Copied,
    /// The clipboard was tried and failed; the text went to the console.
    PrintedClipboardFailed,
    /// No clipboard was available; the text went to the console.
    PrintedClipboardUnsupported,
}

impl DeliveryOutcome {
    pub const fn acknowledgement(self) -> &'static str {
        match self {
            Self::Copied => "CSS copied to clipboard!",
            Self::PrintedClipboardFailed => "CSS exported to console (clipboard not available)!",
            Self::PrintedClipboardUnsupported => {
                "CSS exported to console (clipboard not supported)!"
            }
        }
    }

    pub const fn copied(self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Delivers `css`, falling back to writing it on `console`. Never fails.
pub fn deliver(
    css: &str,
    clipboard: Option<&dyn ClipboardBackend>,
    console: &mut dyn Write,
) -> DeliveryOutcome {
    let outcome = match clipboard {
        Some(backend) => match backend.copy_text(css) {
            Ok(()) => DeliveryOutcome::Copied,
            Err(err) => {
                tracing::warn!(%err, "clipboard copy failed; printing stylesheet instead");
                DeliveryOutcome::PrintedClipboardFailed
            }
        },
        None => {
            tracing::warn!("clipboard unavailable; printing stylesheet instead");
            DeliveryOutcome::PrintedClipboardUnsupported
        }
    };

    if !outcome.copied() {
        if let Err(err) = console.write_all(css.as_bytes()).and_then(|()| console.flush()) {
            tracing::warn!(%err, "failed to print stylesheet to console");
        }
    }
    tracing::info!(?outcome, bytes = css.len(), "stylesheet delivered");
    outcome
}
