use base64::Engine;
use crossterm::execute;
use crossterm::style::Print;
use std::io;
use voxpick_core::clipboard::{Clipboard, ClipboardError};

/// Copies through the terminal with an OSC 52 escape sequence, which also
/// works over SSH. Terminals without OSC 52 support silently ignore it.
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        execute!(io::stdout(), Print(osc52_sequence(text)))?;
        Ok(())
    }
}

/// `ESC ] 52 ; c ; <base64> BEL` targets the system clipboard.
fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{payload}\x07")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_bytes() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_osc52_sequence_multiline_utf8() {
        let sequence = osc52_sequence("POST /api/tts\nПривет");
        assert!(sequence.starts_with("\x1b]52;c;"));
        assert!(sequence.ends_with('\x07'));

        let payload = &sequence["\x1b]52;c;".len()..sequence.len() - 1];
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "POST /api/tts\nПривет");
    }
}
