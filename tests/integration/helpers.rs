//! Shared test helpers.

/// Strip ANSI escape sequences, leaving only the visible characters in
/// write order.
///
/// Handles the sequence shapes the show emits: CSI sequences (`ESC [` up to
/// a final byte in `@`..=`~`) and bare `ESC` followed by a single byte.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some('[') => {
                chars.next();
                // Parameters and intermediates, then one final byte.
                for seq_ch in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&seq_ch) {
                        break;
                    }
                }
            }
            Some(_) => {
                chars.next();
            }
            None => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_csi_sequences() {
        assert_eq!(strip_ansi("\x1b[2;5f\x1b[0;1;36mHi\x1b[0m"), "Hi");
    }

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(strip_ansi("Hello, World !!!"), "Hello, World !!!");
    }

    #[test]
    fn strips_private_mode_sequences() {
        assert_eq!(strip_ansi("\x1b[?25la\x1b[?25h"), "a");
    }
}
