//! Typewriter printer.
//!
//! Renders text one character at a time with a freshly randomized delay
//! before each character, simulating live typing.

use std::time::Duration;

use anyhow::Result;
use rand::Rng;

use crate::ansi;
use crate::sink::TermSink;
use crate::timing::Sleeper;

/// Inclusive lower / exclusive upper bound of the per-character delay, ms.
pub const CHAR_DELAY_MIN_MS: u64 = 30;
pub const CHAR_DELAY_MAX_MS: u64 = 250;

/// Default trailing pause after the last character, ms.
pub const DEFAULT_PAUSE_MS: u64 = 2000;

/// Type `text` at `(row, col)` with the given SGR prefix.
///
/// Moves the cursor and emits the style prefix in one write, then writes
/// each character individually, sleeping a random duration in
/// [[`CHAR_DELAY_MIN_MS`], [`CHAR_DELAY_MAX_MS`]) before it. After the last
/// character sleeps `pause_ms` if non-zero; `0` disables the pause.
///
/// Characters appear in their original left-to-right order; total elapsed
/// time is bounded by `CHAR_DELAY_MAX_MS * len + pause_ms`.
pub fn type_out<W: TermSink, R: Rng, S: Sleeper>(
    sink: &mut W,
    rng: &mut R,
    sleeper: &S,
    (row, col): (u16, u16),
    style: &str,
    text: &str,
    pause_ms: u64,
) -> Result<()> {
    sink.write_text(&format!("{}{}", ansi::cursor_to(row, col), style))?;

    for ch in text.chars() {
        let delay = rng.random_range(CHAR_DELAY_MIN_MS..CHAR_DELAY_MAX_MS);
        sleeper.sleep(Duration::from_millis(delay));
        sink.write_text(ch.encode_utf8(&mut [0u8; 4]))?;
        sink.flush()?;
    }

    if pause_ms > 0 {
        sleeper.sleep(Duration::from_millis(pause_ms));
    }

    Ok(())
}
