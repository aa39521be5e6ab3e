//! Decorative frame around the title area.
//!
//! Draws the box outline with directional cursor moves and repeated
//! character writes, so the border visibly grows instead of appearing at
//! once. The bottom rule is backfilled right to left with a compound
//! back-move token.

use std::time::Duration;

use anyhow::Result;

use crate::ansi::{self, CURSOR_BACK, CURSOR_DOWN, CURSOR_UP};
use crate::sink::TermSink;
use crate::timing::Sleeper;

/// Horizontal rule glyph.
const RULE: &str = "═";

/// Fixed pause between border steps.
const STEP: Duration = Duration::from_millis(10);

/// Emit `prefix` once, then `token` exactly `times` times, sleeping `delay`
/// before each repetition (including the first).
pub fn repeat_token<W: TermSink, S: Sleeper>(
    sink: &mut W,
    sleeper: &S,
    prefix: &str,
    token: &str,
    times: usize,
    delay: Duration,
) -> Result<()> {
    sink.write_text(prefix)?;
    for _ in 0..times {
        sleeper.sleep(delay);
        sink.write_text(token)?;
        sink.flush()?;
    }
    Ok(())
}

/// Draw the closed box outline around a title of `title_len` characters.
///
/// The frame is two columns wider than the title on each side
/// (`width = title_len + 4`) and runs clockwise from the top rule:
/// top rule, top-right corner, right edge, bottom-right corner, bottom rule
/// (backfilled right to left), bottom-left corner, left edge, top-left
/// corner. Each corner write is preceded by a short fixed pause.
pub fn draw_frame<W: TermSink, S: Sleeper>(
    sink: &mut W,
    sleeper: &S,
    title_len: usize,
) -> Result<()> {
    let width = title_len + 4;

    let top_prefix = format!("{}\x1b[0;38;5;228m", ansi::cursor_to(1, 3));
    repeat_token(sink, sleeper, &top_prefix, RULE, width, STEP)?;

    let corners = [
        format!("╗{CURSOR_BACK}"),
        format!("{CURSOR_DOWN}║{CURSOR_BACK}"),
        format!("{CURSOR_DOWN}╝{CURSOR_BACK}"),
    ];
    for step in &corners {
        sleeper.sleep(STEP);
        sink.write_text(step)?;
        sink.flush()?;
    }

    // Retreat two cells per rule glyph so the bottom edge fills leftwards.
    let backfill = format!("{CURSOR_BACK}{RULE}{CURSOR_BACK}");
    repeat_token(sink, sleeper, "", &backfill, width, STEP)?;

    let corners = [
        format!("{CURSOR_BACK}╚{CURSOR_BACK}"),
        format!("{CURSOR_UP}║{CURSOR_BACK}"),
        format!("{CURSOR_UP}╔{CURSOR_BACK}"),
    ];
    for step in &corners {
        sleeper.sleep(STEP);
        sink.write_text(step)?;
        sink.flush()?;
    }

    Ok(())
}
