//! Character scramble animation.
//!
//! Repeatedly overwrites one random character of the payload in place with
//! random SGR styling and random case, while a countdown status line tracks
//! the remaining iterations. Termination is purely count-based.

use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use tracing::debug;

use crate::ansi;
use crate::sink::TermSink;
use crate::timing::Sleeper;

/// Fixed iteration budget, 2^12.
pub const ITERATIONS: u32 = 1 << 12;

/// Countdown label; the status column below is one past its length.
const COUNTDOWN_LABEL: &str = "Finaliza en ";

// Foreground channels stay in a narrow bright band, background channels in
// a low band, so the glyph never vanishes into its own cell.
const FG_MIN: u8 = 47;
const FG_MAX: u8 = 255;
const BG_MIN: u8 = 0;
const BG_MAX: u8 = 48;

/// SGR weight parameter: 0 half the time, otherwise 1 or 23.
///
/// This is the original demo's arithmetic, kept as-is: an outer coin zeroes
/// the parameter, an inner coin picks between bold-off-adjacent codes.
fn weight_code<R: Rng>(rng: &mut R) -> u8 {
    let outer: u8 = rng.random_range(0..2);
    let inner: u8 = rng.random_range(0..2);
    outer * (inner * 22 + 1)
}

/// SGR slant parameter: italic (3) or italic-off (23), even odds.
fn slant_code<R: Rng>(rng: &mut R) -> u8 {
    let coin: u8 = rng.random_range(0..2);
    coin * 20 + 3
}

/// Re-case a character: uppercase on a roll of 91..=100 out of 0..=100.
///
/// The inclusive 101-value range makes the uppercase rate 10/101 (~9.9%),
/// not an even 10%. That skew is inherited behavior and is preserved.
fn scrambled_case<R: Rng>(rng: &mut R, ch: char) -> char {
    let roll: u8 = rng.random_range(0..101);
    if roll > 90 {
        ch.to_ascii_uppercase()
    } else {
        ch.to_ascii_lowercase()
    }
}

/// Run the scramble over `text` sitting at `row`, starting column
/// `base_col`, for exactly `iterations` iterations.
///
/// The countdown renders two rows below `text`. Each iteration sleeps 1 ms,
/// rewrites one random character cell in a single combined
/// position-and-style write, then refreshes the countdown.
pub fn run<W: TermSink, R: Rng, S: Sleeper>(
    sink: &mut W,
    rng: &mut R,
    sleeper: &S,
    text: &str,
    row: u16,
    base_col: u16,
    iterations: u32,
) -> Result<()> {
    let chars: Vec<char> = text.chars().collect();
    let status_row = row + 2;
    let status_col = 1 + COUNTDOWN_LABEL.chars().count() as u16;

    debug!(iterations, row, base_col, "scramble loop starting");

    sink.write_text(&format!(
        "{}\x1b[0;2;3;90m{}{}",
        ansi::cursor_to(status_row, 1),
        COUNTDOWN_LABEL,
        iterations
    ))?;

    for i in 0..iterations {
        let x = rng.random_range(0..chars.len());
        sleeper.sleep(Duration::from_millis(1));

        let weight = weight_code(rng);
        let slant = slant_code(rng);
        let (fr, fg, fb): (u8, u8, u8) = (
            rng.random_range(FG_MIN..FG_MAX),
            rng.random_range(FG_MIN..FG_MAX),
            rng.random_range(FG_MIN..FG_MAX),
        );
        let (br, bg, bb): (u8, u8, u8) = (
            rng.random_range(BG_MIN..BG_MAX),
            rng.random_range(BG_MIN..BG_MAX),
            rng.random_range(BG_MIN..BG_MAX),
        );
        let ch = scrambled_case(rng, chars[x]);

        sink.write_text(&format!(
            "\x1b[{};{}f\x1b[{};{};38;2;{};{};{};48;2;{};{};{}m{}",
            row,
            base_col + x as u16,
            weight,
            slant,
            fr,
            fg,
            fb,
            br,
            bg,
            bb,
            ch
        ))?;

        sink.write_text(&format!(
            "{}{}{}",
            ansi::cursor_to(status_row, status_col),
            ansi::SGR_DEFAULT,
            ansi::ERASE_TO_EOL
        ))?;
        sink.write_text(&format!("\x1b[0;2;3;90m{}", iterations - i - 1))?;
        sink.flush()?;
    }

    debug!("scramble loop finished");
    Ok(())
}
