//! The full banner show, start to finish.
//!
//! A fixed linear script: window sizing hints, hide cursor, clear screen,
//! frame, title fragments typed in sequence, author credit with a blinking
//! re-emphasis, the centered payload, the scramble loop, and finally style
//! reset plus cursor restore. There is no branching and no early exit.

use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use tracing::debug;

use crate::ansi::{self, CLEAR_SCREEN, HIDE_CURSOR, RESET, SHOW_CURSOR};
use crate::animation;
use crate::frame;
use crate::sink::TermSink;
use crate::timing::Sleeper;
use crate::title::{Title, AUTHOR, PAYLOAD};
use crate::typewriter::{self, DEFAULT_PAUSE_MS};

const TITLE_ROW: u16 = 2;
const TITLE_COL: u16 = 5;
const CREDIT_ROW: u16 = 4;
const CREDIT_COL: u16 = 3;
const PAYLOAD_ROW: u16 = 7;
const FINAL_ROW: u16 = 11;

/// SGR prefixes for the six title fragments: dim cyan decorations, italic
/// intro, plain quotes, bold fast-blink payload.
const FRAGMENT_STYLES: [&str; 6] = [
    "\x1b[0;2;36m",
    "\x1b[0;3;36m",
    "\x1b[0;22;36m",
    "\x1b[0;1;36;6m",
    "\x1b[0;22;36m",
    "\x1b[0;2;36m",
];

const CREDIT_LABEL: &str = "- Developed by: ";

/// Run the whole show against the given sink, random source, and sleeper.
///
/// Any write failure propagates immediately; there is no recovery path.
pub fn run<W: TermSink, R: Rng, S: Sleeper>(
    sink: &mut W,
    rng: &mut R,
    sleeper: &S,
) -> Result<()> {
    let title = Title::new();

    debug!(title_len = title.total_len(), "show starting");

    // Sizing hints first, then a hidden cursor on a blank screen.
    sink.write_text(&ansi::max_line_width(100))?;
    sink.write_text(&ansi::max_lines(100))?;
    sink.write_text(&format!("{HIDE_CURSOR}{CLEAR_SCREEN}"))?;
    sink.flush()?;

    frame::draw_frame(sink, sleeper, title.total_len())?;

    let mut col = TITLE_COL;
    for (fragment, style) in title.fragments().iter().zip(FRAGMENT_STYLES) {
        typewriter::type_out(sink, rng, sleeper, (TITLE_ROW, col), style, fragment, 0)?;
        col += fragment.chars().count() as u16;
    }

    debug!("title typed, crediting author");

    typewriter::type_out(
        sink,
        rng,
        sleeper,
        (CREDIT_ROW, CREDIT_COL),
        "\x1b[3;34m",
        CREDIT_LABEL,
        DEFAULT_PAUSE_MS,
    )?;
    let author_col = CREDIT_COL + CREDIT_LABEL.chars().count() as u16;
    typewriter::type_out(
        sink,
        rng,
        sleeper,
        (CREDIT_ROW, author_col),
        "\x1b[0;1;34m",
        AUTHOR,
        0,
    )?;

    // Back over the name and retype it in one go with blink on.
    let author_len = AUTHOR.chars().count() as u16;
    sink.write_text(&format!(
        "{}\x1b[0;1;34;5m{AUTHOR}",
        ansi::cursor_back(author_len)
    ))?;
    sink.flush()?;
    sleeper.sleep(Duration::from_millis(DEFAULT_PAUSE_MS));

    // Center the payload under the framed title.
    let payload_len = PAYLOAD.chars().count();
    let payload_col = ((title.total_len() + 7) / 2 - payload_len / 2 + 1) as u16;
    typewriter::type_out(
        sink,
        rng,
        sleeper,
        (PAYLOAD_ROW, payload_col),
        ansi::SGR_DEFAULT,
        PAYLOAD,
        DEFAULT_PAUSE_MS,
    )?;

    animation::run(
        sink,
        rng,
        sleeper,
        PAYLOAD,
        PAYLOAD_ROW,
        payload_col,
        animation::ITERATIONS,
    )?;

    sink.write_text(&format!(
        "{}{RESET}{SHOW_CURSOR}",
        ansi::cursor_to(FINAL_ROW, 1)
    ))?;
    sink.flush()?;

    debug!("show finished");
    Ok(())
}
