//! ANSI escape sequence formatters and constants.
//!
//! Everything the show emits goes through these: cursor movement, cursor
//! visibility, screen/line erasure, and the two non-standard window sizing
//! hints. The sequences are emitted byte-for-byte as the terminal expects
//! them; nothing is ever read back from the terminal.

/// The escape character that introduces every sequence.
pub const ESC: &str = "\x1b";

/// Move the cursor up one row.
pub const CURSOR_UP: &str = "\x1b[A";
/// Move the cursor down one row.
pub const CURSOR_DOWN: &str = "\x1b[B";
/// Move the cursor left one column.
pub const CURSOR_BACK: &str = "\x1b[D";

/// Hide the cursor (DECTCEM reset).
pub const HIDE_CURSOR: &str = "\x1b[?25l";
/// Show the cursor (DECTCEM set).
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Erase the whole screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";
/// Erase from the cursor to the end of the line.
pub const ERASE_TO_EOL: &str = "\x1b[K";

/// Reset all SGR attributes (explicit zero parameter).
pub const RESET: &str = "\x1b[0m";
/// Reset all SGR attributes (empty parameter list form).
pub const SGR_DEFAULT: &str = "\x1b[m";

/// Absolute cursor position, 1-indexed from the top-left corner.
///
/// Produces `ESC[<row>;<col>f` (HVP). Callers that want the original's
/// defaulted column pass `1`.
pub fn cursor_to(row: u16, col: u16) -> String {
    format!("\x1b[{};{}f", row, col)
}

/// Move the cursor left by `n` columns: `ESC[<n>D`.
pub fn cursor_back(n: u16) -> String {
    format!("\x1b[{}D", n)
}

/// Window sizing hint: maximum line width of `n` columns (`ESC[<n>u`).
///
/// Non-standard; terminals that do not recognize it ignore it.
pub fn max_line_width(n: u16) -> String {
    format!("\x1b[{}u", n)
}

/// Window sizing hint: maximum of `n` lines (`ESC[<n>t`).
///
/// Non-standard; terminals that do not recognize it ignore it.
pub fn max_lines(n: u16) -> String {
    format!("\x1b[{}t", n)
}
