//! Title content builder.
//!
//! Composes the decorated banner title from its fixed fragments and derives
//! the total character length the frame drawer and payload centering use.
//! Construction is pure and deterministic.

/// The payload string the show types out and then scrambles.
pub const PAYLOAD: &str = "Hello, World !!!";

/// Author credit printed under the title.
pub const AUTHOR: &str = "José Herce";

const INTRO: &str = "It's not my first";
const DECORATION: &str = "°·.°·..·°";

/// The decorated title: six ordered fragments and their combined length.
///
/// Fragments are styled individually by the entry sequence, so they stay
/// separate rather than being joined into one string. The closing
/// decoration is the opening one reversed character by character.
pub struct Title {
    fragments: [String; 6],
    total_len: usize,
}

impl Title {
    pub fn new() -> Self {
        let reversed: String = DECORATION.chars().rev().collect();
        let fragments = [
            format!("{DECORATION}( "),
            format!("{INTRO} "),
            "\"".to_string(),
            PAYLOAD.to_string(),
            "\"".to_string(),
            format!(" ){reversed}"),
        ];
        let total_len = fragments.iter().map(|f| f.chars().count()).sum();

        Self {
            fragments,
            total_len,
        }
    }

    /// The six fragments in display order.
    pub fn fragments(&self) -> &[String; 6] {
        &self.fragments
    }

    /// Sum of the fragments' character counts.
    pub fn total_len(&self) -> usize {
        self.total_len
    }
}

impl Default for Title {
    fn default() -> Self {
        Self::new()
    }
}
