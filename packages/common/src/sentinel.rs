//! Zero-width sentinel characters
//!
//! Renderers put a single zero-width character inside otherwise empty inline
//! elements so they stay hit-testable. Sentinels are addressable as caret
//! positions but never count toward visible offsets.

pub const ZERO_WIDTH_SPACE: char = '\u{200B}';
pub const ZERO_WIDTH_NO_BREAK_SPACE: char = '\u{FEFF}';

pub const SENTINEL_CHARS: [char; 2] = [ZERO_WIDTH_SPACE, ZERO_WIDTH_NO_BREAK_SPACE];

pub fn is_sentinel_char(c: char) -> bool {
    SENTINEL_CHARS.contains(&c)
}

/// Non-empty text made only of sentinel characters
pub fn is_sentinel_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_sentinel_char)
}

/// Number of visible characters (sentinels excluded)
pub fn visible_len(text: &str) -> usize {
    text.chars().filter(|c| !is_sentinel_char(*c)).count()
}

/// Visible characters in the first `char_offset` chars of `text`
pub fn visible_prefix_len(text: &str, char_offset: usize) -> usize {
    text.chars()
        .take(char_offset)
        .filter(|c| !is_sentinel_char(*c))
        .count()
}

/// Char offset in `text` just after `visible` visible characters.
///
/// Clamps to the end of the text.
pub fn char_offset_for_visible(text: &str, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    let mut seen = 0;
    for (i, c) in text.chars().enumerate() {
        if !is_sentinel_char(c) {
            seen += 1;
            if seen == visible {
                return i + 1;
            }
        }
    }
    text.chars().count()
}
