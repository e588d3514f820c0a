//! Emoji counting over fixed Unicode ranges.

/// Inclusive codepoint ranges treated as emoji.
pub const EMOJI_RANGES: [(u32, u32); 6] = [
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // symbols & pictographs
    (0x1F680, 0x1F6FF), // transport & map symbols
    (0x1F1E0, 0x1F1FF), // regional indicators (flags)
    (0x2702, 0x27B0),   // dingbats
    (0x24C2, 0x1F251),  // enclosed characters
];

pub fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Number of codepoints in `text` that fall in [`EMOJI_RANGES`].
///
/// Every codepoint counts on its own: a flag made of two regional
/// indicators counts twice and adjacent emoji are never merged.
pub fn count_emoji(text: &str) -> usize {
    text.chars().filter(|&c| is_emoji(c)).count()
}
