//! Input text metrics.
//!
//! Cheap client-side measurements shown before a summary request: character
//! and word counts plus a rough processing-time estimate. Purely advisory;
//! nothing here changes the request itself.

/// Inputs shorter than this many characters tend to summarize poorly.
pub const SHORT_INPUT_THRESHOLD: usize = 100;

/// Simple metrics over the effective input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    pub estimated_secs: u64,
}

impl TextStats {
    /// True when the input is short enough that summary quality suffers.
    pub fn is_short(&self) -> bool {
        self.characters < SHORT_INPUT_THRESHOLD
    }
}

/// Measure `text`.
///
/// The estimate is one second per hundred words with a two-second floor,
/// matching observed service latency rather than any guarantee.
pub fn analyze(text: &str) -> TextStats {
    let characters = text.chars().count();
    let words = text.split_whitespace().count();
    let estimated_secs = std::cmp::max(2, (words / 100) as u64);
    TextStats {
        characters,
        words,
        estimated_secs,
    }
}

/// Format a count with thousands separators for display.
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + (s.len() - 1) / 3);
    let chars: Vec<char> = s.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_and_words() {
        let stats = analyze("one two three");
        assert_eq!(stats.characters, 13);
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn estimate_has_two_second_floor() {
        assert_eq!(analyze("").estimated_secs, 2);
        assert_eq!(analyze("a few words only").estimated_secs, 2);
    }

    #[test]
    fn estimate_scales_with_word_count() {
        let text = "word ".repeat(1000);
        assert_eq!(analyze(&text).estimated_secs, 10);
    }

    #[test]
    fn short_input_threshold_is_strict() {
        assert!(analyze(&"a".repeat(99)).is_short());
        assert!(!analyze(&"a".repeat(100)).is_short());
    }

    #[test]
    fn format_number_comma() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1), "1");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }
}
