use crate::types::OccurrenceCount;

/// Counts the non-overlapping, literal occurrences of `symbol` within `text`.
///
/// Matching is performed left to right on the raw text; it is not grapheme aware, so a
/// symbol which is a substring of a longer sequence still matches inside it.
///
/// # Example
/// ```ignore
/// assert_eq!(count_substring_occurrences("😀😀x😀", "😀"), 3);
/// assert_eq!(count_substring_occurrences("aaaa", "aa"), 2);
/// ```
pub fn count_substring_occurrences(text: &str, symbol: &str) -> OccurrenceCount {
    // `str::matches` yields a match between every char for an empty pattern
    if symbol.is_empty() {
        return 0;
    }

    text.matches(symbol).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_repeated_emoji() {
        assert_eq!(count_substring_occurrences("😀😀x😀", "😀"), 3);
    }

    #[test]
    fn test_counts_non_overlapping() {
        assert_eq!(count_substring_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_substring_occurrences("aaa", "aa"), 1);
    }

    #[test]
    fn test_empty_symbol_never_matches() {
        assert_eq!(count_substring_occurrences("anything", ""), 0);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert_eq!(count_substring_occurrences("a.b a*b", "."), 1);
        assert_eq!(count_substring_occurrences("(+)(+)", "(+)"), 2);
    }

    #[test]
    fn test_multi_codepoint_sequence() {
        let family = "👨\u{200d}👩\u{200d}👧";
        let text = format!("{} and {}", family, family);

        assert_eq!(count_substring_occurrences(&text, family), 2);
        // Component emoji still match inside the joined sequence
        assert_eq!(count_substring_occurrences(&text, "👩"), 2);
    }
}
