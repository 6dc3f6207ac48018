//! Ordinal case-insensitive string comparison.
//!
//! Comparison is culture-invariant: every char is folded through its simple
//! uppercase mapping, independent of any locale. Chars whose uppercase form
//! expands to several chars (e.g. `'ß'`) are left unchanged, so folding never
//! changes the char count of a string.

/// Folds a single char to its simple uppercase form.
#[inline]
pub fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Returns the case-folded form of `s`.
pub fn fold(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Returns true if `needle` occurs anywhere in `haystack`, ignoring case.
///
/// An empty needle is contained in every string.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle.is_ascii() {
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()));
    }
    fold(haystack).contains(&fold(needle))
}

/// Returns true if `a` and `b` are equal in their entirety, ignoring case.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_always_matches() {
        assert!(contains_ignore_case("", ""));
        assert!(contains_ignore_case("Wood", ""));
    }

    #[test]
    fn contains_ignores_ascii_case() {
        assert!(contains_ignore_case("Copper Ore", "copper"));
        assert!(contains_ignore_case("Copper Ore", "PER O"));
        assert!(contains_ignore_case("Copper Ore", "ore"));
        assert!(!contains_ignore_case("Copper Ore", "iron"));
        assert!(!contains_ignore_case("Ore", "Copper Ore"));
    }

    #[test]
    fn contains_handles_non_ascii() {
        assert!(contains_ignore_case("Ölkanne", "ölk"));
        assert!(contains_ignore_case("Ящик для рыбы", "ЯЩИК"));
        assert!(!contains_ignore_case("Ящик", "рыба"));
    }

    #[test]
    fn equality_is_whole_string() {
        assert!(eq_ignore_case("Wood", "wOOD"));
        assert!(eq_ignore_case("Éclair", "éCLAIR"));
        assert!(!eq_ignore_case("Wood", "Wo"));
        assert!(!eq_ignore_case("Wo", "Wood"));
        assert!(eq_ignore_case("", ""));
    }

    #[test]
    fn multi_char_uppercase_is_not_expanded() {
        // 'ß' uppercases to "SS", so it only matches itself.
        assert_eq!(fold_char('ß'), 'ß');
        assert!(!eq_ignore_case("ß", "ss"));
        assert!(!eq_ignore_case("ß", "ẞ"));
        assert!(eq_ignore_case("Straße", "STRAßE"));
        assert!(!eq_ignore_case("İ", "i"));
    }

    #[test]
    fn final_sigma_matches_capital_sigma() {
        assert!(eq_ignore_case("ΟΔΟΣ", "οδος"));
        assert!(eq_ignore_case("ΟΔΟΣ", "οδοσ"));
        assert!(contains_ignore_case("Λίθος", "ΘΟΣ"));
    }

    #[test]
    fn kelvin_sign_does_not_match_ascii_k() {
        assert!(!eq_ignore_case("\u{212A}", "k"));
        assert!(!eq_ignore_case("\u{212A}", "K"));
        assert!(!contains_ignore_case("5 \u{212A}", "k"));
        assert!(eq_ignore_case("\u{212A}", "\u{212A}"));
    }
}
