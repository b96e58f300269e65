//! Status id ordering
//!
//! Mastodon ids are numeric strings of growing length, so they order by
//! length first and then lexicographically. Comparing them as plain strings
//! gets "99" vs "100" wrong.

use std::cmp::Ordering;

/// Total order on status ids: length, then content
pub fn compare(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// `a < b` strictly
pub fn is_less_than(a: &str, b: &str) -> bool {
    compare(a, b) == Ordering::Less
}

/// `a <= b`
pub fn is_less_than_or_equal(a: &str, b: &str) -> bool {
    a == b || is_less_than(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_less_than() {
        assert!(is_less_than("abc", "bcd"));
        assert!(is_less_than("ab", "abc"));
        assert!(is_less_than("cb", "abc"));
        assert!(is_less_than("99", "100"));
        assert!(!is_less_than("ab", "ab"));
        assert!(!is_less_than("abc", "cb"));
    }

    #[test]
    fn test_is_less_than_or_equal() {
        assert!(is_less_than_or_equal("abc", "bcd"));
        assert!(is_less_than_or_equal("ab", "abc"));
        assert!(is_less_than_or_equal("cb", "abc"));
        assert!(is_less_than_or_equal("ab", "ab"));
        assert!(!is_less_than_or_equal("abc", "cb"));
    }

    #[test]
    fn test_sorting_newest_first() {
        let mut ids = vec!["9", "110", "100", "1000"];
        ids.sort_by(|a, b| compare(b, a));
        assert_eq!(ids, vec!["1000", "110", "100", "9"]);
    }
}
