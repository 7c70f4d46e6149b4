//! String utility functions for delimiter scanning

/// Strip a prefix, comparing ASCII case-insensitively
///
/// # Arguments
///
/// * `s` - The input string
/// * `prefix` - The ASCII prefix to look for
///
/// # Returns
///
/// The remainder after the prefix, or `None` if `s` does not start with it
pub fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

/// Byte offset of the first occurrence of an ASCII delimiter
///
/// # Arguments
///
/// * `s` - The string to scan
/// * `delim` - An ASCII delimiter byte
///
/// # Returns
///
/// The byte offset, always on a char boundary since `delim` is ASCII
pub fn find_first(s: &str, delim: u8) -> Option<usize> {
    debug_assert!(delim.is_ascii());
    s.bytes().position(|b| b == delim)
}

/// Byte offset of the last occurrence of an ASCII delimiter
///
/// # Arguments
///
/// * `s` - The string to scan
/// * `delim` - An ASCII delimiter byte
///
/// # Returns
///
/// The byte offset, always on a char boundary since `delim` is ASCII
pub fn find_last(s: &str, delim: u8) -> Option<usize> {
    debug_assert!(delim.is_ascii());
    s.bytes().rposition(|b| b == delim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_ignore_case() {
        assert_eq!(strip_prefix_ignore_case("SS://abc", "ss://"), Some("abc"));
        assert_eq!(strip_prefix_ignore_case("ss://", "ss://"), Some(""));
        assert_eq!(strip_prefix_ignore_case("ssr://abc", "ss://"), None);
        assert_eq!(strip_prefix_ignore_case("ss:", "ss://"), None);
        // prefix length lands inside a multi-byte char
        assert_eq!(strip_prefix_ignore_case("sss€x", "ss://"), None);
    }

    #[test]
    fn test_find_first_and_last() {
        let s = "päss:wörd@höst:80";
        let first = find_first(s, b':').unwrap();
        let last = find_last(s, b':').unwrap();
        assert_eq!(&s[..first], "päss");
        assert_eq!(&s[last + 1..], "80");
        assert_eq!(find_last(s, b'#'), None);
    }
}
