//! Shared utility functions.

/// Truncate a string to at most `max_bytes`, backing up to the nearest
/// UTF-8 character boundary. Used for log previews of user messages.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_str("inception", 100), "inception");
    }

    #[test]
    fn long_strings_are_cut() {
        assert_eq!(truncate_str("tell me about inception", 7), "tell me");
    }

    #[test]
    fn multibyte_boundary_is_respected() {
        // é is two bytes; cutting mid-char must back up
        assert_eq!(truncate_str("amélie", 3), "am");
    }
}
