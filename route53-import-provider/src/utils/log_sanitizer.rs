//! Log sanitization utilities
//!
//! Keeps record values, object bodies and key material out of debug/error logs
//! in full.

/// Byte budget for a logged payload (XML bodies, SigV4 canonical requests).
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of an access key id kept visible.
const KEY_ID_VISIBLE: usize = 4;

/// Largest char boundary of `s` not past `max_len`.
fn char_prefix_len(s: &str, max_len: usize) -> usize {
    (0..=max_len.min(s.len()))
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0)
}

/// Shorten a payload before it reaches the log.
///
/// Route 53 XML bodies repeat record values, and canonical requests list every
/// signed header, so only the first `TRUNCATE_LIMIT` bytes are kept, followed
/// by the total size.
pub fn truncate_for_log(s: &str) -> String {
    let kept = char_prefix_len(s, TRUNCATE_LIMIT);
    if kept == s.len() {
        return s.to_string();
    }
    format!("{}... [truncated, total {} bytes]", &s[..kept], s.len())
}

/// Mask an access key id, keeping only its prefix (`AKIA****`).
pub fn mask_key_id(key_id: &str) -> String {
    let visible = char_prefix_len(key_id, KEY_ID_VISIBLE);
    format!("{}****", &key_id[..visible])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "<ChangeInfo/>";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "ü".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn cut_backs_off_to_char_boundary() {
        // byte 256 falls inside a two-byte char
        let s = format!("x{}", "ü".repeat(200));
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&s[..255]));
        assert!(result.contains("total 401 bytes]"));
    }

    #[test]
    fn key_id_is_masked() {
        assert_eq!(mask_key_id("AKIDEXAMPLE"), "AKID****");
        assert_eq!(mask_key_id("AK"), "AK****");
    }
}
