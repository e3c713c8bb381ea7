/// Whether `s` is already a slug, i.e. a fixed point of the slugifier.
///
/// Only `[a-z0-9-]`, no `--`, no hyphen at either end. The empty string
/// counts: it is what absent or all-punctuation input produces.
pub fn is_slug(s: &str) -> bool {
    !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_slug_accepts_kebab_case() {
        assert!(is_slug("hello-world"));
        assert!(is_slug("route-66"));
        assert!(is_slug("a"));
        assert!(is_slug(""));
    }

    #[test]
    fn test_is_slug_rejects_edge_hyphens() {
        assert!(!is_slug("-hello"));
        assert!(!is_slug("hello-"));
        assert!(!is_slug("-"));
    }

    #[test]
    fn test_is_slug_rejects_double_hyphen() {
        assert!(!is_slug("hello--world"));
    }

    #[test]
    fn test_is_slug_rejects_other_chars() {
        assert!(!is_slug("Hello"));
        assert!(!is_slug("hello_world"));
        assert!(!is_slug("hello world"));
        assert!(!is_slug("o'brien"));
        assert!(!is_slug("café"));
    }
}
