//! Query normalization: URL or `@`-handle in, bare username out.

/// Reduce a raw `url` query value (`https://t.me/@foo/`, `t.me/foo`, `@foo`,
/// `foo`) to a bare username.
///
/// Strips a leading scheme, a `t.me/` path prefix, stray `/` separators and a
/// leading `@`, then trims whitespace. Returns `None` when nothing is left;
/// the caller turns that into a validation error before any external call.
pub fn normalize_query(raw: &str) -> Option<String> {
    let mut s = raw.trim();

    s = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))
        .unwrap_or(s);
    s = s.strip_prefix("t.me/").unwrap_or(s);

    let cleaned: String = s.chars().filter(|c| *c != '/').collect();
    let username = cleaned.trim_start_matches('@').trim();

    if username.is_empty() {
        return None;
    }
    Some(username.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_prefix_and_at() {
        assert_eq!(normalize_query("https://t.me/@foo/").as_deref(), Some("foo"));
        assert_eq!(normalize_query("http://t.me/foo").as_deref(), Some("foo"));
        assert_eq!(normalize_query("t.me/durov").as_deref(), Some("durov"));
        assert_eq!(normalize_query("@foo").as_deref(), Some("foo"));
        assert_eq!(normalize_query("foo").as_deref(), Some("foo"));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(normalize_query("  durov  ").as_deref(), Some("durov"));
    }

    #[test]
    fn empty_inputs_yield_none() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("https://t.me/"), None);
        assert_eq!(normalize_query("@"), None);
    }
}
