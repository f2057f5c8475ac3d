// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}
/// Collapse a display name into something safe for a filename.
/// Falls back to the given label when nothing printable survives.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches(|c| c == '_' || c == '-').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_resolve_before_tag_stripping() {
        assert_eq!(normalize_entities("Oil &amp; Gas"), "Oil & Gas");
        assert_eq!(normalize_entities("a&nbsp;b"), "a b");
    }

    #[test]
    fn whitespace_collapses_and_trims() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_ws(""), "");
        assert_eq!(normalize_ws(" \n "), "");
    }

    #[test]
    fn filenames_drop_unsafe_chars() {
        assert_eq!(sanitize_filename("F&B", "x"), "FB");
        assert_eq!(sanitize_filename("CONSUMER DURABLES", "x"), "CONSUMER_DURABLES");
        assert_eq!(sanitize_filename("Tea & Coffee", "x"), "Tea_Coffee");
        assert_eq!(sanitize_filename("-", "uncategorized"), "uncategorized");
        assert_eq!(sanitize_filename("", "uncategorized"), "uncategorized");
    }
}
