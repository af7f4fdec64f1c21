// src/core/sanitize.rs

/// Decode the handful of entities the wiki actually emits. Non-breaking
/// spaces become plain spaces so left-trims behave.
pub fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
