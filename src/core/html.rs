// src/core/html.rs
//
// Tag-walking helpers for the wiki's table markup. No DOM; byte offsets into
// the raw document string throughout.

use super::sanitize;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find `pat` (already lowercased, e.g. "<td" or "</td") at or after `from`,
/// requiring a tag-name boundary right after it so "<td" never matches "<tda…".
fn find_tag(lc: &str, pat: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let rel = lc.get(pos..)?.find(pat)?;
        let at = pos + rel;
        let after = at + pat.len();
        match lc.as_bytes().get(after) {
            Some(&b) if b == b'>' || b == b'/' || b.is_ascii_whitespace() => return Some(at),
            None => return None,
            _ => pos = at + 1,
        }
    }
}

/// Next `<name …>` open tag at or after `from`.
/// Returns (tag_start, open_end) with open_end just past the '>'.
pub fn next_open_tag(s: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let pat = join!("<", &to_lower(name));
    let at = find_tag(&lc, &pat, from)?;
    let open_end = lc[at..].find('>')? + at + 1;
    Some((at, open_end))
}

/// Full element block for a tag that may nest (tables inside tables, cells
/// inside nested tables). Tracks open/close depth to find the matching close
/// tag, where a naive "first `</name>`" stops at the inner one.
/// Returns (start, end) spanning open tag through matching close tag.
pub fn balanced_block(s: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let nl = to_lower(name);
    let open_pat = join!("<", &nl);
    let close_pat = join!("</", &nl);

    let start = find_tag(&lc, &open_pat, from)?;
    let mut pos = lc[start..].find('>')? + start + 1;
    let mut depth = 1usize;

    while depth > 0 {
        let next_open = find_tag(&lc, &open_pat, pos);
        let next_close = find_tag(&lc, &close_pat, pos);
        match (next_open, next_close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                pos = lc[o..].find('>')? + o + 1;
            }
            (_, Some(c)) => {
                depth -= 1;
                pos = lc[c..].find('>')? + c + 1;
            }
            _ => return None, // unterminated
        }
    }
    Some((start, pos))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Value of `name="…"` (or unquoted) inside an open tag, if present.
pub fn attr_value<'a>(open_tag: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(open_tag);
    let pat = join!(" ", &to_lower(name), "=");
    let at = lc.find(&pat)?;
    let rest = &open_tag[at + pat.len()..];
    if let Some(stripped) = rest.strip_prefix('"') {
        stripped.find('"').map(|e| &stripped[..e])
    } else {
        rest.split(|c: char| c.is_whitespace() || c == '>')
            .next()
            .filter(|v| !v.is_empty())
    }
}

/// Tag-stripped, entity-decoded text. Whitespace is kept verbatim: bundle and
/// item names are compared exactly downstream, so no normalization here.
pub fn text_of(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    sanitize::decode_entities(&out)
}

const VOID_TAGS: [&str; 12] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr",
];

/// Count immediate non-empty child elements of an element's inner markup:
/// open tags at nesting depth zero that enclose at least one child node (text
/// or element). Childless elements don't count — an empty `<span></span>` or
/// a bare `<img>` is not a filled slot. Text nodes at depth zero don't count
/// either; only elements do.
pub fn child_element_count(inner: &str) -> usize {
    let lc = to_lower(inner);
    let mut count = 0usize;
    let mut depth = 0usize;
    let mut pos = 0usize;
    // Inner start of the currently open depth-0 element.
    let mut child_start = 0usize;

    while let Some(rel) = lc[pos..].find('<') {
        let at = pos + rel;
        if lc[at..].starts_with("<!--") {
            pos = match lc[at..].find("-->") {
                Some(e) => at + e + 3,
                None => break,
            };
            continue;
        }
        let gt = match lc[at..].find('>') {
            Some(g) => at + g,
            None => break,
        };
        let tag = &lc[at + 1..gt];
        if tag.starts_with('/') {
            if depth == 1 && at > child_start {
                count += 1;
            }
            depth = depth.saturating_sub(1);
        } else {
            let name: String = tag
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect();
            // Void and self-closed tags can't have children, so they never
            // count and never open a level.
            if !name.is_empty() && !tag.ends_with('/') && !VOID_TAGS.contains(&name.as_str()) {
                if depth == 0 {
                    child_start = gt + 1;
                }
                depth += 1;
            }
        }
        pos = gt + 1;
    }
    count
}
