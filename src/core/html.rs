// src/core/html.rs

// Tiny case-insensitive tag slicing. Enough for the handful of markup
// shapes the rating pages use; not a general HTML parser.

use super::sanitize::normalize_ws;

/// ASCII-only lowering keeps byte offsets stable, so matches found in the
/// lowered copy index straight into the original.
pub fn to_lower(s: &str) -> String {
    s.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// Case-insensitive substring search. Returns the byte offset of the match.
pub fn find_ci(s: &str, pat: &str) -> Option<usize> {
    to_lower(s).find(&to_lower(pat))
}

/// Inner text between an opening tag matching `open_pat` and the next
/// occurrence of `close_pat`. Naive: does not balance nested tags.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let o = lc.find(&to_lower(open_pat))?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&to_lower(close_pat))?;
    Some(&s[after..after + cr])
}

/// Find the next `o`…`c` tag block at or after byte offset `from`.
/// Returns (start, end) spanning the whole block including both tags.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let start = lc.get(from..)?.find(&to_lower(o))? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&to_lower(c))?;
    Some((start, open_end + end_rel + c.len()))
}

/// Byte just past the matching close tag of the element whose opening tag
/// contains offset `at`, balancing nested `name` elements along the way.
/// Takes an already-lowered haystack (see [`to_lower`]); offsets carry
/// over to the original. `None` when the element never closes.
pub fn element_end(lc: &str, name: &str, at: usize) -> Option<usize> {
    let open = format!("<{name}");
    let close = format!("</{name}");

    let mut pos = lc[at..].find('>')? + at + 1;
    let mut depth = 1usize;
    while depth > 0 {
        let next_close = lc[pos..].find(&close)?;
        match lc[pos..].find(&open) {
            Some(o) if o < next_close => {
                depth += 1;
                pos += o + open.len();
            }
            _ => {
                depth -= 1;
                pos += next_close + close.len();
            }
        }
    }
    Some(lc[pos..].find('>')? + pos + 1)
}

/// Content of a block with its outermost open/close tags removed.
pub fn inner_after_open_tag(block: &str) -> String {
    match (block.find('>'), block.rfind('<')) {
        (Some(oe), Some(cs)) if cs > oe => block[oe + 1..cs].to_string(),
        _ => s!(),
    }
}

/// Drop every `<…>` tag and collapse the remaining whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let mut rest = s.as_ref();
    let mut out = String::with_capacity(rest.len());

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        match rest[lt..].find('>') {
            Some(gt) => rest = &rest[lt + gt + 1..],
            // Unclosed tag swallows the remainder.
            None => return normalize_ws(&out),
        }
    }
    out.push_str(rest);
    normalize_ws(&out)
}
