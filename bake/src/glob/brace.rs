//! Brace expansion.
//!
//! `{a,b}` groups are expanded before parsing, so each alternative is
//! matched as its own pattern. Groups may nest. A group without a top-level
//! comma, or an unbalanced brace, is left as literal text.

/// Expand every brace group in `pattern`.
///
/// Alternatives keep their left-to-right order and duplicates are dropped.
///
/// # Examples
///
/// ```
/// use bake::glob::brace::expand;
///
/// assert_eq!(expand("src/{a,b}/*.rs"), ["src/a/*.rs", "src/b/*.rs"]);
/// assert_eq!(expand("{x,{y,z}}"), ["x", "y", "z"]);
/// assert_eq!(expand("plain"), ["plain"]);
/// assert_eq!(expand("{single}"), ["{single}"]);
/// ```
#[must_use]
pub fn expand(pattern: &str) -> Vec<String> {
    let Some((open, close)) = find_group(pattern) else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let body = &pattern[open + 1..close];
    let suffix = &pattern[close + 1..];

    let mut expanded = Vec::new();
    for alternative in split_alternatives(body) {
        for candidate in expand(&format!("{prefix}{alternative}{suffix}")) {
            if !expanded.contains(&candidate) {
                expanded.push(candidate);
            }
        }
    }
    expanded
}

/// The byte offsets of the first balanced group with a top-level comma.
fn find_group(pattern: &str) -> Option<(usize, usize)> {
    let bytes = pattern.as_bytes();
    let mut start = 0;

    while let Some(offset) = pattern[start..].find('{') {
        let open = start + offset;
        let mut depth = 0usize;
        let mut has_comma = false;

        for (index, &byte) in bytes.iter().enumerate().skip(open) {
            match byte {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        if has_comma {
                            return Some((open, index));
                        }
                        break;
                    }
                }
                b',' if depth == 1 => has_comma = true,
                _ => {}
            }
        }

        start = open + 1;
    }
    None
}

fn split_alternatives(body: &str) -> Vec<&str> {
    let mut alternatives = Vec::new();
    let mut depth = 0usize;
    let mut last = 0;

    for (index, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                alternatives.push(&body[last..index]);
                last = index + 1;
            }
            _ => {}
        }
    }
    alternatives.push(&body[last..]);
    alternatives
}
