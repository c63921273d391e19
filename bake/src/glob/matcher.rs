//! Single-segment wildcard matching.

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Matches one path segment against a wildcard pattern.
///
/// Supported tokens:
/// - `*` any run of characters
/// - `?` exactly one character
/// - `[abc]` / `[a-z]` one character from the set
/// - `[!abc]` one character not in the set
///
/// Everything else matches literally.
///
/// # Examples
///
/// ```
/// use bake::glob::SegmentMatcher;
///
/// let matcher = SegmentMatcher::new("*.t?t", true).unwrap();
/// assert!(matcher.is_match("hello.txt"));
/// assert!(!matcher.is_match("hello.TXT"));
///
/// let matcher = SegmentMatcher::new("[!a]*", false).unwrap();
/// assert!(matcher.is_match("build"));
/// assert!(!matcher.is_match("Assets"));
/// ```
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    pattern: String,
    regex: Regex,
}

impl SegmentMatcher {
    /// Compile a segment pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for an unterminated `[` set.
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self> {
        let source = to_regex(pattern)?;
        let regex = RegexBuilder::new(&source)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|e| Error::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The source pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether `name` matches the whole pattern.
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Whether a segment contains any wildcard token.
#[must_use]
pub fn has_wildcard(segment: &str) -> bool {
    segment.contains(['*', '?', '['])
}

fn to_regex(pattern: &str) -> Result<String> {
    let mut regex = String::with_capacity(pattern.len() + 8);
    regex.push('^');

    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                // Runs of stars behave like a single one inside a segment.
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                regex.push_str(".*");
            }
            '?' => regex.push('.'),
            '[' => {
                let mut set = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' && !set.is_empty() {
                        closed = true;
                        break;
                    }
                    set.push(c);
                }
                if !closed {
                    return Err(Error::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: "unterminated character set".to_string(),
                    });
                }
                regex.push('[');
                let body = match set.strip_prefix('!') {
                    Some(negated) => {
                        regex.push('^');
                        negated
                    }
                    None => set.as_str(),
                };
                for c in body.chars() {
                    if matches!(c, '\\' | '[' | ']' | '^' | '&' | '~') {
                        regex.push('\\');
                    }
                    regex.push(c);
                }
                regex.push(']');
            }
            _ => regex.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }

    regex.push('$');
    Ok(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, name: &str) -> bool {
        SegmentMatcher::new(pattern, true).unwrap().is_match(name)
    }

    #[test]
    fn test_star_matches_any_run() {
        assert!(matches("*", "anything"));
        assert!(matches("*", ""));
        assert!(matches("a*c", "abbbc"));
        assert!(!matches("a*c", "abbbd"));
    }

    #[test]
    fn test_question_mark_matches_one_character() {
        assert!(matches("a?c", "abc"));
        assert!(!matches("a?c", "ac"));
        assert!(!matches("a?c", "abbc"));
    }

    #[test]
    fn test_character_sets() {
        assert!(matches("[abc].txt", "b.txt"));
        assert!(!matches("[abc].txt", "d.txt"));
        assert!(matches("[a-c]", "b"));
        assert!(matches("[!abc].txt", "d.txt"));
        assert!(!matches("[!abc].txt", "a.txt"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert!(matches("a.b+(c)", "a.b+(c)"));
        assert!(!matches("a.b", "axb"));
        assert!(matches("$^{}|", "$^{}|"));
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = SegmentMatcher::new("*.TXT", false).unwrap();
        assert!(matcher.is_match("hello.txt"));
    }

    #[test]
    fn test_unterminated_set_is_invalid() {
        let err = SegmentMatcher::new("[abc", true).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_has_wildcard() {
        assert!(has_wildcard("*.txt"));
        assert!(has_wildcard("a?"));
        assert!(has_wildcard("[ab]"));
        assert!(!has_wildcard("plain.txt"));
    }
}
