//! Path normalization functions.
//!
//! Every path string goes through [`normalize`] before any other operation
//! sees it. Normalization:
//! - rejects empty input and characters that are illegal in paths (including
//!   the glob metacharacters `*` and `?`),
//! - rewrites separators (`\` to `/`, or `/` to `\` for UNC paths),
//! - trims whitespace, strips a leading `./` and trailing separators.
//!
//! The remaining helpers derive rootedness and segments from a normalized
//! string.

use crate::environment::PlatformFamily;
use crate::error::{Error, Result};

/// Prefix that marks a UNC path after normalization.
pub const UNC_PREFIX: &str = "\\\\";

/// Whether `character` may never appear in a concrete path.
///
/// `*` and `?` are reserved for glob patterns; NUL and the ASCII control
/// characters are invalid on every supported platform.
///
/// # Examples
///
/// ```
/// use bake::path::normalize::is_illegal_character;
///
/// assert!(is_illegal_character('*'));
/// assert!(is_illegal_character('?'));
/// assert!(is_illegal_character('\0'));
/// assert!(!is_illegal_character('a'));
/// assert!(!is_illegal_character('/'));
/// ```
#[must_use]
pub fn is_illegal_character(character: char) -> bool {
    matches!(character, '*' | '?') || character.is_ascii_control()
}

/// Whether a raw (untrimmed, unnormalized) string denotes a UNC path.
///
/// Either separator counts, so `/\\server` is UNC just like `//server`.
#[must_use]
pub fn is_unc(raw: &str) -> bool {
    let mut leading = raw.trim_start().chars();
    matches!(
        (leading.next(), leading.next()),
        (Some('/' | '\\'), Some('/' | '\\'))
    )
}

/// Normalize a raw path string.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the input is empty, whitespace, or
/// contains an illegal character.
///
/// # Examples
///
/// ```
/// use bake::path::normalize::normalize;
///
/// assert_eq!(normalize("  c:\\temp\\  ").unwrap(), "c:/temp");
/// assert_eq!(normalize("./src/lib.rs").unwrap(), "src/lib.rs");
/// assert_eq!(normalize("./").unwrap(), "");
/// assert_eq!(normalize("/").unwrap(), "/");
/// assert_eq!(normalize("c:").unwrap(), "c:/");
/// assert_eq!(normalize("//server/share/").unwrap(), "\\\\server\\share");
/// assert!(normalize("   ").is_err());
/// assert!(normalize("/a/*.txt").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(Error::invalid_argument("path", "Path cannot be empty."));
    }

    if let Some(character) = raw.chars().find(|c| is_illegal_character(*c)) {
        return Err(Error::invalid_argument(
            "path",
            format!("Illegal characters in path ({character:?})."),
        ));
    }

    let trimmed = raw.trim();

    if is_unc(trimmed) {
        return Ok(normalize_unc(trimmed));
    }

    let mut path = trimmed.replace('\\', "/");

    if path == "./" {
        return Ok(String::new());
    }

    while let Some(rest) = path.strip_prefix("./") {
        path = rest.trim_start_matches('/').to_string();
    }

    while path.len() > 1 && path.ends_with('/') {
        path.pop();
    }

    if is_bare_drive(&path) {
        path.push('/');
    }

    Ok(path)
}

fn normalize_unc(trimmed: &str) -> String {
    let body = trimmed.replace('/', "\\");
    let rest = body.trim_start_matches('\\').trim_end_matches('\\');
    format!("{UNC_PREFIX}{rest}")
}

/// `c:` with nothing after it.
fn is_bare_drive(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Whether a normalized path starts with a drive designator such as `c:`.
#[must_use]
pub fn has_drive_letter(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes.len() == 2 || bytes[2] == b'/')
}

/// Whether a normalized path is rooted on the given platform.
///
/// Drive letters only count as roots when `platform` is Windows-family; a
/// path such as `c:/temp` is relative on a Unix host.
///
/// # Examples
///
/// ```
/// use bake::path::normalize::is_rooted;
/// use bake::PlatformFamily;
///
/// assert!(is_rooted("/temp", PlatformFamily::Unix));
/// assert!(is_rooted("c:/temp", PlatformFamily::Windows));
/// assert!(!is_rooted("c:/temp", PlatformFamily::Unix));
/// assert!(!is_rooted("temp", PlatformFamily::Windows));
/// ```
#[must_use]
pub fn is_rooted(path: &str, platform: PlatformFamily) -> bool {
    path.starts_with('/')
        || path.starts_with(UNC_PREFIX)
        || (platform.is_windows() && has_drive_letter(path))
}

/// Split a normalized path into its non-empty segments.
///
/// # Examples
///
/// ```
/// use bake::path::normalize::segments;
///
/// assert_eq!(segments("/a//b/", '/'), vec!["a", "b"]);
/// assert!(segments("/", '/').is_empty());
/// ```
#[must_use]
pub fn segments(path: &str, separator: char) -> Vec<String> {
    path.split(separator)
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .collect()
}
