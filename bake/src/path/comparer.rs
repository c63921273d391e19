//! Platform-aware path equality.

use std::borrow::Cow;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::environment::PlatformFamily;
use crate::error::{Error, Result};
use crate::path::NormalizedPath;

/// Compares paths by their full path, optionally ignoring case.
///
/// The default comparer is case-sensitive on Unix hosts and
/// case-insensitive everywhere else.
///
/// # Examples
///
/// ```
/// use bake::path::{FilePath, PathComparer};
///
/// let comparer = PathComparer::new(false);
/// let a = FilePath::new("/Temp/A.txt").unwrap();
/// let b = FilePath::new("/temp/a.TXT").unwrap();
/// assert!(comparer.equals(Some(&a), Some(&b)));
/// assert!(!PathComparer::new(true).equals(Some(&a), Some(&b)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathComparer {
    case_sensitive: bool,
}

impl PathComparer {
    /// Create a comparer with explicit case sensitivity.
    #[must_use]
    pub const fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    /// The comparer matching a platform family's filesystem conventions.
    #[must_use]
    pub const fn for_platform(platform: PlatformFamily) -> Self {
        Self::new(platform.is_case_sensitive())
    }

    /// Whether comparisons are case-sensitive.
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// The comparison key for a path.
    ///
    /// Two paths are equal under this comparer exactly when their keys are.
    #[must_use]
    pub fn key<'a, P: AsRef<NormalizedPath> + ?Sized>(&self, path: &'a P) -> Cow<'a, str> {
        self.key_str(path.as_ref().full_path())
    }

    /// The comparison key for a raw string.
    #[must_use]
    pub fn key_str<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(value)
        } else {
            Cow::Owned(value.to_lowercase())
        }
    }

    /// Whether two optional paths are equal.
    ///
    /// Two `None` values are equal; `None` never equals a path.
    #[must_use]
    pub fn equals<P: AsRef<NormalizedPath> + ?Sized>(&self, x: Option<&P>, y: Option<&P>) -> bool {
        match (x, y) {
            (None, None) => true,
            (Some(x), Some(y)) => self.key(x) == self.key(y),
            _ => false,
        }
    }

    /// Whether two raw strings are equal under this comparer.
    #[must_use]
    pub fn equals_str(&self, x: &str, y: &str) -> bool {
        if self.case_sensitive {
            x == y
        } else {
            x.to_lowercase() == y.to_lowercase()
        }
    }

    /// A hash consistent with [`equals`](Self::equals).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for `None`.
    pub fn hash<P: AsRef<NormalizedPath> + ?Sized>(&self, path: Option<&P>) -> Result<u64> {
        let path = path.ok_or_else(|| Error::invalid_argument("path", "path cannot be null"))?;
        let mut hasher = DefaultHasher::new();
        self.key(path).hash(&mut hasher);
        Ok(hasher.finish())
    }
}

impl Default for PathComparer {
    fn default() -> Self {
        Self::for_platform(PlatformFamily::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{DirectoryPath, FilePath};

    fn file(raw: &str) -> FilePath {
        FilePath::new(raw).unwrap()
    }

    #[test]
    fn test_both_none_are_equal() {
        let comparer = PathComparer::new(true);
        assert!(comparer.equals::<FilePath>(None, None));
    }

    #[test]
    fn test_none_and_some_are_not_equal() {
        let comparer = PathComparer::new(true);
        let path = file("/a");
        assert!(!comparer.equals(Some(&path), None));
        assert!(!comparer.equals(None, Some(&path)));
    }

    #[test]
    fn test_case_sensitive_comparison() {
        let comparer = PathComparer::new(true);
        assert!(!comparer.equals(Some(&file("/A")), Some(&file("/a"))));
        assert!(comparer.equals(Some(&file("/a")), Some(&file("\\a"))));
    }

    #[test]
    fn test_case_insensitive_comparison() {
        let comparer = PathComparer::new(false);
        assert!(comparer.equals(Some(&file("/A")), Some(&file("/a"))));
    }

    #[test]
    fn test_hash_of_none_fails() {
        let comparer = PathComparer::default();
        let err = comparer.hash::<DirectoryPath>(None).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_hash_ignores_case_when_insensitive() {
        let comparer = PathComparer::new(false);
        assert_eq!(
            comparer.hash(Some(&file("/TEMP/A.TXT"))).unwrap(),
            comparer.hash(Some(&file("/temp/a.txt"))).unwrap()
        );
    }

    #[test]
    fn test_default_follows_platform() {
        assert_eq!(
            PathComparer::default().is_case_sensitive(),
            PlatformFamily::current().is_unix()
        );
    }

    #[test]
    fn test_for_platform() {
        assert!(PathComparer::for_platform(PlatformFamily::Unix).is_case_sensitive());
        assert!(!PathComparer::for_platform(PlatformFamily::Windows).is_case_sensitive());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Equal paths always hash equally.
            #[test]
            fn equal_implies_same_hash(
                raw in "/[a-zA-Z]{1,6}(/[a-zA-Z]{1,6}){0,3}",
                case_sensitive in any::<bool>(),
            ) {
                let comparer = PathComparer::new(case_sensitive);
                let x = file(&raw);
                let y = file(&raw.to_uppercase());
                if comparer.equals(Some(&x), Some(&y)) {
                    prop_assert_eq!(
                        comparer.hash(Some(&x)).unwrap(),
                        comparer.hash(Some(&y)).unwrap()
                    );
                }
            }

            /// Equality is symmetric.
            #[test]
            fn equality_is_symmetric(
                a in "/[a-zA-Z]{1,6}",
                b in "/[a-zA-Z]{1,6}",
                case_sensitive in any::<bool>(),
            ) {
                let comparer = PathComparer::new(case_sensitive);
                let (x, y) = (file(&a), file(&b));
                prop_assert_eq!(
                    comparer.equals(Some(&x), Some(&y)),
                    comparer.equals(Some(&y), Some(&x))
                );
            }
        }
    }
}
