//! Process arguments with safe and unsafe renderings.

use std::fmt;

/// What a secret renders as in logs.
pub const REDACTED: &str = "[REDACTED]";

/// One command-line argument.
///
/// Every argument has two renderings: [`render`](Self::render) is the exact
/// text handed to the operating system, and
/// [`render_safe`](Self::render_safe) is what may be logged. They differ
/// only for arguments containing a [`Secret`](Self::Secret).
///
/// # Examples
///
/// ```
/// use bake::process::ProcessArgument;
///
/// let token = ProcessArgument::named("--token", "=", ProcessArgument::secret_text("s3cr3t"));
/// assert_eq!(token.render(), "--token=s3cr3t");
/// assert_eq!(token.render_safe(), "--token=[REDACTED]");
///
/// let path = ProcessArgument::quoted_text("My Documents");
/// assert_eq!(path.render(), "\"My Documents\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessArgument {
    /// Plain text, rendered as is.
    Text(String),
    /// An argument wrapped in double quotes.
    Quoted(Box<ProcessArgument>),
    /// A switch: `name`, `separator`, then `value`.
    Named {
        /// The switch, such as `--output`.
        name: String,
        /// Text between the switch and its value, such as `=` or a space.
        separator: String,
        /// The switch value.
        value: Box<ProcessArgument>,
    },
    /// An argument whose value must not be logged.
    Secret(Box<ProcessArgument>),
}

impl ProcessArgument {
    /// A plain text argument.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Quote an argument.
    #[must_use]
    pub fn quoted(argument: ProcessArgument) -> Self {
        Self::Quoted(Box::new(argument))
    }

    /// A quoted text argument.
    pub fn quoted_text(value: impl Into<String>) -> Self {
        Self::quoted(Self::text(value))
    }

    /// A switch with a value.
    pub fn named(name: impl Into<String>, separator: impl Into<String>, value: ProcessArgument) -> Self {
        Self::Named {
            name: name.into(),
            separator: separator.into(),
            value: Box::new(value),
        }
    }

    /// Mark an argument as secret.
    #[must_use]
    pub fn secret(argument: ProcessArgument) -> Self {
        Self::Secret(Box::new(argument))
    }

    /// A secret text argument.
    pub fn secret_text(value: impl Into<String>) -> Self {
        Self::secret(Self::text(value))
    }

    /// The text passed to the operating system.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Quoted(inner) => quote(&inner.render()),
            Self::Named {
                name,
                separator,
                value,
            } => format!("{name}{separator}{}", value.render()),
            Self::Secret(inner) => inner.render(),
        }
    }

    /// The text that may be logged.
    #[must_use]
    pub fn render_safe(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Quoted(inner) => quote(&inner.render_safe()),
            Self::Named {
                name,
                separator,
                value,
            } => format!("{name}{separator}{}", value.render_safe()),
            Self::Secret(_) => REDACTED.to_string(),
        }
    }

    /// Whether the argument contains a secret.
    #[must_use]
    pub fn is_secret(&self) -> bool {
        match self {
            Self::Text(_) => false,
            Self::Quoted(inner) => inner.is_secret(),
            Self::Named { value, .. } => value.is_secret(),
            Self::Secret(_) => true,
        }
    }
}

/// Wrap in double quotes using the Windows argv rules.
///
/// A run of backslashes is doubled when it precedes an embedded quote or the
/// closing quote, and every embedded quote is escaped.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    let mut backslashes = 0;
    for c in text.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                quoted.extend(std::iter::repeat('\\').take(backslashes * 2 + 1));
                quoted.push('"');
                backslashes = 0;
            }
            c => {
                quoted.extend(std::iter::repeat('\\').take(backslashes));
                quoted.push(c);
                backslashes = 0;
            }
        }
    }
    quoted.extend(std::iter::repeat('\\').take(backslashes * 2));
    quoted.push('"');
    quoted
}

impl fmt::Display for ProcessArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_safe())
    }
}

impl From<&str> for ProcessArgument {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for ProcessArgument {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
