//! Ordered argument lists.

use std::fmt;

use crate::process::ProcessArgument;

/// Accumulates [`ProcessArgument`]s in order.
///
/// # Examples
///
/// ```
/// use bake::process::ProcessArgumentBuilder;
///
/// let mut arguments = ProcessArgumentBuilder::new();
/// arguments.append_text("--token").append_secret("s3cr3t");
///
/// assert_eq!(arguments.render(), "--token s3cr3t");
/// assert_eq!(arguments.render_safe(), "--token [REDACTED]");
/// assert_eq!(
///     arguments.filter_unsafe("log contains s3cr3t here"),
///     "log contains [REDACTED] here"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessArgumentBuilder {
    tokens: Vec<ProcessArgument>,
}

impl ProcessArgumentBuilder {
    /// An empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument.
    pub fn append(&mut self, argument: ProcessArgument) -> &mut Self {
        self.tokens.push(argument);
        self
    }

    /// Insert an argument before all others.
    pub fn prepend(&mut self, argument: ProcessArgument) -> &mut Self {
        self.tokens.insert(0, argument);
        self
    }

    /// Append plain text.
    pub fn append_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(ProcessArgument::text(text))
    }

    /// Append quoted text.
    pub fn append_quoted(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(ProcessArgument::quoted_text(text))
    }

    /// Append secret text.
    pub fn append_secret(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(ProcessArgument::secret_text(text))
    }

    /// Append quoted secret text.
    pub fn append_quoted_secret(&mut self, text: impl Into<String>) -> &mut Self {
        self.append(ProcessArgument::quoted(ProcessArgument::secret_text(text)))
    }

    /// Append a switch with a plain value.
    pub fn append_switch(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.append(ProcessArgument::named(switch, separator, ProcessArgument::text(text)))
    }

    /// Append a switch with a quoted value.
    pub fn append_switch_quoted(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.append(ProcessArgument::named(switch, separator, ProcessArgument::quoted_text(text)))
    }

    /// Append a switch with a secret value.
    pub fn append_switch_secret(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.append(ProcessArgument::named(switch, separator, ProcessArgument::secret_text(text)))
    }

    /// Append a switch with a quoted secret value.
    pub fn append_switch_quoted_secret(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.append(ProcessArgument::named(
            switch,
            separator,
            ProcessArgument::quoted(ProcessArgument::secret_text(text)),
        ))
    }

    /// Remove all arguments.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProcessArgument> {
        self.tokens.iter()
    }

    /// The command line passed to the operating system.
    #[must_use]
    pub fn render(&self) -> String {
        self.tokens
            .iter()
            .map(ProcessArgument::render)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The command line with secrets redacted.
    #[must_use]
    pub fn render_safe(&self) -> String {
        self.tokens
            .iter()
            .map(ProcessArgument::render_safe)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Replace every secret value occurring in `source` with its redacted
    /// rendering.
    ///
    /// Only arguments whose two renderings differ take part. Surrounding
    /// quotes and whitespace are ignored when searching.
    #[must_use]
    pub fn filter_unsafe(&self, source: &str) -> String {
        let mut filtered = source.to_string();
        for token in &self.tokens {
            let unsafe_text = token.render();
            let safe_text = token.render_safe();
            if unsafe_text == safe_text {
                continue;
            }
            let needle = trim_quotes(&unsafe_text);
            if needle.is_empty() {
                continue;
            }
            filtered = filtered.replace(needle, trim_quotes(&safe_text));
        }
        filtered
    }
}

fn trim_quotes(text: &str) -> &str {
    text.trim().trim_matches('"').trim()
}

impl fmt::Display for ProcessArgumentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_safe())
    }
}

impl From<&str> for ProcessArgumentBuilder {
    fn from(value: &str) -> Self {
        Self {
            tokens: vec![ProcessArgument::text(value)],
        }
    }
}

impl From<String> for ProcessArgumentBuilder {
    fn from(value: String) -> Self {
        Self {
            tokens: vec![ProcessArgument::Text(value)],
        }
    }
}

impl From<Option<&str>> for ProcessArgumentBuilder {
    fn from(value: Option<&str>) -> Self {
        value.map_or_else(Self::new, Self::from)
    }
}

impl FromIterator<ProcessArgument> for ProcessArgumentBuilder {
    fn from_iter<I: IntoIterator<Item = ProcessArgument>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ProcessArgumentBuilder {
    type Item = &'a ProcessArgument;
    type IntoIter = std::slice::Iter<'a, ProcessArgument>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
