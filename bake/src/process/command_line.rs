//! Splitting a rendered command line into argv.

/// Split `command_line` on unquoted whitespace.
///
/// Follows the Windows argv rules. Double quotes group text and are removed.
/// A run of `2n` backslashes before a quote yields `n` backslashes and the
/// quote toggles grouping; `2n + 1` backslashes yield `n` backslashes and a
/// literal quote. Backslashes not followed by a quote are kept as is. `""`
/// yields an empty argument.
///
/// # Examples
///
/// ```
/// use bake::process::split_command_line;
///
/// assert_eq!(
///     split_command_line(r#"build --out "my dir" --msg "say \"hi\"""#),
///     ["build", "--out", "my dir", "--msg", "say \"hi\""]
/// );
/// assert_eq!(split_command_line(r"C:\tools\x.exe a"), [r"C:\tools\x.exe", "a"]);
/// assert_eq!(split_command_line(r#""C:\out\\" next"#), [r"C:\out\", "next"]);
/// ```
#[must_use]
pub fn split_command_line(command_line: &str) -> Vec<String> {
    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = command_line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let mut backslashes = 1;
                while chars.peek() == Some(&'\\') {
                    chars.next();
                    backslashes += 1;
                }
                in_token = true;
                if chars.peek() == Some(&'"') {
                    current.extend(std::iter::repeat('\\').take(backslashes / 2));
                    if backslashes % 2 == 1 {
                        chars.next();
                        current.push('"');
                    }
                } else {
                    current.extend(std::iter::repeat('\\').take(backslashes));
                }
            }
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    arguments.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        arguments.push(current);
    }
    arguments
}
