/// Wrap `text` in single quotes for a POSIX shell.
///
/// Each `'` closes the quoted string, emits an escaped quote and reopens it
/// (`'\''`). Nothing else needs escaping inside single quotes.
#[must_use]
pub fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}
