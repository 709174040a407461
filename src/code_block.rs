//! Fenced code block construction for the generated document.

/// Language tag used when the caller does not specify one.
pub const DEFAULT_LANGUAGE: &str = "sh";

/// Wrap a snippet in a fenced code block tagged with `language`.
///
/// The snippet is inserted verbatim, with no escaping. A snippet that itself
/// contains a triple-backtick sequence produces malformed Markdown; that is
/// an accepted limitation of the output format, not an error.
pub fn format_code_block(code: &str, language: &str) -> String {
    format!("```{language}\n{code}\n```")
}

/// Wrap a snippet in a fenced code block with the default `sh` tag.
pub fn format_shell_block(code: &str) -> String {
    format_code_block(code, DEFAULT_LANGUAGE)
}
