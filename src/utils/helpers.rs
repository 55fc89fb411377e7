//! General utility helper functions
//!
//! This module contains small string helpers shared by the item parser
//! and the subprocess layer.

/// Return at most the first `max_chars` characters of `s`.
///
/// Cuts on a character boundary, so multi-byte text is never split.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Format a command line for log output
pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
