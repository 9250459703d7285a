//! File-safe titles.

#[cfg(test)]
#[path = "filename_test.rs"]
mod filename_test;

/// Titles are cut to this many characters before sanitizing.
pub const MAX_TITLE_CHARS: usize = 100;

/// Derive a file-name-safe stem from a user supplied title.
///
/// Keeps the first [`MAX_TITLE_CHARS`] characters, replaces every character
/// outside `[a-zA-Z0-9_-]` with `_`, and lowercases the result.
pub fn make_title_file_safe(title: &str) -> String {
    title
        .chars()
        .take(MAX_TITLE_CHARS)
        .map(|c| if is_file_safe(c) { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

fn is_file_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
