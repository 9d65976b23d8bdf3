//! Conversions between the canonical list form and comma-joined text.
//!
//! Forms and some backend responses carry `types`/`abilities` as a single
//! comma-separated string. Inside the crate they are always `Vec<String>`;
//! these helpers are used only where text crosses that boundary.

const SEPARATOR: char = ',';

/// Split comma-joined text into trimmed entries, dropping empty ones.
pub fn split_list(joined: &str) -> Vec<String> {
    joined
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join entries for editing in a single text field.
pub fn join_list(entries: &[String]) -> String {
    entries.join(",")
}

/// Join entries for display.
pub fn display_list(entries: &[String]) -> String {
    entries.join(", ")
}
