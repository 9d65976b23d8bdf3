//! Terminal-facing view models for the collection.

pub mod detail;
pub mod dialogs;
pub mod list;
pub mod views;

/// Shown by hosts while the store reports `is_loading`.
pub const LOADING_TEXT: &str = "Loading Pokémons...";

#[cfg(test)]
pub(crate) mod testing;
