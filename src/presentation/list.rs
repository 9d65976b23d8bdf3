//! Filterable collection listing.

use askama::Template;
use serde::Serialize;

use crate::domain::entities::{Pokemon, PokemonId};
use crate::domain::lists::display_list;
use crate::presentation::views::{TemplateRenderError, render_template};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmptyState {
    /// The collection itself is empty and no search is active.
    NoData,
    /// A search is active and nothing matches it.
    NoMatches,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoData => "No Pokémons found.",
            Self::NoMatches => "No Pokémons match your search.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListEntry {
    pub id: PokemonId,
    pub name: String,
    pub types: String,
    pub image: String,
}

impl From<&Pokemon> for ListEntry {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            types: display_list(&pokemon.types),
            image: pokemon.image().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "list.txt")]
struct ListTemplate<'a> {
    query: &'a str,
    entries: &'a [ListEntry],
    empty_message: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    query: String,
    entries: Vec<ListEntry>,
    empty_state: Option<EmptyState>,
}

impl ListView {
    /// Entries whose name or any type contains `query`, case-insensitively.
    /// The query is used as typed; surrounding whitespace is significant.
    pub fn new(collection: &[Pokemon], query: &str) -> Self {
        let needle = query.to_lowercase();
        let entries: Vec<ListEntry> = collection
            .iter()
            .filter(|pokemon| matches_query(pokemon, &needle))
            .map(ListEntry::from)
            .collect();

        let empty_state = match (entries.is_empty(), query.is_empty()) {
            (false, _) => None,
            (true, true) => Some(EmptyState::NoData),
            (true, false) => Some(EmptyState::NoMatches),
        };

        Self {
            query: query.to_string(),
            entries,
            empty_state,
        }
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.empty_state
    }

    pub fn render(&self) -> Result<String, TemplateRenderError> {
        let template = ListTemplate {
            query: &self.query,
            entries: &self.entries,
            empty_message: self.empty_state.map(EmptyState::message).unwrap_or(""),
        };
        render_template(&template, "presentation::list::render")
    }
}

fn matches_query(pokemon: &Pokemon, needle: &str) -> bool {
    needle.is_empty()
        || pokemon.name.to_lowercase().contains(needle)
        || pokemon
            .types
            .iter()
            .any(|kind| kind.to_lowercase().contains(needle))
}
