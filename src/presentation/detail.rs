//! Single-entity detail view.

use askama::Template;
use serde::Serialize;

use crate::application::store::CollectionStore;
use crate::domain::entities::{Pokemon, PokemonId};
use crate::domain::lists::display_list;
use crate::presentation::views::{TemplateRenderError, format_measure, render_template};

pub const NOT_FOUND_TEXT: &str = "Pokemon not found";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonDetail {
    pub id: PokemonId,
    pub name: String,
    /// `#<external id>`, empty when the record has none.
    pub badge: String,
    pub types: String,
    pub abilities: String,
    pub height: String,
    pub weight: String,
    pub image: String,
}

impl From<&Pokemon> for PokemonDetail {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            badge: pokemon
                .poke_api_id
                .map(|external| format!("#{external}"))
                .unwrap_or_default(),
            types: display_list(&pokemon.types),
            abilities: display_list(&pokemon.abilities),
            height: format_measure(pokemon.height_metres(), "m"),
            weight: format_measure(pokemon.weight_kilograms(), "kg"),
            image: pokemon.image().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "detail.txt")]
struct DetailTemplate<'a> {
    name: &'a str,
    badge: &'a str,
    types: &'a str,
    abilities: &'a str,
    height: &'a str,
    weight: &'a str,
    image: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DetailView {
    Found(PokemonDetail),
    NotFound,
}

impl DetailView {
    /// Any fetch failure renders as not found; the store has already
    /// reported it.
    pub async fn load(store: &CollectionStore, id: PokemonId) -> Self {
        match store.get(id).await {
            Ok(pokemon) => Self::Found(PokemonDetail::from(&pokemon)),
            Err(_) => Self::NotFound,
        }
    }

    pub fn pokemon(&self) -> Option<&PokemonDetail> {
        match self {
            Self::Found(detail) => Some(detail),
            Self::NotFound => None,
        }
    }

    pub fn render(&self) -> Result<String, TemplateRenderError> {
        let Self::Found(detail) = self else {
            return Ok(format!("{NOT_FOUND_TEXT}\n"));
        };
        let template = DetailTemplate {
            name: &detail.name,
            badge: &detail.badge,
            types: &detail.types,
            abilities: &detail.abilities,
            height: &detail.height,
            weight: &detail.weight,
            image: &detail.image,
        };
        render_template(&template, "presentation::detail::render")
    }
}
