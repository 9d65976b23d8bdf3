//! Rules for the "add new Pokémon" form.

use crate::application::forms::{ErrorCollector, FieldValue, ValidationErrors, is_valid_url};
use crate::domain::entities::{CreatePokemon, NewPokemon};
use crate::domain::lists::split_list;

const NAME_REQUIRED: &str = "Name is required";
const ALL_FIELDS_REQUIRED: &str = "All fields are required unless using PokeAPI";
const INVALID_URL: &str = "Must be a valid URL";

/// Raw create-form values. Lists are comma-separated text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateFormInput {
    pub name: String,
    pub types: String,
    pub abilities: String,
    pub height: FieldValue,
    pub weight: FieldValue,
    pub image_url: String,
    /// Submit only the name and let the backend look the rest up.
    pub use_poke_api: bool,
}

impl CreateFormInput {
    pub fn validate(&self) -> Result<CreatePokemon, ValidationErrors> {
        let mut errors = ErrorCollector::default();
        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.add("name", NAME_REQUIRED);
        }

        if self.use_poke_api {
            return errors.finish(|| CreatePokemon::Lookup { name });
        }

        let types = split_list(&self.types);
        if types.is_empty() {
            errors.add("types", ALL_FIELDS_REQUIRED);
        }
        let abilities = split_list(&self.abilities);
        if abilities.is_empty() {
            errors.add("abilities", ALL_FIELDS_REQUIRED);
        }
        let height = required_number(&mut errors, &self.height, "height");
        let weight = required_number(&mut errors, &self.weight, "weight");

        let image_url = self.image_url.trim().to_string();
        if !image_url.is_empty() && !is_valid_url(&image_url) {
            errors.add("imageUrl", INVALID_URL);
        }

        errors.finish(|| {
            CreatePokemon::Full(NewPokemon {
                name,
                types,
                abilities,
                height: height.unwrap_or_default(),
                weight: weight.unwrap_or_default(),
                image_url,
            })
        })
    }
}

// Zero counts as missing.
fn required_number(
    errors: &mut ErrorCollector,
    value: &FieldValue,
    field: &'static str,
) -> Option<f64> {
    match value.coerce(field) {
        Ok(Some(number)) if number != 0.0 => Some(number),
        Ok(_) => {
            errors.add(field, ALL_FIELDS_REQUIRED);
            None
        }
        Err(error) => {
            errors.push(error);
            None
        }
    }
}
