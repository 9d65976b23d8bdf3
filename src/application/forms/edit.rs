//! Rules for the edit form.

use crate::application::forms::{ErrorCollector, FieldValue, ValidationErrors, is_valid_url};
use crate::domain::entities::{Pokemon, PokemonPatch};
use crate::domain::lists::{join_list, split_list};

const INVALID_URL: &str = "Must be a valid URL";

/// Raw edit-form values, pre-populated from the entity being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditFormInput {
    pub name: String,
    pub types: String,
    pub abilities: String,
    pub height: FieldValue,
    pub weight: FieldValue,
    pub image_url: String,
}

impl EditFormInput {
    pub fn from_pokemon(pokemon: &Pokemon) -> Self {
        Self {
            name: pokemon.name.clone(),
            types: join_list(&pokemon.types),
            abilities: join_list(&pokemon.abilities),
            height: FieldValue::Number(pokemon.height),
            weight: FieldValue::Number(pokemon.weight),
            image_url: pokemon.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<PokemonPatch, ValidationErrors> {
        let mut errors = ErrorCollector::default();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.add("name", "Name is required");
        }
        let types = split_list(&self.types);
        if types.is_empty() {
            errors.add("types", "Types are required");
        }
        let abilities = split_list(&self.abilities);
        if abilities.is_empty() {
            errors.add("abilities", "Abilities are required");
        }
        let height = at_least_one(&mut errors, &self.height, "height", "Height is required");
        let weight = at_least_one(&mut errors, &self.weight, "weight", "Weight is required");

        let image_url = self.image_url.trim().to_string();
        if !image_url.is_empty() && !is_valid_url(&image_url) {
            errors.add("imageUrl", INVALID_URL);
        }

        errors.finish(|| PokemonPatch {
            name: Some(name),
            types: Some(types),
            abilities: Some(abilities),
            height,
            weight,
            image_url: Some(image_url),
        })
    }
}

fn at_least_one(
    errors: &mut ErrorCollector,
    value: &FieldValue,
    field: &'static str,
    required: &str,
) -> Option<f64> {
    match value.coerce(field) {
        Ok(Some(number)) if number >= 1.0 => Some(number),
        Ok(_) => {
            errors.add(field, required);
            None
        }
        Err(error) => {
            errors.push(error);
            None
        }
    }
}
