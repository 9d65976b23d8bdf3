//! Conversions between wire records and domain entities.

use pokedex_api_types::{
    PokemonCreateRequest, PokemonFullCreateRequest, PokemonLookupRequest, PokemonRecord,
    PokemonUpdateRequest,
};

use crate::domain::entities::{CreatePokemon, Pokemon, PokemonPatch};

impl From<PokemonRecord> for Pokemon {
    fn from(record: PokemonRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            types: record.types.into_inner(),
            abilities: record.abilities.into_inner(),
            height: record.height,
            weight: record.weight,
            image_url: record.image_url,
            poke_api_id: record.poke_api_id,
        }
    }
}

impl From<&CreatePokemon> for PokemonCreateRequest {
    fn from(payload: &CreatePokemon) -> Self {
        match payload {
            CreatePokemon::Lookup { name } => {
                PokemonCreateRequest::Lookup(PokemonLookupRequest { name: name.clone() })
            }
            CreatePokemon::Full(record) => {
                PokemonCreateRequest::Full(PokemonFullCreateRequest {
                    name: record.name.clone(),
                    types: record.types.clone(),
                    abilities: record.abilities.clone(),
                    height: record.height,
                    weight: record.weight,
                    image_url: record.image_url.clone(),
                })
            }
        }
    }
}

impl From<&PokemonPatch> for PokemonUpdateRequest {
    fn from(patch: &PokemonPatch) -> Self {
        Self {
            name: patch.name.clone(),
            types: patch.types.clone(),
            abilities: patch.abilities.clone(),
            height: patch.height,
            weight: patch.weight,
            image_url: patch.image_url.clone(),
        }
    }
}
