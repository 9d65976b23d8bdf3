//! Collection entities and mutation payloads.

use serde::Serialize;

use crate::domain::error::DomainError;

/// Backend-assigned identity.
pub type PokemonId = i64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    /// Decimetres.
    pub height: f64,
    /// Hectograms.
    pub weight: f64,
    pub image_url: Option<String>,
    pub poke_api_id: Option<i64>,
}

impl Pokemon {
    pub fn height_metres(&self) -> f64 {
        self.height / 10.0
    }

    pub fn weight_kilograms(&self) -> f64 {
        self.weight / 10.0
    }

    /// Image URL, treating an empty string as absent.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Full record for manual creation; `id` is assigned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPokemon {
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub height: f64,
    pub weight: f64,
    pub image_url: String,
}

/// Creation payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CreatePokemon {
    /// Only the name is sent; the backend derives the rest externally.
    Lookup { name: String },
    Full(NewPokemon),
}

impl CreatePokemon {
    pub fn name(&self) -> &str {
        match self {
            Self::Lookup { name } => name,
            Self::Full(record) => &record.name,
        }
    }
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PokemonPatch {
    pub name: Option<String>,
    pub types: Option<Vec<String>>,
    pub abilities: Option<Vec<String>>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub image_url: Option<String>,
}

/// Replace the entry with the same id in place.
pub fn replace_by_id(collection: &mut [Pokemon], updated: Pokemon) -> Result<(), DomainError> {
    let slot = collection
        .iter_mut()
        .find(|entry| entry.id == updated.id)
        .ok_or_else(|| DomainError::not_found("pokemon"))?;
    *slot = updated;
    Ok(())
}

/// Reject snapshots that repeat an id.
pub fn ensure_unique_ids(collection: &[Pokemon]) -> Result<(), DomainError> {
    let mut seen = std::collections::HashSet::with_capacity(collection.len());
    for entry in collection {
        if !seen.insert(entry.id) {
            return Err(DomainError::invariant(format!(
                "duplicate pokemon id {} in collection snapshot",
                entry.id
            )));
        }
    }
    Ok(())
}
