//! Wire types for the Pokedex collection REST API.
//!
//! Every response is wrapped in an [`ApiResponse`] envelope. Entity lists
//! (`types`, `abilities`) arrive either as JSON arrays or as a single
//! comma-joined string depending on the backend path that produced them;
//! [`StringList`] absorbs both shapes so nothing past this crate has to.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Standard `{status, data, message?}` envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Ordered list of names that tolerates the comma-joined legacy encoding.
///
/// Always serializes as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Split a comma-joined string, trimming entries and dropping empty ones.
    ///
    /// Must stay in step with `pokedex::domain::lists::split_list`.
    pub fn from_joined(joined: &str) -> Self {
        Self(
            joined
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl From<Vec<String>> for StringList {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl Serialize for StringList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStringList {
    Sequence(Vec<String>),
    Joined(String),
}

impl<'de> Deserialize<'de> for StringList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawStringList>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawStringList::Sequence(entries)) => Self(
                entries
                    .into_iter()
                    .map(|entry| entry.trim().to_string())
                    .collect(),
            ),
            Some(RawStringList::Joined(joined)) => Self::from_joined(&joined),
            None => Self::default(),
        })
    }
}

/// A Pokémon record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub types: StringList,
    #[serde(default)]
    pub abilities: StringList,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poke_api_id: Option<i64>,
}

/// Body of `POST /api/pokemon`.
///
/// The lookup form carries only the name and asks the backend to fill in
/// the remaining fields from an external source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PokemonCreateRequest {
    Full(PokemonFullCreateRequest),
    Lookup(PokemonLookupRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonLookupRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonFullCreateRequest {
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub height: f64,
    pub weight: f64,
    pub image_url: String,
}

/// Body of `PUT /api/pokemon/{id}`; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
