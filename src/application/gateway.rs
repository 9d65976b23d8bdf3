//! Port describing the remote collection backend.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{CreatePokemon, Pokemon, PokemonId, PokemonPatch};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("remote returned status {status}: {body}")]
    Remote { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    NotFound,
    /// 409 and 500 are reported the same way.
    Conflict,
    Other,
}

impl GatewayError {
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            body: body.into(),
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// HTTP status when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> RemoteErrorKind {
        match self.status() {
            Some(404) => RemoteErrorKind::NotFound,
            Some(409 | 500) => RemoteErrorKind::Conflict,
            _ => RemoteErrorKind::Other,
        }
    }
}

#[async_trait]
pub trait PokemonGateway: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Pokemon>, GatewayError>;

    async fn get_by_id(&self, id: PokemonId) -> Result<Pokemon, GatewayError>;

    async fn create(&self, payload: &CreatePokemon) -> Result<Pokemon, GatewayError>;

    async fn update(&self, id: PokemonId, patch: &PokemonPatch) -> Result<Pokemon, GatewayError>;

    async fn delete_by_id(&self, id: PokemonId) -> Result<(), GatewayError>;
}
