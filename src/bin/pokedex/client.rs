#![deny(clippy::all, clippy::pedantic)]

use std::sync::Arc;

use pokedex::application::gateway::GatewayError;
use pokedex::application::store::CollectionStore;
use pokedex::config::{LoadError, Settings};
use pokedex::domain::entities::PokemonId;
use pokedex::infra::error::InfraError;
use pokedex::infra::http::HttpPokemonGateway;
use pokedex::presentation::dialogs::SubmitError;
use pokedex::presentation::views::TemplateRenderError;
use thiserror::Error;
use tracing::debug;

use crate::console::ConsoleNotifier;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Render(#[from] TemplateRenderError),
    #[error("{0}")]
    Load(String),
    #[error("pokemon {0} not found")]
    NotFound(PokemonId),
    #[error("failed to render output: {0}")]
    Output(String),
}

pub struct Ctx {
    pub store: CollectionStore,
}

impl Ctx {
    pub fn new(settings: &Settings) -> Result<Self, CliError> {
        let gateway = HttpPokemonGateway::new(settings.api.base_url.clone())?;
        debug!(base = %gateway.base_url(), "using collection backend");
        let store = CollectionStore::new(Arc::new(gateway), Arc::new(ConsoleNotifier));
        Ok(Self { store })
    }
}
