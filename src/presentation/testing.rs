//! In-memory backend shared by the view and dialog tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::gateway::{GatewayError, PokemonGateway};
use crate::application::notify::RecordingNotifier;
use crate::application::store::CollectionStore;
use crate::domain::entities::{CreatePokemon, Pokemon, PokemonId, PokemonPatch};

pub(crate) fn pokemon(id: PokemonId, name: &str) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        types: vec!["electric".into()],
        abilities: vec!["static".into(), "lightning-rod".into()],
        height: 4.0,
        weight: 60.0,
        image_url: Some(format!("https://img.example/{id}.png")),
        poke_api_id: Some(id),
    }
}

#[derive(Default)]
pub(crate) struct InMemoryGateway {
    records: Mutex<Vec<Pokemon>>,
    next_failure: Mutex<Option<GatewayError>>,
    mutations: Mutex<usize>,
}

impl InMemoryGateway {
    pub(crate) fn seeded(records: Vec<Pokemon>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    /// The next mutation fails with `err`.
    pub(crate) fn fail_next(&self, err: GatewayError) {
        *self.next_failure.lock().unwrap() = Some(err);
    }

    pub(crate) fn mutations(&self) -> usize {
        *self.mutations.lock().unwrap()
    }

    fn begin_mutation(&self) -> Result<(), GatewayError> {
        *self.mutations.lock().unwrap() += 1;
        match self.next_failure.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PokemonGateway for InMemoryGateway {
    async fn list_all(&self) -> Result<Vec<Pokemon>, GatewayError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: PokemonId) -> Result<Pokemon, GatewayError> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or_else(|| GatewayError::remote(404, "Pokemon not found"))
    }

    async fn create(&self, payload: &CreatePokemon) -> Result<Pokemon, GatewayError> {
        self.begin_mutation()?;
        let mut records = self.records.lock().unwrap();
        let id = records.iter().map(|entry| entry.id).max().unwrap_or(0) + 1;
        let created = match payload {
            CreatePokemon::Lookup { name } => pokemon(id, name),
            CreatePokemon::Full(record) => Pokemon {
                id,
                name: record.name.clone(),
                types: record.types.clone(),
                abilities: record.abilities.clone(),
                height: record.height,
                weight: record.weight,
                image_url: Some(record.image_url.clone()),
                poke_api_id: None,
            },
        };
        records.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: PokemonId, patch: &PokemonPatch) -> Result<Pokemon, GatewayError> {
        self.begin_mutation()?;
        let mut records = self.records.lock().unwrap();
        let entry = records
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| GatewayError::remote(404, "Pokemon not found"))?;
        if let Some(name) = &patch.name {
            entry.name = name.clone();
        }
        if let Some(types) = &patch.types {
            entry.types = types.clone();
        }
        if let Some(abilities) = &patch.abilities {
            entry.abilities = abilities.clone();
        }
        if let Some(height) = patch.height {
            entry.height = height;
        }
        if let Some(weight) = patch.weight {
            entry.weight = weight;
        }
        if let Some(image_url) = &patch.image_url {
            entry.image_url = Some(image_url.clone());
        }
        Ok(entry.clone())
    }

    async fn delete_by_id(&self, id: PokemonId) -> Result<(), GatewayError> {
        self.begin_mutation()?;
        self.records.lock().unwrap().retain(|entry| entry.id != id);
        Ok(())
    }
}

pub(crate) fn store_over(
    gateway: Arc<InMemoryGateway>,
) -> (CollectionStore, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let store = CollectionStore::new(gateway, notifier.clone());
    (store, notifier)
}
