//! Session-scoped collection state.
//!
//! The store holds the last fetched snapshot of the whole collection and
//! proxies every mutation to the gateway. A successful mutation is applied
//! to the local snapshot right away and then superseded by a full refetch;
//! the refetched list always wins. A failed mutation leaves the snapshot as
//! it was and skips the refetch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use thiserror::Error;
use tracing::{debug, error, instrument, warn};

use crate::application::gateway::{GatewayError, PokemonGateway};
use crate::application::lock::{read_state, write_state};
use crate::application::notify::Notifier;
use crate::domain::entities::{
    CreatePokemon, Pokemon, PokemonId, PokemonPatch, ensure_unique_ids, replace_by_id,
};
use crate::domain::error::DomainError;

const INITIAL_FETCH_FAILED: &str = "Failed to fetch initial Pokemon data";
const INITIAL_FETCH_NOTICE: &str = "Failed to load Pokemon list";
const REFRESH_FAILED: &str = "Failed to fetch Pokemon data";
const REFRESH_NOTICE: &str = "Failed to refresh Pokemon list";
const DETAILS_NOTICE: &str = "Failed to fetch Pokemon details";
const ADD_SUCCEEDED: &str = "Pokemon added successfully!";
const ADD_FAILED: &str = "Failed to add Pokemon";
const UPDATE_SUCCEEDED: &str = "Pokemon updated successfully!";
const UPDATE_FAILED: &str = "Failed to update Pokemon";
const DELETE_SUCCEEDED: &str = "Pokemon deleted successfully!";
const DELETE_FAILED: &str = "Failed to delete Pokemon";

/// Point-in-time view of the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub collection: Vec<Pokemon>,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

#[derive(Debug, Error)]
enum FetchError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Snapshot(#[from] DomainError),
}

pub struct CollectionStore {
    gateway: Arc<dyn PokemonGateway>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<StoreState>,
    initialized: AtomicBool,
}

impl CollectionStore {
    pub fn new(gateway: Arc<dyn PokemonGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            state: RwLock::new(StoreState::default()),
            initialized: AtomicBool::new(false),
        }
    }

    pub fn snapshot(&self) -> StoreState {
        read_state(&self.state, "snapshot").clone()
    }

    pub fn collection(&self) -> Vec<Pokemon> {
        read_state(&self.state, "collection").collection.clone()
    }

    pub fn is_loading(&self) -> bool {
        read_state(&self.state, "is_loading").is_loading
    }

    pub fn last_error(&self) -> Option<String> {
        read_state(&self.state, "last_error").last_error.clone()
    }

    /// Initial load. Only the first call per store does any work.
    #[instrument(skip(self))]
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            debug!("collection store already initialized");
            return;
        }
        self.load(INITIAL_FETCH_FAILED, INITIAL_FETCH_NOTICE).await;
    }

    /// Replace the snapshot with the backend's current list.
    ///
    /// Failures are reported and swallowed; the previous snapshot stays.
    #[instrument(skip(self))]
    pub async fn refresh(&self) {
        self.load(REFRESH_FAILED, REFRESH_NOTICE).await;
    }

    /// Fetch a single entity without touching the snapshot.
    #[instrument(skip(self))]
    pub async fn get(&self, id: PokemonId) -> Result<Pokemon, GatewayError> {
        self.gateway.get_by_id(id).await.inspect_err(|err| {
            warn!(id, error = %err, "failed to fetch pokemon");
            self.notifier.error(DETAILS_NOTICE);
        })
    }

    #[instrument(skip(self, payload), fields(name = payload.name()))]
    pub async fn add(&self, payload: &CreatePokemon) -> Result<Pokemon, GatewayError> {
        self.set_loading(true, "add");
        let outcome = match self.gateway.create(payload).await {
            Ok(created) => {
                write_state(&self.state, "add")
                    .collection
                    .push(created.clone());
                self.notifier.success(ADD_SUCCEEDED);
                self.refresh().await;
                Ok(created)
            }
            Err(err) => {
                self.record_failure(ADD_FAILED, &err);
                Err(err)
            }
        };
        self.set_loading(false, "add");
        outcome
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: PokemonId,
        patch: &PokemonPatch,
    ) -> Result<Pokemon, GatewayError> {
        self.set_loading(true, "update");
        let outcome = match self.gateway.update(id, patch).await {
            Ok(updated) => {
                let replaced = replace_by_id(
                    &mut write_state(&self.state, "update").collection,
                    updated.clone(),
                );
                if let Err(err) = replaced {
                    warn!(id, error = %err, "updated pokemon missing from local snapshot");
                }
                self.notifier.success(UPDATE_SUCCEEDED);
                self.refresh().await;
                Ok(updated)
            }
            Err(err) => {
                self.record_failure(UPDATE_FAILED, &err);
                Err(err)
            }
        };
        self.set_loading(false, "update");
        outcome
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: PokemonId) -> Result<(), GatewayError> {
        self.set_loading(true, "remove");
        let outcome = match self.gateway.delete_by_id(id).await {
            Ok(()) => {
                write_state(&self.state, "remove")
                    .collection
                    .retain(|entry| entry.id != id);
                self.notifier.success(DELETE_SUCCEEDED);
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.record_failure(DELETE_FAILED, &err);
                Err(err)
            }
        };
        self.set_loading(false, "remove");
        outcome
    }

    async fn load(&self, failure: &'static str, notice: &'static str) {
        self.set_loading(true, "load");
        match self.fetch_authoritative().await {
            Ok(collection) => {
                debug!(count = collection.len(), "collection snapshot replaced");
                let mut state = write_state(&self.state, "load");
                state.collection = collection;
                state.last_error = None;
            }
            Err(err) => {
                error!(error = %err, "failed to fetch pokemon collection");
                write_state(&self.state, "load").last_error = Some(failure.to_string());
                self.notifier.error(notice);
            }
        }
        self.set_loading(false, "load");
    }

    async fn fetch_authoritative(&self) -> Result<Vec<Pokemon>, FetchError> {
        let collection = self.gateway.list_all().await?;
        ensure_unique_ids(&collection)?;
        Ok(collection)
    }

    fn record_failure(&self, notice: &'static str, err: &GatewayError) {
        warn!(status = err.status(), error = %err, "{notice}");
        write_state(&self.state, "record_failure").last_error = Some(notice.to_string());
        self.notifier.error(notice);
    }

    fn set_loading(&self, loading: bool, op: &'static str) {
        write_state(&self.state, op).is_loading = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::application::notify::{NotificationLevel, RecordingNotifier};

    fn pokemon(id: PokemonId, name: &str) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            types: vec!["normal".into()],
            abilities: vec!["run-away".into()],
            height: 3.0,
            weight: 35.0,
            image_url: None,
            poke_api_id: Some(id),
        }
    }

    /// Gateway fake whose list responses are queued per call.
    #[derive(Default)]
    struct ScriptedGateway {
        lists: Mutex<VecDeque<Result<Vec<Pokemon>, GatewayError>>>,
        mutation_error: Mutex<Option<GatewayError>>,
        list_calls: Mutex<usize>,
        created: Mutex<Vec<CreatePokemon>>,
        deleted: Mutex<Vec<PokemonId>>,
    }

    impl ScriptedGateway {
        fn with_lists(lists: Vec<Result<Vec<Pokemon>, GatewayError>>) -> Self {
            Self {
                lists: Mutex::new(lists.into()),
                ..Default::default()
            }
        }

        fn fail_mutations(self, err: GatewayError) -> Self {
            *self.mutation_error.lock().unwrap() = Some(err);
            self
        }

        fn list_calls(&self) -> usize {
            *self.list_calls.lock().unwrap()
        }

        fn take_mutation_error(&self) -> Option<GatewayError> {
            self.mutation_error.lock().unwrap().take()
        }
    }

    #[async_trait]
    impl PokemonGateway for ScriptedGateway {
        async fn list_all(&self) -> Result<Vec<Pokemon>, GatewayError> {
            *self.list_calls.lock().unwrap() += 1;
            self.lists
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn get_by_id(&self, id: PokemonId) -> Result<Pokemon, GatewayError> {
            if id == 404 {
                return Err(GatewayError::remote(404, "missing"));
            }
            Ok(pokemon(id, "found"))
        }

        async fn create(&self, payload: &CreatePokemon) -> Result<Pokemon, GatewayError> {
            if let Some(err) = self.take_mutation_error() {
                return Err(err);
            }
            self.created.lock().unwrap().push(payload.clone());
            Ok(pokemon(100, payload.name()))
        }

        async fn update(
            &self,
            id: PokemonId,
            patch: &PokemonPatch,
        ) -> Result<Pokemon, GatewayError> {
            if let Some(err) = self.take_mutation_error() {
                return Err(err);
            }
            let mut updated = pokemon(id, "updated");
            if let Some(name) = &patch.name {
                updated.name = name.clone();
            }
            Ok(updated)
        }

        async fn delete_by_id(&self, id: PokemonId) -> Result<(), GatewayError> {
            if let Some(err) = self.take_mutation_error() {
                return Err(err);
            }
            self.deleted.lock().unwrap().push(id);
            Ok(())
        }
    }

    fn store_with(gateway: Arc<ScriptedGateway>) -> (CollectionStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let store = CollectionStore::new(gateway, notifier.clone());
        (store, notifier)
    }

    #[tokio::test]
    async fn initialize_populates_collection_once() {
        let gateway = Arc::new(ScriptedGateway::with_lists(vec![
            Ok(vec![pokemon(1, "bulbasaur")]),
            Ok(vec![pokemon(2, "ivysaur")]),
        ]));
        let (store, notifier) = store_with(gateway.clone());

        store.initialize().await;
        store.initialize().await;

        assert_eq!(gateway.list_calls(), 1);
        let state = store.snapshot();
        assert_eq!(state.collection, vec![pokemon(1, "bulbasaur")]);
        assert!(!state.is_loading);
        assert!(state.last_error.is_none());
        assert!(notifier.entries().is_empty());
    }

    #[tokio::test]
    async fn initialize_failure_sets_error_and_notifies() {
        let gateway = Arc::new(ScriptedGateway::with_lists(vec![Err(
            GatewayError::transport("connection refused"),
        )]));
        let (store, notifier) = store_with(gateway);

        store.initialize().await;

        let state = store.snapshot();
        assert!(state.collection.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.last_error.as_deref(), Some(INITIAL_FETCH_FAILED));
        assert_eq!(
            notifier.messages(NotificationLevel::Error),
            vec![INITIAL_FETCH_NOTICE]
        );
    }

    #[tokio::test]
    async fn refresh_failure_keeps_last_known_collection() {
        let gateway = Arc::new(ScriptedGateway::with_lists(vec![
            Ok(vec![pokemon(1, "bulbasaur")]),
            Err(GatewayError::remote(503, "down")),
        ]));
        let (store, notifier) = store_with(gateway);

        store.refresh().await;
        store.refresh().await;

        let state = store.snapshot();
        assert_eq!(state.collection, vec![pokemon(1, "bulbasaur")]);
        assert_eq!(state.last_error.as_deref(), Some(REFRESH_FAILED));
        assert_eq!(notifier.messages(NotificationLevel::Error), vec![REFRESH_NOTICE]);
    }

    #[tokio::test]
    async fn refresh_success_clears_previous_error() {
        let gateway = Arc::new(ScriptedGateway::with_lists(vec![
            Err(GatewayError::remote(503, "down")),
            Ok(vec![pokemon(1, "bulbasaur")]),
        ]));
        let (store, _notifier) = store_with(gateway);

        store.refresh().await;
        assert!(store.last_error().is_some());
        store.refresh().await;
        assert!(store.last_error().is_none());
    }

    #[tokio::test]
    async fn refresh_rejects_snapshot_with_duplicate_ids() {
        let gateway = Arc::new(ScriptedGateway::with_lists(vec![
            Ok(vec![pokemon(1, "bulbasaur")]),
            Ok(vec![pokemon(2, "ivysaur"), pokemon(2, "venusaur")]),
        ]));
        let (store, _notifier) = store_with(gateway);

        store.refresh().await;
        store.refresh().await;

        assert_eq!(store.collection(), vec![pokemon(1, "bulbasaur")]);
        assert_eq!(store.last_error().as_deref(), Some(REFRESH_FAILED));
    }

    #[tokio::test]
    async fn add_ends_with_authoritative_collection() {
        let authoritative = vec![pokemon(1, "bulbasaur"), pokemon(7, "squirtle")];
        let gateway = Arc::new(ScriptedGateway::with_lists(vec![
            Ok(vec![pokemon(1, "bulbasaur")]),
            Ok(authoritative.clone()),
        ]));
        let (store, notifier) = store_with(gateway.clone());
        store.initialize().await;

        let payload = CreatePokemon::Lookup {
            name: "squirtle".into(),
        };
        let created = store.add(&payload).await.expect("add succeeds");

        assert_eq!(created.name, "squirtle");
        assert_eq!(gateway.list_calls(), 2);
        assert_eq!(gateway.created.lock().unwrap().as_slice(), &[payload]);
        let state = store.snapshot();
        assert_eq!(state.collection, authoritative);
        assert!(!state.is_loading);
        assert_eq!(
            notifier.messages(NotificationLevel::Success),
            vec![ADD_SUCCEEDED]
        );
    }

    #[tokio::test]
    async fn add_keeps_optimistic_entry_when_refresh_fails() {
        let gateway = Arc::new(ScriptedGateway::with_lists(vec![
            Ok(vec![pokemon(1, "bulbasaur")]),
            Err(GatewayError::transport("reset")),
        ]));
        let (store, notifier) = store_with(gateway);
        store.initialize().await;

        store
            .add(&CreatePokemon::Lookup {
                name: "mew".into(),
            })
            .await
            .expect("create itself succeeded");

        let names: Vec<String> = store.collection().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["bulbasaur", "mew"]);
        assert_eq!(notifier.messages(NotificationLevel::Error), vec![REFRESH_NOTICE]);
    }

    #[tokio::test]
    async fn add_failure_reraises_and_skips_refresh() {
        let gateway = Arc::new(
            ScriptedGateway::with_lists(vec![Ok(vec![pokemon(1, "bulbasaur")])])
                .fail_mutations(GatewayError::remote(409, "exists")),
        );
        let (store, notifier) = store_with(gateway.clone());
        store.initialize().await;

        let err = store
            .add(&CreatePokemon::Lookup {
                name: "bulbasaur".into(),
            })
            .await
            .expect_err("conflict");

        assert_eq!(err.status(), Some(409));
        assert_eq!(gateway.list_calls(), 1);
        let state = store.snapshot();
        assert_eq!(state.collection, vec![pokemon(1, "bulbasaur")]);
        assert!(!state.is_loading);
        assert_eq!(state.last_error.as_deref(), Some(ADD_FAILED));
        assert_eq!(notifier.messages(NotificationLevel::Error), vec![ADD_FAILED]);
    }

    #[tokio::test]
    async fn update_replaces_entry_then_refreshes() {
        let gateway = Arc::new(ScriptedGateway::with_lists(vec![
            Ok(vec![pokemon(25, "pikachu")]),
            Ok(vec![pokemon(25, "raichu")]),
        ]));
        let (store, notifier) = store_with(gateway.clone());
        store.initialize().await;

        let patch = PokemonPatch {
            name: Some("raichu".into()),
            ..Default::default()
        };
        let updated = store.update(25, &patch).await.expect("update succeeds");

        assert_eq!(updated.name, "raichu");
        assert_eq!(gateway.list_calls(), 2);
        assert_eq!(store.collection(), vec![pokemon(25, "raichu")]);
        assert_eq!(
            notifier.messages(NotificationLevel::Success),
            vec![UPDATE_SUCCEEDED]
        );
    }

    #[tokio::test]
    async fn update_of_unknown_id_still_refreshes() {
        let gateway = Arc::new(ScriptedGateway::with_lists(vec![
            Ok(vec![pokemon(1, "bulbasaur")]),
            Ok(vec![pokemon(1, "bulbasaur"), pokemon(150, "mewtwo")]),
        ]));
        let (store, _notifier) = store_with(gateway.clone());
        store.initialize().await;

        store
            .update(150, &PokemonPatch::default())
            .await
            .expect("backend accepted update");

        assert_eq!(gateway.list_calls(), 2);
        assert_eq!(store.collection().len(), 2);
    }

    #[tokio::test]
    async fn update_failure_notifies_and_reraises() {
        let gateway = Arc::new(
            ScriptedGateway::with_lists(vec![Ok(vec![pokemon(25, "pikachu")])])
                .fail_mutations(GatewayError::remote(500, "boom")),
        );
        let (store, notifier) = store_with(gateway);
        store.initialize().await;

        let err = store
            .update(25, &PokemonPatch::default())
            .await
            .expect_err("server error");

        assert_eq!(err.status(), Some(500));
        assert_eq!(store.collection(), vec![pokemon(25, "pikachu")]);
        assert_eq!(store.last_error().as_deref(), Some(UPDATE_FAILED));
        assert_eq!(notifier.messages(NotificationLevel::Error), vec![UPDATE_FAILED]);
    }

    #[tokio::test]
    async fn remove_drops_entry_after_refresh() {
        let gateway = Arc::new(ScriptedGateway::with_lists(vec![
            Ok(vec![pokemon(1, "bulbasaur"), pokemon(4, "charmander")]),
            Ok(vec![pokemon(4, "charmander")]),
        ]));
        let (store, notifier) = store_with(gateway.clone());
        store.initialize().await;

        store.remove(1).await.expect("remove succeeds");

        assert_eq!(gateway.deleted.lock().unwrap().as_slice(), &[1]);
        assert!(store.collection().iter().all(|entry| entry.id != 1));
        assert!(!store.is_loading());
        assert_eq!(
            notifier.messages(NotificationLevel::Success),
            vec![DELETE_SUCCEEDED]
        );
    }

    #[tokio::test]
    async fn remove_failure_keeps_entry() {
        let gateway = Arc::new(
            ScriptedGateway::with_lists(vec![Ok(vec![pokemon(1, "bulbasaur")])])
                .fail_mutations(GatewayError::remote(404, "gone")),
        );
        let (store, notifier) = store_with(gateway.clone());
        store.initialize().await;

        store.remove(1).await.expect_err("not found");

        assert_eq!(gateway.list_calls(), 1);
        assert_eq!(store.collection(), vec![pokemon(1, "bulbasaur")]);
        assert_eq!(notifier.messages(NotificationLevel::Error), vec![DELETE_FAILED]);
    }

    #[tokio::test]
    async fn get_failure_notifies_without_touching_state() {
        let gateway = Arc::new(ScriptedGateway::default());
        let (store, notifier) = store_with(gateway);

        let err = store.get(404).await.expect_err("missing");

        assert_eq!(err.status(), Some(404));
        assert!(store.last_error().is_none());
        assert_eq!(notifier.messages(NotificationLevel::Error), vec![DETAILS_NOTICE]);
        assert_eq!(store.get(7).await.expect("found").id, 7);
    }
}
