use async_trait::async_trait;
use metrics::counter;
use pokedex_api_types::{ApiResponse, PokemonCreateRequest, PokemonRecord, PokemonUpdateRequest};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::gateway::{GatewayError, PokemonGateway};
use crate::domain::entities::{CreatePokemon, Pokemon, PokemonId, PokemonPatch};
use crate::infra::error::InfraError;
use crate::infra::telemetry::GATEWAY_REQUESTS_TOTAL;

const COLLECTION_PATH: &str = "api/pokemon";

/// `PokemonGateway` backed by the REST API under `{base}/api/pokemon`.
#[derive(Clone, Debug)]
pub struct HttpPokemonGateway {
    client: Client,
    base: Url,
}

impl HttpPokemonGateway {
    pub fn new(base: Url) -> Result<Self, InfraError> {
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .build()
            .map_err(|err| InfraError::http_client(err.to_string()))?;
        Ok(Self::with_client(client, base))
    }

    pub fn with_client(client: Client, mut base: Url) -> Self {
        // Keep any path prefix when joining relative endpoints.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { client, base }
    }

    pub fn user_agent() -> &'static str {
        concat!("pokedex/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn collection_url(&self) -> Result<Url, GatewayError> {
        Ok(self.base.join(COLLECTION_PATH)?)
    }

    fn item_url(&self, id: PokemonId) -> Result<Url, GatewayError> {
        Ok(self.base.join(&format!("{COLLECTION_PATH}/{id}"))?)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Vec<u8>, GatewayError> {
        let path = url.path().to_string();
        let mut req = self.client.request(method.clone(), url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(err) => {
                record_outcome(&method, "transport_error");
                debug!(%method, %path, error = %err, "gateway request failed");
                return Err(GatewayError::transport(err));
            }
        };

        let status = resp.status();
        debug!(%method, %path, status = status.as_u16(), "gateway response");

        let bytes = match resp.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                record_outcome(&method, "transport_error");
                return Err(GatewayError::transport(err));
            }
        };

        if !status.is_success() {
            record_outcome(&method, "remote_error");
            let text = String::from_utf8_lossy(&bytes).into_owned();
            return Err(GatewayError::remote(status.as_u16(), text));
        }

        record_outcome(&method, "success");
        Ok(bytes.to_vec())
    }

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, GatewayError> {
        let bytes = self.send(method, url, body).await?;
        decode(&bytes)
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice::<ApiResponse<T>>(bytes)
        .map(|envelope| envelope.data)
        .map_err(|err| GatewayError::Decode(err.to_string()))
}

fn record_outcome(method: &Method, outcome: &'static str) {
    counter!(
        GATEWAY_REQUESTS_TOTAL,
        "method" => method.as_str().to_owned(),
        "outcome" => outcome
    )
    .increment(1);
}

#[async_trait]
impl PokemonGateway for HttpPokemonGateway {
    async fn list_all(&self) -> Result<Vec<Pokemon>, GatewayError> {
        let records: Vec<PokemonRecord> = self
            .request(Method::GET, self.collection_url()?, None::<&()>)
            .await?;
        Ok(records.into_iter().map(Pokemon::from).collect())
    }

    async fn get_by_id(&self, id: PokemonId) -> Result<Pokemon, GatewayError> {
        let record: PokemonRecord = self
            .request(Method::GET, self.item_url(id)?, None::<&()>)
            .await?;
        Ok(record.into())
    }

    async fn create(&self, payload: &CreatePokemon) -> Result<Pokemon, GatewayError> {
        let body = PokemonCreateRequest::from(payload);
        let record: PokemonRecord = self
            .request(Method::POST, self.collection_url()?, Some(&body))
            .await?;
        Ok(record.into())
    }

    async fn update(&self, id: PokemonId, patch: &PokemonPatch) -> Result<Pokemon, GatewayError> {
        let body = PokemonUpdateRequest::from(patch);
        let record: PokemonRecord = self
            .request(Method::PUT, self.item_url(id)?, Some(&body))
            .await?;
        Ok(record.into())
    }

    async fn delete_by_id(&self, id: PokemonId) -> Result<(), GatewayError> {
        self.send(Method::DELETE, self.item_url(id)?, None::<&()>)
            .await?;
        Ok(())
    }
}
