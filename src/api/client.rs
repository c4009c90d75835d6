//! # Pokédex Client
//!
//! Single point of contact with the remote catalog. The client owns two
//! read-through caches (types and pokemon) that are filled at most once per
//! successful fetch and never invalidated. Build one client per process and
//! share it by reference.

use crate::api::error::{ApiError, ApiResult};
use crate::api::evolution::{self, Evolution, EvolutionChain};
use crate::api::models::{Envelope, Pokemon, PokemonId, PokemonType, TypeId};
use crate::api::search::{self, SearchCriteria};
use serde::de::{DeserializeOwned, IgnoredAny};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Public catalog used when no profile overrides it
pub const DEFAULT_BASE_URL: &str = "https://pokedex-api.3rgo.tech/api";

pub const TYPES_ENDPOINT: &str = "types";
pub const POKEMON_ENDPOINT: &str = "pokemon";

/// Shared, immutable view of a cached collection
pub type Collection<T> = Arc<Vec<T>>;

type CacheSlot<T> = RwLock<Option<Collection<T>>>;

/// Data access client for the remote catalog
pub struct PokedexClient {
    http: reqwest::Client,
    base_url: String,
    types_cache: CacheSlot<PokemonType>,
    pokemon_cache: CacheSlot<Pokemon>,
}

impl PokedexClient {
    /// Create a client for `base_url` with empty caches
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::transport("", None, format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_http_client(base_url, http))
    }

    /// Create a client around an existing reqwest client
    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::debug!("Creating PokedexClient for '{}'", base_url);
        Self {
            http,
            base_url,
            types_cache: RwLock::new(None),
            pokemon_cache: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// GET `endpoint` and unwrap its `{ success, data }` envelope.
    ///
    /// Not cached; the collection accessors cache on top of it.
    pub async fn fetch_envelope<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let url = self.endpoint_url(endpoint);
        tracing::debug!("GET {}", url);

        let result = self.request_envelope(endpoint, &url).await;
        if let Err(e) = &result {
            tracing::error!("Failed to fetch '{}': {}", url, e);
        }
        result
    }

    async fn request_envelope<T: DeserializeOwned>(&self, endpoint: &str, url: &str) -> ApiResult<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::transport(endpoint, e.status().map(|s| s.as_u16()), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::transport(
                endpoint,
                Some(status.as_u16()),
                format!("HTTP {status}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(endpoint, Some(status.as_u16()), e.to_string()))?;

        // `data` is skipped here and only decoded once `success` holds
        let header: Envelope<IgnoredAny> = serde_json::from_str(&body)
            .map_err(|e| ApiError::api_logic(endpoint, format!("malformed envelope: {e}")))?;

        if !header.success {
            return Err(ApiError::api_logic(endpoint, "the API reported a failure"));
        }

        // Decoded from the text, never via `Value`, so `evolvesTo` keeps wire order
        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| ApiError::api_logic(endpoint, format!("unexpected payload: {e}")))?;

        envelope
            .data
            .ok_or_else(|| ApiError::api_logic(endpoint, "envelope has no data"))
    }

    /// Return the cached collection or fetch and store it.
    ///
    /// The slot lock is never held across the request, so concurrent first
    /// calls may both fetch; the later write simply replaces equal data.
    async fn read_through<T>(&self, slot: &CacheSlot<T>, endpoint: &str) -> ApiResult<Collection<T>>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let cached = slot.read().await.clone();
        if let Some(collection) = cached {
            tracing::debug!("Cache hit for '{}' ({} records)", endpoint, collection.len());
            return Ok(collection);
        }

        tracing::debug!("Cache miss for '{}'", endpoint);
        let collection: Collection<T> = Arc::new(self.fetch_envelope(endpoint).await?);
        tracing::info!("Cached {} records from '{}'", collection.len(), endpoint);

        *slot.write().await = Some(Arc::clone(&collection));
        Ok(collection)
    }

    /// Every type in the catalog
    pub async fn get_types(&self) -> ApiResult<Collection<PokemonType>> {
        self.read_through(&self.types_cache, TYPES_ENDPOINT).await
    }

    /// Every pokemon in the catalog
    pub async fn get_all_pokemon(&self) -> ApiResult<Collection<Pokemon>> {
        self.read_through(&self.pokemon_cache, POKEMON_ENDPOINT).await
    }

    pub async fn is_types_cached(&self) -> bool {
        self.types_cache.read().await.is_some()
    }

    pub async fn is_pokemon_cached(&self) -> bool {
        self.pokemon_cache.read().await.is_some()
    }

    pub async fn get_type_by_id(&self, id: TypeId) -> ApiResult<Option<PokemonType>> {
        let types = self.get_types().await?;
        Ok(types.iter().find(|t| t.id == id).cloned())
    }

    pub async fn get_pokemon_by_id(&self, id: PokemonId) -> ApiResult<Option<Pokemon>> {
        let pokemon = self.get_all_pokemon().await?;
        Ok(pokemon.iter().find(|p| p.id == id).cloned())
    }

    /// First pokemon whose French or English name equals `name`, ignoring case
    pub async fn get_pokemon_by_name(&self, name: &str) -> ApiResult<Option<Pokemon>> {
        let pokemon = self.get_all_pokemon().await?;
        Ok(pokemon.iter().find(|p| p.name.matches(name)).cloned())
    }

    /// Resolve a pokemon's type ids in order, dropping ids the catalog lacks
    pub async fn get_pokemon_types_details<'a>(
        &self,
        pokemon: impl Into<Option<&'a Pokemon>>,
    ) -> ApiResult<Vec<PokemonType>> {
        let pokemon: Option<&Pokemon> = pokemon.into();
        let type_ids = match pokemon {
            Some(Pokemon {
                types: Some(types), ..
            }) => types,
            Some(p) => {
                let err = ApiError::InvalidArgument(format!("pokemon #{} has no types", p.id));
                tracing::error!("{}", err);
                return Err(err);
            }
            None => {
                let err = ApiError::InvalidArgument("no pokemon given".to_string());
                tracing::error!("{}", err);
                return Err(err);
            }
        };

        let types = self.get_types().await?;
        Ok(type_ids
            .iter()
            .filter_map(|id| types.iter().find(|t| t.id == *id).cloned())
            .collect())
    }

    /// Forward evolutions in `evolvesTo` order; empty when there are none
    pub async fn get_pokemon_evolutions<'a>(
        &self,
        pokemon: impl Into<Option<&'a Pokemon>>,
    ) -> ApiResult<Vec<Evolution>> {
        let pokemon: Option<&Pokemon> = pokemon.into();
        let Some(pokemon) = pokemon.filter(|p| p.evolves_to.is_some()) else {
            return Ok(Vec::new());
        };

        let all = self.get_all_pokemon().await?;
        Ok(evolution::resolve_evolutions(pokemon, &all))
    }

    /// Pre-evolutions in `evolvedFrom` order; empty when there are none
    pub async fn get_pokemon_pre_evolutions<'a>(
        &self,
        pokemon: impl Into<Option<&'a Pokemon>>,
    ) -> ApiResult<Vec<Pokemon>> {
        let pokemon: Option<&Pokemon> = pokemon.into();
        let Some(pokemon) = pokemon
            .filter(|p| p.evolved_from.as_ref().is_some_and(|ids| !ids.is_empty()))
        else {
            return Ok(Vec::new());
        };

        let all = self.get_all_pokemon().await?;
        Ok(evolution::resolve_pre_evolutions(pokemon, &all))
    }

    /// Full family tree of `pokemon`, rooted at its earliest ancestor
    pub async fn get_evolution_chain(&self, pokemon: &Pokemon) -> ApiResult<EvolutionChain> {
        let all = self.get_all_pokemon().await?;
        Ok(evolution::build_chain(pokemon, &all))
    }

    /// Filter the catalog by name, type and generation. The cache itself is
    /// never modified.
    pub async fn search_pokemon(&self, criteria: &SearchCriteria) -> ApiResult<Vec<Pokemon>> {
        let all = self.get_all_pokemon().await?;

        let types = match &criteria.type_filter {
            Some(filter) if filter.needs_type_catalog() => self.get_types().await?,
            _ => Arc::new(Vec::new()),
        };

        let results = search::filter_pokemon(&all, &types, criteria);
        tracing::debug!("Search {:?} matched {} of {}", criteria, results.len(), all.len());
        Ok(results)
    }

    /// Distinct generations present in the catalog, ascending
    pub async fn get_generations(&self) -> ApiResult<Vec<u32>> {
        let all = self.get_all_pokemon().await?;
        Ok(search::generations(&all))
    }
}
