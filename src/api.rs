//! # Catalog API
//!
//! Data access for the remote Pokédex catalog: typed models, the caching
//! client, search, and the derived evolution relationships.

pub mod client;
pub mod error;
pub mod evolution;
pub mod models;
pub mod search;

pub use client::{Collection, PokedexClient, DEFAULT_BASE_URL, POKEMON_ENDPOINT, TYPES_ENDPOINT};
pub use error::{ApiError, ApiResult};
pub use evolution::{Evolution, EvolutionChain};
pub use models::{
    EvolutionCondition, EvolutionDetails, EvolutionEdge, EvolutionEdges, LocalizedName, Pokemon,
    PokemonId, PokemonType, StatKind, Stats, TypeId, MAX_STAT_VALUE,
};
pub use search::{SearchCriteria, TypeFilter};
