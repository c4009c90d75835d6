//! # Search
//!
//! Criteria and the filter pipeline behind `PokedexClient::search_pokemon`.
//! Filters are applied name, then type, then generation; each step only
//! narrows the working set.

use crate::api::models::{Pokemon, PokemonType, TypeId};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

/// Type filter given either as an id or as a localized type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    Id(TypeId),
    Name(String),
}

impl TypeFilter {
    /// Resolve to a type id. Names are matched case-insensitively against
    /// both localized forms.
    pub fn resolve(&self, types: &[PokemonType]) -> Option<TypeId> {
        match self {
            TypeFilter::Id(id) => Some(*id),
            TypeFilter::Name(name) => types
                .iter()
                .find(|t| t.name.matches(name))
                .map(|t| t.id),
        }
    }

    pub fn needs_type_catalog(&self) -> bool {
        matches!(self, TypeFilter::Name(_))
    }
}

impl FromStr for TypeFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<TypeId>() {
            Ok(id) => TypeFilter::Id(id),
            Err(_) => TypeFilter::Name(trimmed.to_string()),
        })
    }
}

/// Optional search fields; an empty criteria set matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub type_filter: Option<TypeFilter>,
    pub generation: Option<u32>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type_id(mut self, id: TypeId) -> Self {
        self.type_filter = Some(TypeFilter::Id(id));
        self
    }

    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_filter = Some(TypeFilter::Name(name.into()));
        self
    }

    pub fn with_type(mut self, filter: TypeFilter) -> Self {
        self.type_filter = Some(filter);
        self
    }

    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Name fragment, ignoring an empty string
    fn name_fragment(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.name_fragment().is_none() && self.type_filter.is_none() && self.generation.is_none()
    }
}

/// Apply `criteria` to `pokemon`.
///
/// `types` is only consulted when the type filter is a name. A name that
/// resolves to no type leaves the working set untouched.
pub fn filter_pokemon(
    pokemon: &[Pokemon],
    types: &[PokemonType],
    criteria: &SearchCriteria,
) -> Vec<Pokemon> {
    let mut matches: Vec<&Pokemon> = pokemon.iter().collect();

    if let Some(fragment) = criteria.name_fragment() {
        matches.retain(|p| p.name.contains(fragment));
    }

    if let Some(filter) = &criteria.type_filter {
        match filter.resolve(types) {
            Some(type_id) => matches.retain(|p| p.has_type(type_id)),
            None => tracing::debug!("Type filter {:?} did not resolve, ignoring it", filter),
        }
    }

    if let Some(generation) = criteria.generation {
        matches.retain(|p| p.generation == generation);
    }

    matches.into_iter().cloned().collect()
}

/// Distinct generations present in the collection, ascending
pub fn generations(pokemon: &[Pokemon]) -> Vec<u32> {
    pokemon
        .iter()
        .map(|p| p.generation)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
