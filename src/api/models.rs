//! # Catalog Models
//!
//! Typed records returned by the remote catalog. Required fields are enforced
//! by serde at the deserialization boundary; the relationship fields a
//! derivation depends on stay optional so the derivation can reject them
//! explicitly.

use crate::i18n::Language;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub type TypeId = u32;
pub type PokemonId = u32;

/// Upper bound used to scale stat bars
pub const MAX_STAT_VALUE: u32 = 255;

/// A name available in every supported UI language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub fr: String,
    pub en: String,
}

impl LocalizedName {
    pub fn new(fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            fr: fr.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }

    /// Case-insensitive equality against either localized form
    pub fn matches(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.fr.to_lowercase() == needle || self.en.to_lowercase() == needle
    }

    /// Case-insensitive substring match against either localized form
    pub fn contains(&self, fragment: &str) -> bool {
        let needle = fragment.to_lowercase();
        self.fr.to_lowercase().contains(&needle) || self.en.to_lowercase().contains(&needle)
    }
}

/// An elemental type record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub id: TypeId,
    pub name: LocalizedName,
    pub image: String,
}

/// Base stats as published by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spe_atk: u32,
    pub spe_def: u32,
    pub vit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stats {
    /// Stats in display order
    pub fn entries(&self) -> [(StatKind, u32); 6] {
        [
            (StatKind::Hp, self.hp),
            (StatKind::Attack, self.atk),
            (StatKind::Defense, self.def),
            (StatKind::SpecialAttack, self.spe_atk),
            (StatKind::SpecialDefense, self.spe_def),
            (StatKind::Speed, self.vit),
        ]
    }

    pub fn total(&self) -> u32 {
        self.entries().iter().map(|(_, value)| value).sum()
    }
}

/// Structured evolution trigger as sent by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDetails {
    pub trigger: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Condition attached to an evolution edge.
///
/// The client never interprets it; only the views look inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvolutionCondition {
    Text(String),
    Detailed(EvolutionDetails),
    Other(serde_json::Value),
}

/// One `evolvesTo` entry: target id as keyed by the catalog plus its condition
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionEdge {
    pub target: String,
    pub condition: EvolutionCondition,
}

impl EvolutionEdge {
    /// Numeric target id, `None` when the key is not a number
    pub fn target_id(&self) -> Option<PokemonId> {
        self.target.trim().parse().ok()
    }
}

/// The `evolvesTo` mapping, kept in the order the catalog sent it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvolutionEdges(Vec<EvolutionEdge>);

impl EvolutionEdges {
    pub fn new(edges: Vec<EvolutionEdge>) -> Self {
        Self(edges)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EvolutionEdge> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a EvolutionEdges {
    type Item = &'a EvolutionEdge;
    type IntoIter = std::slice::Iter<'a, EvolutionEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for EvolutionEdges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for edge in &self.0 {
            map.serialize_entry(&edge.target, &edge.condition)?;
        }
        map.end()
    }
}

struct EvolutionEdgesVisitor;

impl<'de> Visitor<'de> for EvolutionEdgesVisitor {
    type Value = EvolutionEdges;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from pokemon id to evolution condition")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut edges = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((target, condition)) = access.next_entry::<String, EvolutionCondition>()? {
            edges.push(EvolutionEdge { target, condition });
        }
        Ok(EvolutionEdges(edges))
    }

    // Empty mappings sometimes arrive serialized as `[]`
    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        match access.next_element::<serde::de::IgnoredAny>()? {
            None => Ok(EvolutionEdges::default()),
            Some(_) => Err(serde::de::Error::invalid_type(
                serde::de::Unexpected::Seq,
                &self,
            )),
        }
    }
}

impl<'de> Deserialize<'de> for EvolutionEdges {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EvolutionEdgesVisitor)
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: LocalizedName,
    pub image: String,
    pub image_shiny: String,
    pub generation: u32,
    pub height: f64,
    pub weight: f64,
    pub stats: Stats,
    #[serde(default)]
    pub types: Option<Vec<TypeId>>,
    #[serde(rename = "evolvesTo", default)]
    pub evolves_to: Option<EvolutionEdges>,
    #[serde(rename = "evolvedFrom", default)]
    pub evolved_from: Option<Vec<PokemonId>>,
}

impl Pokemon {
    pub fn has_type(&self, type_id: TypeId) -> bool {
        self.types
            .as_ref()
            .is_some_and(|types| types.contains(&type_id))
    }

    /// Id of the previous entry, absent for the first one
    pub fn previous_id(&self) -> Option<PokemonId> {
        (self.id > 1).then(|| self.id - 1)
    }

    /// Id of the following entry, absent once ids run out
    pub fn next_id(&self) -> Option<PokemonId> {
        self.id.checked_add(1)
    }

    pub fn image_url(&self, shiny: bool) -> &str {
        if shiny {
            &self.image_shiny
        } else {
            &self.image
        }
    }
}

/// Response wrapper used by every catalog endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
}
