//! # Evolution Relationships
//!
//! Forward and backward evolution links are derived independently from the
//! `evolvesTo` and `evolvedFrom` fields; neither side is checked against the
//! other. References that do not resolve are dropped.

use crate::api::models::{EvolutionCondition, Pokemon, PokemonId};
use std::collections::HashSet;

/// A resolved forward evolution
#[derive(Debug, Clone, PartialEq)]
pub struct Evolution {
    pub pokemon: Pokemon,
    pub condition: EvolutionCondition,
}

/// A node in a full evolution family tree
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionChain {
    pub species: Pokemon,
    /// Condition on the edge leading here; `None` for the root
    pub condition: Option<EvolutionCondition>,
    pub evolves_to: Vec<EvolutionChain>,
}

impl EvolutionChain {
    /// Number of species in the tree
    pub fn len(&self) -> usize {
        1 + self.evolves_to.iter().map(EvolutionChain::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn depth(&self) -> usize {
        1 + self
            .evolves_to
            .iter()
            .map(EvolutionChain::depth)
            .max()
            .unwrap_or(0)
    }

    pub fn contains(&self, id: PokemonId) -> bool {
        self.species.id == id || self.evolves_to.iter().any(|child| child.contains(id))
    }
}

fn find(all: &[Pokemon], id: PokemonId) -> Option<&Pokemon> {
    all.iter().find(|p| p.id == id)
}

pub(crate) fn resolve_evolutions(pokemon: &Pokemon, all: &[Pokemon]) -> Vec<Evolution> {
    let Some(edges) = &pokemon.evolves_to else {
        return Vec::new();
    };

    edges
        .iter()
        .filter_map(|edge| {
            let resolved = edge.target_id().and_then(|id| find(all, id));
            if resolved.is_none() {
                tracing::debug!(
                    "Dropping unresolved evolution '{}' of #{}",
                    edge.target,
                    pokemon.id
                );
            }
            resolved.map(|target| Evolution {
                pokemon: target.clone(),
                condition: edge.condition.clone(),
            })
        })
        .collect()
}

pub(crate) fn resolve_pre_evolutions(pokemon: &Pokemon, all: &[Pokemon]) -> Vec<Pokemon> {
    pokemon
        .evolved_from
        .iter()
        .flatten()
        .filter_map(|id| find(all, *id).cloned())
        .collect()
}

/// Build the family tree containing `pokemon`, rooted at its earliest
/// ancestor. Only the first `evolvedFrom` entry is followed upwards.
pub(crate) fn build_chain(pokemon: &Pokemon, all: &[Pokemon]) -> EvolutionChain {
    let mut root = pokemon;
    let mut seen = HashSet::from([pokemon.id]);
    while let Some(parent) = root
        .evolved_from
        .as_ref()
        .and_then(|ids| ids.first())
        .and_then(|id| find(all, *id))
    {
        if !seen.insert(parent.id) {
            break;
        }
        root = parent;
    }

    let mut visited = HashSet::new();
    expand(root, None, all, &mut visited)
}

fn expand(
    species: &Pokemon,
    condition: Option<EvolutionCondition>,
    all: &[Pokemon],
    visited: &mut HashSet<PokemonId>,
) -> EvolutionChain {
    visited.insert(species.id);
    let mut evolves_to = Vec::new();
    for evolution in resolve_evolutions(species, all) {
        // cycle guard
        if visited.contains(&evolution.pokemon.id) {
            continue;
        }
        evolves_to.push(expand(
            &evolution.pokemon,
            Some(evolution.condition),
            all,
            visited,
        ));
    }

    EvolutionChain {
        species: species.clone(),
        condition,
        evolves_to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{EvolutionEdge, EvolutionEdges, LocalizedName, Stats};

    fn pokemon(id: u32, name: &str, evolves_to: &[(&str, &str)], evolved_from: &[u32]) -> Pokemon {
        Pokemon {
            id,
            name: LocalizedName::new(name, name),
            image: String::new(),
            image_shiny: String::new(),
            generation: 1,
            height: 1.0,
            weight: 1.0,
            stats: Stats {
                hp: 1,
                atk: 1,
                def: 1,
                spe_atk: 1,
                spe_def: 1,
                vit: 1,
            },
            types: Some(vec![1]),
            evolves_to: Some(EvolutionEdges::new(
                evolves_to
                    .iter()
                    .map(|(target, condition)| EvolutionEdge {
                        target: target.to_string(),
                        condition: EvolutionCondition::Text(condition.to_string()),
                    })
                    .collect(),
            )),
            evolved_from: Some(evolved_from.to_vec()),
        }
    }

    fn eevee_family() -> Vec<Pokemon> {
        vec![
            pokemon(133, "Evoli", &[("134", "Water Stone"), ("135", "Thunder Stone"), ("999", "Ghost")], &[]),
            pokemon(134, "Aquali", &[], &[133]),
            pokemon(135, "Voltali", &[], &[133]),
        ]
    }

    #[test]
    fn evolutions_should_resolve_in_edge_order_and_drop_missing() {
        let all = eevee_family();
        let evolutions = resolve_evolutions(&all[0], &all);
        let ids: Vec<u32> = evolutions.iter().map(|e| e.pokemon.id).collect();
        assert_eq!(ids, vec![134, 135]);
        assert_eq!(
            evolutions[1].condition,
            EvolutionCondition::Text("Thunder Stone".to_string())
        );
    }

    #[test]
    fn evolutions_should_not_require_back_reference() {
        let mut all = eevee_family();
        all[1].evolved_from = None;
        let evolutions = resolve_evolutions(&all[0], &all);
        assert!(evolutions.iter().any(|e| e.pokemon.id == 134));
    }

    #[test]
    fn missing_evolves_to_should_yield_nothing() {
        let mut all = eevee_family();
        all[0].evolves_to = None;
        assert!(resolve_evolutions(&all[0], &all).is_empty());
    }

    #[test]
    fn pre_evolutions_should_preserve_order() {
        let all = vec![
            pokemon(1, "A", &[], &[]),
            pokemon(2, "B", &[], &[]),
            pokemon(3, "C", &[], &[2, 42, 1]),
        ];
        let ids: Vec<u32> = resolve_pre_evolutions(&all[2], &all).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn chain_should_start_at_earliest_ancestor() {
        let all = vec![
            pokemon(1, "Bulbizarre", &[("2", "16")], &[]),
            pokemon(2, "Herbizarre", &[("3", "32")], &[1]),
            pokemon(3, "Florizarre", &[], &[2]),
        ];
        let chain = build_chain(&all[2], &all);
        assert_eq!(chain.species.id, 1);
        assert_eq!(chain.condition, None);
        assert_eq!(chain.depth(), 3);
        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.evolves_to[0].evolves_to[0].condition,
            Some(EvolutionCondition::Text("32".to_string()))
        );
    }

    #[test]
    fn chain_should_branch() {
        let all = eevee_family();
        let chain = build_chain(&all[1], &all);
        assert_eq!(chain.species.id, 133);
        assert_eq!(chain.evolves_to.len(), 2);
        assert!(chain.contains(135));
        assert!(!chain.contains(999));
    }

    #[test]
    fn chain_should_survive_cycles() {
        let all = vec![
            pokemon(1, "A", &[("2", "x")], &[2]),
            pokemon(2, "B", &[("1", "y")], &[1]),
        ];
        let chain = build_chain(&all[0], &all);
        assert_eq!(chain.len(), 2);
    }
}
