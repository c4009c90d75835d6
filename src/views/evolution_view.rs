//! Evolution conditions and family trees

use crate::api::{EvolutionChain, EvolutionCondition, Pokemon};
use crate::i18n::Translations;
use crate::views::{padded_id, ViewContext};
use std::io::{self, Write};

/// Human-readable condition, `None` when there is nothing worth printing
pub fn condition_text(condition: &EvolutionCondition, t: &Translations) -> Option<String> {
    match condition {
        EvolutionCondition::Text(text) if text.trim().is_empty() => None,
        EvolutionCondition::Text(text) => Some(text.clone()),
        EvolutionCondition::Detailed(details) => match details.trigger.as_str() {
            "level-up" => details.level.map(|level| format!("{}: {}", t.level_up, level)),
            "item" => details.item.as_ref().map(|item| format!("{}: {}", t.item, item)),
            "trade" => Some(t.trade.to_string()),
            "other" => Some(
                details
                    .details
                    .clone()
                    .unwrap_or_else(|| t.special_condition.to_string()),
            ),
            _ => details.details.clone(),
        },
        EvolutionCondition::Other(serde_json::Value::Null) => None,
        EvolutionCondition::Other(value) => Some(value.to_string()),
    }
}

/// `→` arrow, followed by the condition in parentheses when there is one
pub fn arrow(condition: Option<&EvolutionCondition>, t: &Translations) -> String {
    match condition.and_then(|c| condition_text(c, t)) {
        Some(text) => format!("→ ({text})"),
        None => "→".to_string(),
    }
}

pub(crate) fn node_label(ctx: &ViewContext, pokemon: &Pokemon) -> String {
    format!(
        "{} {}",
        padded_id(pokemon.id),
        pokemon.name.get(ctx.language)
    )
}

/// Indented family tree, one species per line
pub fn render_chain(
    out: &mut impl Write,
    ctx: &ViewContext,
    chain: &EvolutionChain,
    current: Option<&Pokemon>,
) -> io::Result<()> {
    writeln!(out, "{}", ctx.palette.bold(ctx.translations.evolution_tree))?;
    render_node(out, ctx, chain, current, 0)
}

fn render_node(
    out: &mut impl Write,
    ctx: &ViewContext,
    node: &EvolutionChain,
    current: Option<&Pokemon>,
    depth: usize,
) -> io::Result<()> {
    let mut label = node_label(ctx, &node.species);
    if current.is_some_and(|p| p.id == node.species.id) {
        label = ctx.palette.bold(&format!("{label} *"));
    }

    let indent = "  ".repeat(depth + 1);
    if depth == 0 {
        writeln!(out, "{indent}{label}")?;
    } else {
        writeln!(
            out,
            "{indent}{} {label}",
            arrow(node.condition.as_ref(), ctx.translations)
        )?;
    }

    for child in &node.evolves_to {
        render_node(out, ctx, child, current, depth + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{EvolutionDetails, LocalizedName, Stats};
    use crate::i18n::{translations, Language};
    use serde_json::json;

    fn details(trigger: &str, level: Option<u32>, item: Option<&str>, extra: Option<&str>) -> EvolutionCondition {
        EvolutionCondition::Detailed(EvolutionDetails {
            trigger: trigger.to_string(),
            level,
            item: item.map(str::to_string),
            details: extra.map(str::to_string),
        })
    }

    #[test]
    fn structured_conditions_should_be_localized() {
        let fr = translations(Language::Fr);
        let en = translations(Language::En);
        assert_eq!(condition_text(&details("level-up", Some(16), None, None), fr), Some("Niveau: 16".to_string()));
        assert_eq!(condition_text(&details("item", None, Some("Pierre Foudre"), None), en), Some("Item: Pierre Foudre".to_string()));
        assert_eq!(condition_text(&details("trade", None, None, None), en), Some("Trade".to_string()));
        assert_eq!(condition_text(&details("other", None, None, None), fr), Some("Condition spéciale".to_string()));
        assert_eq!(condition_text(&details("other", None, None, Some("Bonheur")), fr), Some("Bonheur".to_string()));
        assert_eq!(condition_text(&details("level-up", None, None, None), fr), None);
    }

    #[test]
    fn text_and_raw_conditions_should_pass_through() {
        let en = translations(Language::En);
        assert_eq!(
            condition_text(&EvolutionCondition::Text("Niveau 16".to_string()), en),
            Some("Niveau 16".to_string())
        );
        assert_eq!(
            condition_text(&EvolutionCondition::Other(json!({"min": 3})), en),
            Some("{\"min\":3}".to_string())
        );
        assert_eq!(condition_text(&EvolutionCondition::Other(json!(null)), en), None);
        assert_eq!(arrow(None, en), "→");
    }

    fn species(id: u32, name: &str) -> Pokemon {
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
            types: None,
            evolves_to: None,
            evolved_from: None,
        }
    }

    #[test]
    fn chain_should_render_as_indented_tree() {
        let chain = EvolutionChain {
            species: species(1, "Bulbizarre"),
            condition: None,
            evolves_to: vec![EvolutionChain {
                species: species(2, "Herbizarre"),
                condition: Some(details("level-up", Some(16), None, None)),
                evolves_to: vec![],
            }],
        };
        let mut out = Vec::new();
        let ctx = ViewContext::plain(Language::Fr);
        render_chain(&mut out, &ctx, &chain, Some(&species(2, "Herbizarre"))).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Arbre d'évolution\n  #001 Bulbizarre\n    → (Niveau: 16) #002 Herbizarre *\n"
        );
    }
}
