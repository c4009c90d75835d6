//! Catalog list rendering

use crate::api::{Pokemon, PokemonType};
use crate::views::{padded_id, ViewContext};
use std::io::{self, Write};

/// One list row: `#025 Pikachu [Électrik]`. Type ids missing from `types`
/// are left out.
pub fn pokemon_line(ctx: &ViewContext, pokemon: &Pokemon, types: &[PokemonType]) -> String {
    let type_names: Vec<&str> = pokemon
        .types
        .iter()
        .flatten()
        .filter_map(|id| types.iter().find(|t| t.id == *id))
        .map(|t| t.name.get(ctx.language))
        .collect();

    let mut line = format!(
        "{} {}",
        ctx.palette.dim(&padded_id(pokemon.id)),
        ctx.palette.bold(pokemon.name.get(ctx.language))
    );
    if !type_names.is_empty() {
        line.push_str(&format!(" [{}]", type_names.join("/")));
    }
    line
}

pub fn render_pokemon_list(
    out: &mut impl Write,
    ctx: &ViewContext,
    pokemon: &[Pokemon],
    types: &[PokemonType],
) -> io::Result<()> {
    if pokemon.is_empty() {
        return writeln!(out, "{}", ctx.translations.no_results);
    }

    for entry in pokemon {
        writeln!(out, "{}", pokemon_line(ctx, entry, types))?;
    }
    writeln!(out, "{} {}", pokemon.len(), ctx.translations.results)
}
