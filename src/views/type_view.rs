//! Type table and generation list

use crate::api::PokemonType;
use crate::views::ViewContext;
use std::io::{self, Write};

pub fn render_types(out: &mut impl Write, ctx: &ViewContext, types: &[PokemonType]) -> io::Result<()> {
    writeln!(out, "{}", ctx.palette.bold(ctx.translations.types))?;
    for t in types {
        writeln!(out, "{:>3}  {:<12} {}", t.id, t.name.fr, t.name.en)?;
    }
    Ok(())
}

pub fn render_generations(
    out: &mut impl Write,
    ctx: &ViewContext,
    generations: &[u32],
) -> io::Result<()> {
    writeln!(out, "{}", ctx.palette.bold(ctx.translations.generations))?;
    for generation in generations {
        writeln!(out, "  {} {}", ctx.translations.generation, generation)?;
    }
    Ok(())
}
