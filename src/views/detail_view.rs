//! # Detail View
//!
//! Full page for one pokemon: identity, measurements, types, stat bars and
//! evolution sections.

use crate::api::{Evolution, Pokemon, PokemonType, StatKind, MAX_STAT_VALUE};
use crate::i18n::Language;
use crate::views::ansi_escape_codes::{
    FG_BLUE, FG_BRIGHT_RED, FG_CYAN, FG_GREEN, FG_MAGENTA, FG_RED, FG_YELLOW,
};
use crate::views::evolution_view::{arrow, node_label};
use crate::views::ViewContext;
use std::io::{self, Write};

pub const STAT_BAR_WIDTH: usize = 30;

/// Everything the detail page shows, gathered from the client
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonDetail {
    pub pokemon: Pokemon,
    pub types: Vec<PokemonType>,
    pub evolutions: Vec<Evolution>,
    pub pre_evolutions: Vec<Pokemon>,
}

/// Bar of `width` cells filled in proportion to `value / 255`
pub fn stat_bar(value: u32, width: usize) -> String {
    let filled = ((value as f64 / MAX_STAT_VALUE as f64) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn stat_color(stat: StatKind) -> &'static str {
    match stat {
        StatKind::Hp => FG_RED,
        StatKind::Attack => FG_BRIGHT_RED,
        StatKind::Defense => FG_YELLOW,
        StatKind::SpecialAttack => FG_BLUE,
        StatKind::SpecialDefense => FG_GREEN,
        StatKind::Speed => FG_MAGENTA,
    }
}

pub fn render_detail(
    out: &mut impl Write,
    ctx: &ViewContext,
    detail: &PokemonDetail,
    shiny: bool,
) -> io::Result<()> {
    let t = ctx.translations;
    let pokemon = &detail.pokemon;
    let secondary = match ctx.language {
        Language::Fr => &pokemon.name.en,
        Language::En => &pokemon.name.fr,
    };

    writeln!(
        out,
        "{} {} ({})",
        ctx.palette.dim(&format!("#{}", pokemon.id)),
        ctx.palette.bold(pokemon.name.get(ctx.language)),
        secondary
    )?;

    let mut navigation = Vec::new();
    if let Some(previous) = pokemon.previous_id() {
        navigation.push(format!("< {} #{previous}", t.previous));
    }
    if let Some(next) = pokemon.next_id() {
        navigation.push(format!("{} #{next} >", t.next));
    }
    writeln!(out, "{}", ctx.palette.dim(&navigation.join(" | ")))?;
    writeln!(out)?;

    writeln!(out, "{}: {}", t.generation, pokemon.generation)?;
    writeln!(out, "{}: {} m", t.height, pokemon.height)?;
    writeln!(out, "{}: {} kg", t.weight, pokemon.weight)?;
    let image_label = if shiny { t.shiny } else { t.image };
    writeln!(out, "{}: {}", image_label, pokemon.image_url(shiny))?;
    writeln!(out)?;

    let type_names: Vec<String> = detail
        .types
        .iter()
        .map(|ty| ctx.palette.paint(FG_CYAN, ty.name.get(ctx.language)))
        .collect();
    writeln!(out, "{}: {}", ctx.palette.bold(t.types), type_names.join(", "))?;
    writeln!(out)?;

    writeln!(out, "{}", ctx.palette.bold(t.stats))?;
    for (stat, value) in pokemon.stats.entries() {
        let bar = ctx.palette.paint(stat_color(stat), &stat_bar(value, STAT_BAR_WIDTH));
        writeln!(out, "  {:<10} {} {:>3}", t.stat_label(stat), bar, value)?;
    }
    writeln!(out, "  {:<10} {:>w$}", t.total, pokemon.stats.total(), w = STAT_BAR_WIDTH + 4)?;
    writeln!(out)?;

    render_evolution_sections(out, ctx, detail)
}

fn render_evolution_sections(
    out: &mut impl Write,
    ctx: &ViewContext,
    detail: &PokemonDetail,
) -> io::Result<()> {
    let t = ctx.translations;
    writeln!(out, "{}", ctx.palette.bold(t.evolutions))?;

    if detail.pre_evolutions.is_empty() && detail.evolutions.is_empty() {
        return writeln!(out, "  {}", t.no_evolutions);
    }

    let current = ctx.palette.bold(&node_label(ctx, &detail.pokemon));

    if !detail.pre_evolutions.is_empty() {
        let mut chain: Vec<String> = detail
            .pre_evolutions
            .iter()
            .map(|p| node_label(ctx, p))
            .collect();
        chain.push(current.clone());
        writeln!(out, "  {}", t.pre_evolutions)?;
        writeln!(out, "    {}", chain.join(" → "))?;
    }

    if !detail.evolutions.is_empty() {
        writeln!(out, "  {}", t.next_evolutions)?;
        for evolution in &detail.evolutions {
            writeln!(
                out,
                "    {} {} {}",
                current,
                arrow(Some(&evolution.condition), t),
                node_label(ctx, &evolution.pokemon)
            )?;
        }
    }
    Ok(())
}
