//! # Views
//!
//! Plain-text renderers for the catalog. Every renderer writes to any
//! `std::io::Write` so the same code serves stdout and tests.

pub mod ansi_escape_codes;
pub mod detail_view;
pub mod evolution_view;
pub mod list_view;
pub mod type_view;

pub use ansi_escape_codes::Palette;
pub use detail_view::{render_detail, stat_bar, PokemonDetail, STAT_BAR_WIDTH};
pub use evolution_view::{condition_text, render_chain};
pub use list_view::{pokemon_line, render_pokemon_list};
pub use type_view::{render_generations, render_types};

use crate::i18n::{translations, Language, Translations};

/// Everything a renderer needs besides the data itself
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub language: Language,
    pub translations: &'static Translations,
    pub palette: Palette,
}

impl ViewContext {
    pub fn new(language: Language, palette: Palette) -> Self {
        Self {
            language,
            translations: translations(language),
            palette,
        }
    }

    pub fn plain(language: Language) -> Self {
        Self::new(language, Palette::plain())
    }
}

/// `#025` style identifier
pub fn padded_id(id: u32) -> String {
    format!("#{id:03}")
}
