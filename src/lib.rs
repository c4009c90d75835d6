//! # Pokédex - Terminal Catalog Viewer
//!
//! Browse a remote Pokémon catalog from the terminal: list, search, detail
//! pages with stat bars, and evolution families, in French or English.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   Command   ┌──────────────┐   queries   ┌───────────────┐
//! │   cmd_args  │────────────▶│     App      │────────────▶│ PokedexClient │
//! │             │             │              │             │               │
//! │ - clap      │             │ - i18n       │◀────────────│ - types cache │
//! └─────────────┘             │ - views      │  plain data │ - pokemon     │
//!                             └──────────────┘             │   cache       │
//!                                                          └───────┬───────┘
//!                                                                  │ GET
//!                                                                  ▼
//!                                                          { success, data }
//! ```

pub mod api;
pub mod app;
pub mod cmd_args;
pub mod config;
pub mod i18n;
pub mod views;

// Re-export main types for easy access
pub use api::{ApiError, ApiResult, PokedexClient, Pokemon, PokemonType, SearchCriteria, TypeFilter};
pub use app::App;
pub use cmd_args::{Command, CommandLineArgs, PokemonQuery};
pub use i18n::{Language, LanguageSettings};
