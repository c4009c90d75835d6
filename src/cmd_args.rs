use std::convert::Infallible;
use std::ffi::OsString;
use std::str::FromStr;

pub use clap::Parser;
use clap::{Subcommand, ValueEnum};

use crate::api::TypeFilter;
use crate::i18n::Language;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Profile to read the catalog URL and language from. Default is 'default'.
    /// If the profile is not configured, the public catalog is used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Verbose mode
    /// Optional. Print verbose messages.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    #[clap(short = 'l', long, value_enum, help = "UI language for this run")]
    lang: Option<Language>,

    #[clap(long, help = "Catalog base URL, overrides the profile")]
    base_url: Option<String>,

    #[clap(long, value_enum, default_value_t = ColorMode::Auto, help = "When to use colors")]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// A pokemon given on the command line, by id or by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokemonQuery {
    Id(u32),
    Name(String),
}

impl FromStr for PokemonQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        Ok(match trimmed.parse::<u32>() {
            Ok(id) => PokemonQuery::Id(id),
            Err(_) => PokemonQuery::Name(s.trim().to_string()),
        })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List every pokemon
    List,
    /// Show the detail page of one pokemon
    Show {
        /// Id (e.g. 25) or French/English name
        query: PokemonQuery,
        #[clap(long, help = "Show the shiny image")]
        shiny: bool,
    },
    /// Filter pokemon by name, type and generation
    Search {
        #[clap(short = 'n', long, help = "Part of a French or English name")]
        name: Option<String>,
        #[clap(short = 't', long = "type", help = "Type id or name")]
        type_filter: Option<TypeFilter>,
        #[clap(short = 'g', long, help = "Generation number")]
        generation: Option<u32>,
    },
    /// List every type
    Types,
    /// List the generations present in the catalog
    Generations,
    /// Show the full evolution family of one pokemon
    Tree {
        query: PokemonQuery,
    },
    /// Print or persist the UI language
    Lang {
        #[clap(value_enum)]
        language: Option<Language>,
    },
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    verbose: bool,
    lang: Option<Language>,
    base_url: Option<String>,
    color: ColorMode,
    command: Command,
}

impl CommandLineArgs {
    fn from_clap(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            verbose: args.verbose,
            lang: args.lang,
            base_url: args.base_url,
            color: args.color,
            command: args.command,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Self::from_clap)
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn lang(&self) -> Option<Language> {
        self.lang
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn color(&self) -> ColorMode {
        self.color
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}
