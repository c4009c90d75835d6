//! # Application Controller
//!
//! Wires the profile, the language settings and the shared catalog client
//! together, then executes one command and renders its result.

use crate::api::{ApiResult, PokedexClient, Pokemon, SearchCriteria};
use crate::cmd_args::{ColorMode, Command, CommandLineArgs, PokemonQuery};
use crate::config::{self, IniProfileStore};
use crate::i18n::{IniPreferenceStore, Language, LanguageSettings, PreferenceStore, Translations};
use crate::views::{self, Palette, PokemonDetail, ViewContext};
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

pub struct App<S: PreferenceStore> {
    client: Arc<PokedexClient>,
    settings: LanguageSettings<S>,
    palette: Palette,
    verbose: bool,
}

impl App<IniPreferenceStore> {
    /// Build the application from command line arguments, the profile file
    /// and the persisted preferences
    pub fn from_args(cmd_args: &CommandLineArgs) -> Result<Self> {
        let profile_path = config::get_profile_path();
        tracing::debug!("Loading profile '{}' from '{}'", cmd_args.profile(), profile_path);
        let profile = IniProfileStore::new(&profile_path).get_profile_or_blank(cmd_args.profile())?;

        let base_url = cmd_args.base_url().unwrap_or(profile.base_url());
        let client = Arc::new(PokedexClient::new(base_url)?);

        let store = IniPreferenceStore::new(config::expand_path(&config::get_preferences_path()));
        let mut settings = LanguageSettings::load(store, profile.language().unwrap_or_default());
        if let Some(language) = cmd_args.lang() {
            settings.set_session_language(language);
        }

        let palette = Palette::new(match cmd_args.color() {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => atty::is(atty::Stream::Stdout),
        });

        Ok(Self::new(client, settings, palette, cmd_args.verbose()))
    }
}

impl<S: PreferenceStore> App<S> {
    pub fn new(
        client: Arc<PokedexClient>,
        settings: LanguageSettings<S>,
        palette: Palette,
        verbose: bool,
    ) -> Self {
        Self {
            client,
            settings,
            palette,
            verbose,
        }
    }

    pub fn client(&self) -> &Arc<PokedexClient> {
        &self.client
    }

    pub fn language(&self) -> Language {
        self.settings.language()
    }

    pub fn translations(&self) -> &'static Translations {
        self.settings.translations()
    }

    fn view_context(&self) -> ViewContext {
        ViewContext::new(self.settings.language(), self.palette)
    }

    /// Execute `command`, writing its rendered output to `out`
    pub async fn run(&mut self, command: &Command, out: &mut impl Write) -> Result<()> {
        tracing::debug!("Running command: {:?}", command);

        if self.verbose {
            writeln!(out, "Catalog: {}", self.client.base_url())?;
            writeln!(out, "{}: {}", self.translations().language, self.language())?;
            writeln!(out)?;
        }

        match command {
            Command::List => self.list(out).await,
            Command::Show { query, shiny } => self.show(query, *shiny, out).await,
            Command::Search {
                name,
                type_filter,
                generation,
            } => {
                let criteria = SearchCriteria {
                    name: name.clone(),
                    type_filter: type_filter.clone(),
                    generation: *generation,
                };
                self.search(&criteria, out).await
            }
            Command::Types => {
                let types = self.client.get_types().await?;
                views::render_types(out, &self.view_context(), &types)?;
                Ok(())
            }
            Command::Generations => {
                let generations = self.client.get_generations().await?;
                views::render_generations(out, &self.view_context(), &generations)?;
                Ok(())
            }
            Command::Tree { query } => self.tree(query, out).await,
            Command::Lang { language } => self.lang(*language, out),
        }
    }

    async fn list(&self, out: &mut impl Write) -> Result<()> {
        let pokemon = self.client.get_all_pokemon().await?;
        let types = self.client.get_types().await?;
        views::render_pokemon_list(out, &self.view_context(), &pokemon, &types)?;
        Ok(())
    }

    async fn search(&self, criteria: &SearchCriteria, out: &mut impl Write) -> Result<()> {
        let results = self.client.search_pokemon(criteria).await?;
        let types = self.client.get_types().await?;
        views::render_pokemon_list(out, &self.view_context(), &results, &types)?;
        Ok(())
    }

    async fn show(&self, query: &PokemonQuery, shiny: bool, out: &mut impl Write) -> Result<()> {
        let Some(pokemon) = self.find_pokemon(query).await? else {
            writeln!(out, "{}", self.translations().not_found)?;
            return Ok(());
        };

        let detail = self.load_detail(pokemon).await?;
        views::render_detail(out, &self.view_context(), &detail, shiny)?;
        Ok(())
    }

    async fn tree(&self, query: &PokemonQuery, out: &mut impl Write) -> Result<()> {
        let Some(pokemon) = self.find_pokemon(query).await? else {
            writeln!(out, "{}", self.translations().not_found)?;
            return Ok(());
        };

        let chain = self.client.get_evolution_chain(&pokemon).await?;
        views::render_chain(out, &self.view_context(), &chain, Some(&pokemon))?;
        Ok(())
    }

    fn lang(&mut self, language: Option<Language>, out: &mut impl Write) -> Result<()> {
        match language {
            Some(language) => {
                self.settings.change_language(language)?;
                let t = self.translations();
                writeln!(out, "{}: {}", t.language_saved, t.language_name(language))?;
            }
            None => {
                let t = self.translations();
                writeln!(out, "{}: {}", t.language, t.language_name(self.language()))?;
            }
        }
        Ok(())
    }

    pub async fn find_pokemon(&self, query: &PokemonQuery) -> ApiResult<Option<Pokemon>> {
        match query {
            PokemonQuery::Id(id) => self.client.get_pokemon_by_id(*id).await,
            PokemonQuery::Name(name) => self.client.get_pokemon_by_name(name).await,
        }
    }

    /// Gather everything the detail page shows for `pokemon`
    pub async fn load_detail(&self, pokemon: Pokemon) -> ApiResult<PokemonDetail> {
        let types = self.client.get_pokemon_types_details(&pokemon).await?;
        let evolutions = self.client.get_pokemon_evolutions(&pokemon).await?;
        let pre_evolutions = self.client.get_pokemon_pre_evolutions(&pokemon).await?;

        Ok(PokemonDetail {
            pokemon,
            types,
            evolutions,
            pre_evolutions,
        })
    }
}
