//! Composition root and the command-line front end over the view-models.

use pokepedia_data::{
    ClockPort, DefaultPokemonRepository, PokeApiClient, PokemonRepository, SqlitePokemonStore,
    SystemClock,
};
use pokepedia_domain::{official_artwork_url, LocalError, PokemonRef};
use std::io::Write;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::infrastructure::platform::DesktopUrlLauncher;
use crate::ports::outbound::UrlLauncher;
use crate::presentation::{
    ListSettings, PokemonDetailAction, PokemonDetailViewModel, PokemonListAction,
    PokemonListViewModel, PokemonUi, UiText,
};

/// One invocation of the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List { pages: u32 },
    Detail(PokemonRef),
    Search { query: String, pages: u32 },
    Artwork(u32),
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to prepare data directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to open local store: {0}")]
    Store(#[from] LocalError),

    #[error("{0}")]
    Failed(UiText),
}

/// Wired view-models and platform services.
pub struct Services {
    pub list: PokemonListViewModel,
    pub detail: PokemonDetailViewModel,
    pub launcher: Arc<dyn UrlLauncher>,
}

impl Services {
    pub fn new(
        repository: Arc<dyn PokemonRepository>,
        launcher: Arc<dyn UrlLauncher>,
        settings: ListSettings,
    ) -> Self {
        Self {
            list: PokemonListViewModel::new(Arc::clone(&repository), settings),
            detail: PokemonDetailViewModel::new(repository),
            launcher,
        }
    }

    /// Production wiring: PokeAPI over HTTP, SQLite on disk, desktop launcher.
    pub async fn from_config(config: &AppConfig) -> Result<Self, RunError> {
        if let Some(parent) = config.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let db_path = config.db_path.to_string_lossy();
        let store = SqlitePokemonStore::new(&db_path, clock).await?;
        let remote = PokeApiClient::with_timeout(&config.api_base_url, config.request_timeout);

        tracing::info!(
            api = %config.api_base_url,
            db = %db_path,
            page_size = config.page_size,
            "Services ready"
        );

        Ok(Self::new(
            Arc::new(DefaultPokemonRepository::new(Arc::new(remote), Arc::new(store))),
            Arc::new(DesktopUrlLauncher::new()),
            config.list_settings(),
        ))
    }
}

pub async fn run(services: &Services, command: Command, out: &mut impl Write) -> Result<(), RunError> {
    match command {
        Command::List { pages } => {
            load_pages(&services.list, pages).await?;
            write_list(out, &services.list.state().pokemon_list)?;
        }
        Command::Search { query, pages } => {
            load_pages(&services.list, pages).await?;
            let mut updates = services.list.subscribe();
            services
                .list
                .handle_action(PokemonListAction::SearchPokemon(query.clone()))
                .await;
            // Only fails once the sender drops; `services.list` owns it and
            // outlives this borrow.
            let _ = updates.wait_for(|s| !s.is_searching).await;

            let hits = services.list.state().pokemon_list;
            if hits.is_empty() {
                writeln!(out, "No Pokémon matching \"{}\"", query)?;
            }
            write_list(out, &hits)?;
        }
        Command::Detail(pokemon) => {
            services
                .detail
                .handle_action(PokemonDetailAction::LoadPokemon(pokemon))
                .await;
            let state = services.detail.state();
            if let Some(error) = state.error_message {
                return Err(RunError::Failed(error));
            }
            if let Some(pokemon) = state.pokemon {
                write_detail(out, &pokemon)?;
            }
        }
        Command::Artwork(id) => {
            let url = official_artwork_url(id);
            if !services.launcher.open_url(&url) {
                return Err(RunError::Failed(UiText::Dynamic(format!(
                    "Couldn't open {}",
                    url
                ))));
            }
            writeln!(out, "Opened {}", url)?;
        }
    }
    Ok(())
}

async fn load_pages(list: &PokemonListViewModel, pages: u32) -> Result<(), RunError> {
    list.handle_action(PokemonListAction::LoadPokemon).await;
    for _ in 1..pages {
        if !list.state().can_load_more {
            break;
        }
        list.handle_action(PokemonListAction::LoadNextPage).await;
    }

    match list.state().error_message {
        Some(error) => Err(RunError::Failed(error)),
        None => Ok(()),
    }
}

fn write_list(out: &mut impl Write, pokemon: &[PokemonUi]) -> std::io::Result<()> {
    for p in pokemon {
        writeln!(out, "{} {}", p.number, p.formatted_name)?;
    }
    Ok(())
}

fn write_detail(out: &mut impl Write, pokemon: &PokemonUi) -> std::io::Result<()> {
    writeln!(out, "{} {}", pokemon.number, pokemon.formatted_name)?;

    let types: Vec<_> = pokemon.types.iter().map(|t| t.display_name.as_str()).collect();
    writeln!(out, "Types: {}", types.join(" / "))?;
    writeln!(out, "Height: {}  Weight: {}", pokemon.height, pokemon.weight)?;

    if pokemon.is_legendary {
        writeln!(out, "Legendary")?;
    } else if pokemon.is_mythical {
        writeln!(out, "Mythical")?;
    }

    if !pokemon.description.is_empty() {
        writeln!(out, "{}", pokemon.description)?;
    }

    for stat in &pokemon.stats {
        writeln!(out, "  {:<12}{:>4}", stat.display_name, stat.value)?;
    }

    for ability in &pokemon.abilities {
        let hidden = if ability.is_hidden { " (hidden)" } else { "" };
        writeln!(out, "Ability: {}{}", ability.display_name, hidden)?;
    }

    if let Some(species) = &pokemon.species {
        writeln!(out, "{}  {}", species.generation, species.gender_ratio)?;
    }

    if !pokemon.evolution_chain.is_empty() {
        let chain: Vec<_> = pokemon
            .evolution_chain
            .iter()
            .map(|stage| match stage.min_level {
                Some(level) => format!("{} (Lv. {})", stage.name, level),
                None => stage.name.clone(),
            })
            .collect();
        writeln!(out, "Evolution: {}", chain.join(" → "))?;
    }

    Ok(())
}
