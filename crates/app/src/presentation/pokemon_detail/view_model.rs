use pokepedia_data::PokemonRepository;
use pokepedia_domain::PokemonRef;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use super::state::{PokemonDetailAction, PokemonDetailState};
use crate::presentation::{PokemonUi, UiText};

pub struct PokemonDetailViewModel {
    repository: Arc<dyn PokemonRepository>,
    state: watch::Sender<PokemonDetailState>,
    current: Mutex<Option<PokemonRef>>,
}

impl PokemonDetailViewModel {
    pub fn new(repository: Arc<dyn PokemonRepository>) -> Self {
        let (state, _) = watch::channel(PokemonDetailState::default());
        Self {
            repository,
            state,
            current: Mutex::new(None),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PokemonDetailState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> PokemonDetailState {
        self.state.borrow().clone()
    }

    /// Screen entry point. Re-entering with the id that is already shown or
    /// loading does nothing; after a failure it loads again.
    pub async fn init_with_pokemon_id(&self, id: u32) {
        let target = PokemonRef::Id(id);
        let already_current = self.current_ref().as_ref() == Some(&target);
        let settled_or_loading = {
            let state = self.state.borrow();
            state.is_loading || (state.error_message.is_none() && state.pokemon.is_some())
        };
        if already_current && settled_or_loading {
            tracing::debug!(pokemon_id = id, "Detail already current");
            return;
        }
        self.load(target).await;
    }

    pub async fn handle_action(&self, action: PokemonDetailAction) {
        match action {
            PokemonDetailAction::LoadPokemon(pokemon) => self.load(pokemon).await,
            PokemonDetailAction::Retry => match self.current_ref() {
                Some(pokemon) => self.load(pokemon).await,
                None => tracing::debug!("Retry with nothing requested yet"),
            },
        }
    }

    async fn load(&self, pokemon: PokemonRef) {
        self.set_current(Some(pokemon.clone()));
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error_message = None;
        });

        let result = self.repository.get_pokemon_details(pokemon.clone()).await;

        // A newer request owns the screen now.
        if self.current_ref().as_ref() != Some(&pokemon) {
            tracing::debug!(pokemon = %pokemon, "Dropping stale detail response");
            return;
        }

        self.state.send_modify(|s| {
            s.is_loading = false;
            match result {
                Ok(found) => {
                    s.pokemon = Some(PokemonUi::from(&found));
                }
                Err(e) => {
                    tracing::warn!(pokemon = %pokemon, error = %e, "Failed to load detail");
                    s.error_message = Some(UiText::from(e));
                }
            }
        });
    }

    fn current_ref(&self) -> Option<PokemonRef> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_current(&self, pokemon: Option<PokemonRef>) {
        *self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = pokemon;
    }
}
