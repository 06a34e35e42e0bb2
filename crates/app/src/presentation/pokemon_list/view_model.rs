//! List view-model: pagination plus debounced in-memory search.

use pokepedia_data::PokemonRepository;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use super::state::{PokemonListAction, PokemonListState};
use crate::presentation::{PokemonUi, UiText};

/// Tunables for the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSettings {
    pub page_size: u32,
    pub search_debounce: Duration,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            search_debounce: Duration::from_millis(300),
        }
    }
}

/// List and pagination flag captured when a search sequence begins.
#[derive(Debug, Clone)]
struct ListSnapshot {
    pokemon_list: Vec<PokemonUi>,
    can_load_more: bool,
}

impl ListSnapshot {
    fn filter(&self, query: &str) -> Vec<PokemonUi> {
        self.pokemon_list
            .iter()
            .filter(|p| p.matches(query))
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct SearchSession {
    pending: Option<CancellationToken>,
    snapshot: Option<ListSnapshot>,
}

pub struct PokemonListViewModel {
    repository: Arc<dyn PokemonRepository>,
    state: Arc<watch::Sender<PokemonListState>>,
    search: Arc<Mutex<SearchSession>>,
    settings: ListSettings,
}

impl PokemonListViewModel {
    pub fn new(repository: Arc<dyn PokemonRepository>, settings: ListSettings) -> Self {
        let (state, _) = watch::channel(PokemonListState::default());
        Self {
            repository,
            state: Arc::new(state),
            search: Arc::new(Mutex::new(SearchSession::default())),
            settings,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PokemonListState> {
        self.state.subscribe()
    }

    /// Current state snapshot.
    pub fn state(&self) -> PokemonListState {
        self.state.borrow().clone()
    }

    /// Applies an action. Loads resolve before returning; searches only
    /// schedule their debounced filter.
    pub async fn handle_action(&self, action: PokemonListAction) {
        tracing::debug!(?action, "List action");
        match action {
            PokemonListAction::LoadPokemon => self.load_pokemon().await,
            PokemonListAction::LoadNextPage => self.load_next_page().await,
            PokemonListAction::SearchPokemon(query) => self.search_pokemon(&query),
            PokemonListAction::ClearSearch => self.clear_search(),
            PokemonListAction::Retry => self.retry().await,
        }
    }

    async fn load_pokemon(&self) {
        // A reload ends any search, putting the pre-search list back first so
        // a failed fetch leaves a usable screen.
        self.clear_search();
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error_message = None;
        });

        let result = self.repository.get_pokemon(self.settings.page_size, 0).await;

        let mut session = lock(&self.search);
        self.state.send_modify(|s| {
            s.is_loading = false;
            match result {
                Ok(page) => {
                    s.current_offset = page.next_offset();
                    let fresh = page.pokemon.iter().map(PokemonUi::from).collect();
                    apply_page(&mut session, s, fresh, page.has_next_page, PageLanding::Replace);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load first page");
                    s.error_message = Some(UiText::from(e));
                }
            }
        });
    }

    async fn load_next_page(&self) {
        let mut offset = 0;
        let started = self.state.send_if_modified(|s| {
            if s.is_loading || s.is_loading_more || !s.can_load_more {
                return false;
            }
            s.is_loading_more = true;
            s.error_message = None;
            offset = s.current_offset;
            true
        });
        if !started {
            return;
        }

        let result = self
            .repository
            .get_pokemon(self.settings.page_size, offset)
            .await;

        let mut session = lock(&self.search);
        self.state.send_modify(|s| {
            s.is_loading_more = false;
            match result {
                Ok(page) => {
                    s.current_offset = page.next_offset();
                    let fresh = page.pokemon.iter().map(PokemonUi::from).collect();
                    apply_page(&mut session, s, fresh, page.has_next_page, PageLanding::Append);
                }
                Err(e) => {
                    tracing::warn!(offset, error = %e, "Failed to load next page");
                    s.error_message = Some(UiText::from(e));
                }
            }
        });
    }

    fn search_pokemon(&self, query: &str) {
        let query = query.trim().to_string();
        if query.is_empty() {
            self.clear_search();
            return;
        }

        let token = CancellationToken::new();
        {
            let mut session = lock(&self.search);
            if let Some(previous) = session.pending.replace(token.clone()) {
                previous.cancel();
            }
            if session.snapshot.is_none() {
                let current = self.state.borrow();
                session.snapshot = Some(ListSnapshot {
                    pokemon_list: current.pokemon_list.clone(),
                    can_load_more: current.can_load_more,
                });
            }
            self.state.send_modify(|s| {
                s.search_query = query.clone();
                s.is_searching = true;
                s.can_load_more = false;
            });
        }

        let state = Arc::clone(&self.state);
        let search = Arc::clone(&self.search);
        let debounce = self.settings.search_debounce;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(debounce) => {}
            }

            let mut session = lock(&search);
            // Cancellation happens under the same lock, so this check is final.
            if token.is_cancelled() {
                return;
            }
            session.pending = None;

            let filtered = session
                .snapshot
                .as_ref()
                .map(|snapshot| snapshot.filter(&query))
                .unwrap_or_default();

            tracing::debug!(query = %query, hits = filtered.len(), "Search applied");
            state.send_modify(|s| {
                s.pokemon_list = filtered;
                s.is_searching = false;
            });
        });
    }

    fn clear_search(&self) {
        let mut session = lock(&self.search);
        if let Some(pending) = session.pending.take() {
            pending.cancel();
        }
        let snapshot = session.snapshot.take();

        self.state.send_modify(|s| {
            s.search_query.clear();
            s.is_searching = false;
            if let Some(snapshot) = snapshot {
                s.pokemon_list = snapshot.pokemon_list;
                s.can_load_more = snapshot.can_load_more;
            }
        });
    }

    async fn retry(&self) {
        let query = self.state.borrow().search_query.clone();
        if query.is_empty() {
            self.load_pokemon().await;
        } else {
            self.state.send_modify(|s| s.error_message = None);
            self.search_pokemon(&query);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageLanding {
    Replace,
    Append,
}

/// Writes a fetched page into the visible list, or into the search snapshot
/// while a search is active. Pagination stays suspended until the search ends.
fn apply_page(
    session: &mut SearchSession,
    s: &mut PokemonListState,
    fresh: Vec<PokemonUi>,
    has_next_page: bool,
    landing: PageLanding,
) {
    let (list, can_load_more) = match session.snapshot.as_mut() {
        Some(snapshot) => (&mut snapshot.pokemon_list, &mut snapshot.can_load_more),
        None => (&mut s.pokemon_list, &mut s.can_load_more),
    };
    match landing {
        PageLanding::Replace => *list = fresh,
        PageLanding::Append => list.extend(fresh),
    }
    *can_load_more = has_next_page;

    // Filter already applied; a pending one reads the snapshot when it fires.
    if session.pending.is_none() {
        if let Some(snapshot) = &session.snapshot {
            s.pokemon_list = snapshot.filter(&s.search_query);
        }
    }
}

/// Search bookkeeping never panics while locked, so a poisoned lock still
/// holds consistent data.
fn lock(search: &Mutex<SearchSession>) -> MutexGuard<'_, SearchSession> {
    search.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
