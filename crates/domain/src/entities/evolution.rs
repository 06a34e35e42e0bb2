use serde::{Deserialize, Serialize};

use crate::ids::official_artwork_url;

/// Trigger used when an edge carries no evolution details (the chain root).
pub const DEFAULT_EVOLUTION_TRIGGER: &str = "level-up";

/// One species node of an evolution chain, in depth-first discovery order.
///
/// Trigger, level and item come from the first evolution-detail entry on the
/// edge leading to this node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStage {
    pub pokemon_id: u32,
    pub pokemon_name: String,
    pub min_level: Option<u32>,
    pub trigger: String,
    pub item: Option<String>,
}

impl EvolutionStage {
    pub fn artwork_url(&self) -> String {
        official_artwork_url(self.pokemon_id)
    }
}
