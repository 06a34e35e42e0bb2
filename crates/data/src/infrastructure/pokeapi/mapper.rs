//! DTO → domain conversions.

use pokepedia_domain::common::normalize_whitespace;
use pokepedia_domain::{
    official_artwork_url, pokemon_id_from_url, AbilityInfo, EvolutionStage, PaginatedPokemon,
    Pokemon, PokemonAbility, PokemonSpecies, PokemonSprites, PokemonStat, PokemonType,
    RemoteError, StatInfo, TypeInfo, DEFAULT_EVOLUTION_TRIGGER,
};

use super::dto::{
    ChainLinkDto, FlavorTextDto, NamedResourceDto, PokemonDetailDto, PokemonListResponse,
    PokemonSpeciesDto,
};

const ENGLISH: &str = "en";

/// Builds one list page.
///
/// An entry whose URL carries no numeric id fails the whole page, so the
/// page size always matches the number of records returned.
pub fn to_paginated(
    response: PokemonListResponse,
    limit: u32,
    offset: u32,
) -> Result<PaginatedPokemon, RemoteError> {
    let pokemon = response
        .results
        .iter()
        .map(basic_entry_to_pokemon)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PaginatedPokemon {
        pokemon,
        offset,
        limit,
        has_next_page: response.next.is_some(),
        total_count: Some(response.count),
    })
}

fn basic_entry_to_pokemon(entry: &NamedResourceDto) -> Result<Pokemon, RemoteError> {
    let id = pokemon_id_from_url(&entry.url).ok_or_else(|| {
        tracing::warn!(name = %entry.name, url = %entry.url, "List entry has no id in its URL");
        RemoteError::Serialization
    })?;
    Ok(Pokemon::summary(id, entry.name.clone(), official_artwork_url(id)))
}

/// Detail record without species data.
pub fn detail_to_pokemon(dto: PokemonDetailDto) -> Pokemon {
    let sprites = PokemonSprites {
        front_default: dto.sprites.front_default,
        front_shiny: dto.sprites.front_shiny,
        back_default: dto.sprites.back_default,
        back_shiny: dto.sprites.back_shiny,
        official_artwork: dto.sprites.other.official_artwork.front_default,
    };

    Pokemon {
        id: dto.id,
        name: dto.name,
        height: dto.height,
        weight: dto.weight,
        base_experience: dto.base_experience.unwrap_or(0),
        order: dto.order,
        sprites,
        stats: dto
            .stats
            .into_iter()
            .map(|s| PokemonStat {
                base_stat: s.base_stat,
                effort: s.effort,
                stat: StatInfo {
                    name: s.stat.name,
                    url: s.stat.url,
                },
            })
            .collect(),
        types: dto
            .types
            .into_iter()
            .map(|t| PokemonType {
                slot: t.slot,
                r#type: TypeInfo {
                    name: t.type_ref.name,
                    url: t.type_ref.url,
                },
            })
            .collect(),
        abilities: dto
            .abilities
            .into_iter()
            .map(|a| PokemonAbility {
                is_hidden: a.is_hidden,
                slot: a.slot,
                ability: AbilityInfo {
                    name: a.ability.name,
                    url: a.ability.url,
                },
            })
            .collect(),
        species: None,
        description: String::new(),
        evolution_chain: Vec::new(),
    }
}

pub fn species_to_domain(dto: &PokemonSpeciesDto, species_url: &str) -> PokemonSpecies {
    PokemonSpecies {
        name: dto.name.clone(),
        url: species_url.to_string(),
        is_legendary: dto.is_legendary,
        is_mythical: dto.is_mythical,
        capture_rate: dto.capture_rate,
        base_happiness: dto.base_happiness,
        growth_rate: dto.growth_rate.name.clone(),
        habitat: dto.habitat.as_ref().map(|h| h.name.clone()),
        egg_groups: dto.egg_groups.iter().map(|g| g.name.clone()).collect(),
        gender_rate: dto.gender_rate,
        generation: dto.generation.name.clone(),
    }
}

/// First English flavor text with line breaks and whitespace runs collapsed.
pub fn english_description(entries: &[FlavorTextDto]) -> String {
    entries
        .iter()
        .find(|e| e.language.name == ENGLISH)
        .map(|e| normalize_whitespace(&e.flavor_text))
        .unwrap_or_default()
}

/// Evolution-chain id from the species' chain reference, if any.
pub fn evolution_chain_id(dto: &PokemonSpeciesDto) -> Option<u32> {
    dto.evolution_chain
        .as_ref()
        .and_then(|chain| pokemon_id_from_url(&chain.url))
}

/// Flattens the chain tree depth-first: parent before children, siblings in
/// listed order. Nodes whose species URL has no id are skipped.
pub fn to_evolution_stages(root: &ChainLinkDto) -> Vec<EvolutionStage> {
    let mut stages = Vec::new();
    let mut pending = vec![root];

    while let Some(link) = pending.pop() {
        if let Some(stage) = link_to_stage(link) {
            stages.push(stage);
        }
        pending.extend(link.evolves_to.iter().rev());
    }

    stages
}

fn link_to_stage(link: &ChainLinkDto) -> Option<EvolutionStage> {
    let pokemon_id = pokemon_id_from_url(&link.species.url)?;
    // Alternate conditions on the same edge are ignored.
    let detail = link.evolution_details.first();

    Some(EvolutionStage {
        pokemon_id,
        pokemon_name: link.species.name.clone(),
        min_level: detail.and_then(|d| d.min_level),
        trigger: detail
            .map(|d| d.trigger.name.clone())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_EVOLUTION_TRIGGER.to_string()),
        item: detail.and_then(|d| d.item.as_ref().map(|i| i.name.clone())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::pokeapi::dto::EvolutionChainDto;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn species_ref(name: &str, id: u32) -> serde_json::Value {
        json!({ "name": name, "url": format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id) })
    }

    #[test]
    fn page_reports_cursor_and_total() {
        let results: Vec<_> = (1..=20)
            .map(|id| {
                json!({ "name": format!("p{}", id), "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", id) })
            })
            .collect();
        let response: PokemonListResponse = serde_json::from_value(json!({
            "count": 1000,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "results": results
        }))
        .unwrap();

        let page = to_paginated(response, 20, 0).unwrap();

        assert_eq!(page.pokemon.len(), 20);
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, 20);
        assert!(page.has_next_page);
        assert_eq!(page.total_count, Some(1000));
        assert_eq!(page.next_offset(), 20);
        assert_eq!(
            page.pokemon[0].sprites.official_artwork.as_deref(),
            Some(official_artwork_url(1).as_str())
        );
    }

    #[test]
    fn last_page_has_no_next() {
        let response: PokemonListResponse = serde_json::from_value(json!({
            "count": 21,
            "next": null,
            "results": [{ "name": "spearow", "url": "https://pokeapi.co/api/v2/pokemon/21/" }]
        }))
        .unwrap();

        let page = to_paginated(response, 20, 20).unwrap();
        assert!(!page.has_next_page);
        assert_eq!(page.next_offset(), 21);
    }

    #[test]
    fn entry_without_id_fails_page() {
        let response: PokemonListResponse = serde_json::from_value(json!({
            "count": 1,
            "results": [{ "name": "missingno", "url": "https://pokeapi.co/api/v2/pokemon/" }]
        }))
        .unwrap();

        assert_eq!(
            to_paginated(response, 20, 0).unwrap_err(),
            RemoteError::Serialization
        );
    }

    #[test]
    fn detail_maps_nested_records() {
        let dto: PokemonDetailDto = serde_json::from_value(json!({
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "base_experience": 267,
            "order": 7,
            "sprites": {
                "front_default": "front.png",
                "other": { "official-artwork": { "front_default": "art.png" } }
            },
            "stats": [{ "base_stat": 78, "effort": 0, "stat": { "name": "hp", "url": "" } }],
            "types": [
                { "slot": 1, "type": { "name": "fire", "url": "" } },
                { "slot": 2, "type": { "name": "flying", "url": "" } }
            ],
            "abilities": [{ "is_hidden": true, "slot": 3, "ability": { "name": "solar-power", "url": "" } }],
            "species": { "name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon-species/6/" }
        }))
        .unwrap();

        let pokemon = detail_to_pokemon(dto);

        assert_eq!(pokemon.base_experience, 267);
        assert_eq!(pokemon.sprites.primary_image(), Some("art.png"));
        assert_eq!(pokemon.stats[0].stat.display_name(), "HP");
        assert_eq!(pokemon.primary_type().map(|t| t.r#type.name.as_str()), Some("fire"));
        assert!(pokemon.abilities[0].is_hidden);
        assert!(pokemon.species.is_none());
    }

    #[test]
    fn description_is_first_english_entry_normalized() {
        let species: PokemonSpeciesDto = serde_json::from_value(json!({
            "flavor_text_entries": [
                { "flavor_text": "Une graine", "language": { "name": "fr", "url": "" } },
                { "flavor_text": "A strange seed was\nplanted on its\u{000c}back  at birth.", "language": { "name": "en", "url": "" } },
                { "flavor_text": "Second  english\ntext.", "language": { "name": "en", "url": "" } }
            ]
        }))
        .unwrap();

        assert_eq!(
            english_description(&species.flavor_text_entries),
            "A strange seed was planted on its back at birth."
        );
    }

    #[test]
    fn description_is_empty_without_english() {
        assert_eq!(english_description(&[]), "");
    }

    #[test]
    fn branching_chain_is_flattened_depth_first() {
        let chain: EvolutionChainDto = serde_json::from_value(json!({
            "id": 67,
            "chain": {
                "species": species_ref("eevee", 133),
                "evolution_details": [],
                "evolves_to": [
                    {
                        "species": species_ref("vaporeon", 134),
                        "evolution_details": [
                            { "trigger": { "name": "use-item", "url": "" }, "item": { "name": "water-stone", "url": "" } }
                        ],
                        "evolves_to": []
                    },
                    {
                        "species": species_ref("espeon", 196),
                        "evolution_details": [
                            { "min_happiness": 160, "time_of_day": "day", "trigger": { "name": "level-up", "url": "" } },
                            { "trigger": { "name": "use-item", "url": "" }, "item": { "name": "sun-stone", "url": "" } }
                        ],
                        "evolves_to": []
                    }
                ]
            }
        }))
        .unwrap();

        let stages = to_evolution_stages(&chain.chain);
        let names: Vec<_> = stages.iter().map(|s| s.pokemon_name.as_str()).collect();

        assert_eq!(names, vec!["eevee", "vaporeon", "espeon"]);
        assert_eq!(stages[0].trigger, DEFAULT_EVOLUTION_TRIGGER);
        assert_eq!(stages[1].item.as_deref(), Some("water-stone"));
        assert_eq!(stages[2].trigger, "level-up");
        assert_eq!(stages[2].item, None);
    }

    #[test]
    fn linear_chain_keeps_parent_before_child() {
        let chain: EvolutionChainDto = serde_json::from_value(json!({
            "chain": {
                "species": species_ref("bulbasaur", 1),
                "evolves_to": [{
                    "species": species_ref("ivysaur", 2),
                    "evolution_details": [{ "min_level": 16, "trigger": { "name": "level-up", "url": "" } }],
                    "evolves_to": [{
                        "species": species_ref("venusaur", 3),
                        "evolution_details": [{ "min_level": 32, "trigger": { "name": "level-up", "url": "" } }],
                        "evolves_to": []
                    }]
                }]
            }
        }))
        .unwrap();

        let stages = to_evolution_stages(&chain.chain);
        let ids: Vec<_> = stages.iter().map(|s| (s.pokemon_id, s.min_level)).collect();

        assert_eq!(ids, vec![(1, None), (2, Some(16)), (3, Some(32))]);
    }

    #[test]
    fn chain_id_comes_from_species_reference() {
        let species: PokemonSpeciesDto = serde_json::from_value(json!({
            "evolution_chain": { "url": "https://pokeapi.co/api/v2/evolution-chain/67/" }
        }))
        .unwrap();
        assert_eq!(evolution_chain_id(&species), Some(67));
        assert_eq!(evolution_chain_id(&PokemonSpeciesDto::default()), None);
    }
}
