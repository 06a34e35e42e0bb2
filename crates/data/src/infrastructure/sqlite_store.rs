//! SQLite-backed Pokémon store.

use async_trait::async_trait;
use pokepedia_domain::{
    LocalError, Pokemon, PokemonAbility, PokemonSpecies, PokemonSprites, PokemonStat, PokemonType,
};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Executor, Row, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, PokemonStore};

/// SQLite result code for "database or disk is full".
const SQLITE_FULL: &str = "13";

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, height, weight, base_experience, sort_order,
           front_default, front_shiny, back_default, back_shiny, official_artwork,
           stats_json, types_json, abilities_json, description,
           has_species, species_name, species_url, is_legendary, is_mythical,
           capture_rate, base_happiness, growth_rate, habitat, egg_groups_json,
           gender_rate, generation
    FROM pokemon
"#;

/// SQLite implementation of [`PokemonStore`].
pub struct SqlitePokemonStore {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqlitePokemonStore {
    /// Opens (creating if needed) the database file at `db_path`.
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, LocalError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| local_error("open", e))?;
        Self::with_pool(pool, clock).await
    }

    /// Private in-memory database. One pooled connection so every query sees
    /// the same database.
    pub async fn in_memory(clock: Arc<dyn ClockPort>) -> Result<Self, LocalError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| local_error("open", e))?;
        Self::with_pool(pool, clock).await
    }

    async fn with_pool(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Result<Self, LocalError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS pokemon (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                height INTEGER NOT NULL,
                weight INTEGER NOT NULL,
                base_experience INTEGER NOT NULL,
                sort_order INTEGER NOT NULL,
                front_default TEXT,
                front_shiny TEXT,
                back_default TEXT,
                back_shiny TEXT,
                official_artwork TEXT,
                stats_json TEXT NOT NULL,
                types_json TEXT NOT NULL,
                abilities_json TEXT NOT NULL,
                description TEXT NOT NULL,
                has_species INTEGER NOT NULL,
                species_name TEXT,
                species_url TEXT,
                is_legendary INTEGER NOT NULL,
                is_mythical INTEGER NOT NULL,
                capture_rate INTEGER NOT NULL,
                base_happiness INTEGER NOT NULL,
                growth_rate TEXT,
                habitat TEXT,
                egg_groups_json TEXT NOT NULL,
                gender_rate INTEGER NOT NULL,
                generation TEXT,
                cached_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| local_error("create_table", e))?;

        Ok(Self { pool, clock })
    }

    async fn upsert_with<'e, E>(&self, executor: E, pokemon: &Pokemon) -> Result<(), LocalError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let stats_json = to_json(&pokemon.stats)?;
        let types_json = to_json(&pokemon.types)?;
        let abilities_json = to_json(&pokemon.abilities)?;
        let species = pokemon.species.as_ref();
        let egg_groups_json = to_json(&species.map(|s| s.egg_groups.clone()).unwrap_or_default())?;
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO pokemon (
                id, name, height, weight, base_experience, sort_order,
                front_default, front_shiny, back_default, back_shiny, official_artwork,
                stats_json, types_json, abilities_json, description,
                has_species, species_name, species_url, is_legendary, is_mythical,
                capture_rate, base_happiness, growth_rate, habitat, egg_groups_json,
                gender_rate, generation, cached_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                height = excluded.height,
                weight = excluded.weight,
                base_experience = excluded.base_experience,
                sort_order = excluded.sort_order,
                front_default = excluded.front_default,
                front_shiny = excluded.front_shiny,
                back_default = excluded.back_default,
                back_shiny = excluded.back_shiny,
                official_artwork = excluded.official_artwork,
                stats_json = excluded.stats_json,
                types_json = excluded.types_json,
                abilities_json = excluded.abilities_json,
                description = excluded.description,
                has_species = excluded.has_species,
                species_name = excluded.species_name,
                species_url = excluded.species_url,
                is_legendary = excluded.is_legendary,
                is_mythical = excluded.is_mythical,
                capture_rate = excluded.capture_rate,
                base_happiness = excluded.base_happiness,
                growth_rate = excluded.growth_rate,
                habitat = excluded.habitat,
                egg_groups_json = excluded.egg_groups_json,
                gender_rate = excluded.gender_rate,
                generation = excluded.generation,
                cached_at = excluded.cached_at
            "#,
        )
        .bind(i64::from(pokemon.id))
        .bind(pokemon.name.clone())
        .bind(i64::from(pokemon.height))
        .bind(i64::from(pokemon.weight))
        .bind(i64::from(pokemon.base_experience))
        .bind(pokemon.order)
        .bind(pokemon.sprites.front_default.clone())
        .bind(pokemon.sprites.front_shiny.clone())
        .bind(pokemon.sprites.back_default.clone())
        .bind(pokemon.sprites.back_shiny.clone())
        .bind(pokemon.sprites.official_artwork.clone())
        .bind(stats_json)
        .bind(types_json)
        .bind(abilities_json)
        .bind(pokemon.description.clone())
        .bind(species.is_some())
        .bind(species.map(|s| s.name.clone()))
        .bind(species.map(|s| s.url.clone()))
        .bind(species.is_some_and(|s| s.is_legendary))
        .bind(species.is_some_and(|s| s.is_mythical))
        .bind(species.map_or(0, |s| i64::from(s.capture_rate)))
        .bind(species.map_or(0, |s| i64::from(s.base_happiness)))
        .bind(species.map(|s| s.growth_rate.clone()))
        .bind(species.and_then(|s| s.habitat.clone()))
        .bind(egg_groups_json)
        .bind(species.map_or(0, |s| s.gender_rate))
        .bind(species.map(|s| s.generation.clone()))
        .bind(now)
        .execute(executor)
        .await
        .map_err(|e| local_error("upsert", e))?;

        Ok(())
    }
}

#[async_trait]
impl PokemonStore for SqlitePokemonStore {
    async fn upsert(&self, pokemon: &Pokemon) -> Result<(), LocalError> {
        self.upsert_with(&self.pool, pokemon).await
    }

    async fn upsert_many(&self, pokemon: &[Pokemon]) -> Result<(), LocalError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| local_error("upsert_many", e))?;

        for p in pokemon {
            self.upsert_with(&mut *tx, p).await?;
        }

        tx.commit()
            .await
            .map_err(|e| local_error("upsert_many", e))?;

        tracing::debug!(count = pokemon.len(), "Stored Pokémon batch");
        Ok(())
    }

    async fn get_by_id(&self, id: u32) -> Result<Option<Pokemon>, LocalError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| local_error("get_by_id", e))?;

        row.as_ref().map(row_to_pokemon).transpose()
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Pokemon>, LocalError> {
        let rows = sqlx::query(&format!(
            "{} WHERE instr(LOWER(name), LOWER(?)) > 0 ORDER BY id",
            SELECT_COLUMNS
        ))
        .bind(query)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| local_error("search_by_name", e))?;

        rows.iter().map(row_to_pokemon).collect()
    }

    async fn delete(&self, id: u32) -> Result<(), LocalError> {
        sqlx::query("DELETE FROM pokemon WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(|e| local_error("delete", e))?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), LocalError> {
        sqlx::query("DELETE FROM pokemon")
            .execute(&self.pool)
            .await
            .map_err(|e| local_error("clear", e))?;
        Ok(())
    }
}

fn row_to_pokemon(row: &SqliteRow) -> Result<Pokemon, LocalError> {
    let stats: Vec<PokemonStat> = from_json(row.get("stats_json"))?;
    let types: Vec<PokemonType> = from_json(row.get("types_json"))?;
    let abilities: Vec<PokemonAbility> = from_json(row.get("abilities_json"))?;

    let has_species: bool = row.get("has_species");
    let species = if has_species {
        Some(PokemonSpecies {
            name: row.get::<Option<String>, _>("species_name").unwrap_or_default(),
            url: row.get::<Option<String>, _>("species_url").unwrap_or_default(),
            is_legendary: row.get("is_legendary"),
            is_mythical: row.get("is_mythical"),
            capture_rate: row.get::<i64, _>("capture_rate") as u32,
            base_happiness: row.get::<i64, _>("base_happiness") as u32,
            growth_rate: row.get::<Option<String>, _>("growth_rate").unwrap_or_default(),
            habitat: row.get("habitat"),
            egg_groups: from_json(row.get("egg_groups_json"))?,
            gender_rate: row.get("gender_rate"),
            generation: row.get::<Option<String>, _>("generation").unwrap_or_default(),
        })
    } else {
        None
    };

    Ok(Pokemon {
        id: row.get::<i64, _>("id") as u32,
        name: row.get("name"),
        height: row.get::<i64, _>("height") as u32,
        weight: row.get::<i64, _>("weight") as u32,
        base_experience: row.get::<i64, _>("base_experience") as u32,
        order: row.get("sort_order"),
        sprites: PokemonSprites {
            front_default: row.get("front_default"),
            front_shiny: row.get("front_shiny"),
            back_default: row.get("back_default"),
            back_shiny: row.get("back_shiny"),
            official_artwork: row.get("official_artwork"),
        },
        stats,
        types,
        abilities,
        species,
        description: row.get("description"),
        evolution_chain: Vec::new(),
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, LocalError> {
    serde_json::to_string(value).map_err(|e| {
        tracing::warn!(error = %e, "Failed to encode stored column");
        LocalError::Unknown
    })
}

fn from_json<T: serde::de::DeserializeOwned>(json: String) -> Result<T, LocalError> {
    serde_json::from_str(&json).map_err(|e| {
        tracing::warn!(error = %e, "Failed to decode stored column");
        LocalError::Unknown
    })
}

/// Classifies a driver error and logs it with the failing operation.
fn local_error(operation: &'static str, error: sqlx::Error) -> LocalError {
    let kind = match &error {
        sqlx::Error::Database(db)
            if db.code().as_deref() == Some(SQLITE_FULL)
                || db.message().contains("database or disk is full") =>
        {
            LocalError::DiskFull
        }
        _ => LocalError::Unknown,
    };
    tracing::warn!(operation, error = %error, kind = ?kind, "Pokémon store error");
    kind
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use pokepedia_domain::{StatInfo, TypeInfo};

    async fn store() -> SqlitePokemonStore {
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
        SqlitePokemonStore::in_memory(clock).await.unwrap()
    }

    fn charmander() -> Pokemon {
        let mut pokemon = Pokemon::summary(4, "charmander", "art/4.png");
        pokemon.height = 6;
        pokemon.weight = 85;
        pokemon.stats = vec![PokemonStat {
            base_stat: 39,
            effort: 0,
            stat: StatInfo {
                name: "hp".into(),
                url: "https://pokeapi.co/api/v2/stat/1/".into(),
            },
        }];
        pokemon.types = vec![PokemonType {
            slot: 1,
            r#type: TypeInfo {
                name: "fire".into(),
                url: "https://pokeapi.co/api/v2/type/10/".into(),
            },
        }];
        pokemon.description = "Prefers hot places.".into();
        pokemon.species = Some(PokemonSpecies {
            name: "charmander".into(),
            url: "https://pokeapi.co/api/v2/pokemon-species/4/".into(),
            capture_rate: 45,
            egg_groups: vec!["monster".into(), "dragon".into()],
            gender_rate: 1,
            generation: "generation-i".into(),
            ..PokemonSpecies::default()
        });
        pokemon
    }

    #[tokio::test]
    async fn upsert_then_get_round_trips_record() {
        let store = store().await;
        let pokemon = charmander();

        store.upsert(&pokemon).await.unwrap();
        let loaded = store.get_by_id(4).await.unwrap();

        assert_eq!(loaded, Some(pokemon));
    }

    #[tokio::test]
    async fn upsert_replaces_existing_row() {
        let store = store().await;
        let mut pokemon = charmander();
        store.upsert(&pokemon).await.unwrap();

        pokemon.description = "Updated".into();
        pokemon.species = None;
        store.upsert(&pokemon).await.unwrap();

        let loaded = store.get_by_id(4).await.unwrap().unwrap();
        assert_eq!(loaded.description, "Updated");
        assert!(loaded.species.is_none());
    }

    #[tokio::test]
    async fn missing_id_is_none() {
        let store = store().await;
        assert_eq!(store.get_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring_ordered_by_id() {
        let store = store().await;
        store
            .upsert_many(&[
                Pokemon::summary(26, "raichu", ""),
                Pokemon::summary(25, "pikachu", ""),
                Pokemon::summary(172, "pichu", ""),
                Pokemon::summary(1, "bulbasaur", ""),
            ])
            .await
            .unwrap();

        let hits = store.search_by_name("CHU").await.unwrap();
        let ids: Vec<_> = hits.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![25, 26, 172]);
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let store = store().await;
        store
            .upsert_many(&[
                Pokemon::summary(1, "bulbasaur", ""),
                Pokemon::summary(25, "pikachu", ""),
                Pokemon::summary(122, "mr-mime", ""),
            ])
            .await
            .unwrap();

        assert!(store.search_by_name("%").await.unwrap().is_empty());
        assert!(store.search_by_name("p_k").await.unwrap().is_empty());

        let hits = store.search_by_name("r-m").await.unwrap();
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![122]);
    }

    #[tokio::test]
    async fn delete_and_clear() {
        let store = store().await;
        store
            .upsert_many(&[Pokemon::summary(1, "bulbasaur", ""), charmander()])
            .await
            .unwrap();

        store.delete(1).await.unwrap();
        assert!(store.get_by_id(1).await.unwrap().is_none());
        assert!(store.get_by_id(4).await.unwrap().is_some());

        store.clear().await.unwrap();
        assert!(store.search_by_name("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn file_database_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pokepedia.db");
        let path = path.to_str().unwrap();
        let clock: Arc<dyn ClockPort> = Arc::new(FixedClock(Utc::now()));

        {
            let store = SqlitePokemonStore::new(path, clock.clone()).await.unwrap();
            store.upsert(&charmander()).await.unwrap();
        }

        let reopened = SqlitePokemonStore::new(path, clock).await.unwrap();
        assert_eq!(reopened.get_by_id(4).await.unwrap(), Some(charmander()));
    }
}
