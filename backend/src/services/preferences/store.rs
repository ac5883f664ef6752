//! SQLite persistence for [`Preferences`].
//!
//! Preferences are stored as a key-value table, one row per top-level field
//! (`interfaceLanguage`, `favorites`, ...) holding its JSON value. Rows with
//! unknown keys are ignored on load and missing keys take their defaults, so
//! the table survives fields being added or removed.
//!
//! These functions block; handlers call them through `web::block`.

use common::model::preferences::Preferences;
use rusqlite::{params, Connection, TransactionBehavior};
use serde_json::{Map, Value};
use std::path::Path;
use std::time::Duration;

const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS preferences (key TEXT PRIMARY KEY, value TEXT NOT NULL)";

/// Concurrent writers wait this long for the database lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

fn open(path: &Path) -> Result<Connection, String> {
    let conn = Connection::open(path).map_err(|e| e.to_string())?;
    conn.busy_timeout(BUSY_TIMEOUT).map_err(|e| e.to_string())?;
    conn.execute(CREATE_TABLE, []).map_err(|e| e.to_string())?;
    Ok(conn)
}

pub fn load(path: &Path) -> Result<Preferences, String> {
    read(&open(path)?)
}

fn read(conn: &Connection) -> Result<Preferences, String> {
    let mut stmt = conn
        .prepare("SELECT key, value FROM preferences")
        .map_err(|e| e.to_string())?;
    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
        .map_err(|e| e.to_string())?;

    let mut fields = Map::new();
    for row in rows {
        let (key, value) = row.map_err(|e| e.to_string())?;
        match serde_json::from_str::<Value>(&value) {
            Ok(value) => {
                fields.insert(key, value);
            }
            Err(e) => log::warn!("Ignoring unreadable preference {}: {}", key, e),
        }
    }

    serde_json::from_value(Value::Object(fields)).map_err(|e| e.to_string())
}

pub fn save(path: &Path, preferences: &Preferences) -> Result<(), String> {
    let mut conn = open(path)?;
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| e.to_string())?;
    write(&tx, preferences)?;
    tx.commit().map_err(|e| e.to_string())
}

fn write(conn: &Connection, preferences: &Preferences) -> Result<(), String> {
    let Value::Object(fields) = serde_json::to_value(preferences).map_err(|e| e.to_string())?
    else {
        return Err("Preferences must serialize to an object".to_string());
    };
    for (key, value) in &fields {
        conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
            params![key, value.to_string()],
        )
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Flips `template_id` in the stored favorites and returns the updated
/// preferences. The read and the write share one immediate transaction, so
/// a concurrent save or toggle cannot slip in between.
pub fn toggle_favorite(path: &Path, template_id: &str) -> Result<Preferences, String> {
    let mut conn = open(path)?;
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| e.to_string())?;
    let mut preferences = read(&tx)?;
    preferences.toggle_favorite(template_id);
    write(&tx, &preferences)?;
    tx.commit().map_err(|e| e.to_string())?;
    Ok(preferences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::template::Language;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_database_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = load(&dir.path().join("prefs.sqlite")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn save_then_load_restores_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.sqlite");
        let mut prefs = Preferences {
            interface_language: Language::En,
            search_query: "devis".into(),
            favorites_only: true,
            ..Preferences::default()
        };
        prefs.variables.set("ClientName", "Mme Roy");
        prefs.toggle_favorite("quote_follow_up");

        save(&path, &prefs).unwrap();
        assert_eq!(load(&path).unwrap(), prefs);
    }

    #[test]
    fn unknown_and_corrupt_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.sqlite");
        let conn = open(&path).unwrap();
        conn.execute(
            "INSERT INTO preferences (key, value) VALUES ('legacyTheme', '\"dark\"'), ('searchQuery', '{oops')",
            [],
        )
            .unwrap();
        drop(conn);

        assert_eq!(load(&path).unwrap(), Preferences::default());
    }

    #[test]
    fn toggle_favorite_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.sqlite");
        assert_eq!(toggle_favorite(&path, "a").unwrap().favorites, vec!["a"]);
        assert!(toggle_favorite(&path, "a").unwrap().favorites.is_empty());
        assert!(load(&path).unwrap().favorites.is_empty());
    }

    #[test]
    fn concurrent_toggles_keep_every_favorite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.sqlite");
        load(&path).unwrap();

        let ids: Vec<String> = (0..8).map(|i| format!("template_{}", i)).collect();
        std::thread::scope(|scope| {
            for id in &ids {
                let path = &path;
                scope.spawn(move || toggle_favorite(path, id).unwrap());
            }
        });

        let mut favorites = load(&path).unwrap().favorites;
        favorites.sort();
        assert_eq!(favorites, ids);
    }
}
