use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A saved name list. The `names` field keeps the raw text exactly as the
/// user entered it, so loading a preset reproduces their input verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub names: String,
    pub created_at: String,
}

impl Preset {
    /// Number of names in the stored text.
    pub fn name_count(&self) -> usize {
        crate::roster::parse(&self.names).len()
    }
}

pub struct PresetStore {
    conn: Connection,
}

impl PresetStore {
    /// Open (or create) a preset store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open preset store at {}", path.display()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to create in-memory store")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Default on-disk location under the platform data directory.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::data_dir().context("No data directory available on this platform")?;
        Ok(base.join("teamsplit").join("presets.sqlite"))
    }

    /// Initialize the store schema
    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS presets (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE,
                    names TEXT NOT NULL,
                    created_at TEXT NOT NULL
                );
                "#,
            )
            .context("Failed to initialize preset schema")?;
        Ok(())
    }

    /// Save a preset, replacing any existing preset with the same name.
    pub fn save(&self, name: &str, names: &str) -> Result<Preset> {
        let preset = Preset {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            names: names.to_string(),
            created_at: Utc::now().to_rfc3339(),
        };

        self.conn
            .execute(
                "INSERT OR REPLACE INTO presets (id, name, names, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![preset.id, preset.name, preset.names, preset.created_at],
            )
            .with_context(|| format!("Failed to save preset: {}", preset.name))?;

        Ok(preset)
    }

    /// All presets, newest first.
    pub fn list(&self) -> Result<Vec<Preset>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, names, created_at FROM presets ORDER BY created_at DESC, name",
            )
            .context("Failed to prepare statement")?;

        let presets = stmt
            .query_map([], |row| {
                Ok(Preset {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    names: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })
            .context("Failed to query presets")?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to collect presets")?;

        Ok(presets)
    }

    /// Look up a preset by name.
    pub fn get(&self, name: &str) -> Result<Option<Preset>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, names, created_at FROM presets WHERE name = ?1")
            .context("Failed to prepare statement")?;

        let mut rows = stmt.query(params![name]).context("Failed to query preset")?;

        if let Some(row) = rows.next().context("Failed to get next row")? {
            Ok(Some(Preset {
                id: row.get(0)?,
                name: row.get(1)?,
                names: row.get(2)?,
                created_at: row.get(3)?,
            }))
        } else {
            Ok(None)
        }
    }

    /// Delete a preset by name. Returns whether anything was removed.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM presets WHERE name = ?1", params![name])
            .with_context(|| format!("Failed to delete preset: {}", name))?;

        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_get() {
        let store = PresetStore::open_in_memory().unwrap();
        store.save("class-10a", "Ana\nBudi\nCitra").unwrap();

        let preset = store.get("class-10a").unwrap().unwrap();
        assert_eq!(preset.name, "class-10a");
        assert_eq!(preset.names, "Ana\nBudi\nCitra");
        assert_eq!(preset.name_count(), 3);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = PresetStore::open_in_memory().unwrap();
        assert!(store.get("nope").unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_existing_name() {
        let store = PresetStore::open_in_memory().unwrap();
        store.save("class-10a", "Ana\nBudi").unwrap();
        store.save("class-10a", "Dewi, Eko, Fajar").unwrap();

        let presets = store.list().unwrap();
        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].names, "Dewi, Eko, Fajar");
        assert_eq!(presets[0].name_count(), 3);
    }

    #[test]
    fn test_list_contains_all_saved() {
        let store = PresetStore::open_in_memory().unwrap();
        store.save("one", "Ana\nBudi").unwrap();
        store.save("two", "Citra\nDewi").unwrap();

        let names: Vec<String> = store.list().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"one".to_string()));
        assert!(names.contains(&"two".to_string()));
    }

    #[test]
    fn test_delete() {
        let store = PresetStore::open_in_memory().unwrap();
        store.save("gone", "Ana\nBudi").unwrap();

        assert!(store.delete("gone").unwrap());
        assert!(store.get("gone").unwrap().is_none());
        assert!(!store.delete("gone").unwrap());
    }
}
