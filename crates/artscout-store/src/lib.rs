use anyhow::{Context, Result};
use artscout_model::{Artist, ExhibitionHistory, StoredArtist};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_PATH: &str = "database/art_data.db";

// artworks and analyses are created for later use; nothing writes to them yet.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS artists (
        artist_id              INTEGER PRIMARY KEY AUTOINCREMENT,
        name                   TEXT UNIQUE NOT NULL,
        education              TEXT,
        art_style              TEXT,
        gallery_representation TEXT,
        exhibition_history     TEXT,
        website                TEXT,
        data_collected_date    TEXT,
        raw_data               TEXT
    );

    CREATE TABLE IF NOT EXISTS artworks (
        artwork_id    INTEGER PRIMARY KEY AUTOINCREMENT,
        artist_id     INTEGER REFERENCES artists(artist_id),
        title         TEXT,
        year          INTEGER,
        medium        TEXT,
        dimensions    TEXT,
        price         REAL,
        source        TEXT,
        analysis_date TEXT
    );

    CREATE TABLE IF NOT EXISTS analyses (
        analysis_id      INTEGER PRIMARY KEY AUTOINCREMENT,
        artwork_id       INTEGER REFERENCES artworks(artwork_id),
        recommendation   TEXT,
        reasoning        TEXT,
        confidence_score REAL,
        analysis_date    TEXT
    );
";

const ARTIST_COLUMNS: &str = "artist_id, name, education, art_style, gallery_representation, \
                              exhibition_history, website, data_collected_date, raw_data";

/// Handle to the artist database file.
///
/// Holds only the path: every operation opens its own connection and
/// closes it when done.
#[derive(Debug, Clone)]
pub struct ArtStore {
    path: PathBuf,
}

impl ArtStore {
    /// Open (creating if needed) the database at `path` and make sure all
    /// tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let store = Self { path };
        let conn = store.connect()?;
        conn.execute_batch(SCHEMA).context("Failed to create tables")?;
        tracing::debug!(path = %store.path.display(), "Opened artist database");
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)
            .with_context(|| format!("Failed to open database {}", self.path.display()))?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(conn)
    }

    /// Insert or replace the artist keyed by name. All previous fields for
    /// that name are discarded. Returns the new row id.
    pub fn add_artist(&self, artist: &Artist) -> Result<i64> {
        let conn = self.connect()?;
        let exhibition_history = artist.exhibition_history.as_ref().map(|h| h.to_column());
        let raw_data = (!artist.raw_data.is_null()).then(|| artist.raw_data.to_string());
        let collected = chrono::Utc::now().to_rfc3339();

        conn.execute(
            "INSERT OR REPLACE INTO artists
                 (name, education, art_style, gallery_representation,
                  exhibition_history, website, data_collected_date, raw_data)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                artist.name,
                artist.education,
                artist.art_style,
                artist.gallery_representation,
                exhibition_history,
                artist.website,
                collected,
                raw_data,
            ],
        )
        .with_context(|| format!("Failed to save artist '{}'", artist.name))?;

        let artist_id = conn.last_insert_rowid();
        tracing::info!(artist = %artist.name, artist_id, "Saved artist");
        Ok(artist_id)
    }

    /// Look up one artist by exact name. A missing name is `Ok(None)`.
    pub fn get_artist(&self, name: &str) -> Result<Option<StoredArtist>> {
        let conn = self.connect()?;
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE name = ?1");
        let artist = conn
            .query_row(&sql, params![name], map_artist)
            .optional()
            .with_context(|| format!("Failed to load artist '{name}'"))?;
        Ok(artist)
    }

    /// All artists, ordered by name.
    pub fn list_artists(&self) -> Result<Vec<StoredArtist>> {
        let conn = self.connect()?;
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artists ORDER BY name");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], map_artist)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn artist_count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM artists", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn map_artist(row: &Row) -> rusqlite::Result<StoredArtist> {
    let exhibition_history: Option<String> = row.get(5)?;
    let raw_data: Option<String> = row.get(8)?;

    Ok(StoredArtist {
        artist_id: row.get(0)?,
        artist: Artist {
            name: row.get(1)?,
            education: row.get(2)?,
            art_style: row.get(3)?,
            gallery_representation: row.get(4)?,
            exhibition_history: exhibition_history
                .as_deref()
                .map(ExhibitionHistory::from_column),
            website: row.get(6)?,
            raw_data: raw_data
                .and_then(|s| serde_json::from_str(&s).ok())
                .unwrap_or_default(),
        },
        data_collected_date: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn open_temp_store() -> (tempfile::TempDir, ArtStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtStore::open(dir.path().join("database").join("art_data.db")).unwrap();
        (dir, store)
    }

    fn sample_artist(name: &str) -> Artist {
        Artist {
            name: name.to_string(),
            education: Some("MFA, Yale School of Art".into()),
            art_style: Some("Large-scale abstract painting".into()),
            gallery_representation: Some("Pace Gallery".into()),
            exhibition_history: Some(ExhibitionHistory::Text("Whitney Biennial 2019".into())),
            website: Some("https://janedoe.art".into()),
            raw_data: json!({"career_stage": "mid-career"}),
        }
    }

    #[test]
    fn test_open_creates_parent_dir_and_tables() {
        let (dir, store) = open_temp_store();
        assert!(dir.path().join("database").join("art_data.db").exists());

        let conn = store.connect().unwrap();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .unwrap();
        let tables: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tables, vec!["analyses", "artists", "artworks"]);
    }

    #[test]
    fn test_open_is_idempotent() {
        let (_dir, store) = open_temp_store();
        store.add_artist(&sample_artist("Jane Doe")).unwrap();
        let reopened = ArtStore::open(store.path()).unwrap();
        assert_eq!(reopened.artist_count().unwrap(), 1);
    }

    #[test]
    fn test_add_then_get_returns_fields() {
        let (_dir, store) = open_temp_store();
        let artist = sample_artist("Jane Doe");

        let id = store.add_artist(&artist).unwrap();
        let stored = store.get_artist("Jane Doe").unwrap().expect("artist present");

        assert_eq!(stored.artist_id, id);
        assert_eq!(stored.artist, artist);
        assert!(chrono::DateTime::parse_from_rfc3339(&stored.data_collected_date).is_ok());
    }

    #[test]
    fn test_list_exhibition_history_round_trips() {
        let (_dir, store) = open_temp_store();
        let history = ExhibitionHistory::List(vec![
            json!("Whitney Biennial 2019"),
            json!({"venue": "MoMA PS1", "year": 2021}),
        ]);
        let mut artist = sample_artist("Jane Doe");
        artist.exhibition_history = Some(history.clone());

        store.add_artist(&artist).unwrap();
        let stored = store.get_artist("Jane Doe").unwrap().unwrap();

        assert_eq!(stored.artist.exhibition_history, Some(history));
    }

    #[test]
    fn test_string_exhibition_history_not_parsed() {
        let (_dir, store) = open_temp_store();
        for text in ["Solo show at Gallery X, 2020", "[Selected] group shows, 2018-2022"] {
            let mut artist = sample_artist(text);
            artist.exhibition_history = Some(ExhibitionHistory::Text(text.into()));
            store.add_artist(&artist).unwrap();

            let stored = store.get_artist(text).unwrap().unwrap();
            assert_eq!(
                stored.artist.exhibition_history,
                Some(ExhibitionHistory::Text(text.into()))
            );
        }
    }

    #[test]
    fn test_readd_replaces_row() {
        let (_dir, store) = open_temp_store();
        store.add_artist(&sample_artist("Jane Doe")).unwrap();

        let mut updated = Artist::new("Jane Doe");
        updated.art_style = Some("Sculpture".into());
        store.add_artist(&updated).unwrap();

        assert_eq!(store.artist_count().unwrap(), 1);
        let stored = store.get_artist("Jane Doe").unwrap().unwrap();
        assert_eq!(stored.artist.art_style.as_deref(), Some("Sculpture"));
        // No merge: fields absent from the new write are gone.
        assert_eq!(stored.artist.education, None);
        assert_eq!(stored.artist.website, None);
        assert!(stored.artist.raw_data.is_null());
    }

    #[test]
    fn test_missing_artist_is_none() {
        let (_dir, store) = open_temp_store();
        assert!(store.get_artist("Nobody").unwrap().is_none());
    }

    #[test]
    fn test_list_artists_ordered_by_name() {
        let (_dir, store) = open_temp_store();
        for name in ["Zed", "Amy", "Mia"] {
            store.add_artist(&Artist::new(name)).unwrap();
        }
        let names: Vec<String> = store
            .list_artists()
            .unwrap()
            .into_iter()
            .map(|a| a.artist.name)
            .collect();
        assert_eq!(names, vec!["Amy", "Mia", "Zed"]);
    }
}
