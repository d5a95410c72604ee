use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_DB_PATH: &str = "pokemon_battles.db";

/// One persisted battle. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub id: i64,
    pub pokemon1: String,
    pub pokemon2: String,
    pub winner: String,
}

pub fn setup_database(conn: &Connection) -> Result<()> {
    // Enable WAL mode for crash recovery
    conn.pragma_update(None, "journal_mode", "WAL")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS battles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            pokemon1 TEXT,
            pokemon2 TEXT,
            winner TEXT
        )",
        [],
    )?;

    Ok(())
}

/// Append one battle row, returning its rowid
pub fn insert_battle(conn: &Connection, pokemon1: &str, pokemon2: &str, winner: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO battles (pokemon1, pokemon2, winner) VALUES (?1, ?2, ?3)",
        params![pokemon1, pokemon2, winner],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn get_all_battles(conn: &Connection) -> Result<Vec<BattleRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, pokemon1, pokemon2, winner
         FROM battles
         ORDER BY id",
    )?;

    let battles = stmt
        .query_map([], |row| {
            let pokemon1: Option<String> = row.get(1)?;
            let pokemon2: Option<String> = row.get(2)?;
            let winner: Option<String> = row.get(3)?;

            Ok(BattleRecord {
                id: row.get(0)?,
                pokemon1: pokemon1.unwrap_or_default(),
                pokemon2: pokemon2.unwrap_or_default(),
                winner: winner.unwrap_or_default(),
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(battles)
}

pub fn verify_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM battles", [], |row| row.get(0))?;

    Ok(count)
}

// ============================================================================
// FILE-BACKED STORE
// ============================================================================

/// Battle results file. Every operation opens its own connection and closes
/// it on return, so each insert is committed on its own.
#[derive(Debug, Clone)]
pub struct BattleStore {
    path: PathBuf,
}

impl BattleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        BattleStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Connection> {
        Connection::open(&self.path)
            .with_context(|| format!("Failed to open battle database: {}", self.path.display()))
    }

    /// Create the `battles` table if it does not exist yet. Safe to repeat.
    pub fn initialize(&self) -> Result<()> {
        let conn = self.open()?;
        setup_database(&conn).context("Failed to initialize battles table")?;
        info!(path = %self.path.display(), "battle database ready");
        Ok(())
    }

    pub fn record(&self, pokemon1: &str, pokemon2: &str, winner: &str) -> Result<i64> {
        let conn = self.open()?;
        let id = insert_battle(&conn, pokemon1, pokemon2, winner).context("Failed to save battle")?;
        debug!(id, pokemon1, pokemon2, winner, "battle recorded");
        Ok(id)
    }

    pub fn all_battles(&self) -> Result<Vec<BattleRecord>> {
        let conn = self.open()?;
        get_all_battles(&conn)
    }

    pub fn count(&self) -> Result<i64> {
        let conn = self.open()?;
        verify_count(&conn)
    }
}
