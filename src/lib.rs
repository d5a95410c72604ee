// Creature Battle - Core Library
// Exposes all modules for use in the CLI and tests

pub mod battle;       // Battle Evaluator - aggregate score comparison
pub mod cache;        // Acquisition Cache - lazy name → record map
pub mod catalog;      // Catalog Client - blocking HTTP lookups
pub mod config;
pub mod creature;
pub mod db;           // Result Store - append-only battles table
pub mod hasher;       // Identity Hasher - SHA-256 cache keys
pub mod orchestrator;

// Re-export commonly used types
pub use battle::{simulate_battle, BattleOutcome, TIE_MARKER};
pub use cache::CreatureCache;
pub use catalog::{parse_creature, CatalogError, CreatureSource, HttpCatalog, DEFAULT_BASE_URL};
pub use config::{Config, ConfigOverrides};
pub use creature::Creature;
pub use db::{
    BattleRecord, BattleStore, DEFAULT_DB_PATH,
    setup_database, insert_battle, get_all_battles, verify_count,
};
pub use hasher::{cache_key, KeyPolicy};
pub use orchestrator::{run_battle, RunOutcome, NOT_FOUND_MESSAGE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
