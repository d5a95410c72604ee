// 🎬 Orchestrator - one battle per run
//
// initialize store → resolve both names → print, evaluate, record
// A name the catalog does not know ends the run with a message; transport
// and storage failures are returned to the caller.

use crate::battle::{simulate_battle, BattleOutcome};
use crate::cache::CreatureCache;
use crate::catalog::CreatureSource;
use crate::db::BattleStore;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

pub const NOT_FOUND_MESSAGE: &str = "Error: Pokemon data not found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Both creatures resolved and the battle row was written
    Recorded { outcome: BattleOutcome, battle_id: i64 },
    /// At least one name could not be resolved; nothing was recorded
    NotFound,
}

pub fn run_battle<S, W>(
    store: &BattleStore,
    cache: &mut CreatureCache,
    source: &S,
    first_name: &str,
    second_name: &str,
    out: &mut W,
) -> Result<RunOutcome>
where
    S: CreatureSource + ?Sized,
    W: Write,
{
    store.initialize()?;

    let first = cache
        .get_or_fetch(source, first_name)
        .with_context(|| format!("Failed to fetch {:?}", first_name))?;
    let second = cache
        .get_or_fetch(source, second_name)
        .with_context(|| format!("Failed to fetch {:?}", second_name))?;

    let (first, second) = match (first, second) {
        (Some(first), Some(second)) => (first, second),
        _ => {
            info!(first_name, second_name, "catalog lookup came back empty");
            writeln!(out, "{}", NOT_FOUND_MESSAGE)?;
            return Ok(RunOutcome::NotFound);
        }
    };

    writeln!(out, "Pokemon 1: {}", first)?;
    writeln!(out, "Pokemon 2: {}", second)?;

    let outcome = simulate_battle(&first, &second);
    writeln!(out, "The winner is: {}", outcome)?;

    let battle_id = store.record(&first.name, &second.name, outcome.as_winner_text())?;
    info!(
        battle_id,
        first = %first.name,
        second = %second.name,
        winner = %outcome,
        "battle saved"
    );

    Ok(RunOutcome::Recorded { outcome, battle_id })
}
