// ⚔️ Battle Evaluator - compare two creatures by aggregate score

use crate::creature::Creature;
use std::cmp::Ordering;
use std::fmt;

/// Winner text stored when both aggregates are equal
pub const TIE_MARKER: &str = "It's a tie!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleOutcome {
    Winner(String),
    Tie,
}

impl BattleOutcome {
    /// Text persisted in the `winner` column
    pub fn as_winner_text(&self) -> &str {
        match self {
            BattleOutcome::Winner(name) => name,
            BattleOutcome::Tie => TIE_MARKER,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, BattleOutcome::Tie)
    }
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_winner_text())
    }
}

/// Strictly greater aggregate wins; equal aggregates tie.
pub fn simulate_battle(first: &Creature, second: &Creature) -> BattleOutcome {
    match first.aggregate_score().cmp(&second.aggregate_score()) {
        Ordering::Greater => BattleOutcome::Winner(first.name.clone()),
        Ordering::Less => BattleOutcome::Winner(second.name.clone()),
        Ordering::Equal => BattleOutcome::Tie,
    }
}
