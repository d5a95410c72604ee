// 🐾 Creature Record - normalized catalog entry
// Built once from a catalog response, never mutated afterwards

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One catalog entry: display name, numeric id and base stats.
///
/// `stats` is ordered by stat name so printing is stable between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub name: String,
    pub id: i64,
    pub stats: BTreeMap<String, i64>,
}

impl Creature {
    pub fn new(name: impl Into<String>, id: i64, stats: BTreeMap<String, i64>) -> Self {
        Creature {
            name: name.into(),
            id,
            stats,
        }
    }

    /// Sum of every stat value, widened so no i64 input can overflow it
    pub fn aggregate_score(&self) -> i128 {
        self.stats.values().map(|&v| i128::from(v)).sum()
    }

    pub fn stat(&self, stat_name: &str) -> Option<i64> {
        self.stats.get(stat_name).copied()
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, ID: {}, Stats: {{", self.name, self.id)?;
        for (i, (stat, value)) in self.stats.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", stat, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_aggregate_score_sums_all_stats() {
        let pikachu = Creature::new(
            "pikachu",
            25,
            stats(&[("hp", 35), ("attack", 55), ("defense", 40), ("speed", 90)]),
        );

        assert_eq!(pikachu.aggregate_score(), 220);
        assert_eq!(pikachu.stat("speed"), Some(90));
        assert_eq!(pikachu.stat("special-attack"), None);
    }

    #[test]
    fn test_empty_stats_score_zero() {
        let missingno = Creature::new("missingno", 0, BTreeMap::new());
        assert_eq!(missingno.aggregate_score(), 0);
        assert_eq!(missingno.to_string(), "missingno, ID: 0, Stats: {}");
    }

    #[test]
    fn test_aggregate_score_past_i64_range() {
        let huge = Creature::new("huge", 1, stats(&[("hp", i64::MAX), ("attack", 1)]));
        let tiny = Creature::new("tiny", 2, stats(&[("hp", i64::MIN), ("attack", -1)]));

        assert_eq!(huge.aggregate_score(), i128::from(i64::MAX) + 1);
        assert_eq!(tiny.aggregate_score(), i128::from(i64::MIN) - 1);
    }

    #[test]
    fn test_display_is_sorted_by_stat_name() {
        let bulbasaur = Creature::new("bulbasaur", 1, stats(&[("speed", 45), ("hp", 45), ("attack", 49)]));

        assert_eq!(
            bulbasaur.to_string(),
            "bulbasaur, ID: 1, Stats: {attack: 49, hp: 45, speed: 45}"
        );

        println!("✅ Creature display test PASSED");
    }
}
