// 🗃️ Acquisition Cache - lazily populated name → Creature map
//
// Scoped to one run: entries are never evicted, and failed lookups are
// never stored, so a miss is retried on every request for that name.

use crate::catalog::{CatalogError, CreatureSource};
use crate::creature::Creature;
use crate::hasher::KeyPolicy;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct CreatureCache {
    policy: KeyPolicy,
    entries: HashMap<String, Creature>,
}

impl CreatureCache {
    pub fn new(policy: KeyPolicy) -> Self {
        CreatureCache {
            policy,
            entries: HashMap::new(),
        }
    }

    /// Return the cached record for `name`, fetching it from `source` on a miss.
    ///
    /// Only `Ok(Some(_))` results are stored. `Ok(None)` and errors leave the
    /// cache untouched.
    pub fn get_or_fetch<S>(&mut self, source: &S, name: &str) -> Result<Option<Creature>, CatalogError>
    where
        S: CreatureSource + ?Sized,
    {
        let key = self.policy.key_for(name);

        if let Some(creature) = self.entries.get(&key) {
            debug!(name, "cache hit");
            return Ok(Some(creature.clone()));
        }

        debug!(name, "cache miss");
        match source.fetch(name)? {
            Some(creature) => {
                self.entries.insert(key, creature.clone());
                debug!(name, entries = self.entries.len(), "cache populated");
                Ok(Some(creature))
            }
            None => Ok(None),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&self.policy.key_for(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
