use crate::model::location::Location;
use std::collections::HashMap;

/// Local copy of the locations the UI has seen, keyed by id.
///
/// Mutations from create/update/delete are spliced in directly instead of
/// refetching, so edits made by other users only appear after a reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationCache {
    entries: HashMap<String, Location>,
}

impl LocationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.entries.get(id)
    }

    /// Inserts `location`, replacing any record with the same id.
    pub fn merge(&mut self, location: Location) {
        self.entries.insert(location.id.clone(), location);
    }

    pub fn merge_all(&mut self, locations: impl IntoIterator<Item = Location>) {
        for location in locations {
            self.merge(location);
        }
    }

    /// Replaces an existing record. Returns `false` and leaves the cache
    /// untouched when the id is unknown.
    pub fn replace(&mut self, location: Location) -> bool {
        match self.entries.get_mut(&location.id) {
            Some(slot) => {
                *slot = location;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<Location> {
        self.entries.remove(id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Records ordered the way the server lists them: newest update first,
    /// ties broken by id so the order is stable between renders.
    pub fn ordered(&self) -> Vec<&Location> {
        let mut records: Vec<&Location> = self.entries.values().collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
        records
    }
}
