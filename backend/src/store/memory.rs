use super::{new_id, LocationStore, NewLocation, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use common::model::location::Location;
use common::model::session::SessionUser;
use common::slug::name_key;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Inner {
    /// `(insert sequence, record)`; the sequence breaks `updated_at` ties.
    records: Vec<(u64, Location)>,
    next_seq: u64,
}

impl Inner {
    fn sorted(&self) -> Vec<&(u64, Location)> {
        let mut records: Vec<_> = self.records.iter().collect();
        records.sort_by(|(sa, a), (sb, b)| b.updated_at.cmp(&a.updated_at).then(sb.cmp(sa)));
        records
    }
}

/// In-process store with the same contract as the SQLite one.
#[derive(Default)]
pub struct MemoryLocationStore {
    inner: RwLock<Inner>,
}

impl MemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

impl LocationStore for MemoryLocationStore {
    fn list_page(&self, offset: u64, limit: u64) -> StoreResult<(Vec<Location>, u64)> {
        let inner = self.read()?;
        let page = inner
            .sorted()
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .map(|(_, l)| l.clone())
            .collect();
        Ok((page, inner.records.len() as u64))
    }

    fn search(&self, needle: &str) -> StoreResult<Vec<Location>> {
        let needle = needle.to_lowercase();
        Ok(self
            .read()?
            .sorted()
            .into_iter()
            .filter(|(_, l)| name_key(&l.name).contains(&needle))
            .map(|(_, l)| l.clone())
            .collect())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Location>> {
        Ok(self
            .read()?
            .records
            .iter()
            .find(|(_, l)| l.id == id)
            .map(|(_, l)| l.clone()))
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Location>> {
        let key = name_key(name);
        Ok(self
            .read()?
            .records
            .iter()
            .find(|(_, l)| name_key(&l.name) == key)
            .map(|(_, l)| l.clone()))
    }

    fn insert(&self, new: NewLocation) -> StoreResult<Location> {
        let mut inner = self.write()?;
        let key = name_key(&new.name);
        if inner.records.iter().any(|(_, l)| name_key(&l.name) == key) {
            return Err(StoreError::Duplicate(new.name));
        }
        let location = Location {
            id: new_id(),
            name: new.name,
            jam_link: new.jam_link,
            created_by: new.creator.email.clone(),
            created_by_name: new.creator.name.clone(),
            updated_by: new.creator.email,
            updated_by_name: new.creator.name,
            updated_at: new.created_at,
        };
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.records.push((seq, location.clone()));
        Ok(location)
    }

    fn update_link(
        &self,
        id: &str,
        jam_link: &str,
        editor: &SessionUser,
        at: DateTime<Utc>,
    ) -> StoreResult<Option<Location>> {
        let mut inner = self.write()?;
        let Some((_, location)) = inner.records.iter_mut().find(|(_, l)| l.id == id) else {
            return Ok(None);
        };
        location.jam_link = jam_link.to_string();
        location.updated_by = editor.email.clone();
        location.updated_by_name = editor.name.clone();
        location.updated_at = at;
        Ok(Some(location.clone()))
    }

    fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut inner = self.write()?;
        let before = inner.records.len();
        inner.records.retain(|(_, l)| l.id != id);
        Ok(inner.records.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::contract;

    #[test]
    fn honours_store_contract() {
        contract::run_all(|| Box::new(MemoryLocationStore::new()));
    }
}
