//! In-memory [`EmployeeStore`] implementation backed by [`DashMap`].
//!
//! Operations on one id are serialized by the owning shard lock; unrelated
//! ids proceed independently. Identity generation is a single atomic counter.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use roster_core::{Employee, EmployeeDraft};
use tracing::debug;

use crate::traits::EmployeeStore;

/// Records loaded into a default store at startup.
const DEFAULT_SEED: [(i64, &str); 4] = [(1, "John"), (2, "Jane"), (3, "Alice"), (4, "Bob")];

/// Process-wide employee store held entirely in memory.
///
/// Created ids are strictly increasing and never reused, even after delete.
/// Once `i64::MAX` has been handed out, further creates fail.
#[derive(Debug)]
pub struct InMemoryEmployeeStore {
    entries: DashMap<i64, Employee>,
    /// Highest id handed out or seeded so far.
    last_id: AtomicI64,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store whose first created id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            last_id: AtomicI64::new(0),
        }
    }

    /// Creates a store pre-populated with the given records.
    ///
    /// Generated ids start after the largest seeded id.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = Employee>) -> Self {
        let entries = DashMap::new();
        let mut max_id = 0;
        for record in records {
            max_id = max_id.max(record.id);
            entries.insert(record.id, record);
        }
        Self {
            entries,
            last_id: AtomicI64::new(max_id),
        }
    }

    /// Creates a store holding the default seed (John, Jane, Alice, Bob).
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_records(DEFAULT_SEED.iter().map(|&(id, name)| Employee {
            id,
            name: name.to_string(),
        }))
    }

    /// Returns `None` when the id space is exhausted.
    fn allocate_id(&self) -> Option<i64> {
        self.last_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| last.checked_add(1))
            .ok()
            .map(|last| last + 1)
    }
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Employee>> {
        let mut snapshot: Vec<Employee> = self
            .entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        snapshot.sort_by_key(|e| e.id);
        Ok(snapshot)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Employee>> {
        Ok(self.entries.get(&id).map(|r| r.value().clone()))
    }

    async fn create(&self, draft: EmployeeDraft) -> anyhow::Result<Employee> {
        let Some(id) = self.allocate_id() else {
            anyhow::bail!("employee id space exhausted");
        };
        let record = draft.with_id(id);
        self.entries.insert(record.id, record.clone());
        debug!(id = record.id, "employee created");
        Ok(record)
    }

    async fn replace(&self, id: i64, draft: EmployeeDraft) -> anyhow::Result<Option<Employee>> {
        match self.entries.entry(id) {
            Entry::Occupied(mut slot) => {
                let record = draft.with_id(id);
                slot.insert(record.clone());
                debug!(id, "employee replaced");
                Ok(Some(record))
            }
            Entry::Vacant(_) => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            debug!(id, "employee deleted");
        }
        Ok(removed)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
