use async_trait::async_trait;
use roster_core::{Employee, EmployeeDraft};

/// Pluggable employee store consumed by the request pipeline.
/// Implementations: in-memory (default, tests).
///
/// Absence is never an error: lookups return `None`/`false` for unknown ids.
/// `Err` is reserved for backend faults a caller cannot recover from.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Point-in-time snapshot of all records, ordered by id.
    async fn list_all(&self) -> anyhow::Result<Vec<Employee>>;

    /// Load a single record by id.
    async fn get(&self, id: i64) -> anyhow::Result<Option<Employee>>;

    /// Insert a new record under a freshly generated id.
    async fn create(&self, draft: EmployeeDraft) -> anyhow::Result<Employee>;

    /// Overwrite the record with the given id. Returns `None` if absent.
    async fn replace(&self, id: i64, draft: EmployeeDraft) -> anyhow::Result<Option<Employee>>;

    /// Remove the record with the given id. Returns `true` if one was removed.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;

    /// Number of records currently held (non-blocking).
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
