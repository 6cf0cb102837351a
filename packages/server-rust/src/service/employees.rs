//! Employee request pipeline.
//!
//! Each operation is a chain of awaited steps (decode, store, map) where a
//! step only runs once its predecessor has resolved. Every chain ends in
//! exactly one `Ok` or one `Err`; lookups that miss resolve to `Ok(None)` or
//! `Ok(false)` and never reach the problem translator.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use futures_util::stream::{self, BoxStream, StreamExt};
use roster_core::{mapper, EmployeeDto};
use tracing::{debug, error, field, info_span, Instrument};

use super::error::ServiceError;
use crate::traits::EmployeeStore;

/// A freshly created employee together with its assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub id: i64,
    pub employee: EmployeeDto,
}

/// Composes store and mapper calls into the five employee operations.
///
/// Cheap to clone; the store is shared.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    #[must_use]
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn EmployeeStore> {
        &self.store
    }

    /// Lists every employee as a single-pass stream over a store snapshot.
    pub async fn list(&self) -> Result<BoxStream<'static, EmployeeDto>, ServiceError> {
        traced(
            "list",
            None,
            async {
                let records = self.store.list_all().await?;
                Ok::<_, ServiceError>(records)
            },
            |_| "ok",
        )
        .await
        .map(|records| {
            stream::iter(records)
                .map(|record| mapper::to_dto(&record))
                .boxed()
        })
    }

    /// Looks up one employee. `Ok(None)` when the id is unknown.
    pub async fn get(&self, id: i64) -> Result<Option<EmployeeDto>, ServiceError> {
        traced(
            "get",
            Some(id),
            async {
                let found = self.store.get(id).await?;
                Ok::<_, ServiceError>(found.as_ref().map(mapper::to_dto))
            },
            found_label,
        )
        .await
    }

    /// Awaits the decoded body, then stores it under a fresh id.
    ///
    /// Any id carried by the body is ignored. Decoding faults propagate
    /// unchanged.
    pub async fn create<B>(&self, body: B) -> Result<Created, ServiceError>
    where
        B: Future<Output = Result<EmployeeDto, ServiceError>> + Send,
    {
        traced(
            "create",
            None,
            async {
                let dto = body.await?;
                let record = self.store.create(mapper::to_draft(dto)).await?;
                Ok::<_, ServiceError>(Created {
                    id: record.id,
                    employee: mapper::to_dto(&record),
                })
            },
            |_| "created",
        )
        .await
    }

    /// Awaits the decoded body, checks its id against `id`, then replaces.
    ///
    /// A body whose id differs from `id` (or is missing) fails with
    /// [`ServiceError::InvalidArgument`] before the store is touched.
    /// `Ok(None)` when no employee with `id` exists.
    pub async fn replace<B>(&self, id: i64, body: B) -> Result<Option<EmployeeDto>, ServiceError>
    where
        B: Future<Output = Result<EmployeeDto, ServiceError>> + Send,
    {
        traced(
            "replace",
            Some(id),
            async {
                let dto = body.await?;
                if dto.id != Some(id) {
                    let body_id = dto.id.map_or_else(|| "null".to_string(), |v| v.to_string());
                    return Err(ServiceError::InvalidArgument(format!(
                        "Employee id in body ({body_id}) does not match id in path ({id})"
                    )));
                }
                let replaced = self.store.replace(id, mapper::to_draft(dto)).await?;
                Ok::<_, ServiceError>(replaced.as_ref().map(mapper::to_dto))
            },
            found_label,
        )
        .await
    }

    /// Removes one employee. `Ok(false)` when the id is unknown.
    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        traced(
            "delete",
            Some(id),
            async {
                let removed = self.store.delete(id).await?;
                Ok::<_, ServiceError>(removed)
            },
            |removed| if *removed { "deleted" } else { "not_found" },
        )
        .await
    }
}

fn found_label<T>(value: &Option<T>) -> &'static str {
    if value.is_some() {
        "ok"
    } else {
        "not_found"
    }
}

/// Runs one pipeline inside an `employee_op` span and records its outcome.
async fn traced<T, F, L>(
    op: &'static str,
    id: Option<i64>,
    pipeline: F,
    label: L,
) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>>,
    L: FnOnce(&T) -> &'static str,
{
    let span = info_span!(
        "employee_op",
        op,
        id = field::Empty,
        outcome = field::Empty,
        duration_ms = field::Empty,
    );
    if let Some(id) = id {
        span.record("id", id);
    }

    let start = Instant::now();
    let result = pipeline.instrument(span.clone()).await;

    #[allow(clippy::cast_possible_truncation)]
    let duration_ms = start.elapsed().as_millis() as u64;
    span.record("duration_ms", duration_ms);

    match &result {
        Ok(value) => {
            span.record("outcome", label(value));
            debug!(parent: &span, "employee operation completed");
        }
        Err(ServiceError::Internal(err)) => {
            span.record("outcome", "internal");
            error!(parent: &span, error = %err, "employee operation failed");
        }
        Err(err) => {
            span.record("outcome", err.kind());
            debug!(parent: &span, error = %err, "employee operation rejected");
        }
    }

    result
}
