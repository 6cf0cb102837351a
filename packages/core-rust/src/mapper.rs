//! Conversions between the internal [`Employee`] record and the external
//! [`EmployeeDto`]. Pure and infallible; validation happens elsewhere.

use crate::types::{Employee, EmployeeDraft, EmployeeDto};

/// Maps a stored record to its external representation.
#[must_use]
pub fn to_dto(record: &Employee) -> EmployeeDto {
    EmployeeDto {
        id: Some(record.id),
        name: record.name.clone(),
    }
}

/// Maps an external representation to an identity-less draft.
///
/// The body-supplied `id` is dropped: identity belongs to the store.
#[must_use]
pub fn to_draft(dto: EmployeeDto) -> EmployeeDraft {
    EmployeeDraft { name: dto.name }
}
