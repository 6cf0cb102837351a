use serde::{Deserialize, Deserializer, Serialize};

/// Canonical employee record owned by the store.
///
/// The `id` is assigned by the store at creation and never reassigned.
/// Callers only ever receive clones; mutation is replace-by-identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Store-assigned identity.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// Employee record without identity, used for create and replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    /// Display name.
    pub name: String,
}

impl EmployeeDraft {
    /// Binds this draft to an identity, producing a full record.
    #[must_use]
    pub fn with_id(self, id: i64) -> Employee {
        Employee { id, name: self.name }
    }
}

/// Externally exposed employee representation.
///
/// `id` is optional because clients omit it on create. A missing or `null`
/// `name` decodes as empty so the field rules can report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    /// Identity, `null` on create.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
