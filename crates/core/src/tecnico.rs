//! Technician domain rules that do not depend on storage.

use crate::error::CoreError;
use crate::pagination::Sort;

/// Entity name used in not-found errors.
pub const ENTITY_NAME: &str = "Tecnico";

/// Wire properties a technician listing may be sorted by, with their columns.
const SORTABLE: &[(&str, &str)] = &[
    ("id", "id"),
    ("nome", "nome"),
    ("telefone", "telefone"),
    ("email", "email"),
];

/// Column backing a sortable wire property, if the property is sortable.
pub fn sort_column(property: &str) -> Option<&'static str> {
    SORTABLE
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, column)| *column)
}

/// Reject sorts on properties that are not sortable.
pub fn validate_sort(sort: &Sort) -> Result<(), CoreError> {
    if sort_column(&sort.property).is_some() {
        return Ok(());
    }
    let allowed: Vec<&str> = SORTABLE.iter().map(|(name, _)| *name).collect();
    Err(CoreError::Validation(format!(
        "cannot sort by '{}', expected one of: {}",
        sort.property,
        allowed.join(", ")
    )))
}
