//! Required-field enforcement for users about to be stored.
//!
//! [`User`] accepts any values. The store calls [`check_required`] from its
//! create and update hooks, so this is the single place where the
//! non-nullable columns of [`USER_TABLE`] turn into a hard rule.

use thiserror::Error;

use crate::domain::User;
use crate::metadata::USER_TABLE;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
    #[error("column has no matching user field: {0}")]
    UnmappedColumn(&'static str),
}

pub fn check_required(user: &User) -> Result<(), ValidationError> {
    for column in USER_TABLE.required_columns() {
        let value = match column.name {
            "name" => user.name(),
            "email" => user.email(),
            other => return Err(ValidationError::UnmappedColumn(other)),
        };
        if value.is_empty() {
            return Err(ValidationError::MissingField(column.name));
        }
    }
    Ok(())
}
