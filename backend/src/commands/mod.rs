// backend/src/commands/mod.rs
//
// User actions. Each one that changes data reads the whole collection,
// changes it in memory and writes it back; validation happens before any
// write so a failed action leaves the files untouched.

pub mod jobs;
pub mod reports;
pub mod reset;
pub mod shifts;
pub mod staffs;

use crate::error::{AppError, AppResult};

// Common blank-field check
pub(crate) fn required(value: &str, field: &'static str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(v.to_string())
}
