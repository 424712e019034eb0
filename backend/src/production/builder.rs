// backend/src/production/builder.rs

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::ledger::Ledger;
use crate::error::{AppError, AppResult};
use crate::models::{title_case, ShiftRecord, ShiftType};

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;

/// Shift metadata entered before the hours are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftHeader {
    pub job_number: String,
    pub staff_name: String,
    pub shift_date: String,
    pub start_time: String,
    pub end_time: String,
    pub shift_type: ShiftType,
}

/// `{job}-{date}-{start without colons}`. Not unique when the same job, date
/// and start are saved twice.
pub fn shift_id(job_number: &str, shift_date: &str, start_time: &str) -> String {
    format!("{}-{}-{}", job_number, shift_date, start_time.replace(':', ""))
}

fn required<'a>(value: &'a str, field: &'static str) -> AppResult<&'a str> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(v)
}

/// Freezes a completed ledger into a record. Every hour below target must
/// carry a comment.
pub fn finalize(header: &ShiftHeader, ledger: &Ledger) -> AppResult<ShiftRecord> {
    let job_number = required(&header.job_number, "job_number")?;
    let staff_name = required(&header.staff_name, "staff_name")?;
    let shift_date = required(&header.shift_date, "shift_date")?;
    let start_time = required(&header.start_time, "start_time")?;
    let end_time = required(&header.end_time, "end_time")?;

    if ledger.is_empty() {
        return Err(AppError::EmptyLedger);
    }
    if let Some(gap) = ledger.first_unexplained_shortfall() {
        return Err(AppError::MissingComment(gap.hour_label.clone()));
    }

    Ok(ShiftRecord {
        shift_id: shift_id(job_number, shift_date, start_time),
        job_number: job_number.to_string(),
        staff_name: title_case(staff_name),
        shift_date: shift_date.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        shift_type: header.shift_type,
        hourly_outputs: ledger.slots().to_vec(),
        total_output: ledger.total_quantity(),
        created_at: Utc::now(),
    })
}
