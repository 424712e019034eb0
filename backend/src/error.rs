// backend/src/error.rs

use thiserror::Error;

/// Every failure a user action can surface.
///
/// Validation variants are returned before any state is written, so a
/// failed action leaves the store exactly as it was.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid time '{0}': use HH:MM (24-hour)")]
    InvalidTimeFormat(String),
    #[error("invalid quantity '{0}': must be a whole number of 0 or more")]
    InvalidQuantity(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("shift has no hourly entries")]
    EmptyLedger,
    #[error("no pending slot matching '{0}'")]
    NoPendingSlot(String),
    #[error("no slot for hour {0}")]
    SlotNotFound(String),
    #[error("hour {0} is below target and needs a comment")]
    MissingComment(String),
    #[error("job {0} already exists")]
    DuplicateJobNumber(String),
    #[error("invalid staff name '{0}': letters and spaces only")]
    InvalidStaffName(String),
    #[error("job {0} not found")]
    JobNotFound(String),
    #[error("staff {0} not found")]
    StaffNotFound(String),
    #[error("no shift in progress; start one with `shift start`")]
    NoActiveShift,
    #[error("a shift for job {0} is already in progress; finalize, discard or pass --replace")]
    ShiftInProgress(String),
    #[error("store error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
