// backend/src/commands/reports.rs

use tracing::debug;

use crate::db::{JOBS_FILE, SHIFTS_FILE};
use crate::error::AppResult;
use crate::models::{Job, ShiftRecord};
use crate::production::{progress, shift_log, summarize, Dashboard, JobProgress, ShiftLog, ShiftLogFilter};
use crate::AppState;

use super::jobs::get_job;

#[cfg(test)]
#[path = "reports_tests.rs"]
mod tests;

pub fn shift_log_report(state: &AppState, filter: &ShiftLogFilter) -> ShiftLog {
    let jobs: Vec<Job> = state.store.load(JOBS_FILE);
    let shifts: Vec<ShiftRecord> = state.store.load(SHIFTS_FILE);
    let log = shift_log(&jobs, &shifts, filter);
    debug!(rows = log.shift_count, "shift log built");
    log
}

/// Completion of one job against its first stock quantity (0 % when the job
/// has no stock).
pub fn job_progress(state: &AppState, job_number: &str) -> AppResult<JobProgress> {
    let job = get_job(state, job_number)?;
    let shifts: Vec<ShiftRecord> = state.store.load(SHIFTS_FILE);
    Ok(progress(
        job.target_quantity().unwrap_or(0),
        shifts.iter().filter(|s| job.matches_number(&s.job_number)),
    ))
}

pub fn dashboard(state: &AppState) -> Dashboard {
    let shifts: Vec<ShiftRecord> = state.store.load(SHIFTS_FILE);
    let summary = summarize(&shifts);
    if summary.skipped > 0 {
        debug!(skipped = summary.skipped, "shifts left out of dashboard");
    }
    summary.dashboard()
}
