// backend/src/production/progress.rs

use serde::{Deserialize, Serialize};

use super::percent;
use crate::models::ShiftRecord;

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;

// Job-level bands; the per-hour tiers in the ledger use other cut-offs.
crate::labeled_enum!(ProgressTier {
    Critical => "Critical",
    Warning => "Warning",
    OnTrack => "OnTrack",
});

impl ProgressTier {
    pub fn classify(percent_complete: f64) -> Self {
        if percent_complete < 80.0 {
            ProgressTier::Critical
        } else if percent_complete < 95.0 {
            ProgressTier::Warning
        } else {
            ProgressTier::OnTrack
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProgress {
    pub job_target: u64,
    pub total_output: u64,
    pub percent_complete: f64,
    pub tier: ProgressTier,
}

/// Completion of one job across its saved shifts. The caller passes only
/// that job's records.
pub fn progress<'a>(
    job_target: u64,
    shift_records_for_job: impl IntoIterator<Item = &'a ShiftRecord>,
) -> JobProgress {
    let total_output: u64 = shift_records_for_job
        .into_iter()
        .map(|r| r.total_output)
        .sum();
    let percent_complete = percent(total_output, job_target, 2);

    JobProgress {
        job_target,
        total_output,
        percent_complete,
        tier: ProgressTier::classify(percent_complete),
    }
}
