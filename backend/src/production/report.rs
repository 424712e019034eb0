// backend/src/production/report.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::percent;
use super::progress::{progress, JobProgress};
use crate::models::{normalize_job_number, Job, ShiftRecord, ShiftType};

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

/// Column headings of the tabular shift log, in export order.
pub const COLUMNS: [&str; 8] = [
    "DATE", "JOB", "STAFF", "SHIFT", "OUTPUT", "TARGET", "PROGRESS", "STATUS",
];

crate::labeled_enum!(RowStatus {
    Completed => "Completed",
    Ongoing => "Ongoing",
});

crate::labeled_enum!(ProgressBand {
    Low => "low",
    Mid => "mid",
    High => "ok",
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftLogFilter {
    pub job_number: Option<String>,
    pub staff_name: Option<String>,
    pub shift_date: Option<String>,
}

impl ShiftLogFilter {
    fn accepts(&self, rec: &ShiftRecord) -> bool {
        let job_ok = self
            .job_number
            .as_deref()
            .map_or(true, |j| normalize_job_number(j) == normalize_job_number(&rec.job_number));
        let staff_ok = self
            .staff_name
            .as_deref()
            .map_or(true, |s| s.trim() == rec.staff_name);
        let date_ok = self
            .shift_date
            .as_deref()
            .map_or(true, |d| d.trim() == rec.shift_date);
        job_ok && staff_ok && date_ok
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub date: String,
    pub job: String,
    pub staff: String,
    pub shift_type: ShiftType,
    pub output: u64,
    pub target: u64,
    pub progress_pct: f64,
    pub status: RowStatus,
    pub band: ProgressBand,
}

impl ReportRow {
    /// Cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [String; 8] {
        [
            self.date.clone(),
            self.job.clone(),
            self.staff.clone(),
            self.shift_type.to_string(),
            self.output.to_string(),
            self.target.to_string(),
            format!("{}%", self.progress_pct),
            self.status.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftLog {
    pub filter: ShiftLogFilter,
    pub rows: Vec<ReportRow>,
    pub shift_count: usize,
    pub total_output: u64,
    /// Present when the filter names a job that has a stock target.
    pub job_progress: Option<JobProgress>,
}

fn row_for(rec: &ShiftRecord, target: u64) -> ReportRow {
    let progress_pct = percent(rec.total_output, target, 1);
    let band = if progress_pct < 90.0 {
        ProgressBand::Low
    } else if progress_pct < 100.0 {
        ProgressBand::Mid
    } else {
        ProgressBand::High
    };
    ReportRow {
        date: rec.shift_date.clone(),
        job: rec.job_number.clone(),
        staff: rec.staff_name.clone(),
        shift_type: rec.shift_type,
        output: rec.total_output,
        target,
        progress_pct,
        status: if progress_pct >= 100.0 { RowStatus::Completed } else { RowStatus::Ongoing },
        band,
    }
}

/// Filtered, store-ordered projection of saved shifts. Each row's target is
/// its job's first stock quantity (0 when unknown).
pub fn shift_log(jobs: &[Job], shifts: &[ShiftRecord], filter: &ShiftLogFilter) -> ShiftLog {
    let targets: HashMap<String, u64> = jobs
        .iter()
        .filter_map(|j| Some((normalize_job_number(&j.job_number), j.target_quantity()?)))
        .collect();

    let job_progress = filter.job_number.as_deref().and_then(|wanted| {
        let job = jobs.iter().find(|j| j.matches_number(wanted))?;
        let target = job.target_quantity()?;
        Some(progress(
            target,
            shifts.iter().filter(|s| job.matches_number(&s.job_number)),
        ))
    });

    let rows: Vec<ReportRow> = shifts
        .iter()
        .filter(|s| filter.accepts(s))
        .map(|s| {
            let target = targets
                .get(&normalize_job_number(&s.job_number))
                .copied()
                .unwrap_or(0);
            row_for(s, target)
        })
        .collect();

    ShiftLog {
        filter: filter.clone(),
        shift_count: rows.len(),
        total_output: rows.iter().map(|r| r.output).sum(),
        rows,
        job_progress,
    }
}
