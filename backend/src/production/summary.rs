// backend/src/production/summary.rs

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::percent;
use crate::models::ShiftRecord;

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;

/// Rough units-per-job baseline behind the dashboard's progress estimate.
pub const ESTIMATED_UNITS_PER_JOB: u64 = 20_000;

/// Output totals keyed in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductionSummary {
    pub by_job: IndexMap<String, u64>,
    pub by_staff: IndexMap<String, u64>,
    /// ISO week number → output. Weeks of different years share a key.
    pub by_week: IndexMap<u32, u64>,
    /// Records dropped because their shift_date did not parse.
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub staff_name: String,
    pub total_output: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekTotal {
    pub week: u32,
    pub total_output: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub total_jobs: usize,
    pub total_output: u64,
    /// Estimate against a flat per-job baseline, not the real job targets.
    pub estimated_average_progress: f64,
    pub top_performer: Option<TopPerformer>,
    pub by_job: IndexMap<String, u64>,
    pub by_staff: IndexMap<String, u64>,
    pub weekly_trend: Vec<WeekTotal>,
}

pub fn summarize<'a>(all_shift_records: impl IntoIterator<Item = &'a ShiftRecord>) -> ProductionSummary {
    let mut summary = ProductionSummary::default();

    for rec in all_shift_records {
        let week = match NaiveDate::parse_from_str(rec.shift_date.trim(), "%Y-%m-%d") {
            Ok(d) => d.iso_week().week(),
            Err(_) => {
                debug!(shift_id = %rec.shift_id, shift_date = %rec.shift_date, "skipping shift with unparseable date");
                summary.skipped += 1;
                continue;
            }
        };

        *summary.by_job.entry(rec.job_number.clone()).or_default() += rec.total_output;
        *summary.by_staff.entry(rec.staff_name.clone()).or_default() += rec.total_output;
        *summary.by_week.entry(week).or_default() += rec.total_output;
    }
    summary
}

impl ProductionSummary {
    pub fn total_output(&self) -> u64 {
        self.by_job.values().sum()
    }

    pub fn job_count(&self) -> usize {
        self.by_job.len()
    }

    /// Highest staff total; ties go to whoever appeared first.
    pub fn top_performer(&self) -> Option<TopPerformer> {
        let mut best: Option<(&String, u64)> = None;
        for (name, &total) in &self.by_staff {
            if best.map_or(true, |(_, b)| total > b) {
                best = Some((name, total));
            }
        }
        best.map(|(name, total)| TopPerformer {
            staff_name: name.clone(),
            total_output: total,
        })
    }

    pub fn estimated_average_progress(&self) -> f64 {
        let baseline = (self.job_count() as u64 * ESTIMATED_UNITS_PER_JOB).max(1);
        percent(self.total_output(), baseline, 1)
    }

    /// Weekly totals ordered by week number.
    pub fn weekly_trend(&self) -> Vec<WeekTotal> {
        let mut weeks: Vec<WeekTotal> = self
            .by_week
            .iter()
            .map(|(&week, &total_output)| WeekTotal { week, total_output })
            .collect();
        weeks.sort_by_key(|w| w.week);
        weeks
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            total_jobs: self.job_count(),
            total_output: self.total_output(),
            estimated_average_progress: self.estimated_average_progress(),
            top_performer: self.top_performer(),
            by_job: self.by_job.clone(),
            by_staff: self.by_staff.clone(),
            weekly_trend: self.weekly_trend(),
        }
    }
}
