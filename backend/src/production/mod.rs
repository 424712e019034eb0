// backend/src/production/mod.rs
//
// Shift-output accounting: schedule generation, the in-progress ledger,
// finalizing into records, and the read-only aggregators over saved shifts.

pub mod builder;
pub mod ledger;
pub mod progress;
pub mod report;
pub mod schedule;
pub mod summary;

pub use builder::{finalize, shift_id, ShiftHeader};
pub use ledger::{Ledger, LedgerView, SlotMetrics};
pub use progress::{progress, JobProgress, ProgressTier};
pub use report::{shift_log, ShiftLog, ShiftLogFilter};
pub use schedule::{generate, BreakWindow};
pub use summary::{summarize, Dashboard, ProductionSummary};

/// Percentage of `part` over `whole`, rounded half-to-even to `places`
/// decimals; 0 when `whole` is 0.
pub(crate) fn percent(part: u64, whole: u64, places: i32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let scale = 10f64.powi(places);
    (part as f64 / whole as f64 * 100.0 * scale).round_ties_even() / scale
}
