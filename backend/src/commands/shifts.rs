// backend/src/commands/shifts.rs

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::required;
use crate::db::{SESSION_FILE, SHIFTS_FILE, STAFF_FILE};
use crate::error::{AppError, AppResult};
use crate::models::{title_case, Deleted, HourlyOutput, ShiftRecord, ShiftType, Staff};
use crate::production::ledger::parse_quantity;
use crate::production::schedule::{generate, BreakWindow, BASE_TARGET};
use crate::production::{finalize, Ledger, LedgerView, ShiftHeader};
use crate::AppState;

use super::jobs::get_job;

#[cfg(test)]
#[path = "shifts_tests.rs"]
mod tests;

pub const DEFAULT_START: &str = "06:00";
pub const DEFAULT_END: &str = "14:00";

/// The shift being keyed in: header plus its ledger. Persisted between
/// invocations as the shift-entry session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftDraft {
    pub header: ShiftHeader,
    pub ledger: Ledger,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftView {
    pub header: ShiftHeader,
    pub next_pending: Option<String>,
    pub ledger: LedgerView,
}

#[derive(Debug, Clone)]
pub struct StartShiftBody {
    pub job_number: String,
    pub staff_name: String,
    pub shift_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub shift_type: ShiftType,
    pub replace: bool,
}

fn load_draft(state: &AppState) -> AppResult<ShiftDraft> {
    state.store.load_doc(SESSION_FILE).ok_or(AppError::NoActiveShift)
}

fn save_draft(state: &AppState, draft: &ShiftDraft) -> AppResult<()> {
    state.store.save_doc(SESSION_FILE, draft)
}

/// Opens a shift for an existing job and an active staff member and lays
/// out its hours with the standard breaks.
pub fn start_shift(state: &AppState, b: StartShiftBody) -> AppResult<ShiftDraft> {
    let job_number = required(&b.job_number, "job_number")?;
    let staff_name = title_case(&required(&b.staff_name, "staff_name")?);
    let shift_date = match b.shift_date {
        Some(d) => required(&d, "shift_date")?,
        None => Local::now().date_naive().to_string(),
    };
    let start_time = required(b.start_time.as_deref().unwrap_or(DEFAULT_START), "start_time")?;
    let end_time = required(b.end_time.as_deref().unwrap_or(DEFAULT_END), "end_time")?;

    if !b.replace {
        if let Some(existing) = state.store.load_doc::<ShiftDraft>(SESSION_FILE) {
            return Err(AppError::ShiftInProgress(existing.header.job_number));
        }
    }

    let job = get_job(state, &job_number)?;
    let staff: Vec<Staff> = state.store.load(STAFF_FILE);
    if !staff.iter().any(|s| s.is_active() && s.name.eq_ignore_ascii_case(&staff_name)) {
        return Err(AppError::StaffNotFound(staff_name));
    }

    let slots = generate(&start_time, &end_time, BASE_TARGET, &BreakWindow::defaults()?)?;
    if slots.is_empty() {
        warn!(%start_time, %end_time, "end time is not after start time; no hours generated");
    }

    let draft = ShiftDraft {
        header: ShiftHeader {
            job_number: job.job_number,
            staff_name,
            shift_date,
            start_time,
            end_time,
            shift_type: b.shift_type,
        },
        ledger: Ledger::from(slots),
        started_at: Utc::now(),
    };
    save_draft(state, &draft)?;

    info!(job_number = %draft.header.job_number, hours = draft.ledger.len(), "shift started");
    Ok(draft)
}

pub fn current_shift(state: &AppState) -> AppResult<ShiftDraft> {
    load_draft(state)
}

pub fn show_shift(state: &AppState) -> AppResult<DraftView> {
    let draft = load_draft(state)?;
    Ok(DraftView {
        next_pending: draft.ledger.next_pending().map(|s| s.hour_label.clone()),
        ledger: draft.ledger.view(),
        header: draft.header,
    })
}

/// Records output into the earliest hour still at 0.
pub fn record_next(state: &AppState, quantity: &str, comment: &str) -> AppResult<HourlyOutput> {
    let draft = load_draft(state)?;
    let label = draft
        .ledger
        .next_pending()
        .map(|s| s.hour_label.clone())
        .ok_or_else(|| AppError::NoPendingSlot("next hour".into()))?;
    record_into(state, draft, &label, quantity, comment)
}

pub fn record_hour(
    state: &AppState,
    hour_label: &str,
    quantity: &str,
    comment: &str,
) -> AppResult<HourlyOutput> {
    let draft = load_draft(state)?;
    record_into(state, draft, hour_label.trim(), quantity, comment)
}

fn record_into(
    state: &AppState,
    mut draft: ShiftDraft,
    hour_label: &str,
    quantity: &str,
    comment: &str,
) -> AppResult<HourlyOutput> {
    let quantity = parse_quantity(quantity)?;
    let slot = draft.ledger.record_output(hour_label, quantity, comment)?.clone();
    save_draft(state, &draft)?;

    info!(hour = %slot.hour_label, quantity, target = slot.target, "hour recorded");
    Ok(slot)
}

pub fn remove_hour(state: &AppState, hour_label: &str) -> AppResult<HourlyOutput> {
    let mut draft = load_draft(state)?;
    let removed = draft.ledger.remove_slot(hour_label.trim())?;
    save_draft(state, &draft)?;

    info!(hour = %removed.hour_label, "hour removed");
    Ok(removed)
}

/// Freezes the draft into a record, appends it to the shift store and ends
/// the session. A record whose id already exists is still appended.
///
/// The session is closed before the append; if the append fails the draft is
/// written back, so a retry never saves the same shift twice.
pub fn finalize_shift(state: &AppState) -> AppResult<ShiftRecord> {
    let draft = load_draft(state)?;
    let record = finalize(&draft.header, &draft.ledger)?;

    let mut shifts = state.store.load_records::<ShiftRecord>(SHIFTS_FILE);
    if shifts.rows.iter().any(|s| s.shift_id == record.shift_id) {
        warn!(shift_id = %record.shift_id, "shift id already saved; appending duplicate");
    }
    shifts.rows.push(record.clone());

    state.store.remove_doc(SESSION_FILE)?;
    if let Err(e) = state.store.save_records(SHIFTS_FILE, &shifts) {
        warn!(shift_id = %record.shift_id, error = %e, "shift not saved; draft restored");
        save_draft(state, &draft)?;
        return Err(e);
    }

    info!(shift_id = %record.shift_id, total_output = record.total_output, "shift saved");
    Ok(record)
}

pub fn discard_shift(state: &AppState) -> AppResult<Deleted> {
    let deleted = state.store.remove_doc(SESSION_FILE)?;
    if deleted {
        info!("shift draft discarded");
    }
    Ok(Deleted { deleted })
}

pub fn list_shifts(state: &AppState) -> Vec<ShiftRecord> {
    state.store.load(SHIFTS_FILE)
}
