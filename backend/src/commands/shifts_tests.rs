use super::*;
use crate::commands::jobs::{create_job, CreateJobBody};
use crate::commands::staffs::{create_staff, set_staff_status, CreateStaffBody};
use crate::models::StaffStatus;
use tempfile::{tempdir, TempDir};

fn seeded() -> (TempDir, AppState) {
    let dir = tempdir().unwrap();
    let state = AppState::open(dir.path()).unwrap();
    create_job(
        &state,
        CreateJobBody {
            job_number: "950592".into(),
            customer_name: "Aimia Foods".into(),
            product: "MiniMallows/6G".into(),
            stock_name: "MiniMallows Pink&White".into(),
            stock_quantity: "7000".into(),
        },
    )
    .unwrap();
    create_staff(
        &state,
        CreateStaffBody {
            name: "Ann Lee".into(),
            ..Default::default()
        },
    )
    .unwrap();
    (dir, state)
}

fn body(start: &str, end: &str) -> StartShiftBody {
    StartShiftBody {
        job_number: "950592".into(),
        staff_name: "ann lee".into(),
        shift_date: Some("2025-11-03".into()),
        start_time: Some(start.into()),
        end_time: Some(end.into()),
        shift_type: ShiftType::Morning,
        replace: false,
    }
}

#[test]
fn start_generates_hours_and_persists_draft() {
    let (_dir, state) = seeded();

    let draft = start_shift(&state, body("06:00", "09:00")).unwrap();

    assert_eq!(draft.ledger.len(), 3);
    assert_eq!(draft.header.staff_name, "Ann Lee");
    assert_eq!(current_shift(&state).unwrap(), draft);
}

#[test]
fn defaults_cover_the_morning_shift() {
    let (_dir, state) = seeded();
    let mut b = body("06:00", "09:00");
    b.start_time = None;
    b.end_time = None;
    b.shift_date = None;

    let draft = start_shift(&state, b).unwrap();

    assert_eq!(draft.ledger.len(), 8);
    assert_eq!(draft.header.start_time, DEFAULT_START);
    assert!(!draft.header.shift_date.is_empty());
}

#[test]
fn second_start_needs_replace() {
    let (_dir, state) = seeded();
    start_shift(&state, body("06:00", "09:00")).unwrap();

    let err = start_shift(&state, body("10:00", "12:00")).unwrap_err();
    assert!(matches!(err, AppError::ShiftInProgress(_)));

    let mut b = body("10:00", "12:00");
    b.replace = true;
    let draft = start_shift(&state, b).unwrap();
    assert_eq!(draft.ledger.slots()[0].hour_label, "10:00-11:00");
}

#[test]
fn unknown_job_and_inactive_staff_are_refused() {
    let (_dir, state) = seeded();

    let mut b = body("06:00", "09:00");
    b.job_number = "NOPE".into();
    assert!(matches!(start_shift(&state, b), Err(AppError::JobNotFound(_))));

    set_staff_status(&state, "STF001", StaffStatus::Inactive).unwrap();
    assert!(matches!(
        start_shift(&state, body("06:00", "09:00")),
        Err(AppError::StaffNotFound(_))
    ));
}

#[test]
fn bad_time_fails_without_draft() {
    let (_dir, state) = seeded();

    let err = start_shift(&state, body("6am", "09:00")).unwrap_err();

    assert!(matches!(err, AppError::InvalidTimeFormat(_)));
    assert!(matches!(current_shift(&state), Err(AppError::NoActiveShift)));
}

#[test]
fn record_next_walks_pending_hours() {
    let (_dir, state) = seeded();
    start_shift(&state, body("06:00", "08:00")).unwrap();

    assert_eq!(record_next(&state, "2500", "").unwrap().hour_label, "06:00-07:00");
    assert_eq!(record_next(&state, "2600", "").unwrap().hour_label, "07:00-08:00");
    assert!(matches!(record_next(&state, "1", "x"), Err(AppError::NoPendingSlot(_))));
}

#[test]
fn failed_record_leaves_draft_unchanged() {
    let (_dir, state) = seeded();
    let before = start_shift(&state, body("06:00", "08:00")).unwrap();

    assert!(matches!(record_next(&state, "-3", ""), Err(AppError::InvalidQuantity(_))));
    assert!(matches!(record_next(&state, "100", ""), Err(AppError::MissingComment(_))));
    assert_eq!(current_shift(&state).unwrap(), before);
}

#[test]
fn remove_then_show_recomputes() {
    let (_dir, state) = seeded();
    start_shift(&state, body("06:00", "09:00")).unwrap();
    record_hour(&state, "06:00-07:00", "2500", "").unwrap();

    remove_hour(&state, "07:00-08:00").unwrap();
    let view = show_shift(&state).unwrap();

    assert_eq!(view.ledger.slots.len(), 2);
    assert_eq!(view.ledger.total_target, 5000);
    assert_eq!(view.next_pending.as_deref(), Some("08:00-09:00"));
    assert!(matches!(remove_hour(&state, "07:00-08:00"), Err(AppError::SlotNotFound(_))));
}

#[test]
fn finalize_appends_and_ends_session() {
    let (_dir, state) = seeded();
    start_shift(&state, body("06:00", "07:00")).unwrap();
    record_next(&state, "2500", "").unwrap();

    let record = finalize_shift(&state).unwrap();

    assert_eq!(record.total_output, 2500);
    assert_eq!(list_shifts(&state).len(), 1);
    assert!(matches!(current_shift(&state), Err(AppError::NoActiveShift)));
}

#[test]
fn duplicate_shift_id_is_still_appended() {
    let (_dir, state) = seeded();
    for _ in 0..2 {
        start_shift(&state, body("06:00", "07:00")).unwrap();
        record_next(&state, "2500", "").unwrap();
        finalize_shift(&state).unwrap();
    }

    let shifts = list_shifts(&state);
    assert_eq!(shifts.len(), 2);
    assert_eq!(shifts[0].shift_id, shifts[1].shift_id);
}

#[test]
fn empty_ledger_cannot_finalize_and_draft_survives() {
    let (_dir, state) = seeded();
    start_shift(&state, body("06:00", "07:00")).unwrap();
    remove_hour(&state, "06:00-07:00").unwrap();

    assert!(matches!(finalize_shift(&state), Err(AppError::EmptyLedger)));
    assert!(list_shifts(&state).is_empty());
    assert!(current_shift(&state).is_ok());
}

#[test]
fn discard_clears_draft() {
    let (_dir, state) = seeded();
    start_shift(&state, body("06:00", "07:00")).unwrap();

    assert!(discard_shift(&state).unwrap().deleted);
    assert!(!discard_shift(&state).unwrap().deleted);
}

#[test]
fn finalize_keeps_undecodable_history() {
    let (_dir, state) = seeded();
    std::fs::write(
        state.store.path(SHIFTS_FILE),
        r#"[
          {"shift_id": "950592-2025-11-01-0600", "job_number": "950592", "staff_name": "Ann Lee",
           "shift_date": "2025-11-01", "start_time": "06:00", "end_time": "14:00", "total_output": 5000},
          {"shift_id": "950592-x-0600", "job_number": "950592", "staff_name": "Ann Lee",
           "shift_date": null, "start_time": "06:00", "end_time": "14:00", "total_output": 100}
        ]"#,
    )
    .unwrap();
    start_shift(&state, body("06:00", "07:00")).unwrap();
    record_next(&state, "2500", "").unwrap();

    finalize_shift(&state).unwrap();

    let raw: Vec<serde_json::Value> =
        serde_json::from_slice(&std::fs::read(state.store.path(SHIFTS_FILE)).unwrap()).unwrap();
    assert_eq!(raw.len(), 3);
    assert!(raw[1]["shift_date"].is_null());
    assert_eq!(list_shifts(&state).len(), 2);
}

#[test]
fn failed_append_restores_draft_for_retry() {
    let (_dir, state) = seeded();
    start_shift(&state, body("06:00", "07:00")).unwrap();
    record_next(&state, "2500", "").unwrap();
    let blocker = state.store.path(SHIFTS_FILE).with_extension("json.tmp");
    std::fs::create_dir(&blocker).unwrap();

    assert!(matches!(finalize_shift(&state), Err(AppError::Io(_))));
    assert!(current_shift(&state).is_ok());
    assert!(list_shifts(&state).is_empty());

    std::fs::remove_dir(&blocker).unwrap();
    finalize_shift(&state).unwrap();
    assert_eq!(list_shifts(&state).len(), 1);
    assert!(matches!(current_shift(&state), Err(AppError::NoActiveShift)));
}
