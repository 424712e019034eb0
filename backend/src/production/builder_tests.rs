use super::*;
use crate::models::HourlyOutput;
use proptest::prelude::*;

fn header() -> ShiftHeader {
    ShiftHeader {
        job_number: "950592".into(),
        staff_name: "ann lee".into(),
        shift_date: "2025-11-03".into(),
        start_time: "06:00".into(),
        end_time: "09:00".into(),
        shift_type: ShiftType::Morning,
    }
}

fn filled(quantities: &[u64]) -> Ledger {
    Ledger::from(
        quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| HourlyOutput {
                hour_label: format!("{:02}:00-{:02}:00", 6 + i, 7 + i),
                quantity: q,
                target: 2500,
                comment: if q < 2500 { "Training".into() } else { String::new() },
            })
            .collect::<Vec<_>>(),
    )
}

#[test]
fn finalize_builds_record() {
    let record = finalize(&header(), &filled(&[2500, 2000, 2500])).unwrap();

    assert_eq!(record.shift_id, "950592-2025-11-03-0600");
    assert_eq!(record.staff_name, "Ann Lee");
    assert_eq!(record.total_output, 7000);
    assert_eq!(record.hourly_outputs.len(), 3);
    assert_eq!(record.shift_type, ShiftType::Morning);
}

#[yare::parameterized(
    job = { "job_number" },
    staff = { "staff_name" },
    date = { "shift_date" },
    start = { "start_time" },
    end = { "end_time" },
)]
fn blank_header_field_is_missing(field: &str) {
    let mut h = header();
    match field {
        "job_number" => h.job_number = " ".into(),
        "staff_name" => h.staff_name = String::new(),
        "shift_date" => h.shift_date = String::new(),
        "start_time" => h.start_time = "  ".into(),
        _ => h.end_time = String::new(),
    }

    let err = finalize(&h, &filled(&[2500])).unwrap_err();
    assert!(matches!(err, AppError::MissingField(f) if f == field));
}

#[test]
fn empty_ledger_is_rejected() {
    let err = finalize(&header(), &Ledger::default()).unwrap_err();
    assert!(matches!(err, AppError::EmptyLedger));
}

#[test]
fn unexplained_shortfall_blocks_finalize() {
    let ledger = Ledger::from(vec![HourlyOutput {
        hour_label: "06:00-07:00".into(),
        quantity: 10,
        target: 2500,
        comment: String::new(),
    }]);

    let err = finalize(&header(), &ledger).unwrap_err();
    assert!(matches!(err, AppError::MissingComment(h) if h == "06:00-07:00"));
}

#[test]
fn shift_id_strips_every_colon() {
    assert_eq!(shift_id("J1", "2025-01-01", "06:30"), "J1-2025-01-01-0630");
}

proptest! {
    #[test]
    fn total_output_equals_sum_of_hours(quantities in proptest::collection::vec(0u64..10_000, 1..12)) {
        let record = finalize(&header(), &filled(&quantities)).unwrap();
        prop_assert_eq!(record.total_output, quantities.iter().sum::<u64>());
    }
}
