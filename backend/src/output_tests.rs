use super::*;
use crate::models::{JobStatus, ShiftType, StockItem};
use crate::production::report::shift_log;
use crate::production::ShiftLogFilter;
use chrono::Utc;

fn job(number: &str, target: u64) -> Job {
    Job {
        job_number: number.into(),
        customer_name: "Aimia Foods".into(),
        product: "Minimallows/6G".into(),
        stocks: vec![StockItem { name: "Pink&White".into(), quantity: target }],
        status: JobStatus::InProgress,
        date_created: Utc::now(),
        date_updated: None,
    }
}

fn shift(job: &str, total: u64) -> ShiftRecord {
    ShiftRecord {
        shift_id: format!("{job}-2025-11-03-0600"),
        job_number: job.into(),
        staff_name: "Ann Lee".into(),
        shift_date: "2025-11-03".into(),
        start_time: "06:00".into(),
        end_time: "14:00".into(),
        shift_type: ShiftType::Morning,
        hourly_outputs: Vec::new(),
        total_output: total,
        created_at: Utc::now(),
    }
}

#[test]
fn table_pads_to_widest_cell() {
    let text = render_table(
        &["A", "BB"],
        &[vec!["long".into(), "x".into()], vec!["s".into(), "yyy".into()]],
    );
    assert_eq!(text, "A     BB\nlong  x\ns     yyy");
}

#[test]
fn empty_lists_say_so() {
    assert_eq!(jobs_text(&[]), "No jobs.");
    assert_eq!(staff_text(&[]), "No staff.");
    assert_eq!(shifts_text(&[]), "No shifts saved.");
}

#[yare::parameterized(
    on_target = { 7000, TotalState::OnTarget, "Total Output: 7000 units On Target" },
    behind = { 10, TotalState::BehindTarget, "Total Output: 10 units Behind Target" },
    neutral = { 0, TotalState::Neutral, "Total Output: 0 units" },
)]
fn total_line_appends_state(total: u64, state: TotalState, expected: &str) {
    assert_eq!(total_line(total, state), expected);
}

#[test]
fn jobs_table_shows_target() {
    let text = jobs_text(&[job("950592", 10_000)]);
    assert!(text.starts_with("JOB"));
    assert!(text.contains("950592"));
    assert!(text.contains("10000"));
    assert!(text.contains("InProgress"));
}

#[test]
fn shift_log_includes_progress_when_job_filtered() {
    let jobs = [job("950592", 10_000)];
    let shifts = [shift("950592", 8000)];
    let filter = ShiftLogFilter { job_number: Some("950592".into()), ..Default::default() };

    let text = shift_log_text(&shift_log(&jobs, &shifts, &filter));

    assert!(text.contains("Total Shifts: 1 | Total Output: 8000 units"));
    assert!(text.contains("Total Target: 10000 units"));
    assert!(text.contains("Progress: 80% (8000 / 10000)"));
}

#[test]
fn shift_log_without_job_filter_has_no_target() {
    let text = shift_log_text(&shift_log(&[], &[shift("X", 5)], &ShiftLogFilter::default()));
    assert!(text.ends_with("Total Target: N/A"));
}
