// backend/src/output.rs

use clap::ValueEnum;
use serde::Serialize;

use crate::commands::shifts::DraftView;
use crate::models::{Job, ShiftRecord, Staff};
use crate::production::ledger::TotalState;
use crate::production::report::COLUMNS;
use crate::production::{Dashboard, JobProgress, ShiftLog};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Text => println!("{}", text_fn(data)),
    }
    Ok(())
}

/// Left-aligned columns padded to the widest cell.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.to_vec())];
    out.extend(rows.iter().map(|r| line(r.iter().map(String::as_str).collect())));
    out.join("\n")
}

pub fn jobs_text(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return "No jobs.".to_string();
    }
    let rows: Vec<Vec<String>> = jobs
        .iter()
        .map(|j| {
            vec![
                j.job_number.clone(),
                j.customer_name.clone(),
                j.product.clone(),
                j.target_quantity().map_or_else(|| "-".to_string(), |q| q.to_string()),
                j.status.to_string(),
            ]
        })
        .collect();
    render_table(&["JOB", "CUSTOMER", "PRODUCT", "TARGET", "STATUS"], &rows)
}

pub fn staff_text(staff: &[Staff]) -> String {
    if staff.is_empty() {
        return "No staff.".to_string();
    }
    let rows: Vec<Vec<String>> = staff
        .iter()
        .map(|s| {
            vec![
                s.staff_id.clone(),
                s.name.clone(),
                s.role.to_string(),
                s.shift_type.to_string(),
                s.status.to_string(),
                s.date_joined.to_string(),
            ]
        })
        .collect();
    render_table(&["ID", "NAME", "ROLE", "SHIFT TYPE", "STATUS", "DATE JOINED"], &rows)
}

pub fn shifts_text(shifts: &[ShiftRecord]) -> String {
    if shifts.is_empty() {
        return "No shifts saved.".to_string();
    }
    let rows: Vec<Vec<String>> = shifts
        .iter()
        .map(|s| {
            vec![
                s.shift_id.clone(),
                s.shift_date.clone(),
                s.job_number.clone(),
                s.staff_name.clone(),
                s.shift_type.to_string(),
                format!("{}-{}", s.start_time, s.end_time),
                s.total_output.to_string(),
            ]
        })
        .collect();
    render_table(&["SHIFT ID", "DATE", "JOB", "STAFF", "TYPE", "HOURS", "OUTPUT"], &rows)
}

pub fn total_line(total_quantity: u64, state: TotalState) -> String {
    match state {
        TotalState::Neutral => format!("Total Output: {total_quantity} units"),
        other => format!("Total Output: {total_quantity} units {other}"),
    }
}

pub fn draft_text(view: &DraftView) -> String {
    let h = &view.header;
    let rows: Vec<Vec<String>> = view
        .ledger
        .slots
        .iter()
        .map(|s| {
            vec![
                s.hour_label.clone(),
                s.quantity.to_string(),
                s.target.to_string(),
                s.achieved_pct.to_string(),
                s.running_target.to_string(),
                s.cumulative_pct.to_string(),
                s.comment.clone(),
                s.status.to_string(),
                s.tier.to_string(),
            ]
        })
        .collect();

    let mut out = vec![
        format!(
            "Job {} | {} | {} {}-{} ({})",
            h.job_number, h.staff_name, h.shift_date, h.start_time, h.end_time, h.shift_type
        ),
        render_table(
            &["HOUR", "QUANTITY", "TARGET", "ACH%", "EXPECTED", "CUM%", "COMMENT", "STATUS", "TIER"],
            &rows,
        ),
        total_line(view.ledger.total_quantity, view.ledger.total_state),
    ];
    if let Some(next) = &view.next_pending {
        out.push(format!("Next hour: {next}"));
    }
    out.join("\n")
}

pub fn progress_text(p: &JobProgress) -> String {
    format!(
        "Progress: {}% ({} / {}) {}",
        p.percent_complete, p.total_output, p.job_target, p.tier
    )
}

pub fn shift_log_text(log: &ShiftLog) -> String {
    let rows: Vec<Vec<String>> = log.rows.iter().map(|r| r.cells().to_vec()).collect();
    let mut out = vec![
        render_table(&COLUMNS, &rows),
        format!("Total Shifts: {} | Total Output: {} units", log.shift_count, log.total_output),
    ];
    match &log.job_progress {
        Some(p) => {
            out.push(format!("Total Target: {} units", p.job_target));
            out.push(progress_text(p));
        }
        None => out.push("Total Target: N/A".to_string()),
    }
    out.join("\n")
}

pub fn dashboard_text(d: &Dashboard) -> String {
    let top = d.top_performer.as_ref().map_or_else(
        || "N/A".to_string(),
        |t| format!("{} ({} units)", t.staff_name, t.total_output),
    );
    let mut out = vec![
        format!("Total Jobs: {}", d.total_jobs),
        format!("Total Output: {} units", d.total_output),
        format!("Average Progress (estimate): {}%", d.estimated_average_progress),
        format!("Top Performer: {top}"),
    ];

    let pairs = |title: &str, entries: Vec<(String, u64)>| -> String {
        if entries.is_empty() {
            return format!("{title}: no data");
        }
        let rows: Vec<Vec<String>> = entries.into_iter().map(|(k, v)| vec![k, v.to_string()]).collect();
        format!("{title}\n{}", render_table(&["KEY", "OUTPUT"], &rows))
    };
    out.push(pairs("Output by Job", d.by_job.iter().map(|(k, v)| (k.clone(), *v)).collect()));
    out.push(pairs("Output by Staff", d.by_staff.iter().map(|(k, v)| (k.clone(), *v)).collect()));
    out.push(pairs(
        "Weekly Output",
        d.weekly_trend.iter().map(|w| (format!("week {}", w.week), w.total_output)).collect(),
    ));
    out.join("\n")
}
