// backend/src/production/schedule.rs

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::HourlyOutput;

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;

/// Expected units per full production hour.
pub const BASE_TARGET: u64 = 2500;

/// Fixed business breaks: (start, minutes).
pub const DEFAULT_BREAKS: [(&str, u32); 2] = [("09:00", 20), ("12:00", 15)];

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    pub start: NaiveTime,
    pub minutes: u32,
}

impl BreakWindow {
    pub fn parse(start: &str, minutes: u32) -> AppResult<Self> {
        Ok(Self { start: parse_hhmm(start)?, minutes })
    }

    pub fn defaults() -> AppResult<Vec<Self>> {
        DEFAULT_BREAKS
            .iter()
            .map(|(start, minutes)| Self::parse(start, *minutes))
            .collect()
    }
}

pub fn parse_hhmm(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| AppError::InvalidTimeFormat(s.to_string()))
}

fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

fn fmt_minute(m: u32) -> String {
    let m = m % MINUTES_PER_DAY;
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Target for one hour holding a break of `minutes`, rounded half-to-even and
/// never below 1.
pub fn break_adjusted_target(base_target: u64, minutes: u32) -> u64 {
    let working = 60u32.saturating_sub(minutes);
    let t = (base_target as f64 * f64::from(working) / 60.0).round_ties_even() as u64;
    t.max(1)
}

/// Lays out one-hour slots from `start_time` until the slot start reaches
/// `end_time`. The last slot may run past `end_time`; an end at or before
/// the start yields no slots (no wrap past midnight).
///
/// A slot whose `[start, start+1h)` contains a break start gets the
/// break-adjusted target. Breaks are checked in list order and only the
/// first match applies.
pub fn generate(
    start_time: &str,
    end_time: &str,
    base_target: u64,
    breaks: &[BreakWindow],
) -> AppResult<Vec<HourlyOutput>> {
    let start = minute_of_day(parse_hhmm(start_time)?);
    let end = minute_of_day(parse_hhmm(end_time)?);

    let mut slots = Vec::new();
    let mut current = start;
    while current < end {
        let next = current + 60;
        let target = breaks
            .iter()
            .find(|b| {
                let at = minute_of_day(b.start);
                current <= at && at < next
            })
            .map_or(base_target, |b| break_adjusted_target(base_target, b.minutes));

        slots.push(HourlyOutput {
            hour_label: format!("{}-{}", fmt_minute(current), fmt_minute(next)),
            quantity: 0,
            target,
            comment: String::new(),
        });
        current = next;
    }
    Ok(slots)
}
