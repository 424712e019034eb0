// backend/src/models/mod.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

mod macros;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

// ───────────────────────────────────────
// Vocabularies
// ───────────────────────────────────────
crate::labeled_enum!(JobStatus {
    Pending => "Pending",
    InProgress => "InProgress",
    Completed => "Completed",
});

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Pending
    }
}

crate::labeled_enum!(StaffStatus {
    Active => "Active",
    Inactive => "Inactive",
});

// A record with no status is never offered as active staff.
impl Default for StaffStatus {
    fn default() -> Self {
        StaffStatus::Inactive
    }
}

crate::labeled_enum!(StaffRole {
    TeamLeader => "Team Leader",
    Operator => "Operator",
    Supervisor => "Supervisor",
});

impl Default for StaffRole {
    fn default() -> Self {
        StaffRole::Operator
    }
}

crate::labeled_enum!(ShiftType {
    Morning => "Morning",
    Afternoon => "Afternoon",
    Night => "Night",
    Custom => "Custom",
});

impl Default for ShiftType {
    fn default() -> Self {
        ShiftType::Morning
    }
}

// ───────────────────────────────────────
// Jobs
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub job_number: String,
    pub customer_name: String,
    pub product: String,
    #[serde(default)]
    pub stocks: Vec<StockItem>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default = "Utc::now")]
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub date_updated: Option<DateTime<Utc>>,
}

impl Job {
    /// The first stock item's quantity is the job's total target.
    pub fn target_quantity(&self) -> Option<u64> {
        self.stocks.first().map(|s| s.quantity)
    }

    pub fn matches_number(&self, job_number: &str) -> bool {
        normalize_job_number(&self.job_number) == normalize_job_number(job_number)
    }
}

// ───────────────────────────────────────
// Staff directory
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub staff_id: String,
    pub name: String,
    #[serde(default)]
    pub role: StaffRole,
    #[serde(default)]
    pub shift_type: ShiftType,
    #[serde(default)]
    pub status: StaffStatus,
    pub date_joined: NaiveDate,
}

impl Staff {
    pub fn is_active(&self) -> bool {
        self.status == StaffStatus::Active
    }
}

// ───────────────────────────────────────
// Shift output
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyOutput {
    pub hour_label: String,
    pub quantity: u64,
    pub target: u64,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub shift_id: String,
    pub job_number: String,
    pub staff_name: String,
    pub shift_date: String,       // YYYY-MM-DD, kept verbatim
    pub start_time: String,       // HH:MM
    pub end_time: String,         // HH:MM
    #[serde(default)]
    pub shift_type: ShiftType,
    #[serde(default)]
    pub hourly_outputs: Vec<HourlyOutput>,
    pub total_output: u64,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

// ───────────────────────────────────────
// Audit trail (declared, no producer yet)
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub log_id: String,
    pub job_number: String,
    pub action: String,
    #[serde(default, alias = "by")]
    pub actor: Option<String>,
    pub timestamp: DateTime<Utc>,
}

// ───────────────────────────────────────
// DTOs returned by commands
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted { pub deleted: bool }

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetSummary { pub cleared: Vec<String> }

// ───────────────────────────────────────
// Normalization helpers
// ───────────────────────────────────────
pub fn normalize_job_number(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest ("minimallows/6g" → "Minimallows/6G").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

pub(crate) fn squash_label(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
