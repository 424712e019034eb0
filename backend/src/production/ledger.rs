// backend/src/production/ledger.rs

use serde::{Deserialize, Serialize};

use super::percent;
use crate::error::{AppError, AppResult};
use crate::models::HourlyOutput;

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;

/// Reasons offered when an hour comes in under target. "Other" stands for
/// free text and is never stored on its own.
pub const SHORTFALL_REASONS: [&str; 19] = [
    "Machine cleaning",
    "Coder issue",
    "Stock finished",
    "Waiting on engineer",
    "Film changeover",
    "Power outage",
    "Maintenance",
    "Staff shortage",
    "Training",
    "Quality issue",
    "Inspection delay",
    "Setup time",
    "Breakdown",
    "Calibration",
    "Material jam",
    "Material defect",
    "Break time",
    "Shift end",
    "Other",
];

/// Maps a typed reason onto the vocabulary spelling; anything else is kept
/// as free text.
pub fn normalize_reason(input: &str) -> String {
    let trimmed = input.trim();
    match SHORTFALL_REASONS.iter().find(|r| r.eq_ignore_ascii_case(trimmed)) {
        Some(&"Other") => String::new(),
        Some(r) => (*r).to_string(),
        None => trimmed.to_string(),
    }
}

/// Parses keyed-in output. Only whole numbers of 0 or more are accepted.
pub fn parse_quantity(input: &str) -> AppResult<u64> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::InvalidQuantity(input.to_string()))
}

crate::labeled_enum!(SlotStatus {
    Under => "Under",
    Met => "Met",
    Over => "Over",
});

crate::labeled_enum!(HourTier {
    NoData => "NoData",
    Critical => "Critical",
    Warning => "Warning",
    OnTarget => "OnTarget",
    AboveTarget => "AboveTarget",
});

crate::labeled_enum!(TotalState {
    OnTarget => "On Target",
    BehindTarget => "Behind Target",
    Neutral => "",
});

impl HourTier {
    pub fn classify(quantity: u64, achieved_pct: f64) -> Self {
        if quantity == 0 {
            HourTier::NoData
        } else if achieved_pct < 80.0 {
            HourTier::Critical
        } else if achieved_pct < 90.0 {
            HourTier::Warning
        } else if achieved_pct <= 100.0 {
            HourTier::OnTarget
        } else {
            HourTier::AboveTarget
        }
    }
}

/// Derived figures for one slot, computed in sequence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotMetrics {
    pub hour_label: String,
    pub quantity: u64,
    pub target: u64,
    pub achieved_pct: f64,
    pub running_quantity: u64,
    pub running_target: u64,
    pub cumulative_pct: f64,
    pub comment: String,
    pub status: SlotStatus,
    pub tier: HourTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerView {
    pub slots: Vec<SlotMetrics>,
    pub total_quantity: u64,
    pub total_target: u64,
    pub total_state: TotalState,
}

/// The in-progress, ordered hours of one shift.
///
/// Slots are addressed by hour label, which the schedule generator keeps
/// unique. Recording targets the first slot with that label whose quantity
/// is still 0, so an hour recorded as 0 stays pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    slots: Vec<HourlyOutput>,
}

impl From<Vec<HourlyOutput>> for Ledger {
    fn from(slots: Vec<HourlyOutput>) -> Self {
        Self { slots }
    }
}

impl Ledger {
    pub fn slots(&self) -> &[HourlyOutput] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn total_quantity(&self) -> u64 {
        self.slots.iter().map(|s| s.quantity).sum()
    }

    pub fn next_pending(&self) -> Option<&HourlyOutput> {
        self.slots.iter().find(|s| s.quantity == 0)
    }

    /// First hour under target that carries no comment.
    pub fn first_unexplained_shortfall(&self) -> Option<&HourlyOutput> {
        self.slots
            .iter()
            .find(|s| s.quantity < s.target && s.comment.trim().is_empty())
    }

    pub fn record_output(
        &mut self,
        hour_label: &str,
        quantity: u64,
        comment: &str,
    ) -> AppResult<&HourlyOutput> {
        let idx = self
            .slots
            .iter()
            .position(|s| s.hour_label == hour_label && s.quantity == 0)
            .ok_or_else(|| AppError::NoPendingSlot(hour_label.to_string()))?;

        let comment = normalize_reason(comment);
        if quantity < self.slots[idx].target && comment.is_empty() {
            return Err(AppError::MissingComment(hour_label.to_string()));
        }

        let slot = &mut self.slots[idx];
        slot.quantity = quantity;
        slot.comment = comment;
        Ok(&self.slots[idx])
    }

    pub fn remove_slot(&mut self, hour_label: &str) -> AppResult<HourlyOutput> {
        let idx = self
            .slots
            .iter()
            .position(|s| s.hour_label == hour_label)
            .ok_or_else(|| AppError::SlotNotFound(hour_label.to_string()))?;
        Ok(self.slots.remove(idx))
    }

    /// Recomputes every running figure from the first slot.
    pub fn view(&self) -> LedgerView {
        let mut running_quantity = 0u64;
        let mut running_target = 0u64;
        let mut rows = Vec::with_capacity(self.slots.len());

        for s in &self.slots {
            running_quantity += s.quantity;
            running_target += s.target;

            let achieved_pct = percent(s.quantity, s.target, 1);
            let status = match s.quantity.cmp(&s.target) {
                std::cmp::Ordering::Less => SlotStatus::Under,
                std::cmp::Ordering::Equal => SlotStatus::Met,
                std::cmp::Ordering::Greater => SlotStatus::Over,
            };

            rows.push(SlotMetrics {
                hour_label: s.hour_label.clone(),
                quantity: s.quantity,
                target: s.target,
                achieved_pct,
                running_quantity,
                running_target,
                cumulative_pct: percent(running_quantity, running_target, 1),
                comment: s.comment.clone(),
                status,
                tier: HourTier::classify(s.quantity, achieved_pct),
            });
        }

        let total_state = if running_target == 0 {
            TotalState::Neutral
        } else if running_quantity >= running_target {
            TotalState::OnTarget
        } else {
            TotalState::BehindTarget
        };

        LedgerView {
            slots: rows,
            total_quantity: running_quantity,
            total_target: running_target,
            total_state,
        }
    }
}
