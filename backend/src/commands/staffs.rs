// backend/src/commands/staffs.rs

use chrono::Local;
use tracing::info;

use crate::db::STAFF_FILE;
use crate::error::{AppError, AppResult};
use crate::models::{title_case, Deleted, ShiftType, Staff, StaffRole, StaffStatus};
use crate::AppState;

#[cfg(test)]
#[path = "staffs_tests.rs"]
mod tests;

const STAFF_ID_PREFIX: &str = "STF";

#[derive(Debug, Clone)]
pub struct CreateStaffBody {
    pub name: String,
    pub role: StaffRole,
    pub shift_type: ShiftType,
    pub status: StaffStatus,
}

impl Default for CreateStaffBody {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: StaffRole::TeamLeader,
            shift_type: ShiftType::Morning,
            status: StaffStatus::Active,
        }
    }
}

/// `STF` + 3-digit number one past the highest existing one. Ids that do not
/// follow the pattern are ignored.
pub fn next_staff_id<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    let last = existing
        .into_iter()
        .filter_map(|id| id.strip_prefix(STAFF_ID_PREFIX)?.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{STAFF_ID_PREFIX}{:03}", last + 1)
}

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

pub fn create_staff(state: &AppState, b: CreateStaffBody) -> AppResult<Staff> {
    let name = title_case(b.name.trim());
    if name.is_empty() {
        return Err(AppError::MissingField("name"));
    }
    if !is_valid_name(&name) {
        return Err(AppError::InvalidStaffName(name));
    }

    let mut staff = state.store.load_records::<Staff>(STAFF_FILE);
    let staff_id = next_staff_id(
        staff
            .rows
            .iter()
            .map(|s| s.staff_id.as_str())
            .chain(staff.undecoded_strs("staff_id")),
    );
    let member = Staff {
        staff_id,
        name,
        role: b.role,
        shift_type: b.shift_type,
        status: b.status,
        date_joined: Local::now().date_naive(),
    };
    staff.rows.push(member.clone());
    state.store.save_records(STAFF_FILE, &staff)?;

    info!(staff_id = %member.staff_id, name = %member.name, "staff registered");
    Ok(member)
}

pub fn list_staff(state: &AppState) -> Vec<Staff> {
    state.store.load(STAFF_FILE)
}

pub fn active_staff_names(state: &AppState) -> Vec<String> {
    list_staff(state)
        .into_iter()
        .filter(Staff::is_active)
        .map(|s| s.name)
        .collect()
}

pub fn set_staff_status(state: &AppState, staff_id: &str, status: StaffStatus) -> AppResult<Staff> {
    let mut staff = state.store.load_records::<Staff>(STAFF_FILE);
    let member = staff
        .rows
        .iter_mut()
        .find(|s| s.staff_id.eq_ignore_ascii_case(staff_id.trim()))
        .ok_or_else(|| AppError::StaffNotFound(staff_id.to_string()))?;
    member.status = status;
    let updated = member.clone();

    state.store.save_records(STAFF_FILE, &staff)?;
    info!(staff_id = %updated.staff_id, status = %status, "staff status changed");
    Ok(updated)
}

pub fn delete_staff(state: &AppState, staff_id: &str) -> AppResult<Deleted> {
    let mut staff = state.store.load_records::<Staff>(STAFF_FILE);
    let before = staff.rows.len();
    staff.rows.retain(|s| !s.staff_id.eq_ignore_ascii_case(staff_id.trim()));
    let deleted = staff.rows.len() < before;
    if deleted {
        state.store.save_records(STAFF_FILE, &staff)?;
        info!(staff_id, "staff deleted");
    }
    Ok(Deleted { deleted })
}
