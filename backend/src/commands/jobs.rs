// backend/src/commands/jobs.rs

use chrono::Utc;
use tracing::info;

use super::required;
use crate::db::JOBS_FILE;
use crate::error::{AppError, AppResult};
use crate::models::{normalize_job_number, title_case, Deleted, Job, JobStatus, StockItem};
use crate::production::ledger::parse_quantity;
use crate::AppState;

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;

#[derive(Debug, Clone, Default)]
pub struct CreateJobBody {
    pub job_number: String,
    pub customer_name: String,
    pub product: String,
    pub stock_name: String,
    pub stock_quantity: String,
}

pub fn create_job(state: &AppState, b: CreateJobBody) -> AppResult<Job> {
    let job_number = normalize_job_number(&required(&b.job_number, "job_number")?);
    let customer_name = title_case(&required(&b.customer_name, "customer_name")?);
    let product = title_case(&required(&b.product, "product")?);
    let stock_name = title_case(&required(&b.stock_name, "stock_name")?);
    let quantity = parse_quantity(&required(&b.stock_quantity, "stock_quantity")?)?;

    let mut jobs = state.store.load_records::<Job>(JOBS_FILE);
    let taken = jobs.rows.iter().any(|j| j.matches_number(&job_number))
        || jobs
            .undecoded_strs("job_number")
            .any(|n| normalize_job_number(n) == job_number);
    if taken {
        return Err(AppError::DuplicateJobNumber(job_number));
    }

    let job = Job {
        job_number,
        customer_name,
        product,
        stocks: vec![StockItem { name: stock_name, quantity }],
        status: JobStatus::Pending,
        date_created: Utc::now(),
        date_updated: None,
    };
    jobs.rows.push(job.clone());
    state.store.save_records(JOBS_FILE, &jobs)?;

    info!(job_number = %job.job_number, target = quantity, "job created");
    Ok(job)
}

pub fn list_jobs(state: &AppState) -> Vec<Job> {
    state.store.load(JOBS_FILE)
}

pub fn get_job(state: &AppState, job_number: &str) -> AppResult<Job> {
    list_jobs(state)
        .into_iter()
        .find(|j| j.matches_number(job_number))
        .ok_or_else(|| AppError::JobNotFound(normalize_job_number(job_number)))
}

pub fn set_job_status(state: &AppState, job_number: &str, status: JobStatus) -> AppResult<Job> {
    let mut jobs = state.store.load_records::<Job>(JOBS_FILE);
    let job = jobs
        .rows
        .iter_mut()
        .find(|j| j.matches_number(job_number))
        .ok_or_else(|| AppError::JobNotFound(normalize_job_number(job_number)))?;
    job.status = status;
    job.date_updated = Some(Utc::now());
    let updated = job.clone();

    state.store.save_records(JOBS_FILE, &jobs)?;
    info!(job_number = %updated.job_number, status = %status, "job status changed");
    Ok(updated)
}

pub fn delete_job(state: &AppState, job_number: &str) -> AppResult<Deleted> {
    let mut jobs = state.store.load_records::<Job>(JOBS_FILE);
    let before = jobs.rows.len();
    jobs.rows.retain(|j| !j.matches_number(job_number));
    let deleted = jobs.rows.len() < before;
    if deleted {
        state.store.save_records(JOBS_FILE, &jobs)?;
        info!(job_number = %normalize_job_number(job_number), "job deleted");
    }
    Ok(Deleted { deleted })
}
