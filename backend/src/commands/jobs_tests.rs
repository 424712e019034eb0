use super::*;
use tempfile::tempdir;

fn body(number: &str) -> CreateJobBody {
    CreateJobBody {
        job_number: number.into(),
        customer_name: "aimia foods".into(),
        product: "minimallows/6g".into(),
        stock_name: "minimallows pink&white".into(),
        stock_quantity: "20000".into(),
    }
}

#[test]
fn create_normalizes_and_persists() {
    let dir = tempdir().unwrap();
    let state = AppState::open(dir.path()).unwrap();

    let job = create_job(&state, body(" ab12 ")).unwrap();

    assert_eq!(job.job_number, "AB12");
    assert_eq!(job.customer_name, "Aimia Foods");
    assert_eq!(job.product, "Minimallows/6G");
    assert_eq!(job.stocks[0].name, "Minimallows Pink&White");
    assert_eq!(job.target_quantity(), Some(20_000));
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(list_jobs(&state).len(), 1);
}

#[test]
fn duplicate_is_case_insensitive_and_store_unchanged() {
    let dir = tempdir().unwrap();
    let state = AppState::open(dir.path()).unwrap();
    create_job(&state, body("ab12")).unwrap();
    let before = std::fs::read(state.store.path(JOBS_FILE)).unwrap();

    let err = create_job(&state, body("AB12")).unwrap_err();

    assert!(matches!(err, AppError::DuplicateJobNumber(n) if n == "AB12"));
    assert_eq!(std::fs::read(state.store.path(JOBS_FILE)).unwrap(), before);
}

#[yare::parameterized(
    job_number = { "job_number" },
    customer = { "customer_name" },
    product = { "product" },
    stock_name = { "stock_name" },
    stock_quantity = { "stock_quantity" },
)]
fn blank_fields_are_rejected(field: &str) {
    let dir = tempdir().unwrap();
    let state = AppState::open(dir.path()).unwrap();
    let mut b = body("J1");
    match field {
        "job_number" => b.job_number.clear(),
        "customer_name" => b.customer_name = "  ".into(),
        "product" => b.product.clear(),
        "stock_name" => b.stock_name.clear(),
        _ => b.stock_quantity.clear(),
    }

    let err = create_job(&state, b).unwrap_err();
    assert!(matches!(err, AppError::MissingField(f) if f == field));
    assert!(list_jobs(&state).is_empty());
}

#[test]
fn non_numeric_quantity_is_rejected() {
    let dir = tempdir().unwrap();
    let state = AppState::open(dir.path()).unwrap();
    let mut b = body("J1");
    b.stock_quantity = "lots".into();

    assert!(matches!(create_job(&state, b), Err(AppError::InvalidQuantity(_))));
}

#[test]
fn status_update_stamps_date() {
    let dir = tempdir().unwrap();
    let state = AppState::open(dir.path()).unwrap();
    create_job(&state, body("J1")).unwrap();

    let job = set_job_status(&state, "j1", JobStatus::InProgress).unwrap();

    assert_eq!(job.status, JobStatus::InProgress);
    assert!(job.date_updated.is_some());
    assert_eq!(get_job(&state, "J1").unwrap().status, JobStatus::InProgress);
    assert!(matches!(
        set_job_status(&state, "nope", JobStatus::Completed),
        Err(AppError::JobNotFound(_))
    ));
}

#[test]
fn delete_reports_whether_removed() {
    let dir = tempdir().unwrap();
    let state = AppState::open(dir.path()).unwrap();
    create_job(&state, body("J1")).unwrap();

    assert!(delete_job(&state, "j1").unwrap().deleted);
    assert!(!delete_job(&state, "j1").unwrap().deleted);
    assert!(list_jobs(&state).is_empty());
}

#[test]
fn undecodable_job_still_blocks_its_number_and_survives_delete() {
    let dir = tempdir().unwrap();
    let state = AppState::open(dir.path()).unwrap();
    create_job(&state, body("ab12")).unwrap();
    let mut raw: Vec<serde_json::Value> =
        serde_json::from_slice(&std::fs::read(state.store.path(JOBS_FILE)).unwrap()).unwrap();
    raw.push(serde_json::json!({
        "job_number": "950592",
        "customer_name": "Aimia Foods",
        "product": "Minimallows/6G",
        "stocks": [{"name": "Pink&White", "quantity": -5}]
    }));
    std::fs::write(state.store.path(JOBS_FILE), serde_json::to_vec(&raw).unwrap()).unwrap();

    assert!(matches!(
        create_job(&state, body("950592")),
        Err(AppError::DuplicateJobNumber(_))
    ));
    assert!(delete_job(&state, "AB12").unwrap().deleted);

    let after: Vec<serde_json::Value> =
        serde_json::from_slice(&std::fs::read(state.store.path(JOBS_FILE)).unwrap()).unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0]["job_number"], "950592");
}
