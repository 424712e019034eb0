// backend/src/lib.rs

pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod output;
pub mod production;

pub use error::{AppError, AppResult};

/// Everything a command needs: the opened store.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: db::Store,
}

impl AppState {
    pub fn open(data_dir: impl Into<std::path::PathBuf>) -> AppResult<Self> {
        Ok(Self { store: db::open(data_dir)? })
    }
}
