//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Record-store related
    // ---------------------------
    #[error("Record store error: {0}")]
    Store(String),

    #[error("Record store parse error: {0}")]
    StoreParse(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    #[error("Invalid severity (expected 1-5): {0}")]
    InvalidSeverity(u8),

    #[error("Invalid time bucket: {0}")]
    InvalidTimeBucket(String),

    #[error("Invalid pain location code: {0}")]
    InvalidLocation(String),

    #[error("Invalid trigger code: {0}")]
    InvalidTrigger(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Incomplete episode: {0}")]
    Validation(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
