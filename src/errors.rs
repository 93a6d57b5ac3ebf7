//! Unified application error type.
//! Every run-level failure (unreadable input, bad header, unwritable output,
//! broken configuration) is an AppError. Row-level validation problems are
//! NOT errors here: they are collected as `ValidationError` values and never
//! abort a run.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input file shape
    // ---------------------------
    #[error("CSV has no header row")]
    NoHeader,

    #[error("CSV header is missing required columns: {}", .0.join(","))]
    MissingColumns(Vec<String>),

    #[error("CSV header repeats columns: {}", .0.join(","))]
    DuplicateColumns(Vec<String>),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
