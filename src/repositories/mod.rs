//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for database entities. Every operation is a single method
//! returning a typed result; a lookup that matches no rows returns
//! `Ok(None)` rather than an error.

use thiserror::Error;

pub mod demo;
pub mod issue;
pub mod landlord;
pub mod unit;

pub use demo::DemoRepository;
pub use issue::IssueRepository;
pub use landlord::LandlordRepository;
pub use unit::UnitRepository;

/// Errors surfaced by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl RepositoryError {
    pub fn validation_error<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }
}
