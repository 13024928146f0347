//! Diesel and pool error mapping for the laborer repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::LaborerPersistenceError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> LaborerPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            LaborerPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to laborer persistence errors.
///
/// Unique violations come only from `laborers_email_key` (the primary key is
/// store-assigned), so they map to `DuplicateEmail`. Driver messages are
/// logged at debug and replaced with fixed text because they may quote the
/// offending row.
pub(super) fn map_diesel_error(error: DieselError) -> LaborerPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            LaborerPersistenceError::duplicate_email()
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            LaborerPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => LaborerPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            LaborerPersistenceError::query("database query error")
        }
        _ => LaborerPersistenceError::query("database error"),
    }
}
