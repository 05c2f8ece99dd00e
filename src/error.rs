//! Error taxonomy for the billing engine.
//!
//! Mirrors the shape of the teacher's `transfer::error::TransferError`: a
//! flat `thiserror` enum, one `From` impl per upstream error type, and a
//! single place (`status.rs`) that knows how to turn a `BankError` into a
//! wire status code.

use thiserror::Error;

const UNIQUE_VIOLATION: &str = "23505";

#[derive(Error, Debug)]
pub enum BankError {
    #[error("insufficient balance")]
    NoMoney,

    #[error("operation already applied")]
    Deprecated,

    #[error("no matching row")]
    NotFound,

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl From<sqlx::Error> for BankError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => BankError::NotFound,
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                BankError::Deprecated
            }
            other => BankError::Unknown(other.to_string()),
        }
    }
}

/// True when `err` is a Postgres unique-constraint violation, i.e. the
/// duplicate-submission fault this service treats as `Deprecated`.
pub fn is_duplicate_key(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
    )
}

/// Re-map a store-layer error, translating a duplicate-key fault into
/// `Deprecated` exactly once, at the call site that issued the insert.
pub fn handle_deprecated(err: sqlx::Error) -> BankError {
    if is_duplicate_key(&err) {
        BankError::Deprecated
    } else {
        BankError::from(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = BankError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, BankError::NotFound));
    }
}
