//! Status mapper: translates a `BankError` (or its absence) into the wire
//! status code published back to the caller.

use crate::domain::Status;
use crate::error::BankError;

/// Maps `Ok(())` to `Status::Ok` and each `BankError` variant to its wire
/// status code. `Unknown` errors are logged by the caller before this is
/// invoked; this function only does the translation.
pub fn map_result(result: &Result<(), BankError>) -> Status {
    match result {
        Ok(()) => Status::Ok,
        Err(BankError::NoMoney) => Status::NoMoney,
        Err(BankError::Deprecated) => Status::Deprecated,
        Err(BankError::NotFound) => Status::NotFound,
        Err(BankError::Unknown(_)) => Status::UnknownError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_maps_to_ok() {
        assert_eq!(map_result(&Ok(())), Status::Ok);
    }

    #[test]
    fn each_error_kind_maps_to_its_code() {
        assert_eq!(map_result(&Err(BankError::NoMoney)), Status::NoMoney);
        assert_eq!(map_result(&Err(BankError::Deprecated)), Status::Deprecated);
        assert_eq!(map_result(&Err(BankError::NotFound)), Status::NotFound);
        assert_eq!(
            map_result(&Err(BankError::Unknown("boom".into()))),
            Status::UnknownError
        );
    }
}
