use std::collections::TryReserveError;

use thiserror::Error;

pub type BigIntResult<T> = Result<T, BigIntError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    #[error("Allocation error: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("Invalid capacity: requested {requested} blocks, source needs at least {required}")]
    InvalidCapacity { requested: usize, required: usize },
}
