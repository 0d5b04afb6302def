use std::collections::TryReserveError;

use thiserror::Error;

// Input longer than the 64-bit length field, or out of memory
#[derive(Debug, Error)]
pub enum Sha256Error {
    #[error("message of {len} bytes does not fit the 64-bit length field")]
    LengthOverflow { len: usize },

    #[error("failed to allocate {requested} bytes for the padded message")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type Result<T> = core::result::Result<T, Sha256Error>;
