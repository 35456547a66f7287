// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    #[error("Buffer length {len} is not a multiple of the {width}-byte lane width")]
    MisalignedLength { len: usize, width: usize },
}

pub type Result<T> = std::result::Result<T, SwapError>;
