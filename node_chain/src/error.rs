#[cfg(feature = "std")]
use thiserror::Error;

/// Chain container errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum ChainError {
    /// Index outside the occupied range `[0, len)`
    #[cfg_attr(feature = "std", error("Index {0} is out of bounds for length {1}"))]
    OutOfBounds(usize, usize),

    /// Peek or pop on a chain holding no values
    #[cfg_attr(feature = "std", error("Chain is empty"))]
    Empty,

    /// `find` walked the whole chain without a match
    #[cfg_attr(feature = "std", error("Value not found"))]
    NotFound,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ChainError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChainError::OutOfBounds(i, l) => {
                write!(f, "Index {} is out of bounds for length {}", i, l)
            }
            ChainError::Empty => write!(f, "Chain is empty"),
            ChainError::NotFound => write!(f, "Value not found"),
        }
    }
}
