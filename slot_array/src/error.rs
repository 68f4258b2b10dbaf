#[cfg(feature = "std")]
use thiserror::Error;

/// Array errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum ArrayError {
    /// Index outside the occupied range `[0, len)`
    #[cfg_attr(feature = "std", error("Index {0} is out of bounds for length {1}"))]
    OutOfBounds(usize, usize),

    /// Push on an array already holding `capacity` values
    #[cfg_attr(feature = "std", error("Array is full (capacity {0})"))]
    Full(usize),

    /// `find` scanned the whole occupied range without a match
    #[cfg_attr(feature = "std", error("Value not found"))]
    NotFound,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArrayError::OutOfBounds(i, l) => {
                write!(f, "Index {} is out of bounds for length {}", i, l)
            }
            ArrayError::Full(cap) => write!(f, "Array is full (capacity {})", cap),
            ArrayError::NotFound => write!(f, "Value not found"),
        }
    }
}
