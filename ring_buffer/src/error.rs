#[cfg(feature = "std")]
use thiserror::Error;

/// Ring buffer errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum RingError {
    /// Enqueue or push on a buffer already holding `capacity` values
    #[cfg_attr(feature = "std", error("Buffer is full (capacity {0})"))]
    Full(usize),

    /// Peek, pop, or dequeue on a buffer holding no values
    #[cfg_attr(feature = "std", error("Buffer is empty"))]
    Empty,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for RingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RingError::Full(cap) => write!(f, "Buffer is full (capacity {})", cap),
            RingError::Empty => write!(f, "Buffer is empty"),
        }
    }
}
