use std::prelude::v1::*;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    IndexOutOfRange { index: usize, len: usize },
    CapacityExceeded { capacity: usize },
    Empty,
    // cursor has no element to act on: nothing returned yet, or it was already removed
    NoCurrentElement,
    InvalidRange { from: usize, to: usize, len: usize },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: len: {}, access: {}", len, index)
            }
            RingError::CapacityExceeded { capacity } => {
                write!(f, "capacity exceeded: {}", capacity)
            }
            RingError::Empty => write!(f, "container is empty"),
            RingError::NoCurrentElement => write!(f, "cursor has no current element"),
            RingError::InvalidRange { from, to, len } => {
                write!(f, "invalid range {}..{} for len {}", from, to, len)
            }
        }
    }
}

impl std::error::Error for RingError {}
