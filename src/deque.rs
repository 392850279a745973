use std::prelude::v1::*;

use std::iter::Rev;

use crate::{Iter, List, RingError, RingVec};

/// Double-ended queue capability.
///
/// `add_*`, `remove_*`, `first`/`last` and their aliases fail with a
/// [`RingError`]; `offer_*`, `poll_*` and `peek_*` report through their
/// return value instead.
pub trait Deque<T> {
    type Descending<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn add_first(&mut self, value: T) -> Result<(), RingError>;
    fn add_last(&mut self, value: T) -> Result<(), RingError>;
    fn poll_first(&mut self) -> Option<T>;
    fn poll_last(&mut self) -> Option<T>;
    fn peek_first(&self) -> Option<&T>;
    fn peek_last(&self) -> Option<&T>;
    fn remove_first_occurrence(&mut self, value: &T) -> bool
    where
        T: PartialEq;
    fn remove_last_occurrence(&mut self, value: &T) -> bool
    where
        T: PartialEq;
    /// Read-only; to remove while walking backwards use `RingVec::cursor_back`.
    fn descending_iter(&self) -> Self::Descending<'_>;

    fn offer_first(&mut self, value: T) -> bool {
        match self.add_first(value) {
            Ok(()) => true,
            Err(err) => {
                glog::debug!("offer_first rejected: {}", err);
                false
            }
        }
    }

    fn offer_last(&mut self, value: T) -> bool {
        match self.add_last(value) {
            Ok(()) => true,
            Err(err) => {
                glog::debug!("offer_last rejected: {}", err);
                false
            }
        }
    }

    fn offer(&mut self, value: T) -> bool {
        self.offer_last(value)
    }

    fn push(&mut self, value: T) -> Result<(), RingError> {
        self.add_first(value)
    }

    fn remove_first(&mut self) -> Result<T, RingError> {
        self.poll_first().ok_or(RingError::Empty)
    }

    fn remove_last(&mut self) -> Result<T, RingError> {
        self.poll_last().ok_or(RingError::Empty)
    }

    fn pop(&mut self) -> Result<T, RingError> {
        self.remove_first()
    }

    fn remove(&mut self) -> Result<T, RingError> {
        self.remove_first()
    }

    fn poll(&mut self) -> Option<T> {
        self.poll_first()
    }

    fn first(&self) -> Result<&T, RingError> {
        self.peek_first().ok_or(RingError::Empty)
    }

    fn last(&self) -> Result<&T, RingError> {
        self.peek_last().ok_or(RingError::Empty)
    }

    fn element(&self) -> Result<&T, RingError> {
        self.first()
    }

    fn peek(&self) -> Option<&T> {
        self.peek_first()
    }
}

impl<T> Deque<T> for RingVec<T> {
    type Descending<'a> = Rev<Iter<'a, T>> where T: 'a;

    fn add_first(&mut self, value: T) -> Result<(), RingError> {
        self.push_front(value)
    }

    fn add_last(&mut self, value: T) -> Result<(), RingError> {
        self.push_back(value)
    }

    fn poll_first(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn poll_last(&mut self) -> Option<T> {
        self.pop_back()
    }

    fn peek_first(&self) -> Option<&T> {
        self.front()
    }

    fn peek_last(&self) -> Option<&T> {
        self.back()
    }

    fn remove_first_occurrence(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_item(value)
    }

    fn remove_last_occurrence(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.last_index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    fn descending_iter(&self) -> Self::Descending<'_> {
        self.iter().rev()
    }
}
