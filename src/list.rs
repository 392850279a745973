use std::prelude::v1::*;

use crate::{RingError, RingVec};

/// Indexed-list capability: positional access, search and bulk membership.
///
/// Only the structural primitives are required; everything else is built on
/// top of them.
pub trait List<T> {
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;
    fn get(&self, index: usize) -> Result<&T, RingError>;
    fn get_mut(&mut self, index: usize) -> Result<&mut T, RingError>;
    fn set(&mut self, index: usize, value: T) -> Result<T, RingError>;
    fn insert_all<I>(&mut self, index: usize, values: I) -> Result<bool, RingError>
    where
        I: IntoIterator<Item = T>;
    fn remove_at(&mut self, index: usize) -> Result<T, RingError>;
    fn retain<F>(&mut self, keep: F) -> bool
    where
        F: FnMut(&T) -> bool;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Appends at the end; `false` when full.
    fn add(&mut self, value: T) -> bool {
        let len = self.len();
        matches!(self.insert_all(len, Some(value)), Ok(true))
    }

    /// Appends all of `values` or none of them.
    fn add_all<I>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len();
        matches!(self.insert_all(len, values), Ok(true))
    }

    fn insert(&mut self, index: usize, value: T) -> Result<bool, RingError> {
        self.insert_all(index, Some(value))
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len()).find(|&i| self.get(i).map_or(false, |v| v == value))
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (0..self.len())
            .rev()
            .find(|&i| self.get(i).map_or(false, |v| v == value))
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    fn contains_all(&self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        values.iter().all(|v| self.contains(v))
    }

    /// Removes the first occurrence of `value`.
    fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Removes every occurrence of every element of `values`.
    fn remove_all(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        let mut removed = false;
        for value in values {
            while self.remove_item(value) {
                removed = true;
            }
        }
        removed
    }

    /// Removes every element not present in `values`.
    fn retain_all(&mut self, values: &[T]) -> bool
    where
        T: PartialEq,
    {
        self.retain(|v| values.contains(v))
    }

    /// Copies `from..to` into a new, independent vector.
    fn sub_range(&self, from: usize, to: usize) -> Result<Vec<T>, RingError>
    where
        T: Clone,
    {
        let len = self.len();
        if from > to || to > len {
            return Err(RingError::InvalidRange { from, to, len });
        }
        let mut out = Vec::with_capacity(to - from);
        for i in from..to {
            out.push(self.get(i)?.clone());
        }
        Ok(out)
    }
}

impl<T> List<T> for RingVec<T> {
    fn len(&self) -> usize {
        RingVec::len(self)
    }

    fn capacity(&self) -> usize {
        RingVec::capacity(self)
    }

    fn get(&self, index: usize) -> Result<&T, RingError> {
        RingVec::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, RingError> {
        RingVec::get_mut(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, RingError> {
        RingVec::set(self, index, value)
    }

    fn insert_all<I>(&mut self, index: usize, values: I) -> Result<bool, RingError>
    where
        I: IntoIterator<Item = T>,
    {
        RingVec::insert_all(self, index, values)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, RingError> {
        RingVec::remove_at(self, index)
    }

    fn retain<F>(&mut self, keep: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        RingVec::retain(self, keep)
    }

    fn clear(&mut self) {
        RingVec::clear(self)
    }

    fn is_empty(&self) -> bool {
        RingVec::is_empty(self)
    }

    fn is_full(&self) -> bool {
        RingVec::is_full(self)
    }

    fn add(&mut self, value: T) -> bool {
        match self.push_back(value) {
            Ok(()) => true,
            Err(err) => {
                glog::debug!("add rejected: {}", err);
                false
            }
        }
    }

    fn insert(&mut self, index: usize, value: T) -> Result<bool, RingError> {
        RingVec::insert(self, index, value)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|v| v == value)
    }
}
