use std::prelude::v1::*;

use crate::{RingError, RingVec};

/// Bidirectional positional traversal over a [`RingVec`].
///
/// The cursor sits between two elements: `next` yields the one after it and
/// `previous` the one before. `set` and `remove` act on whichever element was
/// returned last, `insert` places a new element right before the cursor.
pub struct Cursor<'a, T> {
    ring: &'a mut RingVec<T>,
    index: usize,
    last: Option<usize>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(ring: &'a mut RingVec<T>, index: usize) -> Self {
        Self {
            ring,
            index,
            last: None,
        }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.ring.len()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn next_index(&self) -> usize {
        self.index
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&mut T> {
        if !self.has_next() {
            return None;
        }
        let at = self.index;
        self.index += 1;
        self.last = Some(at);
        self.ring.get_mut(at).ok()
    }

    pub fn previous(&mut self) -> Option<&mut T> {
        if !self.has_previous() {
            return None;
        }
        self.index -= 1;
        self.last = Some(self.index);
        self.ring.get_mut(self.index).ok()
    }

    /// Replaces the element last returned by `next` or `previous`.
    pub fn set(&mut self, value: T) -> Result<T, RingError> {
        let at = self.last.ok_or(RingError::NoCurrentElement)?;
        self.ring.set(at, value)
    }

    /// Removes the element last returned by `next` or `previous`.
    pub fn remove(&mut self) -> Result<T, RingError> {
        let at = self.last.ok_or(RingError::NoCurrentElement)?;
        let value = self.ring.remove_at(at)?;
        if at < self.index {
            self.index -= 1;
        }
        self.last = None;
        Ok(value)
    }

    /// Inserts before the cursor; a following `next` is unaffected.
    pub fn insert(&mut self, value: T) -> Result<(), RingError> {
        if !self.ring.insert(self.index, value)? {
            return Err(RingError::CapacityExceeded {
                capacity: self.ring.capacity(),
            });
        }
        self.index += 1;
        self.last = None;
        Ok(())
    }
}
