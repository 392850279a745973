use std::prelude::v1::*;

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::{Cursor, IntoIter, Iter, RingError};

/// Fixed-capacity ring buffer addressed by logical index.
///
/// Logical index `i` lives in slot `(start + i) mod capacity`. The backing
/// store is allocated once in [`RingVec::new`] and never grows.
pub struct RingVec<T> {
    inner: Vec<Option<T>>,
    start: usize,
    len: usize,
}

impl<T> RingVec<T> {
    pub fn new(capacity: usize) -> RingVec<T> {
        let mut inner = Vec::with_capacity(capacity);
        inner.resize_with(capacity, || None);
        Self {
            inner,
            start: 0,
            len: 0,
        }
    }

    /// Builds a ring holding `values` in order. `cap` is raised to
    /// `values.len()` when it is smaller.
    pub fn from_vec(values: Vec<T>, mut cap: usize) -> Self {
        if cap < values.len() {
            cap = values.len();
        }
        let len = values.len();
        let mut inner: Vec<Option<T>> = values.into_iter().map(Some).collect();
        inner.resize_with(cap, || None);
        Self {
            inner,
            start: 0,
            len,
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    // normalizes any signed offset into 0..capacity
    fn wrap(&self, offset: isize) -> usize {
        let cap = self.capacity() as isize;
        if cap == 0 {
            return 0;
        }
        ((offset % cap) + cap) as usize % cap as usize
    }

    fn physical(&self, index: usize) -> usize {
        self.wrap(self.start as isize + index as isize)
    }

    fn check_index(&self, index: usize) -> Result<(), RingError> {
        if index < self.len {
            return Ok(());
        }
        Err(RingError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    pub(crate) fn slot(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.inner[self.physical(index)].as_ref()
    }

    pub fn get(&self, index: usize) -> Result<&T, RingError> {
        self.check_index(index)?;
        let len = self.len;
        self.inner[self.physical(index)]
            .as_ref()
            .ok_or(RingError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, RingError> {
        self.check_index(index)?;
        let len = self.len;
        let slot = self.physical(index);
        self.inner[slot]
            .as_mut()
            .ok_or(RingError::IndexOutOfRange { index, len })
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, RingError> {
        self.check_index(index)?;
        let len = self.len;
        let slot = self.physical(index);
        self.inner[slot]
            .replace(value)
            .ok_or(RingError::IndexOutOfRange { index, len })
    }

    pub fn front(&self) -> Option<&T> {
        self.slot(0)
    }

    pub fn back(&self) -> Option<&T> {
        match self.len {
            0 => None,
            len => self.slot(len - 1),
        }
    }

    pub fn push_back(&mut self, value: T) -> Result<(), RingError> {
        if self.is_full() {
            return Err(RingError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let slot = self.physical(self.len);
        self.inner[slot] = Some(value);
        self.len += 1;
        Ok(())
    }

    pub fn push_front(&mut self, value: T) -> Result<(), RingError> {
        if self.is_full() {
            return Err(RingError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.start = self.wrap(self.start as isize - 1);
        self.inner[self.start] = Some(value);
        self.len += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.inner[self.start].take();
        self.start = self.wrap(self.start as isize + 1);
        self.len -= 1;
        value
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let slot = self.physical(self.len - 1);
        self.len -= 1;
        self.inner[slot].take()
    }

    /// Inserts `values` before `index`, keeping their order. `index == len`
    /// appends. Returns `Ok(false)` without touching the ring when the batch
    /// does not fit.
    pub fn insert_all<I>(&mut self, index: usize, values: I) -> Result<bool, RingError>
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len {
            return Err(RingError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let values: Vec<T> = values.into_iter().collect();
        let count = values.len();
        if count > self.remaining() {
            glog::debug!(
                "ring insert rejected: len={}, batch={}, capacity={}",
                self.len,
                count,
                self.capacity()
            );
            return Ok(false);
        }
        if count == 0 {
            return Ok(true);
        }

        self.open_gap(index, count);
        for (offset, value) in values.into_iter().enumerate() {
            let slot = self.physical(index + offset);
            self.inner[slot] = Some(value);
        }
        Ok(true)
    }

    /// Single-element form of [`RingVec::insert_all`]; does not allocate.
    pub fn insert(&mut self, index: usize, value: T) -> Result<bool, RingError> {
        if index > self.len {
            return Err(RingError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.is_full() {
            glog::debug!(
                "ring insert rejected: len={}, capacity={}",
                self.len,
                self.capacity()
            );
            return Ok(false);
        }
        self.open_gap(index, 1);
        let slot = self.physical(index);
        self.inner[slot] = Some(value);
        Ok(true)
    }

    // moves index..len right by count; caller checked remaining() >= count
    fn open_gap(&mut self, index: usize, count: usize) {
        let old_len = self.len;
        self.len += count;
        for i in (index..old_len).rev() {
            let from = self.physical(i);
            let to = self.physical(i + count);
            self.inner[to] = self.inner[from].take();
        }
    }

    /// Removes the element at `index`, shifting everything after it left.
    pub fn remove_at(&mut self, index: usize) -> Result<T, RingError> {
        self.check_index(index)?;
        let len = self.len;
        let slot = self.physical(index);
        let value = self.inner[slot].take();
        for i in index..len - 1 {
            let from = self.physical(i + 1);
            let to = self.physical(i);
            self.inner[to] = self.inner[from].take();
        }
        self.len -= 1;
        value.ok_or(RingError::IndexOutOfRange { index, len })
    }

    /// Keeps only the elements for which `keep` returns true, preserving
    /// their order. Returns whether anything was removed.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.len;
        let mut kept = 0;
        for i in 0..len {
            let slot = self.physical(i);
            let retained = match &self.inner[slot] {
                Some(value) => keep(value),
                None => false,
            };
            if !retained {
                self.inner[slot] = None;
                continue;
            }
            if kept != i {
                let to = self.physical(kept);
                self.inner[to] = self.inner[slot].take();
            }
            kept += 1;
        }
        self.len = kept;
        kept != len
    }

    /// O(1): stale slots are dropped when reused or when the ring is dropped.
    pub fn clear(&mut self) {
        self.start = 0;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Positional cursor placed before the element at `index`.
    /// `index == len` places it past the end.
    pub fn cursor(&mut self, index: usize) -> Result<Cursor<'_, T>, RingError> {
        if index > self.len {
            return Err(RingError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(Cursor::new(self, index))
    }

    pub fn cursor_front(&mut self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    pub fn cursor_back(&mut self) -> Cursor<'_, T> {
        let len = self.len;
        Cursor::new(self, len)
    }
}

impl<T> Index<usize> for RingVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for RingVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for RingVec<T> {
    fn clone(&self) -> Self {
        Self::from_vec(self.iter().cloned().collect(), self.capacity())
    }
}

impl<T: PartialEq> PartialEq for RingVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingVec<T> {}

impl<'a, T> IntoIterator for &'a RingVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for RingVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(ring: &RingVec<i32>) -> Vec<i32> {
        ring.iter().cloned().collect()
    }

    #[test]
    fn test_new_is_empty() {
        let ring: RingVec<i32> = RingVec::new(4);
        assert_eq!(ring.capacity(), 4);
        assert_eq!(ring.len(), 0);
        assert!(ring.is_empty());
        assert!(!ring.is_full());
    }

    #[test]
    fn test_zero_capacity() {
        let mut ring: RingVec<i32> = RingVec::new(0);
        assert!(ring.is_empty());
        assert!(ring.is_full());
        assert_eq!(
            ring.push_back(1),
            Err(RingError::CapacityExceeded { capacity: 0 })
        );
        assert_eq!(
            ring.push_front(1),
            Err(RingError::CapacityExceeded { capacity: 0 })
        );
        assert_eq!(ring.pop_front(), None);
        assert_eq!(ring.insert_all(0, vec![1]), Ok(false));
        assert_eq!(ring.insert_all(0, Vec::new()), Ok(true));
    }

    #[test]
    fn test_push_front_wraps_below_zero() {
        let mut ring = RingVec::new(3);
        ring.push_front(1).unwrap();
        ring.push_front(2).unwrap();
        assert_eq!(ring.start, 1);
        assert_eq!(collect(&ring), vec![2, 1]);
        ring.push_back(3).unwrap();
        assert_eq!(collect(&ring), vec![2, 1, 3]);
        assert!(ring.is_full());
    }

    #[test]
    fn test_wrap_around_get() {
        let mut ring = RingVec::new(3);
        ring.push_back(1).unwrap();
        ring.push_back(2).unwrap();
        ring.push_back(3).unwrap();
        assert_eq!(ring.pop_front(), Some(1));
        ring.push_back(4).unwrap();
        assert_eq!(ring.get(0), Ok(&2));
        assert_eq!(ring.get(1), Ok(&3));
        assert_eq!(ring.get(2), Ok(&4));
    }

    #[test]
    fn test_get_out_of_range() {
        let mut ring = RingVec::new(3);
        ring.push_back(1).unwrap();
        assert_eq!(
            ring.get(1),
            Err(RingError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            ring.set(5, 9),
            Err(RingError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(collect(&ring), vec![1]);
    }

    #[test]
    fn test_set_returns_previous() {
        let mut ring = RingVec::from_vec(vec![1, 2, 3], 3);
        assert_eq!(ring.set(1, 20), Ok(2));
        *ring.get_mut(2).unwrap() = 30;
        assert_eq!(collect(&ring), vec![1, 20, 30]);
    }

    #[test]
    fn test_insert_all_shifts_right() {
        let mut ring = RingVec::from_vec(vec![1, 2, 3], 5);
        assert_eq!(ring.insert_all(1, vec![9, 10]), Ok(true));
        assert_eq!(collect(&ring), vec![1, 9, 10, 2, 3]);
        assert_eq!(ring.insert_all(0, vec![0]), Ok(false));
        assert_eq!(collect(&ring), vec![1, 9, 10, 2, 3]);
    }

    #[test]
    fn test_insert_all_across_wrap() {
        let mut ring = RingVec::new(5);
        for i in 0..4 {
            ring.push_back(i).unwrap();
        }
        ring.pop_front();
        ring.pop_front();
        ring.push_back(4).unwrap();
        // live slots are 2..5, the batch lands in slots 0 and 1
        assert_eq!(ring.insert_all(3, vec![7, 8]), Ok(true));
        assert_eq!(collect(&ring), vec![2, 3, 4, 7, 8]);

        let mut ring = RingVec::new(4);
        ring.push_front(2).unwrap();
        ring.push_front(1).unwrap();
        assert_eq!(ring.insert_all(1, vec![5]), Ok(true));
        assert_eq!(ring.insert_all(3, vec![6]), Ok(true));
        assert_eq!(collect(&ring), vec![1, 5, 2, 6]);
    }

    #[test]
    fn test_insert_single_across_wrap() {
        let mut ring = RingVec::new(4);
        ring.push_back(3).unwrap();
        ring.push_front(1).unwrap();
        assert_eq!(ring.insert(1, 2), Ok(true));
        assert_eq!(ring.insert(3, 4), Ok(true));
        assert_eq!(collect(&ring), vec![1, 2, 3, 4]);
        assert_eq!(ring.insert(0, 0), Ok(false));
        assert_eq!(
            ring.insert(5, 0),
            Err(RingError::IndexOutOfRange { index: 5, len: 4 })
        );
        assert_eq!(collect(&ring), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_end_round_trips_restore_position() {
        let mut ring = RingVec::new(4);
        ring.push_back(1).unwrap();
        ring.push_back(2).unwrap();
        ring.push_back(3).unwrap();
        ring.pop_front();
        ring.pop_front();
        ring.push_back(4).unwrap();
        ring.push_back(5).unwrap();
        // live slots 2, 3, 0
        assert_eq!(ring.start, 2);
        assert_eq!(collect(&ring), vec![3, 4, 5]);
        let before = (ring.start, ring.len);

        ring.push_back(9).unwrap();
        assert_eq!(ring.pop_back(), Some(9));
        assert_eq!((ring.start, ring.len), before);

        ring.push_front(8).unwrap();
        assert_eq!(ring.start, 1);
        assert_eq!(ring.pop_front(), Some(8));
        assert_eq!((ring.start, ring.len), before);

        let mut ring: RingVec<i32> = RingVec::new(2);
        let before = (ring.start, ring.len);
        ring.push_front(7).unwrap();
        assert_eq!(ring.start, 1);
        assert_eq!(ring.pop_front(), Some(7));
        assert_eq!((ring.start, ring.len), before);
    }

    #[test]
    fn test_insert_all_index_past_end() {
        let mut ring = RingVec::from_vec(vec![1], 4);
        assert_eq!(
            ring.insert_all(2, vec![3]),
            Err(RingError::IndexOutOfRange { index: 2, len: 1 })
        );
        assert_eq!(ring.insert_all(1, vec![3]), Ok(true));
        assert_eq!(collect(&ring), vec![1, 3]);
    }

    #[test]
    fn test_remove_at_shifts_left() {
        let mut ring = RingVec::new(4);
        ring.push_back(2).unwrap();
        ring.push_back(3).unwrap();
        ring.push_front(1).unwrap();
        ring.push_front(0).unwrap();
        assert_eq!(ring.remove_at(1), Ok(1));
        assert_eq!(collect(&ring), vec![0, 2, 3]);
        assert_eq!(ring.remove_at(2), Ok(3));
        assert_eq!(collect(&ring), vec![0, 2]);
        assert_eq!(
            ring.remove_at(2),
            Err(RingError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(ring.push_back(5).is_ok());
        assert!(ring.push_back(6).is_ok());
        assert_eq!(collect(&ring), vec![0, 2, 5, 6]);
    }

    #[test]
    fn test_retain_keeps_order() {
        let mut ring = RingVec::new(6);
        for i in 3..6 {
            ring.push_back(i).unwrap();
        }
        for i in (0..3).rev() {
            ring.push_front(i).unwrap();
        }
        assert!(ring.retain(|v| v % 2 == 0));
        assert_eq!(collect(&ring), vec![0, 2, 4]);
        assert!(!ring.retain(|_| true));
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn test_clear_twice() {
        let mut ring = RingVec::from_vec(vec![1, 2], 3);
        ring.clear();
        let once = (ring.start, ring.len);
        ring.clear();
        assert_eq!((ring.start, ring.len), once);
        assert!(ring.is_empty());
        assert_eq!(ring.pop_back(), None);
        ring.push_back(7).unwrap();
        assert_eq!(collect(&ring), vec![7]);
    }

    #[test]
    fn test_from_vec_raises_cap() {
        let ring = RingVec::from_vec(vec![1, 2, 3], 1);
        assert_eq!(ring.capacity(), 3);
        assert!(ring.is_full());
    }

    #[test]
    fn test_index_operator() {
        let mut ring = RingVec::from_vec(vec![1, 2], 2);
        ring[1] = 5;
        assert_eq!(ring[0], 1);
        assert_eq!(ring[1], 5);
    }

    #[test]
    #[should_panic(expected = "index out of range: len: 2, access: 2")]
    fn test_index_operator_panics() {
        let ring = RingVec::from_vec(vec![1, 2], 2);
        let _value = ring[2];
    }

    #[test]
    fn test_clone_and_eq_ignore_layout() {
        let mut a = RingVec::new(3);
        a.push_front(2).unwrap();
        a.push_front(1).unwrap();
        let b = RingVec::from_vec(vec![1, 2], 3);
        assert_eq!(a, b);
        let c = a.clone();
        assert_eq!(c.capacity(), 3);
        assert_eq!(c, a);
        assert_eq!(format!("{:?}", c), "[1, 2]");
    }
}
