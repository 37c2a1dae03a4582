//! Auxiliary storage kept index-aligned with a mutable list.
//!
//! Only the position matters, so duplicate values in the backing list are fine. Empty
//! placeholders are backfilled lazily by whoever reads the slot.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Removed,
    Changed,
}

/// Change notification from the backing list, covering `first..=last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListChange {
    pub kind: ChangeKind,
    pub first: usize,
    pub last: usize,
}

impl ListChange {
    pub fn added(index: usize) -> Self {
        Self::single(ChangeKind::Added, index)
    }

    pub fn removed(index: usize) -> Self {
        Self::single(ChangeKind::Removed, index)
    }

    pub fn changed(index: usize) -> Self {
        Self::single(ChangeKind::Changed, index)
    }

    fn single(kind: ChangeKind, index: usize) -> Self {
        Self {
            kind,
            first: index,
            last: index,
        }
    }

    fn single_index(&self) -> Result<usize, ChangeError> {
        if self.first == self.last {
            Ok(self.first)
        } else {
            Err(ChangeError::MultiIndex {
                first: self.first,
                last: self.last,
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChangeError {
    #[error("only single-element changes are supported, got {first}..={last}")]
    MultiIndex { first: usize, last: usize },
    #[error("index {index} out of range for {len} entries")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowList<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for ShadowList<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> ShadowList<T> {
    /// `len` empty slots, one per existing backing entry.
    pub fn new(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Fills a slot, returning what it held before. Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        self.slots[index].replace(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.slots.iter().map(Option::as_ref)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = Option<&mut T>> {
        self.slots.iter_mut().map(Option::as_mut)
    }

    /// Applies one notification. `backing_len` is the backing list's length after the change.
    ///
    /// Panics if the lengths disagree afterwards: the notifications and the backing list
    /// have gone out of step, which no caller can recover from.
    pub fn react(&mut self, change: ListChange, backing_len: usize) -> Result<(), ChangeError> {
        let index = change.single_index()?;
        let len = self.slots.len();

        match change.kind {
            ChangeKind::Added if index <= len => self.slots.insert(index, None),
            ChangeKind::Removed if index < len => {
                self.slots.remove(index);
            }
            ChangeKind::Changed if index < len => self.slots[index] = None,
            _ => return Err(ChangeError::OutOfRange { index, len }),
        }

        assert_eq!(
            self.slots.len(),
            backing_len,
            "shadow list out of step with its backing list after {:?}",
            change
        );
        Ok(())
    }
}
