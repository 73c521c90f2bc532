//! Bounded ring of recorded buffer positions.
//!
//! Newest entries sit at the front. Pushing past capacity drops the
//! oldest entry, and a traversal cursor walks the ring in either
//! direction with wraparound. Recording can be suppressed for the span
//! of a programmatic jump through an RAII guard so that ring-driven
//! motion never feeds back into the ring.

use crate::host::Position;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Direction of a ring traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalDirection {
    /// Toward older entries (higher indices).
    Backward,
    /// Toward newer entries (lower indices).
    Forward,
}

/// Clears the suppression flag when dropped.
///
/// Holding the guard across a programmatic jump keeps the jump's own
/// cursor motion from being recorded.
pub struct RecordGuard {
    flag: Rc<Cell<bool>>,
}

impl Drop for RecordGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// A bounded, newest-first ring of positions with a traversal cursor.
#[derive(Debug)]
pub struct MarkRing {
    entries: VecDeque<Position>,
    capacity: usize,
    cursor: i64,
    suppressed: Rc<Cell<bool>>,
}

impl MarkRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.max(1)),
            capacity: capacity.max(1),
            cursor: 0,
            suppressed: Rc::new(Cell::new(false)),
        }
    }

    /// Record `position` at the front of the ring.
    ///
    /// Returns `false` without touching the ring when recording is
    /// suppressed or when `position` already heads the ring.
    pub fn push(&mut self, position: Position) -> bool {
        if self.suppressed.get() {
            log::trace!("Recording suppressed, dropping {:?}", position);
            return false;
        }
        if self.entries.front() == Some(&position) {
            return false;
        }
        self.entries.push_front(position);
        self.entries.truncate(self.capacity);
        log::debug!(
            "Recorded {:?} ({} of {})",
            position,
            self.entries.len(),
            self.capacity
        );
        true
    }

    /// Change the ring capacity, discarding the oldest entries when the
    /// new capacity is smaller than the current length.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.entries.truncate(self.capacity);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest-first.
    pub fn entries(&self) -> impl Iterator<Item = &Position> {
        self.entries.iter()
    }

    /// Newest entry, if any.
    pub fn head(&self) -> Option<Position> {
        self.entries.front().copied()
    }

    /// Place the traversal cursor at the sentinel for a fresh traversal
    /// in `direction`.
    ///
    /// The sentinel sits one step outside the ring so the first
    /// [`advance`](Self::advance) lands on the newest entry (backward)
    /// or the oldest (forward).
    pub fn reset_cursor(&mut self, direction: TraversalDirection) {
        self.cursor = match direction {
            TraversalDirection::Backward => -1,
            TraversalDirection::Forward => 0,
        };
    }

    /// Step the cursor by `step` and return the entry it lands on, with
    /// wraparound at both ends. Returns `None` when the ring is empty.
    pub fn advance(&mut self, step: i64) -> Option<Position> {
        if self.entries.is_empty() {
            return None;
        }
        let len = self.entries.len() as i64;
        self.cursor = (self.cursor + step).rem_euclid(len);
        self.entries.get(self.cursor as usize).copied()
    }

    /// Suppress recording until the returned guard is dropped.
    pub fn suppress_recording(&self) -> RecordGuard {
        self.suppressed.set(true);
        RecordGuard {
            flag: Rc::clone(&self.suppressed),
        }
    }

    /// Whether recording is currently suppressed.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed.get()
    }
}
