//! Recent tears-count changes
//!
//! A fixed-size circular buffer of the last few per-tick deltas, written by the
//! tick handler and read by the +/- overlay.

use std::time::Instant;

use super::constants::DELTA_BUFFER_CAPACITY;

/// One tick's change in the tears counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaEvent {
    pub delta: i32,
    pub observed_at: Instant,
}

impl DeltaEvent {
    pub fn new(delta: i32, observed_at: Instant) -> Self {
        Self { delta, observed_at }
    }
}

/// Fixed-capacity FIFO of delta events
///
/// `push` never fails: once full, the oldest event is overwritten.
#[derive(Debug, Clone)]
pub struct DeltaEventBuffer {
    slots: [Option<DeltaEvent>; DELTA_BUFFER_CAPACITY],
    /// Index of the oldest event
    head: usize,
    len: usize,
}

impl DeltaEventBuffer {
    pub fn new() -> Self {
        Self {
            slots: [None; DELTA_BUFFER_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, event: DeltaEvent) {
        let cap = self.capacity();
        let tail = (self.head + self.len) % cap;
        self.slots[tail] = Some(event);
        if self.len == cap {
            self.head = (self.head + 1) % cap;
        } else {
            self.len += 1;
        }
    }

    pub fn clear(&mut self) {
        self.slots = [None; DELTA_BUFFER_CAPACITY];
        self.head = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        DELTA_BUFFER_CAPACITY
    }

    /// Events oldest to newest (`.rev()` for newest first)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DeltaEvent> + '_ {
        let cap = self.capacity();
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % cap].as_ref())
    }
}

impl Default for DeltaEventBuffer {
    fn default() -> Self {
        Self::new()
    }
}
