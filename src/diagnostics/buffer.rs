// SPDX-License-Identifier: MPL-2.0
//! Memory-bounded ring buffer for diagnostic events.

use std::collections::VecDeque;

/// Validated buffer capacity.
///
/// Construction clamps into the supported range so a bad config value can
/// never make the buffer unbounded or useless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    pub const MIN: usize = 16;
    pub const MAX: usize = 10_000;
    pub const DEFAULT: usize = 1_000;

    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self(capacity.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// A circular buffer: pushing onto a full buffer evicts the oldest entry.
/// Iteration is chronological, oldest first.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    pub fn push(&mut self, item: T) {
        if self.data.len() == self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_chronological_order() {
        let mut buffer = CircularBuffer::new(BufferCapacity::default());
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn full_buffer_evicts_the_oldest() {
        let mut buffer = CircularBuffer::new(BufferCapacity::new(0));
        // Capacity clamps to MIN.
        for i in 0..BufferCapacity::MIN + 2 {
            buffer.push(i);
        }

        assert_eq!(buffer.len(), BufferCapacity::MIN);
        assert_eq!(buffer.iter().next(), Some(&2));
    }

    #[test]
    fn capacity_clamps_to_bounds() {
        assert_eq!(BufferCapacity::new(1).value(), BufferCapacity::MIN);
        assert_eq!(BufferCapacity::new(usize::MAX).value(), BufferCapacity::MAX);
        assert_eq!(BufferCapacity::new(500).value(), 500);
    }
}
