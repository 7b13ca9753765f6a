//! Bounded history of pointer deltas.

use std::collections::VecDeque;

/// Number of deltas retained by a [`GeometryBuffer`].
pub const GEOMETRY_BUFFER_CAPACITY: usize = 10;

/// FIFO of the most recent vertical deltas of the active gesture.
///
/// Holds at most [`GEOMETRY_BUFFER_CAPACITY`] entries; pushing past that
/// evicts the oldest. Deltas are unconstrained (negative means upward).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryBuffer {
    deltas: VecDeque<f64>,
}

impl GeometryBuffer {
    /// Empty buffer.
    pub fn new() -> Self {
        Self {
            deltas: VecDeque::with_capacity(GEOMETRY_BUFFER_CAPACITY + 1),
        }
    }

    /// Append a delta, evicting the oldest on overflow.
    pub fn push(&mut self, delta: f64) {
        self.deltas.push_back(delta);
        if self.deltas.len() > GEOMETRY_BUFFER_CAPACITY {
            self.deltas.pop_front();
        }
    }

    /// Drop every buffered delta.
    pub fn clear(&mut self) {
        self.deltas.clear();
    }

    /// Number of buffered deltas.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Whether nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Snapshot of the buffered deltas, oldest first.
    pub fn to_sequence(&self) -> Vec<f64> {
        self.deltas.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_beyond_capacity_keeps_last_ten() {
        let mut buffer = GeometryBuffer::new();
        for i in 1..=15 {
            buffer.push(i as f64);
        }
        assert_eq!(buffer.len(), GEOMETRY_BUFFER_CAPACITY);
        let expected: Vec<f64> = (6..=15).map(|i| i as f64).collect();
        assert_eq!(buffer.to_sequence(), expected);
    }

    #[test]
    fn accepts_negative_deltas() {
        let mut buffer = GeometryBuffer::new();
        buffer.push(-3.5);
        buffer.push(-7.0);
        assert_eq!(buffer.to_sequence(), vec![-3.5, -7.0]);
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buffer = GeometryBuffer::new();
        buffer.push(1.0);
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.to_sequence().is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_buffer() {
        let mut buffer = GeometryBuffer::new();
        buffer.push(1.0);
        let snapshot = buffer.to_sequence();
        buffer.push(2.0);
        assert_eq!(snapshot, vec![1.0]);
    }
}
