//! Append-only permittivity recorder.
//!
//! The dielectric appends one sample per state mutation. Unbounded by
//! default; a bounded trace is a ring buffer keeping the most recent
//! `capacity` samples, for long runs where the full history is not needed.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Recorded permittivity samples, in application order.
#[derive(Debug, Clone)]
pub struct PermittivityTrace {
    samples: VecDeque<f64>,
    capacity: Option<NonZeroUsize>,
}

impl PermittivityTrace {
    /// Trace that grows without bound.
    pub fn unbounded() -> Self {
        Self {
            samples: VecDeque::new(),
            capacity: None,
        }
    }

    /// Ring-buffer trace keeping the most recent `capacity` samples.
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.get()),
            capacity: Some(capacity),
        }
    }

    /// Append a sample, evicting the oldest if the trace is bounded and full.
    pub fn push(&mut self, sample: f64) {
        if let Some(cap) = self.capacity
            && self.samples.len() == cap.get()
        {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Discard all recorded samples. The capacity strategy is kept.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Most recently recorded sample, if any.
    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    /// Ring capacity, or `None` for an unbounded trace.
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Copy the samples out in recording order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }
}

impl Default for PermittivityTrace {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn unbounded_keeps_everything() {
        let mut trace = PermittivityTrace::unbounded();
        for i in 0..1000 {
            trace.push(i as f64);
        }
        assert_eq!(trace.len(), 1000);
        assert_eq!(trace.latest(), Some(999.0));
    }

    #[test]
    fn bounded_evicts_oldest() {
        let mut trace = PermittivityTrace::bounded(cap(3));
        for i in 0..5 {
            trace.push(i as f64);
        }
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.to_vec(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn clear_empties_but_keeps_strategy() {
        let mut trace = PermittivityTrace::bounded(cap(2));
        trace.push(1.0);
        trace.push(2.0);
        trace.clear();
        assert!(trace.is_empty());
        assert_eq!(trace.capacity(), Some(cap(2)));
    }

    #[test]
    fn latest_on_empty_is_none() {
        let trace = PermittivityTrace::default();
        assert_eq!(trace.latest(), None);
    }
}
