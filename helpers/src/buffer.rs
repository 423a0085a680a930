use std::collections::VecDeque;

/// RingBuffer keeps the latest values pushed to it up to a user-defined capacity. As soon as the
/// capacity is reached, the oldest value is dropped for every new one.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    vals: VecDeque<T>,
    capacity: usize,
}

impl<T: Into<f64> + Copy> RingBuffer<T> {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> RingBuffer<T> {
        let capacity = capacity.max(1);

        RingBuffer {
            vals: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, val: T) {
        if self.vals.len() == self.capacity {
            self.vals.pop_front();
        }
        self.vals.push_back(val);
    }

    /// latest returns the value pushed last.
    pub fn latest(&self) -> Option<T> {
        self.vals.back().copied()
    }

    pub fn get_avg(&self) -> Option<f64> {
        if self.vals.is_empty() {
            return None;
        }
        let sum: f64 = self.vals.iter().map(|&val| val.into()).sum();
        Some(sum / self.vals.len() as f64)
    }
}
