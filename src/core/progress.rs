/// Aggregate progress over a fixed set of tracked asset loads.
///
/// Success and failure both count as settled: the overlay's job is to not
/// block the user forever, not to guarantee asset availability.
#[derive(Clone, Copy, Debug)]
pub struct LoadProgress {
    total: usize,
    settled: usize,
    completed: bool,
}

impl LoadProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            settled: 0,
            completed: false,
        }
    }

    /// Record one asset settling. Returns `true` exactly once, when the last
    /// tracked asset settles.
    pub fn settle(&mut self) -> bool {
        self.settled = (self.settled + 1).min(self.total);
        if self.settled == self.total && !self.completed {
            self.completed = true;
            return true;
        }
        false
    }

    /// Percentage in [0,100], monotone non-decreasing across `settle` calls.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.settled as f64 / self.total as f64) * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }
}
