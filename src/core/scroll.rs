/// Throttle gate and cyclic step counter for wheel events.
///
/// An event is accepted only if at least `cooldown_ms` elapsed since the
/// last accepted one; everything inside the window is dropped, not queued.
/// The counter advances 0→1→2→3→0 on each accepted event.
#[derive(Clone, Copy, Debug)]
pub struct ScrollThrottle {
    cooldown_ms: f64,
    steps: u8,
    last_accepted_ms: Option<f64>,
    count: u8,
}

impl ScrollThrottle {
    pub fn new(cooldown_ms: f64, steps: u8) -> Self {
        Self {
            cooldown_ms,
            steps,
            last_accepted_ms: None,
            count: 0,
        }
    }

    /// Offer an event at `now_ms`. Returns the advanced counter value if the
    /// event is accepted, `None` if it falls inside the cooldown window.
    pub fn accept(&mut self, now_ms: f64) -> Option<u8> {
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < self.cooldown_ms {
                return None;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        self.count = (self.count + 1) % self.steps;
        Some(self.count)
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}
