/// Easing curves used by the scroll and overlay animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    /// Quadratic in-out ("power1.inOut").
    QuadInOut,
    /// Exponential in-out ("expo.inOut").
    ExpoInOut,
}

impl Ease {
    /// Map normalized progress `t` in [0,1] to eased progress in [0,1].
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::ExpoInOut => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    (2.0f64).powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - (2.0f64).powf(-20.0 * t + 10.0)) / 2.0
                }
            }
        }
    }
}

/// A one-shot interpolation between two values over a fixed duration.
///
/// Time is supplied by the caller as wall-clock seconds so the type stays
/// deterministic under test.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_sec: f64,
    pub duration_sec: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_sec: f64, duration_sec: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_sec,
            duration_sec,
            ease,
        }
    }

    /// Current value at `now_sec`, clamped to the endpoints outside the
    /// tween's time window.
    pub fn sample(&self, now_sec: f64) -> f64 {
        if self.duration_sec <= 0.0 {
            return self.to;
        }
        let t = (now_sec - self.start_sec) / self.duration_sec;
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn finished(&self, now_sec: f64) -> bool {
        now_sec >= self.start_sec + self.duration_sec
    }
}

/// Target heading offset for an accepted scroll step.
///
/// Each step shifts the headings up by one full height; when the cyclic
/// counter wraps to 0 the headings return to the origin instead (the
/// original page issues a second tween to 0 that overrides the step).
#[inline]
pub fn heading_target(current_pct: f64, count: u8, step_pct: f64) -> f64 {
    if count == 0 {
        0.0
    } else {
        current_pct - step_pct
    }
}
