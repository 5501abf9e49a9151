use crate::constants::{LOADER_ID, OVERLAY_FADE_DURATION_SEC};
use crate::core::tween::{Ease, Tween};
use web_sys as web;

/// Fade-out of the loading overlay, driven by the frame loop. Created at
/// most once, when the last tracked asset settles.
pub struct OverlayFade {
    el: web::Element,
    tween: Tween,
}

impl OverlayFade {
    pub fn begin(document: &web::Document, now_sec: f64) -> Option<Self> {
        let el = document.get_element_by_id(LOADER_ID)?;
        Some(Self {
            el,
            tween: Tween::new(1.0, 0.0, now_sec, OVERLAY_FADE_DURATION_SEC, Ease::ExpoInOut),
        })
    }

    /// Advance the fade. Returns `true` when the overlay has been removed
    /// and the fade is finished.
    pub fn step(&self, now_sec: f64) -> bool {
        if self.tween.finished(now_sec) {
            self.el.remove();
            return true;
        }
        let v = self.tween.sample(now_sec);
        _ = self.el.set_attribute(
            "style",
            &format!("opacity: {:.4}; transform: scale({:.4})", v, v),
        );
        false
    }
}
