use crate::constants::{
    GROUP_YAW_STEP, HEADING_STEP_PCT, SCROLL_STEPS, SCROLL_TWEEN_DURATION_SEC, WHEEL_COOLDOWN_MS,
};
use crate::core::scroll::ScrollThrottle;
use crate::core::tween::{heading_target, Ease, Tween};
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Animated presentation state driven by accepted wheel events and sampled
/// every frame.
pub struct ScrollAnim {
    pub heading_offset_pct: f64,
    pub group_yaw: f64,
    pub heading_tween: Option<Tween>,
    pub group_tween: Option<Tween>,
}

impl Default for ScrollAnim {
    fn default() -> Self {
        Self {
            heading_offset_pct: 0.0,
            group_yaw: 0.0,
            heading_tween: None,
            group_tween: None,
        }
    }
}

pub fn new_throttle() -> ScrollThrottle {
    ScrollThrottle::new(WHEEL_COOLDOWN_MS, SCROLL_STEPS)
}

/// Wheel listener: events inside the cooldown window are dropped; accepted
/// ones advance the step counter and start the heading/group tweens.
pub fn wire_wheel(
    throttle: Rc<RefCell<ScrollThrottle>>,
    anim: Rc<RefCell<ScrollAnim>>,
    epoch: Rc<Instant>,
) {
    let closure = Closure::wrap(Box::new(move |_ev: web::WheelEvent| {
        let now_ms = js_sys::Date::now();
        let count = match throttle.borrow_mut().accept(now_ms) {
            Some(c) => c,
            None => return,
        };
        let now_sec = epoch.elapsed().as_secs_f64();
        let mut a = anim.borrow_mut();

        let from = a
            .heading_tween
            .map_or(a.heading_offset_pct, |t| t.sample(now_sec));
        let target = heading_target(from, count, HEADING_STEP_PCT);
        a.heading_tween = Some(Tween::new(
            from,
            target,
            now_sec,
            SCROLL_TWEEN_DURATION_SEC,
            Ease::QuadInOut,
        ));

        let yaw_from = a.group_tween.map_or(a.group_yaw, |t| t.sample(now_sec));
        a.group_tween = Some(Tween::new(
            yaw_from,
            yaw_from - GROUP_YAW_STEP,
            now_sec,
            SCROLL_TWEEN_DURATION_SEC,
            Ease::QuadInOut,
        ));
        log::info!("[wheel] step {} heading {:.0}% -> {:.0}%", count, from, target);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Resize listener: keeps the canvas backing store in step with the
/// viewport. The surface/projection pick the new size up on the next frame.
pub fn wire_resize(canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
