use crate::constants::*;
use crate::core::orbit;
use crate::dom;
use crate::events::ScrollAnim;
use crate::overlay::OverlayFade;
use crate::render::{self, SharedGpu};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub gpu: SharedGpu,
    pub anim: Rc<RefCell<ScrollAnim>>,
    pub overlay_fade: Rc<RefCell<Option<OverlayFade>>>,
    pub headings: Vec<web::Element>,
    pub canvas: web::HtmlCanvasElement,
    pub epoch: Rc<Instant>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_sec = self.epoch.elapsed().as_secs_f64();

        // Sample active tweens and retire the finished ones
        {
            let mut a = self.anim.borrow_mut();
            if let Some(t) = a.heading_tween {
                a.heading_offset_pct = t.sample(now_sec);
                if t.finished(now_sec) {
                    a.heading_tween = None;
                }
                dom::set_heading_offset(&self.headings, a.heading_offset_pct);
            }
            if let Some(t) = a.group_tween {
                a.group_yaw = t.sample(now_sec);
                if t.finished(now_sec) {
                    a.group_tween = None;
                }
            }
        }

        // Loader overlay fade, once the asset gate opens it
        {
            let mut fade = self.overlay_fade.borrow_mut();
            let removed = fade.as_ref().map_or(false, |f| f.step(now_sec));
            if removed {
                *fade = None;
            }
        }

        // Scene transforms: fixed orbit slots, wall-clock self-spin, tweened
        // group yaw
        let group_yaw = self.anim.borrow().group_yaw as f32;
        let spin = orbit::spin_yaw(now_sec as f32, SPIN_RATE);
        let group = orbit::group_model(group_yaw, GROUP_TILT_X, GROUP_Y_OFFSET);
        let mut models = Vec::with_capacity(1 + SPHERE_COUNT);
        models.push(orbit::backdrop_model(BACKDROP_RADIUS));
        for i in 0..SPHERE_COUNT {
            models.push(orbit::sphere_model(
                group,
                i,
                SPHERE_COUNT,
                ORBIT_RADIUS,
                SPHERE_RADIUS,
                spin,
            ));
        }

        if let Some(g) = self.gpu.borrow_mut().as_mut() {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&models) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> SharedGpu {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let gpu = match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    };
    Rc::new(RefCell::new(gpu))
}

/// Stop handle for the render loop. The page never uses it, but embedders
/// can; a stopped loop simply does not request the next frame.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let handle = LoopHandle {
        running: running.clone(),
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    handle
}
