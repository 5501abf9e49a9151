#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, TRACKED_ASSET_COUNT};
use crate::core::progress::LoadProgress;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // Guard against double-initialization (e.g. during hot reload)
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Canvas backing store tracks CSS size * devicePixelRatio (capped)
    dom::sync_canvas_backing_size(&canvas);
    events::wire_resize(&canvas);

    let epoch = Rc::new(Instant::now());

    // WebGPU first; asset completion mutates the live scene
    let gpu = frame::init_gpu(&canvas).await;

    let progress = Rc::new(RefCell::new(LoadProgress::new(TRACKED_ASSET_COUNT)));
    let overlay_fade = Rc::new(RefCell::new(None));
    dom::set_loader_text(&document, progress.borrow().percent());
    assets::spawn_asset_loads(assets::AssetWiring {
        gpu: gpu.clone(),
        progress,
        overlay_fade: overlay_fade.clone(),
        epoch: epoch.clone(),
    });

    let throttle = Rc::new(RefCell::new(events::new_throttle()));
    let anim = Rc::new(RefCell::new(events::ScrollAnim::default()));
    events::wire_wheel(throttle, anim.clone(), epoch.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        gpu,
        anim,
        overlay_fade,
        headings: dom::heading_elements(&document),
        canvas,
        epoch,
    }));
    // Runs until the page unloads; the handle exists for embedders
    let _loop_handle = frame::start_loop(frame_ctx);

    Ok(())
}
