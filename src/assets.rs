use crate::constants::{HDRI_URL, SPHERE_TEXTURE_URLS, STARS_TEXTURE_URL};
use crate::core::progress::LoadProgress;
use crate::dom;
use crate::overlay::OverlayFade;
use crate::render::SharedGpu;
use gloo_net::http::Request;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone)]
pub struct AssetWiring {
    pub gpu: SharedGpu,
    pub progress: Rc<RefCell<LoadProgress>>,
    pub overlay_fade: Rc<RefCell<Option<OverlayFade>>>,
    pub epoch: Rc<Instant>,
}

/// Start all asset loads as independent tasks. The HDRI and the four sphere
/// textures gate the loading overlay; the stars texture is best-effort on
/// the side, as in the original page.
pub fn spawn_asset_loads(w: AssetWiring) {
    {
        let w = w.clone();
        spawn_local(async move {
            match fetch_bytes(HDRI_URL).await.and_then(|b| decode_hdr_rgba16f(&b)) {
                Ok((width, height, texels)) => {
                    if let Some(g) = w.gpu.borrow_mut().as_mut() {
                        g.set_environment(width, height, &texels);
                    }
                    log::info!("[assets] environment ready ({}x{})", width, height);
                }
                Err(e) => log::error!("[assets] HDRI load failed: {:?}", e),
            }
            settle(&w);
        });
    }

    for (i, url) in SPHERE_TEXTURE_URLS.iter().enumerate() {
        let w = w.clone();
        spawn_local(async move {
            match fetch_bytes(url).await.and_then(|b| decode_rgba8(&b)) {
                Ok((width, height, rgba)) => {
                    if let Some(g) = w.gpu.borrow_mut().as_mut() {
                        g.set_sphere_albedo(i, width, height, &rgba);
                    }
                }
                Err(e) => log::error!("[assets] texture {} load failed: {:?}", url, e),
            }
            settle(&w);
        });
    }

    spawn_local(async move {
        match fetch_bytes(STARS_TEXTURE_URL)
            .await
            .and_then(|b| decode_rgba8(&b))
        {
            Ok((width, height, rgba)) => {
                if let Some(g) = w.gpu.borrow_mut().as_mut() {
                    g.set_backdrop_albedo(width, height, &rgba);
                }
            }
            Err(e) => log::error!("[assets] stars texture load failed: {:?}", e),
        }
    });
}

/// Record one tracked asset settling (success or failure alike), refresh the
/// overlay text, and begin the fade exactly once when all five are in.
fn settle(w: &AssetWiring) {
    let (all_done, percent) = {
        let mut p = w.progress.borrow_mut();
        (p.settle(), p.percent())
    };
    if let Some(document) = dom::window_document() {
        dom::set_loader_text(&document, percent);
        if all_done {
            let now_sec = w.epoch.elapsed().as_secs_f64();
            *w.overlay_fade.borrow_mut() = OverlayFade::begin(&document, now_sec);
        }
    }
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {}", url, e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    resp.binary()
        .await
        .map_err(|e| anyhow::anyhow!("read {}: {}", url, e))
}

/// Decode a png/jpeg into tightly packed RGBA8.
fn decode_rgba8(bytes: &[u8]) -> anyhow::Result<(u32, u32, Vec<u8>)> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((width, height, rgba.into_raw()))
}

/// Decode a Radiance HDR into `rgba16float` texels (little-endian bytes),
/// alpha fixed at 1.
fn decode_hdr_rgba16f(bytes: &[u8]) -> anyhow::Result<(u32, u32, Vec<u8>)> {
    let decoder = image::codecs::hdr::HdrDecoder::new(std::io::BufReader::new(
        std::io::Cursor::new(bytes),
    ))?;
    let meta = decoder.metadata();
    let pixels = decoder.read_image_hdr()?;
    let mut out = Vec::with_capacity(pixels.len() * 8);
    for px in pixels {
        for c in px.0 {
            out.extend_from_slice(&half::f16::from_f32(c).to_le_bytes());
        }
        out.extend_from_slice(&half::f16::ONE.to_le_bytes());
    }
    Ok((meta.width, meta.height, out))
}
