/// Viewport math shared by the resize handler and the projection setup.
#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

/// Device pixel ratio used for the canvas backing store, capped so high-DPI
/// displays don't quadruple the fill cost.
#[inline]
pub fn clamped_pixel_ratio(device_pixel_ratio: f64, max: f64) -> f64 {
    device_pixel_ratio.min(max)
}

/// CSS size to backing-store pixels, never collapsing to zero.
#[inline]
pub fn backing_size(css_px: f64, pixel_ratio: f64) -> u32 {
    ((css_px * pixel_ratio) as u32).max(1)
}
