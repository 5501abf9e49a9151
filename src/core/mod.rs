pub mod geometry;
pub mod orbit;
pub mod progress;
pub mod scroll;
pub mod tween;
pub mod view;

pub use orbit::*;
pub use progress::*;
pub use scroll::*;
pub use tween::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
