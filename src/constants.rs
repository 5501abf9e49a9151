/// Scene layout and interaction tuning constants.
///
/// These express intended behavior (distances, durations, caps) and keep
/// magic numbers out of the code.
// Camera
pub const CAMERA_FOV_DEG: f32 = 25.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 9.0;

// Orbiting spheres
pub const SPHERE_COUNT: usize = 4;
pub const SPHERE_RADIUS: f32 = 1.3;
pub const SPHERE_SEGMENTS: u32 = 64;
pub const ORBIT_RADIUS: f32 = 4.5;

// Sphere self-spin, radians per second of elapsed wall-clock time
pub const SPIN_RATE: f32 = 0.01;

// Orbit group placement
pub const GROUP_TILT_X: f32 = 0.1;
pub const GROUP_Y_OFFSET: f32 = -0.8;

// Starfield backdrop
pub const BACKDROP_RADIUS: f32 = 50.0;
pub const BACKDROP_OPACITY: f32 = 0.3;

// Scroll handling
pub const WHEEL_COOLDOWN_MS: f64 = 2000.0;
pub const SCROLL_STEPS: u8 = 4;
pub const SCROLL_TWEEN_DURATION_SEC: f64 = 1.0;
pub const HEADING_STEP_PCT: f64 = 100.0;
pub const GROUP_YAW_STEP: f64 = std::f64::consts::FRAC_PI_2;

// Loader overlay fade
pub const OVERLAY_FADE_DURATION_SEC: f64 = 1.0;

// Canvas backing store, devicePixelRatio cap
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// DOM hooks
pub const CANVAS_ID: &str = "canvas";
pub const LOADER_ID: &str = "loader";
pub const HEADING_CLASS: &str = "heading";

// Assets. The HDRI lights the spheres; the four surface textures are
// assigned in this order; the stars texture wraps the backdrop and does
// not gate the loading overlay.
pub const HDRI_URL: &str =
    "https://dl.polyhaven.org/file/ph-assets/HDRIs/hdr/1k/kloppenheim_02_puresky_1k.hdr";
pub const SPHERE_TEXTURE_URLS: [&str; 4] = [
    "static/textures/csilla/color.png",
    "static/textures/earth/map.jpg",
    "static/textures/venus/map.jpg",
    "static/textures/volcanic/color.png",
];
pub const STARS_TEXTURE_URL: &str = "static/textures/stars.jpg";

// HDRI + four sphere textures
pub const TRACKED_ASSET_COUNT: usize = 5;
