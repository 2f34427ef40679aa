// Layout and motion tuning shared by the web frontend and the host tests.

// Responsive layout
pub const MOBILE_BREAKPOINT_PX: f32 = 700.0; // screen width below this is "mobile"
pub const MARGIN_RATIO_MOBILE: f32 = 0.2;
pub const MARGIN_RATIO_DESKTOP: f32 = 0.1;
pub const CONTENT_RATIO_MOBILE: f32 = 0.8;
pub const CONTENT_RATIO_DESKTOP: f32 = 0.6;

// Section motion
pub const SCROLL_SMOOTHING: f32 = 0.1; // fraction of remaining distance covered per tick
pub const SECTION_DEPTH_FACTOR: f32 = 1.5; // parallax speed multiplier
pub const SECTION_OFFSET_MOBILE: f32 = 1.0;
pub const SECTION_OFFSET_DESKTOP: f32 = 0.5;

// Object presentation
pub const ROTATION_PER_FRAME: f32 = 0.01; // radians about Y, scroll-independent
pub const ACTIVE_SCALE: f32 = 1.4; // applied while a section's overlay is toggled active
pub const MODEL_BASE_SCALE: f32 = 40.0; // world-space edge length of the section object
pub const MODEL_Y_OFFSET: f32 = -35.0; // object drop below its section anchor

// Camera
pub const CAMERA_Z: f32 = 120.0;
pub const CAMERA_FOV_DEG: f32 = 70.0;
