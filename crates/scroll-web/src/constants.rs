// DOM contract with index.html plus frontend-only tuning.

pub const CANVAS_ID: &str = "app-canvas";
pub const SCROLL_AREA_ID: &str = "scroll-area";
pub const PORTAL_ID: &str = "portal";

// Frame gaps above this get a warning in the console
pub const SLOW_FRAME_WARN_MS: f32 = 50.0;
