use crate::config::SceneConfig;
use crate::constants::{
    CONTENT_RATIO_DESKTOP, CONTENT_RATIO_MOBILE, MARGIN_RATIO_DESKTOP, MARGIN_RATIO_MOBILE,
    MOBILE_BREAKPOINT_PX, SECTION_OFFSET_DESKTOP, SECTION_OFFSET_MOBILE,
};

/// Raw dimensions the layout is derived from: the camera's world-space
/// viewport and the canvas backing store in pixels.
#[derive(Clone, Copy, Debug)]
pub struct ViewportInput {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub screen_width: f32,
    pub screen_height: f32,
}

/// Viewport-relative metrics, recomputed on every consumer access. All
/// lengths except `aspect` are in world-space units.
#[derive(Clone, Copy, Debug)]
pub struct LayoutMetrics {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub is_mobile: bool,
    pub margin: f32,
    pub content_max_width: f32,
    pub section_height: f32,
    /// Screen pixels per world-space unit of viewport height. Converts pixel
    /// scroll offsets into world-space translations.
    pub aspect: f32,
}

/// Pure function of its inputs; cheap enough to run once per frame per
/// consumer. Degenerate inputs (zero viewport height) yield non-finite
/// values rather than an error.
pub fn compute_layout(config: &SceneConfig, input: ViewportInput) -> LayoutMetrics {
    let canvas_width = input.viewport_width / config.zoom;
    let canvas_height = input.viewport_height / config.zoom;
    let is_mobile = input.screen_width < MOBILE_BREAKPOINT_PX;

    let margin_ratio = if is_mobile {
        MARGIN_RATIO_MOBILE
    } else {
        MARGIN_RATIO_DESKTOP
    };
    let content_ratio = if is_mobile {
        CONTENT_RATIO_MOBILE
    } else {
        CONTENT_RATIO_DESKTOP
    };

    // Section spacing follows canvas height; spans (pages - 1) heights over
    // (sections - 1) gaps.
    let section_height =
        canvas_height * (config.pages.saturating_sub(1) as f32) / ((config.sections - 1) as f32);

    LayoutMetrics {
        canvas_width,
        canvas_height,
        is_mobile,
        margin: canvas_width * margin_ratio,
        content_max_width: canvas_width * content_ratio,
        section_height,
        aspect: input.screen_height / input.viewport_height,
    }
}

impl LayoutMetrics {
    /// Root offset used when a section declares none of its own.
    pub fn default_offset(&self) -> f32 {
        if self.is_mobile {
            SECTION_OFFSET_MOBILE
        } else {
            SECTION_OFFSET_DESKTOP
        }
    }
}
