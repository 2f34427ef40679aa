use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scene needs at least 2 sections, got {0}")]
    TooFewSections(u32),
    #[error("zoom must be positive and finite, got {0}")]
    BadZoom(f32),
}

/// Fixed-for-the-page scene configuration: how many sections the scene is
/// split into, how many viewport-heights the scroll container spans, and the
/// zoom applied to the world-space canvas.
#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    pub sections: u32,
    pub pages: u32,
    pub zoom: f32,
}

impl SceneConfig {
    /// `sections` is used as a divisor in section spacing, so fewer than two
    /// sections is rejected up front instead of propagating non-finite layout.
    pub fn new(sections: u32, pages: u32, zoom: f32) -> Result<Self, ConfigError> {
        if sections < 2 {
            return Err(ConfigError::TooFewSections(sections));
        }
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ConfigError::BadZoom(zoom));
        }
        Ok(Self {
            sections,
            pages,
            zoom,
        })
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sections: 3,
            pages: 3,
            zoom: 1.0,
        }
    }
}
