use crate::constants::SCROLL_SMOOTHING;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Static description of one section's parallax behavior. `offset` is the
/// fraction of the scroll range where the section is centered; `None` means
/// "inherit from the nearest enclosing section".
#[derive(Clone, Copy, Debug)]
pub struct SectionDescriptor {
    pub factor: f32,
    pub offset: Option<f32>,
    pub parent: Option<usize>,
}

/// Resolve effective offsets top-down before a frame's offset computation.
/// Parents must precede children in the slice; a missing or out-of-order
/// parent falls back to `root_default`.
pub fn resolve_offsets(sections: &[SectionDescriptor], root_default: f32) -> Vec<f32> {
    let mut resolved = Vec::with_capacity(sections.len());
    for (i, s) in sections.iter().enumerate() {
        let inherited = s
            .parent
            .filter(|&p| p < i)
            .map(|p| resolved[p])
            .unwrap_or(root_default);
        resolved.push(s.offset.unwrap_or(inherited));
    }
    resolved
}

/// Static vertical base of a section, composed with the smoothed scroll
/// translation every frame.
#[inline]
pub fn base_offset_y(section_height: f32, offset: f32, factor: f32) -> f32 {
    -section_height * offset * factor
}

/// Per-section transform accumulator. Stepped once per rendered frame;
/// the fixed smoothing factor covers 10% of the remaining distance per tick
/// regardless of frame rate (a deliberate approximation).
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionMotion {
    pub cur_y: f32,
}

impl SectionMotion {
    /// Scroll-driven target translation for a given scroll offset.
    #[inline]
    pub fn target(scroll_top: f32, aspect: f32, zoom: f32, factor: f32) -> f32 {
        let cur_top = scroll_top / aspect;
        (cur_top / zoom) * factor
    }

    /// Advance one frame toward the current target and return the smoothed
    /// translation.
    pub fn step(&mut self, scroll_top: f32, aspect: f32, zoom: f32, factor: f32) -> f32 {
        let target = Self::target(scroll_top, aspect, zoom, factor);
        self.cur_y = lerp(self.cur_y, target, SCROLL_SMOOTHING);
        self.cur_y
    }
}
