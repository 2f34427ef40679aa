/// Latest scroll offset of the overlay container, in CSS pixels.
///
/// Owned explicitly and handed to both the scroll handler (single writer)
/// and the frame loop (single reader per frame) instead of living in a
/// process-wide global. Only the most recent value matters; a read that is
/// stale by one frame is fine.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollState {
    top: f32,
}

impl ScrollState {
    pub fn new(initial_top: f32) -> Self {
        Self { top: initial_top }
    }

    pub fn set(&mut self, top: f32) {
        self.top = top;
    }

    pub fn top(&self) -> f32 {
        self.top
    }
}
