/// Enter-edge detector for one section's overlay panel.
///
/// The observer may report the same visibility repeatedly; the side effect
/// must fire exactly once per transition into view, and never on exit.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityTracker {
    in_view: bool,
}

impl VisibilityTracker {
    /// Feed the latest intersection state; returns `true` exactly when the
    /// panel transitions from hidden to visible.
    pub fn update(&mut self, intersecting: bool) -> bool {
        let entered = intersecting && !self.in_view;
        self.in_view = intersecting;
        entered
    }

    pub fn is_in_view(&self) -> bool {
        self.in_view
    }
}

/// Deterministic tie-break when several sections enter in the same observer
/// batch: the topmost (lowest index) section's background wins.
pub fn pick_entered(entered: &[usize]) -> Option<usize> {
    entered.iter().copied().min()
}
