/// Maps a page scroll offset onto timeline progress.
///
/// The timeline starts when the top of the page reaches the top of the
/// viewport and ends when the bottom of the page reaches the bottom of the
/// viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub scroll_height: f32,
    pub viewport_height: f32,
}

impl ScrollRange {
    pub fn new(scroll_height: f32, viewport_height: f32) -> Self {
        Self {
            scroll_height,
            viewport_height,
        }
    }

    /// Scrollable distance in pixels; zero when the page fits the viewport.
    pub fn distance(&self) -> f32 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }

    /// Progress in `[0, 1]` for a scroll offset. A page that cannot scroll
    /// stays at 0.
    pub fn progress(&self, scroll_top: f32) -> f32 {
        let distance = self.distance();
        if distance <= f32::EPSILON || !scroll_top.is_finite() {
            return 0.0;
        }
        (scroll_top / distance).clamp(0.0, 1.0)
    }
}
