/// Scroll position as seen by the animation system
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    /// Scroll offset of the page, never negative
    pub current_y: f64,
    /// Index of the step containing `current_y`
    pub current_step: usize,
    /// Whether the last sample moved beyond the dead zone
    pub is_scrolling: bool,
}
