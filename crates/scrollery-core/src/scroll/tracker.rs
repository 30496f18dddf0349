use std::rc::Rc;

use tracing::debug;

use super::state::ScrollState;
use crate::config::TrackerConfig;
use crate::notifier::ChangeEvent;
use crate::steps::StepStructure;

/// Converts raw scroll samples into a stable [`ScrollState`].
///
/// Call [`ScrollTracker::sample`] once per tick with the raw offset. It
/// returns the change to broadcast, or `None` once the page has settled.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    structure: Rc<StepStructure>,
    config: TrackerConfig,
    state: ScrollState,
    /// Latched when a one-time animation has reached its end
    finished: bool,
}

impl ScrollTracker {
    pub fn new(structure: Rc<StepStructure>, config: TrackerConfig) -> Self {
        Self {
            structure,
            config,
            state: ScrollState::default(),
            finished: false,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Whether a one-time animation has run to completion
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process one tick.
    pub fn sample(&mut self, new_y: f64) -> Option<ChangeEvent> {
        if self.finished {
            self.state.is_scrolling = false;
            return None;
        }

        if !self.update_is_scrolling(new_y) {
            return None;
        }

        let old_step = self.state.current_step;
        self.update_step(self.state.current_y);

        if self.config.animate_only_once && self.state.current_y >= self.structure.total_length() {
            debug!("One-time animation reached its end at y={}", self.state.current_y);
            self.finished = true;
        }

        Some(ChangeEvent::new(
            self.state.current_y,
            self.state.current_step,
            old_step,
        ))
    }

    /// Record `new_y` if it moved past the dead zone. Returns whether the page is scrolling.
    pub fn update_is_scrolling(&mut self, new_y: f64) -> bool {
        if (new_y - self.state.current_y).abs() > self.config.dead_zone {
            // Negative offsets come from overscroll bounce
            self.state.current_y = new_y.max(0.0);
            self.state.is_scrolling = true;
        } else {
            self.state.is_scrolling = false;
        }
        self.state.is_scrolling
    }

    /// Recompute the current step for offset `y`
    pub fn update_step(&mut self, y: f64) -> usize {
        self.state.current_step = self.structure.step_for(y, self.state.current_step);
        self.state.current_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::StepDefinition;

    fn tracker(config: TrackerConfig) -> ScrollTracker {
        let structure = StepStructure::new(vec![
            StepDefinition::new("one", 0.0, 100.0),
            StepDefinition::new("two", 100.0, 100.0),
            StepDefinition::new("three", 200.0, 100.0),
        ])
        .unwrap();
        ScrollTracker::new(Rc::new(structure), config)
    }

    #[test]
    fn test_initial_state() {
        let t = tracker(TrackerConfig::default());
        assert_eq!(*t.state(), ScrollState::default());
    }

    #[test]
    fn test_update_is_scrolling_dead_zone() {
        let mut t = tracker(TrackerConfig::default());
        assert!(t.update_is_scrolling(10.0));
        assert_eq!(t.state().current_y, 10.0);
        assert!(!t.update_is_scrolling(10.0));
        assert!(!t.update_is_scrolling(11.0));
        assert_eq!(t.state().current_y, 10.0);
        assert!(t.update_is_scrolling(11.5));
    }

    #[test]
    fn test_negative_bounce_clamped() {
        let mut t = tracker(TrackerConfig::default());
        t.update_is_scrolling(50.0);
        assert!(t.update_is_scrolling(-20.0));
        assert_eq!(t.state().current_y, 0.0);
    }

    #[test]
    fn test_update_step() {
        let mut t = tracker(TrackerConfig::default());
        for (i, y) in [50.0, 150.0, 250.0].into_iter().enumerate() {
            assert_eq!(t.update_step(y), i);
        }
        assert_eq!(t.update_step(-5.0), 0);
        assert_eq!(t.update_step(300.0), 2);
    }

    #[test]
    fn test_boundary_offset_keeps_previous_step() {
        let mut t = tracker(TrackerConfig::default());
        t.update_step(150.0);
        assert_eq!(t.update_step(200.0), 1);
        assert_eq!(t.update_step(100.0), 1);
    }

    #[test]
    fn test_sample_emits_change() {
        let mut t = tracker(TrackerConfig::default());
        assert_eq!(t.sample(90.0), Some(ChangeEvent::new(90.0, 0, 0)));
        assert_eq!(t.sample(110.0), Some(ChangeEvent::new(110.0, 1, 0)));
        assert_eq!(t.sample(250.0), Some(ChangeEvent::new(250.0, 2, 1)));
        assert_eq!(t.sample(250.5), None);
        assert!(!t.state().is_scrolling);
    }

    #[test]
    fn test_sample_bounce_reports_zero() {
        let mut t = tracker(TrackerConfig::default());
        t.sample(150.0);
        assert_eq!(t.sample(-8.0), Some(ChangeEvent::new(0.0, 0, 1)));
    }

    #[test]
    fn test_animate_only_once_latches() {
        let mut t = tracker(TrackerConfig {
            animate_only_once: true,
            ..Default::default()
        });
        assert!(t.sample(150.0).is_some());
        assert_eq!(t.sample(320.0), Some(ChangeEvent::new(320.0, 2, 1)));
        assert!(t.is_finished());
        assert_eq!(t.sample(50.0), None);
        assert_eq!(t.state().current_y, 320.0);
    }

    #[test]
    fn test_repeating_animation_does_not_latch() {
        let mut t = tracker(TrackerConfig::default());
        t.sample(320.0);
        assert!(!t.is_finished());
        assert_eq!(t.sample(50.0), Some(ChangeEvent::new(50.0, 0, 2)));
    }
}
