use tracing::debug;

use super::source::ScrollSource;
use super::state::ScrollState;
use super::tracker::ScrollTracker;
use crate::notifier::{ChangeNotifier, ChangeObserver, SubscriptionId};

/// Scroll tracking for one page.
///
/// Owns the tracker, the scroll source and the observer list. A tick loop is
/// started by [`ScrollController::on_scroll`] and advanced with
/// [`ScrollController::animate_frame`] until that reports the page settled.
pub struct ScrollController<Src: ScrollSource> {
    tracker: ScrollTracker,
    notifier: ChangeNotifier,
    source: Src,
    ticking: bool,
}

impl<Src: ScrollSource> ScrollController<Src> {
    pub fn new(tracker: ScrollTracker, source: Src) -> Self {
        Self {
            tracker,
            notifier: ChangeNotifier::new(),
            source,
            ticking: false,
        }
    }

    pub fn subscribe(&mut self, observer: impl ChangeObserver + 'static) -> SubscriptionId {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn state(&self) -> &ScrollState {
        self.tracker.state()
    }

    /// Whether a tick loop is currently running
    #[inline]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Handle a scroll event. Returns true if a tick loop must be started.
    pub fn on_scroll(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        debug!("Scroll detected, starting tick loop");
        self.ticking = true;
        true
    }

    /// Run one tick: sample the source and broadcast any change.
    ///
    /// Returns false once the page has stopped moving; the caller must then
    /// cancel its tick loop.
    pub fn animate_frame(&mut self) -> bool {
        let y = self.source.scroll_y();
        match self.tracker.sample(y) {
            Some(event) => {
                self.notifier.notify(&event);
                true
            }
            None => {
                debug!("Scrolling settled at y={}, stopping tick loop", self.state().current_y);
                self.ticking = false;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationBinding;
    use crate::config::TrackerConfig;
    use crate::notifier::ChangeEvent;
    use crate::scroll::ScriptedScrollSource;
    use crate::steps::{StepDefinition, StepStructure};
    use crate::style::ElementStyle;
    use crate::Result;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn structure() -> Rc<StepStructure> {
        Rc::new(
            StepStructure::new(vec![
                StepDefinition::new("one", 0.0, 100.0),
                StepDefinition::new("two", 100.0, 100.0),
                StepDefinition::new("three", 200.0, 100.0),
            ])
            .unwrap(),
        )
    }

    fn controller<Src: ScrollSource>(source: Src) -> ScrollController<Src> {
        let tracker = ScrollTracker::new(structure(), TrackerConfig::default());
        ScrollController::new(tracker, source)
    }

    #[test]
    fn test_on_scroll_starts_loop_once() {
        let mut c = controller(ScriptedScrollSource::new([50.0]));
        assert!(!c.is_ticking());
        assert!(c.on_scroll());
        assert!(!c.on_scroll());
        assert!(c.is_ticking());
    }

    #[test]
    fn test_frame_notifies_while_scrolling() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut c = controller(ScriptedScrollSource::new([10.0, 60.0, 60.0]));
        let log = Rc::clone(&events);
        c.subscribe(move |event: &ChangeEvent| -> Result<()> {
            log.borrow_mut().push(*event);
            Ok(())
        });

        assert!(c.on_scroll());
        assert!(c.animate_frame());
        assert!(c.animate_frame());
        assert!(!c.animate_frame());
        assert!(!c.is_ticking());

        assert_eq!(
            *events.borrow(),
            vec![ChangeEvent::new(10.0, 0, 0), ChangeEvent::new(60.0, 0, 0)]
        );
        // The loop can be restarted by the next scroll event
        assert!(c.on_scroll());
    }

    #[test]
    fn test_bindings_follow_the_page() {
        let offset = Rc::new(Cell::new(0.0));
        let mut c = controller(Rc::clone(&offset));
        let element = Rc::new(RefCell::new(ElementStyle::new()));
        let binding = AnimationBinding::bind(
            r#"{"0": {"translateY": [0, 100]}, "1": {"opacity": [0, 1], "rotate": [0, 100]}}"#,
            structure(),
            Rc::clone(&element),
        )
        .unwrap();
        c.subscribe(binding);

        offset.set(90.0);
        c.on_scroll();
        while c.animate_frame() {}
        assert_eq!(element.borrow().style("transform"), Some("translateY(90px)"));

        offset.set(110.0);
        c.on_scroll();
        while c.animate_frame() {}
        assert_eq!(
            element.borrow().style("transform"),
            Some("translateY(100px) rotate(10deg)")
        );
        assert_eq!(element.borrow().style("opacity"), Some("0.1"));
        assert_eq!(c.state().current_step, 1);
    }

    #[test]
    fn test_failing_binding_does_not_block_others() {
        let offset = Rc::new(Cell::new(0.0));
        let mut c = controller(Rc::clone(&offset));
        let broken = Rc::new(RefCell::new(ElementStyle::new()));
        let healthy = Rc::new(RefCell::new(ElementStyle::new()));
        c.subscribe(
            AnimationBinding::bind(r#"{"0": {"height": [0, 10]}}"#, structure(), Rc::clone(&broken))
                .unwrap(),
        );
        c.subscribe(
            AnimationBinding::bind(r#"{"0": {"opacity": [0, 1]}}"#, structure(), Rc::clone(&healthy))
                .unwrap(),
        );

        offset.set(50.0);
        c.on_scroll();
        assert!(c.animate_frame());

        assert_eq!(broken.borrow().css_text(), "");
        assert_eq!(healthy.borrow().style("opacity"), Some("0.5"));
    }

    #[test]
    fn test_unsubscribed_binding_stops_updating() {
        let offset = Rc::new(Cell::new(0.0));
        let mut c = controller(Rc::clone(&offset));
        let element = Rc::new(RefCell::new(ElementStyle::new()));
        let id = c.subscribe(
            AnimationBinding::bind(r#"{"0": {"opacity": [0, 1]}}"#, structure(), Rc::clone(&element))
                .unwrap(),
        );

        offset.set(20.0);
        c.on_scroll();
        c.animate_frame();
        assert!(c.unsubscribe(id));

        offset.set(80.0);
        c.animate_frame();
        assert_eq!(element.borrow().style("opacity"), Some("0.2"));
    }
}
