//! Fan-out of scroll changes to subscribed observers.

use tracing::{debug, error};

use crate::Result;

/// A change of scroll offset, announced once per tick while scrolling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeEvent {
    /// Current (clamped) scroll offset
    pub y: f64,
    /// Step containing `y`
    pub new_step: usize,
    /// Step before this tick
    pub old_step: usize,
}

impl ChangeEvent {
    pub fn new(y: f64, new_step: usize, old_step: usize) -> Self {
        Self {
            y,
            new_step,
            old_step,
        }
    }
}

/// Receives every change event emitted by a [`ChangeNotifier`]
pub trait ChangeObserver {
    fn on_change(&mut self, event: &ChangeEvent) -> Result<()>;
}

impl<F> ChangeObserver for F
where
    F: FnMut(&ChangeEvent) -> Result<()>,
{
    fn on_change(&mut self, event: &ChangeEvent) -> Result<()> {
        self(event)
    }
}

/// Handle returned by [`ChangeNotifier::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Synchronous observer list.
///
/// Observers are called in registration order. A failing observer is logged
/// and skipped; the remaining observers still receive the event.
#[derive(Default)]
pub struct ChangeNotifier {
    observers: Vec<(SubscriptionId, Box<dyn ChangeObserver>)>,
    next_id: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl ChangeObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver `event` to every observer. Returns how many of them failed.
    pub fn notify(&mut self, event: &ChangeEvent) -> usize {
        debug!(
            "Scroll change: y={} step {} -> {}",
            event.y, event.old_step, event.new_step
        );

        let mut failures = 0;
        for (id, observer) in self.observers.iter_mut() {
            if let Err(e) = observer.on_change(event) {
                error!("Observer {:?} failed to handle scroll change: {}", id, e);
                failures += 1;
            }
        }
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(log: &Rc<RefCell<Vec<(u32, ChangeEvent)>>>, tag: u32) -> impl ChangeObserver {
        let log = Rc::clone(log);
        move |event: &ChangeEvent| -> Result<()> {
            log.borrow_mut().push((tag, *event));
            Ok(())
        }
    }

    #[test]
    fn test_delivers_in_emission_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(recorder(&log, 1));

        notifier.notify(&ChangeEvent::new(10.0, 0, 0));
        notifier.notify(&ChangeEvent::new(120.0, 1, 0));

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].1.y, 10.0);
        assert_eq!(log[1].1.new_step, 1);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        let first = notifier.subscribe(recorder(&log, 1));
        notifier.subscribe(recorder(&log, 2));

        assert!(notifier.unsubscribe(first));
        assert!(!notifier.unsubscribe(first));
        notifier.notify(&ChangeEvent::new(5.0, 0, 0));

        assert_eq!(notifier.len(), 1);
        assert_eq!(log.borrow().iter().map(|(tag, _)| *tag).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_failing_observer_is_isolated() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(|_: &ChangeEvent| -> Result<()> {
            Err(Error::UnsupportedProperty {
                step: 0,
                property: "width".to_string(),
            })
        });
        notifier.subscribe(recorder(&log, 2));

        let failures = notifier.notify(&ChangeEvent::new(5.0, 0, 0));

        assert_eq!(failures, 1);
        assert_eq!(log.borrow().len(), 1);
    }
}
