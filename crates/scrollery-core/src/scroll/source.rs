use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Provides the page's current vertical scroll offset.
///
/// Offsets may be transiently negative (overscroll bounce).
pub trait ScrollSource {
    fn scroll_y(&mut self) -> f64;
}

/// Shared offset set from outside, e.g. by a scroll event handler
impl ScrollSource for Rc<Cell<f64>> {
    fn scroll_y(&mut self) -> f64 {
        self.get()
    }
}

/// Replays a fixed sequence of offsets, one per read.
///
/// Once exhausted it keeps returning the last offset, like a page that has
/// stopped moving.
#[derive(Debug, Clone, Default)]
pub struct ScriptedScrollSource {
    offsets: VecDeque<f64>,
    last: f64,
}

impl ScriptedScrollSource {
    pub fn new(offsets: impl IntoIterator<Item = f64>) -> Self {
        Self {
            offsets: offsets.into_iter().collect(),
            last: 0.0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.offsets.len()
    }
}

impl ScrollSource for ScriptedScrollSource {
    fn scroll_y(&mut self) -> f64 {
        if let Some(next) = self.offsets.pop_front() {
            self.last = next;
        }
        self.last
    }
}
