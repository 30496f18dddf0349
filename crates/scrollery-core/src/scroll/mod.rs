//! Scroll tracking for step-based animations
//!
//! ## Atomic
//! - `state` - The tracked `(y, step, scrolling)` triple
//! - `source` - Where raw scroll offsets come from
//!
//! ## Molecular
//! - `tracker` - Turns raw samples into change events
//! - `controller` - Couples tracker, source and notifier into the tick-loop contract
//!
//! # Usage
//!
//! ```ignore
//! let mut controller = ScrollController::new(tracker, source);
//! controller.subscribe(binding);
//!
//! // On every scroll event from the page
//! if controller.on_scroll() {
//!     // start ticking; on each tick:
//!     while controller.animate_frame() { /* wait one tick */ }
//! }
//! ```

// Atomic
pub mod source;
pub mod state;

// Molecular
pub mod controller;
pub mod tracker;

pub use controller::ScrollController;
pub use source::{ScriptedScrollSource, ScrollSource};
pub use state::ScrollState;
pub use tracker::ScrollTracker;
