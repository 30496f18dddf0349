//! Style sinks: where computed animation values end up.
//!
//! - `sink` - The [`StyleSink`] trait bindings write through
//! - `transform` - Composition of several transform functions into one value
//! - `element` - In-memory element used by tests and the command line driver

mod element;
mod sink;
mod transform;

pub use element::ElementStyle;
pub use sink::StyleSink;
pub use transform::{TransformState, TRANSFORM_PROPERTIES};
