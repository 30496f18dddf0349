//! Per-element scroll animation engine
//!
//! # Layers
//!
//! ## Atomic
//! - `property` - Closed set of animatable property kinds and their endpoint values
//! - `interpolate` - Pure progress and interpolation functions
//! - `spec` - Typed, validated form of the declarative animation attribute
//!
//! ## Molecular
//! - `binding` - Reacts to scroll changes and writes styles for one element
//!
//! # Usage
//!
//! ```ignore
//! use scrollery_core::{AnimationBinding, AnimationSpec, ElementStyle};
//!
//! let spec = AnimationSpec::parse(r#"{"0": {"translateY": [0, 100]}}"#)?;
//! let element = Rc::new(RefCell::new(ElementStyle::new()));
//! let binding = AnimationBinding::new(spec, structure, Rc::clone(&element));
//! notifier.subscribe(binding);
//! ```

// Atomic
pub mod interpolate;
pub mod property;
pub mod spec;

// Molecular
pub mod binding;

pub use binding::{affected_steps, AnimationBinding, StyleChange};
pub use property::{AnimatedProperty, PropertyValues, TransformProperty};
pub use spec::{AnimationSpec, StepAnimation};
