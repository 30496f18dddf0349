pub mod animation;
pub mod config;
pub mod error;
pub mod notifier;
pub mod scheduler;
pub mod scroll;
pub mod steps;
pub mod style;

pub use animation::{AnimatedProperty, AnimationBinding, AnimationSpec, TransformProperty};
pub use config::{AppConfig, TrackerConfig};
pub use error::{Error, Result};
pub use notifier::{ChangeEvent, ChangeNotifier, ChangeObserver, SubscriptionId};
pub use scheduler::ScrollDriver;
pub use scroll::{ScriptedScrollSource, ScrollController, ScrollSource, ScrollState, ScrollTracker};
pub use steps::{StepDefinition, StepStructure};
pub use style::{ElementStyle, StyleSink};
