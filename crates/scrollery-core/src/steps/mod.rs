//! Step configuration and the structure model derived from it.

mod structure;

pub(crate) use structure::total_duration;
pub use structure::{StepDefinition, StepStructure};
