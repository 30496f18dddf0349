use std::rc::Rc;

use tracing::{debug, warn};

use super::interpolate::{format_value, interpolate, progress};
use super::property::{AnimatedProperty, PropertyValues, TransformProperty};
use super::spec::AnimationSpec;
use crate::config::AnimationConfig;
use crate::notifier::{ChangeEvent, ChangeObserver};
use crate::steps::StepStructure;
use crate::style::{StyleSink, TransformState, TRANSFORM_PROPERTIES};
use crate::{Error, Result};

/// One computed style write
#[derive(Debug, Clone, PartialEq)]
pub enum StyleChange {
    Transform { property: TransformProperty, value: f64 },
    Class { add: String, remove: String },
    Style { name: String, value: f64 },
}

/// How a step's values are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepMode {
    /// The scroll moved through the whole step; jump to the endpoint.
    /// `forward` picks the end value, otherwise the start value.
    Finish { forward: bool },
    /// The step is occupied; interpolate by scroll progress
    Interpolate,
}

/// Steps touched by a move from `old_step` to `new_step`, in application order.
///
/// The list always starts at `old_step` and ends at `new_step`.
pub fn affected_steps(new_step: usize, old_step: usize) -> Vec<usize> {
    if new_step > old_step {
        (old_step..=new_step).collect()
    } else {
        (new_step..=old_step).rev().collect()
    }
}

/// Scroll animation of one element.
///
/// Subscribe it to a [`crate::ChangeNotifier`]; on every change it works out
/// which steps were entered or crossed and writes their styles to the sink.
pub struct AnimationBinding<S: StyleSink> {
    spec: AnimationSpec,
    animated_properties: Vec<AnimatedProperty>,
    style_properties: Vec<String>,
    structure: Rc<StepStructure>,
    sink: S,
    transform: TransformState,
}

impl<S: StyleSink> AnimationBinding<S> {
    pub fn new(spec: AnimationSpec, structure: Rc<StepStructure>, sink: S) -> Self {
        let animated_properties = spec.animated_properties();
        Self {
            spec,
            animated_properties,
            style_properties: AnimationConfig::default().style_properties,
            structure,
            sink,
            transform: TransformState::new(),
        }
    }

    /// Parse a declarative animation attribute and bind it to `sink`
    pub fn bind(attribute: &str, structure: Rc<StepStructure>, sink: S) -> Result<Self> {
        Ok(Self::new(AnimationSpec::parse(attribute)?, structure, sink))
    }

    /// Replace the plain style properties this binding accepts
    pub fn with_style_properties<I, P>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.style_properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn animated_properties(&self) -> &[AnimatedProperty] {
        &self.animated_properties
    }

    /// React to a scroll change.
    ///
    /// A step whose styles cannot be computed is skipped; the other affected
    /// steps are still applied and the first failure is returned.
    pub fn handle(&mut self, event: &ChangeEvent) -> Result<()> {
        let steps = affected_steps(event.new_step, event.old_step);
        let forward = event.new_step > event.old_step;
        let mut first_error = None;

        if let Some((_, passed)) = steps.split_last() {
            for &step in passed {
                match self.calc_styles(step, event.y, StepMode::Finish { forward }) {
                    Ok(styles) => self.apply_styles(&styles),
                    Err(e) => {
                        warn!("Skipping step {} while passing through: {}", step, e);
                        first_error.get_or_insert(e);
                    }
                }
            }
        }

        match self.calc_styles(event.new_step, event.y, StepMode::Interpolate) {
            Ok(styles) => self.apply_styles(&styles),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Values the binding would write for `step` when the scroll moved
    /// through it entirely in the given direction
    pub fn finished_styles(&self, step: usize, forward: bool) -> Result<Vec<StyleChange>> {
        self.calc_styles(step, 0.0, StepMode::Finish { forward })
    }

    /// Values the binding would write for `step` with the page at offset `y`
    pub fn interpolated_styles(&self, step: usize, y: f64) -> Result<Vec<StyleChange>> {
        self.calc_styles(step, y, StepMode::Interpolate)
    }

    fn calc_styles(&self, step: usize, y: f64, mode: StepMode) -> Result<Vec<StyleChange>> {
        let Some(animation) = self.spec.step(step) else {
            return Ok(Vec::new());
        };

        let mut styles = Vec::with_capacity(animation.len());
        for (property, values) in animation.iter() {
            self.check_supported(step, property)?;

            let change = match (property, values) {
                (AnimatedProperty::Class, PropertyValues::Class { remove, add }) => {
                    StyleChange::Class {
                        add: add.clone(),
                        remove: remove.clone(),
                    }
                }
                (property, PropertyValues::Numeric(values)) => {
                    let value = match mode {
                        StepMode::Finish { forward } => values[usize::from(forward)],
                        StepMode::Interpolate => {
                            let info = self.structure.step_at(step)?;
                            interpolate(*values, progress(y, info))
                        }
                    };
                    match property {
                        AnimatedProperty::Transform(t) => StyleChange::Transform {
                            property: *t,
                            value,
                        },
                        _ => StyleChange::Style {
                            name: property.name().to_string(),
                            value,
                        },
                    }
                }
                (property, _) => {
                    return Err(Error::InvalidSpec(format!(
                        "'{}' in step {} has values of the wrong kind",
                        property, step
                    )))
                }
            };
            styles.push(change);
        }

        Ok(styles)
    }

    fn check_supported(&self, step: usize, property: &AnimatedProperty) -> Result<()> {
        let supported = self.animated_properties.contains(property)
            && match property {
                AnimatedProperty::Style(name) => self.style_properties.iter().any(|p| p == name),
                _ => true,
            };

        if supported {
            Ok(())
        } else {
            Err(Error::UnsupportedProperty {
                step,
                property: property.name().to_string(),
            })
        }
    }

    /// Write styles to the sink, last computed first
    fn apply_styles(&mut self, styles: &[StyleChange]) {
        for style in styles.iter().rev() {
            match style {
                StyleChange::Transform { property, value } => {
                    self.transform.set(*property, *value);
                    let css = self.transform.css_value();
                    for name in TRANSFORM_PROPERTIES {
                        self.sink.set_style(name, &css);
                    }
                }
                StyleChange::Class { add, remove } => {
                    self.sink.add_class(add);
                    self.sink.remove_class(remove);
                }
                StyleChange::Style { name, value } => {
                    self.sink.set_style(name, &format_value(*value));
                }
            }
        }
    }
}

impl<S: StyleSink> ChangeObserver for AnimationBinding<S> {
    fn on_change(&mut self, event: &ChangeEvent) -> Result<()> {
        self.handle(event).inspect_err(|e| debug!("Animation binding rejected {:?}: {}", event, e))
    }
}
