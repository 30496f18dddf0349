use std::collections::BTreeMap;
use std::str::FromStr;

use serde_json::Value;

use super::property::{AnimatedProperty, PropertyValues};
use crate::{Error, Result};

/// Properties animated during one step, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepAnimation {
    properties: Vec<(AnimatedProperty, PropertyValues)>,
}

impl StepAnimation {
    pub fn iter(&self) -> impl Iterator<Item = &(AnimatedProperty, PropertyValues)> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, property: &AnimatedProperty) -> Option<&PropertyValues> {
        self.properties
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, values)| values)
    }
}

/// Declarative animation of one element, keyed by step index.
///
/// Parsed from the JSON attribute shape
/// `{"0": {"translateY": [0, 100]}, "1": {"class": ["hidden", "shown"]}}`.
/// Structural problems are reported here, when the element is bound, rather
/// than while scrolling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationSpec {
    steps: BTreeMap<usize, StepAnimation>,
}

impl AnimationSpec {
    pub fn parse(attribute: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(attribute)?;
        Self::try_from(value)
    }

    /// Animation declared for `step`, if any
    pub fn step(&self, step: usize) -> Option<&StepAnimation> {
        self.steps.get(&step)
    }

    /// Step indices that carry an animation, ascending
    pub fn step_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps.keys().copied()
    }

    /// Every property referenced by any step, in order of first appearance
    pub fn animated_properties(&self) -> Vec<AnimatedProperty> {
        let mut properties: Vec<AnimatedProperty> = Vec::new();
        for animation in self.steps.values() {
            for (property, _) in animation.iter() {
                if !properties.contains(property) {
                    properties.push(property.clone());
                }
            }
        }
        properties
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromStr for AnimationSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<Value> for AnimationSpec {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(invalid("expected an object keyed by step index"));
        };

        let mut steps = BTreeMap::new();
        for (key, animations) in map {
            let step: usize = key
                .trim()
                .parse()
                .map_err(|_| invalid(format!("'{}' is not a step index", key)))?;

            let Value::Object(animations) = animations else {
                return Err(invalid(format!("step {} must map property names to values", step)));
            };

            let mut properties = Vec::with_capacity(animations.len());
            for (name, values) in animations {
                let property = AnimatedProperty::from_name(&name);
                let values = parse_values(step, &property, &values)?;
                properties.push((property, values));
            }
            steps.insert(step, StepAnimation { properties });
        }

        Ok(Self { steps })
    }
}

fn parse_values(step: usize, property: &AnimatedProperty, values: &Value) -> Result<PropertyValues> {
    let pair = match values.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        _ => {
            return Err(invalid(format!(
                "'{}' in step {} must be a two-element array",
                property, step
            )))
        }
    };

    match property {
        AnimatedProperty::Class => match (pair[0].as_str(), pair[1].as_str()) {
            (Some(remove), Some(add)) => Ok(PropertyValues::Class {
                remove: remove.to_string(),
                add: add.to_string(),
            }),
            _ => Err(invalid(format!("'class' in step {} must hold two class names", step))),
        },
        _ => match (pair[0].as_f64(), pair[1].as_f64()) {
            (Some(from), Some(to)) => Ok(PropertyValues::Numeric([from, to])),
            _ => Err(invalid(format!(
                "'{}' in step {} must hold two numbers",
                property, step
            ))),
        },
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidSpec(message.into())
}
