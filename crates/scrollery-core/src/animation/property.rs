use std::fmt;

use super::interpolate::format_value;

/// Transform functions that share the element's `transform` style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformProperty {
    TranslateY,
    Rotate,
}

impl TransformProperty {
    pub fn name(&self) -> &'static str {
        match self {
            TransformProperty::TranslateY => "translateY",
            TransformProperty::Rotate => "rotate",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            TransformProperty::TranslateY => "px",
            TransformProperty::Rotate => "deg",
        }
    }

    /// Render as a CSS transform function, e.g. `rotate(10deg)`
    pub fn css_function(&self, value: f64) -> String {
        format!("{}({}{})", self.name(), format_value(value), self.unit())
    }
}

/// Property an animation spec can drive
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    Transform(TransformProperty),
    /// Swaps one class for another; never interpolated
    Class,
    /// Any other name, written as a plain numeric style
    Style(String),
}

impl AnimatedProperty {
    pub fn from_name(name: &str) -> Self {
        match name {
            "translateY" => AnimatedProperty::Transform(TransformProperty::TranslateY),
            "rotate" => AnimatedProperty::Transform(TransformProperty::Rotate),
            "class" => AnimatedProperty::Class,
            other => AnimatedProperty::Style(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnimatedProperty::Transform(t) => t.name(),
            AnimatedProperty::Class => "class",
            AnimatedProperty::Style(name) => name,
        }
    }
}

impl fmt::Display for AnimatedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The two endpoint values declared for a property in one step
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValues {
    /// Value at the start of the step and value at its end
    Numeric([f64; 2]),
    /// Class removed and class added when the step is reached
    Class { remove: String, add: String },
}
