use crate::animation::TransformProperty;

/// Vendor-prefixed and plain transform properties, written in this order
pub const TRANSFORM_PROPERTIES: [&str; 5] = [
    "-webkit-transform",
    "-moz-transform",
    "-o-transform",
    "-ms-transform",
    "transform",
];

/// Last written value of each transform function on one element.
///
/// `translateY` and `rotate` share the single `transform` style, so both are
/// kept here and rendered together whenever either one changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformState {
    translate_y: Option<f64>,
    rotate: Option<f64>,
}

impl TransformState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: TransformProperty, value: f64) {
        match property {
            TransformProperty::TranslateY => self.translate_y = Some(value),
            TransformProperty::Rotate => self.rotate = Some(value),
        }
    }

    pub fn get(&self, property: TransformProperty) -> Option<f64> {
        match property {
            TransformProperty::TranslateY => self.translate_y,
            TransformProperty::Rotate => self.rotate,
        }
    }

    /// CSS value for the `transform` property, e.g. `translateY(100px) rotate(10deg)`
    pub fn css_value(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(y) = self.translate_y {
            parts.push(TransformProperty::TranslateY.css_function(y));
        }
        if let Some(deg) = self.rotate {
            parts.push(TransformProperty::Rotate.css_function(deg));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_transform() {
        assert_eq!(TransformState::new().css_value(), "none");
    }

    #[test]
    fn test_components_do_not_clobber() {
        let mut transform = TransformState::new();
        transform.set(TransformProperty::Rotate, 10.0);
        assert_eq!(transform.css_value(), "rotate(10deg)");

        transform.set(TransformProperty::TranslateY, 100.0);
        assert_eq!(transform.css_value(), "translateY(100px) rotate(10deg)");

        transform.set(TransformProperty::Rotate, 0.0);
        assert_eq!(transform.css_value(), "translateY(100px) rotate(0deg)");
        assert_eq!(transform.get(TransformProperty::TranslateY), Some(100.0));
    }
}
