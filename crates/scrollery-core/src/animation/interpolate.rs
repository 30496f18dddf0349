//! Pure functions mapping a scroll offset onto property values.

use crate::steps::StepDefinition;

/// How far `y` has progressed through `step`.
///
/// Not clamped: offsets outside the step extrapolate linearly.
#[inline]
pub fn progress(y: f64, step: &StepDefinition) -> f64 {
    (y - step.start) / step.duration
}

/// Value between the two endpoints at `percentage` of the way.
///
/// The distance travelled is the difference of the endpoint magnitudes,
/// applied downwards when the start value is the larger one.
#[inline]
pub fn interpolate(values: [f64; 2], percentage: f64) -> f64 {
    let [from, to] = values;
    let difference = (from.abs() - to.abs()).abs();
    let change = percentage * difference;
    if from > to {
        from - change
    } else {
        from + change
    }
}

/// Format a computed value for a style declaration
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}
