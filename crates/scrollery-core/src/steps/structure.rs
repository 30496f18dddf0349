use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Error, Result};

/// One named step of the scroll animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub name: String,
    /// Scroll offset at which this step begins
    pub start: f64,
    /// Length of the step in scroll units
    pub duration: f64,
}

impl StepDefinition {
    pub fn new(name: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            name: name.into(),
            start,
            duration,
        }
    }

    /// Scroll offset at which this step ends
    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Whether `y` lies strictly inside this step's range.
    ///
    /// Both bounds are exclusive: an offset landing exactly on a boundary
    /// belongs to no step.
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y > self.start && y < self.end()
    }
}

/// Sum of the durations of `steps`
pub(crate) fn total_duration(steps: &[StepDefinition]) -> f64 {
    steps.iter().map(|s| s.duration).sum()
}

/// Read-only queries over the configured steps
#[derive(Debug, Clone)]
pub struct StepStructure {
    steps: Vec<StepDefinition>,
    total_length: f64,
}

impl StepStructure {
    /// Build the model. At least one step is required.
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::Config("at least one step must be configured".to_string()));
        }

        if let Some(step) = steps
            .iter()
            .find(|s| !s.duration.is_finite() || s.duration <= 0.0)
        {
            return Err(Error::Config(format!(
                "step '{}' must have a positive duration, got {}",
                step.name, step.duration
            )));
        }

        for pair in steps.windows(2) {
            if pair[0].end() != pair[1].start {
                warn!(
                    "Step '{}' ends at {} but step '{}' starts at {}",
                    pair[0].name,
                    pair[0].end(),
                    pair[1].name,
                    pair[1].start
                );
            }
        }

        let total_length = total_duration(&steps);
        Ok(Self {
            steps,
            total_length,
        })
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn last_step_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn step_at(&self, index: usize) -> Result<&StepDefinition> {
        self.steps.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.steps.len(),
        })
    }

    /// Sum of all step durations
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Map a scroll offset onto a step index.
    ///
    /// Offsets at or before zero map to the first step and offsets at or past
    /// the total length map to the last one. Otherwise the step strictly
    /// containing `y` wins; when `y` sits exactly on a boundary no step
    /// matches and `current` is returned unchanged.
    pub fn step_for(&self, y: f64, current: usize) -> usize {
        if y <= 0.0 {
            0
        } else if y >= self.total_length {
            self.last_step_index()
        } else {
            self.steps
                .iter()
                .rposition(|step| step.contains(y))
                .unwrap_or(current)
        }
    }
}
