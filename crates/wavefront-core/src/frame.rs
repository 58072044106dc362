//! Frame descriptors and the ordered animation sequence handed to a renderer.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::axis::AxisId;
use crate::grid::Coordinates;

/// Slider/annotation label for a parameter value.
pub fn format_label(v: f64) -> String {
    format!("{v:.2}")
}

/// One animation step. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameDescriptor {
    /// Unique within its sequence; slider steps refer to frames by this name.
    pub name: String,
    /// Plotted grid coordinates, shared by every frame of a sequence.
    pub coordinates: Arc<Coordinates>,
    /// Field value per grid cell, aligned with `coordinates`.
    pub values: Vec<f64>,
    pub animated_axis: AxisId,
    pub parameter: f64,
    /// Scalar assigned to every non-plotted or swept axis for this frame.
    pub assignments: BTreeMap<AxisId, f64>,
    pub label: String,
    pub annotation: String,
}

impl FrameDescriptor {
    pub fn min_value(&self) -> f64 {
        self.values.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliderStep {
    pub label: String,
    pub frame: String,
}

/// Frames in sweep order plus the slider steps bound to them, step `i` to
/// frame `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationSequence {
    pub coordinates: Arc<Coordinates>,
    /// Field evaluated with fixed values only; the figure's first trace.
    pub initial: Vec<f64>,
    frames: Vec<FrameDescriptor>,
    steps: Vec<SliderStep>,
}

impl AnimationSequence {
    pub(crate) fn new(coordinates: Arc<Coordinates>, initial: Vec<f64>, frames: Vec<FrameDescriptor>) -> Self {
        let steps = frames
            .iter()
            .map(|f| SliderStep { label: f.label.clone(), frame: f.name.clone() })
            .collect();
        Self { coordinates, initial, frames, steps }
    }

    pub fn frames(&self) -> &[FrameDescriptor] {
        &self.frames
    }

    pub fn slider_steps(&self) -> &[SliderStep] {
        &self.steps
    }

    pub fn labels(&self) -> Vec<&str> {
        self.frames.iter().map(|f| f.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn into_frames(self) -> Vec<FrameDescriptor> {
        self.frames
    }
}
