//! Which axes move between frames and which stay put.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::axis::AxisId;
use crate::grid::SampleSpace;
use crate::error::{Result, WaveError};

/// One ordered traversal of an axis, producing a contiguous block of frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub axis: AxisId,
    pub values: Vec<f64>,
}

impl Sweep {
    pub fn new(axis: AxisId, values: Vec<f64>) -> Self {
        Self { axis, values }
    }
}

/// Sweeps run in order; every axis not being swept is held at its entry in
/// `fixed`, or 0.0 when it has none.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationSpec {
    pub sweeps: Vec<Sweep>,
    #[serde(default)]
    pub fixed: BTreeMap<AxisId, f64>,
}

impl AnimationSpec {
    /// A single sweep with nothing held fixed.
    pub fn single(axis: AxisId, values: Vec<f64>) -> Self {
        Self { sweeps: vec![Sweep::new(axis, values)], fixed: BTreeMap::new() }
    }

    pub fn with_sweep(mut self, axis: AxisId, values: Vec<f64>) -> Self {
        self.sweeps.push(Sweep::new(axis, values));
        self
    }

    pub fn with_fixed(mut self, axis: AxisId, value: f64) -> Self {
        self.fixed.insert(axis, value);
        self
    }

    /// Value `axis` takes while it is not the swept axis.
    pub fn held_value(&self, axis: AxisId) -> f64 {
        self.fixed.get(&axis).copied().unwrap_or(0.0)
    }

    pub fn frame_count(&self) -> usize {
        self.sweeps.iter().map(|s| s.values.len()).sum()
    }

    /// Fail on the first swept or fixed axis `space` does not recognize.
    pub fn validate_against<S: SampleSpace + ?Sized>(&self, space: &S) -> Result<()> {
        let named = self.sweeps.iter().map(|s| s.axis).chain(self.fixed.keys().copied());
        for axis in named {
            if !space.recognizes(axis) {
                return Err(WaveError::UnknownAxis(axis.to_string()));
            }
        }
        Ok(())
    }
}
