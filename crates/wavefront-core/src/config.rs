use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationSpec, Sweep};
use crate::axis::{Axis, AxisId, Range};
use crate::error::{Result, WaveError};
use crate::field::WaveParams;
use crate::frame::AnimationSequence;
use crate::generator::generate;
use crate::grid::{Grid, SampleGrid};

/// How the sampling grid is laid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Topology {
    /// Full outer product over `axes`, every cell plotted.
    Independent { axes: Vec<AxisId> },
    /// Parameter space over `axes`, plotted on the `plotted` plane only.
    Sliced { axes: Vec<AxisId>, plotted: Vec<AxisId> },
}

/// Complete run configuration.
///
/// The shared time axis `T` samples `time_range` with `time_samples`; every
/// other axis samples `spatial_range` with `spatial_samples`. Each animated
/// axis is swept over its own sample sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub topology: Topology,
    pub spatial_range: Range,
    pub spatial_samples: usize,
    #[serde(default = "default_time_range")]
    pub time_range: Range,
    pub time_samples: usize,
    /// kx, ky, kz.
    #[serde(default = "unit_triple")]
    pub wavenumbers: [f64; 3],
    /// ωx, ωy, ωz.
    #[serde(default = "unit_triple")]
    pub angular_frequencies: [f64; 3],
    /// γ, the multiplier on `T`.
    #[serde(default = "default_coupling")]
    pub coupling_constant: f64,
    /// Axes swept one after another, in this order.
    pub animated_axis_selection: Vec<AxisId>,
    /// Values held by axes while they are not being swept. Missing axes hold 0.
    #[serde(default)]
    pub fixed_values: BTreeMap<AxisId, f64>,
}

fn default_time_range() -> Range {
    Range::new(0.0, 10.0)
}

fn unit_triple() -> [f64; 3] {
    [1.0; 3]
}

fn default_coupling() -> f64 {
    1.0
}

impl WaveConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: WaveConfig = serde_json::from_str(json)
            .map_err(|e| WaveError::InvalidConfig(format!("failed to parse config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| WaveError::InvalidConfig(e.to_string()))
    }

    /// Check ranges, constants and axis selections without generating frames.
    pub fn validate(&self) -> Result<()> {
        self.spatial_range.linspace(self.spatial_samples)?;
        self.time_range.linspace(self.time_samples)?;

        let constants = self
            .wavenumbers
            .iter()
            .chain(self.angular_frequencies.iter())
            .chain(std::iter::once(&self.coupling_constant));
        if constants.clone().any(|c| !c.is_finite()) {
            return Err(WaveError::InvalidConfig(format!(
                "wave constants must be finite (k={:?}, omega={:?}, gamma={})",
                self.wavenumbers, self.angular_frequencies, self.coupling_constant
            )));
        }
        if let Some((axis, v)) = self.fixed_values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(WaveError::InvalidConfig(format!("fixed value for {axis} must be finite, got {v}")));
        }
        if self.animated_axis_selection.is_empty() {
            return Err(WaveError::InvalidConfig("at least one animated axis must be selected".to_string()));
        }
        if let Topology::Sliced { plotted, .. } = &self.topology {
            if plotted.is_empty() {
                return Err(WaveError::InvalidConfig("a sliced grid needs at least one plotted axis".to_string()));
            }
        }

        let grid = self.build_grid()?;
        self.animation_spec()?.validate_against(&grid)
    }

    /// Sample sequence of `axis` under this config's range rules.
    pub fn axis_samples(&self, axis: AxisId) -> Result<Vec<f64>> {
        match axis {
            AxisId::T => self.time_range.linspace(self.time_samples),
            _ => self.spatial_range.linspace(self.spatial_samples),
        }
    }

    fn axis(&self, id: AxisId) -> Result<Axis> {
        match id {
            AxisId::T => Axis::new(id, self.time_range, self.time_samples),
            _ => Axis::new(id, self.spatial_range, self.spatial_samples),
        }
    }

    pub fn build_grid(&self) -> Result<SampleGrid> {
        match &self.topology {
            Topology::Independent { axes } => {
                let axes = axes.iter().map(|&id| self.axis(id)).collect::<Result<Vec<_>>>()?;
                Ok(SampleGrid::Independent(Grid::new(axes)?))
            }
            Topology::Sliced { axes, plotted } => {
                let axes = axes.iter().map(|&id| self.axis(id)).collect::<Result<Vec<_>>>()?;
                Ok(SampleGrid::Sliced(Grid::new(axes)?.slice(plotted)?))
            }
        }
    }

    pub fn wave_params(&self) -> WaveParams {
        WaveParams {
            wavenumbers: self.wavenumbers,
            angular_frequencies: self.angular_frequencies,
            coupling: self.coupling_constant,
        }
    }

    pub fn animation_spec(&self) -> Result<AnimationSpec> {
        let sweeps = self
            .animated_axis_selection
            .iter()
            .map(|&axis| Ok(Sweep::new(axis, self.axis_samples(axis)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(AnimationSpec { sweeps, fixed: self.fixed_values.clone() })
    }

    /// Replace the sweep selection, keeping everything else.
    pub fn with_animated_axes(mut self, axes: Vec<AxisId>) -> Self {
        self.animated_axis_selection = axes;
        self
    }

    /// Validate, build the grid and spec, then generate every frame.
    pub fn run(&self) -> Result<AnimationSequence> {
        self.validate()?;
        let grid = self.build_grid()?;
        generate(&grid, &self.wave_params(), &self.animation_spec()?)
    }

    /// Human-readable summary, one line per entry.
    pub fn summary(&self) -> Vec<String> {
        let names = |axes: &[AxisId]| axes.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ");
        let grid = match &self.topology {
            Topology::Independent { axes } => format!("Grid: independent over [{}]", names(axes)),
            Topology::Sliced { axes, plotted } => {
                format!("Grid: sliced over [{}], plotted [{}]", names(axes), names(plotted))
            }
        };
        let animated: Vec<String> = self.animated_axis_selection.iter().map(|a| a.to_string()).collect();
        vec![
            grid,
            format!(
                "Spatial: [{}, {}] x {} samples; time: [{}, {}] x {} samples",
                self.spatial_range.min,
                self.spatial_range.max,
                self.spatial_samples,
                self.time_range.min,
                self.time_range.max,
                self.time_samples
            ),
            format!(
                "Wave: k={:?}, omega={:?}, gamma={}",
                self.wavenumbers, self.angular_frequencies, self.coupling_constant
            ),
            format!("Animated: {}", animated.join(" then ")),
        ]
    }
}
