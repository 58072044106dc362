//! Built-in scenes: the 3D isosurface wave, the 3D time cube and the
//! six-dimensional wave with a shared time axis.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::axis::{AxisId, Range};
use crate::config::{Topology, WaveConfig};
use crate::error::{Result, WaveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scene {
    /// sin(k·r − ωt) over an X/Y/Z cube, animated in t.
    Isosurface,
    /// Three time-like axes meshed as space; one of them is animated.
    TimeCube,
    /// X/Y plane cut from X, Y, Z, T_x, T_y, T_z and T; several axes swept in turn.
    Hyperspace,
}

/// Figure metadata for the renderer. Field values always span [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub title: String,
    pub axis_titles: Vec<String>,
    pub slider_prefix: String,
    pub value_range: [f64; 2],
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::Isosurface, Scene::TimeCube, Scene::Hyperspace];

    pub fn name(self) -> &'static str {
        match self {
            Scene::Isosurface => "isosurface",
            Scene::TimeCube   => "time-cube",
            Scene::Hyperspace => "hyperspace",
        }
    }

    pub fn config(self) -> WaveConfig {
        let cube = Range::new(-10.0, 10.0);
        match self {
            Scene::Isosurface => WaveConfig {
                topology: Topology::Independent { axes: vec![AxisId::X, AxisId::Y, AxisId::Z] },
                spatial_range: cube,
                spatial_samples: 20,
                time_range: Range::new(0.0, 10.0),
                time_samples: 50,
                wavenumbers: [1.0; 3],
                angular_frequencies: [1.0; 3],
                // sin(k·r − ωt) with ω = 1.
                coupling_constant: -1.0,
                animated_axis_selection: vec![AxisId::T],
                fixed_values: BTreeMap::new(),
            },
            Scene::TimeCube => WaveConfig {
                topology: Topology::Independent { axes: vec![AxisId::Tx, AxisId::Ty, AxisId::Tz] },
                spatial_range: cube,
                spatial_samples: 30,
                time_range: cube,
                time_samples: 30,
                wavenumbers: [1.0; 3],
                angular_frequencies: [1.0; 3],
                coupling_constant: 0.0,
                animated_axis_selection: vec![AxisId::Tx],
                fixed_values: BTreeMap::new(),
            },
            Scene::Hyperspace => WaveConfig {
                topology: Topology::Sliced {
                    axes: vec![AxisId::X, AxisId::Y, AxisId::Z, AxisId::Tx, AxisId::Ty, AxisId::Tz, AxisId::T],
                    plotted: vec![AxisId::X, AxisId::Y],
                },
                spatial_range: cube,
                spatial_samples: 10,
                time_range: cube,
                time_samples: 20,
                wavenumbers: [1.0; 3],
                angular_frequencies: [1.0; 3],
                coupling_constant: 1.0,
                animated_axis_selection: vec![AxisId::T, AxisId::Z, AxisId::Tx],
                fixed_values: BTreeMap::from([
                    (AxisId::Z, 0.0),
                    (AxisId::Tx, 0.0),
                    (AxisId::Ty, 0.0),
                    (AxisId::Tz, 0.0),
                ]),
            },
        }
    }

    /// Titles for a run of this scene with `config`.
    pub fn layout(self, config: &WaveConfig) -> SceneLayout {
        let animated: Vec<String> = config.animated_axis_selection.iter().map(|a| a.to_string()).collect();
        let (title, axis_titles, slider_prefix) = match self {
            Scene::Isosurface => (
                "3D Wavefront Propagation in Space and Time".to_string(),
                vec!["X", "Y", "Z"],
                "Time: ",
            ),
            Scene::TimeCube => (
                format!("Wave in 3D Time (Animated along {})", animated.join(", ")),
                vec!["T_x (Time Dimension 1)", "T_y (Time Dimension 2)", "T_z (Time Dimension 3)"],
                "Time: ",
            ),
            Scene::Hyperspace => (
                "6D Wave Propagation with Oscillation Between Time and Space".to_string(),
                vec!["X (Spatial Dimension 1)", "Y (Spatial Dimension 2)", "Wave Amplitude"],
                "Value: ",
            ),
        };
        SceneLayout {
            title,
            axis_titles: axis_titles.into_iter().map(String::from).collect(),
            slider_prefix: slider_prefix.to_string(),
            value_range: [-1.0, 1.0],
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scene {
    type Err = WaveError;

    fn from_str(s: &str) -> Result<Self> {
        Scene::ALL
            .into_iter()
            .find(|scene| scene.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                WaveError::InvalidConfig(format!(
                    "unknown scene '{s}', expected one of: isosurface, time-cube, hyperspace"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        for scene in Scene::ALL {
            scene.config().validate().unwrap_or_else(|e| panic!("{scene}: {e}"));
        }
    }

    #[test]
    fn isosurface_frames_cover_time_range() {
        let seq = Scene::Isosurface.config().run().unwrap();
        assert_eq!(seq.len(), 50);
        assert_eq!(seq.frames()[0].label, "0.00");
        assert_eq!(seq.frames()[49].label, "10.00");
        assert_eq!(seq.frames()[1].label, "0.20");
        assert!(seq.frames().iter().all(|f| f.values.len() == 8000));
    }

    #[test]
    fn time_cube_sweeps_its_own_axis() {
        let seq = Scene::TimeCube.config().run().unwrap();
        assert_eq!(seq.len(), 30);
        assert_eq!(seq.frames()[0].label, "-10.00");
        assert_eq!(seq.frames()[29].label, "10.00");
        assert!(seq.frames().iter().all(|f| f.animated_axis == AxisId::Tx));
    }

    #[test]
    fn opening_trace_matches_first_frame() {
        let cube = Scene::TimeCube.config().run().unwrap();
        assert_eq!(cube.initial, cube.frames()[0].values);

        let iso = Scene::Isosurface.config().run().unwrap();
        assert_eq!(iso.initial, iso.frames()[0].values);

        // The hyperspace scene opens on its fixed values (T = 0), not frame 0 (T = -10).
        let hyper = Scene::Hyperspace.config().run().unwrap();
        assert_ne!(hyper.initial, hyper.frames()[0].values);
        assert_eq!(hyper.initial.len(), 100);
    }

    #[test]
    fn hyperspace_concatenates_three_sweeps() {
        let seq = Scene::Hyperspace.config().run().unwrap();
        assert_eq!(seq.len(), 20 + 10 + 10);
        assert_eq!(seq.coordinates.shape, vec![10, 10]);

        let axes: Vec<AxisId> = seq.frames().iter().map(|f| f.animated_axis).collect();
        assert!(axes[..20].iter().all(|&a| a == AxisId::T));
        assert!(axes[20..30].iter().all(|&a| a == AxisId::Z));
        assert!(axes[30..].iter().all(|&a| a == AxisId::Tx));

        // Frame names stay unique even where labels repeat across sweeps.
        let mut names: Vec<&str> = seq.slider_steps().iter().map(|s| s.frame.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 40);
        assert_eq!(seq.frames()[0].annotation, "Fixed: Z=0.00, T_x=0.00, T_y=0.00, T_z=0.00 | Animated: T = -10.00");
    }

    #[test]
    fn scene_names_parse() {
        for scene in Scene::ALL {
            assert_eq!(scene.name().parse::<Scene>().unwrap(), scene);
        }
        assert!("cube".parse::<Scene>().is_err());
    }

    #[test]
    fn time_cube_title_names_animated_axis() {
        let config = Scene::TimeCube.config().with_animated_axes(vec![AxisId::Tz]);
        assert_eq!(Scene::TimeCube.layout(&config).title, "Wave in 3D Time (Animated along T_z)");
    }
}
