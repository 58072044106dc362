//! Animated sinusoidal wave fields over multi-dimensional grids.
//!
//! Pipeline: [`config::WaveConfig`] → [`grid`] (sampling grid) →
//! [`generator::generate`] (one [`frame::FrameDescriptor`] per swept value).
//! Rendering is left to the caller.

pub mod animation;
pub mod axis;
pub mod config;
pub mod error;
pub mod field;
pub mod frame;
pub mod generator;
pub mod grid;
pub mod scene;

pub use animation::{AnimationSpec, Sweep};
pub use axis::{Axis, AxisId, Range};
pub use config::{Topology, WaveConfig};
pub use error::{Result, WaveError};
pub use field::WaveParams;
pub use frame::{AnimationSequence, FrameDescriptor, SliderStep};
pub use generator::generate;
pub use grid::{Coordinates, Grid, SampleGrid, SampleSpace, SlicedGrid};
pub use scene::{Scene, SceneLayout};
