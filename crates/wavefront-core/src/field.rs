//! Closed-form sinusoidal wave field.
//!
//! field(p) = sin(kx·X + ky·Y + kz·Z + ωx·T_x + ωy·T_y + ωz·T_z + γ·T)

use serde::{Deserialize, Serialize};

use crate::axis::AxisId;

/// A full assignment of all seven axes, indexed by [`AxisId::index`].
pub type Point = [f64; AxisId::COUNT];

/// Wave constants, fixed for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Wave numbers along X, Y, Z.
    pub wavenumbers: [f64; 3],
    /// Angular frequencies along T_x, T_y, T_z.
    pub angular_frequencies: [f64; 3],
    /// Coupling to the shared time axis T.
    pub coupling: f64,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self { wavenumbers: [1.0; 3], angular_frequencies: [1.0; 3], coupling: 1.0 }
    }
}

impl WaveParams {
    /// Multiplier applied to `axis` inside the sine.
    #[inline]
    pub fn coefficient(&self, axis: AxisId) -> f64 {
        match axis {
            AxisId::X  => self.wavenumbers[0],
            AxisId::Y  => self.wavenumbers[1],
            AxisId::Z  => self.wavenumbers[2],
            AxisId::Tx => self.angular_frequencies[0],
            AxisId::Ty => self.angular_frequencies[1],
            AxisId::Tz => self.angular_frequencies[2],
            AxisId::T  => self.coupling,
        }
    }

    /// The linear combination inside the sine, summed in axis order.
    #[inline]
    pub fn phase(&self, p: &Point) -> f64 {
        AxisId::ALL
            .iter()
            .fold(0.0, |acc, &a| acc + self.coefficient(a) * p[a.index()])
    }

    #[inline]
    pub fn evaluate(&self, p: &Point) -> f64 {
        self.phase(p).sin()
    }
}
