//! Logical dimensions of the wave domain and 1D axis sampling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaveError};

/// One of the seven dimensions the wave field is defined over.
///
/// `X`, `Y`, `Z` are spatial; `Tx`, `Ty`, `Tz` are time-like axes treated as
/// space; `T` is the shared time dimension tied to the coupling constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AxisId {
    X,
    Y,
    Z,
    Tx,
    Ty,
    Tz,
    T,
}

impl AxisId {
    pub const COUNT: usize = 7;

    pub const ALL: [AxisId; AxisId::COUNT] = [
        AxisId::X,
        AxisId::Y,
        AxisId::Z,
        AxisId::Tx,
        AxisId::Ty,
        AxisId::Tz,
        AxisId::T,
    ];

    /// Position of this axis in a [`Point`](crate::field::Point).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            AxisId::X  => "X",
            AxisId::Y  => "Y",
            AxisId::Z  => "Z",
            AxisId::Tx => "T_x",
            AxisId::Ty => "T_y",
            AxisId::Tz => "T_z",
            AxisId::T  => "T",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AxisId {
    type Err = WaveError;

    /// Case-insensitive; the underscore in `T_x` style names is optional.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|&c| c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "x"  => Ok(AxisId::X),
            "y"  => Ok(AxisId::Y),
            "z"  => Ok(AxisId::Z),
            "tx" => Ok(AxisId::Tx),
            "ty" => Ok(AxisId::Ty),
            "tz" => Ok(AxisId::Tz),
            "t"  => Ok(AxisId::T),
            _ => Err(WaveError::UnknownAxis(s.to_string())),
        }
    }
}

impl TryFrom<String> for AxisId {
    type Error = WaveError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<AxisId> for String {
    fn from(id: AxisId) -> Self {
        id.name().to_string()
    }
}

/// Closed interval `[min, max]` an axis is sampled over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `linspace(min, max, samples)`: both ends included, evenly spaced.
    pub fn linspace(&self, samples: usize) -> Result<Vec<f64>> {
        // `!(max > min)` also rejects NaN bounds.
        if !(self.max > self.min) || !self.min.is_finite() || !self.max.is_finite() || samples < 2 {
            return Err(WaveError::InvalidRange { min: self.min, max: self.max, samples });
        }
        let step = (self.max - self.min) / (samples - 1) as f64;
        let mut values: Vec<f64> = (0..samples).map(|i| self.min + step * i as f64).collect();
        // Pin the last sample so rounding in `step` never leaves it short of `max`.
        values[samples - 1] = self.max;
        Ok(values)
    }
}

/// One sampled dimension of a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub id: AxisId,
    pub range: Range,
    values: Vec<f64>,
}

impl Axis {
    pub fn new(id: AxisId, range: Range, samples: usize) -> Result<Self> {
        let values = range.linspace(samples)?;
        Ok(Self { id, range, values })
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn samples(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn parse_accepts_canonical_and_loose_names() {
        assert_eq!("X".parse::<AxisId>().unwrap(), AxisId::X);
        assert_eq!("T_x".parse::<AxisId>().unwrap(), AxisId::Tx);
        assert_eq!("tz".parse::<AxisId>().unwrap(), AxisId::Tz);
        assert_eq!(" t ".parse::<AxisId>().unwrap(), AxisId::T);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "W".parse::<AxisId>().unwrap_err();
        assert_eq!(err, WaveError::UnknownAxis("W".to_string()));
        assert!("T_w".parse::<AxisId>().is_err());
    }

    #[test]
    fn name_roundtrips_through_parse() {
        for id in AxisId::ALL {
            assert_eq!(id.name().parse::<AxisId>().unwrap(), id);
        }
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&AxisId::Ty).unwrap();
        assert_eq!(json, "\"T_y\"");
        let back: AxisId = serde_json::from_str("\"ty\"").unwrap();
        assert_eq!(back, AxisId::Ty);
        assert!(serde_json::from_str::<AxisId>("\"Q\"").is_err());
    }

    #[test]
    fn linspace_includes_both_ends() {
        let v = Range::new(-10.0, 10.0).linspace(5).unwrap();
        assert_eq!(v.len(), 5);
        assert_abs_diff_eq!(v[0], -10.0);
        assert_abs_diff_eq!(v[1], -5.0);
        assert_abs_diff_eq!(v[2], 0.0);
        assert_eq!(v[4], 10.0);
    }

    #[test]
    fn linspace_is_evenly_spaced() {
        let v = Range::new(0.0, 10.0).linspace(50).unwrap();
        let step = 10.0 / 49.0;
        for w in v.windows(2) {
            assert_abs_diff_eq!(w[1] - w[0], step, epsilon = 1e-12);
        }
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        assert!(matches!(Range::new(1.0, 1.0).linspace(5), Err(WaveError::InvalidRange { .. })));
        assert!(matches!(Range::new(2.0, 1.0).linspace(5), Err(WaveError::InvalidRange { .. })));
        assert!(matches!(Range::new(0.0, 1.0).linspace(1), Err(WaveError::InvalidRange { .. })));
        assert!(Range::new(f64::NAN, 1.0).linspace(5).is_err());
        assert!(Range::new(0.0, f64::INFINITY).linspace(5).is_err());
    }
}
