//! Grid Builder: outer-product sampling grids and 2-axis slices.
//!
//! Cells are laid out row-major with the first axis varying slowest, so a
//! flat index `i` maps to the multi-index `(i0, i1, …)` exactly as
//! `meshgrid(…, indexing='ij')` would flatten it.

use serde::Serialize;

use crate::axis::{Axis, AxisId};
use crate::error::{Result, WaveError};

/// Expanded coordinate arrays of a grid, one per axis, all of length
/// `shape.iter().product()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinates {
    pub axes: Vec<AxisId>,
    pub shape: Vec<usize>,
    pub arrays: Vec<Vec<f64>>,
}

impl Coordinates {
    /// Expanded array for `axis`, if the grid has it.
    pub fn get(&self, axis: AxisId) -> Option<&[f64]> {
        self.axes.iter().position(|&a| a == axis).map(|p| self.arrays[p].as_slice())
    }

    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Independent grid: each axis spans its own evenly spaced sequence and the
/// grid holds every combination of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    axes: Vec<Axis>,
    strides: Vec<usize>,
    len: usize,
}

impl Grid {
    pub fn new(axes: Vec<Axis>) -> Result<Self> {
        if axes.is_empty() {
            return Err(WaveError::InvalidConfig("a grid needs at least one axis".to_string()));
        }
        for (i, a) in axes.iter().enumerate() {
            if axes[..i].iter().any(|b| b.id == a.id) {
                return Err(WaveError::DuplicateAxis(a.id));
            }
        }
        let overflow = || {
            let shape: Vec<usize> = axes.iter().map(Axis::samples).collect();
            WaveError::InvalidConfig(format!("grid shape {shape:?} has too many cells to index"))
        };
        let mut strides = vec![1usize; axes.len()];
        for p in (0..axes.len() - 1).rev() {
            strides[p] = strides[p + 1].checked_mul(axes[p + 1].samples()).ok_or_else(overflow)?;
        }
        let len = strides[0].checked_mul(axes[0].samples()).ok_or_else(overflow)?;
        Ok(Self { axes, strides, len })
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn axis_ids(&self) -> Vec<AxisId> {
        self.axes.iter().map(|a| a.id).collect()
    }

    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(Axis::samples).collect()
    }

    /// Total number of grid cells.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn position(&self, id: AxisId) -> Option<usize> {
        self.axes.iter().position(|a| a.id == id)
    }

    pub fn contains(&self, id: AxisId) -> bool {
        self.position(id).is_some()
    }

    /// The 1D sample sequence of axis `id`.
    pub fn axis_values(&self, id: AxisId) -> Option<&[f64]> {
        self.position(id).map(|p| self.axes[p].values())
    }

    /// Coordinate of the axis at position `axis_pos` for the cell at `flat`.
    #[inline]
    pub fn coordinate_at(&self, axis_pos: usize, flat: usize) -> f64 {
        let axis = &self.axes[axis_pos];
        axis.values()[(flat / self.strides[axis_pos]) % axis.samples()]
    }

    /// Full outer-product expansion: one array per axis, indexable in lock-step.
    pub fn coordinates(&self) -> Coordinates {
        let n = self.len();
        let arrays = (0..self.axes.len())
            .map(|p| (0..n).map(|i| self.coordinate_at(p, i)).collect())
            .collect();
        Coordinates { axes: self.axis_ids(), shape: self.shape(), arrays }
    }

    /// Keep `plotted` axes (in grid order) and index every other axis at 0.
    ///
    /// The returned plane never materializes the full grid; the full grid is
    /// retained as the parameter space.
    pub fn slice(&self, plotted: &[AxisId]) -> Result<SlicedGrid> {
        if let Some(missing) = plotted.iter().find(|&&id| !self.contains(id)) {
            return Err(WaveError::UnknownAxis(missing.to_string()));
        }
        let axes = self
            .axes
            .iter()
            .filter(|a| plotted.contains(&a.id))
            .cloned()
            .collect();
        Ok(SlicedGrid { plane: Grid::new(axes)?, parameter_space: self.clone() })
    }
}

/// A plotted plane cut from a larger parameter space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlicedGrid {
    plane: Grid,
    parameter_space: Grid,
}

impl SlicedGrid {
    pub fn plane(&self) -> &Grid {
        &self.plane
    }

    pub fn parameter_space(&self) -> &Grid {
        &self.parameter_space
    }
}

/// Anything the field can be sampled over.
pub trait SampleSpace {
    /// Grid the field is evaluated on and handed to the renderer.
    fn plotted(&self) -> &Grid;

    /// Whether `axis` may be swept or held fixed over this space.
    fn recognizes(&self, axis: AxisId) -> bool;
}

impl SampleSpace for Grid {
    fn plotted(&self) -> &Grid {
        self
    }

    /// An independent grid evaluates the full seven-axis formula, so any axis
    /// outside the grid is simply a scalar parameter.
    fn recognizes(&self, _axis: AxisId) -> bool {
        true
    }
}

impl SampleSpace for SlicedGrid {
    fn plotted(&self) -> &Grid {
        &self.plane
    }

    fn recognizes(&self, axis: AxisId) -> bool {
        self.parameter_space.contains(axis)
    }
}

/// Grid of either topology, as built from a config.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "topology", rename_all = "snake_case")]
pub enum SampleGrid {
    Independent(Grid),
    Sliced(SlicedGrid),
}

impl SampleSpace for SampleGrid {
    fn plotted(&self) -> &Grid {
        match self {
            SampleGrid::Independent(g) => g.plotted(),
            SampleGrid::Sliced(s) => s.plotted(),
        }
    }

    fn recognizes(&self, axis: AxisId) -> bool {
        match self {
            SampleGrid::Independent(g) => g.recognizes(axis),
            SampleGrid::Sliced(s) => s.recognizes(axis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Range;

    fn axis(id: AxisId, samples: usize) -> Axis {
        Axis::new(id, Range::new(-10.0, 10.0), samples).unwrap()
    }

    #[test]
    fn coordinate_count_is_product_of_samples() {
        let g = Grid::new(vec![axis(AxisId::X, 3), axis(AxisId::Y, 4), axis(AxisId::Z, 5)]).unwrap();
        assert_eq!(g.len(), 60);
        assert_eq!(g.shape(), vec![3, 4, 5]);
        let c = g.coordinates();
        assert_eq!(c.arrays.len(), 3);
        for a in &c.arrays {
            assert_eq!(a.len(), 60);
        }
    }

    #[test]
    fn expansion_is_full_outer_product_ij_order() {
        let g = Grid::new(vec![axis(AxisId::X, 3), axis(AxisId::Y, 2)]).unwrap();
        let c = g.coordinates();
        let xs = c.get(AxisId::X).unwrap();
        let ys = c.get(AxisId::Y).unwrap();
        let cells: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        assert_eq!(
            cells,
            vec![
                (-10.0, -10.0), (-10.0, 10.0),
                (0.0, -10.0), (0.0, 10.0),
                (10.0, -10.0), (10.0, 10.0),
            ]
        );
    }

    #[test]
    fn every_combination_appears_exactly_once() {
        let g = Grid::new(vec![axis(AxisId::X, 4), axis(AxisId::Y, 3), axis(AxisId::T, 2)]).unwrap();
        let c = g.coordinates();
        let mut seen: Vec<(u64, u64, u64)> = (0..g.len())
            .map(|i| (c.arrays[0][i].to_bits(), c.arrays[1][i].to_bits(), c.arrays[2][i].to_bits()))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn duplicate_axes_are_rejected() {
        let err = Grid::new(vec![axis(AxisId::X, 3), axis(AxisId::X, 3)]).unwrap_err();
        assert_eq!(err, WaveError::DuplicateAxis(AxisId::X));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let axes: Vec<Axis> = AxisId::ALL.iter().map(|&id| axis(id, 5000)).collect();
        let err = Grid::new(axes).unwrap_err();
        assert!(matches!(err, WaveError::InvalidConfig(ref msg) if msg.contains("too many cells")));

        // Large but indexable grids are still accepted.
        let g = Grid::new(vec![axis(AxisId::X, 5000), axis(AxisId::Y, 5000)]).unwrap();
        assert_eq!(g.len(), 25_000_000);
    }

    #[test]
    fn slice_matches_full_grid_at_index_zero() {
        let full = Grid::new(vec![
            axis(AxisId::X, 4),
            axis(AxisId::Y, 3),
            axis(AxisId::Z, 5),
            axis(AxisId::Tx, 2),
        ])
        .unwrap();
        let sliced = full.slice(&[AxisId::X, AxisId::Y]).unwrap();
        let plane = sliced.plane().coordinates();
        assert_eq!(plane.shape, vec![4, 3]);

        // In ij order the cells with Z = Tx = index 0 are every (5 * 2)-th cell.
        let stride = 5 * 2;
        let whole = full.coordinates();
        for i in 0..plane.len() {
            assert_eq!(plane.arrays[0][i], whole.arrays[0][i * stride]);
            assert_eq!(plane.arrays[1][i], whole.arrays[1][i * stride]);
        }
        assert_eq!(sliced.parameter_space().len(), 4 * 3 * 5 * 2);
        assert_eq!(sliced.parameter_space().axis_values(AxisId::Tx).unwrap(), &[-10.0, 10.0]);
        assert!(sliced.plane().axis_values(AxisId::Z).is_none());
    }

    #[test]
    fn slice_rejects_axis_outside_grid() {
        let full = Grid::new(vec![axis(AxisId::X, 2), axis(AxisId::Y, 2)]).unwrap();
        assert_eq!(
            full.slice(&[AxisId::X, AxisId::T]).unwrap_err(),
            WaveError::UnknownAxis("T".to_string())
        );
    }

    #[test]
    fn recognized_axes_depend_on_topology() {
        let full = Grid::new(vec![axis(AxisId::X, 2), axis(AxisId::Y, 2), axis(AxisId::T, 2)]).unwrap();
        assert!(full.recognizes(AxisId::Tz));
        let sliced = full.slice(&[AxisId::X, AxisId::Y]).unwrap();
        assert!(sliced.recognizes(AxisId::T));
        assert!(!sliced.recognizes(AxisId::Tz));
    }
}
