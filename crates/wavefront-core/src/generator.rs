//! Field & Frame Generator: parameter sweeps → ordered frame descriptors.
//!
//! Any axis given a scalar for a frame (the swept value, or an entry in the
//! fixed map) replaces that axis's grid coordinate outright. A swept plotted
//! axis therefore collapses to a single plane per frame; swept and grid
//! values are never summed.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use crate::animation::AnimationSpec;
use crate::axis::AxisId;
use crate::error::Result;
use crate::field::{Point, WaveParams};
use crate::frame::{format_label, AnimationSequence, FrameDescriptor};
use crate::grid::{Grid, SampleSpace};

/// Evaluate every sweep of `spec` over `space` and collect the frames in
/// sweep order, then value order.
///
/// Axis validation happens before any evaluation, so an unknown axis yields
/// an error and no frames.
pub fn generate<S: SampleSpace + ?Sized>(
    space: &S,
    params: &WaveParams,
    spec: &AnimationSpec,
) -> Result<AnimationSequence> {
    spec.validate_against(space)?;

    let grid = space.plotted();
    let coordinates = Arc::new(grid.coordinates());

    let initial = evaluate_grid(grid, params, &initial_assignments(grid, spec));

    let mut frames = Vec::with_capacity(spec.frame_count());
    for sweep in &spec.sweeps {
        for &v in &sweep.values {
            let mut assignments = held_assignments(grid, spec);
            assignments.insert(sweep.axis, v);

            let index = frames.len();
            let label = format_label(v);
            let frame = FrameDescriptor {
                name: format!("frame_{index}"),
                coordinates: Arc::clone(&coordinates),
                values: evaluate_grid(grid, params, &assignments),
                animated_axis: sweep.axis,
                parameter: v,
                annotation: annotation(spec, sweep.axis, &label),
                assignments,
                label,
            };
            debug!("frame {index}: {} = {}", sweep.axis, frame.label);
            frames.push(frame);
        }
    }

    debug!("generated {} frames over {} grid cells", frames.len(), grid.len());
    Ok(AnimationSequence::new(coordinates, initial, frames))
}

/// Field values over `grid` with `scalars` overriding the listed axes.
/// Plotted axes without a scalar take their grid coordinate; everything
/// else not listed is 0.0.
pub fn evaluate_grid(grid: &Grid, params: &WaveParams, scalars: &BTreeMap<AxisId, f64>) -> Vec<f64> {
    let mut base: Point = [0.0; AxisId::COUNT];
    for (&axis, &v) in scalars {
        base[axis.index()] = v;
    }

    let free: Vec<(usize, usize)> = grid
        .axes()
        .iter()
        .enumerate()
        .filter(|(_, a)| !scalars.contains_key(&a.id))
        .map(|(pos, a)| (pos, a.id.index()))
        .collect();

    (0..grid.len())
        .map(|cell| {
            let mut p = base;
            for &(pos, slot) in &free {
                p[slot] = grid.coordinate_at(pos, cell);
            }
            params.evaluate(&p)
        })
        .collect()
}

/// Scalars for every axis that is not plotted, plus any plotted axis pinned
/// in the fixed map.
fn held_assignments(grid: &Grid, spec: &AnimationSpec) -> BTreeMap<AxisId, f64> {
    AxisId::ALL
        .iter()
        .filter(|&&a| !grid.contains(a) || spec.fixed.contains_key(&a))
        .map(|&a| (a, spec.held_value(a)))
        .collect()
}

/// Held values, except that a first sweep over an unpinned plotted axis starts
/// at its first value, so the opening trace matches frame 0.
fn initial_assignments(grid: &Grid, spec: &AnimationSpec) -> BTreeMap<AxisId, f64> {
    let mut assignments = held_assignments(grid, spec);
    if let Some(first) = spec.sweeps.first() {
        if grid.contains(first.axis) && !spec.fixed.contains_key(&first.axis) {
            if let Some(&v) = first.values.first() {
                assignments.insert(first.axis, v);
            }
        }
    }
    assignments
}

fn annotation(spec: &AnimationSpec, animated: AxisId, label: &str) -> String {
    let fixed: Vec<String> = spec
        .fixed
        .iter()
        .filter(|&(&a, _)| a != animated)
        .map(|(a, &v)| format!("{a}={}", format_label(v)))
        .collect();
    if fixed.is_empty() {
        let name = match animated {
            AxisId::T => "Time",
            other => other.name(),
        };
        format!("{name} = {label}")
    } else {
        format!("Fixed: {} | Animated: {animated} = {label}", fixed.join(", "))
    }
}
