//! Search procedures that turn a constraint set into a concrete position.
//!
//! Every strategy first tries the placeable's preferred position, then scans
//! a bounded, deterministic sequence of cells and returns the origin of the
//! first accepted one. Running out of candidates yields `None`.

use crate::constraint::{Candidate, ConstraintSet};
use crate::context::PlacementContext;
use crate::placeable::Placeable;
use std::fmt;
use tileplace_core::{GridPosition, GridRect, WorldPosition};
use tracing::trace;

pub trait PlacementStrategy: fmt::Debug {
    fn find_position(
        &self,
        ctx: &dyn PlacementContext,
        placeable: &dyn Placeable,
        constraints: &ConstraintSet,
    ) -> Option<WorldPosition>;
}

/// The preferred position, unchanged, if the constraints accept it.
pub fn preferred_if_valid(
    ctx: &dyn PlacementContext,
    placeable: &dyn Placeable,
    constraints: &ConstraintSet,
) -> Option<WorldPosition> {
    let preferred = placeable.preferred_position()?;
    let candidate = Candidate::at_position(ctx.grid_system(), preferred, placeable.footprint())
        .for_subject(placeable.id());
    if constraints.is_satisfied(&candidate, ctx) {
        Some(preferred)
    } else {
        trace!(id = %placeable.id(), x = preferred.x, y = preferred.y, "preferred position rejected");
        None
    }
}

fn accepts_cell(
    ctx: &dyn PlacementContext,
    placeable: &dyn Placeable,
    constraints: &ConstraintSet,
    cell: GridPosition,
) -> bool {
    let candidate = Candidate::at_cell(ctx.grid_system(), cell, placeable.footprint())
        .for_subject(placeable.id());
    constraints.is_satisfied(&candidate, ctx)
}

// ---------------------------------------------------------------------------
// RowMajorScan
// ---------------------------------------------------------------------------

/// Scans the whole grid from the origin: rows top to bottom, columns left to
/// right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMajorScan;

impl PlacementStrategy for RowMajorScan {
    fn find_position(
        &self,
        ctx: &dyn PlacementContext,
        placeable: &dyn Placeable,
        constraints: &ConstraintSet,
    ) -> Option<WorldPosition> {
        if let Some(position) = preferred_if_valid(ctx, placeable, constraints) {
            return Some(position);
        }
        let grid = ctx.grid_system();
        grid.bounds()?
            .cells()
            .find(|&cell| accepts_cell(ctx, placeable, constraints, cell))
            .map(|cell| grid.grid_to_world(cell))
    }
}

// ---------------------------------------------------------------------------
// SpiralSearch
// ---------------------------------------------------------------------------

/// Scans square rings of growing radius around the preferred cell (or the
/// grid origin), nearest ring first.
///
/// Each ring is walked clockwise starting at its top-left corner. Cells
/// outside the grid are skipped. A preferred cell outside the grid is
/// clamped to the nearest edge cell before searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpiralSearch {
    /// Largest ring radius to try. `None` searches until the whole grid has
    /// been covered.
    pub max_radius: Option<u32>,
}

impl SpiralSearch {
    pub fn new(max_radius: u32) -> Self {
        Self {
            max_radius: Some(max_radius),
        }
    }

    pub fn unbounded() -> Self {
        Self { max_radius: None }
    }
}

impl PlacementStrategy for SpiralSearch {
    fn find_position(
        &self,
        ctx: &dyn PlacementContext,
        placeable: &dyn Placeable,
        constraints: &ConstraintSet,
    ) -> Option<WorldPosition> {
        if let Some(position) = preferred_if_valid(ctx, placeable, constraints) {
            return Some(position);
        }
        let grid = ctx.grid_system();
        let bounds = grid.bounds()?;
        let center = placeable
            .preferred_position()
            .map(|p| clamp_to(grid.world_to_grid(p), bounds))
            .unwrap_or(bounds.min);

        // No ring past the farthest corner touches the grid.
        let farthest = [
            bounds.min,
            bounds.max,
            GridPosition::new(bounds.min.x, bounds.max.y),
            GridPosition::new(bounds.max.x, bounds.min.y),
        ]
        .iter()
        .map(|corner| center.chebyshev_distance(corner))
        .max()
        .unwrap_or(0);
        let reach = self.max_radius.map_or(farthest, |r| r.min(farthest));

        (0..=reach)
            .flat_map(|radius| ring(center, radius))
            .filter(|cell| bounds.contains(*cell))
            .find(|&cell| accepts_cell(ctx, placeable, constraints, cell))
            .map(|cell| grid.grid_to_world(cell))
    }
}

fn clamp_to(cell: GridPosition, bounds: GridRect) -> GridPosition {
    GridPosition::new(
        cell.x.clamp(bounds.min.x, bounds.max.x),
        cell.y.clamp(bounds.min.y, bounds.max.y),
    )
}

/// The `8 * radius` cells at Chebyshev distance `radius` from `center`,
/// clockwise from the top-left corner.
fn ring(center: GridPosition, radius: u32) -> Vec<GridPosition> {
    if radius == 0 {
        return vec![center];
    }
    let r = i32::try_from(radius).unwrap_or(i32::MAX);
    let (cx, cy) = (center.x, center.y);
    let mut cells = Vec::with_capacity(8 * radius as usize);
    for x in cx - r..=cx + r {
        cells.push(GridPosition::new(x, cy - r));
    }
    for y in cy - r + 1..=cy + r {
        cells.push(GridPosition::new(cx + r, y));
    }
    for x in (cx - r..cx + r).rev() {
        cells.push(GridPosition::new(x, cy + r));
    }
    for y in (cy - r + 1..cy + r).rev() {
        cells.push(GridPosition::new(cx - r, y));
    }
    cells
}
