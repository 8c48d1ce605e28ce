//! Read-only view handed to constraints and strategies.

use tileplace_core::{GridSystem, SpatialIndex};

/// Read access to the coordinate system and the spatial index.
///
/// Constraints and strategies only ever see this view, never the owner of
/// the grid and index, so they cannot mutate placement state.
pub trait PlacementContext {
    fn grid_system(&self) -> &GridSystem;

    fn spatial_index(&self) -> &SpatialIndex;
}

/// A [`PlacementContext`] over borrowed parts, for evaluating constraints
/// without a controller.
#[derive(Debug, Clone, Copy)]
pub struct ContextView<'a> {
    pub grid: &'a GridSystem,
    pub index: &'a SpatialIndex,
}

impl<'a> ContextView<'a> {
    pub fn new(grid: &'a GridSystem, index: &'a SpatialIndex) -> Self {
        Self { grid, index }
    }
}

impl PlacementContext for ContextView<'_> {
    fn grid_system(&self) -> &GridSystem {
        self.grid
    }

    fn spatial_index(&self) -> &SpatialIndex {
        self.index
    }
}
