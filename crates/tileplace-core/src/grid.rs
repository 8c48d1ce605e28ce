//! Conversion between world and grid coordinates, bound to a tile world.

use crate::geometry::{CellSize, Direction, Footprint, GridPosition, GridRect, WorldPosition};
use crate::world::TileWorld;
use std::fmt;

/// The coordinate system of one tile world.
///
/// All queries are pure functions of the world supplied at construction.
pub struct GridSystem {
    world: Box<dyn TileWorld>,
    cell_size: CellSize,
}

impl fmt::Debug for GridSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridSystem")
            .field("cell_size", &self.cell_size)
            .field("columns", &self.world.columns())
            .field("rows", &self.world.rows())
            .finish()
    }
}

impl GridSystem {
    pub fn new(world: impl TileWorld + 'static) -> Self {
        let cell_size = world.cell_size();
        Self {
            world: Box::new(world),
            cell_size: CellSize::new(cell_size.width, cell_size.height),
        }
    }

    pub fn world(&self) -> &dyn TileWorld {
        self.world.as_ref()
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    pub fn world_to_grid(&self, pos: WorldPosition) -> GridPosition {
        self.cell_size.world_to_grid(pos)
    }

    pub fn grid_to_world(&self, cell: GridPosition) -> WorldPosition {
        self.cell_size.grid_to_world(cell)
    }

    /// Inclusive cell range covered by `footprint` anchored at `origin`.
    pub fn cell_range(&self, origin: WorldPosition, footprint: Footprint) -> GridRect {
        self.cell_size.cell_range(origin, footprint)
    }

    /// The whole grid, or `None` for a world with no tiles.
    pub fn bounds(&self) -> Option<GridRect> {
        let (columns, rows) = (self.world.columns(), self.world.rows());
        if columns == 0 || rows == 0 {
            return None;
        }
        let max_x = i32::try_from(columns - 1).unwrap_or(i32::MAX);
        let max_y = i32::try_from(rows - 1).unwrap_or(i32::MAX);
        Some(GridRect::new(
            GridPosition::new(0, 0),
            GridPosition::new(max_x, max_y),
        ))
    }

    pub fn in_bounds(&self, cell: GridPosition) -> bool {
        self.bounds().is_some_and(|b| b.contains(cell))
    }

    /// In bounds and walkable.
    pub fn is_valid_position(&self, cell: GridPosition) -> bool {
        self.in_bounds(cell) && self.world.is_walkable(cell)
    }

    /// The four axis-adjacent cells (north, east, south, west). Not filtered
    /// against the bounds.
    pub fn neighbors(&self, cell: GridPosition) -> [GridPosition; 4] {
        Direction::all().map(|dir| cell.step(dir))
    }
}
