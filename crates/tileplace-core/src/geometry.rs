//! Value types shared by the grid system and the spatial index.
//!
//! World positions and footprints are expressed in world units (pixels).
//! Grid positions address whole cells. [`CellSize`] converts between the two.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// A cell on the 2D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step in `dir`.
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance to another position.
    pub fn manhattan_distance(&self, other: &GridPosition) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// Chebyshev (chessboard) distance to another position.
    pub fn chebyshev_distance(&self, other: &GridPosition) -> u32 {
        (self.x - other.x)
            .unsigned_abs()
            .max((self.y - other.y).unsigned_abs())
    }
}

/// A point in world space, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: i32,
    pub y: i32,
}

impl WorldPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Sizes
// ---------------------------------------------------------------------------

/// Width and height of one grid cell in world units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSize {
    pub width: i32,
    pub height: i32,
}

impl CellSize {
    /// Both dimensions are clamped to at least one world unit.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// A square cell.
    pub fn square(size: i32) -> Self {
        Self::new(size, size)
    }

    /// Floor-divide a world position by the cell size.
    pub fn world_to_grid(&self, pos: WorldPosition) -> GridPosition {
        GridPosition::new(
            pos.x.div_euclid(self.width.max(1)),
            pos.y.div_euclid(self.height.max(1)),
        )
    }

    /// World position of the cell's origin (top-left corner).
    pub fn grid_to_world(&self, cell: GridPosition) -> WorldPosition {
        WorldPosition::new(
            cell.x.saturating_mul(self.width),
            cell.y.saturating_mul(self.height),
        )
    }

    /// Inclusive range of cells covered by a footprint anchored at `origin`.
    ///
    /// The last covered world unit on each axis is `origin + size - 1`, so a
    /// footprint of one world unit covers only the anchor's cell.
    pub fn cell_range(&self, origin: WorldPosition, footprint: Footprint) -> GridRect {
        let fp = footprint.normalized();
        let end = WorldPosition::new(
            origin.x.saturating_add(fp.width - 1),
            origin.y.saturating_add(fp.height - 1),
        );
        GridRect::new(self.world_to_grid(origin), self.world_to_grid(end))
    }
}

/// The area an object covers, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub width: i32,
    pub height: i32,
}

impl Default for Footprint {
    fn default() -> Self {
        Self::unit()
    }
}

impl Footprint {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// A single world unit; covers exactly the anchor's cell.
    pub fn unit() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }

    /// A footprint spanning `columns x rows` whole cells.
    pub fn cells(columns: i32, rows: i32, cell: CellSize) -> Self {
        Self {
            width: columns.max(1).saturating_mul(cell.width),
            height: rows.max(1).saturating_mul(cell.height),
        }
    }

    /// Clamp degenerate (zero or negative) dimensions to one world unit.
    pub fn normalized(&self) -> Self {
        Self {
            width: self.width.max(1),
            height: self.height.max(1),
        }
    }
}

// ---------------------------------------------------------------------------
// Rectangles
// ---------------------------------------------------------------------------

/// An axis-aligned, inclusive rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRect {
    pub min: GridPosition,
    pub max: GridPosition,
}

impl GridRect {
    /// Corners may be given in any order.
    pub fn new(a: GridPosition, b: GridPosition) -> Self {
        Self {
            min: GridPosition::new(a.x.min(b.x), a.y.min(b.y)),
            max: GridPosition::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> u32 {
        self.max.x.abs_diff(self.min.x) + 1
    }

    pub fn height(&self) -> u32 {
        self.max.y.abs_diff(self.min.y) + 1
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    pub fn contains(&self, cell: GridPosition) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x && cell.y >= self.min.y && cell.y <= self.max.y
    }

    /// Iterate over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = GridPosition> + use<> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| GridPosition::new(x, y)))
    }
}

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// Cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four cardinal directions, clockwise from north.
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
    }

    /// Offset for this direction. North is towards negative y.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}
