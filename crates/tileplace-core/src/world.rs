//! The read-only tile/world contract the grid system is bound to, plus a
//! dense in-memory implementation.

use crate::geometry::{CellSize, GridPosition};
use std::sync::Arc;

/// Bounds and passability information supplied by the host world model.
///
/// The grid spans columns `0..columns()` and rows `0..rows()`.
pub trait TileWorld {
    /// Size of one tile in world units.
    fn cell_size(&self) -> CellSize;

    fn columns(&self) -> u32;

    fn rows(&self) -> u32;

    /// Whether an object may stand on `cell`. Cells outside the bounds are
    /// expected to report `false`.
    fn is_walkable(&self, cell: GridPosition) -> bool;
}

impl<T: TileWorld + ?Sized> TileWorld for &T {
    fn cell_size(&self) -> CellSize {
        (**self).cell_size()
    }
    fn columns(&self) -> u32 {
        (**self).columns()
    }
    fn rows(&self) -> u32 {
        (**self).rows()
    }
    fn is_walkable(&self, cell: GridPosition) -> bool {
        (**self).is_walkable(cell)
    }
}

impl<T: TileWorld + ?Sized> TileWorld for Box<T> {
    fn cell_size(&self) -> CellSize {
        (**self).cell_size()
    }
    fn columns(&self) -> u32 {
        (**self).columns()
    }
    fn rows(&self) -> u32 {
        (**self).rows()
    }
    fn is_walkable(&self, cell: GridPosition) -> bool {
        (**self).is_walkable(cell)
    }
}

impl<T: TileWorld + ?Sized> TileWorld for Arc<T> {
    fn cell_size(&self) -> CellSize {
        (**self).cell_size()
    }
    fn columns(&self) -> u32 {
        (**self).columns()
    }
    fn rows(&self) -> u32 {
        (**self).rows()
    }
    fn is_walkable(&self, cell: GridPosition) -> bool {
        (**self).is_walkable(cell)
    }
}

// ---------------------------------------------------------------------------
// TileMap
// ---------------------------------------------------------------------------

/// A rectangular map with one walkability flag per tile, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    cell_size: CellSize,
    columns: u32,
    rows: u32,
    walkable: Vec<bool>,
}

impl TileMap {
    /// A fully walkable map.
    pub fn new(cell_size: CellSize, columns: u32, rows: u32) -> Self {
        Self {
            cell_size,
            columns,
            rows,
            walkable: vec![true; columns as usize * rows as usize],
        }
    }

    /// Build a map from ASCII rows: `#` is blocked, any other character is
    /// walkable. Short rows are padded with blocked tiles.
    pub fn from_rows<S: AsRef<str>>(cell_size: CellSize, rows: &[S]) -> Self {
        let width = rows
            .iter()
            .map(|r| r.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        let columns = u32::try_from(width).unwrap_or(u32::MAX);
        let height = u32::try_from(rows.len()).unwrap_or(u32::MAX);
        let mut map = Self::new(cell_size, columns, height);
        for (y, row) in rows.iter().enumerate().take(height as usize) {
            let mut chars = row.as_ref().chars();
            for x in 0..columns as usize {
                let open = chars.next().is_some_and(|c| c != '#');
                map.walkable[y * columns as usize + x] = open;
            }
        }
        map
    }

    fn offset(&self, cell: GridPosition) -> Option<usize> {
        let x = u32::try_from(cell.x).ok()?;
        let y = u32::try_from(cell.y).ok()?;
        if x >= self.columns || y >= self.rows {
            return None;
        }
        Some(y as usize * self.columns as usize + x as usize)
    }

    /// Mark a tile walkable or blocked. Returns `false` if the cell is out of
    /// bounds.
    pub fn set_walkable(&mut self, cell: GridPosition, walkable: bool) -> bool {
        match self.offset(cell) {
            Some(i) => {
                self.walkable[i] = walkable;
                true
            }
            None => false,
        }
    }

    /// Number of walkable tiles.
    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|w| **w).count()
    }
}

impl TileWorld for TileMap {
    fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    fn columns(&self) -> u32 {
        self.columns
    }

    fn rows(&self) -> u32 {
        self.rows
    }

    fn is_walkable(&self, cell: GridPosition) -> bool {
        self.offset(cell).is_some_and(|i| self.walkable[i])
    }
}
