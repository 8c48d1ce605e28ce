//! Shared test helpers for unit tests, integration tests, and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::geometry::{CellSize, Footprint, GridPosition, WorldPosition};
use crate::grid::GridSystem;
use crate::index::SpatialIndex;
use crate::world::TileMap;

/// Cell size used throughout the tests.
pub const TILE: i32 = 32;

pub fn tile() -> CellSize {
    CellSize::square(TILE)
}

pub fn at(x: i32, y: i32) -> WorldPosition {
    WorldPosition::new(x, y)
}

pub fn cell(x: i32, y: i32) -> GridPosition {
    GridPosition::new(x, y)
}

/// World origin of the given cell.
pub fn cell_origin(x: i32, y: i32) -> WorldPosition {
    tile().grid_to_world(cell(x, y))
}

/// A footprint of `columns x rows` test tiles.
pub fn tiles(columns: i32, rows: i32) -> Footprint {
    Footprint::cells(columns, rows, tile())
}

/// A fully walkable map.
pub fn open_map(columns: u32, rows: u32) -> TileMap {
    TileMap::new(tile(), columns, rows)
}

/// A map parsed from ASCII rows (`#` blocked).
pub fn map_from_rows(rows: &[&str]) -> TileMap {
    TileMap::from_rows(tile(), rows)
}

pub fn open_grid(columns: u32, rows: u32) -> GridSystem {
    GridSystem::new(open_map(columns, rows))
}

pub fn empty_index() -> SpatialIndex {
    SpatialIndex::new(tile())
}

/// An index holding `count` single-tile objects laid out row by row on a
/// grid `columns` wide, named `obj0`, `obj1`, ...
pub fn filled_index(count: usize, columns: i32) -> SpatialIndex {
    let mut index = empty_index();
    for i in 0..count {
        let n = i as i32;
        index.insert(
            format!("obj{i}"),
            cell_origin(n % columns, n / columns),
            tiles(1, 1),
        );
    }
    index
}
