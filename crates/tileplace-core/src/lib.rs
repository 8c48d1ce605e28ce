//! Tileplace Core -- grid coordinates and a spatial index for tile worlds.
//!
//! This crate tracks discrete, possibly multi-cell objects on a uniform grid
//! and answers "what occupies this area" queries.
//!
//! # Units
//!
//! Positions and footprints are in **world units** (pixels). A footprint of
//! `w x h` anchored at `(x, y)` covers the cells from
//! `world_to_grid(x, y)` to `world_to_grid(x + w - 1, y + h - 1)` inclusive,
//! so the default `1 x 1` footprint covers only the anchor's cell and
//! [`geometry::Footprint::cells`] builds footprints that span whole cells.
//!
//! # Key Types
//!
//! - [`world::TileWorld`] -- Bounds and walkability contract of the host world.
//! - [`world::TileMap`] -- Dense in-memory [`world::TileWorld`].
//! - [`grid::GridSystem`] -- World/grid conversion and cell validation.
//! - [`index::SpatialIndex`] -- Object records plus per-cell occupancy sets.

pub mod geometry;
pub mod grid;
pub mod id;
pub mod index;
pub mod world;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use geometry::{CellSize, Direction, Footprint, GridPosition, GridRect, WorldPosition};
pub use grid::GridSystem;
pub use id::ObjectId;
pub use index::{IndexInvariantError, SpatialIndex, TrackedObject};
pub use world::{TileMap, TileWorld};
