//! Tileplace Placement -- constraint-driven search for object positions.
//!
//! A [`PlacementController`] owns the grid system and spatial index of one
//! tile world. Asking it to place a [`Placeable`] runs the configured
//! [`PlacementStrategy`], which proposes candidate cells in a deterministic
//! order and filters them through a [`ConstraintSet`]. The first accepted
//! position is occupied in the index and written back to the placeable.
//!
//! ```rust,ignore
//! let mut controller = PlacementController::for_world(map)
//!     .with_strategy(SpiralSearch::unbounded());
//! let mut tree = PlaceableObject::new("tree_01").with_preferred_position(pos);
//! match controller.place(&mut tree) {
//!     Ok(at) => { /* tree now occupies `at` */ }
//!     Err(PlacementError::NoValidPosition { .. }) => { /* try again later */ }
//!     Err(other) => return Err(other),
//! }
//! ```
//!
//! # Key Types
//!
//! - [`PlacementContext`] -- Read-only view of grid + index for constraints.
//! - [`ConstraintSet`] -- Conjunction of [`PlacementConstraint`]s:
//!   [`Walkable`], [`NotOccupied`], [`FootprintClear`], [`WithinDistance`].
//! - [`RowMajorScan`] / [`SpiralSearch`] -- Built-in strategies.

pub mod constraint;
pub mod context;
pub mod controller;
pub mod error;
pub mod placeable;
pub mod strategy;

pub use constraint::{
    Candidate, ConstraintSet, FootprintClear, NotOccupied, PlacementConstraint, Walkable,
    WithinDistance,
};
pub use context::{ContextView, PlacementContext};
pub use controller::{PlacementController, Registration};
pub use error::PlacementError;
pub use placeable::{Placeable, PlaceableObject};
pub use strategy::{PlacementStrategy, RowMajorScan, SpiralSearch, preferred_if_valid};
