//! Serde data file structs for scenario definitions.
//!
//! These structs define the on-disk format for the tile world, placement
//! settings and object lists. They are deserialized from RON, JSON, or TOML
//! data files and then resolved into core and placement types by the loader.

use serde::Deserialize;
use tileplace_core::GridPosition;

// ===========================================================================
// World
// ===========================================================================

/// The tile world description in `world.*`.
///
/// Either `layout` (ASCII rows, `#` blocked) or both `columns` and `rows`
/// must be given. When both are present the dimensions must match the
/// layout.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldData {
    pub cell_size: CellSizeData,
    #[serde(default)]
    pub columns: Option<u32>,
    #[serde(default)]
    pub rows: Option<u32>,
    #[serde(default)]
    pub layout: Vec<String>,
    /// Extra blocked cells, applied after the layout.
    #[serde(default)]
    pub blocked: Vec<GridPosition>,
}

/// Cell size: a single number for square cells or explicit dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CellSizeData {
    Square(i32),
    Rect { width: i32, height: i32 },
}

// ===========================================================================
// Placement settings
// ===========================================================================

/// Controller settings in `placement.*`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlacementData {
    #[serde(default)]
    pub strategy: StrategyData,
    /// Constraints applied to objects without their own list.
    #[serde(default = "standard_constraints")]
    pub constraints: Vec<ConstraintData>,
}

impl Default for PlacementData {
    fn default() -> Self {
        Self {
            strategy: StrategyData::default(),
            constraints: standard_constraints(),
        }
    }
}

pub(crate) fn standard_constraints() -> Vec<ConstraintData> {
    vec![ConstraintData::Walkable, ConstraintData::NotOccupied]
}

/// Search order used when the preferred position is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyData {
    #[default]
    RowMajor,
    Spiral {
        #[serde(default)]
        max_radius: Option<u32>,
    },
}

/// A named placement constraint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintData {
    Walkable,
    NotOccupied,
    FootprintClear,
    WithinDistance {
        center: GridPosition,
        max_distance: u32,
    },
}

// ===========================================================================
// Objects
// ===========================================================================

/// An object definition in `objects.*`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObjectData {
    pub id: String,
    #[serde(default)]
    pub footprint: Option<FootprintData>,
    #[serde(default)]
    pub preferred: Option<PositionData>,
    #[serde(default)]
    pub priority: i32,
    /// Replaces the scenario's default constraints for this object.
    #[serde(default)]
    pub constraints: Option<Vec<ConstraintData>>,
}

/// Object footprint, in whole cells or in world units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintData {
    Cells { columns: i32, rows: i32 },
    World { width: i32, height: i32 },
}

/// Preferred anchor, as a cell (resolved to its origin) or in world units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionData {
    Cell { x: i32, y: i32 },
    World { x: i32, y: i32 },
}
