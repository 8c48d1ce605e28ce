//! Cell-bucketed spatial index over string-identified objects.
//!
//! Maintains a bidirectional mapping:
//! - `records`: object -> anchor position and footprint
//! - `cells`: cell -> ids of every object whose footprint covers it
//!
//! An object's covered cells are always recomputed from its record, so a
//! position change is simply remove + insert.

use crate::geometry::{CellSize, Footprint, GridPosition, GridRect, WorldPosition};
use crate::id::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Positional record of a tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedObject {
    pub position: WorldPosition,
    pub footprint: Footprint,
}

/// Inconsistency between object records and cell occupancy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexInvariantError {
    #[error("object '{id}' is missing from covered cell ({}, {})", cell.x, cell.y)]
    MissingFromCell { id: ObjectId, cell: GridPosition },
    #[error("object '{id}' is listed in uncovered cell ({}, {})", cell.x, cell.y)]
    StaleCell { id: ObjectId, cell: GridPosition },
    #[error("cell ({}, {}) lists unknown object '{id}'", cell.x, cell.y)]
    UnknownOccupant { id: ObjectId, cell: GridPosition },
    #[error("cell ({}, {}) has an empty occupancy set", cell.x, cell.y)]
    EmptyCell { cell: GridPosition },
}

// ---------------------------------------------------------------------------
// SpatialIndex
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SpatialIndex {
    cell_size: CellSize,
    records: BTreeMap<ObjectId, TrackedObject>,
    cells: BTreeMap<GridPosition, BTreeSet<ObjectId>>,
}

impl SpatialIndex {
    pub fn new(cell_size: CellSize) -> Self {
        Self {
            cell_size,
            records: BTreeMap::new(),
            cells: BTreeMap::new(),
        }
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    // -- Mutation --

    /// Track `id` at `position`. An id that is already tracked is moved: its
    /// old cells are released first.
    pub fn insert(
        &mut self,
        id: impl Into<ObjectId>,
        position: WorldPosition,
        footprint: Footprint,
    ) {
        let id = id.into();
        self.remove(id.as_str());

        let footprint = footprint.normalized();
        for cell in self.cell_size.cell_range(position, footprint).cells() {
            self.cells.entry(cell).or_default().insert(id.clone());
        }
        self.records.insert(
            id,
            TrackedObject {
                position,
                footprint,
            },
        );
    }

    /// Stop tracking `id`. Returns its last record, or `None` if the id was
    /// not tracked.
    pub fn remove(&mut self, id: &str) -> Option<TrackedObject> {
        let record = self.records.remove(id)?;
        let range = self.cell_size.cell_range(record.position, record.footprint);
        for cell in range.cells() {
            let Some(occupants) = self.cells.get_mut(&cell) else {
                debug_assert!(false, "object '{id}' missing from cell {cell:?}");
                continue;
            };
            let removed = occupants.remove(id);
            debug_assert!(removed, "object '{id}' missing from cell {cell:?}");
            if occupants.is_empty() {
                self.cells.remove(&cell);
            }
        }
        Some(record)
    }

    /// Forget every object and every cell.
    pub fn clear(&mut self) {
        self.records.clear();
        self.cells.clear();
    }

    // -- Queries --

    /// Ids of every object covering any cell of the given area.
    pub fn query(&self, position: WorldPosition, footprint: Footprint) -> BTreeSet<ObjectId> {
        self.query_cells(self.cell_size.cell_range(position, footprint))
    }

    /// Ids of every object covering the cell that contains `position`.
    pub fn query_point(&self, position: WorldPosition) -> BTreeSet<ObjectId> {
        self.occupants(self.cell_size.world_to_grid(position))
            .cloned()
            .collect()
    }

    /// Ids of every object covering any cell of `rect`.
    pub fn query_cells(&self, rect: GridRect) -> BTreeSet<ObjectId> {
        // The fields are public, so corners may arrive swapped.
        let rect = GridRect::new(rect.min, rect.max);
        let mut result = BTreeSet::new();
        // Walk whichever side is smaller: the rectangle or the occupied cells.
        if rect.area() <= self.cells.len() as u64 {
            for cell in rect.cells() {
                if let Some(occupants) = self.cells.get(&cell) {
                    result.extend(occupants.iter().cloned());
                }
            }
        } else {
            let in_rect = self
                .cells
                .range(rect.min..=rect.max)
                .filter(|(cell, _)| rect.contains(**cell));
            for (_, occupants) in in_rect {
                result.extend(occupants.iter().cloned());
            }
        }
        result
    }

    /// Ids covering a single cell, in sorted order.
    pub fn occupants(&self, cell: GridPosition) -> impl Iterator<Item = &ObjectId> + '_ {
        self.cells.get(&cell).into_iter().flatten()
    }

    /// Ids covering the cell that contains `position`, without collecting.
    pub fn occupants_at(&self, position: WorldPosition) -> impl Iterator<Item = &ObjectId> + '_ {
        self.occupants(self.cell_size.world_to_grid(position))
    }

    pub fn is_cell_occupied(&self, cell: GridPosition) -> bool {
        self.cells.contains_key(&cell)
    }

    pub fn get(&self, id: &str) -> Option<&TrackedObject> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Cells covered by a tracked object.
    pub fn cells_of(&self, id: &str) -> Option<GridRect> {
        self.records
            .get(id)
            .map(|r| self.cell_size.cell_range(r.position, r.footprint))
    }

    /// Tracked objects in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &TrackedObject)> + '_ {
        self.records.iter()
    }

    // -- Stats --

    pub fn object_count(&self) -> usize {
        self.records.len()
    }

    pub fn occupied_cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // -- Consistency --

    /// Check that the cell map is exactly the projection of the records.
    pub fn validate(&self) -> Result<(), IndexInvariantError> {
        for (id, record) in &self.records {
            for cell in self.cell_size.cell_range(record.position, record.footprint).cells() {
                if !self.cells.get(&cell).is_some_and(|s| s.contains(id)) {
                    return Err(IndexInvariantError::MissingFromCell {
                        id: id.clone(),
                        cell,
                    });
                }
            }
        }
        for (&cell, occupants) in &self.cells {
            if occupants.is_empty() {
                return Err(IndexInvariantError::EmptyCell { cell });
            }
            for id in occupants {
                let Some(record) = self.records.get(id) else {
                    return Err(IndexInvariantError::UnknownOccupant {
                        id: id.clone(),
                        cell,
                    });
                };
                if !self
                    .cell_size
                    .cell_range(record.position, record.footprint)
                    .contains(cell)
                {
                    return Err(IndexInvariantError::StaleCell {
                        id: id.clone(),
                        cell,
                    });
                }
            }
        }
        Ok(())
    }
}
