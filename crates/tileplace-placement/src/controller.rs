//! The placement controller: owner of the grid system and spatial index.
//!
//! All index mutation goes through the controller. Constraints and
//! strategies receive it only as a read-only [`PlacementContext`].

use crate::constraint::{Candidate, ConstraintSet};
use crate::context::PlacementContext;
use crate::error::PlacementError;
use crate::placeable::Placeable;
use crate::strategy::{PlacementStrategy, RowMajorScan};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tileplace_core::{Footprint, GridSystem, ObjectId, SpatialIndex, TileWorld, WorldPosition};
use tracing::{debug, warn};

/// What the controller remembers about a placed object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub position: WorldPosition,
    pub footprint: Footprint,
    pub priority: i32,
}

#[derive(Debug)]
pub struct PlacementController {
    grid: GridSystem,
    index: SpatialIndex,
    strategy: Box<dyn PlacementStrategy>,
    default_constraints: ConstraintSet,
    registry: BTreeMap<ObjectId, Registration>,
}

impl PlacementController {
    /// A controller using [`RowMajorScan`] and [`ConstraintSet::standard`].
    pub fn new(grid: GridSystem) -> Self {
        let index = SpatialIndex::new(grid.cell_size());
        Self {
            grid,
            index,
            strategy: Box::new(RowMajorScan),
            default_constraints: ConstraintSet::standard(),
            registry: BTreeMap::new(),
        }
    }

    pub fn for_world(world: impl TileWorld + 'static) -> Self {
        Self::new(GridSystem::new(world))
    }

    pub fn with_strategy(mut self, strategy: impl PlacementStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn with_boxed_strategy(mut self, strategy: Box<dyn PlacementStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Constraints used for objects that bring none of their own.
    pub fn with_default_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.default_constraints = constraints;
        self
    }

    pub fn default_constraints(&self) -> &ConstraintSet {
        &self.default_constraints
    }

    pub fn strategy(&self) -> &dyn PlacementStrategy {
        self.strategy.as_ref()
    }

    // -- Placement --

    /// Find a position for `placeable` with the configured strategy and
    /// occupy it.
    ///
    /// Placing an object that is already placed searches again and moves it.
    pub fn place(&mut self, placeable: &mut dyn Placeable) -> Result<WorldPosition, PlacementError> {
        let constraints = placeable
            .constraints()
            .unwrap_or(&self.default_constraints);
        let found = self
            .strategy
            .find_position(&*self, &*placeable, constraints);

        let Some(position) = found else {
            warn!(id = %placeable.id(), "no valid placement position");
            return Err(PlacementError::NoValidPosition {
                id: placeable.id().clone(),
            });
        };
        self.occupy(placeable, position);
        debug!(id = %placeable.id(), x = position.x, y = position.y, "placed");
        Ok(position)
    }

    /// Place several objects, highest priority first. Ties keep their input
    /// order. Results are returned in input order.
    pub fn place_all(
        &mut self,
        placeables: &mut [&mut dyn Placeable],
    ) -> Vec<Result<WorldPosition, PlacementError>> {
        let mut order: Vec<usize> = (0..placeables.len()).collect();
        order.sort_by_key(|&i| Reverse(placeables[i].priority()));

        let mut results = vec![None; placeables.len()];
        for i in order {
            results[i] = Some(self.place(&mut *placeables[i]));
        }
        results.into_iter().flatten().collect()
    }

    /// Move `placeable` to `position` if its constraints accept it there.
    ///
    /// The object itself is never counted as an obstacle. On failure nothing
    /// changes.
    pub fn move_to(
        &mut self,
        placeable: &mut dyn Placeable,
        position: WorldPosition,
    ) -> Result<(), PlacementError> {
        let failed = self.rejections(&*placeable, position);
        if !failed.is_empty() {
            debug!(id = %placeable.id(), x = position.x, y = position.y, ?failed, "move rejected");
            return Err(PlacementError::ConstraintsUnsatisfied {
                id: placeable.id().clone(),
                position,
                failed,
            });
        }
        self.occupy(placeable, position);
        debug!(id = %placeable.id(), x = position.x, y = position.y, "moved");
        Ok(())
    }

    /// Whether `placeable` could be moved to `position`.
    pub fn can_place_at(&self, placeable: &dyn Placeable, position: WorldPosition) -> bool {
        self.rejections(placeable, position).is_empty()
    }

    fn rejections(&self, placeable: &dyn Placeable, position: WorldPosition) -> Vec<String> {
        let constraints = placeable
            .constraints()
            .unwrap_or(&self.default_constraints);
        let candidate = Candidate::at_position(&self.grid, position, placeable.footprint())
            .for_subject(placeable.id());
        constraints.unsatisfied(&candidate, self)
    }

    fn occupy(&mut self, placeable: &mut dyn Placeable, position: WorldPosition) {
        let footprint = placeable.footprint();
        let id = placeable.id().clone();
        self.index.insert(id.clone(), position, footprint);
        self.registry.insert(
            id,
            Registration {
                position,
                footprint: footprint.normalized(),
                priority: placeable.priority(),
            },
        );
        placeable.set_position(position);
    }

    // -- Removal --

    /// Release the cells of `placeable` and forget it. Returns `false` if it
    /// was not placed.
    pub fn remove(&mut self, placeable: &dyn Placeable) -> bool {
        self.remove_id(placeable.id().as_str())
    }

    pub fn remove_id(&mut self, id: &str) -> bool {
        let tracked = self.index.remove(id).is_some();
        let registered = self.registry.remove(id).is_some();
        debug_assert_eq!(tracked, registered, "registry and index disagree on '{id}'");
        if registered {
            debug!(id, "removed");
        }
        registered
    }

    /// Forget every placed object.
    pub fn clear(&mut self) {
        self.index.clear();
        self.registry.clear();
    }

    // -- Registry --

    pub fn is_registered(&self, id: &str) -> bool {
        self.registry.contains_key(id)
    }

    pub fn registration(&self, id: &str) -> Option<&Registration> {
        self.registry.get(id)
    }

    pub fn registered_count(&self) -> usize {
        self.registry.len()
    }

    /// Placed objects in id order.
    pub fn registrations(&self) -> impl Iterator<Item = (&ObjectId, &Registration)> + '_ {
        self.registry.iter()
    }
}

impl PlacementContext for PlacementController {
    fn grid_system(&self) -> &GridSystem {
        &self.grid
    }

    fn spatial_index(&self) -> &SpatialIndex {
        &self.index
    }
}
