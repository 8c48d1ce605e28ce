//! Loaded scenarios: a world, controller settings and the objects to place.

use crate::loader::{build_constraints, build_strategy};
use crate::schema::PlacementData;
use tileplace_core::{TileMap, WorldPosition};
use tileplace_placement::{Placeable, PlaceableObject, PlacementController, PlacementError};

/// A tile world, controller settings and the objects to place in it.
#[derive(Debug)]
pub struct Scenario {
    world: TileMap,
    placement: PlacementData,
    objects: Vec<PlaceableObject>,
}

impl Scenario {
    pub fn new(world: TileMap, placement: PlacementData, objects: Vec<PlaceableObject>) -> Self {
        Self {
            world,
            placement,
            objects,
        }
    }

    pub fn world(&self) -> &TileMap {
        &self.world
    }

    pub fn placement(&self) -> &PlacementData {
        &self.placement
    }

    pub fn objects(&self) -> &[PlaceableObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [PlaceableObject] {
        &mut self.objects
    }

    pub fn object(&self, id: &str) -> Option<&PlaceableObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn object_mut(&mut self, id: &str) -> Option<&mut PlaceableObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// A fresh controller over a copy of the world, configured with the
    /// scenario's strategy and default constraints.
    pub fn build_controller(&self) -> PlacementController {
        PlacementController::for_world(self.world.clone())
            .with_boxed_strategy(build_strategy(self.placement.strategy))
            .with_default_constraints(build_constraints(&self.placement.constraints))
    }

    /// Place every object through `controller`, highest priority first.
    /// Results are in file order.
    pub fn place_all(
        &mut self,
        controller: &mut PlacementController,
    ) -> Vec<Result<WorldPosition, PlacementError>> {
        let mut placeables: Vec<&mut dyn Placeable> = self
            .objects
            .iter_mut()
            .map(|o| o as &mut dyn Placeable)
            .collect();
        controller.place_all(&mut placeables)
    }
}
