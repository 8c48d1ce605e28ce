//! Objects the controller can place.

use crate::constraint::ConstraintSet;
use tileplace_core::{Footprint, ObjectId, WorldPosition};

/// Something with an identity and a position on the grid.
///
/// `id`, `position` and `set_position` are required. Every other method is
/// an optional capability with a neutral default: a unit footprint, no
/// preferred position, priority zero, and the controller's default
/// constraints.
pub trait Placeable {
    fn id(&self) -> &ObjectId;

    /// Current anchor, or `None` if not placed yet.
    fn position(&self) -> Option<WorldPosition>;

    fn set_position(&mut self, position: WorldPosition);

    fn is_placed(&self) -> bool {
        self.position().is_some()
    }

    /// Occupied area in world units.
    fn footprint(&self) -> Footprint {
        Footprint::unit()
    }

    /// Position to try before searching.
    fn preferred_position(&self) -> Option<WorldPosition> {
        None
    }

    /// Higher priorities are placed first by batch placement.
    fn priority(&self) -> i32 {
        0
    }

    /// Constraints replacing the controller's defaults for this object.
    fn constraints(&self) -> Option<&ConstraintSet> {
        None
    }
}

/// A plain [`Placeable`] value with every capability configurable.
#[derive(Debug)]
pub struct PlaceableObject {
    id: ObjectId,
    position: Option<WorldPosition>,
    footprint: Footprint,
    preferred: Option<WorldPosition>,
    priority: i32,
    constraints: Option<ConstraintSet>,
}

impl PlaceableObject {
    pub fn new(id: impl Into<ObjectId>) -> Self {
        Self {
            id: id.into(),
            position: None,
            footprint: Footprint::unit(),
            preferred: None,
            priority: 0,
            constraints: None,
        }
    }

    pub fn with_footprint(mut self, footprint: Footprint) -> Self {
        self.footprint = footprint;
        self
    }

    pub fn with_preferred_position(mut self, position: WorldPosition) -> Self {
        self.preferred = Some(position);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = Some(constraints);
        self
    }
}

impl Placeable for PlaceableObject {
    fn id(&self) -> &ObjectId {
        &self.id
    }

    fn position(&self) -> Option<WorldPosition> {
        self.position
    }

    fn set_position(&mut self, position: WorldPosition) {
        self.position = Some(position);
    }

    fn footprint(&self) -> Footprint {
        self.footprint
    }

    fn preferred_position(&self) -> Option<WorldPosition> {
        self.preferred
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn constraints(&self) -> Option<&ConstraintSet> {
        self.constraints.as_ref()
    }
}
