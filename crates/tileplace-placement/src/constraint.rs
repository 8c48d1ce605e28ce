//! Predicates restricting where an object may be placed.
//!
//! A candidate is accepted by a [`ConstraintSet`] only if every member
//! constraint accepts it. Evaluation is read-only: constraints see the grid
//! and spatial index through a [`PlacementContext`].

use crate::context::PlacementContext;
use std::fmt;
use tileplace_core::{Footprint, GridPosition, GridSystem, ObjectId, WorldPosition};

// ---------------------------------------------------------------------------
// Candidate
// ---------------------------------------------------------------------------

/// A position under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Cell containing the anchor.
    pub cell: GridPosition,
    /// World anchor the object would take.
    pub position: WorldPosition,
    pub footprint: Footprint,
    /// The object being placed. It never blocks its own placement.
    pub subject: Option<&'a ObjectId>,
}

impl<'a> Candidate<'a> {
    /// Candidate anchored at the origin of `cell`.
    pub fn at_cell(grid: &GridSystem, cell: GridPosition, footprint: Footprint) -> Self {
        Self {
            cell,
            position: grid.grid_to_world(cell),
            footprint,
            subject: None,
        }
    }

    /// Candidate anchored at an arbitrary world position.
    pub fn at_position(grid: &GridSystem, position: WorldPosition, footprint: Footprint) -> Self {
        Self {
            cell: grid.world_to_grid(position),
            position,
            footprint,
            subject: None,
        }
    }

    pub fn for_subject(mut self, subject: &'a ObjectId) -> Self {
        self.subject = Some(subject);
        self
    }

    fn ignores(&self, exclude: &[ObjectId], occupant: &ObjectId) -> bool {
        self.subject == Some(occupant) || exclude.contains(occupant)
    }
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

pub trait PlacementConstraint: fmt::Debug {
    fn is_satisfied(&self, candidate: &Candidate<'_>, ctx: &dyn PlacementContext) -> bool;

    /// Human-readable summary, used in diagnostics.
    fn description(&self) -> String;
}

// ---------------------------------------------------------------------------
// Built-in constraints
// ---------------------------------------------------------------------------

/// The anchor cell must be inside the world and walkable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Walkable;

impl PlacementConstraint for Walkable {
    fn is_satisfied(&self, candidate: &Candidate<'_>, ctx: &dyn PlacementContext) -> bool {
        ctx.grid_system().is_valid_position(candidate.cell)
    }

    fn description(&self) -> String {
        "position must be walkable".to_string()
    }
}

/// The anchor cell must hold no objects other than the excluded ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotOccupied {
    pub exclude: Vec<ObjectId>,
}

impl NotOccupied {
    /// Completely unoccupied.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn excluding<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ObjectId>,
    {
        Self {
            exclude: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl PlacementConstraint for NotOccupied {
    fn is_satisfied(&self, candidate: &Candidate<'_>, ctx: &dyn PlacementContext) -> bool {
        let world = ctx.grid_system().grid_to_world(candidate.cell);
        ctx.spatial_index()
            .occupants_at(world)
            .all(|id| candidate.ignores(&self.exclude, id))
    }

    fn description(&self) -> String {
        if self.exclude.is_empty() {
            "position must not be occupied".to_string()
        } else {
            let names: Vec<&str> = self.exclude.iter().map(ObjectId::as_str).collect();
            format!("position must not be occupied except by [{}]", names.join(", "))
        }
    }
}

/// Every cell under the candidate's footprint must be walkable and free of
/// objects other than the excluded ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FootprintClear {
    pub exclude: Vec<ObjectId>,
}

impl FootprintClear {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn excluding<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ObjectId>,
    {
        Self {
            exclude: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl PlacementConstraint for FootprintClear {
    fn is_satisfied(&self, candidate: &Candidate<'_>, ctx: &dyn PlacementContext) -> bool {
        let grid = ctx.grid_system();
        let range = grid.cell_range(candidate.position, candidate.footprint);
        if !range.cells().all(|cell| grid.is_valid_position(cell)) {
            return false;
        }
        ctx.spatial_index()
            .query(candidate.position, candidate.footprint)
            .iter()
            .all(|id| candidate.ignores(&self.exclude, id))
    }

    fn description(&self) -> String {
        if self.exclude.is_empty() {
            "footprint must be walkable and clear".to_string()
        } else {
            let names: Vec<&str> = self.exclude.iter().map(ObjectId::as_str).collect();
            format!(
                "footprint must be walkable and clear except for [{}]",
                names.join(", ")
            )
        }
    }
}

/// The anchor cell must lie within a Manhattan distance of `center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithinDistance {
    pub center: GridPosition,
    pub max_distance: u32,
}

impl WithinDistance {
    pub fn new(center: GridPosition, max_distance: u32) -> Self {
        Self {
            center,
            max_distance,
        }
    }
}

impl PlacementConstraint for WithinDistance {
    fn is_satisfied(&self, candidate: &Candidate<'_>, _ctx: &dyn PlacementContext) -> bool {
        candidate.cell.manhattan_distance(&self.center) <= self.max_distance
    }

    fn description(&self) -> String {
        format!(
            "position must be within {} cells of ({}, {})",
            self.max_distance, self.center.x, self.center.y
        )
    }
}

// ---------------------------------------------------------------------------
// ConstraintSet
// ---------------------------------------------------------------------------

/// An ordered conjunction of constraints.
#[derive(Debug, Default)]
pub struct ConstraintSet {
    constraints: Vec<Box<dyn PlacementConstraint>>,
}

impl ConstraintSet {
    /// An empty set; accepts every candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walkable and completely unoccupied.
    pub fn standard() -> Self {
        Self::new().with(Walkable).with(NotOccupied::new())
    }

    pub fn with(mut self, constraint: impl PlacementConstraint + 'static) -> Self {
        self.push(constraint);
        self
    }

    pub fn push(&mut self, constraint: impl PlacementConstraint + 'static) {
        self.constraints.push(Box::new(constraint));
    }

    pub fn push_boxed(&mut self, constraint: Box<dyn PlacementConstraint>) {
        self.constraints.push(constraint);
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PlacementConstraint> + '_ {
        self.constraints.iter().map(|c| c.as_ref())
    }

    /// True if every member accepts the candidate. Stops at the first
    /// rejection.
    pub fn is_satisfied(&self, candidate: &Candidate<'_>, ctx: &dyn PlacementContext) -> bool {
        self.constraints
            .iter()
            .all(|c| c.is_satisfied(candidate, ctx))
    }

    /// Descriptions of every member that rejects the candidate.
    pub fn unsatisfied(&self, candidate: &Candidate<'_>, ctx: &dyn PlacementContext) -> Vec<String> {
        self.constraints
            .iter()
            .filter(|c| !c.is_satisfied(candidate, ctx))
            .map(|c| c.description())
            .collect()
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.constraints.iter().map(|c| c.description()).collect()
    }
}

impl FromIterator<Box<dyn PlacementConstraint>> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = Box<dyn PlacementConstraint>>>(iter: T) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}
