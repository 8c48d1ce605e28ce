use tileplace_core::{ObjectId, WorldPosition};

/// Why a placement request was refused.
///
/// Both variants are ordinary outcomes: the caller may retry later, pick
/// another position, or give up on the object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("no valid position found for '{id}'")]
    NoValidPosition { id: ObjectId },
    #[error(
        "'{id}' cannot be moved to ({}, {}): {}",
        position.x,
        position.y,
        failed.join(", ")
    )]
    ConstraintsUnsatisfied {
        id: ObjectId,
        position: WorldPosition,
        /// Descriptions of the constraints that rejected the position.
        failed: Vec<String>,
    },
}

impl PlacementError {
    /// Id of the object the request was for.
    pub fn id(&self) -> &ObjectId {
        match self {
            PlacementError::NoValidPosition { id } => id,
            PlacementError::ConstraintsUnsatisfied { id, .. } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_object() {
        let err = PlacementError::NoValidPosition {
            id: ObjectId::new("crate"),
        };
        assert_eq!(err.to_string(), "no valid position found for 'crate'");

        let err = PlacementError::ConstraintsUnsatisfied {
            id: ObjectId::new("crate"),
            position: WorldPosition::new(32, 64),
            failed: vec!["walkable".into(), "not occupied".into()],
        };
        assert_eq!(
            err.to_string(),
            "'crate' cannot be moved to (32, 64): walkable, not occupied"
        );
        assert_eq!(err.id(), "crate");
    }
}
