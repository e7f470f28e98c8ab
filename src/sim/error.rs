//! Simulation errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("entity index {index} out of range (registry holds {len})")]
    EntityOutOfRange { index: usize, len: usize },

    #[error("physics is disabled for this scene")]
    PhysicsUnavailable,

    #[error("entity {index} has no rigid body")]
    NoRigidBody { index: usize },
}
