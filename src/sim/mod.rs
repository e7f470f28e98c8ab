//! Simulation module
//!
//! Layout, physics and transform sync live here. Must stay free of GPU and
//! platform dependencies:
//! - Deterministic layout (pure function of the index)
//! - Fixed physics timestep only
//! - Stable iteration order (registry index)

pub mod entity;
pub mod error;
pub mod factory;
pub mod layout;
pub mod physics;
pub mod scene;
pub mod state;
pub mod tick;

pub use entity::{BoxShape, Entity, Material, MeshKind, Registry, Transform};
pub use error::SimError;
pub use factory::{Ground, create_entity, create_ground};
pub use layout::{GateRule, LayoutSummary, Placement, generate_layout, layout, placements_for};
pub use physics::{BodyKind, PhysicsWorld};
pub use scene::{Mesh, MeshId, Scene};
pub use state::{DominoState, LoopPhase, Trigger};
pub use tick::{TickInput, apply_impulse, start, sync_transforms, tick};
