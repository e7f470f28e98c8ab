//! Entity and ground construction
//!
//! Every domino shares one shape and one material; only the transform
//! differs. When a physics world is supplied each visual proxy gets a
//! matching body and collider at the same pose.

use glam::{Quat, Vec3};
use rapier3d::prelude::RigidBodyHandle;

use super::entity::{DOMINO_SHAPE, Entity, GROUND_SHAPE, MeshKind, Registry, Transform};
use super::physics::{BodyKind, PhysicsWorld};
use super::scene::{Mesh, MeshId, Scene};
use crate::consts::*;

/// Create one domino at `position` with `rotation` and register it.
///
/// Returns the new registry index.
pub fn create_entity(
    scene: &mut Scene,
    registry: &mut Registry,
    physics: Option<&mut PhysicsWorld>,
    position: Vec3,
    rotation: Quat,
) -> usize {
    let transform = Transform::new(position, rotation);
    let mesh = scene.add(Mesh::new(MeshKind::Domino, transform));

    let body = physics.map(|world| {
        world.add_box(
            BodyKind::Dynamic,
            transform,
            DOMINO_SHAPE,
            DOMINO_RESTITUTION,
        )
    });

    registry.push(Entity { mesh, body })
}

/// The static ground slab
#[derive(Debug, Clone, Copy)]
pub struct Ground {
    pub mesh: MeshId,
    pub body: Option<RigidBodyHandle>,
}

/// Create the ground slab. Its top face sits at y = 0.
///
/// Each call builds an independent ground; nothing is deduplicated.
pub fn create_ground(scene: &mut Scene, physics: Option<&mut PhysicsWorld>) -> Ground {
    let transform = Transform::from_position(Vec3::new(0.0, GROUND_Y, 0.0));
    let mesh = scene.add(Mesh::new(MeshKind::Ground, transform));

    let body = physics.map(|world| {
        world.add_box(BodyKind::Fixed, transform, GROUND_SHAPE, GROUND_RESTITUTION)
    });

    Ground { mesh, body }
}
