//! Rigid-body world
//!
//! Thin wrapper over rapier that exposes only what the demo needs:
//! create bodies with box colliders, step, read poses, push a body.
//! Solver details (sub-steps, iterations, contacts) stay inside rapier.

use glam::{Quat, Vec3};
use rapier3d::prelude::*;

use super::entity::{BoxShape, Transform};

/// How a body responds to forces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Never moves (ground)
    Fixed,
    /// Fully simulated (dominoes)
    Dynamic,
}

pub struct PhysicsWorld {
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    pub fn new(gravity: Vec3) -> Self {
        log::debug!("Creating physics world (gravity {:?})", gravity);
        Self {
            gravity: to_vector(gravity),
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Fixed timestep used by [`step`](Self::step), in seconds
    pub fn timestep(&self) -> f32 {
        self.integration_parameters.dt
    }

    /// Create a body at `transform` with a box collider of `shape`
    pub fn add_box(
        &mut self,
        kind: BodyKind,
        transform: Transform,
        shape: BoxShape,
        restitution: f32,
    ) -> RigidBodyHandle {
        let builder = match kind {
            BodyKind::Fixed => RigidBodyBuilder::fixed(),
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
        };
        let body = builder
            .translation(to_vector(transform.position))
            .rotation(to_vector(transform.rotation.to_scaled_axis()))
            .build();
        let handle = self.bodies.insert(body);

        let he = shape.half_extents;
        let collider = ColliderBuilder::cuboid(he.x, he.y, he.z)
            .restitution(restitution)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        handle
    }

    /// Advance the world by one fixed step
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Current translation and rotation of a body
    pub fn pose(&self, handle: RigidBodyHandle) -> Option<Transform> {
        let body = self.bodies.get(handle)?;
        Some(Transform::new(
            from_vector(body.translation()),
            from_rotation(body.rotation()),
        ))
    }

    /// Apply an instantaneous impulse at the body's centre of mass
    pub fn apply_impulse(&mut self, handle: RigidBodyHandle, impulse: Vec3) -> bool {
        match self.bodies.get_mut(handle) {
            Some(body) => {
                body.apply_impulse(to_vector(impulse), true);
                true
            }
            None => false,
        }
    }

    /// Restitution of the first collider attached to a body
    pub fn restitution(&self, handle: RigidBodyHandle) -> Option<f32> {
        let collider = *self.bodies.get(handle)?.colliders().first()?;
        self.colliders.get(collider).map(|c| c.restitution())
    }

    pub fn is_dynamic(&self, handle: RigidBodyHandle) -> bool {
        self.bodies
            .get(handle)
            .map(|b| b.is_dynamic())
            .unwrap_or(false)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

#[inline]
fn to_vector(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

#[inline]
fn from_vector(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[inline]
fn from_rotation(r: &Rotation<Real>) -> Quat {
    let q = r.quaternion();
    Quat::from_xyzw(q.i, q.j, q.k, q.w)
}
