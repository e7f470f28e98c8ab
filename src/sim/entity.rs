//! Entity data model
//!
//! An entity pairs one visual proxy (a mesh in the [`Scene`](super::Scene))
//! with at most one rigid body. Entities are identified by their registry
//! index, which never changes once assigned.

use glam::{Quat, Vec3};
use rapier3d::prelude::RigidBodyHandle;
use serde::{Deserialize, Serialize};

use super::scene::MeshId;
use crate::consts::*;

/// Position + orientation of a visual proxy or rigid body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Box collision/visual shape, described by half-extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxShape {
    pub half_extents: Vec3,
}

impl BoxShape {
    pub const fn new(hx: f32, hy: f32, hz: f32) -> Self {
        Self {
            half_extents: Vec3::new(hx, hy, hz),
        }
    }

    /// Full edge lengths
    pub fn size(&self) -> Vec3 {
        self.half_extents * 2.0
    }
}

/// Surface appearance shared by every mesh of a kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: [f32; 4],
    pub metalness: f32,
    pub roughness: f32,
}

/// Shared shape + material pairs. Meshes only differ by transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshKind {
    Domino,
    Ground,
}

pub const DOMINO_SHAPE: BoxShape = BoxShape::new(
    DOMINO_HALF_EXTENTS[0],
    DOMINO_HALF_EXTENTS[1],
    DOMINO_HALF_EXTENTS[2],
);

pub const GROUND_SHAPE: BoxShape = BoxShape::new(
    GROUND_HALF_EXTENTS[0],
    GROUND_HALF_EXTENTS[1],
    GROUND_HALF_EXTENTS[2],
);

pub const DOMINO_MATERIAL: Material = Material {
    color: [1.0, 1.0, 1.0, 1.0],
    metalness: 0.3,
    roughness: 0.4,
};

pub const GROUND_MATERIAL: Material = Material {
    color: [0.467, 0.467, 0.467, 1.0], // #777777
    metalness: 0.3,
    roughness: 0.4,
};

impl MeshKind {
    pub fn shape(&self) -> BoxShape {
        match self {
            MeshKind::Domino => DOMINO_SHAPE,
            MeshKind::Ground => GROUND_SHAPE,
        }
    }

    pub fn material(&self) -> Material {
        match self {
            MeshKind::Domino => DOMINO_MATERIAL,
            MeshKind::Ground => GROUND_MATERIAL,
        }
    }
}

/// One tracked domino: visual proxy plus optional dynamic body
#[derive(Debug, Clone, Copy)]
pub struct Entity {
    pub mesh: MeshId,
    pub body: Option<RigidBodyHandle>,
}

impl Entity {
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

/// Insertion-ordered, append-only list of entities.
///
/// Index order is stable; the trigger addresses entities by index.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entities: Vec<Entity>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Append an entity and return its index
    pub fn push(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }
}
