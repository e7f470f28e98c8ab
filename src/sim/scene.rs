//! Scene graph container
//!
//! Owns every visual proxy. Meshes are addressed by [`MeshId`], which stays
//! valid after other meshes are removed.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::entity::{MeshKind, Transform};

/// Stable handle to a mesh in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshId(pub usize);

/// A visual proxy: shared shape/material (by kind) plus its own transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub kind: MeshKind,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    pub fn new(kind: MeshKind, transform: Transform) -> Self {
        Self {
            kind,
            transform,
            cast_shadow: kind == MeshKind::Domino,
            receive_shadow: kind == MeshKind::Ground,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    slots: Vec<Option<Mesh>>,
}

impl Scene {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn add(&mut self, mesh: Mesh) -> MeshId {
        self.slots.push(Some(mesh));
        MeshId(self.slots.len() - 1)
    }

    /// Detach a mesh; its id is never reused
    pub fn remove(&mut self, id: MeshId) -> Option<Mesh> {
        self.slots.get_mut(id.0).and_then(Option::take)
    }

    pub fn get(&self, id: MeshId) -> Option<&Mesh> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: MeshId) -> Option<&mut Mesh> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn set_position(&mut self, id: MeshId, position: Vec3) {
        if let Some(mesh) = self.get_mut(id) {
            mesh.transform.position = position;
        }
    }

    pub fn set_rotation(&mut self, id: MeshId, rotation: Quat) {
        if let Some(mesh) = self.get_mut(id) {
            mesh.transform.rotation = rotation;
        }
    }

    pub fn set_transform(&mut self, id: MeshId, transform: Transform) {
        if let Some(mesh) = self.get_mut(id) {
            mesh.transform = transform;
        }
    }

    /// Attached meshes in insertion order
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_remove_keeps_ids_stable() {
        let mut scene = Scene::new();
        let a = scene.add(Mesh::new(MeshKind::Domino, Transform::default()));
        let b = scene.add(Mesh::new(MeshKind::Ground, Transform::default()));
        assert_eq!(scene.len(), 2);

        let removed = scene.remove(a);
        assert_eq!(removed.map(|m| m.kind), Some(MeshKind::Domino));
        assert!(scene.get(a).is_none());
        assert_eq!(scene.get(b).map(|m| m.kind), Some(MeshKind::Ground));
        assert_eq!(scene.len(), 1);

        // Removing twice is a no-op
        assert!(scene.remove(a).is_none());
    }

    #[test]
    fn test_set_transform() {
        let mut scene = Scene::new();
        let id = scene.add(Mesh::new(MeshKind::Domino, Transform::default()));
        scene.set_position(id, Vec3::new(1.0, 2.0, 3.0));
        scene.set_rotation(id, Quat::from_rotation_y(0.5));

        let mesh = scene.get(id).copied().unwrap();
        assert_eq!(mesh.transform.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.transform.rotation, Quat::from_rotation_y(0.5));
        assert!(mesh.cast_shadow);
        assert!(!mesh.receive_shadow);
    }
}
