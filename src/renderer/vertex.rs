//! Vertex and instance types for 3D rendering

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::sim::Mesh;

/// Vertex with position and normal
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Per-instance data: model matrix (scale baked in), colour, surface params
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// x = metalness, y = roughness
    pub surface: [f32; 2],
    pub _pad: [f32; 2],
}

impl InstanceRaw {
    /// Instance for a mesh drawn with the shared unit cube
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let size = mesh.kind.shape().size();
        let material = mesh.kind.material();
        let model = Mat4::from_scale_rotation_translation(
            size,
            mesh.transform.rotation,
            mesh.transform.position,
        );
        Self {
            model: model.to_cols_array_2d(),
            color: material.color,
            surface: [material.metalness, material.roughness],
            _pad: [0.0; 2],
        }
    }

    pub const ATTRIBS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x2,
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.model[3][0], self.model[3][1], self.model[3][2])
    }
}

/// Scene colours
pub mod colors {
    pub const BACKGROUND: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const AMBIENT: [f32; 3] = [1.0, 1.0, 1.0];
    pub const AMBIENT_INTENSITY: f32 = 0.7;
    pub const SUN: [f32; 3] = [1.0, 1.0, 1.0];
    pub const SUN_INTENSITY: f32 = 0.6;
    pub const SUN_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
}
