//! WebGPU rendering module
//!
//! Draws the scene's box meshes with one instanced pipeline.

pub mod camera;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use camera::Camera;
pub use pipeline::RenderState;
