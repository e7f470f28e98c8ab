//! Shape generation for 3D primitives

use glam::Vec3;

use super::vertex::MeshVertex;

/// Generate vertices for a unit cube centred on the origin (edge length 1).
///
/// Every box in the scene is this cube scaled by its instance matrix.
pub fn unit_cube() -> Vec<MeshVertex> {
    // (normal, tangent u, tangent v) per face; u x v == normal keeps CCW winding
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut vertices = Vec::with_capacity(36);

    for (normal, u, v) in faces {
        let center = normal * 0.5;
        let c00 = center - u * 0.5 - v * 0.5;
        let c10 = center + u * 0.5 - v * 0.5;
        let c11 = center + u * 0.5 + v * 0.5;
        let c01 = center - u * 0.5 + v * 0.5;
        let n = normal.to_array();

        // Two triangles
        vertices.push(MeshVertex::new(c00.to_array(), n));
        vertices.push(MeshVertex::new(c10.to_array(), n));
        vertices.push(MeshVertex::new(c11.to_array(), n));

        vertices.push(MeshVertex::new(c00.to_array(), n));
        vertices.push(MeshVertex::new(c11.to_array(), n));
        vertices.push(MeshVertex::new(c01.to_array(), n));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cube_bounds() {
        let cube = unit_cube();
        assert_eq!(cube.len(), 36);
        for v in &cube {
            for c in v.position {
                // Every vertex is a cube corner
                assert!((c.abs() - 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_unit_cube_winding_faces_outward() {
        let cube = unit_cube();
        for tri in cube.chunks(3) {
            let a = Vec3::from(tri[0].position);
            let b = Vec3::from(tri[1].position);
            let c = Vec3::from(tri[2].position);
            let face_normal = (b - a).cross(c - a).normalize();
            let n = Vec3::from(tri[0].normal);
            assert!(face_normal.dot(n) > 0.99);
            // Normal points away from the centre
            assert!(a.dot(n) > 0.0);
        }
    }
}
