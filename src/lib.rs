//! Domino Cascade - a physics-driven domino layout demo
//!
//! Core modules:
//! - `sim`: Layout generation, rigid-body world, per-frame transform sync
//! - `renderer`: Scene graph, camera and WebGPU rendering pipeline
//! - `settings`: Runtime preferences (JSON, LocalStorage on web)

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::{Quat, Vec3};

/// Demo configuration constants
pub mod consts {
    /// Layout loop bound (indices 1..ENTITY_COUNT, index 0 is skipped)
    pub const ENTITY_COUNT: u32 = 400;
    /// Number of dominoes per lane before moving to the next column
    pub const LANE_LENGTH: u32 = 20;
    /// Gate rule A period (two-lane diagonal gate)
    pub const GATE_PERIOD: u32 = 40;
    /// Distance between domino columns along x
    pub const COLUMN_STRIDE: u32 = 4;
    /// Offset applied to both x and z so the layout starts near the origin
    pub const GRID_OFFSET: f32 = 5.0;
    /// Centre height of every domino (half its height, resting on y = 0)
    pub const ENTITY_HEIGHT: f32 = 1.0;
    /// Quotient selecting gate rule B (`index / column_group`)
    pub const GATE_B_QUOTIENT: f64 = 5.0;

    /// Gate geometry
    pub const GATE_SHIFT_X: f32 = 0.5;
    pub const GATE_SECOND_X: f32 = 2.0;
    pub const GATE_THIRD_X: f32 = 3.5;
    /// Gate rule A relocates its dominoes to the far end of the lane
    pub const GATE_LANE_SHIFT_Z: f32 = 20.0;

    /// Gate angles (radians, about +Y)
    pub const ANGLE_60: f32 = std::f32::consts::FRAC_PI_3;
    pub const ANGLE_90: f32 = std::f32::consts::FRAC_PI_2;
    pub const ANGLE_30: f32 = std::f32::consts::FRAC_PI_6;

    /// Domino box half-extents (1 x 2 x 0.2 box)
    pub const DOMINO_HALF_EXTENTS: [f32; 3] = [0.5, 1.0, 0.1];
    /// Bounciness shared by every domino collider
    pub const DOMINO_RESTITUTION: f32 = 0.4;

    /// Ground slab pose and size (top face sits at y = 0)
    pub const GROUND_Y: f32 = -0.5;
    pub const GROUND_HALF_EXTENTS: [f32; 3] = [500.0, 0.5, 500.0];
    /// Bounciness of the ground collider
    pub const GROUND_RESTITUTION: f32 = 0.4;

    /// World gravity (m/s²)
    pub const GRAVITY: [f32; 3] = [0.0, -9.81, 0.0];

    /// Registry index pushed by the "start" action
    pub const TRIGGER_INDEX: usize = 18;
    /// Impulse applied by the "start" action
    pub const TRIGGER_IMPULSE: [f32; 3] = [0.0, 0.0, -2.0];

    /// Tilt (radians from vertical) past which a domino counts as toppled
    pub const TOPPLE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
}

/// Rotation of `angle` radians about the vertical axis
#[inline]
pub fn yaw_quat(angle: f32) -> Quat {
    Quat::from_rotation_y(angle)
}

/// Angle between a rotated body's local up axis and world up
#[inline]
pub fn tilt_angle(rotation: Quat) -> f32 {
    let up = rotation * Vec3::Y;
    up.dot(Vec3::Y).clamp(-1.0, 1.0).acos()
}

/// True while a body's up axis stays within the topple threshold
#[inline]
pub fn is_upright(rotation: Quat) -> bool {
    tilt_angle(rotation) <= consts::TOPPLE_ANGLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_keeps_upright() {
        assert!(is_upright(yaw_quat(consts::ANGLE_60)));
        assert!(is_upright(yaw_quat(-consts::ANGLE_90)));
        assert!(tilt_angle(Quat::IDENTITY).abs() < 1e-6);
    }

    #[test]
    fn test_tipped_over() {
        let fallen = Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
        assert!(!is_upright(fallen));
        assert!((tilt_angle(fallen) - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }
}
