//! Domino layout generation
//!
//! Dominoes stand in lanes of 20 along z, one lane per column along x.
//! Every 20th index closes a lane with a three-box diagonal gate that
//! turns the cascade into the next column:
//! - Gate A (every 40th index) sits past the far end of the lane (z + 20)
//! - Gate B (odd 20-index bands) sits at the near end, in place
//!
//! Placement is a pure function of the index and the constants in
//! [`crate::consts`], so the layout is bit-for-bit reproducible.

use glam::Vec3;

use super::entity::Registry;
use super::factory::create_entity;
use super::physics::PhysicsWorld;
use super::scene::Scene;
use crate::consts::*;
use crate::yaw_quat;

/// Where one domino goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    /// Rotation about +Y (radians)
    pub yaw: f32,
}

impl Placement {
    fn upright(position: Vec3) -> Self {
        Self { position, yaw: 0.0 }
    }
}

/// Which gate formation an index produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRule {
    /// Plain upright domino
    None,
    /// Two-lane gate at the far end of the lane
    A,
    /// Single-lane gate at the near end of the lane
    B,
}

/// `ceil(index / 20) * 4`
#[inline]
pub fn column_group(index: u32) -> u32 {
    index.div_ceil(LANE_LENGTH) * COLUMN_STRIDE
}

/// Grid position before any gate rule is applied
pub fn base_position(index: u32) -> Vec3 {
    let x = column_group(index) as f32 - GRID_OFFSET;
    let z = (index % LANE_LENGTH) as f32 - GRID_OFFSET;
    Vec3::new(x, ENTITY_HEIGHT, z)
}

/// Gate selection. A takes precedence; B uses exact float division.
pub fn gate_rule(index: u32) -> GateRule {
    if index % GATE_PERIOD == 0 {
        return GateRule::A;
    }

    let group = column_group(index);
    let odd_band = (index / LANE_LENGTH) % 2 == 1;
    if group != 0 && index as f64 / group as f64 == GATE_B_QUOTIENT && odd_band {
        GateRule::B
    } else {
        GateRule::None
    }
}

/// Placements produced by one layout index: one domino, or three for a gate
pub fn placements_for(index: u32) -> Vec<Placement> {
    let base = base_position(index);

    match gate_rule(index) {
        GateRule::None => vec![Placement::upright(base)],
        GateRule::A => {
            let first = base + Vec3::new(GATE_SHIFT_X, 0.0, GATE_LANE_SHIFT_Z);
            vec![
                Placement {
                    position: first,
                    yaw: ANGLE_60,
                },
                Placement {
                    position: first + Vec3::X * GATE_SECOND_X,
                    yaw: ANGLE_90,
                },
                Placement {
                    position: first + Vec3::X * GATE_THIRD_X,
                    yaw: -ANGLE_60,
                },
            ]
        }
        GateRule::B => {
            let first = base + Vec3::X * GATE_SHIFT_X;
            vec![
                Placement {
                    position: first,
                    yaw: -ANGLE_60,
                },
                Placement {
                    position: first + Vec3::X * GATE_SECOND_X,
                    yaw: ANGLE_90,
                },
                Placement {
                    position: first + Vec3::X * GATE_THIRD_X,
                    yaw: ANGLE_30,
                },
            ]
        }
    }
}

/// Every placement in registry order
pub fn layout() -> impl Iterator<Item = Placement> {
    (1..ENTITY_COUNT).flat_map(placements_for)
}

/// Counts reported after populating a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutSummary {
    pub entities: usize,
    pub gate_a: usize,
    pub gate_b: usize,
}

/// Populate `registry` (and `scene`, and `physics` when present) with the
/// full domino layout
pub fn generate_layout(
    scene: &mut Scene,
    registry: &mut Registry,
    mut physics: Option<&mut PhysicsWorld>,
) -> LayoutSummary {
    let mut summary = LayoutSummary::default();

    for index in 1..ENTITY_COUNT {
        match gate_rule(index) {
            GateRule::A => summary.gate_a += 1,
            GateRule::B => summary.gate_b += 1,
            GateRule::None => {}
        }

        for placement in placements_for(index) {
            create_entity(
                scene,
                registry,
                physics.as_deref_mut(),
                placement.position,
                yaw_quat(placement.yaw),
            );
        }
    }

    summary.entities = registry.len();
    log::info!(
        "Layout generated: {} dominoes ({} far gates, {} near gates)",
        summary.entities,
        summary.gate_a,
        summary.gate_b
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_index_40_builds_far_gate() {
        assert_eq!(column_group(40), 8);
        assert_eq!(base_position(40), Vec3::new(3.0, 1.0, -5.0));
        assert_eq!(gate_rule(40), GateRule::A);

        let p = placements_for(40);
        assert_eq!(p.len(), 3);
        assert_eq!(p[0].position, Vec3::new(3.5, 1.0, 15.0));
        assert_eq!(p[0].yaw, ANGLE_60);
        assert_eq!(p[1].position, Vec3::new(5.5, 1.0, 15.0));
        assert_eq!(p[1].yaw, ANGLE_90);
        assert_eq!(p[2].position, Vec3::new(7.0, 1.0, 15.0));
        assert_eq!(p[2].yaw, -ANGLE_60);
    }

    #[test]
    fn test_index_20_builds_near_gate() {
        assert_eq!(column_group(20), 4);
        assert_eq!(gate_rule(20), GateRule::B);

        let p = placements_for(20);
        assert_eq!(p.len(), 3);
        assert_eq!(p[0].position, Vec3::new(-0.5, 1.0, -5.0));
        assert_eq!(p[0].yaw, -ANGLE_60);
        assert_eq!(p[1].position, Vec3::new(1.5, 1.0, -5.0));
        assert_eq!(p[1].yaw, ANGLE_90);
        assert_eq!(p[2].position, Vec3::new(3.0, 1.0, -5.0));
        assert_eq!(p[2].yaw, ANGLE_30);
    }

    #[test]
    fn test_plain_index_stays_on_grid() {
        let p = placements_for(19);
        assert_eq!(p, vec![Placement::upright(Vec3::new(-1.0, 1.0, 14.0))]);

        let p = placements_for(21);
        assert_eq!(p, vec![Placement::upright(Vec3::new(3.0, 1.0, -4.0))]);
    }

    #[test]
    fn test_gate_firing_sets() {
        let a: Vec<u32> = (1..ENTITY_COUNT)
            .filter(|&i| gate_rule(i) == GateRule::A)
            .collect();
        let b: Vec<u32> = (1..ENTITY_COUNT)
            .filter(|&i| gate_rule(i) == GateRule::B)
            .collect();

        assert_eq!(a, (1..=9).map(|k| k * 40).collect::<Vec<_>>());
        assert_eq!(a.len() as u32, (ENTITY_COUNT - 1) / GATE_PERIOD);
        assert_eq!(b, (0..10).map(|k| 20 + k * 40).collect::<Vec<_>>());
        assert!(a.iter().all(|i| !b.contains(i)));
    }

    #[test]
    fn test_total_entity_count() {
        let expected = 399 + 2 * 9 + 2 * 10;
        assert_eq!(layout().count(), expected);

        let mut scene = Scene::new();
        let mut registry = Registry::new();
        let summary = generate_layout(&mut scene, &mut registry, None);
        assert_eq!(summary.entities, expected);
        assert_eq!(summary.gate_a, 9);
        assert_eq!(summary.gate_b, 10);
        assert_eq!(registry.len(), expected);
        assert_eq!(scene.len(), expected);
    }

    #[test]
    fn test_registry_index_18_is_end_of_first_lane() {
        let placements: Vec<Placement> = layout().collect();
        assert_eq!(placements[18].position, Vec3::new(-1.0, 1.0, 14.0));
        assert_eq!(placements[18].yaw, 0.0);
    }

    #[test]
    fn test_layout_is_reproducible() {
        let first: Vec<Placement> = layout().collect();
        let second: Vec<Placement> = layout().collect();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(
                a.position.to_array().map(f32::to_bits),
                b.position.to_array().map(f32::to_bits)
            );
            assert_eq!(a.yaw.to_bits(), b.yaw.to_bits());
        }
    }

    proptest! {
        #[test]
        fn prop_placement_is_pure(index in 1u32..ENTITY_COUNT) {
            let a = placements_for(index);
            let b = placements_for(index);
            prop_assert_eq!(&a, &b);

            let expected = if gate_rule(index) == GateRule::None { 1 } else { 3 };
            prop_assert_eq!(a.len(), expected);
            for p in &a {
                prop_assert_eq!(p.position.y, ENTITY_HEIGHT);
            }
        }

        #[test]
        fn prop_plain_indices_keep_identity_rotation(index in 1u32..ENTITY_COUNT) {
            prop_assume!(index % LANE_LENGTH != 0);
            prop_assert_eq!(gate_rule(index), GateRule::None);
            prop_assert_eq!(placements_for(index)[0].yaw, 0.0);
        }
    }
}
