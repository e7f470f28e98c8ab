//! Per-frame update
//!
//! One tick = optional trigger, one physics step, then every registered
//! body's pose is copied onto its visual proxy. No interpolation: visuals
//! follow physics exactly.

use glam::Vec3;

use super::error::SimError;
use super::state::{DominoState, LoopPhase};

/// One-shot inputs gathered between frames
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// "start" pressed since the last frame
    pub start: bool,
}

/// Advance the demo by one frame
pub fn tick(state: &mut DominoState, input: &TickInput) {
    if input.start {
        if let Err(e) = start(state) {
            log::error!("Start failed: {}", e);
        }
    }

    state.phase = LoopPhase::Running;
    state.frame += 1;

    if let Some(physics) = state.physics.as_mut() {
        physics.step();
        sync_transforms(state);
    }
}

/// Copy every body's translation and rotation onto its visual proxy.
///
/// Entities without a body are left untouched.
pub fn sync_transforms(state: &mut DominoState) {
    let Some(physics) = state.physics.as_ref() else {
        return;
    };

    for entity in state.registry.iter() {
        let Some(body) = entity.body else {
            continue;
        };
        if let Some(pose) = physics.pose(body) {
            state.scene.set_transform(entity.mesh, pose);
        }
    }
}

/// Push the configured trigger entity
pub fn start(state: &mut DominoState) -> Result<(), SimError> {
    let trigger = state.trigger;
    apply_impulse(state, trigger.index, trigger.impulse)
}

/// Apply `impulse` to the body of registry entry `index`
pub fn apply_impulse(
    state: &mut DominoState,
    index: usize,
    impulse: Vec3,
) -> Result<(), SimError> {
    let entity = *state.registry.get(index).ok_or(SimError::EntityOutOfRange {
        index,
        len: state.registry.len(),
    })?;
    let physics = state
        .physics
        .as_mut()
        .ok_or(SimError::PhysicsUnavailable)?;
    let body = entity.body.ok_or(SimError::NoRigidBody { index })?;

    if !physics.apply_impulse(body, impulse) {
        return Err(SimError::NoRigidBody { index });
    }

    log::info!("Impulse {:?} applied to domino {}", impulse, index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::entity::Transform;

    fn mesh_transform(state: &DominoState, index: usize) -> Transform {
        let entity = state.registry.get(index).unwrap();
        state.scene.get(entity.mesh).unwrap().transform
    }

    #[test]
    fn test_first_tick_enters_running() {
        let mut state = DominoState::new(&Settings::default());
        assert_eq!(state.phase, LoopPhase::Idle);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, LoopPhase::Running);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_sync_without_step_does_not_drift() {
        let mut state = DominoState::new(&Settings::default());
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
        }
        let before: Vec<Transform> = (0..state.registry.len())
            .map(|i| mesh_transform(&state, i))
            .collect();

        for _ in 0..10 {
            sync_transforms(&mut state);
        }

        for (i, t) in before.iter().enumerate() {
            assert_eq!(mesh_transform(&state, i), *t);
        }
    }

    #[test]
    fn test_visuals_follow_bodies_exactly() {
        let mut state = DominoState::new(&Settings::default());
        start(&mut state).unwrap();
        for _ in 0..20 {
            tick(&mut state, &TickInput::default());
        }
        let physics = state.physics.as_ref().unwrap();
        for entity in state.registry.iter() {
            let pose = physics.pose(entity.body.unwrap()).unwrap();
            assert_eq!(state.scene.get(entity.mesh).unwrap().transform, pose);
        }
    }

    #[test]
    fn test_trigger_pushes_target_and_leaves_far_dominoes() {
        let mut state = DominoState::new(&Settings::default());
        let last = state.registry.len() - 1;
        let target_start = mesh_transform(&state, 18).position;
        let far_start = mesh_transform(&state, last).position;

        let input = TickInput { start: true };
        tick(&mut state, &input);
        for _ in 0..30 {
            tick(&mut state, &TickInput::default());
        }

        let target_now = mesh_transform(&state, 18).position;
        let far_now = mesh_transform(&state, last).position;

        assert!(
            target_now.z < target_start.z - 0.05,
            "target should move along -z: {} -> {}",
            target_start.z,
            target_now.z
        );
        assert!(
            (far_now - far_start).length() < 0.05,
            "far domino moved {:?} -> {:?}",
            far_start,
            far_now
        );
    }

    #[test]
    fn test_ground_is_static_under_stepping() {
        let mut state = DominoState::new(&Settings::default());
        let ground_body = state.ground.body.unwrap();
        let start_pose = state.physics.as_ref().unwrap().pose(ground_body).unwrap();
        for _ in 0..20 {
            tick(&mut state, &TickInput::default());
        }
        let pose = state.physics.as_ref().unwrap().pose(ground_body).unwrap();
        assert_eq!(pose, start_pose);
        assert_eq!(pose.position, Vec3::new(0.0, -0.5, 0.0));
        assert_eq!(
            state.scene.get(state.ground.mesh).unwrap().transform.position,
            pose.position
        );
    }

    #[test]
    fn test_out_of_range_trigger_is_reported() {
        let mut state = DominoState::new(&Settings::default());
        let len = state.registry.len();
        let err = apply_impulse(&mut state, len, Vec3::Z).unwrap_err();
        assert_eq!(err, SimError::EntityOutOfRange { index: len, len });
    }

    #[test]
    fn test_trigger_without_physics() {
        let settings = Settings {
            physics_enabled: false,
            ..Default::default()
        };
        let mut state = DominoState::new(&settings);
        assert_eq!(start(&mut state), Err(SimError::PhysicsUnavailable));

        // Visual-only ticks leave every proxy where the layout put it
        let before = mesh_transform(&state, 18);
        tick(&mut state, &TickInput { start: true });
        assert_eq!(state.phase, LoopPhase::Running);
        assert_eq!(mesh_transform(&state, 18), before);
    }
}
