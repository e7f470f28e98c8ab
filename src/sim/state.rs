//! Demo state
//!
//! Everything the frame loop owns: the scene graph, the entity registry,
//! the ground, and the rigid-body world (absent in visual-only mode).

use glam::Vec3;

use super::entity::Registry;
use super::factory::{Ground, create_ground};
use super::layout::{LayoutSummary, generate_layout};
use super::physics::PhysicsWorld;
use super::scene::Scene;
use crate::settings::Settings;

/// Frame loop phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    /// Built, no frame has run yet
    #[default]
    Idle,
    /// Ticking every frame
    Running,
}

/// What the "start" action pushes, and how hard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    pub index: usize,
    pub impulse: Vec3,
}

pub struct DominoState {
    pub scene: Scene,
    pub registry: Registry,
    pub ground: Ground,
    /// `None` runs the scene without physics
    pub physics: Option<PhysicsWorld>,
    pub trigger: Trigger,
    pub phase: LoopPhase,
    /// Running ticks so far
    pub frame: u64,
    pub layout: LayoutSummary,
}

impl DominoState {
    /// Build the ground and the full layout
    pub fn new(settings: &Settings) -> Self {
        let mut scene = Scene::new();
        let mut registry = Registry::new();
        let mut physics = settings
            .physics_enabled
            .then(|| PhysicsWorld::new(settings.gravity()));

        let ground = create_ground(&mut scene, physics.as_mut());
        let layout = generate_layout(&mut scene, &mut registry, physics.as_mut());

        if physics.is_none() {
            log::info!("Physics disabled: scene is visual only");
        }

        Self {
            scene,
            registry,
            ground,
            physics,
            trigger: Trigger {
                index: settings.trigger_index,
                impulse: settings.trigger_impulse(),
            },
            phase: LoopPhase::Idle,
            frame: 0,
            layout,
        }
    }

    pub fn physics_enabled(&self) -> bool {
        self.physics.is_some()
    }

    /// Number of dominoes tilted past the topple threshold
    pub fn toppled_count(&self) -> usize {
        self.registry
            .iter()
            .filter_map(|e| self.scene.get(e.mesh))
            .filter(|m| !crate::is_upright(m.transform.rotation))
            .count()
    }
}
