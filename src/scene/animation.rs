use crate::description::SceneObject;
use crate::math::Rgb;

use super::graph::Scene;

pub const SWAY_AMPLITUDE: f32 = 0.1;
/// Sway angular rate in radians per second
pub const SWAY_RATE: f32 = 1.0;
pub const GLOW_BASE: f32 = 0.1;
pub const GLOW_RANGE: f32 = 0.05;
pub const GLOW_RATE: f32 = 2.0;
pub const GLOW_TINT: Rgb = Rgb::new(1.0, 0.8, 0.0);

/// Per-object animation, decided once when the scene is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationKind {
    #[default]
    None,
    /// Rock about Z like a tree in the wind
    Sway,
    /// Pulse the emissive colour
    Glow,
}

impl AnimationKind {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "none" => Some(AnimationKind::None),
            "sway" => Some(AnimationKind::Sway),
            "glow" => Some(AnimationKind::Glow),
            _ => None,
        }
    }

    /// Name-based tagging used when an object carries no explicit tag
    pub fn infer(name: &str) -> Self {
        if name.contains("Tree") {
            AnimationKind::Sway
        } else if name.contains("Dome") {
            AnimationKind::Glow
        } else {
            AnimationKind::None
        }
    }

    pub fn for_object(object: &SceneObject) -> Self {
        if let Some(tag) = object.animation.as_deref() {
            match Self::parse(tag) {
                Some(kind) => return kind,
                None => log::debug!("Unknown animation tag {:?}, inferring from name", tag),
            }
        }
        Self::infer(object.name())
    }
}

pub fn sway_angle(time: f32, phase: f32) -> f32 {
    SWAY_AMPLITUDE * (time * SWAY_RATE + phase).sin()
}

/// Glow intensity, always within `GLOW_BASE ± GLOW_RANGE`
pub fn glow_intensity(time: f32) -> f32 {
    GLOW_BASE + GLOW_RANGE * (time * GLOW_RATE).sin()
}

/// Advances a scene by one frame
#[derive(Debug, Clone, Copy)]
pub struct Animator {
    rotation_step: f32,
}

impl Animator {
    pub fn new(rotation_step: f32) -> Self {
        Self { rotation_step }
    }

    pub fn rotation_step(&self) -> f32 {
        self.rotation_step
    }

    /// `time` is wall-clock seconds; rotation advances per call, not per second
    pub fn advance(&self, scene: &mut Scene, time: f32) {
        scene.rotation = (scene.rotation + self.rotation_step) % std::f32::consts::TAU;

        for node in &mut scene.meshes {
            match node.animation {
                AnimationKind::None => {}
                AnimationKind::Sway => node.rotation.z = sway_angle(time, node.position.x),
                AnimationKind::Glow => {
                    node.emissive = GLOW_TINT.linearized().scale(glow_intensity(time))
                }
            }
        }
    }
}
