use std::f32::consts::FRAC_PI_4;

use scene_viewer::math::Rgb;
use scene_viewer::scene::animation::{glow_intensity, GLOW_BASE, GLOW_RANGE};
use scene_viewer::scene::{AnimationKind, Animator, MaterialPalette, Scene};
use scene_viewer::types::InstanceUniform;
use scene_viewer::{SceneDescription, ViewerConfig, ViewportSize};

const VILLA: &str = r#"{
    "objects": [
        {"name": "OakTree1", "type": "cylinder", "material": "tree", "position": [6, 0, 2]},
        {"name": "MainDome", "type": "sphere", "material": "dome", "position": [0, 8, 0]},
        {"name": "Wall_North", "type": "box", "material": "wall"}
    ]
}"#;

fn build(json: &str) -> Scene {
    Scene::build(
        &SceneDescription::from_json_str(json).unwrap(),
        ViewportSize::new(800, 600),
        &MaterialPalette::standard(),
        &ViewerConfig::default(),
    )
}

#[cfg(test)]
mod animation_tests {
    use super::*;

    #[test]
    fn test_animation_kinds_assigned_at_build() {
        let scene = build(VILLA);

        assert_eq!(scene.find("OakTree1").unwrap().animation, AnimationKind::Sway);
        assert_eq!(scene.find("MainDome").unwrap().animation, AnimationKind::Glow);
        assert_eq!(scene.find("Wall_North").unwrap().animation, AnimationKind::None);
        assert_eq!(scene.ground().unwrap().animation, AnimationKind::None);
    }

    #[test]
    fn test_tree_sways_over_time() {
        let mut scene = build(VILLA);
        let animator = Animator::new(0.003);

        animator.advance(&mut scene, 0.0);
        let first = scene.find("OakTree1").unwrap().rotation.z;
        animator.advance(&mut scene, 1.0);
        let second = scene.find("OakTree1").unwrap().rotation.z;

        assert_ne!(first, second);
        assert!(first.abs() <= 0.1 && second.abs() <= 0.1);
    }

    #[test]
    fn test_dome_glows_over_time() {
        let mut scene = build(VILLA);
        let animator = Animator::new(0.003);

        animator.advance(&mut scene, 0.0);
        let first = scene.find("MainDome").unwrap().emissive;
        animator.advance(&mut scene, 1.0);
        let second = scene.find("MainDome").unwrap().emissive;

        assert_ne!(first, second);
        assert_ne!(first, Rgb::BLACK);
    }

    #[test]
    fn test_uploaded_glow_spans_intensity_bounds() {
        let mut scene = build(VILLA);
        let animator = Animator::new(0.0);
        let dome = scene.meshes.iter().position(|m| m.name == "MainDome").unwrap();

        // sin(2t) = 1 and -1
        animator.advance(&mut scene, FRAC_PI_4);
        let hi = InstanceUniform::for_scene(&scene)[dome].emissive;
        animator.advance(&mut scene, 3.0 * FRAC_PI_4);
        let lo = InstanceUniform::for_scene(&scene)[dome].emissive;

        let tint_g = Rgb::new(1.0, 0.8, 0.0).to_linear()[1];
        assert!((hi[0] - (GLOW_BASE + GLOW_RANGE)).abs() < 1e-4);
        assert!((lo[0] - (GLOW_BASE - GLOW_RANGE)).abs() < 1e-4);
        assert!((hi[1] - tint_g * 0.15).abs() < 1e-4);
        assert!((lo[1] - tint_g * 0.05).abs() < 1e-4);
        assert_eq!(hi[2], 0.0);
        assert!((hi[0] / lo[0] - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_glow_leaves_palette_untouched() {
        let mut scene = build(VILLA);
        Animator::new(0.003).advance(&mut scene, 0.5);

        let dome = MaterialPalette::standard().get("dome").cloned().unwrap();
        assert_eq!(scene.find("MainDome").unwrap().material, dome);
        assert_eq!(dome.color, Rgb::from_hex(0xdaa520));
    }

    #[test]
    fn test_static_objects_do_not_move() {
        let mut scene = build(VILLA);
        let before = scene.find("Wall_North").unwrap().clone();

        let animator = Animator::new(0.003);
        for frame in 0..10 {
            animator.advance(&mut scene, frame as f32 * 0.016);
        }

        assert_eq!(scene.find("Wall_North").unwrap(), &before);
    }

    #[test]
    fn test_scene_rotation_accumulates_per_frame() {
        let mut scene = build(VILLA);
        let animator = Animator::new(0.003);

        for _ in 0..100 {
            animator.advance(&mut scene, 0.0);
        }

        assert!((scene.rotation - 0.3).abs() < 1e-4);
    }

    #[test]
    fn test_zero_rotation_step_holds_still() {
        let mut scene = build(VILLA);
        let animator = Animator::new(0.0);

        animator.advance(&mut scene, 3.0);

        assert_eq!(scene.rotation, 0.0);
    }

    #[test]
    fn test_glow_stays_in_range() {
        for step in 0..200 {
            let t = step as f32 * 0.05;
            let intensity = glow_intensity(t);
            assert!(intensity >= GLOW_BASE - GLOW_RANGE - 1e-6);
            assert!(intensity <= GLOW_BASE + GLOW_RANGE + 1e-6);
        }
    }

    #[test]
    fn test_explicit_tag_overrides_name() {
        let scene = build(
            r#"{"objects": [
                {"name": "TreeLine_Sign", "animation": "none"},
                {"name": "Lantern", "animation": "glow"}
            ]}"#,
        );

        assert_eq!(scene.meshes[0].animation, AnimationKind::None);
        assert_eq!(scene.meshes[1].animation, AnimationKind::Glow);
    }
}
