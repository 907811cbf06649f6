use approx::assert_relative_eq;
use glam::Vec3;
use scene_viewer::math::Rgb;
use scene_viewer::scene::{GeometryKind, MaterialPalette, Scene};
use scene_viewer::{SceneDescription, ViewerConfig, ViewportSize};

fn build(json: &str) -> Scene {
    let description = SceneDescription::from_json_str(json).unwrap();
    Scene::build(
        &description,
        ViewportSize::new(800, 600),
        &MaterialPalette::standard(),
        &ViewerConfig::default(),
    )
}

#[cfg(test)]
mod scene_build_tests {
    use super::*;

    #[test]
    fn test_unknown_type_falls_back_to_box() {
        for kind in ["torus", "", "PLANE", "hexagon"] {
            let json = format!(r#"{{"objects": [{{"name": "Thing", "type": "{}"}}]}}"#, kind);
            let scene = build(&json);

            assert_eq!(scene.meshes[0].geometry, GeometryKind::Box, "type {:?}", kind);
        }
    }

    #[test]
    fn test_missing_type_falls_back_to_box() {
        let scene = build(r#"{"objects": [{"name": "Thing"}, {"name": "Other", "type": 42}]}"#);

        assert_eq!(scene.meshes[0].geometry, GeometryKind::Box);
        assert_eq!(scene.meshes[1].geometry, GeometryKind::Box);
    }

    #[test]
    fn test_known_types_are_case_insensitive() {
        let scene = build(
            r#"{"objects": [
                {"type": "Sphere"},
                {"type": "cylinder"},
                {"type": " PYRAMID "}
            ]}"#,
        );

        assert_eq!(scene.meshes[0].geometry, GeometryKind::Sphere);
        assert_eq!(scene.meshes[1].geometry, GeometryKind::Cylinder);
        assert_eq!(scene.meshes[2].geometry, GeometryKind::Pyramid);
    }

    #[test]
    fn test_unknown_material_uses_object_color() {
        let scene = build(r##"{"objects": [{"material": "marble", "color": "#123456"}]}"##);

        assert_eq!(scene.meshes[0].material.color, Rgb::from_hex(0x123456));
        assert!(!scene.meshes[0].material.is_transparent());
    }

    #[test]
    fn test_unknown_material_without_color_is_white() {
        let scene = build(r#"{"objects": [{"material": "marble"}]}"#);

        assert_eq!(scene.meshes[0].material.color, Rgb::WHITE);
    }

    #[test]
    fn test_palette_material_wins_over_color() {
        let scene = build(r##"{"objects": [{"material": "dome", "color": "#000000"}]}"##);

        assert_eq!(scene.meshes[0].material.color, Rgb::from_hex(0xdaa520));
    }

    #[test]
    fn test_mesh_count_is_objects_plus_ground() {
        for n in [0usize, 1, 7, 40] {
            let objects: Vec<String> = (0..n)
                .map(|i| format!(r#"{{"name": "Obj{}", "type": "box"}}"#, i))
                .collect();
            let json = format!(r#"{{"objects": [{}]}}"#, objects.join(","));
            let scene = build(&json);

            assert_eq!(scene.mesh_count(), n + 1);
            assert!(scene.ground().is_some());
        }
    }

    #[test]
    fn test_malformed_objects_still_counted() {
        let scene = build(r#"{"objects": [{"name": "Ok"}, 17, "junk", null]}"#);

        assert_eq!(scene.mesh_count(), 5);
        assert_eq!(scene.meshes[1].geometry, GeometryKind::Box);
        assert_eq!(scene.meshes[1].position, Vec3::ZERO);
        assert_eq!(scene.meshes[1].scale, Vec3::ONE);
    }

    #[test]
    fn test_default_camera() {
        let scene = build(r#"{"objects": []}"#);

        assert_eq!(scene.camera.position, Vec3::new(15.0, -15.0, 10.0));
        assert_eq!(scene.camera.target, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_partial_camera_keeps_other_default() {
        let scene = build(r#"{"camera": {"position": [1, 2, 3]}}"#);

        assert_eq!(scene.camera.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.camera.target, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_default_sun_position() {
        for json in [r#"{}"#, r#"{"lighting": {}}"#, r#"{"lighting": {"sun": "bright"}}"#] {
            let scene = build(json);

            assert_eq!(scene.sun.position, Vec3::new(10.0, 10.0, 20.0), "{}", json);
            assert!(scene.sun.cast_shadow);
        }
    }

    #[test]
    fn test_lighting_intensities() {
        let scene = build(r#"{"lighting": {"sun": {"intensity": 0.4}, "ambient": {"intensity": 0.2}}}"#);

        assert_relative_eq!(scene.sun.intensity, 0.4);
        assert_relative_eq!(scene.ambient.intensity, 0.2);
    }

    #[test]
    fn test_ground_plane() {
        let scene = build(r#"{"objects": [{"name": "Wall"}]}"#);
        let ground = scene.ground().unwrap();

        assert_eq!(ground.geometry, GeometryKind::Plane);
        assert_relative_eq!(ground.position.y, -0.5);
        assert!(!ground.cast_shadow);
        assert!(ground.receive_shadow);
        assert_eq!(ground.material.color, Rgb::from_hex(0x90ee90));
    }

    #[test]
    fn test_objects_cast_and_receive_shadows() {
        let scene = build(r#"{"objects": [{"name": "Wall"}, {"name": "Roof", "type": "pyramid"}]}"#);

        for node in &scene.meshes[..2] {
            assert!(node.cast_shadow);
            assert!(node.receive_shadow);
        }
    }

    #[test]
    fn test_object_transform_applied_verbatim() {
        let scene = build(r#"{"objects": [{"position": [1, 2, 3], "scale": [4, 5, 6]}]}"#);
        let node = &scene.meshes[0];

        assert_eq!(node.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(node.scale, Vec3::new(4.0, 5.0, 6.0));
        let origin = node.local_transform().transform_point3(Vec3::ZERO);
        assert_relative_eq!(origin.x, 1.0);
        assert_relative_eq!(origin.z, 3.0);
    }

    #[test]
    fn test_background_and_aspect() {
        let description = SceneDescription::default();
        let scene = Scene::build(
            &description,
            ViewportSize::new(1200, 600),
            &MaterialPalette::standard(),
            &ViewerConfig::default(),
        );

        assert_eq!(scene.background, Rgb::from_hex(0x87ceeb));
        assert_relative_eq!(scene.camera.aspect, 2.0);
    }
}
