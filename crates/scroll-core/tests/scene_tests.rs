use scroll_core::{hex_to_rgb, Camera, SceneConfig, SceneParams, CAMERA_Z};

const EPS: f32 = 1e-3;

#[test]
fn config_rejects_fewer_than_two_sections() {
    assert!(SceneConfig::new(0, 3, 1.0).is_err());
    assert!(SceneConfig::new(1, 3, 1.0).is_err());
    assert!(SceneConfig::new(2, 3, 1.0).is_ok());
}

#[test]
fn config_rejects_degenerate_zoom() {
    assert!(SceneConfig::new(3, 3, 0.0).is_err());
    assert!(SceneConfig::new(3, 3, -1.0).is_err());
    assert!(SceneConfig::new(3, 3, f32::NAN).is_err());
    assert!(SceneConfig::new(3, 3, 1.0).is_ok());
}

#[test]
fn default_config_is_valid() {
    let config = SceneConfig::default();
    assert!(SceneConfig::new(config.sections, config.pages, config.zoom).is_ok());
    assert_eq!(config.sections, 3);
    assert_eq!(config.pages, 3);
}

#[test]
fn landing_scene_has_three_descending_sections() {
    let scene = SceneParams::landing().unwrap();
    assert_eq!(scene.sections.len() as u32, scene.config.sections);
    // anchors run top to bottom
    for pair in scene.sections.windows(2) {
        assert!(pair[0].anchor_y > pair[1].anchor_y);
    }
}

#[test]
fn landing_palette_is_distinct_per_section() {
    let scene = SceneParams::landing().unwrap();
    for i in 0..scene.sections.len() {
        for j in i + 1..scene.sections.len() {
            assert_ne!(scene.sections[i].background, scene.sections[j].background);
            assert_ne!(scene.sections[i].model_color, scene.sections[j].model_color);
        }
        // a section's object never matches the background behind it
        assert_ne!(
            scene.sections[i].model_color,
            scene.sections[i].background
        );
    }
}

#[test]
fn hex_to_rgb_parses_the_palette() {
    let rgb = hex_to_rgb("#f15946");
    assert!((rgb[0] - 241.0 / 255.0).abs() < EPS);
    assert!((rgb[1] - 89.0 / 255.0).abs() < EPS);
    assert!((rgb[2] - 70.0 / 255.0).abs() < EPS);

    assert_eq!(hex_to_rgb("#000000"), [0.0, 0.0, 0.0]);
    assert_eq!(hex_to_rgb("#ffffff"), [1.0, 1.0, 1.0]);
}

#[test]
fn hex_to_rgb_falls_back_to_white() {
    assert_eq!(hex_to_rgb(""), [1.0, 1.0, 1.0]);
    assert_eq!(hex_to_rgb("#123"), [1.0, 1.0, 1.0]);
    assert_eq!(hex_to_rgb("#gggggg"), [1.0, 1.0, 1.0]);
}

#[test]
fn camera_viewport_size_matches_fov_geometry() {
    let camera = Camera::landing(2.0);
    let (width, height) = camera.viewport_size();
    // h = 2 * z * tan(fov / 2), fov 70 degrees at z = 120
    let expected = 2.0 * CAMERA_Z * (35.0_f32.to_radians()).tan();
    assert!((height - expected).abs() < 0.1);
    assert!((width - expected * 2.0).abs() < 0.1);
}
