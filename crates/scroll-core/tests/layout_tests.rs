use scroll_core::{
    compute_layout, SceneConfig, ViewportInput, CONTENT_RATIO_DESKTOP, CONTENT_RATIO_MOBILE,
    MARGIN_RATIO_DESKTOP, MARGIN_RATIO_MOBILE, SECTION_OFFSET_DESKTOP, SECTION_OFFSET_MOBILE,
};

const EPS: f32 = 1e-5;

fn input(screen_width: f32) -> ViewportInput {
    ViewportInput {
        viewport_width: 168.0,
        viewport_height: 168.0,
        screen_width,
        screen_height: 900.0,
    }
}

#[test]
fn mobile_breakpoint_is_exclusive_at_700() {
    let config = SceneConfig::default();
    assert!(compute_layout(&config, input(699.0)).is_mobile);
    assert!(!compute_layout(&config, input(700.0)).is_mobile);
    assert!(!compute_layout(&config, input(701.0)).is_mobile);
    assert!(compute_layout(&config, input(1.0)).is_mobile);
    assert!(!compute_layout(&config, input(2560.0)).is_mobile);
}

#[test]
fn margin_and_content_ratios_match_device_category() {
    let config = SceneConfig::default();

    let mobile = compute_layout(&config, input(400.0));
    assert!((mobile.margin - mobile.canvas_width * MARGIN_RATIO_MOBILE).abs() < EPS);
    assert!(
        (mobile.content_max_width - mobile.canvas_width * CONTENT_RATIO_MOBILE).abs() < EPS
    );

    let desktop = compute_layout(&config, input(1440.0));
    assert!((desktop.margin - desktop.canvas_width * MARGIN_RATIO_DESKTOP).abs() < EPS);
    assert!(
        (desktop.content_max_width - desktop.canvas_width * CONTENT_RATIO_DESKTOP).abs() < EPS
    );
}

#[test]
fn section_height_equals_canvas_height_for_three_over_three() {
    // pages 3, sections 3: (pages - 1) / (sections - 1) == 1
    let config = SceneConfig::new(3, 3, 1.0).unwrap();
    let layout = compute_layout(&config, input(1200.0));
    assert!((layout.section_height - layout.canvas_height).abs() < EPS);
}

#[test]
fn section_height_scales_with_page_count() {
    let config = SceneConfig::new(3, 5, 1.0).unwrap();
    let layout = compute_layout(&config, input(1200.0));
    assert!((layout.section_height - layout.canvas_height * 2.0).abs() < EPS);
}

#[test]
fn zoom_divides_canvas_dimensions() {
    let config = SceneConfig::new(3, 3, 2.0).unwrap();
    let layout = compute_layout(&config, input(1200.0));
    assert!((layout.canvas_width - 168.0 / 2.0).abs() < EPS);
    assert!((layout.canvas_height - 168.0 / 2.0).abs() < EPS);
}

#[test]
fn aspect_relates_screen_pixels_to_viewport_units() {
    let config = SceneConfig::default();
    let layout = compute_layout(&config, input(1200.0));
    assert!((layout.aspect - 900.0 / 168.0).abs() < EPS);
}

#[test]
fn default_offset_follows_device_category() {
    let config = SceneConfig::default();
    assert_eq!(
        compute_layout(&config, input(400.0)).default_offset(),
        SECTION_OFFSET_MOBILE
    );
    assert_eq!(
        compute_layout(&config, input(1440.0)).default_offset(),
        SECTION_OFFSET_DESKTOP
    );
}

#[test]
fn layout_is_deterministic() {
    let config = SceneConfig::default();
    let a = compute_layout(&config, input(1024.0));
    let b = compute_layout(&config, input(1024.0));
    assert_eq!(a.section_height, b.section_height);
    assert_eq!(a.margin, b.margin);
    assert_eq!(a.aspect, b.aspect);
}

#[test]
fn degenerate_viewport_yields_non_finite_not_panic() {
    let config = SceneConfig::default();
    let layout = compute_layout(
        &config,
        ViewportInput {
            viewport_width: 168.0,
            viewport_height: 0.0,
            screen_width: 1200.0,
            screen_height: 900.0,
        },
    );
    assert!(!layout.aspect.is_finite());
}
