use scroll_core::{
    base_offset_y, compute_layout, lerp, resolve_offsets, SceneConfig, SectionDescriptor,
    SectionMotion, ViewportInput, SCROLL_SMOOTHING,
};

const EPS: f32 = 1e-5;

fn desc(offset: Option<f32>, parent: Option<usize>) -> SectionDescriptor {
    SectionDescriptor {
        factor: 1.5,
        offset,
        parent,
    }
}

#[test]
fn smoothing_is_idempotent_at_the_fixed_point() {
    // cur_y == target: one step must leave it unchanged
    let target = SectionMotion::target(1800.0, 900.0 / 168.0, 1.0, 1.5);
    let mut motion = SectionMotion { cur_y: target };
    let stepped = motion.step(1800.0, 900.0 / 168.0, 1.0, 1.5);
    assert!((stepped - target).abs() < EPS);
}

#[test]
fn smoothing_covers_ten_percent_of_remaining_distance_per_step() {
    for start in [-1000.0, -1.0, 0.0, 3.5, 250.0, 1e6] {
        let mut motion = SectionMotion { cur_y: start };
        let target = SectionMotion::target(1800.0, 5.0, 1.0, 1.5);
        let before = (target - motion.cur_y).abs();
        motion.step(1800.0, 5.0, 1.0, 1.5);
        let after = (target - motion.cur_y).abs();
        let expected = before * (1.0 - SCROLL_SMOOTHING);
        assert!(
            (after - expected).abs() <= expected.abs() * 1e-5 + 1e-3,
            "start {start}: remaining went {before} -> {after}, expected {expected}"
        );
    }
}

#[test]
fn smoothing_monotonically_approaches_a_held_target() {
    let mut motion = SectionMotion { cur_y: -300.0 };
    let target = SectionMotion::target(1800.0, 5.0, 1.0, 1.5);
    let mut prev = (target - motion.cur_y).abs();
    for _ in 0..20 {
        motion.step(1800.0, 5.0, 1.0, 1.5);
        let remaining = (target - motion.cur_y).abs();
        assert!(remaining < prev);
        prev = remaining;
    }
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
    assert!((lerp(2.0, 10.0, 0.5) - 6.0).abs() < EPS);
}

#[test]
fn explicit_offset_is_kept() {
    let sections = [desc(Some(0.25), None), desc(Some(0.75), Some(0))];
    let offsets = resolve_offsets(&sections, 0.5);
    assert_eq!(offsets, vec![0.25, 0.75]);
}

#[test]
fn undeclared_offset_inherits_nearest_enclosing_section() {
    let sections = [
        desc(Some(0.25), None),
        desc(None, Some(0)),
        desc(None, Some(1)),
    ];
    let offsets = resolve_offsets(&sections, 0.5);
    assert_eq!(offsets[1], 0.25);
    // nested: inherits through the chain
    assert_eq!(offsets[2], 0.25);
}

#[test]
fn offset_without_parent_falls_back_to_root_default() {
    let sections = [desc(None, None), desc(None, Some(5))]; // out-of-order parent ignored
    let offsets = resolve_offsets(&sections, 0.5);
    assert_eq!(offsets, vec![0.5, 0.5]);
}

#[test]
fn base_offset_formula() {
    assert!((base_offset_y(168.0, 0.5, 1.5) - (-126.0)).abs() < EPS);
    assert_eq!(base_offset_y(168.0, 0.0, 1.5), 0.0);
}

#[test]
fn first_frame_at_rest_shows_only_the_static_base() {
    // scroll_top = 0 at mount: no scroll-induced displacement on frame one
    let config = SceneConfig::default();
    let layout = compute_layout(
        &config,
        ViewportInput {
            viewport_width: 168.0,
            viewport_height: 168.0,
            screen_width: 1200.0,
            screen_height: 900.0,
        },
    );
    let mut motion = SectionMotion::default();
    let cur_y = motion.step(0.0, layout.aspect, config.zoom, 1.5);
    assert_eq!(cur_y, 0.0);
    let base = base_offset_y(layout.section_height, layout.default_offset(), 1.5);
    let translation = base + cur_y;
    assert!((translation - base).abs() < EPS);
}

#[test]
fn fifty_frames_converge_on_the_scroll_target() {
    let config = SceneConfig::default();
    let layout = compute_layout(
        &config,
        ViewportInput {
            viewport_width: 168.0,
            viewport_height: 168.0,
            screen_width: 1200.0,
            screen_height: 900.0,
        },
    );
    // container scroll height for pages = 3 at 900px per page
    let scroll_top = 1800.0;
    let target = SectionMotion::target(scroll_top, layout.aspect, config.zoom, 1.5);

    let mut motion = SectionMotion::default();
    for _ in 0..50 {
        motion.step(scroll_top, layout.aspect, config.zoom, 1.5);
    }
    // 0.9^50 of the distance remains, about half a percent
    assert!(
        (motion.cur_y - target).abs() <= target.abs() * 0.006,
        "cur_y {} vs target {}",
        motion.cur_y,
        target
    );
}
