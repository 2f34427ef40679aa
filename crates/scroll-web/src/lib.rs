#![cfg(target_arch = "wasm32")]
use instant::Instant;
use scroll_core::{SceneParams, ScrollState, SectionDescriptor, SectionMotion, VisibilityTracker, SECTION_DEPTH_FACTOR};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use constants::{CANVAS_ID, PORTAL_ID, SCROLL_AREA_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let scroll_area = dom::element_by_id(&document, SCROLL_AREA_ID)?;
    let portal = dom::element_by_id(&document, PORTAL_ID)?;

    events::wire_canvas_resize(&canvas);

    let scene = SceneParams::landing()?;
    log::info!(
        "scene: {} sections over {} pages",
        scene.sections.len(),
        scene.config.pages
    );

    // First section installs its background before any scrolling happens
    if let Some(first) = scene.sections.first() {
        dom::set_body_background(&document, first.background);
    }

    // Overlay panels into the shared portal mount
    let mut panels = Vec::with_capacity(scene.sections.len());
    for (i, section) in scene.sections.iter().enumerate() {
        panels.push(overlay::build_panel(&document, &portal, i, section.title)?);
    }

    // Scroll bridge: shared holder, seeded from the container, one writer
    let scroll = Rc::new(RefCell::new(ScrollState::default()));
    events::wire_scroll(&scroll_area, scroll.clone());

    // Visibility notifier over the overlay panels
    let trackers = Rc::new(RefCell::new(vec![
        VisibilityTracker::default();
        scene.sections.len()
    ]));
    let backgrounds: Vec<String> = scene
        .sections
        .iter()
        .map(|s| s.background.to_string())
        .collect();
    events::wire_section_observer(&document, &panels, backgrounds, trackers)?;

    // Click-to-scale toggle (interactive page variant)
    let active = Rc::new(RefCell::new(vec![false; scene.sections.len()]));
    if scene.interactive {
        for (i, panel) in panels.iter().enumerate() {
            events::wire_panel_click(panel, i, active.clone());
        }
    }

    let gpu = frame::init_gpu(&canvas).await;

    let sections = scene
        .sections
        .iter()
        .map(|params| frame::SectionRuntime {
            descriptor: SectionDescriptor {
                factor: SECTION_DEPTH_FACTOR,
                offset: None,
                parent: None,
            },
            params: params.clone(),
            motion: SectionMotion::default(),
            rotation: 0.0,
        })
        .collect();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        sections,
        scroll,
        active,
        canvas,
        panels,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
