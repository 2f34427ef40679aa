use crate::constants::SLOW_FRAME_WARN_MS;
use crate::{dom, overlay, render};
use instant::Instant;
use scroll_core::{
    base_offset_y, compute_layout, hex_to_rgb, resolve_offsets, Camera, SceneParams,
    ScrollState, SectionDescriptor, SectionMotion, SectionParams, ViewportInput,
    ACTIVE_SCALE, MODEL_BASE_SCALE, MODEL_Y_OFFSET, ROTATION_PER_FRAME,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-section mutable state carried across frames.
pub struct SectionRuntime {
    pub descriptor: SectionDescriptor,
    pub params: SectionParams,
    pub motion: SectionMotion,
    pub rotation: f32,
}

pub struct FrameContext<'a> {
    pub scene: SceneParams,
    pub sections: Vec<SectionRuntime>,
    pub scroll: Rc<RefCell<ScrollState>>,
    pub active: Rc<RefCell<Vec<bool>>>,
    pub canvas: web::HtmlCanvasElement,
    pub panels: Vec<web::Element>,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl FrameContext<'_> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_ms = (now - self.last_instant).as_secs_f32() * 1000.0;
        self.last_instant = now;
        if dt_ms > SLOW_FRAME_WARN_MS {
            log::warn!("slow frame: {dt_ms:.0}ms");
        }

        let width = self.canvas.width();
        let height = self.canvas.height();
        let camera = Camera::landing(width as f32 / (height.max(1)) as f32);
        let (viewport_width, viewport_height) = camera.viewport_size();
        let layout = compute_layout(
            &self.scene.config,
            ViewportInput {
                viewport_width,
                viewport_height,
                screen_width: width as f32,
                screen_height: height as f32,
            },
        );

        let scroll_top = self.scroll.borrow().top();
        let descriptors: Vec<SectionDescriptor> =
            self.sections.iter().map(|s| s.descriptor).collect();
        let offsets = resolve_offsets(&descriptors, layout.default_offset());

        // Overlay translation works in CSS pixels, not backing-store pixels
        let css_px_per_world = (height as f32 / dom::device_pixel_ratio()) / viewport_height;

        let active = self.active.borrow();
        let mut instances = Vec::with_capacity(self.sections.len());
        for (i, section) in self.sections.iter_mut().enumerate() {
            section.rotation += ROTATION_PER_FRAME;
            let cur_y = section.motion.step(
                scroll_top,
                layout.aspect,
                self.scene.config.zoom,
                section.descriptor.factor,
            );
            let base_y = base_offset_y(layout.section_height, offsets[i], section.descriptor.factor);
            let world_y = section.params.anchor_y + base_y + cur_y;

            let is_active =
                self.scene.interactive && active.get(i).copied().unwrap_or(false);
            let scale = MODEL_BASE_SCALE * if is_active { ACTIVE_SCALE } else { 1.0 };
            let rgb = hex_to_rgb(section.params.model_color);
            instances.push(render::Instance {
                pos: [0.0, world_y + MODEL_Y_OFFSET, 0.0],
                rot_y: section.rotation,
                scale,
                color: [rgb[0], rgb[1], rgb[2], 1.0],
            });

            if let Some(panel) = self.panels.get(i) {
                overlay::sync_panel(panel, world_y, css_px_per_world);
            }
        }
        drop(active);

        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(width, height);
            if let Err(e) = gpu.render(&camera, &instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Continuous render loop driven by requestAnimationFrame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
