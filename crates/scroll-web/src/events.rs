use crate::dom;
use scroll_core::{pick_entered, ScrollState, VisibilityTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll bridge: seed the shared state from the container's current offset
/// so the first frame never reads an uninitialized value, then write the
/// latest offset on every scroll event. No coalescing; last value wins.
pub fn wire_scroll(scroll_area: &web::Element, scroll: Rc<RefCell<ScrollState>>) {
    scroll.borrow_mut().set(scroll_area.scroll_top() as f32);

    let area = scroll_area.clone();
    let closure = Closure::wrap(Box::new(move || {
        scroll.borrow_mut().set(area.scroll_top() as f32);
    }) as Box<dyn FnMut()>);
    let _ = scroll_area
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the canvas backing store in step with window resizes.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Visibility notifier: one IntersectionObserver over all overlay panels,
/// default threshold (any visible pixel). Each entry feeds that section's
/// edge detector; of the sections that entered in this batch, the topmost
/// one's background is written to the document body.
pub fn wire_section_observer(
    document: &web::Document,
    panels: &[web::Element],
    backgrounds: Vec<String>,
    trackers: Rc<RefCell<Vec<VisibilityTracker>>>,
) -> anyhow::Result<()> {
    let doc = document.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let mut entered: Vec<usize> = Vec::new();
            {
                let mut trackers = trackers.borrow_mut();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(index) = entry
                        .target()
                        .get_attribute("data-section")
                        .and_then(|s| s.parse::<usize>().ok())
                    else {
                        log::warn!("observer entry without a section index");
                        continue;
                    };
                    if let Some(tracker) = trackers.get_mut(index) {
                        if tracker.update(entry.is_intersecting()) {
                            entered.push(index);
                        }
                    }
                }
            }
            if let Some(index) = pick_entered(&entered) {
                dom::set_body_background(&doc, &backgrounds[index]);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("IntersectionObserver error: {e:?}"))?;
    for panel in panels {
        observer.observe(panel);
    }
    callback.forget();
    Ok(())
}

/// Interactive variant: clicking a panel toggles its section's local active
/// flag, read by the frame loop to scale the object.
pub fn wire_panel_click(panel: &web::Element, index: usize, active: Rc<RefCell<Vec<bool>>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        if let Some(flag) = active.borrow_mut().get_mut(index) {
            *flag = !*flag;
        }
    }) as Box<dyn FnMut(_)>);
    let _ = panel.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
