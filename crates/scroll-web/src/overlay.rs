//! Overlay panels rendered into the shared portal mount. The portal sits
//! sticky over the canvas; each panel is translated every frame so its copy
//! tracks the section object through the same scroll smoothing.

use web_sys as web;

/// Build one `div.container > h1.title` panel and append it to the portal.
/// The `data-section` index is how observer callbacks find their section.
pub fn build_panel(
    document: &web::Document,
    portal: &web::Element,
    index: usize,
    title: &str,
) -> anyhow::Result<web::Element> {
    let panel = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    panel.set_class_name("container");
    let _ = panel.set_attribute("data-section", &index.to_string());

    let heading = document
        .create_element("h1")
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    heading.set_class_name("title");
    heading.set_text_content(Some(title));

    panel
        .append_child(&heading)
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    portal
        .append_child(&panel)
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    Ok(panel)
}

/// Pin a panel to its section's world-space Y. World +Y is up, CSS +Y is
/// down, hence the sign flip.
pub fn sync_panel(panel: &web::Element, world_y: f32, css_px_per_world: f32) {
    let px = -world_y * css_px_per_world;
    let _ = panel.set_attribute(
        "style",
        &format!("transform:translate3d(0,{px:.1}px,0)"),
    );
}
