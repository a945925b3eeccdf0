//! Page-level entry points.
//!
//! Loading the wasm module only installs logging and the panic hook; it does
//! not mount anything. The page calls `mountSliders()` once the DOM is ready
//! and keeps the returned [`Sliders`] handle for as long as the sliders should
//! stay live. `teardown()` (or `free()` on the JS side) detaches them all.
//! Mounting twice binds every container twice, so call it once per page.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::selectors;
use crate::widget::Slider;

/// Every slider mounted on a page.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct Sliders {
    mounted: Vec<Slider>,
}

#[wasm_bindgen]
impl Sliders {
    /// Number of live sliders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    #[must_use]
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }

    /// Step every slider one item forward.
    #[wasm_bindgen(js_name = advanceAll)]
    pub fn advance_all(&self) {
        self.mounted.iter().for_each(Slider::advance);
    }

    /// Step every slider one item back.
    #[wasm_bindgen(js_name = retreatAll)]
    pub fn retreat_all(&self) {
        self.mounted.iter().for_each(Slider::retreat);
    }

    /// Re-measure every slider after the page changes their cards.
    #[wasm_bindgen(js_name = refreshAll)]
    pub fn refresh_all(&self) {
        for slider in &self.mounted {
            slider.recompute_item_extent();
            slider.recompute_control_state();
        }
    }

    /// Detach all sliders from the page.
    pub fn teardown(&mut self) {
        let count = self.mounted.len();
        self.mounted.drain(..).for_each(Slider::teardown);
        log::info!("tore down {count} slider(s)");
    }
}

impl Sliders {
    /// Mount a slider on every recognized container in `document`.
    ///
    /// A container matched by several selectors is mounted once. Containers
    /// that cannot be mounted are logged and skipped.
    #[must_use]
    pub fn mount_in(document: &Document) -> Self {
        let containers: Vec<Element> = match document.query_selector_all(&selectors::group(selectors::CONTAINER)) {
            Ok(list) => selectors::nodes(&list),
            Err(err) => {
                log::warn!("slider container query failed: {err:?}");
                Vec::new()
            }
        };

        let mut mounted = Vec::with_capacity(containers.len());
        for container in containers {
            match Slider::mount(container.clone()) {
                Ok(slider) => mounted.push(slider),
                Err(err) => log::warn!("skipping slider container {}: {err}", describe(&container)),
            }
        }

        if mounted.is_empty() {
            log::info!("no sliders found; selectors checked: {:?}", selectors::CONTAINER);
        } else {
            log::info!("mounted {} slider(s)", mounted.len());
        }
        Self { mounted }
    }
}

/// Short tag/id/class summary of an element for log lines.
fn describe(element: &Element) -> String {
    let mut out = element.tag_name().to_lowercase();
    let id = element.id();
    if !id.is_empty() {
        out.push('#');
        out.push_str(&id);
    }
    for class in element.class_name().split_whitespace() {
        out.push('.');
        out.push_str(class);
    }
    out
}

/// Install the panic hook and console logger. Runs when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {err}");
    }
}

/// Mount every slider on the current page.
///
/// ```js
/// import init, { mountSliders } from "./card_slider.js";
///
/// await init();
/// document.addEventListener("DOMContentLoaded", () => {
///     window.sliders = mountSliders();
/// });
/// ```
#[wasm_bindgen(js_name = mountSliders)]
pub fn mount_sliders() -> Sliders {
    match web_sys::window().and_then(|window| window.document()) {
        Some(document) => Sliders::mount_in(&document),
        None => {
            log::warn!("no document available; sliders not mounted");
            Sliders::default()
        }
    }
}
