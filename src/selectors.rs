//! Recognized markup markers.
//!
//! Pages in the wild mark sliders several different ways, so each role has an
//! ordered list of selectors. For tracks and controls the first selector that
//! matches wins; containers are gathered from all of them at once.

#[cfg(test)]
#[path = "selectors_test.rs"]
mod selectors_test;

use wasm_bindgen::JsCast;
use web_sys::{Element, NodeList};

/// Slider containers.
pub const CONTAINER: &[&str] = &["[data-slider]", ".card-slider", ".slider-container", ".carousel-container"];

/// The scrollable/translatable track inside a container, by preference.
pub const TRACK: &[&str] = &["[data-wrapper]", ".slider-track", ".card-grid"];

/// Item elements inside the track. When nothing matches, the track's direct
/// children are the items.
pub const ITEM: &str = ".card-item";

/// The "previous" control, by preference.
pub const PREV: &[&str] = &["[data-prev]", ".slider-nav.prev", ".prev", ".slider-prev"];

/// The "next" control, by preference.
pub const NEXT: &[&str] = &["[data-next]", ".slider-nav.next", ".next", ".slider-next"];

/// Join selectors into one selector group, e.g. for `querySelectorAll`.
///
/// A group query returns each element once, in document order, even when it
/// matches several members.
#[must_use]
pub fn group(selectors: &[&str]) -> String {
    selectors.join(", ")
}

/// First element under `root` matching the earliest selector in `selectors`.
///
/// An invalid selector counts as no match.
#[must_use]
pub fn first_match(root: &Element, selectors: &[&str]) -> Option<Element> {
    selectors
        .iter()
        .find_map(|selector| root.query_selector(selector).unwrap_or_default())
}

/// Every element under `root` matching `selector`, in document order, that is a `T`.
///
/// An invalid selector yields nothing.
#[must_use]
pub fn all_matches<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    match root.query_selector_all(selector) {
        Ok(list) => nodes(&list),
        Err(err) => {
            log::debug!("querySelectorAll({selector}) failed: {err:?}");
            Vec::new()
        }
    }
}

/// The members of `list` that are a `T`.
#[must_use]
pub fn nodes<T: JsCast>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .flat_map(|node| node.dyn_into::<T>())
        .collect()
}
