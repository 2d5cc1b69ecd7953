// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM host implementation.
//!
//! [`DomHost`] answers the engine's layout queries from computed styles and
//! offset geometry, and applies its layout mutations as inline styles. Node
//! handles are live `HtmlElement`s; equality is JS identity, so the engine's
//! slot relations point at the same elements marker discovery found.
//!
//! # Marker protocol
//!
//! - `parallax` attribute — marks a layer. An optional numeric value is the
//!   explicit depth rate; a missing or non-numeric value means the depth is
//!   inferred from cover geometry.
//! - `parallax-cover` attribute — marks a depth-boundary sibling.

use alloc::string::String;
use alloc::vec::Vec;

use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement, Window};

use midground_core::host::{Host, Overflow};
use midground_core::transform::ParallaxTransform;

use crate::compat;

/// The layer marker attribute (optional numeric rate value).
pub const LAYER_ATTR: &str = "parallax";

/// The depth-boundary marker attribute.
pub const COVER_ATTR: &str = "parallax-cover";

/// [`Host`] over the live document.
pub struct DomHost {
    window: Window,
    document: Document,
}

impl core::fmt::Debug for DomHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomHost").finish_non_exhaustive()
    }
}

impl DomHost {
    /// Creates a host over the current window's document.
    ///
    /// # Panics
    ///
    /// Panics outside a browsing context (no `window` or no `document`).
    #[must_use]
    pub fn new() -> Self {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        Self { window, document }
    }

    /// Returns the `parallax`-marked elements under `scope`, in document
    /// order — the scan list for classification.
    #[must_use]
    pub fn discover(&self, scope: &HtmlElement) -> Vec<HtmlElement> {
        let mut marked = Vec::new();
        let selector = alloc::format!("[{LAYER_ATTR}]");
        let Ok(list) = scope.query_selector_all(&selector) else {
            return marked;
        };
        for index in 0..list.length() {
            if let Some(node) = list.item(index)
                && let Ok(element) = node.dyn_into::<HtmlElement>()
            {
                marked.push(element);
            }
        }
        marked
    }

    /// Computed style property value, or empty when unavailable.
    fn computed(&self, element: &HtmlElement, property: &str) -> String {
        self.window
            .get_computed_style(element)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn as_html(element: Option<web_sys::Element>) -> Option<HtmlElement> {
        element.and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }
}

impl Default for DomHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for DomHost {
    type Node = HtmlElement;

    fn parent(&self, node: &HtmlElement) -> Option<HtmlElement> {
        Self::as_html(node.parent_element())
    }

    fn prev_sibling(&self, node: &HtmlElement) -> Option<HtmlElement> {
        Self::as_html(node.previous_element_sibling())
    }

    fn next_sibling(&self, node: &HtmlElement) -> Option<HtmlElement> {
        Self::as_html(node.next_element_sibling())
    }

    fn overflow(&self, node: &HtmlElement) -> Overflow {
        if self.computed(node, "overflow") == "visible" {
            Overflow::Visible
        } else {
            Overflow::Clipped
        }
    }

    fn offset_top(&self, node: &HtmlElement) -> f64 {
        f64::from(node.offset_top())
    }

    fn offset_height(&self, node: &HtmlElement) -> f64 {
        f64::from(node.offset_height())
    }

    fn offset_width(&self, node: &HtmlElement) -> f64 {
        f64::from(node.offset_width())
    }

    fn client_width(&self, node: &HtmlElement) -> f64 {
        f64::from(node.client_width())
    }

    fn client_height(&self, node: &HtmlElement) -> f64 {
        f64::from(node.client_height())
    }

    fn scroll_height(&self, node: &HtmlElement) -> f64 {
        f64::from(node.scroll_height())
    }

    fn momentum_scroll(&self, node: &HtmlElement) -> bool {
        // Any value of the legacy momentum-scroll property conflicts with
        // 3D transform stacking on that element.
        !self.computed(node, "-webkit-overflow-scrolling").is_empty()
    }

    fn is_layer(&self, node: &HtmlElement) -> bool {
        node.has_attribute(LAYER_ATTR)
    }

    fn is_cover(&self, node: &HtmlElement) -> bool {
        node.has_attribute(COVER_ATTR)
    }

    fn rate(&self, node: &HtmlElement) -> f64 {
        // "NaN" parses; treat it like an absent value.
        node.get_attribute(LAYER_ATTR)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|value| !value.is_nan())
            .unwrap_or(0.0)
    }

    fn set_transform(&mut self, node: &HtmlElement, transform: &ParallaxTransform) {
        let css = alloc::format!("{transform}");
        let _ = node.style().set_property("transform", &css);
    }

    fn set_perspective(&mut self, node: &HtmlElement) {
        let s = node.style();
        let _ = s.set_property("perspective-origin", "bottom right");
        let _ = s.set_property("perspective", "1px");
    }

    fn set_preserve_3d(&mut self, node: &HtmlElement) {
        let _ = node.style().set_property("transform-style", "preserve-3d");
    }

    fn set_transform_origin(&mut self, node: &HtmlElement) {
        let _ = node.style().set_property("transform-origin", "bottom right");
    }

    fn pin_sticky(&mut self, node: &HtmlElement) {
        let s = node.style();
        // Prefixed first; the unprefixed value wins where supported.
        let _ = s.set_property("position", "-webkit-sticky");
        let _ = s.set_property("position", "sticky");
        let _ = s.set_property("top", "0");
    }

    fn set_visible(&mut self, node: &HtmlElement, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let _ = node.style().set_property("display", display);
    }

    fn reorder_first(&mut self, node: &HtmlElement) {
        if let Some(parent) = node.parent_node() {
            let _ = parent.insert_before(node, parent.first_child().as_ref());
        }
    }

    fn ensure_compat_shim(&mut self) {
        compat::ensure(&self.window, &self.document);
    }
}
