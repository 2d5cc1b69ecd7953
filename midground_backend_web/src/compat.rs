// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-level compatibility shim.
//!
//! One rendering engine (EdgeHTML) only renders the parallax effect
//! correctly while scrolling if the document body carries a transform and a
//! fixed-position element exists in the document. See
//! <https://developer.microsoft.com/en-us/microsoft-edge/platform/issues/5084491/>.
//!
//! [`ensure`] installs both pieces at most once per document; repeated calls
//! are no-ops (the probe element doubles as the installed-marker).

use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement, Window};

/// Attribute marking the probe element, and the idempotence guard.
const PROBE_ATTR: &str = "data-parallax-probe";

/// Installs the compatibility shim if this document does not have it yet.
pub(crate) fn ensure(window: &Window, document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let already = document
        .query_selector(&alloc::format!("[{PROBE_ATTR}]"))
        .ok()
        .flatten()
        .is_some();
    if already {
        return;
    }

    // Never clobber an existing body transform.
    let body_transform = window
        .get_computed_style(&body)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("transform").ok())
        .unwrap_or_default();
    if body_transform == "none" {
        let _ = body.style().set_property("transform", "translateZ(0)");
    }

    let Ok(probe) = document.create_element("div") else {
        return;
    };
    let _ = probe.set_attribute(PROBE_ATTR, "");
    let probe: HtmlElement = probe.unchecked_into();
    let s = probe.style();
    let _ = s.set_property("position", "fixed");
    let _ = s.set_property("top", "0");
    let _ = s.set_property("width", "1px");
    let _ = s.set_property("height", "1px");
    let _ = s.set_property("z-index", "1");
    let _ = body.insert_before(&probe, body.first_child().as_ref());
}
