// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for midground.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomHost`]: the [`Host`] implementation over live `HtmlElement`s
//!   (computed styles, offset geometry, marker attributes, style mutations)
//! - [`EventBindings`]: window resize / scope scroll listener wiring
//! - [`ConsoleSink`]: diagnostics routed to the browser console
//! - [`initialize_parallax`]: one-call page setup combining all of the above
//!
//! [`Host`]: midground_core::host::Host

#![no_std]

extern crate alloc;

mod compat;
mod events;
mod host;

pub use events::EventBindings;
pub use host::{COVER_ATTR, DomHost, LAYER_ATTR};
pub use midground_core::host::Host;

use alloc::format;

use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

use midground_core::diag::{
    ConfigErrorEvent, ConfigWarningEvent, DegenerateGeometryEvent, DiagSink,
};

/// A [`DiagSink`] that reports to the browser console.
///
/// Configuration errors go to `console.error`, everything else to
/// `console.warn`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl DiagSink for ConsoleSink {
    fn on_config_error(&mut self, e: &ConfigErrorEvent) {
        web_sys::console::error_1(&js_message(&format!(
            "parallax element {} skipped: {:?}",
            e.element_index, e.error
        )));
    }

    fn on_config_warning(&mut self, e: &ConfigWarningEvent) {
        web_sys::console::warn_1(&js_message(&format!(
            "parallax element {}: {:?}",
            e.element_index, e.warning
        )));
    }

    fn on_degenerate_geometry(&mut self, e: &DegenerateGeometryEvent) {
        web_sys::console::warn_1(&js_message(&format!(
            "parallax layer {}: degenerate geometry ({:?}), transform unchanged",
            e.layer_index, e.degeneracy
        )));
    }
}

fn js_message(message: &str) -> JsValue {
    JsValue::from_str(message)
}

/// Sets up parallax for a scrolling scope and wires the event listeners.
///
/// Discovers the `parallax`-marked elements under `scope`, classifies them,
/// applies the initial transforms, and registers the resize/scroll handlers.
/// Diagnostics go to the browser console. Keep the returned
/// [`EventBindings`] alive for as long as the page section exists; dropping
/// it unregisters the listeners.
#[must_use]
pub fn initialize_parallax(scope: HtmlElement) -> EventBindings {
    EventBindings::install(scope, &mut ConsoleSink)
}
