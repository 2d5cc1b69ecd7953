// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live layout measurements consumed by the solver.
//!
//! [`LayerMeasurements`] is a plain snapshot of everything the solver needs
//! for one layer. [`measure`] gathers a snapshot from a [`Host`] and a
//! classified [`LayerSlot`]; the solver itself never touches the host.

use kurbo::Size;

use crate::classify::LayerSlot;
use crate::host::Host;

/// Measurements for one layer at one instant.
///
/// Boundary defaults when a cover is absent: `parallax_start` falls back to
/// `0` (top of the container) and `parallax_end` to the container's full
/// offset height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerMeasurements {
    /// Explicit depth rate from the layer's marker; `0.0` means inferred.
    pub rate: f64,
    /// The layer element's offset height.
    pub height: f64,
    /// Client size of the clip ancestor (the visible viewport).
    pub viewport: Size,
    /// Scrollbar width of the clip ancestor (offset width minus client
    /// width). Forced to `0` for sticky layers.
    pub scrollbar: f64,
    /// Full scrollable content height of the clip ancestor.
    pub scroll_height: f64,
    /// Bottom edge of the previous cover, or `0`.
    pub parallax_start: f64,
    /// Top edge of the next cover, or the container's offset height.
    pub parallax_end: f64,
    /// Whether the layer uses the sticky layout strategy.
    pub sticky: bool,
}

/// Reads the current measurements for a classified layer from the host.
#[must_use]
pub fn measure<H: Host>(host: &H, slot: &LayerSlot<H::Node>) -> LayerMeasurements {
    let parallax_start = slot
        .previous_cover
        .as_ref()
        .map_or(0.0, |cover| host.offset_top(cover) + host.offset_height(cover));
    let parallax_end = slot
        .next_cover
        .as_ref()
        .map_or_else(|| host.offset_height(&slot.container), |cover| host.offset_top(cover));
    let scrollbar = if slot.sticky {
        0.0
    } else {
        host.offset_width(&slot.clip) - host.client_width(&slot.clip)
    };

    LayerMeasurements {
        rate: host.rate(&slot.node),
        height: host.offset_height(&slot.node),
        viewport: Size::new(host.client_width(&slot.clip), host.client_height(&slot.clip)),
        scrollbar,
        scroll_height: host.scroll_height(&slot.clip),
        parallax_start,
        parallax_end,
        sticky: slot.sticky,
    }
}
