// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! Midground splits platform-specific work into *backend* crates. The engine
//! itself never touches a real document; everything it needs from the
//! platform is expressed on the [`Host`] trait:
//!
//! - **Layout queries** — Computed overflow, offset/client/scroll geometry,
//!   sibling navigation, marker attributes, and the momentum-scroll
//!   capability flag of the clip ancestor.
//!
//! - **Layout mutations** — Per-layer transforms and visibility, perspective
//!   and transform-stacking styles on ancestors, sticky pinning, child
//!   reordering, and the one-shot document compatibility shim.
//!
//! Both DOM-based hosts and test doubles implement this trait, so the
//! classifier and solver run unchanged against either.
//!
//! # Crate boundaries
//!
//! `midground_core` owns the data model, classification, solving, and this
//! contract module. Backend crates depend on `midground_core` and provide
//! platform glue (element handles, computed-style lookups, event listeners).
//! Application code depends on both and wires them together at page setup.

use crate::transform::ParallaxTransform;

/// Computed overflow behavior of an element, as far as the engine cares.
///
/// The classifier only distinguishes `overflow: visible` from everything
/// else: a layer's container must not clip (so perspective can apply), while
/// the clip ancestor must.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// `overflow: visible` — content is not clipped.
    Visible,
    /// Any other computed overflow (`hidden`, `auto`, `scroll`, ...).
    Clipped,
}

/// Platform surface the engine classifies against and writes transforms to.
///
/// `Node` is an opaque element handle. Hosts with cheap copyable handles
/// (arena indices) and hosts with reference-counted handles (DOM elements)
/// both fit; the engine only clones and compares them.
pub trait Host {
    /// Opaque element handle.
    type Node: Clone + PartialEq + core::fmt::Debug;

    // -- Layout queries --

    /// Returns the parent element, if any.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Returns the previous element sibling, if any.
    fn prev_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Returns the next element sibling, if any.
    fn next_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Returns the computed overflow of an element.
    fn overflow(&self, node: &Self::Node) -> Overflow;

    /// Returns the element's offset from the top of its offset parent.
    fn offset_top(&self, node: &Self::Node) -> f64;

    /// Returns the element's offset height (border box).
    fn offset_height(&self, node: &Self::Node) -> f64;

    /// Returns the element's offset width (border box).
    fn offset_width(&self, node: &Self::Node) -> f64;

    /// Returns the element's client width (excludes scrollbar).
    fn client_width(&self, node: &Self::Node) -> f64;

    /// Returns the element's client height (excludes scrollbar).
    fn client_height(&self, node: &Self::Node) -> f64;

    /// Returns the element's full scrollable content height.
    fn scroll_height(&self, node: &Self::Node) -> f64;

    /// Whether the element scrolls with platform momentum behavior that
    /// conflicts with 3D transform stacking (forces the sticky strategy).
    fn momentum_scroll(&self, node: &Self::Node) -> bool;

    /// Whether the element carries the parallax layer marker.
    fn is_layer(&self, node: &Self::Node) -> bool;

    /// Whether the element carries the depth-boundary ("cover") marker.
    fn is_cover(&self, node: &Self::Node) -> bool;

    /// Returns the element's explicit depth rate.
    ///
    /// `0.0` when the marker carries no value, the value does not parse, or
    /// it parses to NaN; the solver then infers depth from cover geometry
    /// instead.
    fn rate(&self, node: &Self::Node) -> f64;

    // -- Layout mutations --

    /// Overwrites the element's visual transform.
    fn set_transform(&mut self, node: &Self::Node, transform: &ParallaxTransform);

    /// Applies perspective styling to an ancestor:
    /// `perspective-origin: bottom right` with a 1px perspective distance.
    fn set_perspective(&mut self, node: &Self::Node);

    /// Enables preserved-3D transform stacking (`transform-style:
    /// preserve-3d`) on a layer's container. Non-sticky strategy only.
    fn set_preserve_3d(&mut self, node: &Self::Node);

    /// Anchors the element's transform origin at `bottom right`, matching
    /// the perspective origin.
    fn set_transform_origin(&mut self, node: &Self::Node);

    /// Pins the element to the top of its scrolling context
    /// (`position: sticky; top: 0`). Sticky strategy only.
    fn pin_sticky(&mut self, node: &Self::Node);

    /// Shows or hides the element.
    fn set_visible(&mut self, node: &Self::Node, visible: bool);

    /// Reinserts the element as the first child of its parent so depth
    /// stacking renders in painter's order under the chosen perspective.
    fn reorder_first(&mut self, node: &Self::Node);

    /// Ensures the one-shot document-level compatibility shim is in place
    /// (a transform on the document body plus a 1×1 fixed-position marker
    /// element, needed by one rendering engine). Must be idempotent:
    /// repeated calls on the same document are no-ops.
    fn ensure_compat_shim(&mut self);
}
