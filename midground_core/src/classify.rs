// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layer classifier.
//!
//! [`classify`] scans a flat list of parallax-marked elements once and
//! produces an ordered list of immutable [`LayerSlot`] descriptors plus a
//! global sticky flag. For each element it:
//!
//! 1. Resolves the container (parent) and clip ancestor (grandparent) and
//!    validates their overflow configuration. A clipping container excludes
//!    the element (config error, layer left untransformed); an unclipped
//!    clip ancestor is only a warning.
//! 2. Decides the layout strategy. Stickiness is a fold accumulator over the
//!    scan: once any layer requires it (the clip ancestor exhibits
//!    momentum-scroll behavior that conflicts with 3D transform stacking),
//!    every subsequently classified layer is sticky too. Sticky layers get
//!    perspective on their container and are pinned to the top of the
//!    scrolling context; non-sticky layers get preserve-3d on the container
//!    and perspective on the clip ancestor.
//! 3. Locates the bounding covers by walking the layer's siblings: backward
//!    past any contiguous parallax-marked siblings for the start boundary,
//!    forward to the nearest cover-marked sibling for the end boundary.
//!
//! Covers are recorded as plain relations; the classifier computes them once
//! and the solver only reads them.

use alloc::vec::Vec;

use crate::diag::{
    ConfigError, ConfigErrorEvent, ConfigWarning, ConfigWarningEvent, DiagSink,
    LayerClassifiedEvent,
};
use crate::host::{Host, Overflow};

/// One classified parallax layer. Immutable after classification.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerSlot<N> {
    /// The element this slot controls.
    pub node: N,
    /// The layer's container (its parent; must not clip).
    pub container: N,
    /// The clip ancestor (the container's parent; the scrolling element).
    pub clip: N,
    /// Offset-from-top at classification time. Diagnostic only; the solver
    /// never reads it.
    pub initial_top: f64,
    /// Whether this layer uses the sticky layout strategy.
    pub sticky: bool,
    /// Nearest preceding non-parallax sibling (the start boundary), if any.
    pub previous_cover: Option<N>,
    /// Nearest following cover-marked sibling (the end boundary), if any.
    pub next_cover: Option<N>,
}

/// The output of one classification run.
#[derive(Clone, Debug)]
pub struct Classification<N> {
    /// Classified layers, in scan order.
    pub slots: Vec<LayerSlot<N>>,
    /// Whether the sticky strategy was required by any layer (and therefore
    /// by every layer classified after it).
    pub sticky: bool,
}

/// Classifies the marked elements under `scope` into layer slots.
///
/// Elements that fail configuration validation are skipped (reported through
/// `diag`, never fatal) and produce no slot; the remaining elements are
/// still processed. Perspective, stacking, and pinning styles are applied as
/// a side effect of classification.
pub fn classify<H: Host>(
    host: &mut H,
    scope: &H::Node,
    marked: &[H::Node],
    diag: &mut dyn DiagSink,
) -> Classification<H::Node> {
    let mut slots = Vec::with_capacity(marked.len());
    let mut sticky = false;

    for (element_index, element) in marked.iter().enumerate() {
        let Some(container) = host.parent(element) else {
            diag.on_config_error(&ConfigErrorEvent {
                element_index,
                error: ConfigError::MissingAncestor,
            });
            continue;
        };
        if host.overflow(&container) != Overflow::Visible {
            diag.on_config_error(&ConfigErrorEvent {
                element_index,
                error: ConfigError::ClippedContainer,
            });
            continue;
        }
        let Some(clip) = host.parent(&container) else {
            diag.on_config_error(&ConfigErrorEvent {
                element_index,
                error: ConfigError::MissingAncestor,
            });
            continue;
        };
        // Only a single overflow clip is tracked per run.
        if clip != *scope {
            diag.on_config_warning(&ConfigWarningEvent {
                element_index,
                warning: ConfigWarning::ForeignClip,
            });
        }
        if host.overflow(&clip) == Overflow::Visible {
            diag.on_config_warning(&ConfigWarningEvent {
                element_index,
                warning: ConfigWarning::UnclippedAncestor,
            });
        }

        if sticky || host.momentum_scroll(&clip) {
            sticky = true;
            host.set_perspective(&container);
        } else {
            host.set_preserve_3d(&container);
            host.set_perspective(&clip);
        }
        if sticky {
            host.pin_sticky(element);
        }
        host.set_transform_origin(element);

        let previous_cover = find_previous_cover(host, element);
        let next_cover = find_next_cover(host, element);

        diag.on_layer_classified(&LayerClassifiedEvent {
            layer_index: slots.len(),
            sticky,
            has_previous_cover: previous_cover.is_some(),
            has_next_cover: next_cover.is_some(),
        });
        slots.push(LayerSlot {
            node: element.clone(),
            initial_top: host.offset_top(element),
            container,
            clip,
            sticky,
            previous_cover,
            next_cover,
        });
    }

    Classification { slots, sticky }
}

/// Walks backward through siblings, skipping any that are themselves
/// parallax-marked, to the nearest non-parallax preceding sibling.
fn find_previous_cover<H: Host>(host: &H, element: &H::Node) -> Option<H::Node> {
    let mut cursor = host.prev_sibling(element);
    while let Some(node) = cursor {
        if !host.is_layer(&node) {
            return Some(node);
        }
        cursor = host.prev_sibling(&node);
    }
    None
}

/// Walks forward through siblings to the nearest one flagged as a cover.
fn find_next_cover<H: Host>(host: &H, element: &H::Node) -> Option<H::Node> {
    let mut cursor = host.next_sibling(element);
    while let Some(node) = cursor {
        if host.is_cover(&node) {
            return Some(node);
        }
        cursor = host.next_sibling(&node);
    }
    None
}
