// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The parallax engine: slot ownership and the resize/scroll re-entry points.
//!
//! [`Engine::initialize`] runs classification once over a scope, solves every
//! layer's transform, and reorders each layer to be the first child of its
//! container (painter's order for depth stacking; the reorder happens after
//! the first solve pass). The resulting engine owns the ordered slot list;
//! membership is fixed until the engine is dropped.
//!
//! [`Engine::resize`] re-solves every slot against fresh measurements, in
//! classification order. It is idempotent: unchanged measurements produce
//! bit-identical transforms.
//!
//! [`Engine::scroll`] is the visibility hook. It currently marks every layer
//! visible; any future distance-based culling policy plugs in here without
//! touching the solver. The host is only written when a layer's recorded
//! visibility actually changes.
//!
//! Re-initializing over the same scope is not supported; only the host's
//! compatibility shim is guarded against repetition.

use alloc::vec;
use alloc::vec::Vec;

use crate::classify::{LayerSlot, classify};
use crate::diag::{DegenerateGeometryEvent, DiagSink};
use crate::host::Host;
use crate::layout::measure;
use crate::solve::solve;

/// A configured parallax engine for one scrolling scope.
///
/// All state is the transient slot list built at initialization; the engine
/// holds no reference to the host and can be driven by any host that yields
/// the same node handles.
pub struct Engine<H: Host> {
    scope: H::Node,
    slots: Vec<LayerSlot<H::Node>>,
    sticky: bool,
    /// Last visibility written per layer; `None` until the first scroll.
    visible: Vec<Option<bool>>,
}

// Manual impl: deriving would put a `Debug` bound on the host itself, which
// `Engine` never stores.
impl<H: Host> core::fmt::Debug for Engine<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Engine")
            .field("scope", &self.scope)
            .field("layers", &self.slots.len())
            .field("sticky", &self.sticky)
            .finish_non_exhaustive()
    }
}

impl<H: Host> Engine<H> {
    /// Classifies `marked` under `scope`, applies the initial transforms,
    /// and reorders each layer to the front of its container.
    ///
    /// Misconfigured elements are skipped and reported through `diag`; they
    /// produce no slot and are never touched again.
    pub fn initialize(
        host: &mut H,
        scope: H::Node,
        marked: &[H::Node],
        diag: &mut dyn DiagSink,
    ) -> Self {
        host.ensure_compat_shim();

        let classification = classify(host, &scope, marked, diag);
        let engine = Self {
            scope,
            visible: vec![None; classification.slots.len()],
            sticky: classification.sticky,
            slots: classification.slots,
        };

        engine.resize(host, diag);
        for slot in &engine.slots {
            host.reorder_first(&slot.node);
        }
        engine
    }

    /// Re-solves every layer against current measurements.
    ///
    /// Layers whose geometry is degenerate keep their previous transform;
    /// the condition is reported through `diag`.
    pub fn resize(&self, host: &mut H, diag: &mut dyn DiagSink) {
        for (layer_index, slot) in self.slots.iter().enumerate() {
            let measurements = measure(host, slot);
            match solve(&measurements) {
                Ok(transform) => host.set_transform(&slot.node, &transform),
                Err(degeneracy) => diag.on_degenerate_geometry(&DegenerateGeometryEvent {
                    layer_index,
                    degeneracy,
                }),
            }
        }
    }

    /// Scroll notification: updates layer visibility.
    ///
    /// Currently every layer is kept visible. Repainting hidden-then-shown
    /// images while scrolling can cause jank, so distance-based culling is
    /// left to a future policy at this re-entry point.
    pub fn scroll(&mut self, host: &mut H) {
        for (index, slot) in self.slots.iter().enumerate() {
            let visible = true;
            if self.visible[index] != Some(visible) {
                self.visible[index] = Some(visible);
                host.set_visible(&slot.node, visible);
            }
        }
    }

    /// The scrolling scope this engine was initialized over.
    #[must_use]
    pub fn scope(&self) -> &H::Node {
        &self.scope
    }

    /// The classified layers, in classification order.
    #[must_use]
    pub fn slots(&self) -> &[LayerSlot<H::Node>] {
        &self.slots
    }

    /// Whether the sticky layout strategy was required for this scope.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }
}
