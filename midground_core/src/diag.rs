// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for classification and solving.
//!
//! Nothing in the engine throws on misconfiguration: a bad layer is skipped
//! (or left untransformed) and the condition is reported through a
//! [`DiagSink`]. The sink has per-event methods with default no-op bodies,
//! so implementing only the events you care about is fine. [`NoopSink`]
//! discards everything.
//!
//! Events identify elements by their position in the marked-element scan
//! (`element_index`) or in the classified slot list (`layer_index`) rather
//! than by handle, so event types stay plain `Copy` data independent of any
//! host's node type.

use crate::solve::Degeneracy;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why an element was excluded from transform management.
///
/// A configuration error disables parallax for that one element only;
/// classification of the remaining elements continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// The element's container clips its content. Perspective needs a
    /// non-scrollable (`overflow: visible`) container to apply.
    ClippedContainer,
    /// The element has no container, or the container has no parent to act
    /// as the clip ancestor.
    MissingAncestor,
}

/// A structural condition that is reported but does not exclude the layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigWarning {
    /// The clip ancestor does not clip (`overflow: visible`) where a
    /// scrollable element was expected. Affects framing, not correctness.
    UnclippedAncestor,
    /// The element belongs to a clip ancestor other than the tracked scope.
    /// Only a single shared clip region is tracked per initialization.
    ForeignClip,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a marked element fails configuration validation and is
/// skipped.
#[derive(Clone, Copy, Debug)]
pub struct ConfigErrorEvent {
    /// Position of the element in the marked-element scan.
    pub element_index: usize,
    /// What was wrong.
    pub error: ConfigError,
}

/// Emitted for structural conditions that classification proceeds past.
#[derive(Clone, Copy, Debug)]
pub struct ConfigWarningEvent {
    /// Position of the element in the marked-element scan.
    pub element_index: usize,
    /// What was noticed.
    pub warning: ConfigWarning,
}

/// Emitted when a layer is successfully classified.
#[derive(Clone, Copy, Debug)]
pub struct LayerClassifiedEvent {
    /// Position of the slot in the classified layer list.
    pub layer_index: usize,
    /// Whether the layer uses the sticky layout strategy.
    pub sticky: bool,
    /// Whether a preceding boundary sibling was found.
    pub has_previous_cover: bool,
    /// Whether a following cover sibling was found.
    pub has_next_cover: bool,
}

/// Emitted when the solver cannot produce a transform for a layer.
///
/// The layer's current transform is left unchanged.
#[derive(Clone, Copy, Debug)]
pub struct DegenerateGeometryEvent {
    /// Position of the slot in the classified layer list.
    pub layer_index: usize,
    /// Which denominator or component went bad.
    pub degeneracy: Degeneracy,
}

// ---------------------------------------------------------------------------
// DiagSink trait
// ---------------------------------------------------------------------------

/// Receives diagnostics from classification and solving.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait DiagSink {
    /// Called when a marked element is excluded by a configuration error.
    fn on_config_error(&mut self, e: &ConfigErrorEvent) {
        _ = e;
    }

    /// Called for a structural warning; classification proceeds.
    fn on_config_warning(&mut self, e: &ConfigWarningEvent) {
        _ = e;
    }

    /// Called when a layer is classified.
    fn on_layer_classified(&mut self, e: &LayerClassifiedEvent) {
        _ = e;
    }

    /// Called when solving a layer hits degenerate geometry.
    fn on_degenerate_geometry(&mut self, e: &DegenerateGeometryEvent) {
        _ = e;
    }
}

/// A [`DiagSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagSink for NoopSink {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        sink.on_config_error(&ConfigErrorEvent {
            element_index: 0,
            error: ConfigError::ClippedContainer,
        });
        sink.on_config_warning(&ConfigWarningEvent {
            element_index: 1,
            warning: ConfigWarning::ForeignClip,
        });
        sink.on_layer_classified(&LayerClassifiedEvent {
            layer_index: 0,
            sticky: false,
            has_previous_cover: false,
            has_next_cover: true,
        });
    }

    #[test]
    fn partial_sink_overrides_one_event() {
        struct ErrorsOnly {
            errors: Vec<ConfigError>,
        }
        impl DiagSink for ErrorsOnly {
            fn on_config_error(&mut self, e: &ConfigErrorEvent) {
                self.errors.push(e.error);
            }
        }

        let mut sink = ErrorsOnly { errors: Vec::new() };
        sink.on_config_error(&ConfigErrorEvent {
            element_index: 3,
            error: ConfigError::MissingAncestor,
        });
        sink.on_layer_classified(&LayerClassifiedEvent {
            layer_index: 0,
            sticky: true,
            has_previous_cover: true,
            has_next_cover: false,
        });
        assert_eq!(sink.errors, &[ConfigError::MissingAncestor]);
    }
}
