// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transform solver.
//!
//! [`solve`] is a pure function from [`LayerMeasurements`] to a
//! [`ParallaxTransform`]. It runs once at setup and again on every resize;
//! identical inputs always yield an identical transform.
//!
//! # Depth derivation
//!
//! Two mutually exclusive modes:
//!
//! - **Explicit rate** (`rate != 0`): `depth = 1 - 1/rate`. The caller dials
//!   parallax strength directly, independent of measured layout.
//! - **Inferred** (`rate == 0` or NaN): `depth = (height - parallax_end +
//!   parallax_start) / (height - client_height)` — proportional to how much
//!   taller the layer is than the visible viewport between its two cover
//!   boundaries.
//!
//! Sticky layers invert the result (`depth = 1/depth`): the sticky layout
//! inverts the coordinate frame relative to the perspective origin.
//!
//! # Scale and translation
//!
//! `scale = 1 / (1 - depth)` compensates the host's perspective-driven
//! shrink so the layer renders at its intended apparent size.
//! `dx = scrollbar * (scale - 1)` compensates the scrollbar entering the
//! "bottom right" perspective origin (zero for sticky layers). `dy` places
//! the layer within its container; see [`solve`] for the two formulas.
//!
//! # Degenerate geometry
//!
//! Both derivations divide, and neither denominator is guaranteed nonzero
//! (`height == client_height` in inferred mode, `depth == 1` for the scale).
//! [`solve`] returns [`Degeneracy`] instead of a transform in those cases;
//! the engine leaves the layer's current transform unchanged and reports the
//! condition through the diag sink.

use crate::layout::LayerMeasurements;
use crate::transform::ParallaxTransform;

/// Why the solver could not produce a transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    /// Inferred mode with `height == client_height`: the layer is exactly as
    /// tall as the clip viewport, so the depth denominator is zero.
    FlushViewport,
    /// Sticky inversion of a zero depth.
    ZeroDepth,
    /// `depth == 1`, which puts the layer on the perspective plane and
    /// zeroes the scale denominator.
    UnitDepth,
    /// A component came out NaN or infinite (e.g. non-finite measurements).
    NonFinite,
}

/// Solves one layer's transform from current measurements.
///
/// # Errors
///
/// Returns a [`Degeneracy`] when a denominator is zero or any component of
/// the result is non-finite. The caller should leave the layer's previous
/// transform in place.
pub fn solve(m: &LayerMeasurements) -> Result<ParallaxTransform, Degeneracy> {
    let travel = m.height - m.viewport.height;

    // A NaN rate counts as absent, same as zero.
    let mut depth = if m.rate != 0.0 && !m.rate.is_nan() {
        1.0 - 1.0 / m.rate
    } else {
        if travel == 0.0 {
            return Err(Degeneracy::FlushViewport);
        }
        (m.height - m.parallax_end + m.parallax_start) / travel
    };

    if m.sticky {
        if depth == 0.0 {
            return Err(Degeneracy::ZeroDepth);
        }
        depth = 1.0 / depth;
    }

    if depth == 1.0 {
        return Err(Degeneracy::UnitDepth);
    }
    let scale = 1.0 / (1.0 - depth);

    // The scrollbar is included in the 'bottom right' perspective origin.
    let dx = m.scrollbar * (scale - 1.0);
    // Offset for the position within the container.
    let dy = if m.sticky {
        -(m.scroll_height - m.parallax_start - m.height) * (1.0 - scale)
    } else {
        (m.parallax_start - depth * travel) * scale
    };

    let transform = ParallaxTransform {
        depth,
        scale,
        dx,
        dy,
    };
    if transform.is_finite() {
        Ok(transform)
    } else {
        Err(Degeneracy::NonFinite)
    }
}
