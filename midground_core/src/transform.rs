// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The solved per-layer transform.
//!
//! This type covers exactly the transform shape the solver produces — a
//! uniform scale plus a 3D translation — without pulling in a full
//! linear-algebra crate. Its [`Display`](core::fmt::Display) impl renders
//! the CSS transform value applied to the layer element.

/// A solved parallax transform: `scale(1 - depth) translate3d(dx, dy, depth)`.
///
/// `depth` is the unitless recession coefficient; with a 1px perspective the
/// browser magnifies a layer translated to `z = depth` by `1 / (1 - depth)`,
/// so the emitted scale factor `1 - depth` cancels it and the layer renders
/// at its intended apparent size.
///
/// `scale` is that magnification, `1 / (1 - depth)`. The translation
/// components are computed against it, not against the emitted factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTransform {
    /// Unitless recession coefficient (becomes the `translate3d` z value).
    pub depth: f64,
    /// Perspective magnification `1 / (1 - depth)`.
    pub scale: f64,
    /// Horizontal offset in px (scrollbar compensation).
    pub dx: f64,
    /// Vertical offset in px (position within the container).
    pub dy: f64,
}

impl ParallaxTransform {
    /// The scale factor emitted in the CSS value, `1 - depth`.
    ///
    /// This is the reciprocal of [`scale`](Self::scale); the two cancel once
    /// the host applies its perspective projection.
    #[inline]
    #[must_use]
    pub fn css_scale(&self) -> f64 {
        1.0 - self.depth
    }

    /// Is this transform [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.depth.is_finite() && self.scale.is_finite() && self.dx.is_finite() && self.dy.is_finite()
    }
}

impl core::fmt::Display for ParallaxTransform {
    /// Renders the CSS transform value, e.g.
    /// `scale(0.5) translate3d(7.5px, -300px, 0.5px)`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "scale({}) translate3d({}px, {}px, {}px)",
            self.css_scale(),
            self.dx,
            self.dy,
            self.depth,
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn css_scale_is_reciprocal_of_scale() {
        let t = ParallaxTransform {
            depth: 0.5,
            scale: 2.0,
            dx: 0.0,
            dy: 0.0,
        };
        assert_eq!(t.css_scale(), 0.5);
        assert!((t.css_scale() * t.scale - 1.0).abs() < 1e-12);
    }

    #[test]
    fn display_renders_css_value() {
        let t = ParallaxTransform {
            depth: 0.5,
            scale: 2.0,
            dx: 7.5,
            dy: -300.0,
        };
        assert_eq!(t.to_string(), "scale(0.5) translate3d(7.5px, -300px, 0.5px)");
    }

    #[test]
    fn display_is_deterministic() {
        let t = ParallaxTransform {
            depth: 0.75,
            scale: 4.0,
            dx: 45.0,
            dy: 120.25,
        };
        assert_eq!(t.to_string(), t.to_string());
    }

    #[test]
    fn finite_transform_detected() {
        let t = ParallaxTransform {
            depth: 0.25,
            scale: 4.0 / 3.0,
            dx: 0.0,
            dy: 10.0,
        };
        assert!(t.is_finite());
    }

    #[test]
    fn nan_component_detected() {
        let t = ParallaxTransform {
            depth: f64::NAN,
            scale: 1.0,
            dx: 0.0,
            dy: 0.0,
        };
        assert!(!t.is_finite());
    }

    #[test]
    fn infinite_scale_detected() {
        let t = ParallaxTransform {
            depth: 1.0,
            scale: f64::INFINITY,
            dx: 0.0,
            dy: 0.0,
        };
        assert!(!t.is_finite());
    }
}
