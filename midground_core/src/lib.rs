// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer classification and transform solving for scroll parallax.
//!
//! `midground_core` turns a flat list of parallax-marked elements inside a
//! scrolling container into per-layer depth transforms. It approximates true
//! 3D perspective with plain `scale + translate3d` CSS-style transforms, so
//! it works without native 3D content. The crate is `no_std` compatible
//! (with `alloc`) and knows nothing about any concrete platform; all layout
//! reads and writes go through the [`Host`](host::Host) trait.
//!
//! # Architecture
//!
//! Data flows one way through two stateless components:
//!
//! ```text
//!   Host (DOM, mock, ...)
//!       │ marked elements + computed styles
//!       ▼
//!   classify() ──► ordered LayerSlot list + global sticky flag
//!                        │
//!        resize ─────────┤ (re-entered on every resize)
//!                        ▼
//!   measure() ──► LayerMeasurements ──► solve() ──► ParallaxTransform
//!                                                        │
//!   Host::set_transform ◄────────────────────────────────┘
//! ```
//!
//! **[`classify`]** — Scans the marked elements once, validating each
//! element's container/clip hierarchy, deciding whether the sticky layout
//! strategy applies, and locating the bounding "cover" siblings. The sticky
//! decision is a fold accumulator: once one layer requires it, every layer
//! classified afterwards is sticky too.
//!
//! **[`solve`]** — Derives a depth (from an explicit rate attribute or from
//! cover geometry), then the compensating scale and translation. Pure
//! function of [`LayerMeasurements`](layout::LayerMeasurements); the same
//! inputs always produce the same transform.
//!
//! **[`engine`]** — [`Engine`](engine::Engine) owns the slot list produced
//! by classification and re-runs the solver on resize notifications. The
//! scroll notification is a visibility hook that currently shows every layer.
//!
//! **[`host`]** — The [`Host`](host::Host) trait that platform backends
//! implement: layout queries (offsets, client geometry, computed overflow,
//! marker attributes) and layout mutations (transforms, perspective styling,
//! sticky pinning).
//!
//! **[`diag`]** — [`DiagSink`](diag::DiagSink) trait and event types for
//! configuration errors, warnings, and degenerate geometry. Nothing in the
//! engine panics on misconfiguration; a bad layer is skipped and reported.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod classify;
pub mod diag;
pub mod engine;
pub mod host;
pub mod layout;
pub mod solve;
pub mod transform;
