// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end classification + solving scenarios against the mock host.

use midground_core::diag::{
    ConfigError, ConfigErrorEvent, ConfigWarning, ConfigWarningEvent, DegenerateGeometryEvent,
    DiagSink, NoopSink,
};
use midground_core::engine::Engine;
use midground_core::host::Overflow;
use midground_core::solve::Degeneracy;
use midground_harness::{MockDom, NodeId, NodeSpec, Scene};

/// Collects every diagnostic for assertions.
#[derive(Debug, Default)]
struct RecordingSink {
    errors: Vec<(usize, ConfigError)>,
    warnings: Vec<(usize, ConfigWarning)>,
    degenerate: Vec<(usize, Degeneracy)>,
}

impl DiagSink for RecordingSink {
    fn on_config_error(&mut self, e: &ConfigErrorEvent) {
        self.errors.push((e.element_index, e.error));
    }

    fn on_config_warning(&mut self, e: &ConfigWarningEvent) {
        self.warnings.push((e.element_index, e.warning));
    }

    fn on_degenerate_geometry(&mut self, e: &DegenerateGeometryEvent) {
        self.degenerate.push((e.layer_index, e.degeneracy));
    }
}

/// Clip ancestor 800px tall, 600px client height, 15px scrollbar.
fn clip_spec() -> NodeSpec {
    NodeSpec {
        overflow: Overflow::Clipped,
        offset_height: 800.0,
        offset_width: 615.0,
        client_width: 600.0,
        client_height: 600.0,
        scroll_height: 4400.0,
        ..NodeSpec::default()
    }
}

fn container_spec() -> NodeSpec {
    NodeSpec {
        overflow: Overflow::Visible,
        offset_height: 2000.0,
        ..NodeSpec::default()
    }
}

fn layer_spec(offset_top: f64, height: f64) -> NodeSpec {
    NodeSpec {
        offset_top,
        offset_height: height,
        ..NodeSpec::default()
    }
}

/// Three stacked layers, rates [2, 0, 4], no covers.
fn three_layer_scene() -> (Scene, [NodeId; 3]) {
    let mut scene = Scene::new(clip_spec(), container_spec());
    let first = scene.push_layer(2.0, layer_spec(0.0, 1000.0));
    let second = scene.push_layer(0.0, layer_spec(1000.0, 2400.0));
    let third = scene.push_layer(4.0, layer_spec(3400.0, 1000.0));
    (scene, [first, second, third])
}

#[test]
fn scenario_a_rates_and_geometry() {
    let (mut scene, [first, second, third]) = three_layer_scene();
    let marked = scene.marked();
    let mut diag = RecordingSink::default();
    let engine = Engine::initialize(&mut scene.dom, scene.clip, &marked, &mut diag);

    assert!(!engine.is_sticky());
    assert!(diag.errors.is_empty(), "no config errors expected");
    assert!(diag.degenerate.is_empty(), "no degenerate layers expected");

    // Explicit rates: depth = 1 - 1/rate.
    let t1 = scene.dom.styles(first).transform.unwrap();
    let t3 = scene.dom.styles(third).transform.unwrap();
    assert_eq!(t1.depth, 0.5);
    assert_eq!(t3.depth, 0.75);

    // Middle layer inferred purely from geometry: no covers, so the travel
    // range spans the whole container.
    // depth = (height - container_height + 0) / (height - client_height)
    let t2 = scene.dom.styles(second).transform.unwrap();
    assert_eq!(t2.depth, (2400.0 - 2000.0) / (2400.0 - 600.0));

    // dx = scrollbar * (scale - 1), dy = (start - depth * travel) * scale.
    for (node, height) in [(first, 1000.0), (second, 2400.0), (third, 1000.0)] {
        let t = scene.dom.styles(node).transform.unwrap();
        assert_eq!(t.scale, 1.0 / (1.0 - t.depth));
        assert_eq!(t.dx, 15.0 * (t.scale - 1.0));
        assert_eq!(t.dy, (0.0 - t.depth * (height - 600.0)) * t.scale);
    }
}

#[test]
fn scenario_a_styling_and_painter_order() {
    let (mut scene, [first, second, third]) = three_layer_scene();
    let marked = scene.marked();
    let _ = Engine::initialize(&mut scene.dom, scene.clip, &marked, &mut NoopSink);

    // Non-sticky: preserve-3d on the container, perspective on the clip.
    assert!(scene.dom.styles(scene.container).preserve_3d);
    assert!(scene.dom.styles(scene.clip).perspective);
    assert!(!scene.dom.styles(scene.container).perspective);
    for node in [first, second, third] {
        assert!(scene.dom.styles(node).transform_origin);
        assert!(!scene.dom.styles(node).sticky_pinned);
    }

    // Each layer was reinserted at the front of the container in scan
    // order, so they end up front-most in reverse.
    assert_eq!(scene.dom.children(scene.container), &[third, second, first]);
}

#[test]
fn scenario_b_momentum_scroll_forces_sticky() {
    let (mut scene, [first, second, third]) = three_layer_scene();
    scene.dom.spec_mut(scene.clip).momentum_scroll = true;
    let marked = scene.marked();
    let engine = Engine::initialize(&mut scene.dom, scene.clip, &marked, &mut NoopSink);

    assert!(engine.is_sticky());
    for slot in engine.slots() {
        assert!(slot.sticky);
    }

    // Sticky: perspective goes on the container and every layer is pinned;
    // scrollbar compensation is forced to zero.
    assert!(scene.dom.styles(scene.container).perspective);
    assert!(!scene.dom.styles(scene.container).preserve_3d);
    for node in [first, second, third] {
        let styles = scene.dom.styles(node);
        assert!(styles.sticky_pinned);
        assert_eq!(styles.transform.unwrap().dx, 0.0);
    }

    // Sticky inverts the depth relative to scenario A.
    assert_eq!(scene.dom.styles(first).transform.unwrap().depth, 1.0 / 0.5);
    assert_eq!(scene.dom.styles(third).transform.unwrap().depth, 1.0 / 0.75);
}

#[test]
fn scenario_c_clipped_container_skips_only_that_layer() {
    let mut dom = MockDom::new();
    let clip = dom.insert(None, clip_spec());
    let good_container = dom.insert(Some(clip), container_spec());
    let bad_container = dom.insert(
        Some(clip),
        NodeSpec {
            overflow: Overflow::Clipped,
            offset_height: 2000.0,
            ..NodeSpec::default()
        },
    );
    let good = dom.insert(
        Some(good_container),
        NodeSpec {
            layer_rate: Some(2.0),
            offset_height: 1000.0,
            ..NodeSpec::default()
        },
    );
    let bad = dom.insert(
        Some(bad_container),
        NodeSpec {
            layer_rate: Some(2.0),
            offset_height: 1000.0,
            ..NodeSpec::default()
        },
    );

    let mut diag = RecordingSink::default();
    let engine = Engine::initialize(&mut dom, clip, &[good, bad], &mut diag);

    // One classification entry, one error for the misconfigured element.
    assert_eq!(engine.slots().len(), 1);
    assert_eq!(engine.slots()[0].node, good);
    assert_eq!(diag.errors, &[(1, ConfigError::ClippedContainer)]);

    // The sibling layer is still fully transformed; the bad one untouched.
    assert!(dom.styles(good).transform.is_some());
    assert!(dom.styles(bad).transform.is_none());
    assert!(!dom.styles(bad).transform_origin);
}

#[test]
fn stickiness_is_monotonic_across_clips() {
    // layer under clip A (no momentum), then one under foreign clip B (with
    // momentum), then another under clip A again: sticky latches on at the
    // second layer and stays on.
    let mut dom = MockDom::new();
    let clip_a = dom.insert(None, clip_spec());
    let clip_b = dom.insert(
        None,
        NodeSpec {
            momentum_scroll: true,
            ..clip_spec()
        },
    );
    let container_a = dom.insert(Some(clip_a), container_spec());
    let container_b = dom.insert(Some(clip_b), container_spec());
    let l1 = dom.insert(
        Some(container_a),
        NodeSpec {
            layer_rate: Some(2.0),
            offset_height: 1000.0,
            ..NodeSpec::default()
        },
    );
    let l2 = dom.insert(
        Some(container_b),
        NodeSpec {
            layer_rate: Some(2.0),
            offset_height: 1000.0,
            ..NodeSpec::default()
        },
    );
    let l3 = dom.insert(
        Some(container_a),
        NodeSpec {
            layer_rate: Some(2.0),
            offset_height: 1000.0,
            ..NodeSpec::default()
        },
    );

    let mut diag = RecordingSink::default();
    let engine = Engine::initialize(&mut dom, clip_a, &[l1, l2, l3], &mut diag);

    let sticky: Vec<bool> = engine.slots().iter().map(|slot| slot.sticky).collect();
    assert_eq!(sticky, &[false, true, true]);
    assert!(engine.is_sticky());

    // The foreign clip is reported but its layer still classified.
    assert!(
        diag.warnings.contains(&(1, ConfigWarning::ForeignClip)),
        "foreign clip should warn"
    );
}

#[test]
fn unclipped_ancestor_warns_but_classifies() {
    let mut scene = Scene::new(
        NodeSpec {
            overflow: Overflow::Visible,
            ..clip_spec()
        },
        container_spec(),
    );
    let layer = scene.push_layer(2.0, layer_spec(0.0, 1000.0));
    let marked = scene.marked();

    let mut diag = RecordingSink::default();
    let engine = Engine::initialize(&mut scene.dom, scene.clip, &marked, &mut diag);

    assert_eq!(engine.slots().len(), 1);
    assert!(scene.dom.styles(layer).transform.is_some());
    assert_eq!(diag.warnings, &[(0, ConfigWarning::UnclippedAncestor)]);
}

#[test]
fn cover_discovery_skips_the_right_siblings() {
    let mut scene = Scene::new(clip_spec(), container_spec());
    let start = scene.push_content(NodeSpec {
        offset_top: 0.0,
        offset_height: 400.0,
        ..NodeSpec::default()
    });
    let l1 = scene.push_layer(0.0, layer_spec(400.0, 2400.0));
    let l2 = scene.push_layer(0.0, layer_spec(400.0, 2400.0));
    let plain = scene.push_content(layer_spec(2800.0, 100.0));
    let end = scene.push_cover(NodeSpec {
        offset_top: 2900.0,
        offset_height: 200.0,
        ..NodeSpec::default()
    });
    let _ = plain;

    let marked = scene.marked();
    let engine = Engine::initialize(&mut scene.dom, scene.clip, &marked, &mut NoopSink);

    // Backward scan skips contiguous parallax siblings; forward scan skips
    // non-cover siblings.
    let slots = engine.slots();
    assert_eq!(slots[0].previous_cover, Some(start));
    assert_eq!(slots[0].next_cover, Some(end));
    assert_eq!(slots[1].previous_cover, Some(start));
    assert_eq!(slots[1].next_cover, Some(end));
}

#[test]
fn inferred_depth_uses_cover_boundaries() {
    let mut scene = Scene::new(clip_spec(), container_spec());
    let start = scene.push_content(NodeSpec {
        offset_top: 0.0,
        offset_height: 400.0,
        ..NodeSpec::default()
    });
    let layer = scene.push_layer(0.0, layer_spec(400.0, 2400.0));
    let end = scene.push_cover(NodeSpec {
        offset_top: 2800.0,
        offset_height: 200.0,
        ..NodeSpec::default()
    });
    let _ = (start, end);

    let marked = scene.marked();
    let _ = Engine::initialize(&mut scene.dom, scene.clip, &marked, &mut NoopSink);

    // parallax_start = cover bottom (400), parallax_end = next cover top.
    let t = scene.dom.styles(layer).transform.unwrap();
    assert_eq!(t.depth, (2400.0 - 2800.0 + 400.0) / (2400.0 - 600.0));
}

#[test]
fn resize_is_idempotent_and_tracks_changes() {
    let (mut scene, [first, _, _]) = three_layer_scene();
    let marked = scene.marked();
    let mut diag = NoopSink;
    let engine = Engine::initialize(&mut scene.dom, scene.clip, &marked, &mut diag);

    let before = scene.dom.styles(first).transform_css.clone().unwrap();
    engine.resize(&mut scene.dom, &mut diag);
    let after = scene.dom.styles(first).transform_css.clone().unwrap();
    assert_eq!(before, after, "unchanged inputs must yield identical output");

    // A real viewport change re-solves with the new measurements.
    scene.dom.spec_mut(scene.clip).client_height = 500.0;
    engine.resize(&mut scene.dom, &mut diag);
    let resized = scene.dom.styles(first).transform.unwrap();
    assert_eq!(resized.dy, (0.0 - 0.5 * (1000.0 - 500.0)) * 2.0);
}

#[test]
fn degenerate_layer_keeps_previous_transform() {
    let (mut scene, [first, second, _]) = three_layer_scene();
    let marked = scene.marked();
    let mut diag = RecordingSink::default();
    let engine = Engine::initialize(&mut scene.dom, scene.clip, &marked, &mut diag);
    let before = scene.dom.styles(second).transform.unwrap();

    // Shrink the middle layer flush to the viewport: the inferred-mode
    // denominator collapses.
    scene.dom.spec_mut(second).offset_height = 600.0;
    engine.resize(&mut scene.dom, &mut diag);

    assert_eq!(diag.degenerate, &[(1, Degeneracy::FlushViewport)]);
    assert_eq!(scene.dom.styles(second).transform, Some(before));
    // Other layers keep being re-solved.
    assert!(scene.dom.styles(first).transform.is_some());
}

#[test]
fn scroll_shows_layers_and_writes_once() {
    let (mut scene, [first, second, third]) = three_layer_scene();
    let marked = scene.marked();
    let mut engine = Engine::initialize(&mut scene.dom, scene.clip, &marked, &mut NoopSink);

    // Initialization never touches visibility.
    assert_eq!(scene.dom.styles(first).visible, None);

    engine.scroll(&mut scene.dom);
    engine.scroll(&mut scene.dom);
    for node in [first, second, third] {
        let styles = scene.dom.styles(node);
        assert_eq!(styles.visible, Some(true));
        assert_eq!(styles.visible_writes, 1, "only the first scroll writes");
    }
}

#[test]
fn compat_shim_requested_once_per_initialize() {
    let (mut scene, _) = three_layer_scene();
    let marked = scene.marked();
    let _ = Engine::initialize(&mut scene.dom, scene.clip, &marked, &mut NoopSink);
    assert_eq!(scene.dom.compat_shim_calls(), 1);
}

#[test]
fn initial_top_recorded_at_classification() {
    let (mut scene, _) = three_layer_scene();
    let marked = scene.marked();
    let engine = Engine::initialize(&mut scene.dom, scene.clip, &marked, &mut NoopSink);
    let tops: Vec<f64> = engine.slots().iter().map(|slot| slot.initial_top).collect();
    assert_eq!(tops, &[0.0, 1000.0, 3400.0]);
}
