// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mock host and scene harness for midground tests and demos.
//!
//! [`MockDom`] is an arena-backed [`Host`] with scripted layout geometry and
//! recorded style mutations, so classifier and solver behavior can be
//! asserted without a browser. [`Scene`] builds the common fixture: one
//! scrolling clip element containing one non-clipping container whose
//! children are interleaved layers and covers.

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use midground_core::host::{Host, Overflow};
use midground_core::transform::ParallaxTransform;

/// Handle to a node in a [`MockDom`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Scripted layout state for one mock node.
///
/// These are the values the engine would otherwise read from computed styles
/// and offset geometry. Tests mutate them between passes via
/// [`MockDom::spec_mut`] to simulate resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSpec {
    /// Computed overflow.
    pub overflow: Overflow,
    /// Offset from the top of the offset parent.
    pub offset_top: f64,
    /// Border-box height.
    pub offset_height: f64,
    /// Border-box width.
    pub offset_width: f64,
    /// Client width (offset width minus scrollbar).
    pub client_width: f64,
    /// Client height.
    pub client_height: f64,
    /// Full scrollable content height.
    pub scroll_height: f64,
    /// Momentum-scroll capability flag.
    pub momentum_scroll: bool,
    /// Parallax marker: `Some(rate)` marks a layer (`0.0` = valueless
    /// marker, depth inferred from geometry).
    pub layer_rate: Option<f64>,
    /// Cover (depth-boundary) marker.
    pub cover: bool,
}

impl Default for NodeSpec {
    fn default() -> Self {
        Self {
            overflow: Overflow::Visible,
            offset_top: 0.0,
            offset_height: 0.0,
            offset_width: 0.0,
            client_width: 0.0,
            client_height: 0.0,
            scroll_height: 0.0,
            momentum_scroll: false,
            layer_rate: None,
            cover: false,
        }
    }
}

/// Style mutations the engine has applied to one mock node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppliedStyles {
    /// Last transform written, as components.
    pub transform: Option<ParallaxTransform>,
    /// Last transform written, as the formatted CSS value.
    pub transform_css: Option<String>,
    /// Perspective styling applied (`perspective-origin: bottom right`, 1px).
    pub perspective: bool,
    /// `transform-style: preserve-3d` applied.
    pub preserve_3d: bool,
    /// `transform-origin: bottom right` applied.
    pub transform_origin: bool,
    /// Pinned with `position: sticky; top: 0`.
    pub sticky_pinned: bool,
    /// Last visibility written; `None` if never touched.
    pub visible: Option<bool>,
    /// How many times visibility was written (the engine should only write
    /// on change).
    pub visible_writes: u32,
}

#[derive(Clone, Debug)]
struct NodeData {
    spec: NodeSpec,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    styles: AppliedStyles,
}

/// Arena-backed mock document implementing [`Host`].
#[derive(Clone, Debug, Default)]
pub struct MockDom {
    nodes: Vec<NodeData>,
    compat_shim_calls: u32,
}

impl MockDom {
    /// Creates an empty mock document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node as the last child of `parent` (or as a root).
    pub fn insert(&mut self, parent: Option<NodeId>, spec: NodeSpec) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(NodeData {
            spec,
            parent,
            children: Vec::new(),
            styles: AppliedStyles::default(),
        });
        if let Some(p) = parent {
            self.nodes[p.0 as usize].children.push(id);
        }
        id
    }

    /// Returns the scripted layout state of a node.
    #[must_use]
    pub fn spec(&self, node: NodeId) -> &NodeSpec {
        &self.nodes[node.0 as usize].spec
    }

    /// Mutable access to a node's scripted layout state (simulate resizes).
    pub fn spec_mut(&mut self, node: NodeId) -> &mut NodeSpec {
        &mut self.nodes[node.0 as usize].spec
    }

    /// Returns the style mutations applied to a node so far.
    #[must_use]
    pub fn styles(&self, node: NodeId) -> &AppliedStyles {
        &self.nodes[node.0 as usize].styles
    }

    /// Returns a node's children in document order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0 as usize].children
    }

    /// Whether the document-level compatibility shim is installed.
    #[must_use]
    pub fn shim_installed(&self) -> bool {
        self.compat_shim_calls > 0
    }

    /// How many times the shim was requested (should stay effective once).
    #[must_use]
    pub fn compat_shim_calls(&self) -> u32 {
        self.compat_shim_calls
    }

    fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0 as usize]
    }

    fn styles_mut(&mut self, node: NodeId) -> &mut AppliedStyles {
        &mut self.nodes[node.0 as usize].styles
    }

    /// Position of `node` within its parent's child list.
    fn sibling_index(&self, node: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.data(node).parent?;
        let index = self
            .data(parent)
            .children
            .iter()
            .position(|&child| child == node)?;
        Some((parent, index))
    }
}

impl Host for MockDom {
    type Node = NodeId;

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.data(*node).parent
    }

    fn prev_sibling(&self, node: &NodeId) -> Option<NodeId> {
        let (parent, index) = self.sibling_index(*node)?;
        index.checked_sub(1).map(|i| self.data(parent).children[i])
    }

    fn next_sibling(&self, node: &NodeId) -> Option<NodeId> {
        let (parent, index) = self.sibling_index(*node)?;
        self.data(parent).children.get(index + 1).copied()
    }

    fn overflow(&self, node: &NodeId) -> Overflow {
        self.spec(*node).overflow
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.spec(*node).offset_top
    }

    fn offset_height(&self, node: &NodeId) -> f64 {
        self.spec(*node).offset_height
    }

    fn offset_width(&self, node: &NodeId) -> f64 {
        self.spec(*node).offset_width
    }

    fn client_width(&self, node: &NodeId) -> f64 {
        self.spec(*node).client_width
    }

    fn client_height(&self, node: &NodeId) -> f64 {
        self.spec(*node).client_height
    }

    fn scroll_height(&self, node: &NodeId) -> f64 {
        self.spec(*node).scroll_height
    }

    fn momentum_scroll(&self, node: &NodeId) -> bool {
        self.spec(*node).momentum_scroll
    }

    fn is_layer(&self, node: &NodeId) -> bool {
        self.spec(*node).layer_rate.is_some()
    }

    fn is_cover(&self, node: &NodeId) -> bool {
        self.spec(*node).cover
    }

    fn rate(&self, node: &NodeId) -> f64 {
        self.spec(*node).layer_rate.unwrap_or(0.0)
    }

    fn set_transform(&mut self, node: &NodeId, transform: &ParallaxTransform) {
        let styles = self.styles_mut(*node);
        styles.transform = Some(*transform);
        styles.transform_css = Some(transform.to_string());
    }

    fn set_perspective(&mut self, node: &NodeId) {
        self.styles_mut(*node).perspective = true;
    }

    fn set_preserve_3d(&mut self, node: &NodeId) {
        self.styles_mut(*node).preserve_3d = true;
    }

    fn set_transform_origin(&mut self, node: &NodeId) {
        self.styles_mut(*node).transform_origin = true;
    }

    fn pin_sticky(&mut self, node: &NodeId) {
        self.styles_mut(*node).sticky_pinned = true;
    }

    fn set_visible(&mut self, node: &NodeId, visible: bool) {
        let styles = self.styles_mut(*node);
        styles.visible = Some(visible);
        styles.visible_writes += 1;
    }

    fn reorder_first(&mut self, node: &NodeId) {
        if let Some((parent, index)) = self.sibling_index(*node) {
            let children = &mut self.nodes[parent.0 as usize].children;
            let moved = children.remove(index);
            children.insert(0, moved);
        }
    }

    fn ensure_compat_shim(&mut self) {
        // Repeated calls are the caller's prerogative; installation happens
        // at most once.
        self.compat_shim_calls += 1;
    }
}

/// The common fixture: a scrolling clip containing one non-clipping
/// container of interleaved layers and covers.
#[derive(Clone, Debug)]
pub struct Scene {
    /// The mock document.
    pub dom: MockDom,
    /// The scrolling clip ancestor (the engine's scope).
    pub clip: NodeId,
    /// The non-clipping container holding layers and covers.
    pub container: NodeId,
}

impl Scene {
    /// Builds a clip/container pair from their scripted layout.
    #[must_use]
    pub fn new(clip: NodeSpec, container: NodeSpec) -> Self {
        let mut dom = MockDom::new();
        let clip = dom.insert(None, clip);
        let container = dom.insert(Some(clip), container);
        Self {
            dom,
            clip,
            container,
        }
    }

    /// Appends a parallax layer to the container.
    pub fn push_layer(&mut self, rate: f64, spec: NodeSpec) -> NodeId {
        self.dom.insert(
            Some(self.container),
            NodeSpec {
                layer_rate: Some(rate),
                ..spec
            },
        )
    }

    /// Appends a cover (depth boundary) to the container.
    pub fn push_cover(&mut self, spec: NodeSpec) -> NodeId {
        self.dom.insert(
            Some(self.container),
            NodeSpec {
                cover: true,
                ..spec
            },
        )
    }

    /// Appends an unmarked sibling (plain content) to the container.
    pub fn push_content(&mut self, spec: NodeSpec) -> NodeId {
        self.dom.insert(Some(self.container), spec)
    }

    /// The layer-marked children of the container, in document order —
    /// what marker discovery would hand to the engine.
    #[must_use]
    pub fn marked(&self) -> Vec<NodeId> {
        self.dom
            .children(self.container)
            .iter()
            .copied()
            .filter(|&node| self.dom.spec(node).layer_rate.is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_navigation() {
        let mut dom = MockDom::new();
        let root = dom.insert(None, NodeSpec::default());
        let a = dom.insert(Some(root), NodeSpec::default());
        let b = dom.insert(Some(root), NodeSpec::default());
        let c = dom.insert(Some(root), NodeSpec::default());

        assert_eq!(dom.prev_sibling(&a), None);
        assert_eq!(dom.next_sibling(&a), Some(b));
        assert_eq!(dom.prev_sibling(&c), Some(b));
        assert_eq!(dom.next_sibling(&c), None);
        assert_eq!(dom.parent(&b), Some(root));
    }

    #[test]
    fn reorder_first_moves_node_to_front() {
        let mut dom = MockDom::new();
        let root = dom.insert(None, NodeSpec::default());
        let a = dom.insert(Some(root), NodeSpec::default());
        let b = dom.insert(Some(root), NodeSpec::default());
        let c = dom.insert(Some(root), NodeSpec::default());

        dom.reorder_first(&c);
        assert_eq!(dom.children(root), &[c, a, b]);
    }

    #[test]
    fn scene_marked_skips_covers_and_content() {
        let mut scene = Scene::new(NodeSpec::default(), NodeSpec::default());
        let layer1 = scene.push_layer(2.0, NodeSpec::default());
        scene.push_cover(NodeSpec::default());
        let layer2 = scene.push_layer(0.0, NodeSpec::default());
        scene.push_content(NodeSpec::default());

        assert_eq!(scene.marked(), &[layer1, layer2]);
    }

    #[test]
    fn set_transform_records_components_and_css() {
        let mut dom = MockDom::new();
        let node = dom.insert(None, NodeSpec::default());
        let t = ParallaxTransform {
            depth: 0.5,
            scale: 2.0,
            dx: 15.0,
            dy: -200.0,
        };
        dom.set_transform(&node, &t);
        assert_eq!(dom.styles(node).transform, Some(t));
        assert_eq!(
            dom.styles(node).transform_css.as_deref(),
            Some("scale(0.5) translate3d(15px, -200px, 0.5px)")
        );
    }
}
