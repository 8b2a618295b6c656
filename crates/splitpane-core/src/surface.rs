#![forbid(unsafe_code)]

//! Host-agnostic element surface.
//!
//! The resize engine never owns elements. It addresses them by [`NodeId`] and
//! goes through [`LayoutSurface`] to read rendered geometry and to write
//! inline positioning declarations back. Hosts with a real renderer implement
//! the trait over their own tree; [`MemorySurface`] is a plain in-memory tree
//! for tests and headless use.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::geometry::Rect;

/// Stable identifier for surface elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(u32);

impl NodeId {
    /// Create a node ID from its raw value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read/write access to an already-laid-out element tree.
///
/// Reads report current rendered state; they are synchronous and infallible
/// for known nodes. Unknown nodes read as empty.
pub trait LayoutSurface {
    /// Direct children of `node`, in document order. `None` for unknown nodes.
    fn children(&self, node: NodeId) -> Option<Vec<NodeId>>;

    /// Whether `node` carries the given marker class.
    fn has_marker(&self, node: NodeId, marker: &str) -> bool;

    /// Rendered bounding box of `node`.
    fn bounding_rect(&self, node: NodeId) -> Rect;

    /// Computed cursor of `node`; `None` when the host has no value.
    fn computed_cursor(&self, node: NodeId) -> Option<&str>;

    /// Replace the inline positioning declaration of `node`.
    fn apply_style(&mut self, node: NodeId, style: &str);

    /// Every node carrying `marker`, in document order.
    fn find_marked(&self, marker: &str) -> Vec<NodeId>;
}

#[derive(Debug, Clone, Default)]
struct MemoryNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    markers: BTreeSet<String>,
    rect: Rect,
    cursor: Option<String>,
    style: Option<String>,
    style_writes: u64,
}

/// In-memory [`LayoutSurface`].
///
/// Geometry is whatever the caller sets; applying a style records it but does
/// not reflow rects.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    nodes: BTreeMap<NodeId, MemoryNode>,
    next_id: u32,
}

impl MemorySurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a top-level node with the given rect.
    pub fn insert_root(&mut self, rect: Rect) -> NodeId {
        self.insert(None, rect)
    }

    /// Insert a child under `parent`. Returns `None` if `parent` is unknown.
    pub fn insert_child(&mut self, parent: NodeId, rect: Rect) -> Option<NodeId> {
        if !self.nodes.contains_key(&parent) {
            return None;
        }
        let id = self.insert(Some(parent), rect);
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(id);
        }
        Some(id)
    }

    fn insert(&mut self, parent: Option<NodeId>, rect: Rect) -> NodeId {
        self.next_id = self.next_id.saturating_add(1);
        let id = NodeId(self.next_id);
        self.nodes.insert(
            id,
            MemoryNode {
                parent,
                rect,
                ..MemoryNode::default()
            },
        );
        id
    }

    /// Add a marker class to `node`. Returns `false` for unknown nodes.
    pub fn add_marker(&mut self, node: NodeId, marker: impl Into<String>) -> bool {
        match self.nodes.get_mut(&node) {
            Some(entry) => {
                entry.markers.insert(marker.into());
                true
            }
            None => false,
        }
    }

    /// Update the rendered rect of `node`. Returns `false` for unknown nodes.
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) -> bool {
        match self.nodes.get_mut(&node) {
            Some(entry) => {
                entry.rect = rect;
                true
            }
            None => false,
        }
    }

    /// Set the computed cursor of `node`. Returns `false` for unknown nodes.
    pub fn set_cursor(&mut self, node: NodeId, cursor: impl Into<String>) -> bool {
        match self.nodes.get_mut(&node) {
            Some(entry) => {
                entry.cursor = Some(cursor.into());
                true
            }
            None => false,
        }
    }

    /// Last inline style applied to `node`.
    #[must_use]
    pub fn style(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).and_then(|entry| entry.style.as_deref())
    }

    /// Number of times a style was applied to `node`.
    #[must_use]
    pub fn style_writes(&self, node: NodeId) -> u64 {
        self.nodes.get(&node).map_or(0, |entry| entry.style_writes)
    }

    /// Parent of `node`, if any.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|entry| entry.parent)
    }

    /// Number of nodes on the surface.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the surface has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn document_order(&self, node: NodeId, out: &mut Vec<NodeId>) {
        out.push(node);
        if let Some(entry) = self.nodes.get(&node) {
            for child in &entry.children {
                self.document_order(*child, out);
            }
        }
    }
}

impl LayoutSurface for MemorySurface {
    fn children(&self, node: NodeId) -> Option<Vec<NodeId>> {
        self.nodes.get(&node).map(|entry| entry.children.clone())
    }

    fn has_marker(&self, node: NodeId, marker: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|entry| entry.markers.contains(marker))
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.nodes
            .get(&node)
            .map(|entry| entry.rect)
            .unwrap_or_default()
    }

    fn computed_cursor(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).and_then(|entry| entry.cursor.as_deref())
    }

    fn apply_style(&mut self, node: NodeId, style: &str) {
        if let Some(entry) = self.nodes.get_mut(&node) {
            entry.style = Some(style.to_owned());
            entry.style_writes = entry.style_writes.saturating_add(1);
        }
    }

    fn find_marked(&self, marker: &str) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let roots = self
            .nodes
            .iter()
            .filter(|(_, entry)| entry.parent.is_none())
            .map(|(id, _)| *id);
        for root in roots {
            self.document_order(root, &mut order);
        }
        order
            .into_iter()
            .filter(|id| self.has_marker(*id, marker))
            .collect()
    }
}
