use crate::{
    foundation::core::{Size, Viewport},
    host::dom::{ElementStyle, Host},
};

/// Handle to an element registered in a [`MemoryHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct NodeData {
    selector: String,
    parent: Option<NodeId>,
    size: Size,
    offset_top: f64,
    height_override: Option<f64>,
    style: Option<ElementStyle>,
}

/// Deterministic in-memory [`Host`] for headless evaluation and tests.
///
/// Elements are registered with the selector they answer to, a parent, a fixed
/// client size, and a page offset; scroll position is set explicitly. Style
/// writes are recorded and can be inspected after a tick.
#[derive(Clone, Debug)]
pub struct MemoryHost {
    viewport: Viewport,
    scroll_top: f64,
    nodes: Vec<NodeData>,
}

impl MemoryHost {
    /// Build an empty host with the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll_top: 0.0,
            nodes: Vec::new(),
        }
    }

    /// Register an element answering to `selector` under `parent`, at page
    /// offset 0.
    pub fn insert(&mut self, selector: &str, parent: Option<NodeId>, size: Size) -> NodeId {
        self.insert_at(selector, parent, size, 0.0)
    }

    /// Register an element answering to `selector` under `parent`, at the
    /// given page offset.
    pub fn insert_at(
        &mut self,
        selector: &str,
        parent: Option<NodeId>,
        size: Size,
        offset_top: f64,
    ) -> NodeId {
        self.nodes.push(NodeData {
            selector: selector.to_string(),
            parent,
            size,
            offset_top,
            height_override: None,
            style: None,
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Replace the viewport, as a window resize would.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Replace the element's natural size, as a relayout would.
    pub fn set_size(&mut self, node: NodeId, size: Size) {
        self.nodes[node.0].size = size;
    }

    /// Move the global scroll position.
    pub fn set_scroll_top(&mut self, px: f64) {
        self.scroll_top = px;
    }

    /// The last style written to the element, if any.
    pub fn style(&self, node: NodeId) -> Option<&ElementStyle> {
        self.nodes[node.0].style.as_ref()
    }

    /// The height override written to the element, if any.
    pub fn height_override(&self, node: NodeId) -> Option<f64> {
        self.nodes[node.0].height_override
    }

    fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.nodes[node.0].parent;
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.nodes[p.0].parent;
        }
        false
    }
}

impl Host for MemoryHost {
    type Node = NodeId;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn query(&self, selector: &str, scope: Option<&NodeId>) -> Option<NodeId> {
        (0..self.nodes.len()).map(NodeId).find(|&id| {
            self.nodes[id.0].selector == selector
                && scope.is_none_or(|&s| self.is_descendant_of(id, s))
        })
    }

    fn client_size(&self, node: &NodeId) -> Size {
        let data = &self.nodes[node.0];
        match data.height_override {
            Some(h) => Size::new(data.size.width, h),
            None => data.size,
        }
    }

    fn natural_height(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].size.height
    }

    fn page_offset_top(&self, node: &NodeId) -> f64 {
        self.nodes[node.0].offset_top
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_height(&mut self, node: &NodeId, px: f64) {
        self.nodes[node.0].height_override = Some(px);
    }

    fn apply_style(&mut self, node: &NodeId, style: &ElementStyle) {
        self.nodes[node.0].style = Some(style.clone());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/memory.rs"]
mod tests;
