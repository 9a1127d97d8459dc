//! Layout snapshot (arena-based)
//!
//! A recorded copy of the geometry a layout engine produced. Positioning can
//! run against it headless, and tests build one by hand.

use crate::{DomRect, ElementGeometry, LayoutHost, SnapshotError, StyleMap};

/// Element identifier (index into the snapshot arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    /// The document node
    pub const DOCUMENT: ElementId = ElementId(0);
    /// The `<html>` element
    pub const ROOT: ElementId = ElementId(1);

    /// Arena index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
struct SnapshotNode {
    offset_parent: Option<ElementId>,
    geometry: ElementGeometry,
    /// Explicit viewport rect; derived from `geometry` when unset
    bounding_rect: Option<DomRect>,
    computed: StyleMap,
    inline: StyleMap,
    current: StyleMap,
}

/// Recorded layout tree implementing [`LayoutHost`]
#[derive(Debug, Clone)]
pub struct LayoutSnapshot {
    nodes: Vec<SnapshotNode>,
    page_offset: Option<(f64, f64)>,
    computed_style_supported: bool,
}

impl LayoutSnapshot {
    /// Create a snapshot holding the document node and its `<html>` element
    pub fn new() -> Self {
        Self {
            nodes: vec![SnapshotNode::default(), SnapshotNode::default()],
            page_offset: Some((0.0, 0.0)),
            computed_style_supported: true,
        }
    }

    /// Append an element under `parent`.
    ///
    /// The new element's offset parent defaults to `parent`, or to nothing
    /// when `parent` is the document.
    pub fn append_element(
        &mut self,
        parent: ElementId,
        geometry: ElementGeometry,
    ) -> Result<ElementId, SnapshotError> {
        self.node(parent)?;
        let id = next_id(self.nodes.len())?;
        let offset_parent = (parent != ElementId::DOCUMENT).then_some(parent);

        self.nodes.push(SnapshotNode {
            offset_parent,
            geometry,
            ..SnapshotNode::default()
        });
        tracing::trace!("Snapshot element {:?} appended under {:?}", id, parent);
        Ok(id)
    }

    /// Override the offset parent of `el`
    pub fn set_offset_parent(
        &mut self,
        el: ElementId,
        offset_parent: Option<ElementId>,
    ) -> Result<(), SnapshotError> {
        if let Some(parent) = offset_parent {
            if parent == el {
                return Err(SnapshotError::SelfParent(el));
            }
            self.node(parent)?;
        }
        self.node_mut(el)?.offset_parent = offset_parent;
        Ok(())
    }

    /// Record the viewport-relative rect reported for `el`
    pub fn set_bounding_rect(
        &mut self,
        el: ElementId,
        rect: DomRect,
    ) -> Result<(), SnapshotError> {
        self.node_mut(el)?.bounding_rect = Some(rect);
        Ok(())
    }

    pub fn set_computed_style(
        &mut self,
        el: ElementId,
        property: &str,
        value: &str,
    ) -> Result<(), SnapshotError> {
        self.node_mut(el)?.computed.set(property, value);
        Ok(())
    }

    pub fn set_inline_style(
        &mut self,
        el: ElementId,
        property: &str,
        value: &str,
    ) -> Result<(), SnapshotError> {
        self.node_mut(el)?.inline.set(property, value);
        Ok(())
    }

    pub fn set_current_style(
        &mut self,
        el: ElementId,
        property: &str,
        value: &str,
    ) -> Result<(), SnapshotError> {
        self.node_mut(el)?.current.set(property, value);
        Ok(())
    }

    /// Window page scroll; `None` simulates a host without a window
    pub fn set_page_offset(&mut self, offset: Option<(f64, f64)>) {
        self.page_offset = offset;
    }

    /// Toggle `getComputedStyle` support
    pub fn set_computed_style_supported(&mut self, supported: bool) {
        self.computed_style_supported = supported;
    }

    /// Scroll an element, clamped to its scrollable range
    pub fn scroll_to(&mut self, el: ElementId, x: f64, y: f64) -> Result<(), SnapshotError> {
        self.node_mut(el)?.geometry.scroll_to(x, y);
        Ok(())
    }

    pub fn geometry_mut(&mut self, el: ElementId) -> Option<&mut ElementGeometry> {
        self.nodes.get_mut(el.index()).map(|node| &mut node.geometry)
    }

    fn node(&self, el: ElementId) -> Result<&SnapshotNode, SnapshotError> {
        self.nodes.get(el.index()).ok_or(SnapshotError::UnknownElement(el))
    }

    fn node_mut(&mut self, el: ElementId) -> Result<&mut SnapshotNode, SnapshotError> {
        self.nodes.get_mut(el.index()).ok_or(SnapshotError::UnknownElement(el))
    }

    fn geometry_or_default(&self, el: ElementId) -> ElementGeometry {
        match self.nodes.get(el.index()) {
            Some(node) => node.geometry.clone(),
            None => {
                tracing::warn!("Layout query for unknown snapshot element {:?}", el);
                ElementGeometry::default()
            }
        }
    }
}

/// Id for the node stored at arena index `index`
fn next_id(index: usize) -> Result<ElementId, SnapshotError> {
    u32::try_from(index)
        .map(ElementId)
        .map_err(|_| SnapshotError::CapacityExceeded(index))
}

impl Default for LayoutSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutHost for LayoutSnapshot {
    type Element = ElementId;

    fn document(&self) -> ElementId {
        ElementId::DOCUMENT
    }

    fn document_element(&self) -> ElementId {
        ElementId::ROOT
    }

    fn bounding_client_rect(&self, el: ElementId) -> DomRect {
        match self.nodes.get(el.index()) {
            Some(node) => node
                .bounding_rect
                .unwrap_or_else(|| node.geometry.bounding_client_rect()),
            None => DomRect::new(),
        }
    }

    fn offset_width(&self, el: ElementId) -> f64 {
        self.geometry_or_default(el).offset_width
    }

    fn offset_height(&self, el: ElementId) -> f64 {
        self.geometry_or_default(el).offset_height
    }

    fn client_top(&self, el: ElementId) -> f64 {
        self.geometry_or_default(el).client_top
    }

    fn client_left(&self, el: ElementId) -> f64 {
        self.geometry_or_default(el).client_left
    }

    fn scroll_top(&self, el: ElementId) -> f64 {
        self.geometry_or_default(el).scroll_top
    }

    fn scroll_left(&self, el: ElementId) -> f64 {
        self.geometry_or_default(el).scroll_left
    }

    fn offset_parent(&self, el: ElementId) -> Option<ElementId> {
        self.nodes.get(el.index()).and_then(|node| node.offset_parent)
    }

    fn page_offset(&self) -> Option<(f64, f64)> {
        self.page_offset
    }

    fn computed_style(&self, el: ElementId, property: &str) -> Option<String> {
        if !self.computed_style_supported {
            return None;
        }
        let node = self.nodes.get(el.index())?;
        node.computed.get(property).map(str::to_string)
    }

    fn inline_style(&self, el: ElementId, property: &str) -> Option<String> {
        let node = self.nodes.get(el.index())?;
        node.inline.get(property).map(str::to_string)
    }

    fn current_style(&self, el: ElementId, property: &str) -> Option<String> {
        let node = self.nodes.get(el.index())?;
        node.current.get(property).map(str::to_string)
    }
}
