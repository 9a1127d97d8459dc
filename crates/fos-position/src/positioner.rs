//! Offset and position queries
//!
//! Read-only equivalents of jQuery's `offset()` and `position()`, plus
//! anchoring of a floating target to a host element.

use fos_geometry::{DomRect, LayoutHost};

use crate::{ElementPosition, Placement, PositionConfig, PositionError, Rect};

/// Layout queries for anchoring overlays, bound to one layout host
#[derive(Debug, Clone)]
pub struct Positioner<H: LayoutHost> {
    host: H,
    config: PositionConfig,
}

impl<H: LayoutHost> Positioner<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, PositionConfig::default())
    }

    pub fn with_config(host: H, config: PositionConfig) -> Self {
        Self { host, config }
    }

    /// Rect of `el` relative to the top-left of the whole document
    pub fn offset(&self, el: H::Element) -> Rect {
        let bcr = self.host.bounding_client_rect(el);
        let (width, height) = self.border_box_size(el, &bcr);
        let (scroll_x, scroll_y) = self.page_scroll();

        Rect {
            width,
            height,
            top: bcr.top() + scroll_y,
            left: bcr.left() + scroll_x,
        }
    }

    /// Rect of `el` relative to its nearest positioned ancestor
    pub fn position(&self, el: H::Element) -> Rect {
        let el_offset = self.offset(el);
        let parent = self.parent_offset_el(el);

        let (mut ref_top, mut ref_left) = (0.0, 0.0);
        if parent != self.host.document() {
            let parent_offset = self.offset(parent);
            ref_top =
                parent_offset.top + self.host.client_top(parent) - self.host.scroll_top(parent);
            ref_left =
                parent_offset.left + self.host.client_left(parent) - self.host.scroll_left(parent);
        }

        let bcr = self.host.bounding_client_rect(el);
        let (width, height) = self.border_box_size(el, &bcr);

        Rect {
            width,
            height,
            top: el_offset.top - ref_top,
            left: el_offset.left - ref_left,
        }
    }

    /// Nearest non-static offset ancestor of `el`, or the document
    pub fn parent_offset_el(&self, el: H::Element) -> H::Element {
        let document = self.host.document();
        let mut candidate = self.host.offset_parent(el).unwrap_or(document);
        let mut hops = 0;

        while candidate != document && self.is_static_positioned(candidate) {
            hops += 1;
            if hops > self.config.max_ancestor_depth {
                tracing::warn!(
                    "No positioned ancestor of {:?} within {} hops, using document",
                    el,
                    self.config.max_ancestor_depth
                );
                return document;
            }
            candidate = match self.host.offset_parent(candidate) {
                Some(next) => next,
                None => return document,
            };
        }

        candidate
    }

    /// True when `el` has no `position` or `position: static`
    pub fn is_static_positioned(&self, el: H::Element) -> bool {
        match self.get_style(el, "position") {
            Some(value) => value.is_empty() || value == "static",
            None => true,
        }
    }

    /// Resolve one style property of `el`
    pub fn get_style(&self, el: H::Element, property: &str) -> Option<String> {
        if self.config.legacy_current_style {
            if let Some(value) = self.host.current_style(el, property) {
                return Some(value);
            }
        }

        self.host
            .computed_style(el, property)
            .or_else(|| self.host.inline_style(el, property))
    }

    /// Top/left for `target` anchored to `host_el` per `placement`.
    ///
    /// With `append_to_body` the target is expected to live directly under
    /// the document, so document coordinates are used; otherwise the host's
    /// coordinates relative to its positioned ancestor.
    pub fn position_elements(
        &self,
        host_el: H::Element,
        target_el: H::Element,
        placement: Placement,
        append_to_body: bool,
    ) -> ElementPosition {
        let host_rect = if append_to_body {
            self.offset(host_el)
        } else {
            self.position(host_el)
        };
        let target_width = self.host.offset_width(target_el);
        let target_height = self.host.offset_height(target_el);

        let pos = placement.resolve(&host_rect, target_width, target_height);
        tracing::debug!(
            "Placed {:?} {} of {:?} at ({}, {})",
            target_el,
            placement,
            host_el,
            pos.left,
            pos.top
        );
        pos
    }

    /// [`position_elements`](Self::position_elements) taking a placement string
    pub fn position_elements_str(
        &self,
        host_el: H::Element,
        target_el: H::Element,
        placement: &str,
        append_to_body: bool,
    ) -> Result<ElementPosition, PositionError> {
        let placement = Placement::parse(placement, self.config.placement_mode)?;
        Ok(self.position_elements(host_el, target_el, placement, append_to_body))
    }

    /// Bounding size, falling back to the offset size for empty rects
    fn border_box_size(&self, el: H::Element, bcr: &DomRect) -> (f64, f64) {
        let width = bcr.reported_width().unwrap_or_else(|| {
            tracing::trace!("Zero bounding width for {:?}, using offsetWidth", el);
            self.host.offset_width(el)
        });
        let height = bcr.reported_height().unwrap_or_else(|| {
            tracing::trace!("Zero bounding height for {:?}, using offsetHeight", el);
            self.host.offset_height(el)
        });
        (width, height)
    }

    /// Window page scroll, each axis falling back to the root element's scroll
    fn page_scroll(&self) -> (f64, f64) {
        let root = self.host.document_element();
        let page = self.host.page_offset();

        let x = match page {
            Some((x, _)) if is_set(x) => x,
            _ => self.host.scroll_left(root),
        };
        let y = match page {
            Some((_, y)) if is_set(y) => y,
            _ => self.host.scroll_top(root),
        };
        if page.is_none() {
            tracing::trace!("No page offset, using root scroll ({}, {})", x, y);
        }
        (x, y)
    }
}

/// Zero and NaN count as unreported metrics
fn is_set(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
