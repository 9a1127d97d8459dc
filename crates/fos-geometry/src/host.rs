//! Layout host capability
//!
//! The narrow set of layout queries overlay positioning needs from whatever
//! owns the rendered tree: a live engine, a recorded snapshot, a test double.

use std::fmt::Debug;

use crate::DomRect;

/// Read-only layout queries over a rendered element tree.
pub trait LayoutHost {
    /// Opaque element handle
    type Element: Copy + Eq + Debug;

    /// The document node, terminal ancestor of every offset-parent chain
    fn document(&self) -> Self::Element;

    /// The root element (`<html>`), whose scroll is the page scroll fallback
    fn document_element(&self) -> Self::Element;

    /// Viewport-relative border box
    fn bounding_client_rect(&self, el: Self::Element) -> DomRect;

    fn offset_width(&self, el: Self::Element) -> f64;

    fn offset_height(&self, el: Self::Element) -> f64;

    /// Top border width
    fn client_top(&self, el: Self::Element) -> f64;

    /// Left border width
    fn client_left(&self, el: Self::Element) -> f64;

    fn scroll_top(&self, el: Self::Element) -> f64;

    fn scroll_left(&self, el: Self::Element) -> f64;

    /// Layout parent used as the origin for offset coordinates
    fn offset_parent(&self, el: Self::Element) -> Option<Self::Element>;

    /// Window page scroll as `(x, y)`, `None` when the host has no window
    fn page_offset(&self) -> Option<(f64, f64)>;

    /// Resolved style value; `None` if absent or computed style is unsupported
    fn computed_style(&self, el: Self::Element, property: &str) -> Option<String>;

    /// Value from the element's own `style` attribute
    fn inline_style(&self, el: Self::Element, property: &str) -> Option<String>;

    /// Engine-specific cascaded style (old Trident `currentStyle`)
    fn current_style(&self, _el: Self::Element, _property: &str) -> Option<String> {
        None
    }
}

impl<H: LayoutHost + ?Sized> LayoutHost for &H {
    type Element = H::Element;

    fn document(&self) -> Self::Element {
        (**self).document()
    }

    fn document_element(&self) -> Self::Element {
        (**self).document_element()
    }

    fn bounding_client_rect(&self, el: Self::Element) -> DomRect {
        (**self).bounding_client_rect(el)
    }

    fn offset_width(&self, el: Self::Element) -> f64 {
        (**self).offset_width(el)
    }

    fn offset_height(&self, el: Self::Element) -> f64 {
        (**self).offset_height(el)
    }

    fn client_top(&self, el: Self::Element) -> f64 {
        (**self).client_top(el)
    }

    fn client_left(&self, el: Self::Element) -> f64 {
        (**self).client_left(el)
    }

    fn scroll_top(&self, el: Self::Element) -> f64 {
        (**self).scroll_top(el)
    }

    fn scroll_left(&self, el: Self::Element) -> f64 {
        (**self).scroll_left(el)
    }

    fn offset_parent(&self, el: Self::Element) -> Option<Self::Element> {
        (**self).offset_parent(el)
    }

    fn page_offset(&self) -> Option<(f64, f64)> {
        (**self).page_offset()
    }

    fn computed_style(&self, el: Self::Element, property: &str) -> Option<String> {
        (**self).computed_style(el, property)
    }

    fn inline_style(&self, el: Self::Element, property: &str) -> Option<String> {
        (**self).inline_style(el, property)
    }

    fn current_style(&self, el: Self::Element, property: &str) -> Option<String> {
        (**self).current_style(el, property)
    }
}
