//! Geometry values
//!
//! DomRect and the offset/client/scroll metrics of a laid-out element.

/// Viewport-relative rectangle, as returned by `getBoundingClientRect`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DomRect {
    /// Create empty rect
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with dimensions
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top edge (same as y)
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Left edge (same as x)
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Width, or `None` when the engine reported zero or NaN
    pub fn reported_width(&self) -> Option<f64> {
        reported(self.width)
    }

    /// Height, or `None` when the engine reported zero or NaN
    pub fn reported_height(&self) -> Option<f64> {
        reported(self.height)
    }
}

fn reported(value: f64) -> Option<f64> {
    (value != 0.0 && !value.is_nan()).then_some(value)
}

/// Element geometry state
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementGeometry {
    // Offset properties (relative to offsetParent)
    pub offset_top: f64,
    pub offset_left: f64,
    pub offset_width: f64,
    pub offset_height: f64,

    // Border widths as seen through clientTop/clientLeft
    pub client_top: f64,
    pub client_left: f64,
    pub client_width: f64,
    pub client_height: f64,

    // Scroll properties
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
}

impl ElementGeometry {
    /// Box of the given size at an offset, without borders or overflow
    pub fn sized(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            offset_top: top,
            offset_left: left,
            offset_width: width,
            offset_height: height,
            client_width: width,
            client_height: height,
            scroll_width: width,
            scroll_height: height,
            ..Self::default()
        }
    }

    /// Set border widths, shrinking the client box accordingly
    pub fn with_border(mut self, top: f64, left: f64) -> Self {
        self.client_top = top;
        self.client_left = left;
        self.client_width = (self.offset_width - 2.0 * left).max(0.0);
        self.client_height = (self.offset_height - 2.0 * top).max(0.0);
        self
    }

    /// Set the scrollable content size
    pub fn with_scroll_size(mut self, width: f64, height: f64) -> Self {
        self.scroll_width = width;
        self.scroll_height = height;
        self
    }

    /// Bounding rect derived from the offset box.
    ///
    /// Only exact when every offset ancestor sits at the viewport origin;
    /// layout hosts that know better report their own rect.
    pub fn bounding_client_rect(&self) -> DomRect {
        DomRect::from_xywh(
            self.offset_left,
            self.offset_top,
            self.offset_width,
            self.offset_height,
        )
    }

    /// Scroll to position, clamped to the scrollable range
    pub fn scroll_to(&mut self, x: f64, y: f64) {
        let max_x = (self.scroll_width - self.client_width).max(0.0);
        let max_y = (self.scroll_height - self.client_height).max(0.0);
        self.scroll_left = x.clamp(0.0, max_x);
        self.scroll_top = y.clamp(0.0, max_y);
    }
}
