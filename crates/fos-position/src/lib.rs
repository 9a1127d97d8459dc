//! fOS Position - overlay anchoring
//!
//! Computes where tooltips, dropdowns and popovers go relative to the
//! element they belong to.
//!
//! # Example
//! ```rust,ignore
//! use fos_geometry::LayoutSnapshot;
//! use fos_position::Positioner;
//!
//! let positioner = Positioner::new(&snapshot);
//! let pos = positioner.position_elements_str(button, tooltip, "bottom-left", true)?;
//! ```

mod config;
mod placement;
mod positioner;

pub use config::{PlacementMode, PositionConfig};
pub use placement::{Alignment, Placement, Side};
pub use positioner::Positioner;

/// Element rectangle in pixels.
///
/// `top`/`left` are document-relative from `offset` and relative to the
/// positioned ancestor from `position`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub left: f64,
}

/// Computed top/left for a floating element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementPosition {
    pub top: f64,
    pub left: f64,
}

impl ElementPosition {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Positioning error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("Invalid placement '{placement}': {reason} '{token}'")]
    InvalidPlacement {
        placement: String,
        token: String,
        reason: &'static str,
    },
}
