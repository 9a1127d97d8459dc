//! fOS Geometry - element layout metrics
//!
//! Viewport rectangles, offset/client/scroll metrics and the [`LayoutHost`]
//! trait that overlay positioning queries them through.

mod geometry;
mod host;
mod snapshot;
mod style;

pub use geometry::{DomRect, ElementGeometry};
pub use host::LayoutHost;
pub use snapshot::{ElementId, LayoutSnapshot};
pub use style::StyleMap;

/// Snapshot mutation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("Unknown element {0:?}")]
    UnknownElement(ElementId),
    #[error("Element {0:?} cannot be its own offset parent")]
    SelfParent(ElementId),
    #[error("Snapshot cannot hold more than {max} elements (index {0})", max = u32::MAX)]
    CapacityExceeded(usize),
}
