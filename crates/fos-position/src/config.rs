//! Positioner configuration

/// How placement strings with a bad alignment token are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlacementMode {
    /// Reject with `PositionError::InvalidPlacement`
    Strict,
    /// Fall back to center alignment
    #[default]
    Lenient,
}

/// Positioner settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PositionConfig {
    pub placement_mode: PlacementMode,
    /// Consult the engine-specific `currentStyle` before computed style
    pub legacy_current_style: bool,
    /// Offset-parent hops walked before giving up on a positioned ancestor
    pub max_ancestor_depth: usize,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            placement_mode: PlacementMode::Lenient,
            legacy_current_style: false,
            max_ancestor_depth: 256,
        }
    }
}

impl PositionConfig {
    pub fn with_placement_mode(mut self, mode: PlacementMode) -> Self {
        self.placement_mode = mode;
        self
    }

    pub fn with_legacy_current_style(mut self, enabled: bool) -> Self {
        self.legacy_current_style = enabled;
        self
    }

    pub fn with_max_ancestor_depth(mut self, depth: usize) -> Self {
        self.max_ancestor_depth = depth;
        self
    }

    /// Strict placement parsing, everything else default
    pub fn strict() -> Self {
        Self::default().with_placement_mode(PlacementMode::Strict)
    }
}
