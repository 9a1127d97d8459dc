//! Placement directives
//!
//! `"<side>-<alignment>"` strings such as `"top-left"` or `"right"`, parsed
//! into a side of the host and an alignment along the host edge.

use std::fmt;
use std::str::FromStr;

use crate::{ElementPosition, PlacementMode, PositionError, Rect};

/// Side of the host the target sits on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Parse a side token. Anything unrecognized places the target on top.
    pub fn from_token(token: &str) -> Self {
        match token {
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            "top" => Side::Top,
            other => {
                if !other.is_empty() {
                    tracing::debug!("Unknown placement side '{}', using top", other);
                }
                Side::Top
            }
        }
    }

    /// Left/right sides align vertically, top/bottom horizontally
    pub fn aligns_vertically(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Alignment of the target along the host edge it sits on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Left edge (top/bottom sides) or top edge (left/right sides)
    Start,
    #[default]
    Center,
    /// Right edge (top/bottom sides) or bottom edge (left/right sides)
    End,
}

impl Alignment {
    /// Parse an alignment token for the cross axis of `side`
    fn from_token(token: &str, side: Side) -> Option<Self> {
        match (token, side.aligns_vertically()) {
            ("center", _) => Some(Alignment::Center),
            ("left", false) | ("top", true) => Some(Alignment::Start),
            ("right", false) | ("bottom", true) => Some(Alignment::End),
            _ => None,
        }
    }

    /// Token for this alignment on the cross axis of `side`
    pub fn token(self, side: Side) -> &'static str {
        match (self, side.aligns_vertically()) {
            (Alignment::Center, _) => "center",
            (Alignment::Start, false) => "left",
            (Alignment::End, false) => "right",
            (Alignment::Start, true) => "top",
            (Alignment::End, true) => "bottom",
        }
    }

    /// Target left for this alignment against the host's horizontal extent
    pub fn horizontal(self, host: &Rect, target_width: f64) -> f64 {
        match self {
            Alignment::Center => host.left + host.width / 2.0 - target_width / 2.0,
            Alignment::Start => host.left,
            Alignment::End => host.left + host.width,
        }
    }

    /// Target top for this alignment against the host's vertical extent
    pub fn vertical(self, host: &Rect, target_height: f64) -> f64 {
        match self {
            Alignment::Center => host.top + host.height / 2.0 - target_height / 2.0,
            Alignment::Start => host.top,
            Alignment::End => host.top + host.height,
        }
    }
}

/// Where a floating element goes relative to its host.
///
/// Serializes as its strict string form, e.g. `"bottom-left"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Placement {
    pub side: Side,
    pub align: Alignment,
}

impl Placement {
    pub const fn new(side: Side, align: Alignment) -> Self {
        Self { side, align }
    }

    /// Parse a placement string.
    ///
    /// The side defaults to top and the alignment to center. An alignment
    /// token that is unknown or lies on the wrong axis (`"top-bottom"`) is
    /// rejected in strict mode and replaced by center in lenient mode.
    pub fn parse(input: &str, mode: PlacementMode) -> Result<Self, PositionError> {
        let mut parts = input.split('-');
        let side = Side::from_token(parts.next().unwrap_or_default());
        let align_token = parts.next().filter(|token| !token.is_empty());

        let align = match align_token {
            None => Alignment::Center,
            Some(token) => match Alignment::from_token(token, side) {
                Some(align) => align,
                None => {
                    let reason = if Alignment::from_token(token, flip_axis(side)).is_some() {
                        "alignment lies on the wrong axis for this side"
                    } else {
                        "unknown alignment"
                    };
                    match mode {
                        PlacementMode::Strict => {
                            return Err(PositionError::InvalidPlacement {
                                placement: input.to_string(),
                                token: token.to_string(),
                                reason,
                            });
                        }
                        PlacementMode::Lenient => {
                            tracing::warn!(
                                "Placement '{}': {} '{}', centering",
                                input,
                                reason,
                                token
                            );
                            Alignment::Center
                        }
                    }
                }
            },
        };

        Ok(Self { side, align })
    }

    /// Anchor a target of the given size against the host rect
    pub fn resolve(&self, host: &Rect, target_width: f64, target_height: f64) -> ElementPosition {
        match self.side {
            Side::Right => ElementPosition::new(
                self.align.vertical(host, target_height),
                Alignment::End.horizontal(host, target_width),
            ),
            Side::Left => ElementPosition::new(
                self.align.vertical(host, target_height),
                host.left - target_width,
            ),
            Side::Bottom => ElementPosition::new(
                Alignment::End.vertical(host, target_height),
                self.align.horizontal(host, target_width),
            ),
            Side::Top => ElementPosition::new(
                host.top - target_height,
                self.align.horizontal(host, target_width),
            ),
        }
    }
}

fn flip_axis(side: Side) -> Side {
    if side.aligns_vertically() { Side::Top } else { Side::Left }
}

impl FromStr for Placement {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placement::parse(s, PlacementMode::Strict)
    }
}

impl TryFrom<String> for Placement {
    type Error = PositionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        placement.to_string()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.side.as_str(), self.align.token(self.side))
    }
}
