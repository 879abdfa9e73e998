//! Placement engine for the tutorial message box.
//!
//! [`place`] is the one decision point: given the target's measured
//! rectangle, the message box's rendered height, and the current screen
//! metrics, pick the vertical side, horizontal alignment, and arrow
//! orientation so the box never covers the target and stays inside the safe
//! viewport vertically. Pure and deterministic; recomputed whenever the box
//! height or the target layout changes, never cached across steps.
//!
//! The rules are greedy by design:
//!
//! - **Vertical**: prefer below; fall back to above when below would
//!   overflow the safe height. Above is not re-checked for upward overflow —
//!   overflowing upward is considered the lesser evil and is left visible.
//! - **Horizontal**: a midpoint heuristic, not a collision check. A very
//!   wide box near the midpoint can still overflow horizontally.

use spotlight_core::{Rect, ScreenMetrics};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spacing between the target and the message box, in points.
pub const GAP: f32 = 10.0;

/// Arrow inset from the box edge it is aligned against, in points.
pub const ARROW_EDGE_INSET: f32 = 10.0;

/// Half-width of the arrow triangle, in points.
pub const ARROW_HALF_WIDTH: f32 = 8.0;

/// Arrow height and how far it protrudes beyond the box edge, in points.
/// Sized so the arrow tip sits inside the gap without touching the target.
pub const ARROW_RISE: f32 = GAP / 1.4;

/// Which side of the target the message box sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VerticalSide {
    /// Box above the target.
    Above,
    /// Box below the target.
    Below,
}

impl VerticalSide {
    /// The box edge that carries the indicator arrow.
    ///
    /// Always the edge facing the target: below the target means the arrow
    /// sits on the box's top edge pointing up, and vice versa.
    #[inline]
    pub fn arrow_side(self) -> ArrowSide {
        match self {
            Self::Below => ArrowSide::Top,
            Self::Above => ArrowSide::Bottom,
        }
    }
}

/// Which screen edge the message box is aligned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HorizontalAlign {
    /// Box left edge pinned at an offset from the left screen edge.
    Left,
    /// Box right edge pinned at an offset from the right screen edge.
    Right,
}

/// Which edge of the message box the arrow is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArrowSide {
    /// Arrow on the box's top edge, pointing up at the target.
    Top,
    /// Arrow on the box's bottom edge, pointing down at the target.
    Bottom,
}

/// Geometry of the indicator arrow, relative to the message box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArrowSpec {
    /// Box edge the arrow sits on. Inverse of the vertical side.
    pub side: ArrowSide,
    /// Box edge the arrow hugs horizontally. Matches the box alignment.
    pub align: HorizontalAlign,
    /// Inset from the aligned box edge.
    pub edge_inset: f32,
    /// Half-width of the triangle base.
    pub half_width: f32,
    /// Height of the triangle, protruding beyond the box edge.
    pub rise: f32,
}

/// Where the message box goes for one step.
///
/// Derived, never stored: recomputed each time the box height or the target
/// layout changes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Vertical side relative to the target.
    pub vertical: VerticalSide,
    /// Horizontal alignment against a screen edge.
    pub horizontal: HorizontalAlign,
    /// Absolute top of the message box. May be negative when an oversized
    /// box falls back to `Above` near the top of the screen.
    pub box_top: f32,
    /// Offset from the aligned screen edge: distance from the left screen
    /// edge when left-aligned, from the right screen edge when right-aligned.
    pub edge_offset: f32,
}

impl Placement {
    /// Arrow geometry implied by this placement.
    pub fn arrow(&self) -> ArrowSpec {
        ArrowSpec {
            side: self.vertical.arrow_side(),
            align: self.horizontal,
            edge_inset: ARROW_EDGE_INSET,
            half_width: ARROW_HALF_WIDTH,
            rise: ARROW_RISE,
        }
    }
}

/// Decide where the message box goes for the given target.
///
/// Returns `None` for a zero-area target: an empty layout means the target
/// was unmeasurable, and the overlay renders nothing for that step rather
/// than pointing at a spot that does not exist.
pub fn place(target: Rect, box_height: f32, screen: &ScreenMetrics) -> Option<Placement> {
    if target.is_empty() {
        return None;
    }

    let fits_below = target.top + box_height + GAP < screen.safe_height();
    let (vertical, box_top) = if fits_below {
        (VerticalSide::Below, target.bottom() + GAP)
    } else {
        (VerticalSide::Above, target.top - box_height - GAP)
    };

    // Strict `<`: a target exactly at the midpoint aligns right.
    let (horizontal, edge_offset) = if target.left < screen.mid_x() {
        (HorizontalAlign::Left, target.left)
    } else {
        (
            HorizontalAlign::Right,
            screen.width - target.left - target.width,
        )
    };

    Some(Placement {
        vertical,
        horizontal,
        box_top,
        edge_offset,
    })
}

/// Two-pass message box layout.
///
/// The box height needed for [`place`] is only known once the box has
/// rendered its content, so each step goes through an explicit two-state
/// cycle: render once in `Measuring` (position provisional), report the
/// natural height, then render again placed. [`BoxPhase::note_height`]
/// returns whether a re-layout is actually needed, which bounds the cycle
/// at one extra pass — reporting the same height twice never re-triggers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoxPhase {
    /// Natural height not yet known; the box renders off-placement.
    #[default]
    Measuring,
    /// Height captured; placement can run.
    Placed {
        /// The box's measured natural height.
        height: f32,
    },
}

impl BoxPhase {
    /// Record the box's measured natural height.
    ///
    /// Returns `true` when the phase changed and one re-layout is required,
    /// `false` when the height is already current.
    pub fn note_height(&mut self, height: f32) -> bool {
        match *self {
            BoxPhase::Placed { height: current } if current == height => false,
            _ => {
                *self = BoxPhase::Placed { height };
                true
            }
        }
    }

    /// Forget the measured height. Called on step change, since the next
    /// step's content renders at a different natural height.
    pub fn reset(&mut self) {
        *self = BoxPhase::Measuring;
    }

    /// The measured height, if the measuring pass has completed.
    pub fn height(&self) -> Option<f32> {
        match *self {
            BoxPhase::Measuring => None,
            BoxPhase::Placed { height } => Some(height),
        }
    }
}
