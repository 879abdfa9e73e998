//! Geometric primitives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in absolute screen points.
///
/// Origin is the top-left corner of the screen; `top`/`left` locate the
/// rectangle's own top-left corner. A measurement that could not be taken is
/// represented as `Option::<Rect>::None` by callers, never as a zero rect;
/// a zero-area `Rect` means "measured, but empty".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Distance from the left screen edge.
    pub left: f32,
    /// Distance from the top screen edge.
    pub top: f32,
    /// Width in points. Never negative.
    pub width: f32,
    /// Height in points. Never negative.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Area in square points.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether the rectangle covers no area.
    ///
    /// Empty rects are unusable for placement; callers skip them.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// Safe-area insets, in points, as reported by the host platform.
///
/// Only the vertical insets participate in placement; horizontal insets are
/// not part of the placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeInsets {
    /// Inset below the top screen edge (status bar, notch).
    pub top: f32,
    /// Inset above the bottom screen edge (home indicator).
    pub bottom: f32,
}

impl EdgeInsets {
    /// Create insets from top and bottom values.
    #[inline]
    pub const fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Zero insets.
    #[inline]
    pub const fn none() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Viewport dimensions plus safe-area insets.
///
/// This is an explicitly passed value, not process-wide state: the host reads
/// it from the platform and refreshes it on rotation or resize, then hands it
/// to every placement computation. Stale geometry after rotation is the
/// host's bug to avoid, not this crate's to detect.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenMetrics {
    /// Viewport width in points.
    pub width: f32,
    /// Viewport height in points.
    pub height: f32,
    /// Safe-area insets.
    pub insets: EdgeInsets,
}

impl ScreenMetrics {
    /// Create screen metrics.
    #[inline]
    pub const fn new(width: f32, height: f32, insets: EdgeInsets) -> Self {
        Self {
            width,
            height,
            insets,
        }
    }

    /// Usable vertical space: viewport height minus both vertical insets.
    ///
    /// Clamped at zero for degenerate inset values.
    #[inline]
    pub fn safe_height(&self) -> f32 {
        (self.height - self.insets.top - self.insets.bottom).max(0.0)
    }

    /// Horizontal midpoint of the viewport.
    #[inline]
    pub fn mid_x(&self) -> f32 {
        self.width / 2.0
    }
}
