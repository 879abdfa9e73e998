//! Overlay scene: the geometry contract handed to the render layer.
//!
//! For the current step the controller emits a full-screen scrim, a
//! highlight visual at the target, and the message box with its navigation
//! affordance state. The scene is `None` — render nothing — whenever the
//! tour is hidden, the step list is empty, or the current target has no
//! usable layout. That covers every anomaly in the system: nothing here can
//! fail toward the host.

use spotlight_core::{Rect, ScreenMetrics};

use crate::placement::{self, ArrowSpec, BoxPhase, Placement};
use crate::tour::TourController;

/// Highlight visual for the current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Highlight<V> {
    /// Host-supplied custom visual, built from the target layout.
    Custom(V),
    /// Default highlight: the target rectangle itself.
    Target(Rect),
}

/// Message box geometry, one of the two passes of the layout cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageBoxLayout {
    /// First pass: the box renders at a provisional position so the host
    /// can capture its natural height and feed it back via
    /// [`BoxPhase::note_height`](crate::placement::BoxPhase::note_height).
    Measuring,
    /// Second pass: final placement and arrow geometry.
    Placed {
        placement: Placement,
        arrow: ArrowSpec,
    },
}

/// The message box for the current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageBox<'a> {
    /// Explanatory text for the step.
    pub description: &'a str,
    /// Box geometry, per layout pass.
    pub layout: MessageBoxLayout,
    /// Whether the "Previous" affordance is enabled (false on step 0).
    pub prev_enabled: bool,
    /// Whether to show "Done" instead of "Next" (true on the last step).
    pub is_last_step: bool,
}

/// Everything the render layer paints for one frame of the tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayScene<'a, V> {
    /// Full-screen dimming scrim.
    pub scrim: Rect,
    /// Highlight at the target.
    pub highlight: Highlight<V>,
    /// The message box.
    pub message_box: MessageBox<'a>,
}

impl<V> TourController<V> {
    /// Build the scene for the current step, or `None` to render nothing.
    ///
    /// `None` when the tour is hidden, the step list is empty, or the
    /// current target is unmeasured or measured as empty. While `box_phase`
    /// is still [`BoxPhase::Measuring`] the message box carries no final
    /// position; the host renders it once to measure, reports the height,
    /// and composes again.
    pub fn overlay_scene(
        &self,
        screen: &ScreenMetrics,
        box_phase: BoxPhase,
    ) -> Option<OverlayScene<'_, V>> {
        if !self.is_visible() {
            return None;
        }
        let step = self.current()?;
        let target = step.layout()?;
        if target.is_empty() {
            return None;
        }

        let layout = match box_phase.height() {
            None => MessageBoxLayout::Measuring,
            Some(height) => {
                let placement = placement::place(target, height, screen)?;
                MessageBoxLayout::Placed {
                    placement,
                    arrow: placement.arrow(),
                }
            }
        };

        let highlight = match step.custom_highlight(target) {
            Some(visual) => Highlight::Custom(visual),
            None => Highlight::Target(target),
        };

        Some(OverlayScene {
            scrim: Rect::new(0.0, 0.0, screen.width, screen.height),
            highlight,
            message_box: MessageBox {
                description: step.description(),
                layout,
                prev_enabled: self.prev_enabled(),
                is_last_step: self.is_last_step(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use spotlight_core::EdgeInsets;

    use crate::placement::VerticalSide;
    use crate::step::TutorialStep;

    fn screen() -> ScreenMetrics {
        ScreenMetrics::new(800.0, 600.0, EdgeInsets::new(20.0, 20.0))
    }

    fn shown_tour() -> TourController<&'static str> {
        let mut tour = TourController::new(vec![
            TutorialStep::new("first"),
            TutorialStep::new("second").with_highlight(|_| "ring"),
        ]);
        let request = tour.show().unwrap();
        tour.apply_layouts(
            request.token,
            vec![
                Rect::new(50.0, 100.0, 100.0, 40.0),
                Rect::new(700.0, 520.0, 80.0, 30.0),
            ],
        );
        tour
    }

    #[test]
    fn hidden_tour_renders_nothing() {
        let mut tour = shown_tour();
        tour.done().unwrap();
        assert!(tour.overlay_scene(&screen(), BoxPhase::Measuring).is_none());
    }

    #[test]
    fn unmeasured_step_renders_nothing() {
        let mut tour: TourController<()> = TourController::new(vec![TutorialStep::new("x")]);
        tour.show().unwrap();
        // No layouts applied yet.
        assert!(tour.overlay_scene(&screen(), BoxPhase::Measuring).is_none());
    }

    #[test]
    fn empty_layout_renders_nothing() {
        let mut tour: TourController<()> = TourController::new(vec![TutorialStep::new("x")]);
        let request = tour.show().unwrap();
        tour.apply_layouts(request.token, vec![Rect::default()]);
        assert!(
            tour.overlay_scene(&screen(), BoxPhase::Placed { height: 80.0 })
                .is_none()
        );
    }

    #[test]
    fn measuring_phase_emits_provisional_message_box() {
        let tour = shown_tour();
        let scene = tour.overlay_scene(&screen(), BoxPhase::Measuring).unwrap();
        assert_eq!(scene.message_box.layout, MessageBoxLayout::Measuring);
        assert_eq!(scene.message_box.description, "first");
        assert_eq!(scene.scrim, Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!(!scene.message_box.prev_enabled);
        assert!(!scene.message_box.is_last_step);
    }

    #[test]
    fn placed_phase_carries_placement_and_arrow() {
        let tour = shown_tour();
        let scene = tour
            .overlay_scene(&screen(), BoxPhase::Placed { height: 80.0 })
            .unwrap();
        let MessageBoxLayout::Placed { placement, arrow } = scene.message_box.layout else {
            panic!("expected placed message box");
        };
        assert_eq!(placement.vertical, VerticalSide::Below);
        assert_eq!(arrow.side, placement.vertical.arrow_side());
        assert_eq!(scene.highlight, Highlight::Target(Rect::new(50.0, 100.0, 100.0, 40.0)));
    }

    #[test]
    fn custom_highlight_replaces_default_but_not_placement() {
        let mut tour = shown_tour();
        tour.next().unwrap();
        let scene = tour
            .overlay_scene(&screen(), BoxPhase::Placed { height: 80.0 })
            .unwrap();
        assert_eq!(scene.highlight, Highlight::Custom("ring"));
        // The box is still placed against the raw target layout.
        let MessageBoxLayout::Placed { placement, .. } = scene.message_box.layout else {
            panic!("expected placed message box");
        };
        assert_eq!(placement.vertical, VerticalSide::Above);
        assert!(scene.message_box.prev_enabled);
        assert!(scene.message_box.is_last_step);
    }
}
