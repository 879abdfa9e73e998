//! Tour step data.

use std::fmt;

use spotlight_core::Rect;

/// Renderer for a custom highlight visual, applied to the target layout.
pub type HighlightRenderer<V> = Box<dyn Fn(Rect) -> V>;

/// One stop on the tour.
///
/// `V` is the host's visual type; Spotlight never interprets it. The
/// description and the optional highlight renderer are supplied once by the
/// host and immutable afterwards; the layout is written only by the tour
/// controller when a measurement pass lands.
pub struct TutorialStep<V> {
    description: String,
    layout: Option<Rect>,
    render_highlight: Option<HighlightRenderer<V>>,
}

impl<V> TutorialStep<V> {
    /// Create a step with the given description and no layout yet.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            layout: None,
            render_highlight: None,
        }
    }

    /// Attach a custom highlight renderer.
    ///
    /// The renderer receives the measured target layout; the message box is
    /// still placed against that same layout regardless of what shape the
    /// custom visual takes.
    #[must_use]
    pub fn with_highlight(mut self, render: impl Fn(Rect) -> V + 'static) -> Self {
        self.render_highlight = Some(Box::new(render));
        self
    }

    /// The explanatory text shown in the message box.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The measured target layout.
    ///
    /// `None` means "not yet measured"; a zero-area rect means "measured but
    /// unusable". Both cause the overlay to render nothing for this step.
    pub fn layout(&self) -> Option<Rect> {
        self.layout
    }

    /// Whether the host supplied a custom highlight renderer.
    pub fn has_custom_highlight(&self) -> bool {
        self.render_highlight.is_some()
    }

    pub(crate) fn set_layout(&mut self, layout: Rect) {
        self.layout = Some(layout);
    }

    /// Run the custom highlight renderer against the given layout, if any.
    pub(crate) fn custom_highlight(&self, layout: Rect) -> Option<V> {
        self.render_highlight.as_ref().map(|render| render(layout))
    }
}

impl<V> fmt::Debug for TutorialStep<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TutorialStep")
            .field("description", &self.description)
            .field("layout", &self.layout)
            .field("custom_highlight", &self.render_highlight.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_step_has_no_layout() {
        let step: TutorialStep<()> = TutorialStep::new("Tap the button");
        assert_eq!(step.description(), "Tap the button");
        assert_eq!(step.layout(), None);
        assert!(!step.has_custom_highlight());
    }

    #[test]
    fn custom_highlight_receives_the_layout() {
        let step = TutorialStep::new("ring").with_highlight(|layout: Rect| layout.area());
        let visual = step.custom_highlight(Rect::new(0.0, 0.0, 4.0, 5.0));
        assert_eq!(visual, Some(20.0));
    }

    #[test]
    fn debug_shows_highlight_presence_not_the_closure() {
        let step: TutorialStep<u8> = TutorialStep::new("x").with_highlight(|_| 0);
        let rendered = format!("{step:?}");
        assert!(rendered.contains("custom_highlight: true"));
    }
}
