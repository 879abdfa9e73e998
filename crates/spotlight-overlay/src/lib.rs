#![forbid(unsafe_code)]

//! Spotlight: a guided-tour overlay for touch UIs.
//!
//! Highlights a sequence of on-screen elements one at a time, places an
//! explanatory message box next to each without covering it, and lets the
//! user step forward, backward, or dismiss the tour.
//!
//! # Role in the system
//! This crate is the geometry and state core only. The host owns rendering,
//! styling, and the step content; Spotlight owns three things:
//!
//! - **Layout resolver** ([`measure`]): asynchronously resolves the absolute
//!   on-screen rectangle of every tour target through the host's measurement
//!   primitive, joining all measurements before any result is applied.
//! - **Placement engine** ([`placement`]): a pure function from target
//!   rectangle, message-box height, and screen metrics to a placement
//!   decision (above/below, left/right aligned, arrow orientation).
//! - **Tour controller** ([`tour`]): the `Hidden`/`Showing` state machine
//!   that owns the step list, the current index, and the re-measurement
//!   lifecycle.
//!
//! The render contract is [`scene::OverlayScene`]: for the current step the
//! controller emits scrim, highlight, and message-box geometry, or nothing
//! at all when the step has no usable layout. Anomalies never surface as
//! errors to the host; they degrade to an empty render.
//!
//! # Example
//!
//! ```ignore
//! use spotlight_core::{EdgeInsets, ScreenMetrics};
//! use spotlight_overlay::{BoxPhase, TourController, TutorialStep, measure_all};
//!
//! let mut tour: TourController<()> = TourController::new(vec![
//!     TutorialStep::new("Tap here to add an item"),
//!     TutorialStep::new("Swipe left to delete"),
//! ]);
//!
//! // Showing the tour requests a measurement pass over all targets.
//! let request = tour.show().expect("tour was hidden");
//! let layouts = futures::executor::block_on(measure_all(&handles));
//! tour.apply_layouts(request.token, layouts);
//!
//! let screen = ScreenMetrics::new(390.0, 844.0, EdgeInsets::new(47.0, 34.0));
//! let scene = tour.overlay_scene(&screen, BoxPhase::Measuring);
//! ```

pub mod error;
pub mod measure;
pub mod placement;
pub mod scene;
pub mod step;
pub mod tour;

pub use error::MeasureError;
pub use measure::{Measurable, RawMeasurement, measure_all};
pub use placement::{
    ARROW_EDGE_INSET, ARROW_HALF_WIDTH, ARROW_RISE, ArrowSide, ArrowSpec, BoxPhase, GAP,
    HorizontalAlign, Placement, VerticalSide, place,
};
pub use scene::{Highlight, MessageBox, MessageBoxLayout, OverlayScene};
pub use step::TutorialStep;
pub use tour::{MeasureRequest, MeasureToken, NavReason, TourController, TourEvent};
