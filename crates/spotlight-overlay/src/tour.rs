//! Tour controller: the `Hidden`/`Showing` state machine.
//!
//! Owns the step list, the current index, and the visibility flag. All
//! mutation of tour state goes through this type; the placement engine and
//! the scene builder only read it. Out-of-range navigation is a no-op, never
//! an error: the host hides the "Next" affordance on the last step, but a
//! stray call must not corrupt state.
//!
//! Measurement lifecycle: becoming visible requests exactly one measurement
//! pass over all targets ([`TourController::show`] returns a
//! [`MeasureRequest`]); `next`/`prev` never re-measure. Each pass carries a
//! monotonic generation token so a slow pass that resolves after a newer one
//! was requested is discarded instead of clobbering fresher layouts.

use spotlight_core::Rect;
use tracing::{debug, trace};

use crate::step::TutorialStep;

/// Why a step change happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavReason {
    /// Forward navigation.
    Next,
    /// Backward navigation.
    Prev,
    /// The tour was re-shown and restarted from the first step.
    Restart,
}

/// Emitted on state transitions so the host can drive its own callbacks
/// (`on_prev`, `on_next`, `on_done`) and anything beyond them, analytics
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TourEvent {
    /// The current step changed while visible.
    StepChanged {
        from: usize,
        to: usize,
        reason: NavReason,
    },
    /// The tour was dismissed. The step index is kept, not reset.
    Dismissed { at_step: usize },
}

/// Token identifying one measurement pass.
///
/// Monotonically increasing per controller; results tagged with a superseded
/// token are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MeasureToken(u64);

/// Request for the host: measure all step targets and hand the layouts back
/// through [`TourController::apply_layouts`] with the same token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureRequest {
    /// Pass identity; echo it back with the results.
    pub token: MeasureToken,
    /// How many layouts the controller expects, one per step in order.
    pub step_count: usize,
}

/// The tour state machine.
///
/// Starts hidden. Single writer: in a multi-threaded host, route all calls
/// through one owner.
pub struct TourController<V> {
    steps: Vec<TutorialStep<V>>,
    current: usize,
    visible: bool,
    shown_before: bool,
    generation: u64,
}

impl<V> TourController<V> {
    /// Create a hidden controller over the host-supplied step list.
    ///
    /// The step list is adopted verbatim and its length never changes; only
    /// each step's layout field is rewritten by measurement passes.
    pub fn new(steps: Vec<TutorialStep<V>>) -> Self {
        Self {
            steps,
            current: 0,
            visible: false,
            shown_before: false,
            generation: 0,
        }
    }

    /// Whether the overlay should be rendered at all.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Index of the current step.
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// Number of steps in the tour.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The steps, in order.
    pub fn steps(&self) -> &[TutorialStep<V>] {
        &self.steps
    }

    /// The current step, if the list is non-empty.
    pub fn current(&self) -> Option<&TutorialStep<V>> {
        self.steps.get(self.current)
    }

    /// Whether backward navigation is possible. Hosts disable the
    /// "Previous" affordance when this is false.
    pub fn prev_enabled(&self) -> bool {
        self.current > 0
    }

    /// Whether the current step is the last one. Hosts swap "Next" for
    /// "Done" when this is true.
    pub fn is_last_step(&self) -> bool {
        !self.steps.is_empty() && self.current == self.steps.len() - 1
    }

    /// Advance to the next step. No-op when hidden or already at the last
    /// step.
    pub fn next(&mut self) -> Option<TourEvent> {
        if !self.visible || self.current + 1 >= self.steps.len() {
            return None;
        }
        let from = self.current;
        self.current += 1;
        debug!(from, to = self.current, "tour step forward");
        Some(TourEvent::StepChanged {
            from,
            to: self.current,
            reason: NavReason::Next,
        })
    }

    /// Go back one step. No-op when hidden or already at the first step.
    pub fn prev(&mut self) -> Option<TourEvent> {
        if !self.visible || self.current == 0 {
            return None;
        }
        let from = self.current;
        self.current -= 1;
        debug!(from, to = self.current, "tour step back");
        Some(TourEvent::StepChanged {
            from,
            to: self.current,
            reason: NavReason::Prev,
        })
    }

    /// Dismiss the tour. The step index is deliberately kept; a later
    /// [`show`](Self::show) restarts from step 0 anyway.
    pub fn done(&mut self) -> Option<TourEvent> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        debug!(at_step = self.current, "tour dismissed");
        Some(TourEvent::Dismissed {
            at_step: self.current,
        })
    }

    /// Make the tour visible and request a measurement pass.
    ///
    /// Element positions may have changed since the tour last ran (scroll,
    /// rotation, content changes), so every `Hidden -> Showing` transition
    /// re-measures all targets up front; a re-activation also restarts at
    /// step 0. Returns `None` when already visible or when the step list is
    /// empty (an empty tour stays hidden; every operation on it is a no-op).
    pub fn show(&mut self) -> Option<MeasureRequest> {
        if self.visible || self.steps.is_empty() {
            return None;
        }
        if self.shown_before {
            self.current = 0;
        }
        self.shown_before = true;
        self.visible = true;
        self.generation += 1;
        debug!(generation = self.generation, steps = self.steps.len(), "tour shown");
        Some(MeasureRequest {
            token: MeasureToken(self.generation),
            step_count: self.steps.len(),
        })
    }

    /// Store the layouts from a measurement pass, one per step in order.
    ///
    /// Results from a superseded pass are discarded and `false` is returned;
    /// the layouts already in place stay untouched. A short result vector
    /// fills only the steps it covers (the rest keep their previous layout,
    /// typically none).
    pub fn apply_layouts(&mut self, token: MeasureToken, layouts: Vec<Rect>) -> bool {
        if token.0 != self.generation {
            debug!(
                stale = token.0,
                current = self.generation,
                "discarding layouts from superseded measurement pass"
            );
            return false;
        }
        trace!(count = layouts.len(), "applying measured layouts");
        for (step, layout) in self.steps.iter_mut().zip(layouts) {
            step.set_layout(layout);
        }
        true
    }
}

impl<V> Default for TourController<V> {
    /// Hidden, with an empty step list.
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
