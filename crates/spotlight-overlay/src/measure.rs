//! Layout resolver: asynchronous measurement of tour targets.
//!
//! The host owns the actual measurement primitive (a view handle that can
//! report its absolute window rectangle); this module fans out one
//! measurement per target, joins them all, and hands back layouts in input
//! order. The join is concurrent but not parallel: everything runs on the
//! host's single UI event loop, and the resolver suspends until every
//! measurement has completed. There is no timeout here; a handle that never
//! resolves stalls the whole pass, and hosts needing hard latency bounds
//! wrap the call themselves.

use futures::future::{LocalBoxFuture, join_all};
use spotlight_core::Rect;
use tracing::{debug, trace};

use crate::error::MeasureError;

/// Raw `(x, y, width, height)` tuple as reported by the host platform's
/// measurement callback, before normalization to [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawMeasurement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RawMeasurement {
    /// Create a raw measurement.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<RawMeasurement> for Rect {
    /// Normalize platform `x`/`y` to `left`/`top` storage form.
    #[inline]
    fn from(raw: RawMeasurement) -> Self {
        Rect::new(raw.x, raw.y, raw.width, raw.height)
    }
}

/// A host element handle that can report its absolute on-screen rectangle.
///
/// The future is not `Send`: measurement runs on the UI event loop, never on
/// another thread.
pub trait Measurable {
    /// Asynchronously query the element's absolute window rectangle.
    fn measure(&self) -> LocalBoxFuture<'_, Result<RawMeasurement, MeasureError>>;
}

impl<M: Measurable + ?Sized> Measurable for Box<M> {
    fn measure(&self) -> LocalBoxFuture<'_, Result<RawMeasurement, MeasureError>> {
        (**self).measure()
    }
}

impl<M: Measurable + ?Sized> Measurable for &M {
    fn measure(&self) -> LocalBoxFuture<'_, Result<RawMeasurement, MeasureError>> {
        (**self).measure()
    }
}

/// Measure every handle concurrently and join.
///
/// The output has exactly one [`Rect`] per input handle, positionally
/// aligned with the input regardless of completion order. A handle that
/// cannot be measured yields a zero-area rect rather than an error; callers
/// must treat zero-area layouts as unusable for placement and skip the step.
///
/// Safe to re-invoke: each call is an independent pass with no state carried
/// over. Concurrent passes are not deduplicated here; the tour controller's
/// generation token decides which pass's results stick.
pub async fn measure_all<M: Measurable>(handles: &[M]) -> Vec<Rect> {
    trace!(targets = handles.len(), "measurement pass started");
    let results = join_all(handles.iter().map(Measurable::measure)).await;
    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(raw) => {
                trace!(index, ?raw, "target measured");
                Rect::from(raw)
            }
            Err(err) => {
                debug!(index, %err, "target unmeasurable, storing empty layout");
                Rect::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::task::Poll;

    use futures::executor::block_on;

    /// Test handle whose future stays pending for a configurable number of
    /// polls, so completion order can be forced to differ from input order.
    struct FakeHandle {
        rect: Result<RawMeasurement, MeasureError>,
        pending_polls: u32,
        calls: Cell<u32>,
    }

    impl FakeHandle {
        fn at(x: f32, y: f32) -> Self {
            Self::delayed(x, y, 0)
        }

        fn delayed(x: f32, y: f32, pending_polls: u32) -> Self {
            Self {
                rect: Ok(RawMeasurement::new(x, y, 10.0, 10.0)),
                pending_polls,
                calls: Cell::new(0),
            }
        }

        fn broken(err: MeasureError) -> Self {
            Self {
                rect: Err(err),
                pending_polls: 0,
                calls: Cell::new(0),
            }
        }
    }

    impl Measurable for FakeHandle {
        fn measure(&self) -> LocalBoxFuture<'_, Result<RawMeasurement, MeasureError>> {
            self.calls.set(self.calls.get() + 1);
            let result = self.rect.clone();
            let mut remaining = self.pending_polls;
            Box::pin(std::future::poll_fn(move |cx| {
                if remaining > 0 {
                    remaining -= 1;
                    cx.waker().wake_by_ref();
                    return Poll::Pending;
                }
                Poll::Ready(result.clone())
            }))
        }
    }

    #[test]
    fn output_preserves_input_order_under_reordered_completion() {
        // First handle resolves last, last handle resolves first.
        let handles = vec![
            FakeHandle::delayed(1.0, 1.0, 8),
            FakeHandle::delayed(2.0, 2.0, 3),
            FakeHandle::delayed(3.0, 3.0, 0),
        ];
        let layouts = block_on(measure_all(&handles));
        assert_eq!(layouts.len(), 3);
        assert_eq!(layouts[0].left, 1.0);
        assert_eq!(layouts[1].left, 2.0);
        assert_eq!(layouts[2].left, 3.0);
    }

    #[test]
    fn failed_measurement_collapses_to_empty_rect() {
        let handles = vec![
            FakeHandle::at(5.0, 5.0),
            FakeHandle::broken(MeasureError::Detached),
            FakeHandle::at(7.0, 7.0),
        ];
        let layouts = block_on(measure_all(&handles));
        assert_eq!(layouts.len(), 3);
        assert!(!layouts[0].is_empty());
        assert!(layouts[1].is_empty());
        assert!(!layouts[2].is_empty());
    }

    #[test]
    fn empty_input_resolves_to_empty_output() {
        let handles: Vec<FakeHandle> = Vec::new();
        let layouts = block_on(measure_all(&handles));
        assert!(layouts.is_empty());
    }

    #[test]
    fn reinvocation_measures_every_handle_again() {
        let handles = vec![FakeHandle::at(0.0, 0.0), FakeHandle::at(1.0, 1.0)];
        let _ = block_on(measure_all(&handles));
        let _ = block_on(measure_all(&handles));
        assert_eq!(handles[0].calls.get(), 2);
        assert_eq!(handles[1].calls.get(), 2);
    }

    #[test]
    fn boxed_handles_measure_through_the_box() {
        let handles: Vec<Box<dyn Measurable>> = vec![
            Box::new(FakeHandle::at(4.0, 2.0)),
            Box::new(FakeHandle::broken(MeasureError::NotMounted)),
        ];
        let layouts = block_on(measure_all(&handles));
        assert_eq!(layouts[0].top, 2.0);
        assert!(layouts[1].is_empty());
    }

    #[test]
    fn raw_measurement_normalizes_to_top_left() {
        let rect = Rect::from(RawMeasurement::new(12.0, 34.0, 56.0, 78.0));
        assert_eq!(rect.left, 12.0);
        assert_eq!(rect.top, 34.0);
        assert_eq!(rect.width, 56.0);
        assert_eq!(rect.height, 78.0);
    }
}
