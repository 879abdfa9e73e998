//! Measurement errors.
//!
//! The only fallible seam in the crate is the host's measurement primitive.
//! Failures never propagate past the resolver: an unmeasurable target
//! collapses to a zero-area layout, which downstream code treats as "nothing
//! to show for this step".

use thiserror::Error;

/// Why a target element could not be measured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// The element was removed from the view hierarchy before measurement.
    #[error("element is detached from the view hierarchy")]
    Detached,

    /// The element has not been mounted/laid out yet.
    #[error("element is not mounted")]
    NotMounted,

    /// The host platform reported a measurement failure.
    #[error("host measurement failed: {0}")]
    Host(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_host_detail() {
        let err = MeasureError::Host("view tag 42 not found".into());
        assert_eq!(err.to_string(), "host measurement failed: view tag 42 not found");
    }
}
