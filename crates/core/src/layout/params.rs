//! Merge parameters.
//!
//! Contains MergeOptions for controlling how adjacent runs fold into spans.

/// Parameters for merging adjacent text runs into spans.
///
/// Controls how much geometric slack the merge decision engine tolerates
/// before it declares a real word or structure boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeOptions {
    /// Maximum vertical baseline deviation, in page units, for two runs
    /// to be considered part of the same line.
    pub baseline_tolerance: f64,

    /// Factor applied to the expected single-space advance to obtain the
    /// widest horizontal gap that still merges. Slightly above 1.0
    /// tolerates rounding in the producing document; larger values also
    /// swallow deliberately wide gaps.
    pub space_multiplier: f64,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            baseline_tolerance: 1.0,
            space_multiplier: 1.2,
        }
    }
}

impl MergeOptions {
    /// Creates merge options with the specified values.
    ///
    /// # Panics
    /// Panics if either field is negative or not finite.
    pub fn new(baseline_tolerance: f64, space_multiplier: f64) -> Self {
        assert!(
            baseline_tolerance.is_finite() && baseline_tolerance >= 0.0,
            "baseline_tolerance should be a non-negative number"
        );
        assert!(
            space_multiplier.is_finite() && space_multiplier >= 0.0,
            "space_multiplier should be a non-negative number"
        );

        Self {
            baseline_tolerance,
            space_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let options = MergeOptions::default();
        assert_eq!(options.baseline_tolerance, 1.0);
        assert_eq!(options.space_multiplier, 1.2);
    }

    #[test]
    #[should_panic(expected = "space_multiplier")]
    fn negative_multiplier_rejected() {
        MergeOptions::new(1.0, -0.5);
    }

    #[test]
    #[should_panic(expected = "baseline_tolerance")]
    fn nan_tolerance_rejected() {
        MergeOptions::new(f64::NAN, 1.2);
    }
}
