//! Fling detection from buffered deltas.

/// Momentum score of a delta history.
///
/// Sums the consecutive first differences and divides by the length of the
/// *input*, not the number of differences, so short histories are damped.
/// Empty and single-sample histories score zero.
///
/// ```
/// use feedswipe::gesture::momentum;
///
/// let rising: Vec<f64> = (1..=10).map(f64::from).collect();
/// assert!((momentum(&rising) - 0.9).abs() < 1e-9);
/// assert_eq!(momentum(&[]), 0.0);
/// ```
pub fn momentum(deltas: &[f64]) -> f64 {
    if deltas.is_empty() {
        return 0.0;
    }

    let sum: f64 = deltas.windows(2).map(|pair| pair[1] - pair[0]).sum();
    let score = sum / deltas.len() as f64;

    if score.is_finite() {
        score
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_history_scores_zero() {
        assert_eq!(momentum(&[]), 0.0);
    }

    #[test]
    fn single_sample_scores_zero() {
        assert_eq!(momentum(&[42.0]), 0.0);
    }

    #[test]
    fn constant_history_scores_zero() {
        assert_eq!(momentum(&[5.0; 10]), 0.0);
    }

    #[test]
    fn unit_steps_are_damped_by_input_length() {
        let deltas: Vec<f64> = (1..=10).map(f64::from).collect();
        // Nine unit differences over ten samples.
        assert!((momentum(&deltas) - 0.9).abs() < EPS);
    }

    #[test]
    fn upward_fling_is_negative() {
        let deltas = [0.0, -40.0, -90.0, -160.0];
        assert!((momentum(&deltas) - (-40.0)).abs() < EPS);
    }

    #[test]
    fn non_finite_input_scores_zero() {
        assert_eq!(momentum(&[f64::NAN, 1.0]), 0.0);
    }

    proptest! {
        #[test]
        fn momentum_telescopes_to_endpoints(deltas in prop::collection::vec(-1000.0f64..1000.0, 2..=10)) {
            let expected = (deltas[deltas.len() - 1] - deltas[0]) / deltas.len() as f64;
            prop_assert!((momentum(&deltas) - expected).abs() < 1e-6);
        }

        #[test]
        fn constant_histories_never_fling(value in -1000.0f64..1000.0, len in 0usize..=10) {
            let deltas = vec![value; len];
            prop_assert_eq!(momentum(&deltas), 0.0);
        }
    }
}
