//! Benjamini-Hochberg false-discovery-rate correction
//!
//! The correction runs once over the whole batch of raw p-values of one
//! enrichment run, never per term. Each input position receives the
//! adjusted value computed at its own sorted rank; identity is carried
//! through the sort by index, so tied raw p-values never collapse onto a
//! single looked-up value.

use tracing::debug;

use crate::{EnrichmentResult, ValidationError};

/// Adjusts a batch of raw p-values for multiple testing
///
/// For m p-values sorted ascending with ranks 1..m, the adjusted value at
/// rank k is `min_{k' >= k}(p_(k') * m / k')`, clamped to 1. The returned
/// vector is in the same order as the input, with a one-to-one
/// correspondence of positions.
///
/// # Errors
///
/// [`ValidationError::EmptyCorrection`] if `pvalues` is empty — a
/// correction over zero hypotheses is undefined and the caller should
/// skip the corrector entirely when no term was tested.
/// [`ValidationError::PValueOutOfRange`] if any input is outside `[0, 1]`.
pub fn benjamini_hochberg(pvalues: &[f64]) -> EnrichmentResult<Vec<f64>> {
    if pvalues.is_empty() {
        return Err(ValidationError::EmptyCorrection.into());
    }
    for (index, p) in pvalues.iter().enumerate() {
        if !(0.0..=1.0).contains(p) {
            return Err(ValidationError::PValueOutOfRange { index }.into());
        }
    }

    let m = pvalues.len();
    let mut order: Vec<usize> = (0..m).collect();
    order.sort_by(|&x, &y| pvalues[x].total_cmp(&pvalues[y]));

    // walk the ranks from least to most significant, carrying the
    // cumulative minimum, and scatter each value back to its origin
    let mut adjusted = vec![0.0; m];
    let mut running = 1.0_f64;
    for rank in (0..m).rev() {
        let origin = order[rank];
        let scaled = pvalues[origin] * m as f64 / (rank + 1) as f64;
        running = running.min(scaled);
        adjusted[origin] = running;
    }
    debug!("adjusted {} p-values", m);
    Ok(adjusted)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::EnrichmentError;

    const TOL: f64 = 1e-12;

    #[test]
    fn classic_example() {
        let adjusted = benjamini_hochberg(&[0.01, 0.04, 0.03, 0.005]).unwrap();
        // sorted: 0.005, 0.01, 0.03, 0.04 with scaled values
        // 0.02, 0.02, 0.04, 0.04 after the min-from-the-right pass
        assert!((adjusted[3] - 0.02).abs() < TOL);
        assert!((adjusted[0] - 0.02).abs() < TOL);
        assert!((adjusted[2] - 0.04).abs() < TOL);
        assert!((adjusted[1] - 0.04).abs() < TOL);
    }

    #[test]
    fn tied_pvalues_keep_their_own_rank() {
        // a lookup-by-value pairing would hand both ties the value of the
        // first occurrence; the rank-indexed pass must not
        let adjusted = benjamini_hochberg(&[0.01, 0.01, 0.5]).unwrap();
        assert!((adjusted[0] - 0.015).abs() < TOL);
        assert!((adjusted[1] - 0.015).abs() < TOL);
        assert!((adjusted[2] - 0.5).abs() < TOL);
    }

    #[test]
    fn adjusted_is_at_least_raw_and_monotone() {
        let raw = [0.2, 0.001, 0.05, 0.01, 0.9, 0.05];
        let adjusted = benjamini_hochberg(&raw).unwrap();
        for (r, a) in raw.iter().zip(&adjusted) {
            assert!(a >= r, "adjusted {a} < raw {r}");
            assert!(*a <= 1.0);
        }
        let mut pairs: Vec<(f64, f64)> = raw.iter().copied().zip(adjusted).collect();
        pairs.sort_by(|x, y| x.0.total_cmp(&y.0));
        for window in pairs.windows(2) {
            assert!(window[1].1 >= window[0].1 - TOL);
        }
    }

    #[test]
    fn single_hypothesis_is_unchanged() {
        let adjusted = benjamini_hochberg(&[0.034]).unwrap();
        assert!((adjusted[0] - 0.034).abs() < TOL);
    }

    #[test]
    fn clamps_to_one() {
        let adjusted = benjamini_hochberg(&[0.8, 0.9]).unwrap();
        assert!(adjusted.iter().all(|p| *p <= 1.0));
    }

    #[test]
    fn empty_batch_fails() {
        assert_eq!(
            benjamini_hochberg(&[]).unwrap_err(),
            EnrichmentError::Validation(ValidationError::EmptyCorrection)
        );
    }

    #[test]
    fn out_of_range_pvalue_fails() {
        assert_eq!(
            benjamini_hochberg(&[0.1, 1.5]).unwrap_err(),
            EnrichmentError::Validation(ValidationError::PValueOutOfRange { index: 1 })
        );
        assert!(benjamini_hochberg(&[-0.1]).is_err());
    }
}
