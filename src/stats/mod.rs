//! Statistical analyses for GO term enrichment
//!
//! This module contains the one-sided Fisher exact test on a 2x2
//! contingency table, computed through the hypergeometric survival
//! function, and the Benjamini-Hochberg false-discovery-rate correction
//! that adjusts the full batch of raw p-values of one run.

pub mod correction;
pub mod hypergeom;

pub use correction::benjamini_hochberg;
pub use hypergeom::pvalue;

/// We have to do divisions starting with u64 values
/// and need to return f64 values. To ensure some kind of safety
/// we use this method to panic in case of overflows.
pub(crate) fn f64_from_u64(n: u64) -> f64 {
    let intermediate: u32 = n
        .try_into()
        .expect("cannot safely create f64 from large u64");
    intermediate.into()
}
