//! The enrichment pipeline and its per-term results

use tracing::debug;

use crate::contingency::contingency_tables;
use crate::index::AnnotationIndex;
use crate::set::FeatureSet;
use crate::stats::{benjamini_hochberg, f64_from_u64, pvalue};
use crate::term::GoTermId;
use crate::EnrichmentResult;

/// The enrichment of one GO term in the feature set of interest
///
/// [`TermEnrichment`] is returned from [`analyze`], one record per GO term
/// that has at least one annotated feature in the genome.
#[derive(Debug, Clone)]
pub struct TermEnrichment {
    term: GoTermId,
    label: String,
    count: u64,
    enrichment: f64,
    pvalue: f64,
    adjusted_pvalue: f64,
}

impl TermEnrichment {
    /// The GO term identifier
    pub fn term(&self) -> GoTermId {
        self.term
    }

    /// The human-readable label of the term
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The number of features of the set that carry the term
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the fold enrichment over the background population
    ///
    /// 0 if no feature of the set carries the term.
    pub fn enrichment(&self) -> f64 {
        self.enrichment
    }

    /// Returns the raw p-value of the enrichment
    ///
    /// The p-value indicates the probability that the enrichment
    /// occured by chance
    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    /// Returns the Benjamini-Hochberg adjusted p-value
    pub fn adjusted_pvalue(&self) -> f64 {
        self.adjusted_pvalue
    }
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Runs the full enrichment pipeline for one genome and feature set
///
/// ```mermaid
/// graph LR
///     A[AnnotationIndex] --> B[contingency tables]
///     S[FeatureSet] --> B
///     B --> C[exact test]
///     C --> D[BH correction]
///     D --> E["Vec&lt;TermEnrichment&gt;"]
/// ```
///
/// Every GO term with at least one annotated feature is tested. The
/// returned records are in the canonical order: ascending by raw p-value,
/// ties broken by term id. Callers are free to re-sort, e.g. by adjusted
/// p-value, before presenting.
///
/// A genome without any GO annotation yields an empty result; the
/// correction step is skipped in that case.
///
/// # Errors
///
/// Any [`crate::ValidationError`] or [`crate::ComputationError`] of the
/// pipeline stages. Errors fail the whole run, because the correction
/// depends on the complete batch of tested terms.
pub fn analyze(index: &AnnotationIndex, set: &FeatureSet) -> EnrichmentResult<Vec<TermEnrichment>> {
    let tables = contingency_tables(index, set)?;
    if tables.is_empty() {
        debug!("no annotated terms, skipping correction");
        return Ok(Vec::new());
    }

    let mut terms = Vec::with_capacity(tables.len());
    let mut raw = Vec::with_capacity(tables.len());
    for (term, table) in &tables {
        raw.push(pvalue(table)?);
        terms.push(*term);
    }
    let adjusted = benjamini_hochberg(&raw)?;

    let mut results = Vec::with_capacity(terms.len());
    for ((term, raw_p), adjusted_p) in terms.into_iter().zip(raw).zip(adjusted) {
        let table = &tables[&term];
        let enrichment = if table.a() == 0 {
            0.0
        } else {
            (f64_from_u64(table.a()) / f64_from_u64(table.set_size()))
                / (f64_from_u64(table.annotated()) / f64_from_u64(table.population()))
        };
        results.push(TermEnrichment {
            term,
            label: index.label(&term).unwrap_or_default().to_string(),
            count: table.a(),
            enrichment,
            pvalue: raw_p,
            adjusted_pvalue: adjusted_p,
        });
    }
    sort_by_significance(&mut results);
    Ok(results)
}

/// Sorts results into the canonical presentation order
///
/// Ascending by raw p-value, so the most significant terms come first.
/// Ties are broken by term id to keep the order stable across runs.
pub fn sort_by_significance(results: &mut [TermEnrichment]) {
    results.sort_by(|x, y| {
        x.pvalue
            .total_cmp(&y.pvalue)
            .then_with(|| x.term.cmp(&y.term))
    });
}
