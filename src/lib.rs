//! `go-enrich` implements Gene Ontology (GO) term over-representation
//! analysis.
//!
//! Given a genome's features annotated with GO terms and a caller-supplied
//! subset of features (e.g. differentially expressed genes), the crate
//! determines which GO terms appear in that subset more often than expected
//! by chance. For every annotated term it builds a 2x2 contingency table,
//! computes a one-sided Fisher exact p-value from the hypergeometric
//! distribution and adjusts the full batch of p-values with the
//! Benjamini-Hochberg false-discovery-rate procedure.
//!
//! # Examples
//!
//! ```
//! use go_enrich::annotations::FeatureRecord;
//! use go_enrich::{AnnotationIndex, FeatureSet};
//!
//! let records = vec![
//!     FeatureRecord::new("AT1G01010", "gene")
//!         .with_ontology_term("GO:0006355", "regulation of transcription"),
//!     FeatureRecord::new("AT1G01020", "gene")
//!         .with_ontology_term("GO:0006355", "regulation of transcription"),
//!     FeatureRecord::new("AT1G01030", "gene"),
//! ];
//!
//! let index = AnnotationIndex::from_records(records).unwrap();
//! let set = FeatureSet::from_iter(["AT1G01010", "AT1G01020"]);
//!
//! let results = go_enrich::analyze(&index, &set).unwrap();
//! for result in &results {
//!     println!(
//!         "{}\t{}\t{}\t{}",
//!         result.term(),
//!         result.label(),
//!         result.pvalue(),
//!         result.adjusted_pvalue()
//!     );
//! }
//! ```

use thiserror::Error;

pub mod annotations;
pub mod contingency;
pub mod enrichment;
mod index;
mod set;
pub mod stats;
pub mod term;

pub use contingency::ContingencyTable;
pub use enrichment::{analyze, sort_by_significance, TermEnrichment};
pub use index::AnnotationIndex;
pub use set::FeatureSet;
pub use term::GoTermId;

/// Malformed or missing input data
///
/// Validation errors are surfaced to the caller immediately and are never
/// retried. The pipeline has no partial-success mode: the
/// Benjamini-Hochberg correction runs over the full batch of terms, so a
/// single malformed contingency table fails the whole run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A raw annotation record did not carry a feature identifier
    #[error("annotation record is missing a feature identifier")]
    MissingFeatureId,
    /// A term identifier does not match the `GO:<digits>` pattern
    #[error("'{0}' is not a valid GO term identifier")]
    InvalidTermId(String),
    /// Contingency table counts do not add up to consistent marginals
    #[error(
        "inconsistent contingency table: overlap {overlap}, set size {set_size}, \
         annotated {annotated}, population {population}"
    )]
    InconsistentTable {
        overlap: u64,
        set_size: u64,
        annotated: u64,
        population: u64,
    },
    /// The multiple-testing correction received zero hypotheses
    #[error("cannot correct an empty collection of p-values")]
    EmptyCorrection,
    /// A raw p-value handed to the correction is outside `[0, 1]`
    #[error("p-value at index {index} is outside [0, 1]")]
    PValueOutOfRange { index: usize },
}

/// Numeric failure inside the exact-test evaluation
///
/// This should not occur for well-formed integer inputs. It is reported
/// instead of silently approximating the result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputationError {
    /// The hypergeometric distribution rejected its parameters
    #[error(
        "hypergeometric distribution is undefined for \
         population {population}, successes {successes}, draws {draws}"
    )]
    Hypergeometric {
        population: u64,
        successes: u64,
        draws: u64,
    },
}

/// Any error produced by the enrichment pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Computation(#[from] ComputationError),
}

/// Crate-wide `Result` alias
pub type EnrichmentResult<T> = Result<T, EnrichmentError>;
