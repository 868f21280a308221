//! 2x2 contingency tables for set-membership vs term-annotation

use std::collections::HashMap;

use tracing::debug;

use crate::index::AnnotationIndex;
use crate::set::FeatureSet;
use crate::term::GoTermId;
use crate::{EnrichmentResult, ValidationError};

/// The 2x2 count table of one GO term against the feature set of interest
///
/// For a universe of N features, a feature set of size n and a term
/// annotated on `a + c` features:
///
/// - `a`: in the set and annotated with the term
/// - `b`: in the set, not annotated
/// - `c`: not in the set, annotated
/// - `d`: not in the set, not annotated
///
/// so `a + b = n` and `a + b + c + d = N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContingencyTable {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

impl ContingencyTable {
    /// Constructs a table from its four counts
    ///
    /// # Errors
    ///
    /// [`ValidationError::InconsistentTable`] if the total count does not
    /// fit into `u64`.
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Result<Self, ValidationError> {
        a.checked_add(b)
            .and_then(|ab| ab.checked_add(c))
            .and_then(|abc| abc.checked_add(d))
            .ok_or(ValidationError::InconsistentTable {
                overlap: a,
                set_size: a.saturating_add(b),
                annotated: a.saturating_add(c),
                population: u64::MAX,
            })?;
        Ok(Self { a, b, c, d })
    }

    /// Derives a table from the observed overlap and the three marginals
    ///
    /// # Errors
    ///
    /// [`ValidationError::InconsistentTable`] if the overlap exceeds the
    /// set size or the term's feature count, or if the set and the term's
    /// features do not fit inside the universe.
    pub fn from_marginals(
        overlap: u64,
        set_size: u64,
        annotated: u64,
        population: u64,
    ) -> Result<Self, ValidationError> {
        let inconsistent = ValidationError::InconsistentTable {
            overlap,
            set_size,
            annotated,
            population,
        };
        let b = set_size.checked_sub(overlap).ok_or(inconsistent.clone())?;
        let c = annotated.checked_sub(overlap).ok_or(inconsistent.clone())?;
        let d = population
            .checked_sub(set_size)
            .and_then(|rest| rest.checked_sub(c))
            .ok_or(inconsistent)?;
        Self::new(overlap, b, c, d)
    }

    /// Features in the set that carry the term
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Features in the set that do not carry the term
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Features outside the set that carry the term
    pub fn c(&self) -> u64 {
        self.c
    }

    /// Features outside the set that do not carry the term
    pub fn d(&self) -> u64 {
        self.d
    }

    /// The size n of the feature set of interest (`a + b`)
    pub fn set_size(&self) -> u64 {
        self.a + self.b
    }

    /// The number of features annotated with the term (`a + c`)
    pub fn annotated(&self) -> u64 {
        self.a + self.c
    }

    /// The size N of the feature universe (`a + b + c + d`)
    pub fn population(&self) -> u64 {
        self.a + self.b + self.c + self.d
    }
}

/// Builds one [`ContingencyTable`] per annotated GO term
///
/// Every term with at least one annotated feature receives a table.
/// Features of `set` that are not part of the genome universe are ignored
/// for counting, so the effective set size is `|set ∩ universe|`. An empty
/// set is valid and produces tables with `a = b = 0`.
///
/// # Errors
///
/// [`ValidationError::InconsistentTable`] if the index relates a term to
/// features outside the universe. [`AnnotationIndex::from_records`] never
/// produces such an index.
pub fn contingency_tables(
    index: &AnnotationIndex,
    set: &FeatureSet,
) -> EnrichmentResult<HashMap<GoTermId, ContingencyTable>> {
    let population = index.universe_len() as u64;
    let set_size = set
        .iter()
        .filter(|feature| index.universe().contains(feature))
        .count() as u64;

    let mut tables = HashMap::with_capacity(index.num_terms());
    for (term, features) in index.terms() {
        let overlap = features.iter().filter(|f| set.contains(f)).count() as u64;
        let annotated = features.len() as u64;
        let table = ContingencyTable::from_marginals(overlap, set_size, annotated, population)?;
        tables.insert(*term, table);
    }
    debug!(
        "built {} contingency tables (N={}, n={})",
        tables.len(),
        population,
        set_size
    );
    Ok(tables)
}
