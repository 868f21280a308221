//! One-sided Fisher exact test for 2x2 contingency tables
//!
//! The p-value is the upper tail of the hypergeometric distribution with
//! the table's fixed marginals: the probability of drawing an overlap at
//! least as large as the observed one, under the hypothesis that set
//! membership and term annotation are not associated.

use statrs::distribution::{DiscreteCDF, Hypergeometric};
use tracing::debug;

use crate::contingency::ContingencyTable;
use crate::{ComputationError, EnrichmentResult};

/// Computes the one-sided (over-representation) exact p-value of a table
///
/// The result is always in `[0, 1]`. Degenerate tables are well-defined:
/// a table with `a = 0` has p-value 1, a table where the whole annotated
/// population sits inside the set yields the minimum value achievable for
/// its marginals. Zero-sized rows or columns are valid inputs.
///
/// # Errors
///
/// [`ComputationError::Hypergeometric`] if the underlying distribution
/// cannot be constructed. This cannot happen for a [`ContingencyTable`],
/// whose marginals are consistent by construction.
pub fn pvalue(table: &ContingencyTable) -> EnrichmentResult<f64> {
    let observed = table.a();
    if observed == 0 {
        // no overlap at all, P(X >= 0) is all the probability mass
        return Ok(1.0);
    }

    let population = table.population();
    let successes = table.annotated();
    let draws = table.set_size();
    let hyper = Hypergeometric::new(population, successes, draws).map_err(|_| {
        ComputationError::Hypergeometric {
            population,
            successes,
            draws,
        }
    })?;

    // subtracting 1, because we want to test including the observed
    // overlap, e.g. "7 or more", but sf by default calculates "more than 7"
    let pvalue = hyper.sf(observed - 1);
    debug!(
        "Population: {}, Successes: {}, Draws: {}, Observed: {} => p {}",
        population, successes, draws, observed, pvalue
    );
    Ok(pvalue)
}
