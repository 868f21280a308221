//! The bidirectional feature-to-term annotation index

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::annotations::{FeatureId, FeatureInfo, FeatureRecord};
use crate::term::{GoGroup, GoTermId};
use crate::{EnrichmentResult, ValidationError};

/// The full bidirectional relation between genome features and GO terms
///
/// The index holds the feature-to-term and term-to-feature maps, the
/// human-readable label of every term, the universe of all feature
/// identifiers known for the genome, and per-feature diagnostic metadata.
///
/// The two direction maps are mutual inverses over the same universe of
/// (feature, term) pairs: every term that appears on a feature lists that
/// feature, and vice versa. A term with zero annotated features is never
/// materialized.
#[derive(Debug, Default)]
pub struct AnnotationIndex {
    feature_to_terms: HashMap<FeatureId, GoGroup>,
    term_to_features: HashMap<GoTermId, HashSet<FeatureId>>,
    labels: HashMap<GoTermId, String>,
    universe: HashSet<FeatureId>,
    feature_info: HashMap<FeatureId, FeatureInfo>,
}

impl AnnotationIndex {
    /// Builds the index from raw per-feature annotation records
    ///
    /// Only term identifiers matching the `GO:<digits>` pattern are
    /// retained; entries from other ontology namespaces (e.g. `EC:...`)
    /// are dropped silently. A feature without any qualifying term still
    /// contributes to the feature universe.
    ///
    /// Term labels are deduplicated across features. If two records carry
    /// different labels for the same term, the last one wins.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingFeatureId`] if a record has an empty
    /// feature identifier.
    pub fn from_records<I>(records: I) -> EnrichmentResult<Self>
    where
        I: IntoIterator<Item = FeatureRecord>,
    {
        let mut index = Self::default();
        for record in records {
            if record.feature_id.is_empty() {
                return Err(ValidationError::MissingFeatureId.into());
            }
            let feature = FeatureId::from(record.feature_id);
            index.universe.insert(feature.clone());
            index.feature_info.insert(
                feature.clone(),
                FeatureInfo::new(record.function, record.feature_type),
            );

            let Some(ontology_terms) = record.ontology_terms else {
                continue;
            };
            let mut terms = GoGroup::new();
            for (term_id, label) in ontology_terms {
                // non-GO namespaces are not an error, just not our concern
                let Ok(term) = term_id.parse::<GoTermId>() else {
                    continue;
                };
                index.labels.insert(term, label);
                index
                    .term_to_features
                    .entry(term)
                    .or_default()
                    .insert(feature.clone());
                terms.insert(term);
            }
            if !terms.is_empty() {
                index.feature_to_terms.insert(feature, terms);
            }
        }
        debug!(
            "indexed {} features with {} distinct GO terms",
            index.universe.len(),
            index.term_to_features.len()
        );
        Ok(index)
    }

    /// The universe of all feature identifiers known for the genome
    pub fn universe(&self) -> &HashSet<FeatureId> {
        &self.universe
    }

    /// The number of features in the universe (the background population N)
    pub fn universe_len(&self) -> usize {
        self.universe.len()
    }

    /// Returns `true` if the genome contributed no features at all
    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }

    /// The number of distinct GO terms with at least one annotated feature
    pub fn num_terms(&self) -> usize {
        self.term_to_features.len()
    }

    /// All features annotated with the given term
    ///
    /// Returns `None` if no feature carries the term.
    pub fn features_by_term(&self, term: &GoTermId) -> Option<&HashSet<FeatureId>> {
        self.term_to_features.get(term)
    }

    /// All GO terms annotated on the given feature
    ///
    /// Returns `None` if the feature has no GO annotation.
    pub fn terms_by_feature(&self, feature: &FeatureId) -> Option<&GoGroup> {
        self.feature_to_terms.get(feature)
    }

    /// The human-readable label of the given term
    pub fn label(&self, term: &GoTermId) -> Option<&str> {
        self.labels.get(term).map(String::as_str)
    }

    /// Diagnostic metadata (function text, feature type) for a feature
    pub fn feature_info(&self, feature: &FeatureId) -> Option<&FeatureInfo> {
        self.feature_info.get(feature)
    }

    /// Iterates all terms together with their annotated feature sets
    pub fn terms(&self) -> impl Iterator<Item = (&GoTermId, &HashSet<FeatureId>)> {
        self.term_to_features.iter()
    }
}
