use core::fmt::Debug;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

/// A unique identifier for a genome feature
///
/// Feature identifiers are free-form strings, e.g. locus tags such as
/// `AT1G01010`. They are unique within one genome.
#[derive(Clone, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct FeatureId {
    inner: String,
}

impl FeatureId {
    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for FeatureId {
    fn from(s: &str) -> Self {
        FeatureId {
            inner: s.to_string(),
        }
    }
}

impl From<String> for FeatureId {
    fn from(inner: String) -> Self {
        FeatureId { inner }
    }
}

impl Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// One raw annotation record, as supplied by a genome data source
///
/// A record carries the feature identifier, its free-form function text,
/// the feature type and a mapping of namespaced ontology term ids to
/// human-readable labels. Ontology namespaces other than GO may be present
/// in the mapping; the index builder drops them silently.
#[derive(Debug, Clone, Default)]
pub struct FeatureRecord {
    /// The feature identifier, required
    pub feature_id: String,
    /// Free-form function description, if known
    pub function: Option<String>,
    /// The feature type, e.g. `gene` or `CDS`
    pub feature_type: String,
    /// Ontology term id (e.g. `GO:0008150`) to label (e.g. `biological_process`)
    pub ontology_terms: Option<HashMap<String, String>>,
}

impl FeatureRecord {
    /// Constructs a record with the given identifier and feature type
    pub fn new(feature_id: impl Into<String>, feature_type: impl Into<String>) -> Self {
        Self {
            feature_id: feature_id.into(),
            feature_type: feature_type.into(),
            ..Self::default()
        }
    }

    /// Sets the function text of the record
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// Adds one ontology term annotation to the record
    #[must_use]
    pub fn with_ontology_term(mut self, term_id: impl Into<String>, label: impl Into<String>) -> Self {
        self.ontology_terms
            .get_or_insert_with(HashMap::new)
            .insert(term_id.into(), label.into());
        self
    }
}

/// Diagnostic metadata retained for every feature of the genome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureInfo {
    function: Option<String>,
    feature_type: String,
}

impl FeatureInfo {
    pub(crate) fn new(function: Option<String>, feature_type: String) -> Self {
        Self {
            function,
            feature_type,
        }
    }

    /// The free-form function text of the feature, if known
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// The feature type, e.g. `gene`
    pub fn feature_type(&self) -> &str {
        &self.feature_type
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn record_builder() {
        let record = FeatureRecord::new("AT1G01010", "gene")
            .with_function("NAC domain containing protein 1")
            .with_ontology_term("GO:0006355", "regulation of transcription")
            .with_ontology_term("EC:1.1.1.1", "alcohol dehydrogenase");

        assert_eq!(record.feature_id, "AT1G01010");
        assert_eq!(record.feature_type, "gene");
        assert_eq!(
            record.function.as_deref(),
            Some("NAC domain containing protein 1")
        );
        assert_eq!(record.ontology_terms.as_ref().map(HashMap::len), Some(2));
    }

    #[test]
    fn feature_id_display() {
        let id = FeatureId::from("AT1G01010");
        assert_eq!(id.to_string(), "AT1G01010");
        assert_eq!(id.as_str(), "AT1G01010");
    }
}
