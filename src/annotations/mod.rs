//! Genome features and their raw annotation records

mod feature;
pub use feature::{FeatureId, FeatureInfo, FeatureRecord};
