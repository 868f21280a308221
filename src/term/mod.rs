//! GO term identifiers and groups of terms

use core::fmt::Debug;
use std::fmt::Display;
use std::str::FromStr;

use crate::ValidationError;

mod group;
pub use group::GoGroup;

/// A unique identifier for a Gene Ontology term
///
/// GO identifiers follow the pattern `GO:<digits>` (the prefix is matched
/// case-insensitively). The identifier is stored as the numeric part, so
/// `GO:0008150`, `go:0008150` and `GO:8150` all refer to the same term.
#[derive(Copy, Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GoTermId {
    inner: u32,
}

impl GoTermId {
    /// Returns the numeric part of the identifier
    pub fn as_u32(&self) -> u32 {
        self.inner
    }
}

impl FromStr for GoTermId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .get(..3)
            .filter(|prefix| prefix.eq_ignore_ascii_case("GO:"))
            .map(|_| &s[3..])
            .ok_or_else(|| ValidationError::InvalidTermId(s.to_string()))?;
        let inner = digits
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidTermId(s.to_string()))?;
        Ok(GoTermId { inner })
    }
}

impl TryFrom<&str> for GoTermId {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<u32> for GoTermId {
    fn from(inner: u32) -> Self {
        Self { inner }
    }
}

impl Display for GoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GO:{:07}", self.inner)
    }
}

impl Debug for GoTermId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoTermId({self})")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_canonical() {
        let id: GoTermId = "GO:0008150".parse().unwrap();
        assert_eq!(id.as_u32(), 8150);
        assert_eq!(id.to_string(), "GO:0008150");
    }

    #[test]
    fn parse_case_insensitive_prefix() {
        assert_eq!(
            "go:0001234".parse::<GoTermId>().unwrap(),
            GoTermId::from(1234)
        );
        assert_eq!(
            "gO:0001234".parse::<GoTermId>().unwrap(),
            GoTermId::from(1234)
        );
    }

    #[test]
    fn reject_other_namespaces() {
        assert!("EC:1.1.1.1".parse::<GoTermId>().is_err());
        assert!("KO:K00001".parse::<GoTermId>().is_err());
        assert!("GO-0001234".parse::<GoTermId>().is_err());
    }

    #[test]
    fn reject_non_numeric_suffix() {
        assert!("GO:".parse::<GoTermId>().is_err());
        assert!("GO:12ab".parse::<GoTermId>().is_err());
        assert!("GO".parse::<GoTermId>().is_err());
        assert!("".parse::<GoTermId>().is_err());
    }
}
