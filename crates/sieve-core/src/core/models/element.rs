use super::composition::CompositionError;
use crate::core::chem::data;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// An immutable chemical element symbol (e.g. "Na").
///
/// Construction validates the symbol against the embedded element table, so
/// every `Element` in the system is guaranteed to have reference data
/// (electronegativity) available. Ordering is lexicographic by symbol, which
/// is what the canonical composition key and subsystem enumeration rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Element(String);

impl Element {
    pub fn new(symbol: &str) -> Result<Self, CompositionError> {
        let symbol = symbol.trim();
        if data::is_known_element(symbol) {
            Ok(Self(symbol.to_string()))
        } else {
            Err(CompositionError::UnknownElement(symbol.to_string()))
        }
    }

    pub fn symbol(&self) -> &str {
        &self.0
    }

    /// Electronegativity lookup cannot fail for a constructed `Element`.
    pub fn electronegativity(&self) -> f64 {
        data::electronegativity(&self.0).unwrap_or(f64::MAX)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Element {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
