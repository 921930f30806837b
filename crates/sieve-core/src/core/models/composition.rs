use super::element::Element;
use crate::core::utils::math::gcd_all;
use serde::Serialize;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CompositionError {
    #[error("Unknown element symbol '{0}'")]
    UnknownElement(String),

    #[error("Composition must contain at least one element")]
    Empty,

    #[error("Element '{0}' appears more than once in the input mapping")]
    DuplicateElement(String),

    #[error("Amount for element '{0}' must be positive")]
    NonPositiveAmount(String),

    #[error("All coefficients are zero; the composition ratio is undefined")]
    Degenerate,
}

/// A chemical composition: a mapping from elements to positive integer
/// stoichiometric amounts.
///
/// Amounts are stored exactly as given, but equality and hashing are defined
/// on the canonical lowest-integer-ratio key, so proportional compositions
/// (e.g. `{Na: 2, Cl: 2}` and `{Na: 1, Cl: 1}`) compare equal and land in the
/// same hash bucket. This is what makes set-based deduplication of candidate
/// stoichiometries work.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Composition {
    amounts: BTreeMap<Element, u64>,
}

impl Composition {
    /// Builds a composition from element/amount pairs.
    ///
    /// Rejects an empty mapping, duplicate elements, and non-positive
    /// amounts. An all-zero mapping is reported as `Degenerate` (an undefined
    /// ratio) rather than as a per-element amount error.
    pub fn new(pairs: impl IntoIterator<Item = (Element, u64)>) -> Result<Self, CompositionError> {
        let pairs: Vec<(Element, u64)> = pairs.into_iter().collect();
        if pairs.is_empty() {
            return Err(CompositionError::Empty);
        }
        if pairs.iter().all(|(_, amount)| *amount == 0) {
            return Err(CompositionError::Degenerate);
        }

        let mut amounts = BTreeMap::new();
        for (element, amount) in pairs {
            if amount == 0 {
                return Err(CompositionError::NonPositiveAmount(
                    element.symbol().to_string(),
                ));
            }
            if amounts.insert(element.clone(), amount).is_some() {
                return Err(CompositionError::DuplicateElement(
                    element.symbol().to_string(),
                ));
            }
        }
        Ok(Self { amounts })
    }

    /// Convenience constructor from raw symbol strings.
    pub fn from_symbols<'a>(
        pairs: impl IntoIterator<Item = (&'a str, u64)>,
    ) -> Result<Self, CompositionError> {
        let pairs = pairs
            .into_iter()
            .map(|(symbol, amount)| Ok((Element::new(symbol)?, amount)))
            .collect::<Result<Vec<_>, CompositionError>>()?;
        Self::new(pairs)
    }

    pub fn amount(&self, element: &Element) -> Option<u64> {
        self.amounts.get(element).copied()
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.amounts.keys()
    }

    /// Number of distinct elements (binary = 2, ternary = 3, quaternary = 4).
    pub fn arity(&self) -> usize {
        self.amounts.len()
    }

    pub fn total_atoms(&self) -> u64 {
        self.amounts.values().sum()
    }

    /// The lowest-integer-ratio form of this composition.
    ///
    /// Reduction divides every amount by the GCD of all amounts; it never
    /// drops an element, so arity is preserved. Idempotent.
    pub fn reduced(&self) -> Composition {
        let divisor = self.reduction_divisor();
        Composition {
            amounts: self
                .amounts
                .iter()
                .map(|(element, amount)| (element.clone(), amount / divisor))
                .collect(),
        }
    }

    /// The canonical human-readable formula of the reduced form, with
    /// elements ordered by ascending electronegativity (ties broken by
    /// symbol) and unit subscripts omitted: `{Ca: 2, Ti: 2, O: 6}` renders
    /// as `"CaTiO3"`. This string is the deduplication key used throughout.
    pub fn reduced_formula(&self) -> String {
        let divisor = self.reduction_divisor();
        let mut entries: Vec<(&Element, u64)> = self
            .amounts
            .iter()
            .map(|(element, amount)| (element, amount / divisor))
            .collect();
        entries.sort_by(|(a, _), (b, _)| {
            a.electronegativity()
                .partial_cmp(&b.electronegativity())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.symbol().cmp(b.symbol()))
        });

        let mut formula = String::new();
        for (element, amount) in entries {
            formula.push_str(element.symbol());
            if amount > 1 {
                formula.push_str(&amount.to_string());
            }
        }
        formula
    }

    // Amounts are validated positive at construction, so the GCD is >= 1;
    // the max(1) guard keeps the division well-defined even if that
    // invariant is ever broken.
    fn reduction_divisor(&self) -> u64 {
        debug_assert!(self.amounts.values().any(|&a| a > 0));
        gcd_all(self.amounts.values().copied()).max(1)
    }

    fn canonical_amounts(&self) -> impl Iterator<Item = (&Element, u64)> {
        let divisor = self.reduction_divisor();
        self.amounts
            .iter()
            .map(move |(element, amount)| (element, amount / divisor))
    }
}

impl PartialEq for Composition {
    fn eq(&self, other: &Self) -> bool {
        self.arity() == other.arity() && self.canonical_amounts().eq(other.canonical_amounts())
    }
}

impl Eq for Composition {}

impl Hash for Composition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for (element, amount) in self.canonical_amounts() {
            element.hash(state);
            amount.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn comp(pairs: &[(&str, u64)]) -> Composition {
        Composition::from_symbols(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn new_rejects_empty_mapping() {
        assert_eq!(Composition::new([]), Err(CompositionError::Empty));
    }

    #[test]
    fn new_rejects_zero_amounts() {
        let result = Composition::from_symbols([("Na", 1), ("Cl", 0)]);
        assert_eq!(
            result,
            Err(CompositionError::NonPositiveAmount("Cl".to_string()))
        );
    }

    #[test]
    fn new_reports_all_zero_input_as_degenerate() {
        let result = Composition::from_symbols([("Na", 0), ("Cl", 0)]);
        assert_eq!(result, Err(CompositionError::Degenerate));
    }

    #[test]
    fn new_rejects_duplicate_elements() {
        let na = Element::new("Na").unwrap();
        let result = Composition::new([(na.clone(), 1), (na, 2)]);
        assert_eq!(
            result,
            Err(CompositionError::DuplicateElement("Na".to_string()))
        );
    }

    #[test]
    fn new_rejects_unknown_symbols() {
        assert!(matches!(
            Composition::from_symbols([("Zz", 1)]),
            Err(CompositionError::UnknownElement(_))
        ));
    }

    #[test]
    fn reduction_is_idempotent() {
        let c = comp(&[("Ca", 2), ("Ti", 2), ("O", 6)]);
        let reduced = c.reduced();
        assert_eq!(reduced.reduced(), reduced);
    }

    #[test]
    fn reduction_is_scale_invariant() {
        let base = comp(&[("Na", 1), ("Cl", 1)]);
        for k in 1..=5 {
            let scaled = comp(&[("Na", k), ("Cl", k)]);
            assert_eq!(scaled.reduced(), base);
            assert_eq!(scaled.reduced_formula(), base.reduced_formula());
        }
    }

    #[test]
    fn reduction_preserves_arity() {
        let c = comp(&[("Cu", 2), ("Ti", 2), ("O", 2), ("N", 2)]);
        assert_eq!(c.reduced().arity(), 4);
    }

    #[test]
    fn proportional_compositions_are_equal_and_hash_identically() {
        let a = comp(&[("Na", 2), ("Cl", 2)]);
        let b = comp(&[("Na", 1), ("Cl", 1)]);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn distinct_ratios_are_not_equal() {
        let nacl = comp(&[("Na", 1), ("Cl", 1)]);
        let nacl2 = comp(&[("Na", 1), ("Cl", 2)]);
        assert_ne!(nacl, nacl2);
    }

    #[test]
    fn reduced_formula_orders_by_electronegativity() {
        assert_eq!(comp(&[("Cl", 1), ("Na", 1)]).reduced_formula(), "NaCl");
        assert_eq!(
            comp(&[("O", 3), ("Ca", 1), ("Ti", 1)]).reduced_formula(),
            "CaTiO3"
        );
        assert_eq!(comp(&[("Br", 1), ("K", 1)]).reduced_formula(), "KBr");
    }

    #[test]
    fn reduced_formula_collapses_proportional_amounts() {
        assert_eq!(
            comp(&[("Ca", 2), ("Ti", 2), ("O", 6)]).reduced_formula(),
            "CaTiO3"
        );
    }

    #[test]
    fn reduced_formula_omits_unit_subscripts() {
        assert_eq!(comp(&[("Fe", 2), ("O", 3)]).reduced_formula(), "Fe2O3");
        assert_eq!(comp(&[("Ti", 1), ("O", 2)]).reduced_formula(), "TiO2");
    }

    #[test]
    fn amount_and_total_atoms_report_unreduced_values() {
        let c = comp(&[("Na", 2), ("Cl", 2)]);
        let na = Element::new("Na").unwrap();
        assert_eq!(c.amount(&na), Some(2));
        assert_eq!(c.total_atoms(), 4);
    }
}
