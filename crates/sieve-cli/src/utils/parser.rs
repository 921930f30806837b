use stoichsieve::core::models::composition::{Composition, CompositionError};
use stoichsieve::core::models::element::Element;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Element list '{0}' is empty or malformed. Expected comma- or hyphen-separated symbols (e.g. 'Na,Cl,K')."
    )]
    EmptyElementList(String),

    #[error("Invalid ratio component '{component}' in '{input}'. Expected positive integers (e.g. '1,1,3').")]
    InvalidRatio { input: String, component: String },

    #[error("Invalid formula '{input}': {reason}")]
    InvalidFormula { input: String, reason: String },

    #[error(transparent)]
    Composition(#[from] CompositionError),
}

/// Parses a comma- or hyphen-separated element list ("Na,Cl,K" or
/// "Na-Cl-K"). Symbols are validated against the element table.
pub fn parse_element_list(input: &str) -> Result<Vec<Element>, ParseError> {
    let elements = input
        .split([',', '-'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::parse::<Element>)
        .collect::<Result<Vec<_>, _>>()?;
    if elements.is_empty() {
        return Err(ParseError::EmptyElementList(input.to_string()));
    }
    Ok(elements)
}

/// Parses a comma-separated ratio ("1,1,3") into positive integers.
pub fn parse_ratio(input: &str) -> Result<Vec<u64>, ParseError> {
    input
        .split(',')
        .map(str::trim)
        .map(|token| {
            token
                .parse::<u64>()
                .ok()
                .filter(|&value| value > 0)
                .ok_or_else(|| ParseError::InvalidRatio {
                    input: input.to_string(),
                    component: token.to_string(),
                })
        })
        .collect()
}

/// Parses a plain chemical formula ("CaTiO3") into a composition.
///
/// The grammar is a flat sequence of element symbols with optional integer
/// counts; each element may appear once. Parenthesized groups are not
/// supported.
pub fn parse_formula(input: &str) -> Result<Composition, ParseError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars().peekable();
    let mut pairs: Vec<(String, u64)> = Vec::new();

    while let Some(&c) = chars.peek() {
        if !c.is_ascii_uppercase() {
            return Err(ParseError::InvalidFormula {
                input: input.to_string(),
                reason: format!("unexpected character '{c}'"),
            });
        }
        let mut symbol = String::new();
        symbol.push(chars.next().expect("peeked"));
        while let Some(&c) = chars.peek() {
            if c.is_ascii_lowercase() {
                symbol.push(chars.next().expect("peeked"));
            } else {
                break;
            }
        }

        let mut digits = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_ascii_digit() {
                digits.push(chars.next().expect("peeked"));
            } else {
                break;
            }
        }
        let amount = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidFormula {
                    input: input.to_string(),
                    reason: format!("count '{digits}' is out of range"),
                })?
        };
        pairs.push((symbol, amount));
    }

    if pairs.is_empty() {
        return Err(ParseError::InvalidFormula {
            input: input.to_string(),
            reason: "formula is empty".to_string(),
        });
    }
    Ok(Composition::from_symbols(
        pairs.iter().map(|(symbol, amount)| (symbol.as_str(), *amount)),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_list_accepts_commas_hyphens_and_whitespace() {
        let parsed = parse_element_list("Na, Cl").unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].symbol(), "Na");

        let parsed = parse_element_list("Na-Cl-K").unwrap();
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn element_list_rejects_empty_and_unknown_input() {
        assert!(matches!(
            parse_element_list("  "),
            Err(ParseError::EmptyElementList(_))
        ));
        assert!(matches!(
            parse_element_list("Na,Xx"),
            Err(ParseError::Composition(CompositionError::UnknownElement(s))) if s == "Xx"
        ));
    }

    #[test]
    fn ratio_parses_positive_integers() {
        assert_eq!(parse_ratio("1,1,3").unwrap(), vec![1, 1, 3]);
        assert_eq!(parse_ratio(" 2, 4 ").unwrap(), vec![2, 4]);
    }

    #[test]
    fn ratio_rejects_zero_and_garbage() {
        assert!(matches!(
            parse_ratio("1,0,3"),
            Err(ParseError::InvalidRatio { component, .. }) if component == "0"
        ));
        assert!(parse_ratio("1,x,3").is_err());
        assert!(parse_ratio("").is_err());
    }

    #[test]
    fn formula_parses_multi_letter_symbols_and_counts() {
        let comp = parse_formula("CaTiO3").unwrap();
        assert_eq!(comp.reduced_formula(), "CaTiO3");
        assert_eq!(comp.arity(), 3);

        let comp = parse_formula("Fe12O18").unwrap();
        assert_eq!(comp.reduced_formula(), "Fe2O3");
    }

    #[test]
    fn formula_defaults_missing_counts_to_one() {
        let comp = parse_formula("NaCl").unwrap();
        assert_eq!(comp.total_atoms(), 2);
    }

    #[test]
    fn formula_rejects_malformed_input() {
        assert!(matches!(
            parse_formula("naCl"),
            Err(ParseError::InvalidFormula { .. })
        ));
        assert!(matches!(
            parse_formula("Na(Cl)2"),
            Err(ParseError::InvalidFormula { .. })
        ));
        assert!(matches!(
            parse_formula(""),
            Err(ParseError::InvalidFormula { .. })
        ));
    }

    #[test]
    fn formula_rejects_unknown_elements_via_composition_rules() {
        assert!(matches!(
            parse_formula("Xy2O3"),
            Err(ParseError::Composition(CompositionError::UnknownElement(_)))
        ));
    }

    #[test]
    fn formula_rejects_repeated_elements() {
        assert!(matches!(
            parse_formula("NaClNa"),
            Err(ParseError::Composition(CompositionError::DuplicateElement(_)))
        ));
    }
}
