use super::element::Element;
use serde::Serialize;
use std::fmt;

/// An element together with an assigned oxidation state, e.g. Fe3+ or O2-.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Species {
    element: Element,
    oxidation_state: i8,
}

impl Species {
    pub fn new(element: Element, oxidation_state: i8) -> Self {
        Self {
            element,
            oxidation_state,
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn oxidation_state(&self) -> i8 {
        self.oxidation_state
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.oxidation_state;
        let sign = if state < 0 { '-' } else { '+' };
        match state.unsigned_abs() {
            0 => write!(f, "{}0", self.element),
            1 => write!(f, "{}{}", self.element, sign),
            magnitude => write!(f, "{}{}{}", self.element, magnitude, sign),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species(symbol: &str, state: i8) -> Species {
        Species::new(Element::new(symbol).unwrap(), state)
    }

    #[test]
    fn display_renders_charge_and_magnitude() {
        assert_eq!(species("Fe", 3).to_string(), "Fe3+");
        assert_eq!(species("O", -2).to_string(), "O2-");
        assert_eq!(species("Na", 1).to_string(), "Na+");
        assert_eq!(species("Cl", -1).to_string(), "Cl-");
    }

    #[test]
    fn species_with_equal_element_and_state_are_equal() {
        assert_eq!(species("Ti", 4), species("Ti", 4));
        assert_ne!(species("Ti", 4), species("Ti", 3));
    }
}
