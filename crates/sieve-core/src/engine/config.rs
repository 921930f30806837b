use crate::core::models::element::Element;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// What to do when an oracle fails on a candidate mid-screen.
///
/// The default fails the whole call: silently dropping rows would make an
/// incomplete table indistinguishable from a complete one. `Partial` is the
/// documented opt-in that records each failed candidate with an explicit
/// oracle-error marker instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    #[default]
    FailFast,
    Partial,
}

/// The ABX3 perovskite motif, the default ternary search ratio.
pub const DEFAULT_TERNARY_RATIO: [u64; 3] = [1, 1, 3];

/// Default minimum occurrence count when filtering oxidation states.
pub const DEFAULT_OXIDATION_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryScreenConfig {
    pub elements: Vec<Element>,
    pub max_stoich: u64,
    pub policy: FailurePolicy,
}

#[derive(Default)]
pub struct BinaryScreenConfigBuilder {
    elements: Option<Vec<Element>>,
    max_stoich: Option<u64>,
    policy: FailurePolicy,
}

impl BinaryScreenConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = Some(elements);
        self
    }
    pub fn max_stoich(mut self, max_stoich: u64) -> Self {
        self.max_stoich = Some(max_stoich);
        self
    }
    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Result<BinaryScreenConfig, ConfigError> {
        Ok(BinaryScreenConfig {
            elements: self
                .elements
                .ok_or(ConfigError::MissingParameter("elements"))?,
            max_stoich: self
                .max_stoich
                .ok_or(ConfigError::MissingParameter("max_stoich"))?,
            policy: self.policy,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TernaryScreenConfig {
    pub elements: Vec<Element>,
    pub ratio: Vec<u64>,
    pub max_mult: u64,
    pub policy: FailurePolicy,
}

#[derive(Default)]
pub struct TernaryScreenConfigBuilder {
    elements: Option<Vec<Element>>,
    ratio: Option<Vec<u64>>,
    max_mult: Option<u64>,
    policy: FailurePolicy,
}

impl TernaryScreenConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = Some(elements);
        self
    }
    /// Defaults to [`DEFAULT_TERNARY_RATIO`] when not set.
    pub fn ratio(mut self, ratio: Vec<u64>) -> Self {
        self.ratio = Some(ratio);
        self
    }
    pub fn max_mult(mut self, max_mult: u64) -> Self {
        self.max_mult = Some(max_mult);
        self
    }
    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Result<TernaryScreenConfig, ConfigError> {
        Ok(TernaryScreenConfig {
            elements: self
                .elements
                .ok_or(ConfigError::MissingParameter("elements"))?,
            ratio: self.ratio.unwrap_or(DEFAULT_TERNARY_RATIO.to_vec()),
            max_mult: self
                .max_mult
                .ok_or(ConfigError::MissingParameter("max_mult"))?,
            policy: self.policy,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuaternaryScreenConfig {
    pub elements: Vec<Element>,
    pub max_stoich: u64,
    pub policy: FailurePolicy,
}

#[derive(Default)]
pub struct QuaternaryScreenConfigBuilder {
    elements: Option<Vec<Element>>,
    max_stoich: Option<u64>,
    policy: FailurePolicy,
}

impl QuaternaryScreenConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = Some(elements);
        self
    }
    pub fn max_stoich(mut self, max_stoich: u64) -> Self {
        self.max_stoich = Some(max_stoich);
        self
    }
    pub fn policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Result<QuaternaryScreenConfig, ConfigError> {
        Ok(QuaternaryScreenConfig {
            elements: self
                .elements
                .ok_or(ConfigError::MissingParameter("elements"))?,
            max_stoich: self
                .max_stoich
                .ok_or(ConfigError::MissingParameter("max_stoich"))?,
            policy: self.policy,
        })
    }
}

/// Every field has a sensible default, so this one needs no builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OxidationAnalysisConfig {
    pub threshold: u32,
    pub policy: FailurePolicy,
}

impl Default for OxidationAnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_OXIDATION_THRESHOLD,
            policy: FailurePolicy::default(),
        }
    }
}
