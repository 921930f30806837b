use super::composition::Composition;
use serde::Serialize;
use std::collections::HashSet;

/// The screening outcome for one candidate composition.
///
/// `OracleError` only appears in tables produced under
/// [`FailurePolicy::Partial`](crate::engine::config::FailurePolicy); the
/// default policy fails the whole screen instead, so a complete table is
/// never silently missing rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Valid,
    Invalid,
    OracleError { message: String },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// One row of a screening result table: a distinct reduced candidate within
/// its chemical system, annotated with the oracle's verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningRow {
    pub system: String,
    pub composition: Composition,
    pub reduced_formula: String,
    pub verdict: Verdict,
}

/// An insertion-ordered screening result table, unique by reduced formula.
///
/// Rows are immutable once appended; pushing a formula that is already
/// present keeps the first occurrence and reports the rejection.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ScreeningTable {
    rows: Vec<ScreeningRow>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl ScreeningTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row unless its reduced formula is already present.
    /// Returns whether the row was kept.
    pub fn push(&mut self, row: ScreeningRow) -> bool {
        if self.seen.insert(row.reduced_formula.clone()) {
            self.rows.push(row);
            true
        } else {
            false
        }
    }

    pub fn rows(&self) -> &[ScreeningRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScreeningRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The probability assigned to one composition, or the oracle-error marker
/// recorded under partial-results mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Score {
    Probability(f64),
    OracleError { message: String },
}

/// One row of an oxidation-state probability table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityRow {
    pub composition: Composition,
    pub formula: String,
    pub score: Score,
}

/// Probability results in input order. Unlike [`ScreeningTable`] this does
/// not deduplicate: one row per input composition, even when two inputs are
/// equal under reduction.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ProbabilityTable {
    rows: Vec<ProbabilityRow>,
}

impl ProbabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ProbabilityRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ProbabilityRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProbabilityRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
