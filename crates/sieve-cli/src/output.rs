use crate::error::Result;
use std::path::Path;
use stoichsieve::core::models::table::{ProbabilityTable, Score, ScreeningTable, Verdict};

fn verdict_cell(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Valid => "true".to_string(),
        Verdict::Invalid => "false".to_string(),
        Verdict::OracleError { message } => format!("oracle_error: {message}"),
    }
}

fn score_cell(score: &Score) -> String {
    match score {
        Score::Probability(p) => format!("{p:.6}"),
        Score::OracleError { message } => format!("oracle_error: {message}"),
    }
}

pub fn print_screening_table(table: &ScreeningTable) {
    println!("{:<16} {:<20} {}", "system", "reduced_formula", "valid");
    for row in table.iter() {
        println!(
            "{:<16} {:<20} {}",
            row.system,
            row.reduced_formula,
            verdict_cell(&row.verdict)
        );
    }
    println!("\n{} distinct candidate(s).", table.len());
}

pub fn print_probability_table(table: &ProbabilityTable) {
    println!("{:<20} {}", "formula", "oxidation_probability");
    for row in table.iter() {
        println!("{:<20} {}", row.formula, score_cell(&row.score));
    }
    println!("\n{} composition(s) scored.", table.len());
}

pub fn print_subsystem_keys(keys: &[String]) {
    for key in keys {
        println!("{key}");
    }
    println!("\n{} subsystem(s).", keys.len());
}

pub fn write_screening_csv(path: &Path, table: &ScreeningTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["system", "reduced_formula", "valid"])?;
    for row in table.iter() {
        writer.write_record([
            row.system.as_str(),
            row.reduced_formula.as_str(),
            &verdict_cell(&row.verdict),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_probability_csv(path: &Path, table: &ProbabilityTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["formula", "oxidation_probability"])?;
    for row in table.iter() {
        writer.write_record([row.formula.as_str(), &score_cell(&row.score)])?;
    }
    writer.flush()?;
    Ok(())
}
