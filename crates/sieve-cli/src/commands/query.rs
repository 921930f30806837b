use crate::cli::QueryArgs;
use crate::db::ReferenceDbClient;
use crate::error::Result;
use crate::utils::parser;
use stoichsieve::engine::subsystems::subsystem_keys;
use tracing::info;

pub fn run(args: &QueryArgs) -> Result<()> {
    let elements = parser::parse_element_list(&args.elements)?;
    let systems = subsystem_keys(&elements);
    info!(
        subsystems = systems.len(),
        "Searching reference database over all subsystems."
    );

    let client = ReferenceDbClient::new(args.api_key.clone())?;
    let formulas = client.search(&systems)?;

    for formula in &formulas {
        println!("{formula}");
    }
    println!("\n{} known compound(s).", formulas.len());
    Ok(())
}
