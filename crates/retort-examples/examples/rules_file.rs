//! Rules-file example: loading equations from disk.
//!
//! Writes a small rules file to a temp location, loads it through the
//! `rules-file` loader, and cascades a starting pool against the loaded
//! rules.
//!
//! Run with: `cargo run -p retort-examples --example rules_file`

use retort_core::engine::ReactionEngine;
use retort_core::loader;
use retort_core::substance::Substance;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "# combustion")?;
    writeln!(file, "C + O2 -> CO2;")?;
    writeln!(file, "2CO + O2 -> 2CO2")?;

    let rules = loader::rules_from_file(file.path())?;
    println!("loaded {} rule(s) from {}:", rules.len(), file.path().display());
    for rule in &rules {
        println!("  {rule}");
    }

    let start = [
        Substance::reactant("C", 2),
        Substance::reactant("O2", 3),
        Substance::reactant("CO", 2),
    ]
    .into_iter()
    .collect();
    let engine = ReactionEngine::new(rules);
    println!("\nstarting pool: {start}");
    println!("cascade result: {}", engine.cascade(&start));

    // A missing file is the loader's one error path.
    match loader::rules_from_file("/no/such/rules.txt") {
        Ok(_) => {}
        Err(err) => println!("\nmissing file reports: {err}"),
    }
    Ok(())
}
