//! Equation parsing example: raw text to reactions.
//!
//! Feeds a noisy blob of text through the grammar and builder, printing
//! each recognized equation, its parsed reaction, and the reactant and
//! product coefficients.
//!
//! Run with: `cargo run -p retort-examples --example parse_equations`

use retort_core::builder;
use retort_core::grammar;

fn main() {
    let text = "\
        # synthesis rules\n\
        2H2 + O2 -> 2H2O;\n\
        note: ammonia needs pressure\n\
        N2 + 3H2 -> 2NH3\n\
        CH4 + 2O2 -> CO2 + 2H2O\n";

    println!("input text:\n{text}");

    // --- Recognized equations ---

    println!("recognized equations:");
    for equation in grammar::split_equations(text) {
        println!("  {}", equation.trim());
    }
    println!();

    // --- Parsed reactions ---

    for reaction in builder::build_reactions(grammar::split_equations(text)) {
        println!("{reaction}");
        for reactant in reaction.reactants() {
            println!("  consumes {} x{}", reactant.name(), reactant.quantity());
        }
        for product in reaction.products() {
            println!("  yields   {} x{}", product.name(), product.quantity());
        }
    }

    // --- Absorbed garbage ---

    let empty = builder::build_reaction("not an equation at all");
    println!(
        "\nunparseable text builds an empty reaction: {} reactants, {} products",
        empty.reactants().len(),
        empty.products().len()
    );
}
