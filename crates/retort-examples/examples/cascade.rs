//! Cascade example: firing ordered rules against a substance pool.
//!
//! Builds a two-rule engine, shows per-rule fire counts and single firings,
//! then runs the full single-pass cascade and a fixed-point cascade over the
//! same starting pool to show where the two modes diverge.
//!
//! Run with: `cargo run -p retort-examples --example cascade`

use retort_core::builder;
use retort_core::engine::{CascadeMode, EngineConfig, ReactionEngine};
use retort_core::substance::Substance;

fn main() {
    let engine =
        ReactionEngine::new(builder::build_rule_set("2H2 + O2 -> 2H2O; N2 + 3H2 -> 2NH3"));

    let start = [
        Substance::reactant("H2", 6),
        Substance::reactant("O2", 1),
        Substance::reactant("N2", 1),
    ]
    .into_iter()
    .collect();

    println!("rules:");
    for rule in engine.rules() {
        println!("  {rule}");
    }
    println!("starting pool: {start}\n");

    // --- Per-rule inspection ---

    for rule in engine.rules() {
        let count = engine.fire_count(rule, &start);
        println!("{rule}  fires {count}x against the starting pool");
        println!("  one firing yields: {}", engine.fire_once(rule, &start));
    }

    // --- Single-pass cascade ---

    let result = engine.cascade(&start);
    println!("\nsingle-pass cascade result: {result}");

    // --- Fixed-point cascade ---

    // Listed against the flow direction: single pass stops at B, fixed
    // point carries the chain through to D.
    let chain = ReactionEngine::with_config(
        builder::build_rule_set("C -> D; B -> C; A -> B"),
        EngineConfig {
            cascade: CascadeMode::FixedPoint { max_passes: 16 },
            ..EngineConfig::default()
        },
    );
    let seed = [Substance::reactant("A", 8)].into_iter().collect();
    println!("\nreversed chain over {seed}:");
    println!("  fixed-point result: {}", chain.cascade(&seed));
}
