//! End-to-end synthesis scenarios exercising the public pipeline only:
//! raw equation text in, final substance state out.

use retort_core::builder;
use retort_core::engine::ReactionEngine;
use retort_core::grammar;
use retort_core::test_utils::*;

// ---------------------------------------------------------------------------
// Test 1: Water synthesis, single rule
// ---------------------------------------------------------------------------
#[test]
fn water_synthesis_limited_by_oxygen() {
    let engine = ReactionEngine::new(builder::build_rule_set("2H2 + O2 -> 2H2O"));
    let result = engine.cascade(&pool(&[("H2", 6), ("O2", 1), ("N2", 1)]));

    // One firing (O2 limits), leaving 4 H2 and producing 2 H2O; the inert
    // N2 passes through untouched.
    assert_eq!(result.quantity("H2"), 4);
    assert_eq!(result.quantity("H2O"), 2);
    assert!(result.get("H2O").unwrap().is_product());
    assert_eq!(result.quantity("N2"), 1);
    assert!(!result.contains("O2"));
    assert_eq!(result.len(), 3);
}

// ---------------------------------------------------------------------------
// Test 2: Two-rule cascade, ordered
// ---------------------------------------------------------------------------
#[test]
fn water_then_ammonia_cascade() {
    let engine =
        ReactionEngine::new(builder::build_rule_set("2H2 + O2 -> 2H2O; N2 + 3H2 -> 2NH3"));
    let result = engine.cascade(&pool(&[("H2", 6), ("O2", 1), ("N2", 1)]));

    // Rule 1 fires once: H2 6 -> 4, O2 consumed, H2O:2 is final output (no
    // rule consumes H2O). Rule 2 then consumes N2 and 3 of the leftover H2.
    assert_eq!(result.quantity("H2O"), 2);
    assert_eq!(result.quantity("NH3"), 2);
    assert_eq!(result.quantity("H2"), 1);
    assert!(!result.contains("O2"));
    assert!(!result.contains("N2"));
    assert_eq!(result.len(), 3);
}

// ---------------------------------------------------------------------------
// Test 3: Rule order changes the outcome
// ---------------------------------------------------------------------------
#[test]
fn equation_order_is_observable() {
    let start = pool(&[("H2", 6), ("O2", 1), ("N2", 1)]);

    let water_first =
        ReactionEngine::new(builder::build_rule_set("2H2 + O2 -> 2H2O; N2 + 3H2 -> 2NH3"));
    let ammonia_first =
        ReactionEngine::new(builder::build_rule_set("N2 + 3H2 -> 2NH3; 2H2 + O2 -> 2H2O"));

    // Ammonia first consumes 3 H2, leaving 3 for one water firing.
    let a = ammonia_first.cascade(&start);
    assert_eq!(a.quantity("NH3"), 2);
    assert_eq!(a.quantity("H2O"), 2);
    assert_eq!(a.quantity("H2"), 1);

    // Same final state here, but reached through a different intermediate
    // pool; a scarcer H2 supply separates the two orders.
    let scarce = pool(&[("H2", 4), ("O2", 1), ("N2", 1)]);
    let w = water_first.cascade(&scarce);
    let b = ammonia_first.cascade(&scarce);
    // Water first: 2 H2 left, not enough for ammonia -- N2 survives.
    assert_eq!(w.quantity("H2O"), 2);
    assert!(!w.contains("NH3"));
    // Ammonia first: 1 H2 left, not enough for water -- O2 survives.
    assert_eq!(b.quantity("NH3"), 2);
    assert!(!b.contains("H2O"));
}

// ---------------------------------------------------------------------------
// Test 4: Malformed text is absorbed
// ---------------------------------------------------------------------------
#[test]
fn malformed_equation_builds_empty_reaction() {
    let reaction = builder::build_reaction("H2O2");
    assert!(reaction.reactants().is_empty());
    assert!(reaction.products().is_empty());

    // And a blob of garbage yields no rules and an empty final state.
    let engine = ReactionEngine::new(builder::build_rule_set("this is not chemistry"));
    assert!(engine.rules().is_empty());
    assert!(engine.cascade(&pool(&[("H2", 6)])).is_empty());
}

// ---------------------------------------------------------------------------
// Test 5: Full pipeline from a noisy blob
// ---------------------------------------------------------------------------
#[test]
fn pipeline_from_noisy_text() {
    let text = "# combustion rules\nC + O2 -> CO2;\nsome note\n2CO + O2 -> 2CO2\n";
    let equations: Vec<&str> = grammar::split_equations(text).collect();
    assert_eq!(equations.len(), 2);

    let engine = ReactionEngine::new(builder::build_rule_set(text));
    let result = engine.cascade(&pool(&[("C", 2), ("O2", 3), ("CO", 2)]));

    // Rule 1: 2 firings consume C:2 and O2:2, emit CO2:2 (consumed by no
    // rule -- final). Rule 2: consumes CO:2 and the last O2, emits CO2:2,
    // replacing the routed CO2 entry by name in the final state.
    assert_eq!(result.quantity("CO2"), 2);
    assert!(!result.contains("C"));
    assert!(!result.contains("O2"));
    assert!(!result.contains("CO"));
}

// ---------------------------------------------------------------------------
// Test 6: Default coefficients round-trip through the whole stack
// ---------------------------------------------------------------------------
#[test]
fn omitted_coefficients_default_to_one() {
    let engine = ReactionEngine::new(builder::build_rule_set("C + O2 -> CO2"));
    let rule = &engine.rules()[0];
    assert_eq!(rule.reactants().quantity("C"), 1);
    assert_eq!(rule.reactants().quantity("O2"), 1);
    assert_eq!(rule.reaction().products().quantity("CO2"), 1);

    let result = engine.cascade(&pool(&[("C", 3), ("O2", 5)]));
    assert_eq!(result.quantity("CO2"), 3);
    assert_eq!(result.quantity("O2"), 2);
}
