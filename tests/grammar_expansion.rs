// tests/grammar_expansion.rs
use lsystem_turtle::{
    Error, ExpansionLimits, GrammarEngine, RuleTable, Symbol, SymbolString, rewrite,
};

fn plant_rules() -> RuleTable {
    RuleTable::new().with_rule('F', "F[-F]F[+F]F")
}

#[test]
fn zero_generations_returns_axiom() {
    for axiom in ["", "F", "X+Y[F]", "F[-F]F"] {
        let engine = GrammarEngine::new(axiom, plant_rules());
        assert_eq!(engine.expand(0).unwrap(), axiom);
    }
}

#[test]
fn single_generation_of_plant_rule() {
    let engine = GrammarEngine::new("F", plant_rules());
    assert_eq!(engine.expand(1).unwrap(), "F[-F]F[+F]F");
}

#[test]
fn two_generations_of_chain_rule() {
    let engine = GrammarEngine::new("F", RuleTable::new().with_rule('F', "F+F"));
    assert_eq!(engine.expand(2).unwrap(), "F+F+F+F");
}

#[test]
fn expansion_composes_one_generation_at_a_time() {
    let rules = RuleTable::new()
        .with_rule('F', "FF-[-F+F+F]+[+F-F-F]")
        .with_rule('X', "F[+X]F[-X]+X");
    let engine = GrammarEngine::new("X", rules.clone());

    for g in 0..5 {
        let stepped = GrammarEngine::new(engine.expand(g).unwrap(), rules.clone())
            .expand(1)
            .unwrap();
        assert_eq!(engine.expand(g + 1).unwrap(), stepped, "generation {}", g + 1);
        assert_eq!(stepped, rewrite(&engine.expand(g).unwrap(), &rules));
    }
}

#[test]
fn symbols_without_rules_are_left_alone() {
    let engine = GrammarEngine::new("A+B-C", RuleTable::new().with_rule('F', "FF"));
    for g in 0..4 {
        assert_eq!(engine.expand(g).unwrap(), "A+B-C");
    }
}

#[test]
fn empty_inputs_are_valid() {
    assert_eq!(
        GrammarEngine::new("", plant_rules()).expand(3).unwrap(),
        SymbolString::new()
    );
    assert_eq!(
        GrammarEngine::new("F[+F]", RuleTable::new()).expand(3).unwrap(),
        "F[+F]"
    );
}

#[test]
fn replacements_are_not_reexpanded_within_a_generation() {
    let rules = RuleTable::new().with_rule('A', "B").with_rule('B', "C");
    let engine = GrammarEngine::new("A", rules);
    assert_eq!(engine.expand(1).unwrap(), "B");
    assert_eq!(engine.expand(2).unwrap(), "C");
}

#[test]
fn expansion_is_deterministic() {
    let engine = GrammarEngine::new("F", plant_rules());
    assert_eq!(engine.expand(4).unwrap(), engine.expand(4).unwrap());
}

#[test]
fn symbols_can_be_built_from_enum_or_char() {
    let rules = RuleTable::new().with_rule(
        Symbol::Other('X'),
        vec![Symbol::Forward, Symbol::Other('X')],
    );
    let engine = GrammarEngine::new("X", rules);
    assert_eq!(engine.expand(3).unwrap(), "FFFX");
}

#[test]
fn oversized_generation_fails_fast() {
    let engine = GrammarEngine::new("F", plant_rules()).with_limits(ExpansionLimits {
        max_generations: 64,
        max_length: 100,
    });

    // 11 -> 61 -> 311 symbols
    assert_eq!(engine.expand(2).unwrap().len(), 61);
    assert_eq!(
        engine.expand(3),
        Err(Error::ExpansionTooLarge {
            generation: 3,
            length: 311,
            max: 100,
        })
    );
}

#[test]
fn generation_count_is_capped() {
    let engine = GrammarEngine::new("F", plant_rules()).with_limits(ExpansionLimits {
        max_generations: 3,
        ..ExpansionLimits::default()
    });
    assert!(engine.expand(3).is_ok());
    assert_eq!(
        engine.expand(4),
        Err(Error::TooManyGenerations {
            requested: 4,
            max: 3,
        })
    );
}

#[test]
fn unbounded_limits_still_expand() {
    let engine = GrammarEngine::new("F", RuleTable::new().with_rule('F', "FF"))
        .with_limits(ExpansionLimits::unbounded());
    assert_eq!(engine.expand(10).unwrap().len(), 1024);
}

#[test]
fn strings_built_from_symbols_match_parsed_text() {
    let built = SymbolString::from(vec![Symbol::Other('F'), Symbol::Other('[')]);
    let parsed = SymbolString::from("F[");
    assert_eq!(built, parsed);

    let json = serde_json::to_string(&built).unwrap();
    assert_eq!(json, r#""F[""#);
    let reloaded: SymbolString = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, built);
    assert_eq!(serde_json::to_string(&Symbol::Other('F')).unwrap(), r#""F""#);
    assert_eq!(Symbol::Other('F'), Symbol::Forward);

    let engine = GrammarEngine::new(built, RuleTable::new().with_rule('X', "Y"));
    assert_eq!(engine.expand(1).unwrap(), parsed);
}

#[test]
fn non_canonical_axiom_symbols_still_match_rules() {
    let engine = GrammarEngine::new(vec![Symbol::Other('F')], plant_rules());
    assert_eq!(engine.expand(1).unwrap(), "F[-F]F[+F]F");
}
