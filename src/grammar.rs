//! Context-free rewriting of symbol strings.
//!
//! [`GrammarEngine`] owns an axiom and a [`RuleTable`] and rewrites the axiom
//! generation by generation. Every symbol of the current string is replaced in
//! a single left-to-right pass; replacements are appended verbatim and never
//! re-expanded within the same generation. Symbols without a rule rewrite to
//! themselves.

use crate::error::{Error, Result};
use crate::symbol::{Symbol, SymbolString};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Production rules, one replacement per symbol.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleTable {
    rules: HashMap<Symbol, SymbolString>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `symbol → replacement`, returning the replacement it overrides.
    pub fn insert(
        &mut self,
        symbol: impl Into<Symbol>,
        replacement: impl Into<SymbolString>,
    ) -> Option<SymbolString> {
        let symbol: Symbol = symbol.into();
        self.rules.insert(symbol.canonical(), replacement.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_rule(
        mut self,
        symbol: impl Into<Symbol>,
        replacement: impl Into<SymbolString>,
    ) -> Self {
        self.insert(symbol, replacement);
        self
    }

    pub fn get(&self, symbol: Symbol) -> Option<&SymbolString> {
        self.rules.get(&symbol.canonical())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of symbols `symbol` turns into after one generation.
    fn rewritten_len(&self, symbol: Symbol) -> usize {
        self.get(symbol).map_or(1, |r| r.len())
    }
}

impl<S, R> FromIterator<(S, R)> for RuleTable
where
    S: Into<Symbol>,
    R: Into<SymbolString>,
{
    fn from_iter<I: IntoIterator<Item = (S, R)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, replacement) in iter {
            table.insert(symbol, replacement);
        }
        table
    }
}

/// Guards against the exponential growth of repeated rewriting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionLimits {
    /// Largest generation count [`GrammarEngine::expand`] accepts.
    pub max_generations: u32,
    /// Largest number of symbols any generation may produce.
    pub max_length: usize,
}

impl Default for ExpansionLimits {
    fn default() -> Self {
        Self {
            max_generations: 64,
            max_length: 16 * 1024 * 1024,
        }
    }
}

impl ExpansionLimits {
    /// No guard at all. Large depths will exhaust memory.
    pub fn unbounded() -> Self {
        Self {
            max_generations: u32::MAX,
            max_length: usize::MAX,
        }
    }
}

/// Applies one generation of `rules` to `current` without any size guard.
pub fn rewrite(current: &[Symbol], rules: &RuleTable) -> SymbolString {
    let mut next = SymbolString::with_capacity(current.len());
    for &symbol in current {
        match rules.get(symbol) {
            Some(replacement) => next.extend_from_slice(replacement),
            None => next.push(symbol),
        }
    }
    next
}

/// Expands an axiom under a fixed rule table.
#[derive(Clone, Debug)]
pub struct GrammarEngine {
    axiom: SymbolString,
    rules: RuleTable,
    limits: ExpansionLimits,
}

impl GrammarEngine {
    /// Creates an engine with the default [`ExpansionLimits`].
    pub fn new(axiom: impl Into<SymbolString>, rules: RuleTable) -> Self {
        Self {
            axiom: axiom.into(),
            rules,
            limits: ExpansionLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ExpansionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn axiom(&self) -> &SymbolString {
        &self.axiom
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn limits(&self) -> ExpansionLimits {
        self.limits
    }

    /// Rewrites `current` once, as generation number `generation`.
    ///
    /// The length of the result is computed before anything is allocated, so an
    /// oversized generation fails with [`Error::ExpansionTooLarge`] up front.
    pub fn step(&self, current: &[Symbol], generation: u32) -> Result<SymbolString> {
        let length = current
            .iter()
            .try_fold(0usize, |acc, &s| acc.checked_add(self.rules.rewritten_len(s)))
            .unwrap_or(usize::MAX);

        if length > self.limits.max_length {
            warn!(generation, length, max = self.limits.max_length, "expansion rejected");
            return Err(Error::ExpansionTooLarge {
                generation,
                length,
                max: self.limits.max_length,
            });
        }

        let next = rewrite(current, &self.rules);
        debug!(generation, length = next.len(), "expanded generation");
        Ok(next)
    }

    /// Rewrites the axiom exactly `generations` times.
    ///
    /// Zero generations returns the axiom untouched.
    pub fn expand(&self, generations: u32) -> Result<SymbolString> {
        if generations > self.limits.max_generations {
            warn!(generations, max = self.limits.max_generations, "expansion rejected");
            return Err(Error::TooManyGenerations {
                requested: generations,
                max: self.limits.max_generations,
            });
        }

        let mut current = self.axiom.clone();
        for generation in 1..=generations {
            current = self.step(&current, generation)?;
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_keys_are_canonical() {
        let rules = RuleTable::new().with_rule(Symbol::Other('F'), "FF");
        assert!(rules.get(Symbol::Forward).is_some());
    }

    #[test]
    fn length_guard_counts_identity_symbols() {
        let rules = RuleTable::new().with_rule('F', "FF");
        let engine = GrammarEngine::new("FXY", rules);
        assert_eq!(engine.step(engine.axiom(), 1).map(|s| s.len()), Ok(4));
    }

    #[test]
    #[tracing_test::traced_test]
    fn each_generation_is_logged() {
        let engine = GrammarEngine::new("F", RuleTable::new().with_rule('F', "F+F"));
        let out = engine.expand(3).unwrap();
        assert_eq!(out.len(), 15);
        assert!(logs_contain("expanded generation"));
    }
}
