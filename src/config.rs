//! Configuration surface wiring an axiom, rules and pen setup together.

use crate::drawing::{Drawing, Segment};
use crate::error::{Error, Result};
use crate::grammar::{ExpansionLimits, GrammarEngine, RuleTable};
use crate::interpreter::{InterpreterConfig, TurtleInterpreter};
use crate::symbol::SymbolString;
use crate::turtle::PenState;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// Everything needed to produce a drawing. Angles are in radians.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LSystemConfig {
    pub axiom: String,
    pub rules: BTreeMap<char, String>,
    pub generations: u32,
    pub initial_position: DVec2,
    pub initial_heading: f64,
    pub turn_angle: f64,
    pub step_length: f64,
    pub limits: ExpansionLimits,
    pub max_stack_depth: usize,
}

impl Default for LSystemConfig {
    fn default() -> Self {
        Self {
            axiom: "+F".into(),
            rules: BTreeMap::from([('F', "F[-F]F[+F][F]".into())]),
            generations: 5,
            initial_position: DVec2::new(100.0, 100.0),
            initial_heading: 0.0,
            turn_angle: PI / 6.0,
            step_length: 5.0,
            limits: ExpansionLimits::default(),
            max_stack_depth: InterpreterConfig::default().max_stack_depth,
        }
    }
}

impl LSystemConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("initial_position.x", self.initial_position.x),
            ("initial_position.y", self.initial_position.y),
            ("initial_heading", self.initial_heading),
            ("turn_angle", self.turn_angle),
            ("step_length", self.step_length),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidConfig(format!("{name} must be finite, got {value}")));
        }
        Ok(())
    }

    pub fn initial_state(&self) -> PenState {
        PenState::new(
            self.initial_position,
            self.initial_heading,
            self.step_length,
            self.turn_angle,
        )
    }
}

/// A configured L-System: grammar plus turtle setup.
#[derive(Clone, Debug)]
pub struct LSystem {
    engine: GrammarEngine,
    interpreter: TurtleInterpreter,
    initial: PenState,
    generations: u32,
}

impl LSystem {
    pub fn from_config(config: &LSystemConfig) -> Result<Self> {
        config.validate()?;
        let rules: RuleTable = config
            .rules
            .iter()
            .map(|(&symbol, replacement)| (symbol, replacement.as_str()))
            .collect();

        Ok(Self {
            engine: GrammarEngine::new(config.axiom.as_str(), rules).with_limits(config.limits),
            interpreter: TurtleInterpreter::new(InterpreterConfig {
                max_stack_depth: config.max_stack_depth,
            }),
            initial: config.initial_state(),
            generations: config.generations,
        })
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_config(&LSystemConfig::from_json(text)?)
    }

    pub fn engine(&self) -> &GrammarEngine {
        &self.engine
    }

    pub fn interpreter(&self) -> &TurtleInterpreter {
        &self.interpreter
    }

    pub fn initial_state(&self) -> PenState {
        self.initial
    }

    /// Expands the axiom for the configured number of generations.
    pub fn expand(&self) -> Result<SymbolString> {
        self.engine.expand(self.generations)
    }

    /// Expands and interprets in one go.
    pub fn draw(&self) -> Result<Drawing> {
        self.draw_with(|_| {})
    }

    /// [`draw`](Self::draw) with a per-segment pacing hook.
    pub fn draw_with<F>(&self, on_segment: F) -> Result<Drawing>
    where
        F: FnMut(&Segment),
    {
        let expanded = self.expand()?;
        Ok(self
            .interpreter
            .interpret_with(&expanded, self.initial, on_segment)?)
    }
}
