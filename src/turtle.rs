//! Turtle state and operations for 2D line interpretation.

use crate::symbol::Symbol;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One complete, restorable pen configuration.
///
/// Heading is measured in radians with 0 pointing along `+Y` ("up"): moving
/// forward adds `step_length * sin(heading)` to x and `step_length * cos(heading)`
/// to y. Positive turns therefore rotate clockwise when +Y is drawn upwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PenState {
    /// Current world-space position of the pen.
    pub position: DVec2,

    /// Current heading in radians.
    pub heading: f64,

    /// Distance covered by a single forward move.
    pub step_length: f64,

    /// Angle (radians) applied by a single turn.
    pub turn_angle: f64,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            position: DVec2::new(100.0, 100.0),
            heading: 0.0,
            step_length: 5.0,
            turn_angle: PI / 6.0,
        }
    }
}

impl PenState {
    pub fn new(position: DVec2, heading: f64, step_length: f64, turn_angle: f64) -> Self {
        Self {
            position,
            heading,
            step_length,
            turn_angle,
        }
    }

    /// Unit vector the pen is facing.
    pub fn direction(&self) -> DVec2 {
        let (sin, cos) = self.heading.sin_cos();
        DVec2::new(sin, cos)
    }

    /// Moves the pen one step along its heading.
    pub fn advance(&mut self) {
        self.position += self.direction() * self.step_length;
    }

    /// Turns by `sign * turn_angle` radians (`+1.0` for `+`, `-1.0` for `-`).
    pub fn turn(&mut self, sign: f64) {
        self.heading += self.turn_angle * sign;
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Move forward one step, drawing a segment (`F`).
    Forward,
    /// Turn by `sign * turn_angle` (`+`/`-`).
    Turn(f64),
    /// Save the full pen state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed pen state (`]`).
    Pop,
    /// No-op: symbol has no turtle meaning.
    Ignore,
}

impl From<Symbol> for TurtleOp {
    fn from(symbol: Symbol) -> Self {
        match symbol.canonical() {
            Symbol::Forward => Self::Forward,
            Symbol::TurnLeft => Self::Turn(1.0),
            Symbol::TurnRight => Self::Turn(-1.0),
            Symbol::Push => Self::Push,
            Symbol::Pop => Self::Pop,
            Symbol::Other(_) => Self::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_zero_moves_up() {
        let mut pen = PenState::default();
        pen.advance();
        assert_eq!(pen.position, DVec2::new(100.0, 105.0));
    }

    #[test]
    fn turns_use_the_pen_turn_angle() {
        let mut pen = PenState {
            turn_angle: 0.25,
            ..Default::default()
        };
        pen.turn(1.0);
        pen.turn(1.0);
        pen.turn(-1.0);
        assert_eq!(pen.heading, 0.25);
    }

    #[test]
    fn quarter_turn_moves_along_x() {
        let mut pen = PenState::new(DVec2::ZERO, PI / 2.0, 2.0, 0.0);
        pen.advance();
        assert!((pen.x() - 2.0).abs() < 1e-12);
        assert!(pen.y().abs() < 1e-12);
    }

    #[test]
    fn symbols_decode_to_ops() {
        assert_eq!(TurtleOp::from(Symbol::Forward), TurtleOp::Forward);
        assert_eq!(TurtleOp::from(Symbol::TurnRight), TurtleOp::Turn(-1.0));
        assert_eq!(TurtleOp::from(Symbol::Other('X')), TurtleOp::Ignore);
        assert_eq!(TurtleOp::from(Symbol::Other('[')), TurtleOp::Push);
    }
}
