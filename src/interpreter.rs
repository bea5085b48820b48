//! Interpreter that converts an expanded symbol string into line [`Segment`]s.
//!
//! The entry point is [`TurtleInterpreter`]. [`TurtleInterpreter::segments`]
//! yields segments lazily so a renderer can pace its drawing;
//! [`TurtleInterpreter::interpret`] collects them into a [`Drawing`].

use crate::drawing::{Drawing, Segment};
use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::turtle::{PenState, TurtleOp};
use std::iter::FusedIterator;
use tracing::{debug, trace, warn};

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct InterpreterConfig {
    /// Maximum stack depth for push/pop operations.
    pub max_stack_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            max_stack_depth: 1024,
        }
    }
}

/// The failure of an interpretation, together with everything drawn before it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("interpretation halted after {} segments: {source}", .segments.len())]
pub struct PartialDrawing {
    pub source: Error,
    pub segments: Vec<Segment>,
}

impl From<PartialDrawing> for Error {
    fn from(partial: PartialDrawing) -> Self {
        partial.source
    }
}

/// Interprets expanded L-System output as 2D turtle movement.
#[derive(Clone, Debug, Default)]
pub struct TurtleInterpreter {
    config: InterpreterConfig,
}

impl TurtleInterpreter {
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Lazily walks `expanded`, starting from `initial`.
    ///
    /// Calling this again with the same arguments restarts from the beginning.
    pub fn segments<'a>(&self, expanded: &'a [Symbol], initial: PenState) -> Segments<'a> {
        Segments {
            symbols: expanded,
            cursor: 0,
            current: initial,
            stack: Vec::new(),
            max_stack_depth: self.config.max_stack_depth,
            halted: false,
        }
    }

    /// Interprets the full symbol string and returns the resulting [`Drawing`].
    ///
    /// # Push / Pop
    ///
    /// `[` saves the full pen state (position, heading, step length, turn angle)
    /// and `]` restores all of it. A `]` with nothing to restore halts
    /// interpretation with [`Error::StackUnderflow`]; the segments drawn up to
    /// that point are returned inside the [`PartialDrawing`].
    pub fn interpret(
        &self,
        expanded: &[Symbol],
        initial: PenState,
    ) -> std::result::Result<Drawing, PartialDrawing> {
        self.interpret_with(expanded, initial, |_| {})
    }

    /// Like [`interpret`](Self::interpret), calling `on_segment` once per segment
    /// as soon as it is emitted.
    pub fn interpret_with<F>(
        &self,
        expanded: &[Symbol],
        initial: PenState,
        mut on_segment: F,
    ) -> std::result::Result<Drawing, PartialDrawing>
    where
        F: FnMut(&Segment),
    {
        let mut walk = self.segments(expanded, initial);
        let mut segments = Vec::new();

        for next in walk.by_ref() {
            match next {
                Ok(segment) => {
                    on_segment(&segment);
                    segments.push(segment);
                }
                Err(source) => return Err(PartialDrawing { source, segments }),
            }
        }

        debug!(
            segments = segments.len(),
            unclosed = walk.depth(),
            "interpretation finished"
        );
        Ok(Drawing {
            segments,
            final_state: walk.current,
            unclosed_branches: walk.depth(),
        })
    }
}

/// Lazy segment stream over an expanded string. See [`TurtleInterpreter::segments`].
///
/// Yields `Err` at most once; after that the stream is exhausted.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    symbols: &'a [Symbol],
    cursor: usize,
    current: PenState,
    stack: Vec<PenState>,
    max_stack_depth: usize,
    halted: bool,
}

impl Segments<'_> {
    /// The pen state after the symbols consumed so far.
    pub fn state(&self) -> &PenState {
        &self.current
    }

    /// Current number of saved states.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of symbols consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Applies one symbol at index `position`.
    fn apply(&mut self, symbol: Symbol, position: usize) -> Result<Option<Segment>> {
        // Pen as of the start of this step: what `F` draws from and `[` saves.
        let committed = self.current;

        match TurtleOp::from(symbol) {
            TurtleOp::Forward => {
                self.current.advance();
                let segment = Segment::new(committed.position, self.current.position);
                trace!(?segment, "segment");
                return Ok(Some(segment));
            }
            TurtleOp::Turn(sign) => self.current.turn(sign),
            TurtleOp::Push => {
                if self.stack.len() >= self.max_stack_depth {
                    warn!(position, max = self.max_stack_depth, "branch stack overflow");
                    return Err(Error::StackOverflow {
                        position,
                        max: self.max_stack_depth,
                    });
                }
                self.stack.push(committed);
            }
            TurtleOp::Pop => match self.stack.pop() {
                Some(saved) => self.current = saved,
                None => {
                    warn!(position, "unbalanced brackets");
                    return Err(Error::StackUnderflow { position });
                }
            },
            TurtleOp::Ignore => {}
        }
        Ok(None)
    }
}

impl Iterator for Segments<'_> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        while let Some(&symbol) = self.symbols.get(self.cursor) {
            let position = self.cursor;
            self.cursor += 1;
            match self.apply(symbol, position) {
                Ok(Some(segment)) => return Some(Ok(segment)),
                Ok(None) => {}
                Err(e) => {
                    self.halted = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl FusedIterator for Segments<'_> {}
