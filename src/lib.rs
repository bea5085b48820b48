//! # lsystem-turtle
//!
//! Expands L-System grammars and interprets the result with a 2D turtle,
//! producing an ordered list of line segments for any renderer to draw.
//!
//! The two stages are independent pure transformations:
//! [`GrammarEngine::expand`] rewrites an axiom for N generations, and
//! [`TurtleInterpreter::interpret`] walks the expanded string with a pen that
//! moves (`F`), turns (`+`/`-`) and branches (`[`/`]`). Nothing here touches a
//! drawing surface or sleeps; pacing belongs to the consumer of
//! [`TurtleInterpreter::segments`] or the `on_segment` hook.

pub mod config;
pub mod drawing;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod symbol;
pub mod turtle;

pub use config::*;
pub use drawing::*;
pub use error::{Error, Result};
pub use grammar::*;
pub use interpreter::*;
pub use symbol::*;
pub use turtle::*;
