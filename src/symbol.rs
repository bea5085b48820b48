//! The grammar alphabet.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

/// A single-character grammar symbol.
///
/// The five characters with a turtle meaning get their own variant; every other
/// character is carried verbatim in [`Symbol::Other`]. Use [`Symbol::from`] to
/// build symbols so that `'F'` always lands on [`Symbol::Forward`]. Equality and
/// hashing go through [`Symbol::as_char`], so `Other('F') == Forward`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(from = "char", into = "char")]
pub enum Symbol {
    /// Move forward, drawing a line (`F`).
    Forward,
    /// Turn by `+turn_angle` (`+`).
    TurnLeft,
    /// Turn by `-turn_angle` (`-`).
    TurnRight,
    /// Save the pen state (`[`).
    Push,
    /// Restore the most recently saved pen state (`]`).
    Pop,
    /// Any other character. Rewritable, but inert for the turtle.
    Other(char),
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::TurnLeft => '+',
            Self::TurnRight => '-',
            Self::Push => '[',
            Self::Pop => ']',
            Self::Other(c) => c,
        }
    }

    /// Re-maps `Other('F')` and friends onto their dedicated variant.
    pub fn canonical(self) -> Self {
        Self::from(self.as_char())
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.as_char() == other.as_char()
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_char().hash(state);
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        match c {
            'F' => Self::Forward,
            '+' => Self::TurnLeft,
            '-' => Self::TurnRight,
            '[' => Self::Push,
            ']' => Self::Pop,
            other => Self::Other(other),
        }
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.as_char()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An owned sequence of [`Symbol`]s: an axiom, a replacement, or an expanded string.
///
/// Symbols are stored in canonical form whichever way they come in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SymbolString(Vec<Symbol>);

impl SymbolString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, symbol: Symbol) {
        self.0.push(symbol.canonical());
    }

    pub fn extend_from_slice(&mut self, symbols: &[Symbol]) {
        self.0.extend(symbols.iter().map(|s| s.canonical()));
    }
}

impl Deref for SymbolString {
    type Target = [Symbol];

    fn deref(&self) -> &[Symbol] {
        &self.0
    }
}

impl From<&str> for SymbolString {
    fn from(text: &str) -> Self {
        text.chars().map(Symbol::from).collect()
    }
}

impl From<String> for SymbolString {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl From<SymbolString> for String {
    fn from(symbols: SymbolString) -> Self {
        symbols.to_string()
    }
}

impl From<Vec<Symbol>> for SymbolString {
    fn from(symbols: Vec<Symbol>) -> Self {
        symbols.into_iter().collect()
    }
}

impl FromStr for SymbolString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl FromIterator<Symbol> for SymbolString {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().map(Symbol::canonical).collect())
    }
}

impl IntoIterator for SymbolString {
    type Item = Symbol;
    type IntoIter = std::vec::IntoIter<Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SymbolString {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SymbolString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl PartialEq<str> for SymbolString {
    fn eq(&self, other: &str) -> bool {
        self.0.iter().copied().map(char::from).eq(other.chars())
    }
}

impl PartialEq<&str> for SymbolString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
