//! Line segments and the finished drawing handed to a renderer.

use crate::turtle::PenState;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One straight line emitted by the turtle, in turtle world coordinates.
///
/// No axis is flipped: a renderer with a top-left origin must invert Y itself.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        }
    }

    pub fn start(&self) -> DVec2 {
        DVec2::new(self.x1, self.y1)
    }

    pub fn end(&self) -> DVec2 {
        DVec2::new(self.x2, self.y2)
    }

    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }
}

/// The complete result of interpreting one symbol string.
///
/// This is the handoff value for a renderer, which owns the surface, colours,
/// coordinate inversion and drawing cadence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    /// Every segment, in emission order.
    pub segments: Vec<Segment>,

    /// Pen state after the last symbol.
    pub final_state: PenState,

    /// Pushes that were never popped. Not an error, but usually a grammar typo.
    pub unclosed_branches: usize,
}

impl Drawing {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Axis-aligned bounding box `(min, max)` of all segment endpoints.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let mut points = self.segments.iter().flat_map(|s| [s.start(), s.end()]);
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

impl<'a> IntoIterator for &'a Drawing {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
