//! Rounded points and undirected edges between them.
//!
//! The corners shared by adjacent hexagons are computed independently
//! for each hexagon and may differ in the last bits. Rounding them to a
//! fixed number of decimal digits makes them compare (and hash) equal.

use serde::{ Deserialize, Serialize };

use std::cmp::Ordering;
use std::convert::TryFrom;
use std::hash::{ Hash, Hasher };

use crate::error::{ Error, Result };
use crate::geo::Point;

/// The number of decimal digits that points are rounded to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Precision {
    digits: u32,
}

impl Precision {
    /// Two decimal digits, enough for rendering.
    pub const DISPLAY: Precision = Precision { digits: 2 };

    /// Twelve decimal digits, preserving exact equality of shared corners.
    pub const EXACT: Precision = Precision { digits: 12 };

    pub const MAX_DIGITS: u32 = 15;

    pub fn from_digits(digits: u32) -> Result<Precision> {
        if digits > Self::MAX_DIGITS {
            return Err(Error::InvalidArgument(format!(
                "precision must not exceed {} digits, got {}", Self::MAX_DIGITS, digits)))
        }
        Ok(Precision { digits })
    }

    /// The precision for a step size like `1e-2`. Steps of 1 or more
    /// round to integers. The decimal exponent of the step is rounded,
    /// not truncated, so `0.003` keeps 3 digits and `0.03` keeps 2.
    pub fn from_step(step: f64) -> Result<Precision> {
        if !(step > 0.0) || !step.is_finite() {
            return Err(Error::InvalidArgument(
                format!("precision must be a positive number, got {}", step)))
        }
        let digits = (-step.log10().round()).max(0.0);
        if digits > Self::MAX_DIGITS as f64 {
            return Err(Error::InvalidArgument(
                format!("precision {} is finer than 1e-{}", step, Self::MAX_DIGITS)))
        }
        Ok(Precision { digits: digits as u32 })
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    pub fn step(&self) -> f64 {
        10f64.powi(-(self.digits as i32))
    }

    pub fn round(&self, p: Point) -> Vertex {
        Vertex::new(self.round_f64(p.x), self.round_f64(p.y))
    }

    fn round_f64(&self, x: f64) -> f64 {
        let scale = 10f64.powi(self.digits as i32);
        (x * scale).round() / scale
    }
}

impl Default for Precision {
    fn default() -> Precision {
        Precision::DISPLAY
    }
}

impl TryFrom<f64> for Precision {
    type Error = Error;

    fn try_from(step: f64) -> Result<Precision> {
        Precision::from_step(step)
    }
}

impl From<Precision> for f64 {
    fn from(p: Precision) -> f64 { p.step() }
}

/// A point with rounded coordinates that can serve as a key in
/// hash maps and ordered sets.
///
/// Serializes as an `[x, y]` pair.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Vertex(f64, f64);

impl Vertex {
    pub(crate) fn new(x: f64, y: f64) -> Vertex {
        // Normalise negative zero, which compares equal but hashes differently.
        Vertex(x + 0.0, y + 0.0)
    }

    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.0, self.1)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Vertex) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
        self.1.to_bits().hash(state);
    }
}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Vertex) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Vertex) -> Ordering {
        self.0.total_cmp(&other.0).then_with(|| self.1.total_cmp(&other.1))
    }
}

/// An undirected edge between two distinct vertices.
///
/// The end points are stored in ascending order, so an edge compares
/// equal to its reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    a: Vertex,
    b: Vertex,
}

impl Edge {
    /// Create an edge between two vertices, or `None` if they coincide.
    pub fn new(p: Vertex, q: Vertex) -> Option<Edge> {
        match p.cmp(&q) {
            Ordering::Less    => Some(Edge { a: p, b: q }),
            Ordering::Greater => Some(Edge { a: q, b: p }),
            Ordering::Equal   => None,
        }
    }

    pub fn endpoints(&self) -> (Vertex, Vertex) {
        (self.a, self.b)
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.a == v || self.b == v
    }

    /// The end point opposite of `v`, if `v` is an end point.
    pub fn other(&self, v: Vertex) -> Option<Vertex> {
        if self.a == v {
            Some(self.b)
        } else if self.b == v {
            Some(self.a)
        } else {
            None
        }
    }
}
