use serde::{Deserialize, Serialize};

/// 2D coordinate with finite components
/// Engine output points are immutable values; only the caller-owned source
/// point changes between frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Squared distance to another point
    /// Used for all proximity comparisons so no square root is needed
    pub fn distance_sq(&self, other: Point) -> f64 {
        (self.x - other.x) * (self.x - other.x) + (self.y - other.y) * (self.y - other.y)
    }
}

/// Directed pair of points: either a candidate ray (center -> far edge)
/// or an obstacle edge (polygon edge or viewport boundary)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Segment { a, b }
    }
}
