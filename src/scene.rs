use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::point::{Point, Segment};

/// Current drawable area. Rebuilt from the window size every frame so the
/// engine sees resizes as plain input changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    /// Ray length that guarantees any unobstructed ray exits the screen
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }

    /// The four border edges, as obstacle segments
    pub fn boundary_segments(&self) -> Vec<Segment> {
        let (w, h) = (self.width, self.height);
        vec![
            Segment::new(Point::new(0.0, 0.0), Point::new(w, 0.0)),
            Segment::new(Point::new(w, 0.0), Point::new(w, h)),
            Segment::new(Point::new(0.0, h), Point::new(w, h)),
            Segment::new(Point::new(0.0, h), Point::new(0.0, 0.0)),
        ]
    }
}

/// Closed regular polygon outline around `center`: `vertices` edges between
/// consecutive vertices, starting at `angle_offset` radians.
pub fn polygon_segments(
    center: Point,
    vertices: u32,
    radius: f64,
    angle_offset: f64,
) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(vertices as usize);
    let mut prev: Option<Point> = None;

    for i in 0..=vertices {
        let angle = (i as f64) * TAU / (vertices as f64) + angle_offset;
        let vertex = Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        );
        if let Some(p) = prev {
            segments.push(Segment::new(p, vertex));
        }
        prev = Some(vertex);
    }

    segments
}

/// Rotation angle of the obstacle polygon at `time_ms` milliseconds.
/// The divisor sets the slow spin rate of the effect.
pub fn obstacle_angle(time_ms: f64, vertices: u32) -> f64 {
    time_ms / (vertices as f64 * 2f64.powf(9.25))
}

/// Obstacle geometry for one frame: the spinning polygon (drawn separately)
/// plus the combined obstacle list fed to the engine.
#[derive(Debug, Clone)]
pub struct Scene {
    pub polygon: Vec<Segment>,
    pub obstacles: Vec<Segment>,
}

impl Scene {
    /// Assemble the frame's obstacles: viewport border plus a regular polygon
    /// centered on the viewport, sized by `radius_ratio` of the short side,
    /// rotated according to elapsed time.
    pub fn build(viewport: &Viewport, vertices: u32, radius_ratio: f64, time_ms: f64) -> Self {
        let center = Point::new(
            (viewport.width * 0.5).trunc(),
            (viewport.height * 0.5).trunc(),
        );
        let radius = viewport.width.min(viewport.height) * radius_ratio;
        let polygon = polygon_segments(center, vertices, radius, obstacle_angle(time_ms, vertices));

        let mut obstacles = viewport.boundary_segments();
        obstacles.extend(polygon.iter().copied());

        Scene { polygon, obstacles }
    }
}
