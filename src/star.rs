use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::intersect::closest_intersection;
use crate::point::{Point, Segment};
use crate::scene::Viewport;

/// Rendered marker radius. Also the pull-back offset for blocked ray
/// endpoints and, doubled, the proximity radius used by the dedup check
/// in `propagate::expand`.
pub const POINT_RADIUS: f64 = 4.0;

/// A star ("fan"): a center point plus its ray endpoints in ascending-angle
/// order. The order matters for per-ray coloring, not for correctness.
/// Pure computed value, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub center: Point,
    pub rays: Vec<Point>,
}

impl Star {
    pub fn new(center: Point, rays: Vec<Point>) -> Self {
        Star { center, rays }
    }
}

/// Generate one star: `ray_count` evenly spaced rays from `center`, each
/// stopped at the nearest obstacle intersection.
///
/// With a `target`, the whole fan is rotated by the slope of center->target
/// (delta-y over delta-x, used directly as radians). This is a stylized bias,
/// not an atan2 bearing, and it gives the effect its characteristic skew;
/// keep the formula as is.
///
/// Unobstructed rays end on the circle of viewport-diagonal radius, which
/// guarantees they pass any on-screen obstacle. Blocked endpoints are pulled
/// back toward the center by POINT_RADIUS on each axis where the hit moved
/// off the unobstructed endpoint, then truncated to integer coordinates so
/// endpoints stay stable for the dedup proximity test.
pub fn generate_star(
    center: Point,
    ray_count: usize,
    obstacles: &[Segment],
    target: Option<Point>,
    viewport: &Viewport,
) -> Star {
    let bias = match target {
        Some(t) => (center.y - t.y) / (center.x - t.x),
        None => 0.0,
    };
    let radius = viewport.diagonal();

    let mut rays = Vec::with_capacity(ray_count);
    for i in 0..ray_count {
        let angle = (i as f64) * TAU / (ray_count as f64) + bias;
        let mut x = center.x + angle.cos() * radius;
        let mut y = center.y + angle.sin() * radius;

        let ray = Segment::new(center, Point::new(x, y));
        if let Some(hit) = closest_intersection(&ray, obstacles) {
            x = pull_back(hit.x, x);
            y = pull_back(hit.y, y);
        }

        rays.push(Point::new(x, y));
    }

    Star::new(center, rays)
}

/// One axis of the blocked-endpoint adjustment: step POINT_RADIUS from the
/// hit coordinate back toward the center side, unless the hit already
/// coincides with the unobstructed far coordinate, then truncate toward zero.
fn pull_back(hit: f64, far: f64) -> f64 {
    let adjusted = if hit == far {
        hit
    } else if hit < far {
        hit - POINT_RADIUS
    } else {
        hit + POINT_RADIUS
    };
    adjusted.trunc()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_unobstructed_endpoints_on_diagonal_circle() {
        let viewport = Viewport::new(100.0, 100.0);
        let center = Point::new(50.0, 50.0);
        let star = generate_star(center, 8, &[], None, &viewport);

        assert_eq!(star.rays.len(), 8);
        let radius_sq = viewport.diagonal() * viewport.diagonal();
        for tip in &star.rays {
            assert!((tip.distance_sq(center) - radius_sq).abs() < 1e-6 * radius_sq);
        }
    }

    #[test]
    fn test_ray_count_is_exact() {
        let viewport = Viewport::new(640.0, 480.0);
        for count in [4usize, 5, 8, 128] {
            let star = generate_star(Point::new(10.0, 10.0), count, &[], None, &viewport);
            assert_eq!(star.rays.len(), count);
        }
    }

    #[test]
    fn test_target_bias_is_slope_not_bearing() {
        // 100x100 viewport, center (50,50), target (25,75):
        // bias = (50 - 75) / (50 - 25) = -1.0 rad, applied to every ray
        let viewport = Viewport::new(100.0, 100.0);
        let center = Point::new(50.0, 50.0);
        let target = Point::new(25.0, 75.0);
        let star = generate_star(center, 4, &[], Some(target), &viewport);

        let radius = viewport.diagonal();
        for (i, tip) in star.rays.iter().enumerate() {
            let angle = (i as f64) * TAU / 4.0 - 1.0;
            assert!((tip.x - (center.x + angle.cos() * radius)).abs() < EPS);
            assert!((tip.y - (center.y + angle.sin() * radius)).abs() < EPS);
        }
    }

    #[test]
    fn test_bisecting_obstacle_shortens_only_crossing_rays() {
        // Vertical wall splitting the viewport at x = 75. With 4 unbiased
        // rays from (50, 50), only the angle-0 ray crosses it.
        let viewport = Viewport::new(100.0, 100.0);
        let center = Point::new(50.0, 50.0);
        let wall = Segment::new(Point::new(75.0, 0.0), Point::new(75.0, 100.0));
        let star = generate_star(center, 4, &[wall], None, &viewport);

        // Hit at (75, 50), pulled back by POINT_RADIUS on x, truncated
        assert_eq!(star.rays[0], Point::new(71.0, 50.0));

        let radius_sq = viewport.diagonal() * viewport.diagonal();
        for tip in &star.rays[1..] {
            assert!((tip.distance_sq(center) - radius_sq).abs() < 1e-6 * radius_sq);
        }
    }

    #[test]
    fn test_blocked_endpoints_are_integer_snapped() {
        let viewport = Viewport::new(97.0, 113.0);
        let center = Point::new(48.3, 55.7);
        let wall = Segment::new(Point::new(60.0, -500.0), Point::new(60.0, 500.0));
        let star = generate_star(center, 16, &[wall], None, &viewport);

        for tip in &star.rays {
            if tip.distance_sq(center) < viewport.diagonal() * viewport.diagonal() * 0.5 {
                // Shortened ray: both coordinates must be whole numbers
                assert_eq!(tip.x, tip.x.trunc());
                assert_eq!(tip.y, tip.y.trunc());
            }
        }
    }

    #[test]
    fn test_endpoints_never_beyond_obstacle() {
        let viewport = Viewport::new(100.0, 100.0);
        let center = Point::new(20.0, 50.0);
        let wall = Segment::new(Point::new(40.0, -500.0), Point::new(40.0, 500.0));
        let star = generate_star(center, 32, &[wall], None, &viewport);

        for tip in &star.rays {
            assert!(tip.x <= 40.0);
        }
    }
}
