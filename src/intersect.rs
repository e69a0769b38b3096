use crate::point::{Point, Segment};

/// Intersection of the infinite lines through `ray` and `edge`, restricted
/// to both finite segments via the parametric scalars t and u.
/// Parallel lines (zero denominator) yield None, as do t or u outside [0, 1].
fn segment_intersection(ray: &Segment, edge: &Segment) -> Option<Point> {
    let (x1, y1) = (ray.a.x, ray.a.y);
    let (x2, y2) = (ray.b.x, ray.b.y);
    let (x3, y3) = (edge.a.x, edge.a.y);
    let (x4, y4) = (edge.b.x, edge.b.y);

    let denominator = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denominator == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denominator;
    let u = ((x1 - x3) * (y1 - y2) - (y1 - y3) * (x1 - x2)) / denominator;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        return Some(Point::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)));
    }

    None
}

/// Closest blocking intersection of `ray` against the obstacle set, measured
/// by squared distance from the ray start. An exact distance tie keeps the
/// obstacle seen first; iteration order is fixed, so the result is stable
/// within a call.
pub fn closest_intersection(ray: &Segment, obstacles: &[Segment]) -> Option<Point> {
    let mut closest: Option<Point> = None;

    for edge in obstacles {
        if let Some(hit) = segment_intersection(ray, edge) {
            match closest {
                None => closest = Some(hit),
                Some(best) => {
                    if hit.distance_sq(ray.a) < best.distance_sq(ray.a) {
                        closest = Some(hit);
                    }
                }
            }
        }
    }

    closest
}
