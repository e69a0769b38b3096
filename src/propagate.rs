use crate::point::{Point, Segment};
use crate::scene::Viewport;
use crate::star::{generate_star, Star, POINT_RADIUS};

/// Grow a frontier of stars from the seeds over `depth` bounded rounds.
///
/// Each round walks the frontier as it stood when the round began and tries
/// to spawn a new star at every ray endpoint. An endpoint is skipped when any
/// star already in the frontier has its center within 2 x POINT_RADIUS of it
/// (squared-distance comparison). Newly spawned stars are appended
/// immediately, so they take part in the proximity check for the rest of the
/// round; the first ray to claim a spot wins, which makes spawn order
/// angle-dependent. The completed frontier therefore never holds two centers
/// closer than the proximity radius.
///
/// `depth = 0` returns the seeds unchanged. Rounds that spawn nothing still
/// count against `depth`; termination is by construction, not a fixpoint.
pub fn expand(
    seeds: &[Star],
    depth: u32,
    ray_count: usize,
    obstacles: &[Segment],
    target: Option<Point>,
    viewport: &Viewport,
) -> Vec<Star> {
    let proximity_sq = (POINT_RADIUS * 2.0) * (POINT_RADIUS * 2.0);
    let mut frontier: Vec<Star> = seeds.to_vec();

    for _ in 0..depth {
        let round_len = frontier.len();
        for star_idx in 0..round_len {
            for ray_idx in 0..frontier[star_idx].rays.len() {
                let tip = frontier[star_idx].rays[ray_idx];

                let occupied = frontier
                    .iter()
                    .any(|star| star.center.distance_sq(tip) < proximity_sq);
                if occupied {
                    continue;
                }

                frontier.push(generate_star(tip, ray_count, obstacles, target, viewport));
            }
        }
    }

    frontier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proximity_sq() -> f64 {
        (POINT_RADIUS * 2.0) * (POINT_RADIUS * 2.0)
    }

    #[test]
    fn test_depth_zero_returns_seeds_unchanged() {
        let viewport = Viewport::new(100.0, 100.0);
        let seed = generate_star(Point::new(50.0, 50.0), 6, &[], None, &viewport);
        let result = expand(&[seed.clone()], 0, 6, &[], None, &viewport);
        assert_eq!(result, vec![seed]);
    }

    #[test]
    fn test_one_round_spawns_at_every_separated_endpoint() {
        // No obstacles: 4 endpoints on the diagonal circle, all far apart,
        // so each spawns a star
        let viewport = Viewport::new(100.0, 100.0);
        let seed = generate_star(Point::new(50.0, 50.0), 4, &[], None, &viewport);
        let result = expand(&[seed.clone()], 1, 4, &[], None, &viewport);

        assert_eq!(result.len(), 5);
        for (star, tip) in result[1..].iter().zip(&seed.rays) {
            assert_eq!(star.center, *tip);
            assert_eq!(star.rays.len(), 4);
        }
    }

    #[test]
    fn test_endpoint_near_seed_center_is_skipped() {
        // Hand-built seed whose second ray ends right next to its own center
        let viewport = Viewport::new(100.0, 100.0);
        let center = Point::new(50.0, 50.0);
        let seed = Star::new(
            center,
            vec![Point::new(90.0, 50.0), Point::new(52.0, 51.0)],
        );
        let result = expand(&[seed], 1, 4, &[], None, &viewport);

        // Only the distant endpoint spawns
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].center, Point::new(90.0, 50.0));
    }

    #[test]
    fn test_stars_spawned_this_round_block_nearby_endpoints() {
        // Two ray tips 3 px apart: the first claims the spot, the second is
        // rejected against the star appended earlier in the same round
        let viewport = Viewport::new(100.0, 100.0);
        let seed = Star::new(
            Point::new(10.0, 10.0),
            vec![Point::new(60.0, 60.0), Point::new(63.0, 60.0)],
        );
        let result = expand(&[seed], 1, 4, &[], None, &viewport);

        assert_eq!(result.len(), 2);
        assert_eq!(result[1].center, Point::new(60.0, 60.0));
    }

    #[test]
    fn test_pairwise_center_separation_invariant() {
        let viewport = Viewport::new(200.0, 150.0);
        let wall = Segment::new(Point::new(120.0, -500.0), Point::new(120.0, 500.0));
        let obstacles = [wall];
        let seed = generate_star(Point::new(40.0, 70.0), 8, &obstacles, None, &viewport);
        let result = expand(&[seed], 3, 8, &obstacles, None, &viewport);

        for (i, a) in result.iter().enumerate() {
            for b in &result[i + 1..] {
                assert!(
                    a.center.distance_sq(b.center) >= proximity_sq(),
                    "centers {:?} and {:?} too close",
                    a.center,
                    b.center
                );
            }
        }
    }

    #[test]
    fn test_every_spawned_star_keeps_ray_count() {
        let viewport = Viewport::new(300.0, 200.0);
        let seed = generate_star(Point::new(150.0, 100.0), 5, &[], None, &viewport);
        let result = expand(&[seed], 2, 5, &[], None, &viewport);

        assert!(result.len() > 1);
        for star in &result {
            assert_eq!(star.rays.len(), 5);
        }
    }

    #[test]
    fn test_frontier_grows_monotonically_with_depth() {
        let viewport = Viewport::new(200.0, 200.0);
        let seed = generate_star(Point::new(100.0, 100.0), 4, &[], None, &viewport);

        let mut previous = 1;
        for depth in 0..3u32 {
            let result = expand(
                std::slice::from_ref(&seed),
                depth,
                4,
                &[],
                None,
                &viewport,
            );
            assert!(result.len() >= previous);
            previous = result.len();
        }
    }
}
