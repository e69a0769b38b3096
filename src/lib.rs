pub mod config;
pub mod intersect;
pub mod point;
pub mod propagate;
pub mod scene;
pub mod snapshot;
pub mod star;

pub use intersect::closest_intersection;
pub use point::{Point, Segment};
pub use propagate::expand;
pub use scene::{Scene, Viewport};
pub use snapshot::FrameSnapshot;
pub use star::{generate_star, Star, POINT_RADIUS};
