use serde::{Deserialize, Serialize};
use std::fs;

use crate::point::{Point, Segment};
use crate::propagate::expand;
use crate::scene::Viewport;
use crate::star::{generate_star, Star};

/// One frame's inputs and outputs, serializable for clipboard export,
/// file save/load, and deterministic replay in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub viewport: Viewport,
    pub source: Point,
    pub target: Point,
    pub ray_count: usize,
    pub depth: u32,
    pub obstacles: Vec<Segment>,
    pub stars: Vec<Star>,
}

impl FrameSnapshot {
    /// Capture the current frame state together with its expanded star field
    pub fn capture(
        viewport: Viewport,
        source: Point,
        target: Point,
        ray_count: usize,
        depth: u32,
        obstacles: Vec<Segment>,
        stars: Vec<Star>,
    ) -> Self {
        FrameSnapshot {
            viewport,
            source,
            target,
            ray_count,
            depth,
            obstacles,
            stars,
        }
    }

    /// Re-run the engine from the stored inputs. A snapshot taken from a
    /// live frame reproduces its own star list exactly.
    pub fn replay(&self) -> Vec<Star> {
        let seed = generate_star(
            self.source,
            self.ray_count,
            &self.obstacles,
            Some(self.target),
            &self.viewport,
        );
        expand(
            &[seed],
            self.depth,
            self.ray_count,
            &self.obstacles,
            Some(self.target),
            &self.viewport,
        )
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize frame snapshot: {}", e))
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse frame snapshot: {}", e))
    }

    /// Save to file
    pub fn save_to_file(&self, path: &str) -> Result<(), String> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| format!("Failed to write snapshot file: {}", e))
    }

    /// Load from file
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json =
            fs::read_to_string(path).map_err(|e| format!("Failed to read snapshot file: {}", e))?;
        Self::from_json(&json)
    }
}
