use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub propagation: PropagationConfig,
    #[serde(default)]
    pub obstacle: ObstacleConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    /// Hue of the star rays when rainbow_rays is off
    #[serde(default = "default_star_hue")]
    pub star_hue: f32,
    #[serde(default = "default_star_alpha")]
    pub star_alpha: f32,
    /// Rotate the hue per ray instead of using a single star color
    #[serde(default)]
    pub rainbow_rays: bool,
    #[serde(default = "default_show_overlay")]
    pub show_overlay: bool,
}

#[derive(Debug, Deserialize)]
pub struct PropagationConfig {
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[serde(default = "default_ray_count")]
    pub ray_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ObstacleConfig {
    #[serde(default = "default_vertices")]
    pub vertices: u32,
    #[serde(default = "default_radius_ratio")]
    pub radius_ratio: f64,
}

#[derive(Debug, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

// Default values
fn default_window_title() -> String { "Starburst - Ray Propagation".to_string() }
fn default_bg_r() -> u8 { 0 }
fn default_bg_g() -> u8 { 0 }
fn default_bg_b() -> u8 { 0 }
fn default_star_hue() -> f32 { 90.0 }
fn default_star_alpha() -> f32 { 0.5 }
fn default_show_overlay() -> bool { true }
fn default_depth() -> u32 { 1 }
fn default_ray_count() -> usize { 8 }
fn default_vertices() -> u32 { 3 }
fn default_radius_ratio() -> f64 { 0.25 }
fn default_snapshot_path() -> String { "frame_snapshot.json".to_string() }

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            star_hue: default_star_hue(),
            star_alpha: default_star_alpha(),
            rainbow_rays: false,
            show_overlay: default_show_overlay(),
        }
    }
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            ray_count: default_ray_count(),
        }
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            vertices: default_vertices(),
            radius_ratio: default_radius_ratio(),
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            visual: VisualConfig::default(),
            propagation: PropagationConfig::default(),
            obstacle: ObstacleConfig::default(),
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from config.toml");
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config.toml: {}", e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
