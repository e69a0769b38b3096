mod config;
mod intersect;
mod point;
mod propagate;
mod scene;
mod snapshot;
mod star;

use arboard::Clipboard;
use config::Config;
use macroquad::prelude::*;
use point::Point;
use propagate::expand;
use scene::{Scene, Viewport};
use snapshot::FrameSnapshot;
use star::{generate_star, Star, POINT_RADIUS};
use std::sync::OnceLock;

/// Per-ray hue step when rainbow coloring is enabled
const HUE_STEP: f32 = 360.0 / 16.0;

/// Loaded once; window_conf needs it before main runs
static CONFIG: OnceLock<Config> = OnceLock::new();

fn config() -> &'static Config {
    CONFIG.get_or_init(Config::load)
}

struct AppState {
    config: &'static Config,
    viewport: Viewport,
    source: Point,
    target: Point,
    ray_count: usize,
    scene: Scene,
    stars: Vec<Star>,
    last_mouse: (f32, f32),
    frame: u64,
}

impl AppState {
    fn new(config: &'static Config) -> Self {
        let viewport = Viewport::new(screen_width() as f64, screen_height() as f64);
        let source = Point::new(
            (viewport.width * 0.75).trunc(),
            (viewport.height * 0.25).trunc(),
        );
        let target = Point::new(
            (viewport.width * 0.25).trunc(),
            (viewport.height * 0.75).trunc(),
        );
        let ray_count = config.propagation.ray_count.clamp(4, 128);
        let scene = Scene::build(
            &viewport,
            config.obstacle.vertices,
            config.obstacle.radius_ratio,
            0.0,
        );

        AppState {
            config,
            viewport,
            source,
            target,
            ray_count,
            scene,
            stars: Vec::new(),
            last_mouse: mouse_position(),
            frame: 0,
        }
    }

    fn handle_input(&mut self) {
        // The source point tracks the pointer, but only once it moves, so
        // the initial placement survives until the user takes over
        let mouse = mouse_position();
        if mouse != self.last_mouse {
            self.last_mouse = mouse;
            self.source = Point::new(
                (mouse.0 as f64).clamp(1.0, self.viewport.width - 1.0),
                (mouse.1 as f64).clamp(1.0, self.viewport.height - 1.0),
            );
        }

        let (_wheel_x, wheel_y) = mouse_wheel();
        if wheel_y > 0.0 {
            self.ray_count = (self.ray_count * 2).min(128);
        } else if wheel_y < 0.0 {
            self.ray_count = (self.ray_count / 2).max(4);
        }
    }

    /// Rebuild the frame's geometry and run the propagation engine
    fn update(&mut self, time_ms: f64) {
        self.frame += 1;
        self.viewport = Viewport::new(screen_width() as f64, screen_height() as f64);
        self.target = Point::new(
            (self.viewport.width * 0.25).trunc(),
            (self.viewport.height * 0.75).trunc(),
        );
        self.scene = Scene::build(
            &self.viewport,
            self.config.obstacle.vertices,
            self.config.obstacle.radius_ratio,
            time_ms,
        );

        let seed = generate_star(
            self.source,
            self.ray_count,
            &self.scene.obstacles,
            Some(self.target),
            &self.viewport,
        );
        self.stars = expand(
            &[seed],
            self.config.propagation.depth,
            self.ray_count,
            &self.scene.obstacles,
            Some(self.target),
            &self.viewport,
        );
    }

    fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(
            self.viewport,
            self.source,
            self.target,
            self.ray_count,
            self.config.propagation.depth,
            self.scene.obstacles.clone(),
            self.stars.clone(),
        )
    }

    fn copy_snapshot_to_clipboard(&self) {
        let json = match self.snapshot().to_json() {
            Ok(json) => json,
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        };
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(&json) {
                    println!("Failed to copy to clipboard: {}", e);
                } else {
                    println!("Frame snapshot copied to clipboard!");
                    // Keep clipboard alive for a moment so clipboard managers can capture it
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
            }
            Err(e) => {
                println!("Failed to access clipboard: {}", e);
            }
        }
    }

    fn save_snapshot(&self) {
        let path = &self.config.snapshot.path;
        match self.snapshot().save_to_file(path) {
            Ok(()) => println!("Frame snapshot saved to {}", path),
            Err(e) => eprintln!("{}", e),
        }
    }

    fn ray_color(&self, ray_index: usize) -> Color {
        let visual = &self.config.visual;
        let hue = if visual.rainbow_rays {
            HUE_STEP * ray_index as f32
        } else {
            visual.star_hue
        };
        let mut color = macroquad::color::hsl_to_rgb(hue.rem_euclid(360.0) / 360.0, 0.5, 0.5);
        color.a = visual.star_alpha;
        color
    }

    fn draw(&self, elapsed_seconds: f64) {
        let visual = &self.config.visual;
        clear_background(Color::from_rgba(
            visual.background_r,
            visual.background_g,
            visual.background_b,
            255,
        ));

        // Obstacle polygon outline
        for seg in &self.scene.polygon {
            draw_line(
                seg.a.x as f32,
                seg.a.y as f32,
                seg.b.x as f32,
                seg.b.y as f32,
                1.0,
                WHITE,
            );
        }

        // Star field
        for star in &self.stars {
            for (i, tip) in star.rays.iter().enumerate() {
                draw_line(
                    star.center.x as f32,
                    star.center.y as f32,
                    tip.x as f32,
                    tip.y as f32,
                    1.0,
                    self.ray_color(i),
                );
            }
        }

        // Source and target markers
        draw_circle(
            self.source.x as f32,
            self.source.y as f32,
            POINT_RADIUS as f32,
            RED,
        );
        draw_circle(
            self.target.x as f32,
            self.target.y as f32,
            POINT_RADIUS as f32,
            RED,
        );

        if visual.show_overlay {
            self.draw_overlay(elapsed_seconds);
        }
    }

    /// Right-aligned debug box in the top-right corner
    fn draw_overlay(&self, elapsed_seconds: f64) {
        let total_rays: usize = self.stars.iter().map(|s| s.rays.len()).sum();
        let fps = if elapsed_seconds > 0.0 {
            (self.frame as f64 / elapsed_seconds).trunc()
        } else {
            0.0
        };
        let lines = [
            format!("stars: {}", self.stars.len()),
            format!("rays: {}", total_rays),
            format!("maxRaysPerStar: {}", self.ray_count),
            format!("depth: {}", self.config.propagation.depth),
            format!("fps: {}", fps),
        ];

        let font_size = 16.0;
        let box_width = lines
            .iter()
            .map(|line| measure_text(line, None, font_size as u16, 1.0).width)
            .fold(0.0f32, f32::max);
        let screen_w = screen_width();

        draw_rectangle(
            screen_w - box_width - 32.0,
            0.0,
            box_width + 32.0,
            lines.len() as f32 * font_size + 32.0,
            Color::new(0.0, 0.0, 0.0, 0.5),
        );
        draw_rectangle_lines(
            screen_w - box_width - 32.0,
            0.0,
            box_width + 32.0,
            lines.len() as f32 * font_size + 32.0,
            1.0,
            WHITE,
        );

        for (i, line) in lines.iter().enumerate() {
            let width = measure_text(line, None, font_size as u16, 1.0).width;
            draw_text(
                line,
                screen_w - 16.0 - width,
                (i as f32 + 1.0) * font_size + 8.0,
                font_size,
                WHITE,
            );
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: config().visual.window_title.clone(),
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut state = AppState::new(config());

    loop {
        state.handle_input();

        // Copy frame snapshot to clipboard on C key
        if is_key_pressed(KeyCode::C) {
            state.copy_snapshot_to_clipboard();
        }

        // Save frame snapshot to file on S key
        if is_key_pressed(KeyCode::S) {
            state.save_snapshot();
        }

        // Close window on Escape
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        state.update(get_time() * 1000.0);
        state.draw(get_time());

        next_frame().await
    }
}
