//! Gameplay tuning
//!
//! Every gameplay constant lives in one serializable record, so rule variants
//! (wider gaps, faster scroll, ramping difficulty) are data instead of code
//! forks. `Default` is the classic ruleset. All motion constants are per
//! simulation step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Gameplay constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield width; pipes spawn with their leading edge here
    pub field_width: f32,
    /// Playfield height; the ground line
    pub field_height: f32,
    /// Fixed bird center x
    pub bird_x: f32,
    /// Bird center y after `start()`
    pub bird_start_y: f32,
    /// Half extents of the bird's collision box
    pub bird_half: Vec2,
    /// Downward velocity gained per step
    pub gravity: f32,
    /// Velocity set by a flap (negative is up)
    pub flap_impulse: f32,
    /// Pipe column width, shared by every pipe in a run
    pub pipe_width: f32,
    /// Base leftward pipe speed per step
    pub pipe_speed: f32,
    /// Speed gained per score point
    pub speed_per_point: f32,
    /// Speed curve cap
    pub max_speed: f32,
    /// Steps between pipe spawns (0 disables spawning)
    pub spawn_every: u64,
    /// Gap-top placement bounds, uniform with `top_max` exclusive; an empty
    /// band pins every pipe at `top_min`
    pub top_min: f32,
    pub top_max: f32,
    /// Base vertical gap
    pub pipe_gap: f32,
    /// Gap shrink per score point
    pub gap_per_point: f32,
    /// Gap curve floor, keeps pipes passable
    pub min_gap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: 400.0,
            field_height: 600.0,
            bird_x: 80.0,
            bird_start_y: 250.0,
            bird_half: Vec2::new(20.0, 20.0),
            gravity: 0.5,
            flap_impulse: -8.0,
            pipe_width: 60.0,
            pipe_speed: 3.0,
            speed_per_point: 0.0,
            max_speed: 8.0,
            spawn_every: 90,
            top_min: 50.0,
            top_max: 300.0,
            pipe_gap: 150.0,
            gap_per_point: 0.0,
            min_gap: 100.0,
        }
    }
}

impl Tuning {
    /// Pipe speed at the given score (monotone, capped)
    pub fn speed_for(&self, score: u32) -> f32 {
        (self.pipe_speed + self.speed_per_point * score as f32).min(self.max_speed)
    }

    /// Gap size at the given score (monotone, floored so the bird still fits)
    pub fn gap_for(&self, score: u32) -> f32 {
        (self.pipe_gap - self.gap_per_point * score as f32).max(self.min_gap)
    }
}
