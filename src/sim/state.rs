//! Game state and core simulation types
//!
//! Everything a renderer or a replay needs lives here as plain data with
//! public fields and serde derives. Commands (`start`, `flap`,
//! `toggle_pause`) are methods on [`GameState`]; per-step motion belongs to
//! [`super::tick::advance`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first `start()`
    Ready,
    /// Active gameplay
    Playing,
    /// Frozen mid-run
    Paused,
    /// Fatal hit taken; the bird is falling out of the sky
    Dying,
    /// Run ended
    GameOver,
}

/// The player's bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Center position; x never changes during a run
    pub pos: Vec2,
    /// Vertical velocity, positive downward
    pub vel_y: f32,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.bird_x, tuning.bird_start_y),
            vel_y: 0.0,
        }
    }

    /// Collision box at the current position
    pub fn aabb(&self, half: Vec2) -> Aabb {
        Aabb::from_center_half(self.pos, half)
    }
}

/// One obstacle column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Leading (left) edge
    pub x: f32,
    /// Height of the upper column; the gap starts here
    pub top: f32,
    /// Vertical opening between the columns
    pub gap: f32,
    /// Whether this pipe has already been scored
    pub passed: bool,
}

impl Pipe {
    /// y where the gap ends and the lower column begins
    pub fn gap_bottom(&self) -> f32 {
        self.top + self.gap
    }

    /// Right edge, given the run's shared pipe width
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// The player's bird
    pub bird: Bird,
    /// Live pipes, oldest first
    pub pipes: Vec<Pipe>,
    /// Pipes cleared this run
    pub score: u32,
    /// Steps since the current run started; drives spawn cadence
    pub frame: u64,
    /// Constants for this run
    pub tuning: Tuning,
}

impl GameState {
    /// Fresh state in `Ready`, waiting for `start()`
    pub fn new(tuning: Tuning) -> Self {
        Self {
            phase: GamePhase::Ready,
            bird: Bird::new(&tuning),
            pipes: Vec::new(),
            score: 0,
            frame: 0,
            tuning,
        }
    }

    /// Begin a run: reset the bird, pipes, score, and frame counter, then
    /// enter `Playing`. Valid from `Ready` and `GameOver`; ignored elsewhere.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Ready | GamePhase::GameOver => {
                self.bird = Bird::new(&self.tuning);
                self.pipes.clear();
                self.score = 0;
                self.frame = 0;
                self.phase = GamePhase::Playing;
            }
            _ => {}
        }
    }

    /// Flap: set the bird's velocity to the flap impulse, replacing whatever
    /// it was. Only while `Playing`.
    pub fn flap(&mut self) {
        if self.phase == GamePhase::Playing {
            self.bird.vel_y = self.tuning.flap_impulse;
        }
    }

    /// Toggle `Playing` <-> `Paused`; ignored in any other phase
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    /// The bird's collision box
    pub fn bird_aabb(&self) -> Aabb {
        self.bird.aabb(self.tuning.bird_half)
    }
}
