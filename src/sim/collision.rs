//! Collision detection
//!
//! Pure predicates over box geometry. A pipe column is solid from the ceiling
//! down to its gap and from the gap's bottom down to the ground, so a bird
//! overlapping it horizontally survives only while its box sits entirely
//! inside the gap. Every comparison is strict: exact touching never counts
//! as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Pipe;

/// Axis-aligned box, stored as corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a center point and half extents
    pub fn from_center_half(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }
}

/// What the bird ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hit {
    Pipe,
    Ceiling,
    Ground,
}

/// Pipe collision test: strict horizontal overlap, and the bird's vertical
/// span not fully contained in the gap
pub fn bird_hits_pipe(bird: &Aabb, pipe: &Pipe, pipe_width: f32) -> bool {
    let horizontal = bird.max.x > pipe.x && bird.min.x < pipe.x + pipe_width;
    let outside_gap = bird.min.y < pipe.top || bird.max.y > pipe.gap_bottom();
    horizontal && outside_gap
}

/// Playfield boundary test. The ground is checked first: when a box somehow
/// breaches both edges at once, grounding wins because it is the terminal
/// outcome.
pub fn bird_out_of_bounds(bird: &Aabb, field_height: f32) -> Option<Hit> {
    if bird.max.y > field_height {
        Some(Hit::Ground)
    } else if bird.min.y < 0.0 {
        Some(Hit::Ceiling)
    } else {
        None
    }
}
