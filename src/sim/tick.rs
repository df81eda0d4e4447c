//! Fixed-step simulation advance
//!
//! One call to [`advance`] moves the world by exactly one step. There is no
//! `dt` here: every motion constant in [`crate::tuning::Tuning`] is per step.
//! Hosts that think in wall-clock time drive this through
//! [`crate::game::Game::update`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Hit, bird_hits_pipe, bird_out_of_bounds};
use super::state::{GamePhase, GameState, Pipe};

/// What happened during one step, for the host to react to (sound cues,
/// screen shake). The state snapshot stays authoritative; applying events
/// is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    /// A pipe was cleared; carries the new total
    Scored { score: u32 },
    /// First contact with something fatal
    Collided { hit: Hit },
    /// The run just ended with this final score
    GameOver { score: u32 },
}

/// Advance the simulation by exactly one step
pub fn advance<R: Rng>(state: &mut GameState, rng: &mut R) -> Vec<TickEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Playing => step_playing(state, rng, &mut events),
        GamePhase::Dying => step_dying(state, &mut events),
        GamePhase::Ready | GamePhase::Paused | GamePhase::GameOver => {}
    }

    events
}

fn step_playing<R: Rng>(state: &mut GameState, rng: &mut R, events: &mut Vec<TickEvent>) {
    integrate(state);

    // Cadence is checked before the counter advances, so a fresh run spawns
    // on its very first step.
    let cadence = state.tuning.spawn_every;
    if cadence > 0 && state.frame % cadence == 0 {
        spawn_pipe(state, rng);
    }

    let speed = state.tuning.speed_for(state.score);
    for pipe in &mut state.pipes {
        pipe.x -= speed;
    }

    // Each pipe scores once, the first time its trailing edge is strictly
    // left of the bird's x.
    let bird_x = state.bird.pos.x;
    let width = state.tuning.pipe_width;
    for pipe in &mut state.pipes {
        if !pipe.passed && pipe.trailing_edge(width) < bird_x {
            pipe.passed = true;
            state.score += 1;
            events.push(TickEvent::Scored { score: state.score });
        }
    }

    prune_pipes(state);

    let body = state.bird_aabb();
    for pipe in &state.pipes {
        if bird_hits_pipe(&body, pipe, width) {
            state.phase = GamePhase::Dying;
            events.push(TickEvent::Collided { hit: Hit::Pipe });
            break;
        }
    }

    match bird_out_of_bounds(&body, state.tuning.field_height) {
        Some(Hit::Ground) => {
            // The ground ends the run on the spot, even when a pipe was
            // struck in the same step.
            if state.phase == GamePhase::Playing {
                events.push(TickEvent::Collided { hit: Hit::Ground });
            }
            land(state, events);
        }
        Some(hit) if state.phase == GamePhase::Playing => {
            state.phase = GamePhase::Dying;
            events.push(TickEvent::Collided { hit });
        }
        _ => {}
    }

    state.frame += 1;
}

/// The bird falls out of the sky with pipes still sliding past. Spawning,
/// scoring, and the frame counter stay frozen.
fn step_dying(state: &mut GameState, events: &mut Vec<TickEvent>) {
    integrate(state);

    let speed = state.tuning.speed_for(state.score);
    for pipe in &mut state.pipes {
        pipe.x -= speed;
    }
    prune_pipes(state);

    let body = state.bird_aabb();
    if let Some(Hit::Ground) = bird_out_of_bounds(&body, state.tuning.field_height) {
        land(state, events);
    }
}

/// Semi-implicit Euler. The only mutation path for the bird's motion while
/// airborne; there is no terminal-velocity cap.
fn integrate(state: &mut GameState) {
    state.bird.vel_y += state.tuning.gravity;
    state.bird.pos.y += state.bird.vel_y;
}

fn spawn_pipe<R: Rng>(state: &mut GameState, rng: &mut R) {
    let t = &state.tuning;
    // An empty band (top_min >= top_max) pins every pipe at top_min
    let top = if t.top_min < t.top_max {
        rng.random_range(t.top_min..t.top_max)
    } else {
        t.top_min
    };
    let gap = t.gap_for(state.score);
    state.pipes.push(Pipe {
        x: t.field_width,
        top,
        gap,
        passed: false,
    });
}

fn prune_pipes(state: &mut GameState) {
    let width = state.tuning.pipe_width;
    state.pipes.retain(|p| p.trailing_edge(width) > 0.0);
}

/// Snap the bird onto the ground line and end the run
fn land(state: &mut GameState, events: &mut Vec<TickEvent>) {
    state.bird.pos.y = state.tuning.field_height - state.tuning.bird_half.y;
    state.bird.vel_y = 0.0;
    state.phase = GamePhase::GameOver;
    events.push(TickEvent::GameOver { score: state.score });
}
