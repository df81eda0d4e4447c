//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed steps only (one `advance` call = one step, no dt scaling)
//! - Seeded RNG only, injected by the caller
//! - Stable iteration order (pipes stay oldest first)
//! - No I/O, rendering, or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Hit, bird_hits_pipe, bird_out_of_bounds};
pub use state::{Bird, GamePhase, GameState, Pipe};
pub use tick::{TickEvent, advance};
