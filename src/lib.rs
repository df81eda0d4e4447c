//! flappy-core - headless simulation core for a flappy-style side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision, phases, scoring)
//! - `tuning`: Gameplay constants as data
//! - `stats`: Lifetime statistics and their persistence
//! - `game`: Host-facing facade tying state, RNG, and stats together
//!
//! The crate renders nothing and reads no input. Hosts send commands
//! (`start` / `flap` / `toggle_pause`), advance the world in fixed steps,
//! react to the returned events, and draw from the state snapshot.

pub mod game;
pub mod sim;
pub mod stats;
pub mod tuning;

pub use game::Game;
pub use sim::{GamePhase, GameState, TickEvent};
pub use stats::{JsonFileStore, MemoryStore, PlayerStats, StatsStore};
pub use tuning::Tuning;

/// Step-clock constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz; gameplay constants are per step)
    pub const STEP_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
