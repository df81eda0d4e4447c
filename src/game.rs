//! Host-facing engine facade
//!
//! [`Game`] bundles what a frontend needs: the simulation state, a seeded
//! RNG, the lifetime statistics and their store, and a fixed-step
//! accumulator for hosts that run on wall-clock frame time. The simulation
//! itself stays pure in [`crate::sim`]; this layer owns the effectful edges
//! (persistence, logging).

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{MAX_SUBSTEPS, STEP_DT};
use crate::sim::{self, GameState, TickEvent};
use crate::stats::{PlayerStats, StatsStore};
use crate::tuning::Tuning;

pub struct Game {
    state: GameState,
    rng: Pcg32,
    stats: PlayerStats,
    store: Box<dyn StatsStore>,
    accumulator: f32,
}

impl Game {
    /// Build an engine with an explicit seed. Statistics are loaded from the
    /// store up front. With the same seed and command sequence, two engines
    /// play out identically; the RNG stream runs on across restarts, so a
    /// fresh seed means a fresh `Game`.
    pub fn new(seed: u64, tuning: Tuning, store: Box<dyn StatsStore>) -> Self {
        let stats = store.load();
        log::info!("Engine initialized with seed {seed}");
        Self {
            state: GameState::new(tuning),
            rng: Pcg32::seed_from_u64(seed),
            stats,
            store,
            accumulator: 0.0,
        }
    }

    /// Current simulation snapshot: everything a renderer needs
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access (for testing)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Lifetime statistics as of the last finished run
    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Begin a run, from `Ready` or `GameOver`
    pub fn start(&mut self) {
        self.state.start();
    }

    pub fn flap(&mut self) {
        self.state.flap();
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
    }

    /// Advance exactly one simulation step. A run that ends during this step
    /// is folded into the statistics and saved before the events come back.
    pub fn advance(&mut self) -> Vec<TickEvent> {
        let events = sim::advance(&mut self.state, &mut self.rng);
        for event in &events {
            if let TickEvent::GameOver { score } = *event {
                self.finish_run(score);
            }
        }
        events
    }

    /// Advance on wall-clock time: accumulate `dt` seconds and run fixed
    /// steps of [`STEP_DT`], at most [`MAX_SUBSTEPS`] per call. Excess `dt`
    /// from a stalled host is dropped rather than banked as catch-up.
    pub fn update(&mut self, dt: f32) -> Vec<TickEvent> {
        let dt = dt.min(MAX_SUBSTEPS as f32 * STEP_DT);
        self.accumulator += dt;
        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= STEP_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.advance());
            self.accumulator -= STEP_DT;
            substeps += 1;
        }
        events
    }

    /// Record a finished run and persist the statistics. A store failure is
    /// logged and play continues on the in-memory record.
    fn finish_run(&mut self, final_score: u32) {
        if self.stats.is_new_high(final_score) {
            log::info!("New high score: {final_score}");
        }
        self.stats.record_game_over(final_score);
        log::info!(
            "Run over at score {final_score} ({} games played)",
            self.stats.games_played
        );
        if let Err(err) = self.store.save(&self.stats) {
            log::warn!("Failed to save stats: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use crate::stats::MemoryStore;
    use std::io;

    fn engine(tuning: Tuning) -> (Game, MemoryStore) {
        let _ = env_logger::builder().is_test(true).try_init();
        let store = MemoryStore::default();
        let game = Game::new(11, tuning, Box::new(store.clone()));
        (game, store)
    }

    fn tall() -> Tuning {
        Tuning {
            field_height: 100_000.0,
            ..Tuning::default()
        }
    }

    /// Start a run, force the given score, and let the bird fall out
    fn crash(game: &mut Game, score: u32) {
        game.start();
        game.state_mut().score = score;
        game.state_mut().phase = GamePhase::Dying;
        game.state_mut().bird.pos.y = game.state().tuning.field_height;
        while game.state().phase != GamePhase::GameOver {
            game.advance();
        }
    }

    #[test]
    fn test_run_is_recorded_once_and_saved() {
        let (mut game, probe) = engine(Tuning::default());
        crash(&mut game, 3);

        assert_eq!(game.stats().games_played, 1);
        assert_eq!(game.stats().high_score, 3);
        assert_eq!(game.stats().best_streak, 3);
        assert_eq!(probe.load(), *game.stats());

        // Idle steps after the run change nothing
        for _ in 0..5 {
            assert!(game.advance().is_empty());
        }
        assert_eq!(game.stats().games_played, 1);
    }

    #[test]
    fn test_stats_recorded_before_events_returned() {
        let (mut game, probe) = engine(Tuning::default());
        game.start();
        game.state_mut().score = 4;
        game.state_mut().phase = GamePhase::Dying;
        game.state_mut().bird.pos.y = 700.0;

        let events = game.advance();
        assert!(events.contains(&TickEvent::GameOver { score: 4 }));
        assert_eq!(game.stats().high_score, 4);
        assert_eq!(probe.load().high_score, 4);
    }

    #[test]
    fn test_restart_preserves_stats() {
        let (mut game, probe) = engine(Tuning::default());
        crash(&mut game, 3);

        game.start();
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.state().score, 0);
        assert_eq!(game.state().frame, 0);
        assert!(game.state().pipes.is_empty());
        assert_eq!(game.stats().games_played, 1);
        assert_eq!(game.stats().high_score, 3);

        crash(&mut game, 1);
        assert_eq!(game.stats().games_played, 2);
        assert_eq!(game.stats().high_score, 3);
        assert_eq!(game.stats().best_streak, 3);
        assert_eq!(probe.load(), *game.stats());
    }

    #[test]
    fn test_stats_loaded_at_construction() {
        let store = MemoryStore::default();
        let mut seeded = PlayerStats::default();
        seeded.record_game_over(5);
        store.save(&seeded).unwrap();

        let game = Game::new(1, Tuning::default(), Box::new(store));
        assert_eq!(*game.stats(), seeded);
    }

    #[test]
    fn test_save_failure_is_non_fatal() {
        struct FailStore;
        impl StatsStore for FailStore {
            fn load(&self) -> PlayerStats {
                PlayerStats::default()
            }
            fn save(&self, _stats: &PlayerStats) -> io::Result<()> {
                Err(io::Error::other("disk full"))
            }
        }

        let mut game = Game::new(11, Tuning::default(), Box::new(FailStore));
        crash(&mut game, 2);
        assert_eq!(game.stats().games_played, 1);
        assert_eq!(game.stats().high_score, 2);
    }

    #[test]
    fn test_update_runs_whole_steps_and_banks_the_rest() {
        let (mut game, _) = engine(tall());
        game.start();

        game.update(0.052);
        assert_eq!(game.state().frame, 3);

        game.update(0.01);
        assert_eq!(game.state().frame, 3);

        game.update(0.01);
        assert_eq!(game.state().frame, 4);
    }

    #[test]
    fn test_update_caps_substeps() {
        let (mut game, _) = engine(tall());
        game.start();
        game.update(1.0);
        assert_eq!(game.state().frame, u64::from(MAX_SUBSTEPS));
    }

    #[test]
    fn test_update_stall_does_not_bank_catch_up() {
        let (mut game, _) = engine(tall());
        game.start();

        // A ten-second stall is worth one burst of substeps, nothing more
        game.update(10.0);
        assert_eq!(game.state().frame, u64::from(MAX_SUBSTEPS));

        game.update(0.0);
        assert_eq!(game.state().frame, u64::from(MAX_SUBSTEPS));
    }

    #[test]
    fn test_same_seed_plays_out_identically() {
        let (mut a, _) = engine(tall());
        let (mut b, _) = engine(tall());
        a.start();
        b.start();

        for step in 0..200 {
            if step % 30 == 0 {
                a.flap();
                b.flap();
            }
            a.advance();
            b.advance();
        }

        assert_eq!(a.state(), b.state());
        assert!(!a.state().pipes.is_empty());
    }
}
