//! Simulation clock: owns the run and serializes commands into ticks
//!
//! Jump requests arriving between ticks are buffered as a single pending
//! flag and consumed at the start of the next tick.

use rand::Rng;

use super::snapshot::Snapshot;
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{TickInput, tick};
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::highscores::HighScores;

/// Longest wall-clock step accepted by [`Simulation::advance`]
const MAX_FRAME_SECS: f32 = 0.25;

/// A validated engine instance driving one run at a time
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    state: GameState,
    scores: HighScores,
    pending_jump: bool,
    idle_mode: bool,
    accumulator: f32,
}

impl Simulation {
    /// Validate `config` and lay out the first run (in `Ready` phase)
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(seed, &config);
        Ok(Self {
            config,
            state,
            scores: HighScores::new(),
            pending_jump: false,
            idle_mode: false,
            accumulator: 0.0,
        })
    }

    /// Begin ticking the current run
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Ready {
            self.state.phase = GamePhase::Playing;
            log::info!("Run started with seed {}", self.state.seed);
        }
    }

    /// Request a jump on the next tick (ignored there unless grounded)
    pub fn submit_jump(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.pending_jump = true;
        }
    }

    /// Let the autopilot play
    pub fn set_idle_mode(&mut self, idle_mode: bool) {
        self.idle_mode = idle_mode;
    }

    /// Advance exactly one fixed tick and return the events it produced
    pub fn tick(&mut self) -> &[GameEvent] {
        let input = TickInput {
            jump: std::mem::take(&mut self.pending_jump),
            idle_mode: self.idle_mode,
        };

        let was_over = self.state.is_game_over();
        tick(&mut self.state, &input, &self.config);

        if !was_over && self.state.is_game_over() {
            let rank =
                self.scores
                    .add_score(self.state.score, self.state.stage, self.state.time_ticks);
            if let Some(rank) = rank {
                log::info!("Score {} ranked #{} this session", self.state.score, rank);
            }
        }

        &self.state.events
    }

    /// Run as many whole ticks as `elapsed_secs` of wall-clock time covers.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed_secs: f32) -> u32 {
        if !elapsed_secs.is_finite() {
            log::warn!("Ignoring non-finite frame time {}", elapsed_secs);
            return 0;
        }
        let dt = self.config.tick_dt();
        self.accumulator += elapsed_secs.clamp(0.0, MAX_FRAME_SECS);

        let mut substeps = 0;
        while self.accumulator >= dt && substeps < self.config.max_substeps {
            self.tick();
            self.accumulator -= dt;
            substeps += 1;
        }
        // Drop time we couldn't catch up on instead of spiralling
        if substeps == self.config.max_substeps {
            self.accumulator = self.accumulator.min(dt);
        }

        substeps
    }

    /// Start a fresh run with a seed drawn from the current run
    pub fn restart(&mut self) {
        let seed = self.state.rng.random::<u64>();
        self.restart_with_seed(seed);
    }

    /// Start a fresh run with an explicit seed. The previous run is replaced
    /// in one assignment; the session leaderboard is kept.
    pub fn restart_with_seed(&mut self, seed: u64) {
        let mut state = GameState::new(seed, &self.config);
        state.phase = GamePhase::Playing;
        self.state = state;
        self.pending_jump = false;
        self.accumulator = 0.0;
        log::info!("Run restarted with seed {}", seed);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.high_score(), &self.config)
    }

    /// Best completed score this session
    pub fn high_score(&self) -> u64 {
        self.scores.best()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Events produced by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Motion;
    use crate::spans_overlap;
    use proptest::prelude::*;

    fn started(seed: u64) -> Simulation {
        let mut sim = Simulation::new(SimConfig::default(), seed).unwrap();
        sim.start();
        sim
    }

    /// Push the run into free fall with every platform above the avatar
    fn drop_avatar(sim: &mut Simulation) {
        let feet = sim.state.avatar.bottom();
        let top = sim.state.platforms.lowest().unwrap().pos.y;
        sim.state.avatar.motion = Motion::Airborne;
        sim.state.avatar.vel = 0.0;
        sim.state.scroll_offset = feet - top - sim.config.platform_height - 1.0;
    }

    fn run_until_over(sim: &mut Simulation) {
        for _ in 0..1000 {
            sim.tick();
            if sim.state().is_game_over() {
                return;
            }
        }
        panic!("run never ended");
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SimConfig {
            view_width: 150.0,
            ..Default::default()
        };
        assert!(Simulation::new(config, 1).is_err());
    }

    #[test]
    fn test_ticks_before_start_are_noops() {
        let mut sim = Simulation::new(SimConfig::default(), 1).unwrap();
        sim.submit_jump();
        sim.tick();
        assert_eq!(sim.state().time_ticks, 0);
        assert!(!sim.snapshot().is_game_over);
        assert_eq!(sim.snapshot().phase, GamePhase::Ready);
    }

    #[test]
    fn test_jump_scenario_velocity() {
        let mut sim = started(2024);
        sim.submit_jump();
        for _ in 0..10 {
            sim.tick();
        }

        let state = sim.state();
        assert!((state.avatar.vel - -9.0).abs() < 1e-4);

        // Offset is the negated sum of the committed velocities
        let mut vel = -15.0f32;
        let mut offset = 0.0f32;
        for _ in 0..10 {
            vel += 0.6;
            offset -= vel;
        }
        assert_eq!(state.scroll_offset, offset);
    }

    #[test]
    fn test_pending_jump_consumed_once() {
        let mut sim = started(7);
        sim.submit_jump();
        sim.submit_jump();
        assert_eq!(sim.tick(), &[GameEvent::Jumped]);
        let events = sim.tick().to_vec();
        assert!(!events.contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_each_landing_reported_once_and_centered() {
        let mut sim = started(31);
        sim.set_idle_mode(true);
        let width = sim.config.platform_width;

        let (mut jumped, mut landed) = (0u64, 0u64);
        let mut airborne_since_jump = false;
        for _ in 0..20_000 {
            let before = sim.state().clone();
            let events = sim.tick().to_vec();
            for event in events {
                match event {
                    GameEvent::Jumped => {
                        jumped += 1;
                        airborne_since_jump = true;
                    }
                    GameEvent::Landed { platform_id } => {
                        assert!(airborne_since_jump, "second Landed without a jump in between");
                        airborne_since_jump = false;
                        landed += 1;

                        // Contact uses the platform before this tick's drift
                        let contact = before.platforms.get(platform_id).unwrap();
                        let avatar = &sim.state().avatar;
                        assert_eq!(avatar.x, contact.pos.x + width / 2.0 - avatar.size / 2.0);
                    }
                    _ => {}
                }
            }
        }

        assert!(landed > 0);
        assert_eq!(landed, sim.state().score);
        assert!(jumped - landed <= 1);
    }

    #[test]
    fn test_autopilot_climbs_without_dying() {
        let mut sim = started(4242);
        sim.set_idle_mode(true);
        for _ in 0..20_000 {
            sim.tick();
        }
        let snapshot = sim.snapshot();
        assert!(snapshot.score > 0);
        assert!(!snapshot.is_game_over);
        assert_eq!(snapshot.platforms.len(), sim.config.min_platforms);
    }

    #[test]
    fn test_game_over_then_restart() {
        let mut sim = started(99);
        sim.set_idle_mode(true);
        while sim.state().score < 2 {
            sim.tick();
            assert!(sim.state().time_ticks < 50_000);
        }
        sim.set_idle_mode(false);
        let score = sim.state().score;

        drop_avatar(&mut sim);
        run_until_over(&mut sim);
        assert_eq!(sim.high_score(), score);
        assert!(matches!(
            sim.events().last(),
            Some(GameEvent::GameOver { .. })
        ));

        // Game over is terminal
        let ticks = sim.state().time_ticks;
        sim.tick();
        assert_eq!(sim.state().time_ticks, ticks);

        sim.restart();
        let snapshot = sim.snapshot();
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.high_score, score);
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert_eq!(snapshot.platforms.len(), sim.config.min_platforms);
        for pair in snapshot.platforms.windows(2) {
            assert!(!spans_overlap(pair[0].x, pair[1].x, sim.config.platform_width));
        }

        // A worse run leaves the high score alone
        drop_avatar(&mut sim);
        run_until_over(&mut sim);
        sim.restart();
        assert_eq!(sim.high_score(), score);
    }

    #[test]
    fn test_advance_runs_fixed_ticks() {
        let mut sim = started(5);
        assert_eq!(sim.advance(0.5 / 60.0), 0);
        assert_eq!(sim.advance(0.6 / 60.0), 1);
        assert_eq!(sim.advance(3.0 / 60.0), 3);

        // Long stalls are capped
        let ran = sim.advance(10.0);
        assert_eq!(ran, sim.config.max_substeps);
        assert!(sim.advance(0.0) <= 1);
    }

    #[test]
    fn test_advance_ignores_bad_frame_times() {
        let mut sim = started(5);
        assert_eq!(sim.advance(f32::NAN), 0);
        assert_eq!(sim.advance(f32::INFINITY), 0);
        assert_eq!(sim.advance(-1.0), 0);

        // Clock still runs afterwards
        assert_eq!(sim.advance(1.5 / 60.0), 1);
        assert_eq!(sim.state().time_ticks, 1);
    }

    #[test]
    fn test_snapshot_is_scroll_adjusted() {
        let mut sim = started(8);
        sim.submit_jump();
        sim.tick();

        let snapshot = sim.snapshot();
        let state = sim.state();
        for (view, platform) in snapshot.platforms.iter().zip(state.platforms.iter()) {
            assert_eq!(view.y, platform.pos.y + state.scroll_offset);
            assert_eq!(view.width, sim.config.platform_width);
        }
        assert_eq!(snapshot.avatar.y, sim.config.avatar_y());

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"stage_index\":0"));
    }

    proptest! {
        #[test]
        fn prop_platform_and_score_invariants(
            seed in any::<u64>(),
            jumps in prop::collection::vec(any::<bool>(), 1..400),
        ) {
            let mut sim = started(seed);
            let min = sim.config.min_platforms;
            let mut last_score = 0;

            for jump in jumps {
                if jump {
                    sim.submit_jump();
                }
                sim.tick();

                let state = sim.state();
                prop_assert!(state.platforms.len() >= min);

                let mut ys: Vec<f32> = state.platforms.iter().map(|p| p.pos.y).collect();
                ys.sort_by(f32::total_cmp);
                ys.dedup();
                prop_assert_eq!(ys.len(), state.platforms.len());

                prop_assert!(state.score >= last_score);
                prop_assert!(state.score <= last_score + 1);
                last_score = state.score;

                if state.is_game_over() {
                    break;
                }
            }
        }
    }
}
