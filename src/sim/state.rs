//! Session state and core simulation types
//!
//! A session owns the grid, every moving actor, the camera and the
//! player's lantern. The seed fully determines the world, so two sessions
//! built from the same seed and fed the same inputs stay identical.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::Body;
use super::camera::Camera;
use super::direction::{Direction, Heading};
use super::grid::Grid;
use super::lantern::Lantern;
use super::movement::MovementParams;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Paused,
}

/// What decides an actor's intent each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Driven by the tick input
    Player,
    /// Walks back and forth, turning around when blocked
    Patrol { heading: Heading },
}

/// A moving entity
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: u32,
    pub body: Body,
    pub params: MovementParams,
    pub controller: Controller,
    /// Directions blocked by the most recent move
    pub hits: Direction,
}

/// Complete session state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Read-only after construction
    pub grid: Grid,
    pub player: Actor,
    /// Non-player actors (sorted by id for determinism)
    pub patrols: Vec<Actor>,
    pub camera: Camera,
    pub lantern: Lantern,
    /// Heading the demo autopilot is walking in
    pub autopilot: Heading,
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a session with default tuning and settings
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, &Tuning::default(), &Settings::default())
    }

    /// Create a session, generating its world from `seed`.
    ///
    /// `tuning` is expected to have passed [`Tuning::validate`].
    pub fn with_config(seed: u64, tuning: &Tuning, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = Grid::generate(&tuning.world.grid_params(), &mut rng);
        Self::with_grid(seed, grid, rng, tuning, settings)
    }

    /// Create a session around a prebuilt grid
    pub fn from_grid(seed: u64, grid: Grid, tuning: &Tuning, settings: &Settings) -> Self {
        let rng = Pcg32::seed_from_u64(seed);
        Self::with_grid(seed, grid, rng, tuning, settings)
    }

    fn with_grid(
        seed: u64,
        grid: Grid,
        rng: Pcg32,
        tuning: &Tuning,
        settings: &Settings,
    ) -> Self {
        let spawn = open_spawn(&grid, tuning.world.spawn, tuning.player_size);
        let player = Actor {
            id: 1,
            body: Body::new(spawn, tuning.player_size),
            params: tuning.player,
            controller: Controller::Player,
            hits: Direction::empty(),
        };

        let mut state = Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Playing,
            grid,
            player,
            patrols: Vec::new(),
            camera: settings.camera(),
            lantern: settings.lantern(),
            autopilot: Heading::Right,
            rng,
            next_id: 2,
        };

        // Interior tiles only; a degenerate grid still gets a non-empty range
        let max_x = state.grid.width().saturating_sub(1).max(2);
        let max_y = state.grid.height().saturating_sub(1).max(2);
        for _ in 0..tuning.world.patrol_count {
            let tile = Vec2::new(
                state.rng.random_range(1..max_x) as f32,
                state.rng.random_range(1..max_y) as f32,
            );
            let heading = if state.rng.random_bool(0.5) {
                Heading::Right
            } else {
                Heading::Left
            };
            state.spawn_patrol(tile, tuning.patrol_size, tuning.patrol, heading);
        }

        log::info!(
            "Session {} ready: player at {}, {} patrols",
            seed,
            state.player.body.pos,
            state.patrols.len()
        );
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a patrol near `at`, moved onto an open tile if needed
    pub fn spawn_patrol(
        &mut self,
        at: Vec2,
        size: Vec2,
        params: MovementParams,
        heading: Heading,
    ) -> u32 {
        let id = self.next_entity_id();
        let pos = open_spawn(&self.grid, at, size);
        self.patrols.push(Actor {
            id,
            body: Body::new(pos, size),
            params,
            controller: Controller::Patrol { heading },
            hits: Direction::empty(),
        });
        id
    }

    /// Ensure actors are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.patrols.sort_by_key(|a| a.id);
    }
}

/// `pos` if a body of `size` fits there, else the nearest open tile.
///
/// Platforms are dropped without regard for spawn points, so the requested
/// tile may have been bricked over.
fn open_spawn(grid: &Grid, pos: Vec2, size: Vec2) -> Vec2 {
    if !Body::new(pos, size).overlaps_solid(grid) {
        return pos;
    }
    match grid.find_open_tile(pos.floor().as_ivec2()) {
        Some(tile) => {
            let moved = tile.as_vec2();
            log::debug!("Spawn {} is inside brick, moved to {}", pos, moved);
            moved
        }
        None => {
            log::warn!("No open tile for spawn {}, leaving it in place", pos);
            pos
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.grid.width(), MAP_WIDTH);
        assert_eq!(state.player.id, 1);
        assert_eq!(state.player.body.vel, Vec2::ZERO);
        assert!(!state.player.body.overlaps_solid(&state.grid));
        assert!(state.patrols.is_empty());
        assert_eq!(state.camera.center, Vec2::from(CAMERA_START));
        assert!(state.lantern.visible);
        assert_eq!(state.lantern.radius(), 7.5);
    }

    #[test]
    fn test_lighting_switched_off() {
        let settings = Settings {
            lantern_enabled: false,
            ..Settings::default()
        };
        let state = GameState::with_config(5, &Tuning::default(), &settings);
        assert!(!state.lantern.enabled);
        assert!(!state.lantern.visible);
        assert_eq!(state.lantern.radius(), 0.0);
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.player, b.player);
    }

    #[test]
    fn test_bricked_spawn_is_relocated() {
        let grid = Grid::from_ascii(&["#####", "###.#", "#####"]);
        let mut tuning = Tuning::default();
        tuning.world.spawn = Vec2::new(1.0, 1.0);
        let state = GameState::from_grid(0, grid, &tuning, &Settings::default());
        assert_eq!(state.player.body.pos, Vec2::new(3.0, 1.0));
    }

    #[test]
    fn test_patrols_spawn_clear_of_brick() {
        let mut tuning = Tuning::default();
        tuning.world.patrol_count = 8;
        let state = GameState::with_config(7, &tuning, &Settings::default());
        assert_eq!(state.patrols.len(), 8);
        let ids: Vec<u32> = state.patrols.iter().map(|a| a.id).collect();
        assert_eq!(ids, (2..10).collect::<Vec<_>>());
        for patrol in &state.patrols {
            assert!(!patrol.body.overlaps_solid(&state.grid));
            assert!(matches!(patrol.controller, Controller::Patrol { .. }));
        }
    }
}
