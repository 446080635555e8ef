//! Per-frame simulation tick
//!
//! Core game loop that advances the session deterministically: every actor
//! moves against the grid, then the lantern and camera catch up with the
//! player's new position.

use super::direction::Direction;
use super::movement::{Intent, step};
use super::state::{Actor, Controller, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directions the player is pushing
    pub intent: Intent,
    /// Turn the lantern up
    pub brighten: bool,
    /// Turn the lantern down
    pub dim: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - autopilot walks the player around
    pub idle_mode: bool,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.pause {
        state.phase = match state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
        };
        log::info!("Phase -> {:?} at tick {}", state.phase, state.time_ticks);
    }

    if state.phase == GamePhase::Paused {
        return;
    }

    state.time_ticks += 1;

    let player_intent = if input.idle_mode {
        autopilot_intent(state)
    } else {
        input.intent
    };

    // Actors never collide with each other, so order only matters for
    // reproducibility
    let grid = &state.grid;
    for actor in std::iter::once(&mut state.player).chain(state.patrols.iter_mut()) {
        let intent = controller_intent(actor, player_intent);
        actor.hits = step(&mut actor.body, grid, intent, &actor.params);
    }

    state.lantern.adjust(input.brighten, input.dim);

    // Camera chases the position settled this tick
    state.camera.follow(state.player.body.pos);

    // Ensure deterministic ordering
    state.normalize_order();
}

fn controller_intent(actor: &mut Actor, player_intent: Intent) -> Intent {
    match &mut actor.controller {
        Controller::Player => player_intent,
        Controller::Patrol { heading } => {
            if actor.hits.contains(heading.flag()) {
                *heading = heading.reversed();
            }
            Intent::toward(*heading)
        }
    }
}

/// Walk in a straight line, turning clockwise whenever a wall is hit
fn autopilot_intent(state: &mut GameState) -> Intent {
    if state.player.hits.contains(state.autopilot.flag()) {
        state.autopilot = state.autopilot.clockwise();
        log::debug!("Autopilot turning {:?}", state.autopilot);
    }
    Intent::toward(state.autopilot)
}

/// Directions blocked for the player on the last tick
pub fn player_hits(state: &GameState) -> Direction {
    state.player.hits
}
