//! Velocity integration for moving bodies
//!
//! Every tick a body first travels by its current velocity (stopping at
//! walls), loses velocity on any axis that hit something, then takes on the
//! new intent. Pressing a direction adds `accel + decel` so that after the
//! unconditional decay the body gains `accel` per tick. Letting go decays
//! the velocity to exactly zero in a finite number of ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::direction::{Direction, Heading};
use super::grid::Grid;
use crate::consts::*;
use crate::tend_to_zero;

/// Acceleration model for one kind of body (tiles per tick)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementParams {
    /// Net speed gained per tick while a direction is held
    pub accel: f32,
    /// Speed lost per tick on every axis
    pub decel: f32,
    /// Hard cap on speed along each axis
    pub max_speed: f32,
}

impl MovementParams {
    pub fn player() -> Self {
        Self {
            accel: PLAYER_ACCEL,
            decel: PLAYER_DECEL,
            max_speed: PLAYER_MAX_SPEED,
        }
    }

    pub fn patrol() -> Self {
        Self {
            accel: PATROL_ACCEL,
            decel: PATROL_DECEL,
            max_speed: PATROL_MAX_SPEED,
        }
    }

    /// Speed a body settles at while a direction is held.
    ///
    /// Velocity is clamped to `max_speed` and then decays once more before
    /// the next move.
    pub fn top_speed(&self) -> f32 {
        (self.max_speed - self.decel).max(0.0)
    }
}

impl Default for MovementParams {
    fn default() -> Self {
        Self::player()
    }
}

/// Directions being pushed this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Intent {
    /// Intent to travel in a single heading
    pub fn toward(heading: Heading) -> Self {
        let mut intent = Self::default();
        match heading {
            Heading::Up => intent.up = true,
            Heading::Right => intent.right = true,
            Heading::Down => intent.down = true,
            Heading::Left => intent.left = true,
        }
        intent
    }

    /// Per-axis sign of the intent. Right wins over left, up over down.
    pub fn axis(&self) -> Vec2 {
        let x = if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }

    pub fn is_idle(&self) -> bool {
        self.axis() == Vec2::ZERO
    }
}

/// Apply intent, speed clamp and decay to a velocity
pub fn accelerate(vel: Vec2, intent: Intent, params: &MovementParams) -> Vec2 {
    let axis = intent.axis();
    Vec2::new(
        drive(vel.x, axis.x, params),
        drive(vel.y, axis.y, params),
    )
}

fn drive(mut v: f32, push: f32, params: &MovementParams) -> f32 {
    let boost = params.accel + params.decel;
    if push > 0.0 {
        v = (v + boost).min(params.max_speed);
    } else if push < 0.0 {
        v = (v - boost).max(-params.max_speed);
    }
    tend_to_zero(v, params.decel)
}

/// Advance a body by one tick.
///
/// Returns the directions blocked by this tick's move; the matching
/// velocity components have already been zeroed.
pub fn step(body: &mut Body, grid: &Grid, intent: Intent, params: &MovementParams) -> Direction {
    let hits = body.move_through(grid);

    if hits.horizontal() {
        body.vel.x = 0.0;
    }
    if hits.vertical() {
        body.vel.y = 0.0;
    }

    body.vel = accelerate(body.vel, intent, params);
    hits
}
