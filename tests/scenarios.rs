//! End-to-end movement scenarios against hand-built and generated worlds

use glam::Vec2;

use tilerun::sim::{
    Body, Direction, GameState, Grid, Heading, Intent, MovementParams, SweepResult, TickInput,
    step, sweep, tick,
};
use tilerun::{Settings, Tuning};

/// Empty 12x12 map with a single brick at (8, 5)
fn lone_brick() -> Grid {
    let mut rows = vec!["............"; 12];
    rows[5] = "........#...";
    Grid::from_ascii(&rows)
}

#[test]
fn test_fast_body_stops_flush_against_brick() {
    let grid = lone_brick();
    let mut body = Body::new(Vec2::new(5.0, 5.0), Vec2::ONE);
    body.vel = Vec2::new(2.0, 0.0);

    // The strip right of the box, as wide as this tick's travel
    let result = sweep(&grid, Vec2::new(6.0, 5.0), Vec2::new(2.0, 1.0), Heading::Right);
    assert_eq!(result, SweepResult::hit(8.0));

    let hits = step(&mut body, &grid, Intent::default(), &MovementParams::player());
    assert_eq!(hits, Direction::RIGHT);
    assert_eq!(body.pos, Vec2::new(7.0, 5.0));
    assert_eq!(body.vel.x, 0.0);
}

#[test]
fn test_far_edge_on_boundary_does_not_enter_next_tile() {
    let grid = Grid::from_ascii(&[".....#.."]);
    let result = sweep(&grid, Vec2::new(2.0, 0.0), Vec2::new(3.0, 1.0), Heading::Right);
    assert!(result.blocked);
    assert_eq!(result.limit, 5.0);
}

#[test]
fn test_holding_right_reaches_top_speed_and_rests_on_wall() {
    let grid = Grid::bordered(64, 64);
    let params = MovementParams::player();
    let mut body = Body::new(Vec2::new(5.0, 5.0), Vec2::ONE);
    let right = Intent::toward(Heading::Right);

    let mut fastest = 0.0f32;
    for _ in 0..1000 {
        step(&mut body, &grid, right, &params);
        fastest = fastest.max(body.vel.x);
        assert!(body.vel.x <= params.max_speed);
    }

    assert!((fastest - params.top_speed()).abs() < 1e-6);
    // First brick to the right is the border column at x = 63
    assert_eq!(body.pos.x, 63.0 - body.size.x);
    assert_eq!(body.pos.y, 5.0);
}

#[test]
fn test_diagonal_into_wall_slides_along_it() {
    let grid = Grid::bordered(16, 16);
    let params = MovementParams::player();
    let mut body = Body::new(Vec2::new(12.0, 2.0), Vec2::ONE);
    let down_right = Intent {
        right: true,
        down: true,
        ..Default::default()
    };

    let mut pinned = false;
    for _ in 0..200 {
        let hits = step(&mut body, &grid, down_right, &params);
        if hits.contains(Direction::RIGHT) && !hits.contains(Direction::DOWN) {
            pinned = true;
        }
    }

    assert!(pinned, "body never slid along the right wall");
    assert_eq!(body.pos, Vec2::new(14.0, 14.0));
}

#[test]
fn test_releasing_input_coasts_to_a_stop() {
    let grid = Grid::bordered(64, 64);
    let params = MovementParams::player();
    let mut body = Body::new(Vec2::new(5.0, 30.0), Vec2::ONE);

    for _ in 0..20 {
        step(&mut body, &grid, Intent::toward(Heading::Right), &params);
    }
    let moving_at = body.pos.x;
    for _ in 0..40 {
        step(&mut body, &grid, Intent::default(), &params);
    }

    assert_eq!(body.vel, Vec2::ZERO);
    assert!(body.pos.x > moving_at);
    let resting = body.pos;
    step(&mut body, &grid, Intent::default(), &params);
    assert_eq!(body.pos, resting);
}

#[test]
fn test_long_session_keeps_every_actor_in_open_space() {
    let mut tuning = Tuning::default();
    tuning.world.patrol_count = 6;
    let mut state = GameState::with_config(2024, &tuning, &Settings::default());
    let width = state.grid.width() as f32;
    let height = state.grid.height() as f32;

    let scripts = [
        TickInput {
            idle_mode: true,
            ..Default::default()
        },
        TickInput {
            intent: Intent {
                up: true,
                left: true,
                ..Default::default()
            },
            ..Default::default()
        },
    ];

    for t in 0..3000 {
        let input = &scripts[(t / 500) % scripts.len()];
        tick(&mut state, input);

        for actor in std::iter::once(&state.player).chain(state.patrols.iter()) {
            assert!(
                !actor.body.overlaps_solid(&state.grid),
                "actor {} inside brick at {} on tick {}",
                actor.id,
                actor.body.pos,
                state.time_ticks
            );
            assert!(actor.body.pos.x >= 0.0 && actor.body.max().x <= width);
            assert!(actor.body.pos.y >= 0.0 && actor.body.max().y <= height);
        }
    }
    assert_eq!(state.time_ticks, 3000);
}

#[test]
fn test_default_session_is_the_classic_map() {
    let state = GameState::new(1);
    assert_eq!((state.grid.width(), state.grid.height()), (64, 64));
    for i in 0..64 {
        assert!(state.grid.is_solid(i, 0));
        assert!(state.grid.is_solid(i, 63));
        assert!(state.grid.is_solid(0, i));
        assert!(state.grid.is_solid(63, i));
    }
    assert!(state.grid.is_solid(-1, 10));
    assert!(state.grid.is_solid(10, 64));
}
