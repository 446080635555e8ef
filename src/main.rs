//! Tilerun entry point
//!
//! Headless runner: builds a session and lets the autopilot walk the player
//! around the generated world, logging where everything ends up.
//!
//! Usage: `tilerun [seed] [tuning.json] [settings.json]`

use std::process::ExitCode;

use tilerun::sim::{GameState, TickInput, player_hits, tick};
use tilerun::{Settings, Tuning};

/// Ticks to simulate (ten seconds at 60 Hz)
const DEMO_TICKS: u64 = 600;
/// Ticks between progress reports
const REPORT_EVERY: u64 = 120;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Tilerun (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();

    let seed = match args.first() {
        Some(raw) => match raw.parse::<u64>() {
            Ok(seed) => seed,
            Err(e) => {
                log::error!("Invalid seed {:?}: {}", raw, e);
                return ExitCode::FAILURE;
            }
        },
        None => 0x5eed,
    };

    let tuning = match args.get(1) {
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    let settings = args.get(2).map(Settings::load).unwrap_or_default();

    let mut state = GameState::with_config(seed, &tuning, &settings);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    for _ in 0..DEMO_TICKS {
        tick(&mut state, &input);
        if state.time_ticks % REPORT_EVERY == 0 {
            let player = &state.player;
            log::info!(
                "tick {}: player at {} vel {} hits {:?}, camera {}",
                state.time_ticks,
                player.body.pos,
                player.body.vel,
                player_hits(&state),
                state.camera.center
            );
        }
    }

    let (min, max) = state.camera.visible_tiles(settings.viewport);
    log::info!(
        "Finished {} ticks: player at {}, visible tiles {}..={}, lantern radius {:.1}",
        state.time_ticks,
        state.player.body.pos,
        min,
        max,
        state.lantern.radius()
    );
    let light = state.player.body.center();
    for patrol in &state.patrols {
        let lit = state.lantern.illuminates(light, patrol.body.center());
        log::info!(
            "patrol {} at {} ({:?}){}",
            patrol.id,
            patrol.body.pos,
            patrol.controller,
            if lit { ", in the light" } else { "" }
        );
    }

    ExitCode::SUCCESS
}
