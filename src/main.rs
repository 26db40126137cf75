//! Headless demo runner
//!
//! Runs the engine in idle mode (autopilot) for a fixed number of ticks,
//! restarting on game over, then prints the final snapshot as JSON.
//!
//! Usage: `parrot-jump [SEED] [TICKS]`
//! Set `PARROT_JUMP_CONFIG` to a JSON file to override constants.

use std::time::{SystemTime, UNIX_EPOCH};

use parrot_jump::{GameEvent, SimConfig, Simulation};

/// One minute at the default tick rate
const DEFAULT_TICKS: u64 = 60 * 60;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(clock_seed);
    let ticks = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TICKS);

    let config = match std::env::var("PARROT_JUMP_CONFIG") {
        Ok(path) => match SimConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::error!("Invalid config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => SimConfig::default(),
    };

    let mut sim = match Simulation::new(config, seed) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Parrot Jump (headless) starting, seed {}", seed);
    sim.set_idle_mode(true);
    sim.start();

    for _ in 0..ticks {
        let events = sim.tick().to_vec();
        for event in events {
            match event {
                GameEvent::StageAdvanced { stage } => log::info!("Stage {}", stage),
                GameEvent::GameOver { score } => {
                    log::info!("Run ended at {} (best {})", score, sim.high_score());
                    sim.restart();
                }
                _ => log::trace!("{:?}", event),
            }
        }
    }

    match serde_json::to_string_pretty(&sim.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode snapshot: {}", e),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
