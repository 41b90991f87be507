//! Lane Shooter headless entry point
//!
//! Runs the simulation at a fixed 60 Hz with the autopilot at the controls
//! and logs what happens. Rendering is left to whichever front end embeds
//! the library.
//!
//! Usage: `lane-shooter [TUNING.json] [--frames N] [--seed S]`

use lane_shooter::Tuning;
use lane_shooter::platform::FixedStepClock;
use lane_shooter::runner::Runner;
use lane_shooter::sim::{Autopilot, ContactOutcome, GamePhase};

/// Frame length for headless runs (~60 Hz)
const FRAME_MS: u64 = 16;
const DEFAULT_FRAMES: u64 = 36_000;
const DEFAULT_SEED: u64 = 0x5EED;

struct Args {
    tuning_path: Option<String>,
    frames: u64,
    seed: u64,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        tuning_path: None,
        frames: DEFAULT_FRAMES,
        seed: DEFAULT_SEED,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => {
                let value = args.next().ok_or("--frames needs a value")?;
                parsed.frames = value
                    .parse()
                    .map_err(|e| format!("bad --frames value {value:?}: {e}"))?;
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                parsed.seed = value
                    .parse()
                    .map_err(|e| format!("bad --seed value {value:?}: {e}"))?;
            }
            other if other.starts_with("--") => return Err(format!("unknown flag {other}")),
            path => parsed.tuning_path = Some(path.to_string()),
        }
    }
    Ok(parsed)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: lane-shooter [TUNING.json] [--frames N] [--seed S]");
            std::process::exit(1);
        }
    };

    let tuning = match &args.tuning_path {
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                eprintln!("failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    log::info!("Lane Shooter (headless) starting, {} frames", args.frames);

    let clock = FixedStepClock::new(FRAME_MS);
    let dt = clock.step_secs();
    let mut runner = match Runner::new(tuning, args.seed, clock) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let mut pilot = Autopilot::new();

    let mut runs = 0u32;
    let mut best = 0u64;
    let mut kills = 0u64;
    let mut last_info = String::new();

    for _ in 0..args.frames {
        let now = runner.clock().advance();
        for event in pilot.events(runner.session(), runner.world(), now) {
            runner.push_input(event);
        }

        let frame = runner.frame(dt);
        for outcome in &frame.outcomes {
            match outcome {
                ContactOutcome::EnemyDestroyed { .. } => kills += 1,
                ContactOutcome::GameOver => {
                    runs += 1;
                    best = best.max(frame.hud.score);
                }
                _ => {}
            }
        }

        if frame.hud.info_line != last_info {
            log::debug!("[{} ms] {} | {}", frame.now_ms, frame.hud.score_line, frame.hud.info_line);
            last_info = frame.hud.info_line.clone();
        }
    }

    let session = runner.session();
    if session.phase == GamePhase::Playing {
        best = best.max(session.score);
    }
    println!(
        "{} frames, {} finished runs, {} enemies destroyed, best score {}, current score {}",
        args.frames, runs, kills, best, session.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless runner is native only; web front ends drive `Runner` directly
}
