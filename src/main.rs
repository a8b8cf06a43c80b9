//! Sparkler main entry point.
//!
//! Interactive fireworks written in Rust using:
//! - **raylib** for windowing, input, and drawing (feature `window`)
//! - **bevy_ecs** for resources, observers, and the frame schedule
//!
//! Click for a quick burst, hold longer for bigger layered bursts, drag to
//! leave a trail. F11 toggles the debug overlay.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults if missing)
//! 2. Build the ECS world: animator, clock, pointer state, RNG, observers
//! 3. Each frame:
//!    - Advance `WorldTime` by the frame delta
//!    - Poll input and trigger pointer events
//!    - Run emitters, animator tick
//!    - Draw the animator snapshot
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run --release -- --headless --frames 300 --seed 7 --dump
//! cargo run --release -- --trail 24 --frames 120 --dump
//! ```

use clap::Parser;
use std::path::PathBuf;

use sparkler::resources::appconfig::{AppConfig, DEFAULT_CONFIG_PATH};
use sparkler::session;

/// Sparkler fireworks
#[derive(Parser)]
#[command(version, about = "Click, hold, and drag to set off fireworks.")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Run a scripted session without opening a window.
    #[arg(long)]
    headless: bool,

    /// Number of frames to simulate in headless mode.
    #[arg(long, default_value_t = 240)]
    frames: u64,

    /// Seed for the spark random generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final snapshot as JSON (headless mode).
    #[arg(long)]
    dump: bool,

    /// Replay a synthetic value series as fading trails of LEN frames
    /// instead of the fireworks session (headless mode).
    #[arg(long, value_name = "LEN")]
    trail: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::info!("{} - using defaults", e);
    }

    if cli.headless || cli.trail.is_some() || !cfg!(feature = "window") {
        if let Err(e) = headless(config, &cli) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    #[cfg(feature = "window")]
    windowed(config, cli.seed);
}

fn headless(config: AppConfig, cli: &Cli) -> Result<(), String> {
    log::info!("Running {} headless frames", cli.frames);
    let mut world = session::build_world(config, cli.seed);
    let snapshot = match cli.trail {
        Some(len) => session::run_trail_demo(&mut world, cli.frames as usize, len),
        None => {
            session::spawn_sparklers(&mut world);
            session::run_headless(&mut world, cli.frames)
        }
    };
    log::info!("Finished with {} live points", snapshot.len());

    if cli.dump {
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| format!("Failed to serialize snapshot: {}", e))?;
        println!("{json}");
    }
    Ok(())
}

#[cfg(feature = "window")]
fn windowed(config: AppConfig, seed: Option<u64>) {
    use bevy_ecs::prelude::*;
    use sparkler::resources::worldtime::WorldTime;
    use sparkler::systems::animator::animator_tick_system;
    use sparkler::systems::emitter::emitter_system;
    use sparkler::systems::input::update_input_state;
    use sparkler::systems::render::render_system;
    use sparkler::systems::time::update_world_time;

    let (w, h) = config.window_size();
    let target_fps = config.target_fps;

    let (mut rl, thread) = raylib::init()
        .size(w as i32, h as i32)
        .title("Happy Birthday!")
        .build();
    rl.set_target_fps(target_fps);

    let mut world = session::build_world(config, seed);
    session::spawn_sparklers(&mut world);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = session::simulation_schedule();
    update.add_systems(update_input_state.before(emitter_system));
    update.add_systems(render_system.after(animator_tick_system));

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);
        update.run(&mut world);
    }
    log::info!(
        "Window closed after {} frames",
        world.resource::<WorldTime>().frame_count
    );
}
