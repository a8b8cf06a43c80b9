//! Session setup shared by the window and headless front ends.
//!
//! A session is one ECS [`World`] holding the point animator and its
//! collaborators, plus the per-frame [`Schedule`] that drives it:
//!
//! 1. Emitters append spawn requests
//! 2. The animator ticks at `WorldTime::elapsed`
//!
//! Pointer events are handled by observers as soon as they are triggered,
//! so they always land between two ticks.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::emitter::Emitter;
use crate::components::mapposition::MapPosition;
use crate::events::pointer::{PointerEvent, pointer_observer};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animator::{PointAnimator, RenderablePoint};
use crate::resources::appconfig::AppConfig;
use crate::resources::pointer::PointerState;
use crate::resources::sparkrng::{SparkRng, random_f32_range};
use crate::resources::worldtime::WorldTime;
use crate::systems::animator::animator_tick_system;
use crate::systems::emitter::emitter_system;
use crate::systems::time::update_world_time;
use crate::trail::{TrailSample, TrailWindow};

/// Sparkler anchors as fractions of the window size (left and right cake).
const SPARKLER_ANCHORS: [(f32, f32); 2] = [(0.1875, 0.45), (0.6875, 0.45)];

/// Stations sampled by the trail demo.
pub const TRAIL_DEMO_STATIONS: usize = 12;
/// Value range mapped onto the color ramp by the trail demo.
pub const TRAIL_DEMO_RANGE: (f32, f32) = (0.0, 150.0);

/// Build a world with every resource and observer a session needs.
pub fn build_world(config: AppConfig, seed: Option<u64>) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(PointAnimator::new(config.animator));
    world.insert_resource(PointerState::default());
    world.insert_resource(match seed {
        Some(seed) => SparkRng::with_seed(seed),
        None => SparkRng::default(),
    });
    world.insert_resource(config);

    world.spawn(Observer::new(pointer_observer));
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();
    world
}

/// Systems that advance the simulation, in order.
pub fn simulation_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((emitter_system, animator_tick_system).chain());
    schedule
}

/// Place the two ambient sparklers.
pub fn spawn_sparklers(world: &mut World) {
    let (w, h) = world.resource::<AppConfig>().window_size();
    for (fx, fy) in SPARKLER_ANCHORS {
        world.spawn((
            MapPosition::new(w as f32 * fx, h as f32 * fy),
            Emitter::sparkler(),
        ));
    }
}

/// Scripted gestures replayed by the headless front end, keyed by frame:
/// a quick click, a drag across the screen, then a long press that ends in
/// a full layered burst.
pub fn scripted_gestures(frame: u64, window: (u32, u32)) -> Vec<PointerEvent> {
    let (w, h) = (window.0 as f32, window.1 as f32);
    let center = Vec2::new(w / 2.0, h / 2.0);
    match frame {
        10 => vec![PointerEvent::pressed(center.x, center.y)],
        15 => vec![PointerEvent::released(center.x, center.y)],
        30 => vec![PointerEvent::pressed(w * 0.2, h * 0.7)],
        31..=60 => {
            let x = w * 0.2 + 15.0 * (frame - 30) as f32;
            vec![PointerEvent::dragged(x, h * 0.7)]
        }
        200 => vec![PointerEvent::released(w * 0.2 + 450.0, h * 0.7)],
        _ => Vec::new(),
    }
}

/// Run `frames` fixed-step frames without a window. Returns the final
/// snapshot.
pub fn run_headless(world: &mut World, frames: u64) -> Vec<RenderablePoint> {
    let mut schedule = simulation_schedule();
    let dt = world.resource::<AppConfig>().tick_period();
    let window = world.resource::<AppConfig>().window_size();

    for _ in 0..frames {
        update_world_time(world, dt);
        let frame = world.resource::<WorldTime>().frame_count;
        for event in scripted_gestures(frame, window) {
            world.trigger(event);
        }
        world.flush();
        schedule.run(world);

        if frame % 30 == 0 {
            let time = world.resource::<WorldTime>();
            info!(
                "frame {} t={:.3}s live points: {}",
                frame,
                time.elapsed,
                world.resource::<PointAnimator>().len()
            );
        }
    }
    world.resource::<PointAnimator>().snapshot()
}

/// Seasonal readings for [`TRAIL_DEMO_STATIONS`] fixed stations, one frame
/// per month. Each station peaks at its own time of year; radius and ramp
/// color both follow the value.
pub fn trail_demo_history(
    frames: usize,
    window: (u32, u32),
    rng: &mut fastrand::Rng,
) -> Vec<Vec<TrailSample>> {
    let (w, h) = (window.0 as f32, window.1 as f32);
    let (vmin, vmax) = TRAIL_DEMO_RANGE;
    let stations: Vec<(Vec2, f32)> = (0..TRAIL_DEMO_STATIONS)
        .map(|_| {
            let pos = Vec2::new(
                random_f32_range(rng, 0.1 * w, 0.9 * w),
                random_f32_range(rng, 0.1 * h, 0.9 * h),
            );
            (pos, random_f32_range(rng, 0.0, std::f32::consts::TAU))
        })
        .collect();

    (0..frames)
        .map(|month| {
            let season = month as f32 / 12.0 * std::f32::consts::TAU;
            stations
                .iter()
                .map(|&(pos, phase)| {
                    let noise = random_f32_range(rng, -10.0, 10.0);
                    let value = (75.0 + 60.0 * (season + phase).sin() + noise).clamp(vmin, vmax);
                    // 2 px of drift per month.
                    let drift = Vec2::new(month as f32 * 2.0, 0.0);
                    TrailSample::valued(pos + drift, 2.0 + value / 30.0, value, vmin, vmax)
                })
                .collect()
        })
        .collect()
}

/// Replay a synthetic value series through a [`TrailWindow`] of `trail_len`
/// frames. Returns the composed points of the last frame.
pub fn run_trail_demo(world: &mut World, frames: usize, trail_len: usize) -> Vec<RenderablePoint> {
    let window = world.resource::<AppConfig>().window_size();
    let history = {
        let mut rng = world.resource_mut::<SparkRng>();
        trail_demo_history(frames, window, &mut rng.0)
    };
    let trail = TrailWindow::new(trail_len);

    let mut composed = Vec::new();
    for frame in 0..history.len() {
        composed = trail.compose(frame, &history);
        if frame % 12 == 0 {
            info!(
                "trail frame {} drawing {} points from {} frames",
                frame,
                composed.len(),
                trail.frames(frame).count()
            );
        }
    }
    composed
}
