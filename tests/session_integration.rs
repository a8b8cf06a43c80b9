//! Session integration tests: observers, emitters and the animator tick
//! running together inside a bevy_ecs world.

use bevy_ecs::prelude::*;
use glam::Vec2;

use sparkler::components::emitter::Emitter;
use sparkler::components::mapposition::MapPosition;
use sparkler::events::pointer::PointerEvent;
use sparkler::events::switchdebug::SwitchDebugEvent;
use sparkler::resources::animator::PointAnimator;
use sparkler::resources::appconfig::AppConfig;
use sparkler::resources::debugmode::DebugMode;
use sparkler::resources::palette::Palette;
use sparkler::resources::pointer::PointerState;
use sparkler::resources::worldtime::WorldTime;
use sparkler::resources::palette::PointColor;
use sparkler::session::{
    TRAIL_DEMO_STATIONS, build_world, run_headless, run_trail_demo, simulation_schedule,
    spawn_sparklers,
};
use sparkler::systems::emitter::MAX_EMISSIONS_PER_FRAME;
use sparkler::systems::fireworks::{SHORT_BURST_COUNT, TRAIL_COUNT};
use sparkler::systems::time::update_world_time;

const DT: f32 = 1.0 / 60.0;

fn make_world() -> World {
    build_world(AppConfig::new(), Some(42))
}

#[test]
fn world_animator_uses_configured_settings() {
    let mut config = AppConfig::new();
    config
        .load_from_str("[animator]\ngravity = 0.3\nmax_points = 64\n")
        .unwrap();
    let expected = config.animator;
    let world = build_world(config, Some(1));
    let animator = world.resource::<PointAnimator>();
    assert_eq!(*animator.settings(), expected);
    assert_eq!(animator.settings().max_points, 64);
    assert_eq!(animator.clock(), 0.0);
}

fn step(world: &mut World, schedule: &mut Schedule) {
    update_world_time(world, DT);
    schedule.run(world);
}

fn live(world: &World) -> usize {
    world.resource::<PointAnimator>().len()
}

#[test]
fn quick_click_spawns_short_burst() {
    let mut world = make_world();
    let mut schedule = simulation_schedule();

    world.trigger(PointerEvent::pressed(100.0, 100.0));
    step(&mut world, &mut schedule);
    assert_eq!(live(&world), 0);
    assert!(!world.resource::<PointerState>().hint_visible);

    world.trigger(PointerEvent::released(100.0, 100.0));
    step(&mut world, &mut schedule);
    assert_eq!(live(&world), SHORT_BURST_COUNT);
}

#[test]
fn long_press_spawns_layered_burst() {
    let mut world = make_world();
    let mut schedule = simulation_schedule();

    world.trigger(PointerEvent::pressed(50.0, 50.0));
    // Hold for 1 second: only the first tier.
    for _ in 0..60 {
        step(&mut world, &mut schedule);
    }
    world.trigger(PointerEvent::released(50.0, 50.0));
    assert_eq!(live(&world), 30);
}

#[test]
fn drag_leaves_trail_only_past_threshold() {
    let mut world = make_world();
    let mut schedule = simulation_schedule();

    world.trigger(PointerEvent::pressed(0.0, 0.0));
    world.trigger(PointerEvent::dragged(5.0, 0.0));
    assert_eq!(live(&world), 0);
    world.trigger(PointerEvent::dragged(20.0, 0.0));
    assert_eq!(live(&world), TRAIL_COUNT);
    world.trigger(PointerEvent::dragged(25.0, 0.0));
    assert_eq!(live(&world), TRAIL_COUNT);
    assert_eq!(
        world.resource::<PointerState>().last_position,
        Some(Vec2::new(20.0, 0.0))
    );

    step(&mut world, &mut schedule);
    assert_eq!(live(&world), TRAIL_COUNT);
}

#[test]
fn burst_fades_out_completely() {
    let mut world = make_world();
    let mut schedule = simulation_schedule();

    world.trigger(PointerEvent::pressed(100.0, 100.0));
    world.trigger(PointerEvent::released(100.0, 100.0));
    assert_eq!(live(&world), SHORT_BURST_COUNT);

    // Longest burst lifetime is under 1.2s.
    for _ in 0..80 {
        step(&mut world, &mut schedule);
    }
    assert_eq!(live(&world), 0);
    assert!(world.resource::<PointAnimator>().snapshot().is_empty());
}

#[test]
fn emitter_feeds_animator_at_its_rate() {
    let mut world = make_world();
    let mut schedule = simulation_schedule();

    world.spawn((
        MapPosition::new(10.0, 10.0),
        Emitter {
            particles_per_emission: 2,
            emissions_per_second: 10.0,
            emissions_remaining: Some(3),
            lifetime_range: (5.0, 5.0),
            ..Emitter::default()
        },
    ));

    // One big frame: catch-up emits all three remaining emissions.
    update_world_time(&mut world, 1.0);
    schedule.run(&mut world);
    assert_eq!(live(&world), 6);

    let mut query = world.query::<&Emitter>();
    let emitter = query.single(&world).unwrap();
    assert_eq!(emitter.emissions_remaining, Some(0));
    assert!(!emitter.is_active());

    step(&mut world, &mut schedule);
    assert_eq!(live(&world), 6);
}

#[test]
fn huge_emission_rate_is_capped_per_frame() {
    let mut world = make_world();
    let mut schedule = simulation_schedule();
    world.spawn((
        MapPosition::new(10.0, 10.0),
        Emitter {
            particles_per_emission: 1,
            emissions_per_second: 1e9,
            lifetime_range: (5.0, 5.0),
            ..Emitter::default()
        },
    ));

    update_world_time(&mut world, 1.0);
    schedule.run(&mut world);
    assert_eq!(live(&world), MAX_EMISSIONS_PER_FRAME as usize);

    let mut query = world.query::<&Emitter>();
    let emitter = query.single(&world).unwrap();
    assert!(emitter.time_since_emit < 1e-6);

    step(&mut world, &mut schedule);
    assert_eq!(live(&world), 2 * MAX_EMISSIONS_PER_FRAME as usize);
}

#[test]
fn emitter_points_use_its_palette() {
    let mut world = make_world();
    let mut schedule = simulation_schedule();
    world.spawn((
        MapPosition::new(0.0, 0.0),
        Emitter {
            palette: Palette::COOL,
            ..Emitter::default()
        },
    ));
    for _ in 0..30 {
        step(&mut world, &mut schedule);
    }
    let snap = world.resource::<PointAnimator>().snapshot();
    assert!(!snap.is_empty());
    assert!(snap.iter().all(|p| Palette::COOL.colors().contains(&p.color)));
}

#[test]
fn sparklers_are_placed_inside_window() {
    let mut world = make_world();
    spawn_sparklers(&mut world);
    let (w, h) = world.resource::<AppConfig>().window_size();
    let mut query = world.query::<(&MapPosition, &Emitter)>();
    let positions: Vec<_> = query.iter(&world).map(|(p, _)| p.pos).collect();
    assert_eq!(positions.len(), 2);
    for pos in positions {
        assert!(pos.x > 0.0 && pos.x < w as f32);
        assert!(pos.y > 0.0 && pos.y < h as f32);
    }
}

#[test]
fn switch_debug_toggles_resource() {
    let mut world = make_world();
    assert!(!world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(world.contains_resource::<DebugMode>());
    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(!world.contains_resource::<DebugMode>());
}

#[test]
fn world_time_is_monotonic() {
    let mut world = make_world();
    update_world_time(&mut world, 0.5);
    update_world_time(&mut world, -1.0);
    let time = world.resource::<WorldTime>();
    assert!((time.elapsed - 0.5).abs() < 1e-9);
    assert_eq!(time.delta, 0.0);
    assert_eq!(time.frame_count, 2);
}

#[test]
fn headless_run_is_reproducible() {
    let mut a = make_world();
    let mut b = make_world();
    let snap_a = run_headless(&mut a, 90);
    let snap_b = run_headless(&mut b, 90);
    assert!(!snap_a.is_empty());
    assert_eq!(snap_a, snap_b);
}

#[test]
fn trail_demo_fades_window_of_ramp_colored_frames() {
    let mut world = make_world();
    let points = run_trail_demo(&mut world, 60, 24);
    assert_eq!(points.len(), 24 * TRAIL_DEMO_STATIONS);
    assert!(points.iter().all(|p| matches!(p.color, PointColor::Ramp(_))));
    assert!((points[0].opacity - 0.1).abs() < 1e-6);
    assert!((points[points.len() - 1].opacity - 1.0).abs() < 1e-6);
    // The animator is not involved.
    assert!(world.resource::<PointAnimator>().is_empty());
}

#[test]
fn trail_demo_shorter_than_window_uses_all_frames() {
    let mut world = make_world();
    let points = run_trail_demo(&mut world, 5, 24);
    assert_eq!(points.len(), 5 * TRAIL_DEMO_STATIONS);
}
