//! Periodic emitter system.
//!
//! Processes [`Emitter`] components and pushes spawn requests into the
//! [`PointAnimator`].
//!
//! # Behavior
//!
//! - Accumulates time and emits based on `emissions_per_second`
//! - Supports catch-up: if dt is large, may emit multiple times per frame,
//!   at most [`MAX_EMISSIONS_PER_FRAME`]
//! - Stops emitting when `emissions_remaining` reaches 0
//!
//! # Coordinate System
//!
//! - 0° points up (negative Y in screen coordinates)
//! - Angles increase clockwise
//! - Y+ is down (screen coordinates)

use bevy_ecs::prelude::*;
use fastrand::Rng;
use glam::Vec2;

use crate::components::emitter::Emitter;
use crate::components::mapposition::MapPosition;
use crate::resources::animator::{PointAnimator, SpawnRequest};
use crate::resources::sparkrng::{SparkRng, random_f32_range, random_f64_range};
use crate::resources::worldtime::WorldTime;

/// Most emissions a single emitter performs in one frame.
pub const MAX_EMISSIONS_PER_FRAME: u32 = 64;

/// System that processes emitters and spawns points.
///
/// # Ordering
///
/// Should run **before** `animator_tick_system` so new points move on their
/// spawn frame.
pub fn emitter_system(
    mut emitter_query: Query<(&MapPosition, &mut Emitter)>,
    mut animator: ResMut<PointAnimator>,
    mut rng: ResMut<SparkRng>,
    time: Res<WorldTime>,
) {
    let dt = time.delta; // delta is already scaled
    if dt <= 0.0 {
        return;
    }

    for (owner_pos, mut emitter) in emitter_query.iter_mut() {
        if !emitter.is_active() {
            continue;
        }

        let period = 1.0 / emitter.emissions_per_second;
        emitter.time_since_emit += dt;

        // Catch-up: emit several times if dt is large, up to the frame cap
        let due = (emitter.time_since_emit / period).floor();
        let mut count = due.min(MAX_EMISSIONS_PER_FRAME as f32) as u32;
        if let Some(remaining) = emitter.emissions_remaining {
            count = count.min(remaining);
        }
        for _ in 0..count {
            emit_points(&mut animator, &mut rng.0, time.elapsed, owner_pos, &emitter);
        }
        if let Some(remaining) = emitter.emissions_remaining.as_mut() {
            *remaining -= count;
        }

        if due > MAX_EMISSIONS_PER_FRAME as f32 {
            // Backlog past the cap is dropped, not carried to the next frame.
            emitter.time_since_emit %= period;
        } else {
            emitter.time_since_emit -= due * period;
        }
        if emitter.time_since_emit < 0.0 {
            emitter.time_since_emit = 0.0;
        }
    }
}

/// Emit points for a single emission event.
fn emit_points(
    animator: &mut PointAnimator,
    rng: &mut Rng,
    now: f64,
    owner_pos: &MapPosition,
    emitter: &Emitter,
) {
    let origin = owner_pos.pos + emitter.offset;

    for _ in 0..emitter.particles_per_emission {
        let (arc_min, arc_max) = emitter.arc_degrees;
        let theta = random_f32_range(rng, arc_min, arc_max).to_radians();
        let (speed_min, speed_max) = emitter.speed_range;
        let speed = random_f32_range(rng, speed_min, speed_max);

        // 0° = up, Y+ is down
        let velocity = Vec2::new(theta.sin(), -theta.cos()) * speed;

        let (size_min, size_max) = emitter.size_range;
        let size = random_f32_range(rng, size_min, size_max);
        let (life_min, life_max) = emitter.lifetime_range;
        let lifetime = random_f64_range(rng, life_min, life_max);

        animator.spawn_at(
            now,
            SpawnRequest::new(origin, velocity, size, emitter.palette.pick(rng), lifetime),
        );
    }
}
