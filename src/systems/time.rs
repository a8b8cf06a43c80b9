//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed, delta and frame count on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. Negative
/// deltas are treated as zero so `elapsed` never goes backwards.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.max(0.0) * wt.time_scale;
    wt.elapsed += scaled_dt as f64;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}
