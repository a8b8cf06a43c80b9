//! Animator tick system.
//!
//! Advances the [`PointAnimator`] to the current [`WorldTime`] once per
//! frame. This is the only place the schedule mutates live points; spawners
//! only append.

use bevy_ecs::prelude::*;

use crate::resources::animator::PointAnimator;
use crate::resources::worldtime::WorldTime;

/// Tick the animator at `WorldTime::elapsed`.
///
/// # Ordering
///
/// Run **after** every spawning system so the frame's spawns are included.
pub fn animator_tick_system(time: Res<WorldTime>, mut animator: ResMut<PointAnimator>) {
    animator.tick(time.elapsed);
}
