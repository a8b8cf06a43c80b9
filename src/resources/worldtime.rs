//! Simulation clock resource.
//!
//! `elapsed` only ever grows (deltas are clamped at zero), so it is safe to
//! hand to [`PointAnimator::tick`](crate::resources::animator::PointAnimator::tick)
//! as a monotonic timestamp.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Seconds since the session started, scaled.
    pub elapsed: f64,
    /// Scaled seconds since the previous frame.
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
