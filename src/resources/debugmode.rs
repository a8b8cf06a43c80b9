//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay (live point
//! count, clock, FPS). Remove it to hide the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws the debug overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
