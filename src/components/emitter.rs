//! Periodic point emitter component.
//!
//! The [`Emitter`] component makes an entity feed a steady stream of spawn
//! requests into the [`PointAnimator`](crate::resources::animator::PointAnimator),
//! for continuous effects such as sparklers or comet trails.
//!
//! # How It Works
//!
//! 1. Entity is spawned with a [`MapPosition`](crate::components::mapposition::MapPosition)
//!    and an `Emitter` describing:
//!    - Emission rate and count
//!    - Direction arc and speed range
//!    - Size and lifetime ranges
//!    - Palette to pick colors from
//! 2. The `emitter_system` runs each frame:
//!    - Accumulates time and emits when the period is reached
//!    - Catches up with several emissions if the frame delta was large
//!    - Stops once `emissions_remaining` hits zero
//!
//! # Related
//!
//! - [`crate::systems::emitter::emitter_system`] – system that emits points

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::resources::palette::Palette;

/// Periodic point emitter.
///
/// # Fields
///
/// - `offset` - Offset from owner's MapPosition
/// - `particles_per_emission` - Points spawned per emission event
/// - `emissions_per_second` - Emission frequency (0 or negative = disabled)
/// - `emissions_remaining` - Emissions left, `None` = unlimited
/// - `arc_degrees` - Direction range in degrees (0° = up, clockwise)
/// - `speed_range` - Speed range in pixels per tick
/// - `size_range` - Initial radius range
/// - `lifetime_range` - Lifetime range in seconds
/// - `palette` - Colors to pick from
/// - `time_since_emit` - Internal accumulator for emission timing
#[derive(Component, Debug, Clone)]
pub struct Emitter {
    pub offset: Vec2,
    pub particles_per_emission: u32,
    pub emissions_per_second: f32,
    pub emissions_remaining: Option<u32>,
    /// Stored as (min, max).
    pub arc_degrees: (f32, f32),
    /// Stored as (min, max).
    pub speed_range: (f32, f32),
    /// Stored as (min, max).
    pub size_range: (f32, f32),
    /// Stored as (min, max).
    pub lifetime_range: (f64, f64),
    pub palette: Palette,
    pub time_since_emit: f32,
}

impl Default for Emitter {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            particles_per_emission: 1,
            emissions_per_second: 10.0,
            emissions_remaining: None,
            arc_degrees: (0.0, 360.0),
            speed_range: (1.0, 2.0),
            size_range: (2.0, 3.0),
            lifetime_range: (0.5, 1.0),
            palette: Palette::SPARKLER,
            time_since_emit: 0.0,
        }
    }
}

impl Emitter {
    /// Gentle upward fountain of pink and gold sparks.
    pub fn sparkler() -> Self {
        Self {
            particles_per_emission: 2,
            emissions_per_second: 20.0,
            arc_degrees: (-30.0, 30.0),
            speed_range: (0.5, 1.5),
            size_range: (1.5, 3.0),
            lifetime_range: (0.4, 0.8),
            ..Self::default()
        }
    }

    /// Whether this emitter can still emit anything.
    pub fn is_active(&self) -> bool {
        self.particles_per_emission > 0
            && self.emissions_per_second.is_finite()
            && self.emissions_per_second > 0.0
            && self.emissions_remaining != Some(0)
    }
}
