//! Ephemeral point animator resource.
//!
//! [`PointAnimator`] owns every live particle and trail sample. Callers never
//! hold on to individual points: they push [`SpawnRequest`]s in, drive the
//! simulation with [`PointAnimator::tick`], and read a render-ready
//! [`PointAnimator::snapshot`] back out.
//!
//! # Per-tick update
//!
//! For each live point, in insertion order:
//!
//! 1. Drop it if `now - birth >= lifetime`
//! 2. Move it by its velocity, plus a constant `gravity` offset on Y
//! 3. Shrink `size` by `shrink_factor`
//! 4. Fade `opacity` by `1 / (lifetime * tick_rate_hz)`
//! 5. Drop it if `opacity <= 0`
//!
//! Gravity is a displacement, not an acceleration: it is added to the
//! position every tick and never folded back into the velocity. Fireworks
//! drift instead of arcing, and that drift is the intended look.
//!
//! # Ordering
//!
//! Survivors keep their relative order, so later spawns always draw on top of
//! earlier ones.
//!
//! # Related
//!
//! - [`crate::systems::animator::animator_tick_system`] – drives `tick` from [`WorldTime`](crate::resources::worldtime::WorldTime)
//! - [`crate::systems::fireworks`] – spawn patterns fed by pointer gestures

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::{debug, warn};
use serde::Serialize;

use crate::resources::palette::PointColor;

pub const DEFAULT_TICK_RATE_HZ: f64 = 60.0;
pub const DEFAULT_GRAVITY: f32 = 0.1;
pub const DEFAULT_SHRINK_FACTOR: f32 = 0.95;
pub const DEFAULT_MAX_POINTS: usize = 4096;

/// Tunables for the per-tick update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorSettings {
    /// Cadence `tick` is expected to be called at. Calibrates the fade so that
    /// opacity reaches zero exactly at the end of a point's lifetime.
    pub tick_rate_hz: f64,
    /// Vertical offset added to every point's position each tick.
    pub gravity: f32,
    /// Multiplier applied to every point's size each tick.
    pub shrink_factor: f32,
    /// Upper bound on live points. Spawns past this are dropped.
    pub max_points: usize,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            gravity: DEFAULT_GRAVITY,
            shrink_factor: DEFAULT_SHRINK_FACTOR,
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

/// Everything needed to create one point.
///
/// `size` and `lifetime` must be finite and positive. The animator refuses
/// requests that are not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: PointColor,
    /// Seconds until expiry.
    pub lifetime: f64,
}

impl SpawnRequest {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, color: PointColor, lifetime: f64) -> Self {
        Self {
            position,
            velocity,
            size,
            color,
            lifetime,
        }
    }

    fn is_well_formed(&self) -> bool {
        self.size.is_finite()
            && self.size > 0.0
            && self.lifetime.is_finite()
            && self.lifetime > 0.0
            && self.position.is_finite()
            && self.velocity.is_finite()
    }
}

#[derive(Debug, Clone, Copy)]
struct Point {
    position: Vec2,
    velocity: Vec2,
    size: f32,
    color: PointColor,
    birth: f64,
    lifetime: f64,
    opacity: f32,
}

/// Read-only view of a live point, ready to be drawn as a filled circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderablePoint {
    pub position: Vec2,
    pub radius: f32,
    pub color: PointColor,
    /// Alpha in `[0, 1]`.
    pub opacity: f32,
}

/// Owner of all live points.
///
/// The animator keeps its own clock: the timestamp of the latest
/// [`tick`](Self::tick). [`spawn`](Self::spawn) stamps new points with that
/// clock, [`spawn_at`](Self::spawn_at) with an explicit time.
#[derive(Resource, Debug, Clone, Default)]
pub struct PointAnimator {
    settings: AnimatorSettings,
    points: Vec<Point>,
    clock: f64,
}

impl PointAnimator {
    pub fn new(settings: AnimatorSettings) -> Self {
        Self {
            settings,
            points: Vec::new(),
            clock: 0.0,
        }
    }

    pub fn settings(&self) -> &AnimatorSettings {
        &self.settings
    }

    /// Timestamp of the most recent tick.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Spawn a point born at the animator's current clock.
    ///
    /// Returns `false` if the request was rejected (malformed or over capacity).
    pub fn spawn(&mut self, request: SpawnRequest) -> bool {
        self.spawn_at(self.clock, request)
    }

    /// Spawn a point born at `now`.
    pub fn spawn_at(&mut self, now: f64, request: SpawnRequest) -> bool {
        if !request.is_well_formed() {
            warn!(
                "Rejecting spawn with size={} lifetime={} at ({}, {})",
                request.size, request.lifetime, request.position.x, request.position.y
            );
            return false;
        }
        if self.points.len() >= self.settings.max_points {
            debug!(
                "Point capacity {} reached, dropping spawn",
                self.settings.max_points
            );
            return false;
        }
        self.points.push(Point {
            position: request.position,
            velocity: request.velocity,
            size: request.size,
            color: request.color,
            birth: now,
            lifetime: request.lifetime,
            opacity: 1.0,
        });
        true
    }

    /// Advance every live point to `now` and drop the expired ones.
    pub fn tick(&mut self, now: f64) {
        let AnimatorSettings {
            tick_rate_hz,
            gravity,
            shrink_factor,
            ..
        } = self.settings;
        self.clock = now;

        self.points.retain_mut(|point| {
            let elapsed = now - point.birth;
            if elapsed >= point.lifetime {
                return false;
            }
            point.position.x += point.velocity.x;
            point.position.y += point.velocity.y + gravity;
            point.size *= shrink_factor;
            point.opacity -= (1.0 / (point.lifetime * tick_rate_hz)) as f32;
            point.opacity > 0.0
        });
    }

    /// Render-ready copy of every live point, oldest first.
    pub fn snapshot(&self) -> Vec<RenderablePoint> {
        self.points
            .iter()
            .map(|p| RenderablePoint {
                position: p.position,
                radius: p.size,
                color: p.color,
                opacity: p.opacity,
            })
            .collect()
    }

    /// Drop every live point.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
