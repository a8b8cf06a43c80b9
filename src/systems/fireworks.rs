//! Firework spawn patterns.
//!
//! Each pattern scatters a batch of points from one location into the
//! [`PointAnimator`]. Directions, speeds, sizes, lifetimes and colors are
//! drawn from the caller's [`Rng`], so a seeded generator replays the same
//! show.
//!
//! # Coordinate System
//!
//! - Screen coordinates, Y+ is down
//! - Angles are radians, 0 points right, increasing clockwise on screen

use std::f32::consts::{FRAC_PI_4, TAU};

use fastrand::Rng;
use glam::Vec2;

use crate::resources::animator::{PointAnimator, SpawnRequest};
use crate::resources::palette::Palette;
use crate::resources::pointer::Gesture;
use crate::resources::sparkrng::{random_f32_range, random_f64_range};

pub const SHORT_BURST_COUNT: usize = 10;
/// Layered bursts add one tier per hold threshold passed:
/// `(held longer than, count, palette)`.
pub const LAYERED_TIERS: [(f64, usize, Palette); 3] = [
    (0.5, 30, Palette::EMBER),
    (1.5, 50, Palette::COOL),
    (2.0, 100, Palette::GLITTER),
];
pub const TRAIL_COUNT: usize = 5;
/// Trails faster than this switch to the warm palette.
pub const FAST_TRAIL_SPEED: f32 = 5.0;

const BURST_SPEED: (f32, f32) = (2.0, 5.0);
const BURST_LIFETIME: (f64, f64) = (0.8, 1.2);
const BURST_SIZES: std::ops::RangeInclusive<u32> = 4..=6;
const TRAIL_JITTER: f32 = 1.0;
const TRAIL_LIFETIME: (f64, f64) = (0.5, 1.0);
const TRAIL_SIZES: std::ops::RangeInclusive<u32> = 3..=5;

/// Spawn `count` points flying out of `at` in random directions.
fn radial_burst(
    animator: &mut PointAnimator,
    rng: &mut Rng,
    now: f64,
    at: Vec2,
    count: usize,
    palette: Palette,
) -> usize {
    let mut spawned = 0;
    for _ in 0..count {
        let angle = random_f32_range(rng, 0.0, TAU);
        let speed = random_f32_range(rng, BURST_SPEED.0, BURST_SPEED.1);
        let velocity = Vec2::from_angle(angle) * speed;
        let size = rng.u32(BURST_SIZES) as f32;
        let lifetime = random_f64_range(rng, BURST_LIFETIME.0, BURST_LIFETIME.1);
        let color = palette.pick(rng);
        if animator.spawn_at(now, SpawnRequest::new(at, velocity, size, color, lifetime)) {
            spawned += 1;
        }
    }
    spawned
}

/// Quick click: a small multicolored pop.
pub fn short_burst(animator: &mut PointAnimator, rng: &mut Rng, now: f64, at: Vec2) -> usize {
    radial_burst(animator, rng, now, at, SHORT_BURST_COUNT, Palette::SHORT_BURST)
}

/// Long press: one ring per hold threshold passed, warm first, then cool,
/// then glitter.
pub fn layered_burst(
    animator: &mut PointAnimator,
    rng: &mut Rng,
    now: f64,
    at: Vec2,
    held: f64,
) -> usize {
    LAYERED_TIERS
        .iter()
        .filter(|(threshold, _, _)| held > *threshold)
        .map(|(_, count, palette)| radial_burst(animator, rng, now, at, *count, *palette))
        .sum()
}

/// Drag: a short fan of points roughly along +X, colored by drag speed.
pub fn trail_spray(
    animator: &mut PointAnimator,
    rng: &mut Rng,
    now: f64,
    at: Vec2,
    speed: f32,
) -> usize {
    let palette = if speed < FAST_TRAIL_SPEED {
        Palette::SLOW_TRAIL
    } else {
        Palette::FAST_TRAIL
    };
    let mut spawned = 0;
    for _ in 0..TRAIL_COUNT {
        let angle = random_f32_range(rng, -FRAC_PI_4, FRAC_PI_4);
        let jitter = Vec2::new(
            random_f32_range(rng, -TRAIL_JITTER, TRAIL_JITTER),
            random_f32_range(rng, -TRAIL_JITTER, TRAIL_JITTER),
        );
        let velocity = Vec2::from_angle(angle) * speed + jitter;
        let size = rng.u32(TRAIL_SIZES) as f32;
        let lifetime = random_f64_range(rng, TRAIL_LIFETIME.0, TRAIL_LIFETIME.1);
        let color = palette.pick(rng);
        if animator.spawn_at(now, SpawnRequest::new(at, velocity, size, color, lifetime)) {
            spawned += 1;
        }
    }
    spawned
}

/// Spawn whatever a pointer gesture asks for. Returns the number of points
/// actually added.
pub fn apply_gesture(
    animator: &mut PointAnimator,
    rng: &mut Rng,
    now: f64,
    gesture: Gesture,
) -> usize {
    match gesture {
        Gesture::ShortBurst { at } => short_burst(animator, rng, now, at),
        Gesture::LayeredBurst { at, held } => layered_burst(animator, rng, now, at, held),
        Gesture::Trail { at, speed } => trail_spray(animator, rng, now, at, speed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::palette::PointColor;

    fn setup() -> (PointAnimator, Rng) {
        (PointAnimator::default(), Rng::with_seed(1234))
    }

    #[test]
    fn test_short_burst_spawns_ten_from_origin() {
        let (mut animator, mut rng) = setup();
        let at = Vec2::new(100.0, 50.0);
        assert_eq!(short_burst(&mut animator, &mut rng, 0.0, at), SHORT_BURST_COUNT);
        for p in animator.snapshot() {
            assert_eq!(p.position, at);
            assert!((4.0..=6.0).contains(&p.radius));
            assert!(Palette::SHORT_BURST.colors().contains(&p.color));
        }
    }

    #[test]
    fn test_burst_speed_within_range() {
        let (mut animator, mut rng) = setup();
        short_burst(&mut animator, &mut rng, 0.0, Vec2::ZERO);
        // After one tick the displacement is velocity + gravity on Y.
        animator.tick(1.0 / 60.0);
        for p in animator.snapshot() {
            let v = Vec2::new(p.position.x, p.position.y - 0.1);
            let speed = v.length();
            assert!(speed >= 2.0 - 1e-4 && speed < 5.0 + 1e-4, "speed {}", speed);
        }
    }

    #[test]
    fn test_layered_burst_tiers() {
        let (mut animator, mut rng) = setup();
        assert_eq!(layered_burst(&mut animator, &mut rng, 0.0, Vec2::ZERO, 0.5), 0);
        assert_eq!(layered_burst(&mut animator, &mut rng, 0.0, Vec2::ZERO, 1.0), 30);
        animator.clear();
        assert_eq!(layered_burst(&mut animator, &mut rng, 0.0, Vec2::ZERO, 1.6), 80);
        animator.clear();
        assert_eq!(layered_burst(&mut animator, &mut rng, 0.0, Vec2::ZERO, 2.5), 180);
    }

    #[test]
    fn test_layered_burst_draws_tiers_in_order() {
        let (mut animator, mut rng) = setup();
        layered_burst(&mut animator, &mut rng, 0.0, Vec2::ZERO, 3.0);
        let snap = animator.snapshot();
        assert!(snap[..30].iter().all(|p| Palette::EMBER.colors().contains(&p.color)));
        assert!(snap[30..80].iter().all(|p| Palette::COOL.colors().contains(&p.color)));
        assert!(snap[80..].iter().all(|p| Palette::GLITTER.colors().contains(&p.color)));
    }

    #[test]
    fn test_trail_palette_follows_speed() {
        let (mut animator, mut rng) = setup();
        trail_spray(&mut animator, &mut rng, 0.0, Vec2::ZERO, 2.0);
        assert!(
            animator
                .snapshot()
                .iter()
                .all(|p| matches!(p.color, PointColor::Blue | PointColor::Purple))
        );
        animator.clear();
        trail_spray(&mut animator, &mut rng, 0.0, Vec2::ZERO, 7.5);
        let snap = animator.snapshot();
        assert_eq!(snap.len(), TRAIL_COUNT);
        assert!(
            snap.iter()
                .all(|p| matches!(p.color, PointColor::Red | PointColor::Yellow))
        );
        assert!(snap.iter().all(|p| (3.0..=5.0).contains(&p.radius)));
    }

    #[test]
    fn test_apply_gesture_dispatches() {
        let (mut animator, mut rng) = setup();
        let n = apply_gesture(
            &mut animator,
            &mut rng,
            0.0,
            Gesture::Trail {
                at: Vec2::ZERO,
                speed: 1.0,
            },
        );
        assert_eq!(n, TRAIL_COUNT);
    }

    #[test]
    fn test_same_seed_same_show() {
        let mut a = PointAnimator::default();
        let mut b = PointAnimator::default();
        short_burst(&mut a, &mut Rng::with_seed(9), 0.0, Vec2::ZERO);
        short_burst(&mut b, &mut Rng::with_seed(9), 0.0, Vec2::ZERO);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
