//! Frame-windowed fading trails.
//!
//! Where the [`PointAnimator`](crate::resources::animator::PointAnimator)
//! fades points by their own age, a [`TrailWindow`] fades whole frames of
//! recorded samples by how far back they sit from the current frame. Each
//! frame of history is drawn at an alpha that ramps linearly from
//! [`OLDEST_ALPHA`] for the oldest frame in the window to 1.0 for the
//! current one. This is how value series (station readings per month, for
//! instance) get a comet tail without simulating anything.

use std::ops::RangeInclusive;

use glam::Vec2;

use crate::resources::animator::RenderablePoint;
use crate::resources::palette::PointColor;

pub const OLDEST_ALPHA: f32 = 0.1;

/// One recorded sample in a frame of history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub position: Vec2,
    pub radius: f32,
    pub color: PointColor,
}

impl TrailSample {
    /// Sample colored by `value` on the ramp spanning `[vmin, vmax]`.
    pub fn valued(position: Vec2, radius: f32, value: f32, vmin: f32, vmax: f32) -> Self {
        Self {
            position,
            radius,
            color: PointColor::ramp(value, vmin, vmax),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailWindow {
    len: usize,
}

impl TrailWindow {
    /// A window covering `len` frames, the current one included. A zero
    /// length is widened to 1.
    pub fn new(len: usize) -> Self {
        Self { len: len.max(1) }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Frames drawn when `frame` is current, oldest first.
    pub fn frames(&self, frame: usize) -> RangeInclusive<usize> {
        frame.saturating_sub(self.len - 1)..=frame
    }

    /// Alpha of the `index`-th of `count` drawn frames (0 = oldest).
    ///
    /// A single frame is drawn at [`OLDEST_ALPHA`].
    pub fn alpha(index: usize, count: usize) -> f32 {
        if count <= 1 {
            return OLDEST_ALPHA;
        }
        let step = (1.0 - OLDEST_ALPHA) / (count - 1) as f32;
        OLDEST_ALPHA + step * index.min(count - 1) as f32
    }

    /// Flatten every frame of `history` inside the window into render-ready
    /// points, oldest frame first, each faded by its frame's alpha.
    ///
    /// Frames past the end of `history` are skipped; empty frames contribute
    /// nothing but still count towards the alpha ramp.
    pub fn compose<S: AsRef<[TrailSample]>>(&self, frame: usize, history: &[S]) -> Vec<RenderablePoint> {
        let frames = self.frames(frame);
        let count = frames.clone().count();
        frames
            .enumerate()
            .filter_map(|(i, f)| history.get(f).map(|samples| (Self::alpha(i, count), samples)))
            .flat_map(|(alpha, samples)| {
                samples.as_ref().iter().map(move |s| RenderablePoint {
                    position: s.position,
                    radius: s.radius,
                    color: s.color,
                    opacity: alpha,
                })
            })
            .collect()
    }
}
