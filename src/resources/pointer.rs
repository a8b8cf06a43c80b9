//! Pointer gesture state.
//!
//! Tracks the press/drag/release cycle of the primary mouse button and turns
//! it into [`Gesture`]s: a quick click is a short burst, a long press a
//! layered burst whose size grows with hold time, and dragging far enough
//! leaves a trail.
use bevy_ecs::prelude::*;
use glam::Vec2;

/// Presses shorter than this are a short burst.
pub const LONG_PRESS_SECONDS: f64 = 0.5;
/// Minimum drag distance in pixels before a trail spray is emitted.
pub const DRAG_STEP_PIXELS: f32 = 10.0;

/// What the caller should spawn in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    ShortBurst { at: Vec2 },
    LayeredBurst { at: Vec2, held: f64 },
    Trail { at: Vec2, speed: f32 },
}

#[derive(Resource, Debug, Clone)]
pub struct PointerState {
    /// Time of the pending press, if the button is held.
    pub pressed_at: Option<f64>,
    /// Where the last trail step (or press) happened.
    pub last_position: Option<Vec2>,
    /// Whether the "Try clicking or dragging" hint is still shown.
    pub hint_visible: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pressed_at: None,
            last_position: None,
            hint_visible: true,
        }
    }
}

impl PointerState {
    pub fn is_held(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn press(&mut self, at: Vec2, now: f64) {
        self.pressed_at = Some(now);
        self.last_position = Some(at);
        self.hint_visible = false;
    }

    /// Finish a press. Returns `None` if no press was pending.
    pub fn release(&mut self, at: Vec2, now: f64) -> Option<Gesture> {
        let pressed_at = self.pressed_at.take()?;
        let held = (now - pressed_at).max(0.0);
        if held < LONG_PRESS_SECONDS {
            Some(Gesture::ShortBurst { at })
        } else {
            Some(Gesture::LayeredBurst { at, held })
        }
    }

    /// Pointer moved while held. Emits a trail once it has travelled more
    /// than [`DRAG_STEP_PIXELS`] from the previous step.
    pub fn drag(&mut self, at: Vec2) -> Option<Gesture> {
        if !self.is_held() {
            return None;
        }
        let last = self.last_position?;
        let distance = last.distance(at);
        if distance <= DRAG_STEP_PIXELS {
            return None;
        }
        self.last_position = Some(at);
        Some(Gesture::Trail {
            at,
            speed: distance / DRAG_STEP_PIXELS,
        })
    }
}
