//! Pointer events.
//!
//! [`PointerEvent`] is triggered by the input front end (raylib mouse
//! polling, or the headless script) for each press, release and held drag
//! of the primary button. [`pointer_observer`] runs the gesture state
//! machine and spawns the resulting fireworks.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::resources::animator::PointAnimator;
use crate::resources::pointer::PointerState;
use crate::resources::sparkrng::SparkRng;
use crate::resources::worldtime::WorldTime;
use crate::systems::fireworks::apply_gesture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Pressed,
    Released,
    Dragged,
}

/// Primary button activity at a screen position.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn pressed(x: f32, y: f32) -> Self {
        Self {
            action: PointerAction::Pressed,
            position: Vec2::new(x, y),
        }
    }

    pub fn released(x: f32, y: f32) -> Self {
        Self {
            action: PointerAction::Released,
            position: Vec2::new(x, y),
        }
    }

    pub fn dragged(x: f32, y: f32) -> Self {
        Self {
            action: PointerAction::Dragged,
            position: Vec2::new(x, y),
        }
    }
}

/// Observer that turns pointer activity into fireworks.
///
/// Spawns are stamped with `WorldTime::elapsed`, the same clock the animator
/// is ticked with.
pub fn pointer_observer(
    trigger: On<PointerEvent>,
    time: Res<WorldTime>,
    mut pointer: ResMut<PointerState>,
    mut animator: ResMut<PointAnimator>,
    mut rng: ResMut<SparkRng>,
) {
    let event = trigger.event();
    let now = time.elapsed;
    let gesture = match event.action {
        PointerAction::Pressed => {
            pointer.press(event.position, now);
            None
        }
        PointerAction::Released => pointer.release(event.position, now),
        PointerAction::Dragged => pointer.drag(event.position),
    };
    if let Some(gesture) = gesture {
        let spawned = apply_gesture(&mut animator, &mut rng.0, now, gesture);
        debug!("{:?} spawned {} points", gesture, spawned);
    }
}
