//! Input system.
//!
//! [`update_input_state`] polls the raylib mouse and keyboard each frame and
//! turns primary-button activity into [`PointerEvent`]s. F11 toggles the
//! debug overlay via [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton};

use crate::events::pointer::PointerEvent;
use crate::events::switchdebug::SwitchDebugEvent;

const PRIMARY: MouseButton = MouseButton::MOUSE_BUTTON_LEFT;

/// Poll raylib for input and trigger the matching events.
pub fn update_input_state(rl: NonSend<raylib::RaylibHandle>, mut commands: Commands) {
    let mouse = rl.get_mouse_position();

    if rl.is_key_pressed(KeyboardKey::KEY_F11) {
        commands.trigger(SwitchDebugEvent {});
    }

    if rl.is_mouse_button_pressed(PRIMARY) {
        commands.trigger(PointerEvent::pressed(mouse.x, mouse.y));
    } else if rl.is_mouse_button_down(PRIMARY) {
        let delta = rl.get_mouse_delta();
        if delta.x != 0.0 || delta.y != 0.0 {
            commands.trigger(PointerEvent::dragged(mouse.x, mouse.y));
        }
    }

    if rl.is_mouse_button_released(PRIMARY) {
        commands.trigger(PointerEvent::released(mouse.x, mouse.y));
    }
}
