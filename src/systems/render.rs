//! Raylib renderer.
//!
//! Draws the animator snapshot as alpha-blended circles in snapshot order, so
//! later spawns land on top. Color tokens are resolved here and nowhere else.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::animator::PointAnimator;
use crate::resources::appconfig::AppConfig;
use crate::resources::debugmode::DebugMode;
use crate::resources::palette::PointColor;
use crate::resources::pointer::PointerState;
use crate::resources::worldtime::WorldTime;

const HINT_TEXT: &str = "Try clicking or dragging";
const HINT_BLINK_SECONDS: f64 = 0.5;
/// Lightest and darkest steps of the sequential ramp.
const RAMP_LIGHT: (u8, u8, u8) = (222, 235, 247);
const RAMP_DARK: (u8, u8, u8) = (8, 48, 107);

/// Resolve a color token to a raylib color at the given opacity.
pub fn resolve_color(token: PointColor, opacity: f32) -> Color {
    let base = match token {
        PointColor::Red => Color::RED,
        PointColor::Orange => Color::ORANGE,
        PointColor::Yellow => Color::YELLOW,
        PointColor::Green => Color::GREEN,
        PointColor::Blue => Color::BLUE,
        PointColor::Purple => Color::PURPLE,
        PointColor::Pink => Color::PINK,
        PointColor::Gold => Color::GOLD,
        PointColor::White => Color::WHITE,
        PointColor::Ramp(step) => {
            let t = step as f32 / 255.0;
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::new(
                lerp(RAMP_LIGHT.0, RAMP_DARK.0),
                lerp(RAMP_LIGHT.1, RAMP_DARK.1),
                lerp(RAMP_LIGHT.2, RAMP_DARK.2),
                255,
            )
        }
    };
    let alpha = (opacity.clamp(0.0, 1.0) * base.a as f32).round() as u8;
    Color::new(base.r, base.g, base.b, alpha)
}

pub fn render_system(
    animator: Res<PointAnimator>,
    pointer: Res<PointerState>,
    time: Res<WorldTime>,
    config: Res<AppConfig>,
    debug_mode: Option<Res<DebugMode>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    for point in animator.snapshot() {
        d.draw_circle_v(
            Vector2 {
                x: point.position.x,
                y: point.position.y,
            },
            point.radius,
            resolve_color(point.color, point.opacity),
        );
    }

    if pointer.hint_visible && ((time.elapsed / HINT_BLINK_SECONDS) as u64) % 2 == 0 {
        let width = measure_text(HINT_TEXT, 20);
        let x = (config.window_width as i32 - width) / 2;
        let y = config.window_height as i32 / 2;
        d.draw_text(HINT_TEXT, x, y, 20, Color::WHITE);
    }

    if debug_mode.is_some() {
        let text = format!(
            "DEBUG (F11) | FPS: {} | points: {} | t={:.2}s frame={}",
            d.get_fps(),
            animator.len(),
            time.elapsed,
            time.frame_count
        );
        d.draw_text(&text, 10, 10, 10, Color::LIGHTGRAY);
    }
}
