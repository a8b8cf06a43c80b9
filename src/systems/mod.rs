//! Systems and helpers that advance the simulation.
//!
//! Submodules overview
//! - [`animator`] – tick the point animator once per frame
//! - [`emitter`] – periodic emitters feeding the animator
//! - [`fireworks`] – burst and trail spawn patterns
//! - [`input`] – raylib mouse/keyboard polling (feature `window`)
//! - [`render`] – draw the animator snapshot with raylib (feature `window`)
//! - [`time`] – advance [`crate::resources::worldtime::WorldTime`]

pub mod animator;
pub mod emitter;
pub mod fireworks;
#[cfg(feature = "window")]
pub mod input;
#[cfg(feature = "window")]
pub mod render;
pub mod time;
