//! Sparkler library.
//!
//! Ephemeral point animation (fireworks, trails) and the ECS pieces that feed
//! and drive it. Exposed as a library for integration tests and embedders
//! that bring their own renderer.

pub mod components;
pub mod events;
pub mod resources;
pub mod session;
pub mod systems;
pub mod trail;
