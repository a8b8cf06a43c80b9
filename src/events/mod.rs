//! Event types and observers.
//!
//! Submodules:
//! - [`pointer`] – primary button press/drag/release, turned into fireworks
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod pointer;
pub mod switchdebug;
