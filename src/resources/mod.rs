//! ECS resources made available to systems.
//!
//! Overview
//! - `animator` – the point animator: spawn, tick, snapshot
//! - `appconfig` – window and animator settings from `config.ini`
//! - `debugmode` – presence toggles the debug overlay
//! - `palette` – opaque color tokens and the palettes effects pick from
//! - `pointer` – press/drag/release gesture state
//! - `sparkrng` – shared, seedable random generator
//! - `worldtime` – monotonic simulation time and delta
pub mod animator;
pub mod appconfig;
pub mod debugmode;
pub mod palette;
pub mod pointer;
pub mod sparkrng;
pub mod worldtime;
