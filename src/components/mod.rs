//! ECS components for entities.
//!
//! Points themselves are not entities; they live inside the
//! [`PointAnimator`](crate::resources::animator::PointAnimator). Entities are
//! only used for long-lived things that feed it.
//!
//! Submodules overview:
//! - [`emitter`] – periodic point emitter
//! - [`mapposition`] – screen-space anchor position

pub mod emitter;
pub mod mapposition;
