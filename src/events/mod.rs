//! Event types and observers used by the game.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without tight coupling or direct
//! dependencies.
//!
//! Submodules:
//! - [`area`] – trigger-area enter/exit notifications and bubble bursting
//! - [`collision`] – collision notifications and eat resolution
//! - [`moved`] – moved-entity messages feeding both coordinators
//! - [`scene`] – scene transitions and their side effects
//! - [`tier`] – tier-up notification rescaling the sea
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod area;
pub mod collision;
pub mod moved;
pub mod scene;
pub mod tier;
