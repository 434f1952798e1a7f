//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the sea. Components carry the data the gameplay systems work on; the rules
//! themselves live in [`crate::systems`] and [`crate::events`].
//!
//! Submodules overview:
//! - [`bounds`] – axis-aligned rectangle shared by boxes and areas
//! - [`bubble`] – rising bubble that feeds the double-score meter
//! - [`collisionbox`] – collision rectangle bound to its owning entity
//! - [`fish`] – species catalog, size rules and the AI fish component
//! - [`kind`] – entity kind tag used to dispatch collision handling
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – the player-controlled fish
//! - [`triggerarea`] – rectangle reporting entities entering and leaving it
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod bounds;
pub mod bubble;
pub mod collisionbox;
pub mod fish;
pub mod kind;
pub mod mapposition;
pub mod player;
pub mod triggerarea;
pub mod zindex;
