//! Game systems.
//!
//! This module groups all ECS systems that advance the simulation, read
//! input and draw.
//!
//! Submodules overview
//! - [`autopilot`] – headless input driver
//! - [`cleanup`] – despawn eaten fish and finished bubbles
//! - [`collision`] – run the collision coordinator and emit contacts
//! - [`eventbus`] – expire old named events
//! - [`menu`] – title, pause, end and fish select screen input
//! - [`moved`] – feed moved entities to the coordinators
//! - [`movement`] – player control and swimming toward targets
//! - [`render`] – build draw commands for the host surface
//! - [`scene`] – drive scene transitions, run conditions
//! - [`session`] – double score countdown
//! - [`spawn`] – spawn fish and bubbles
//! - [`time`] – update simulation time and delta
//! - [`triggerarea`] – run the area coordinator and emit enter/exit events

pub mod autopilot;
pub mod cleanup;
pub mod collision;
pub mod eventbus;
pub mod menu;
pub mod moved;
pub mod movement;
pub mod render;
pub mod scene;
pub mod session;
pub mod spawn;
pub mod time;
pub mod triggerarea;
