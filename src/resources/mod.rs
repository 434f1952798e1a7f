//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the two coordinators, the event
//! bus, scene and run state, persistence and configuration. Each submodule
//! documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `areacoordinator` – trigger-area registry with enter/exit diffing
//! - `collisioncoordinator` – collision-box registry and moved-entity scan
//! - `eventbus` – short-lived named events between UI and scene
//! - `fishselect` – cursor of the fish select screen
//! - `gameconfig` – INI-backed tunables
//! - `input` – per-frame binding and pointer state
//! - `layout` – button and text placement scaled to the world size
//! - `platform` – save storage, ads and platform queries
//! - `rng` – seeded random source
//! - `savedata` – persistent player progress
//! - `scenestate` – the five-screen scene state machine
//! - `screenmenu` – button rows and options of the menu screens
//! - `session` – score and progression of the current run
//! - `tiers` – fish needed per tier
//! - `worldtime` – simulation time and delta
pub mod areacoordinator;
pub mod collisioncoordinator;
pub mod eventbus;
pub mod fishselect;
pub mod gameconfig;
pub mod input;
pub mod layout;
pub mod platform;
pub mod rng;
pub mod savedata;
pub mod scenestate;
pub mod screenmenu;
pub mod session;
pub mod tiers;
pub mod worldtime;
