//! Area coordinator resource.
//!
//! Same queue-and-scan shape as the
//! [`CollisionCoordinator`](super::collisioncoordinator::CollisionCoordinator),
//! but instead of reporting every overlap it keeps, per area, the set of
//! entities currently inside and reports only membership changes.
//!
//! Membership is owned here and only changes during [`AreaCoordinator::tick`]
//! (or [`AreaCoordinator::forget`] when an entity leaves the world), so an
//! entity queued twice in a frame sees an unchanged area on the second pass
//! and produces no second transition.
use bevy_ecs::prelude::*;
use log::debug;
use rustc_hash::FxHashSet;

use crate::components::collisionbox::CollisionBox;
use crate::components::triggerarea::TriggerArea;

/// Membership change produced by a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaTransition {
    Entered { area: Entity, entity: Entity },
    Exited { area: Entity, entity: Entity },
}

#[derive(Debug, Clone)]
struct AreaSlot {
    owner: Entity,
    inside: FxHashSet<Entity>,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct AreaCoordinator {
    areas: Vec<AreaSlot>,
    queue: Vec<Entity>,
}

impl AreaCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the area owned by `owner` with an empty membership.
    pub fn register(&mut self, owner: Entity) {
        if !self.areas.iter().any(|slot| slot.owner == owner) {
            self.areas.push(AreaSlot {
                owner,
                inside: FxHashSet::default(),
            });
        }
    }

    /// Drop the area owned by `owner` together with its membership.
    pub fn deregister(&mut self, owner: Entity) {
        self.areas.retain(|slot| slot.owner != owner);
        self.queue.retain(|e| *e != owner);
    }

    /// Remove `entity` from every membership set and from the queue without
    /// raising exit transitions. Used when the entity is despawned.
    pub fn forget(&mut self, entity: Entity) {
        for slot in &mut self.areas {
            slot.inside.remove(&entity);
        }
        self.queue.retain(|e| *e != entity);
    }

    pub fn enqueue(&mut self, entity: Entity) {
        self.queue.push(entity);
    }

    pub fn pending(&self) -> &[Entity] {
        &self.queue
    }

    pub fn registered(&self) -> impl Iterator<Item = Entity> + '_ {
        self.areas.iter().map(|slot| slot.owner)
    }

    /// Whether `entity` is currently recorded inside the area of `area`.
    pub fn is_inside(&self, area: Entity, entity: Entity) -> bool {
        self.areas
            .iter()
            .find(|slot| slot.owner == area)
            .is_some_and(|slot| slot.inside.contains(&entity))
    }

    pub fn clear(&mut self) {
        self.areas.clear();
        self.queue.clear();
    }

    /// Diff every queued entity against every area, then empty the queue.
    ///
    /// `area_lookup` resolves an area owner to its current rectangle and
    /// `box_lookup` resolves a queued entity to its collision box. Queued
    /// entities without a box and areas that cannot be resolved are skipped.
    pub fn tick(
        &mut self,
        area_lookup: impl Fn(Entity) -> Option<TriggerArea>,
        box_lookup: impl Fn(Entity) -> Option<CollisionBox>,
    ) -> Vec<AreaTransition> {
        let mut transitions = Vec::new();
        if self.queue.is_empty() {
            return transitions;
        }

        for &entity in &self.queue {
            let Some(entity_box) = box_lookup(entity) else {
                continue;
            };
            for slot in &mut self.areas {
                if slot.owner == entity {
                    continue;
                }
                let Some(area) = area_lookup(slot.owner) else {
                    continue;
                };
                let inside = area.bounds.intersects(&entity_box.bounds);
                let member = slot.inside.contains(&entity);
                if inside && !member {
                    slot.inside.insert(entity);
                    transitions.push(AreaTransition::Entered {
                        area: slot.owner,
                        entity,
                    });
                } else if !inside && member {
                    slot.inside.remove(&entity);
                    transitions.push(AreaTransition::Exited {
                        area: slot.owner,
                        entity,
                    });
                }
            }
        }

        debug!(
            "area scan: {} queued, {} areas, {} transitions",
            self.queue.len(),
            self.areas.len(),
            transitions.len()
        );
        self.queue.clear();
        transitions
    }
}
