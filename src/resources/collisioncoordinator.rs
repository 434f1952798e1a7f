//! Collision coordinator resource.
//!
//! Keeps the registry of collision boxes and the queue of entities that
//! moved since the last scan. [`CollisionCoordinator::tick`] tests every
//! queued entity against every registered box and reports the contacts; the
//! [`collision_coordinator_system`] turns them into
//! [`CollisionEvent`]s.
//!
//! The scan is O(queued x registered). Boxes are visited in registration
//! order, and an entity queued twice is scanned twice.
//!
//! [`collision_coordinator_system`]: crate::systems::collision::collision_coordinator_system
//! [`CollisionEvent`]: crate::events::collision::CollisionEvent
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::collisionbox::CollisionBox;

/// One box touched by one moving entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    /// Entity that was queued as moved.
    pub mover: Entity,
    /// Entity owning the registered box that was hit.
    pub owner: Entity,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct CollisionCoordinator {
    boxes: Vec<Entity>,
    queue: Vec<Entity>,
}

impl CollisionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the box owned by `owner`. Registering twice is a no-op.
    pub fn register(&mut self, owner: Entity) {
        if !self.boxes.contains(&owner) {
            self.boxes.push(owner);
        }
    }

    /// Forget the box owned by `owner` and any pending scan for it.
    pub fn deregister(&mut self, owner: Entity) {
        self.boxes.retain(|e| *e != owner);
        self.queue.retain(|e| *e != owner);
    }

    /// Queue `entity` for the next scan. Duplicates are kept.
    pub fn enqueue(&mut self, entity: Entity) {
        self.queue.push(entity);
    }

    pub fn pending(&self) -> &[Entity] {
        &self.queue
    }

    pub fn registered(&self) -> &[Entity] {
        &self.boxes
    }

    pub fn is_registered(&self, owner: Entity) -> bool {
        self.boxes.contains(&owner)
    }

    /// Drop every box and pending entry.
    pub fn clear(&mut self) {
        self.boxes.clear();
        self.queue.clear();
    }

    /// Scan the queue against all registered boxes, then empty the queue.
    ///
    /// `lookup` resolves an entity to its current box. Queued entities and
    /// registered owners without a box are skipped.
    pub fn tick(&mut self, lookup: impl Fn(Entity) -> Option<CollisionBox>) -> Vec<Contact> {
        let mut contacts = Vec::new();
        if self.queue.is_empty() {
            return contacts;
        }

        for &mover in &self.queue {
            let Some(mover_box) = lookup(mover) else {
                continue;
            };
            for &owner in &self.boxes {
                let Some(owner_box) = lookup(owner) else {
                    continue;
                };
                if owner_box.intersects(&mover_box) {
                    contacts.push(Contact { mover, owner });
                }
            }
        }

        debug!(
            "collision scan: {} queued, {} boxes, {} contacts",
            self.queue.len(),
            self.boxes.len(),
            contacts.len()
        );
        self.queue.clear();
        contacts
    }
}
