//! Collision events and eat resolution.
//!
//! The [`collision_coordinator_system`] triggers one [`CollisionEvent`] per
//! contact it finds. [`observe_contact`] resolves it with the handler
//! registered for the moving entity's [`EntityKind`]:
//!
//! - a fish eats any fish strictly smaller than itself;
//! - the player eats any fish of its own size or smaller, and is eaten by
//!   anything bigger;
//! - bubbles have no collision handling, they use trigger areas.
//!
//! The two rules are deliberately not symmetric: on equal sizes the player
//! always wins.
//!
//! [`collision_coordinator_system`]: crate::systems::collision::collision_coordinator_system
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;
use serde_json::json;

use crate::components::fish::Fish;
use crate::components::kind::EntityKind;
use crate::components::player::Player;
use crate::events::tier::TierUpEvent;
use crate::resources::eventbus::{EventBus, GAME_OVER};
use crate::resources::savedata::SaveData;
use crate::resources::session::Session;

/// A queued entity touched the registered box of another entity.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    /// Entity that moved this frame.
    pub mover: Entity,
    /// Owner of the box it touched.
    pub owner: Entity,
}

/// What eat resolution needs to know about one side of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contestant {
    pub entity: Entity,
    pub kind: EntityKind,
    pub size: i32,
    /// Already eaten (or, for the player, already lost) this frame.
    pub out: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Nothing,
    FishEats { prey: Entity },
    PlayerEats { prey: Entity },
    PlayerEaten,
}

/// Collision behaviour of one entity kind, called with the mover first.
pub type ContactHandler = fn(&Contestant, &Contestant) -> ContactOutcome;

pub fn contact_handler(kind: EntityKind) -> Option<ContactHandler> {
    match kind {
        EntityKind::Fish => Some(fish_contact),
        EntityKind::Player => Some(player_contact),
        EntityKind::Bubble => None,
    }
}

fn fish_contact(mover: &Contestant, other: &Contestant) -> ContactOutcome {
    // The player settles its own contacts when it moves.
    if other.kind == EntityKind::Fish && other.size < mover.size {
        ContactOutcome::FishEats { prey: other.entity }
    } else {
        ContactOutcome::Nothing
    }
}

fn player_contact(mover: &Contestant, other: &Contestant) -> ContactOutcome {
    if other.kind != EntityKind::Fish {
        return ContactOutcome::Nothing;
    }
    if other.size <= mover.size {
        ContactOutcome::PlayerEats { prey: other.entity }
    } else {
        ContactOutcome::PlayerEaten
    }
}

/// Decide what happens when `mover` touches `other`.
pub fn resolve_contact(mover: &Contestant, other: &Contestant) -> ContactOutcome {
    if mover.out || other.out {
        return ContactOutcome::Nothing;
    }
    contact_handler(mover.kind).map_or(ContactOutcome::Nothing, |handler| handler(mover, other))
}

/// Global observer applying eat resolution to every [`CollisionEvent`].
///
/// - A fish eaten by another fish is only flagged; the cleanup system
///   despawns it at the end of the frame.
/// - A fish eaten by the player also scores and may trigger a
///   [`TierUpEvent`].
/// - The first time in a run the player is eaten, its fish count is added to
///   the saved total and `GameOver` is fired on the [`EventBus`].
#[allow(clippy::too_many_arguments)]
pub fn observe_contact(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    kinds: Query<&EntityKind>,
    mut fish: Query<&mut Fish>,
    mut players: Query<&mut Player>,
    mut session: ResMut<Session>,
    mut save: ResMut<SaveData>,
    mut bus: ResMut<EventBus>,
) {
    let CollisionEvent { mover, owner } = *trigger.event();

    let contestant = |entity: Entity| -> Option<Contestant> {
        let kind = *kinds.get(entity).ok()?;
        let (size, out) = match kind {
            EntityKind::Fish => {
                let f = fish.get(entity).ok()?;
                (f.size, f.eaten)
            }
            EntityKind::Player => (players.get(entity).ok()?.size, session.is_game_over()),
            EntityKind::Bubble => return None,
        };
        Some(Contestant {
            entity,
            kind,
            size,
            out,
        })
    };
    let (Some(a), Some(b)) = (contestant(mover), contestant(owner)) else {
        return;
    };

    match resolve_contact(&a, &b) {
        ContactOutcome::Nothing => {}
        ContactOutcome::FishEats { prey } => {
            if let Ok(mut prey) = fish.get_mut(prey) {
                prey.eaten = true;
            }
        }
        ContactOutcome::PlayerEats { prey } => {
            if let Ok(mut prey) = fish.get_mut(prey) {
                prey.eaten = true;
            }
            if let Ok(mut player) = players.get_mut(mover) {
                player.fish_eaten += 1;
            }
            if session.on_fish_eaten() {
                commands.trigger(TierUpEvent {
                    tier: session.tier(),
                });
            }
        }
        ContactOutcome::PlayerEaten => {
            if !session.mark_game_over() {
                return;
            }
            let eaten = players.get(mover).map(|p| p.fish_eaten).unwrap_or(0);
            save.fish_eaten += eaten;
            info!(
                "player eaten at tier {} with {} points, {} fish this run",
                session.tier(),
                session.points(),
                eaten
            );
            bus.fire_with(
                GAME_OVER,
                json!({ "tier": session.tier(), "points": session.points(), "eaten": eaten }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Entity, Entity) {
        let mut world = World::new();
        (world.spawn_empty().id(), world.spawn_empty().id())
    }

    fn fish(entity: Entity, size: i32) -> Contestant {
        Contestant {
            entity,
            kind: EntityKind::Fish,
            size,
            out: false,
        }
    }

    fn player(entity: Entity, size: i32) -> Contestant {
        Contestant {
            kind: EntityKind::Player,
            ..fish(entity, size)
        }
    }

    #[test]
    fn larger_fish_eats_smaller() {
        let (a, b) = pair();
        assert_eq!(
            resolve_contact(&fish(a, 5), &fish(b, 3)),
            ContactOutcome::FishEats { prey: b }
        );
        assert_eq!(resolve_contact(&fish(b, 3), &fish(a, 5)), ContactOutcome::Nothing);
    }

    #[test]
    fn equal_fish_ignore_each_other() {
        let (a, b) = pair();
        assert_eq!(resolve_contact(&fish(a, 4), &fish(b, 4)), ContactOutcome::Nothing);
    }

    #[test]
    fn player_wins_ties() {
        let (a, b) = pair();
        assert_eq!(
            resolve_contact(&player(a, 4), &fish(b, 4)),
            ContactOutcome::PlayerEats { prey: b }
        );
    }

    #[test]
    fn bigger_fish_eats_player() {
        let (a, b) = pair();
        assert_eq!(
            resolve_contact(&player(a, 2), &fish(b, 3)),
            ContactOutcome::PlayerEaten
        );
    }

    #[test]
    fn fish_never_resolves_against_player() {
        let (a, b) = pair();
        assert_eq!(resolve_contact(&fish(a, 7), &player(b, 1)), ContactOutcome::Nothing);
    }

    #[test]
    fn eaten_contestants_are_ignored() {
        let (a, b) = pair();
        let mut prey = fish(b, 1);
        prey.out = true;
        assert_eq!(resolve_contact(&fish(a, 5), &prey), ContactOutcome::Nothing);
    }

    #[test]
    fn bubbles_have_no_handler() {
        assert!(contact_handler(EntityKind::Bubble).is_none());
    }
}
