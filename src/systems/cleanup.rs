//! End-of-frame despawning.
//!
//! Eaten fish and finished bubbles leave the coordinators before they leave
//! the world, so no later scan ever resolves a dead entity.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::bubble::Bubble;
use crate::components::fish::Fish;
use crate::components::mapposition::MapPosition;
use crate::resources::areacoordinator::AreaCoordinator;
use crate::resources::collisioncoordinator::CollisionCoordinator;
use crate::resources::session::Session;

pub fn despawn_eaten_fish_system(
    mut commands: Commands,
    fish: Query<(Entity, &Fish)>,
    mut collisions: ResMut<CollisionCoordinator>,
    mut areas: ResMut<AreaCoordinator>,
    mut session: ResMut<Session>,
) {
    for (entity, f) in fish.iter() {
        if !f.eaten {
            continue;
        }
        collisions.deregister(entity);
        areas.forget(entity);
        session.on_eaten_fish_removed();
        commands.entity(entity).despawn();
        debug!("eaten {:?} removed", f.species);
    }
}

/// Remove bubbles that burst or reached the surface.
pub fn despawn_bubbles_system(
    mut commands: Commands,
    bubbles: Query<(Entity, &Bubble, &MapPosition)>,
    mut areas: ResMut<AreaCoordinator>,
) {
    for (entity, bubble, position) in bubbles.iter() {
        if bubble.burst || position.pos.y <= 0.0 {
            areas.deregister(entity);
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::collisionbox::CollisionBox;
    use crate::components::fish::FishSpecies;
    use crate::components::triggerarea::TriggerArea;
    use glam::Vec2;

    fn make_world() -> World {
        let mut world = World::new();
        world.insert_resource(CollisionCoordinator::new());
        world.insert_resource(AreaCoordinator::new());
        world.insert_resource(Session::default());
        world
    }

    #[test]
    fn eaten_fish_leave_world_and_coordinator() {
        let mut world = make_world();
        let spawn = |world: &mut World, eaten: bool| {
            let mut fish = Fish::new(FishSpecies::Grey, 1, Vec2::ZERO, 6.0);
            fish.eaten = eaten;
            let e = world.spawn(fish).id();
            world
                .entity_mut(e)
                .insert(CollisionBox::centered(e, Vec2::ZERO, Vec2::splat(10.0)));
            world.resource_mut::<CollisionCoordinator>().register(e);
            e
        };
        let alive = spawn(&mut world, false);
        let eaten = spawn(&mut world, true);

        let mut schedule = Schedule::default();
        schedule.add_systems(despawn_eaten_fish_system);
        schedule.run(&mut world);

        assert!(world.get_entity(eaten).is_err());
        assert!(world.get_entity(alive).is_ok());
        assert_eq!(world.resource::<CollisionCoordinator>().registered(), &[alive]);
    }

    #[test]
    fn burst_and_surfaced_bubbles_are_removed() {
        let mut world = make_world();
        let mut burst = Bubble::new(100.0, 2.0, 1.0);
        burst.burst = true;
        let rows = [
            (burst, Vec2::new(100.0, 500.0)),
            (Bubble::new(100.0, 2.0, 1.0), Vec2::new(100.0, 0.0)),
            (Bubble::new(100.0, 2.0, 1.0), Vec2::new(100.0, 500.0)),
        ];
        let ids: Vec<Entity> = rows
            .into_iter()
            .map(|(bubble, pos)| {
                let e = world
                    .spawn((bubble, MapPosition::from(pos), TriggerArea::square(pos, 32.0)))
                    .id();
                world.resource_mut::<AreaCoordinator>().register(e);
                e
            })
            .collect();

        let mut schedule = Schedule::default();
        schedule.add_systems(despawn_bubbles_system);
        schedule.run(&mut world);

        assert!(world.get_entity(ids[0]).is_err());
        assert!(world.get_entity(ids[1]).is_err());
        assert!(world.get_entity(ids[2]).is_ok());
        let areas: Vec<Entity> = world.resource::<AreaCoordinator>().registered().collect();
        assert_eq!(areas, vec![ids[2]]);
    }
}
