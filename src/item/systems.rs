use bevy::prelude::*;
use rand::Rng;
use crate::config::ItemConfig;
use crate::game::resources::Game;
use crate::item::components::*;
use crate::item::events::*;
use crate::pool::Pool;

/// System to pull items out of the pool whenever the kind's spawn timer fires
pub fn spawn_items<T>(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<ItemConfig>,
    mut spawner: ResMut<ItemSpawner<T>>,
    mut pool: ResMut<Pool<T>>,
    mut rng: ResMut<ItemRng>,
) where
    T: Collectible + Send + Sync + 'static,
{
    spawner.timer.tick(time.delta());

    for _ in 0..spawner.timer.times_finished_this_tick() {
        let mut item = match pool.acquire(&mut rng.0) {
            Ok(item) => item,
            Err(err) => {
                warn!("Skipping item spawn: {}", err);
                continue;
            }
        };

        let half_width = config.spawn_half_width.max(0.0);
        let x = rng.0.gen_range(-half_width..=half_width);
        let base = item.base_mut();
        base.position = Vec2::new(x, config.spawn_height);
        base.velocity = Vec2::new(0.0, -config.fall_speed);
        base.spawned_at = time.elapsed_secs();

        debug!(
            "Spawned {} item at {:?}",
            base.item_type.as_ref().map(|t| t.name.as_str()).unwrap_or("untyped"),
            base.position
        );

        let translation = base.position.extend(0.0);
        commands.spawn((Pooled(Some(item)), Transform::from_translation(translation)));
    }
}

/// System to move live items along their velocity and keep the transform in step
pub fn update_item_movement<T>(time: Res<Time>, mut items: Query<(&mut Pooled<T>, &mut Transform)>)
where
    T: Collectible + Send + Sync + 'static,
{
    let dt = time.delta_secs();
    for (mut pooled, mut transform) in items.iter_mut() {
        let Some(item) = pooled.0.as_mut() else {
            continue;
        };
        let base = item.base_mut();
        base.position += base.velocity * dt;
        transform.translation.x = base.position.x;
        transform.translation.y = base.position.y;
    }
}

/// System to return items that fell past the bottom of the play area.
///
/// The floor mirrors the spawn line at `-spawn_height`.
pub fn release_fallen_items<T>(
    mut commands: Commands,
    config: Res<ItemConfig>,
    mut items: Query<(Entity, &mut Pooled<T>)>,
    mut pool: ResMut<Pool<T>>,
) where
    T: Collectible + Send + Sync + 'static,
{
    let floor = -config.spawn_height;
    for (entity, mut pooled) in items.iter_mut() {
        let fallen = pooled.get().is_some_and(|item| item.base().position.y < floor);
        if !fallen {
            continue;
        }
        if let Some(item) = pooled.0.take() {
            if let Err(err) = pool.release(item) {
                warn!("Could not return fallen item to its pool: {}", err);
            }
        }
        commands.entity(entity).despawn();
    }
}

/// System to resolve catches reported by the collision collaborator.
///
/// Each caught item reports its reward, goes back to its pool, and its
/// entity is despawned. Events for other kinds or stale entities are ignored.
pub fn resolve_item_catches<T>(
    mut commands: Commands,
    mut caught_events: MessageReader<ItemCaughtEvent>,
    mut items: Query<&mut Pooled<T>>,
    mut pool: ResMut<Pool<T>>,
    game: Res<Game>,
    mut hit_events: MessageWriter<ItemHitEvent>,
) where
    T: Collectible + Send + Sync + 'static,
{
    for event in caught_events.read() {
        let Ok(mut pooled) = items.get_mut(event.item_entity) else {
            continue;
        };
        let Some(item) = pooled.0.take() else {
            continue;
        };

        match item.hit(game.level) {
            Ok(hit) => {
                hit_events.write(ItemHitEvent {
                    item_entity: event.item_entity,
                    hit,
                });
            }
            Err(err) => warn!("Caught item could not resolve its reward: {}", err),
        }

        if let Err(err) = pool.release(item) {
            warn!("Could not return caught item to its pool: {}", err);
        }
        commands.entity(event.item_entity).despawn();
    }
}

/// System to return every live item of a kind to its pool
pub fn release_all_items<T>(
    mut commands: Commands,
    mut items: Query<(Entity, &mut Pooled<T>)>,
    mut pool: ResMut<Pool<T>>,
) where
    T: Collectible + Send + Sync + 'static,
{
    for (entity, mut pooled) in items.iter_mut() {
        if let Some(item) = pooled.0.take() {
            if let Err(err) = pool.release(item) {
                warn!("Could not return item to its pool: {}", err);
            }
        }
        commands.entity(entity).despawn();
    }
}
