use bevy::prelude::*;
use crate::config::ItemConfig;
use crate::game::sets::GameSet;
use crate::item::components::ItemSpawner;
use crate::item::systems::*;
use crate::pool::Pool;
use crate::states::*;
use crate::time_item::components::TimeItem;

/// Registers the clock pool, its spawner and catch handling.
///
/// Reads `ItemConfig` if it was inserted before this plugin.
pub fn plugin(app: &mut App) {
    let config = app.world().get_resource::<ItemConfig>().cloned().unwrap_or_default();

    app
        .insert_resource(Pool::with_capacity(config.pool_capacity, || TimeItem::new(&config)))
        .insert_resource(ItemSpawner::<TimeItem>::new(config.clock_spawn_interval))
        .add_systems(
            Update,
            (
                (
                    spawn_items::<TimeItem>,
                    update_item_movement::<TimeItem>,
                    release_fallen_items::<TimeItem>,
                )
                    .chain()
                    .in_set(GameSet::Spawning),
                resolve_item_catches::<TimeItem>.in_set(GameSet::Collection),
            )
                .run_if(in_state(GameState::InGame))
        )
        .add_systems(OnExit(GameState::InGame), release_all_items::<TimeItem>);
}
