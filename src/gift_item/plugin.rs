use bevy::prelude::*;
use crate::config::ItemConfig;
use crate::gift_item::components::GiftItem;
use crate::game::sets::GameSet;
use crate::item::components::ItemSpawner;
use crate::item::systems::*;
use crate::pool::Pool;
use crate::states::*;

pub fn plugin(app: &mut App) {
    let config = app.world().get_resource::<ItemConfig>().cloned().unwrap_or_default();

    app
        .insert_resource(Pool::with_capacity(config.pool_capacity, || GiftItem::new(&config)))
        .insert_resource(ItemSpawner::<GiftItem>::new(config.gift_spawn_interval))
        .add_systems(
            Update,
            (
                (
                    spawn_items::<GiftItem>,
                    update_item_movement::<GiftItem>,
                    release_fallen_items::<GiftItem>,
                )
                    .chain()
                    .in_set(GameSet::Spawning),
                resolve_item_catches::<GiftItem>.in_set(GameSet::Collection),
            )
                .run_if(in_state(GameState::InGame))
        )
        .add_systems(OnExit(GameState::InGame), release_all_items::<GiftItem>);
}
