use bevy::prelude::*;
use crate::config::ItemConfig;
use crate::game::resources::*;
use crate::game::sets::GameSet;
use crate::game::systems::*;
use crate::states::*;

pub fn plugin(app: &mut App) {
    let start_time = app
        .world()
        .get_resource::<ItemConfig>()
        .map(|config| config.start_time)
        .unwrap_or_else(|| Game::default().time_left);

    app
        .init_state::<GameState>()
        .insert_resource(Game::new(start_time))
        .configure_sets(
            Update,
            (GameSet::Spawning, GameSet::Collection, GameSet::Effects).chain(),
        )
        .add_systems(OnEnter(GameState::InGame), start_game)
        .add_systems(Update, (
            apply_item_hits.in_set(GameSet::Effects),
            count_down.after(GameSet::Effects),
        ).run_if(in_state(GameState::InGame)));
}
