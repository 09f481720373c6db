use bevy::prelude::*;
use crate::config::ItemConfig;
use crate::game::resources::Game;
use crate::item::events::ItemHitEvent;
use crate::states::GameState;

/// System to reset score and clock when a game starts. The level is kept.
pub fn start_game(mut game: ResMut<Game>, config: Option<Res<ItemConfig>>) {
    let start_time = config.map(|c| c.start_time).unwrap_or_else(|| Game::default().time_left);
    game.score = 0;
    game.time_left = start_time;
    info!("Game started at level {} with {:.0}s on the clock", game.level, start_time);
}

/// System to add score and bonus time from caught items
pub fn apply_item_hits(mut hit_events: MessageReader<ItemHitEvent>, mut game: ResMut<Game>) {
    for event in hit_events.read() {
        game.score = game.score.saturating_add(event.hit.score);
        game.time_left += event.hit.time as f32;
        info!("Caught item {}", event.hit.label);
    }
}

/// System to drain the game clock and end the game when it runs out
pub fn count_down(
    time: Res<Time>,
    mut game: ResMut<Game>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    game.time_left = (game.time_left - time.delta_secs()).max(0.0);

    if game.time_left <= 0.0 {
        info!("Time is up, final score {}", game.score);
        next_state.set(GameState::GameOver);
    }
}
