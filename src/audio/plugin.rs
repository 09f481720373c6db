use bevy::prelude::*;
use bevy_kira_audio::prelude::*;
use crate::audio::components::*;
use crate::audio::systems::*;
use crate::game::sets::GameSet;

/// Hit cue playback.
///
/// Opt-in for windowed builds: it needs `bevy_kira_audio::AudioPlugin` and an
/// asset server, so the headless demo leaves it out.
pub fn plugin(app: &mut App) {
    app
        .add_audio_channel::<HitSoundChannel>()
        .add_systems(Update, play_hit_sounds.in_set(GameSet::Effects));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::events::ItemHitEvent;

    #[test]
    fn test_plugin_registers_hit_channel() {
        let mut app = App::new();
        app.add_message::<ItemHitEvent>();
        app.add_plugins(plugin);

        assert!(app.world().contains_resource::<AudioChannel<HitSoundChannel>>());
    }
}
