use bevy::prelude::*;
use bevy_kira_audio::prelude::*;
use crate::audio::components::*;
use crate::item::events::ItemHitEvent;

/// System to play the sound cue carried by each item hit.
///
/// Without an asset server or audio channel (headless runs) the cue is only logged.
pub fn play_hit_sounds(
    mut hit_events: MessageReader<ItemHitEvent>,
    asset_server: Option<Res<AssetServer>>,
    channel: Option<Res<AudioChannel<HitSoundChannel>>>,
) {
    for event in hit_events.read() {
        let path = sound_asset_path(&event.hit.sound);
        match (asset_server.as_ref(), channel.as_ref()) {
            (Some(asset_server), Some(channel)) => {
                channel.play(asset_server.load(path)).with_volume(0.6);
            }
            _ => debug!("No audio output, skipping cue {}", path),
        }
    }
}
