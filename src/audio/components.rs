use bevy::prelude::*;

/// Audio channel for item hit cues
#[derive(Resource)]
pub struct HitSoundChannel;

/// Asset path for a hit sound cue id
pub fn sound_asset_path(sound: &str) -> String {
    format!("sounds/{}.ogg", sound)
}
