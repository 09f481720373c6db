use bevy::prelude::*;
use crate::item::components::ItemRng;
use crate::item::events::*;

pub fn plugin(app: &mut App) {
    app
        .add_message::<ItemCaughtEvent>()
        .add_message::<ItemHitEvent>()
        // A seeded ItemRng inserted before this plugin is kept
        .init_resource::<ItemRng>();
}
