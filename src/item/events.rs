use bevy::prelude::*;
use crate::item::components::ItemHit;

/// Message written by the collision collaborator when the player touches an item
#[derive(Message, Debug, Clone, Copy)]
pub struct ItemCaughtEvent {
    pub item_entity: Entity,
}

/// Message fired once a caught item has resolved its reward
#[derive(Message, Debug, Clone)]
pub struct ItemHitEvent {
    pub item_entity: Entity,
    pub hit: ItemHit,
}
