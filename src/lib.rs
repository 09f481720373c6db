pub mod audio;
pub mod config;
pub mod game;
pub mod gift_item;
pub mod item;
pub mod pool;
pub mod prelude;
pub mod states;
pub mod time_item;

pub use game::plugin as game_plugin;
pub use item::plugin as item_plugin;
pub use time_item::plugin as time_item_plugin;
pub use gift_item::plugin as gift_item_plugin;
pub use audio::plugin as audio_plugin;
