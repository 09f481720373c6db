pub use bevy::prelude::*;
pub use crate::states::*;
pub use crate::config::*;

// Re-export item kinds and their building blocks
pub use crate::item::components::*;
pub use crate::item::error::*;
pub use crate::item::events::*;
pub use crate::item::weighted::*;
pub use crate::pool::*;
pub use crate::time_item::components::*;
pub use crate::gift_item::components::*;
pub use crate::game::resources::*;
pub use crate::game::sets::*;

// Re-export systems
pub use crate::item::systems::*;
pub use crate::game::systems::*;
pub use crate::audio::systems::*;
