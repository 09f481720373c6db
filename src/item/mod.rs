pub mod components;
pub mod error;
pub mod events;
pub mod plugin;
pub mod systems;
pub mod weighted;

// Re-export public API
pub use components::*;
pub use error::*;
pub use events::*;
pub use plugin::*;
pub use systems::*;
pub use weighted::*;
