pub mod plugin;
pub mod resources;
pub mod sets;
pub mod systems;

// Re-export public API
pub use plugin::*;
pub use resources::*;
pub use sets::*;
pub use systems::*;
