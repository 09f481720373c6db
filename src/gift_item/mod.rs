pub mod components;
pub mod plugin;

// Re-export public API
pub use components::*;
pub use plugin::*;
