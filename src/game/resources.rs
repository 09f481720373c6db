use bevy::prelude::*;

/// State of the running game that items report into
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Game {
    /// Current level, 0-based
    pub level: u32,
    pub score: u32,
    /// Seconds left before the game ends
    pub time_left: f32,
}

impl Game {
    pub fn new(start_time: f32) -> Self {
        Self {
            level: 0,
            score: 0,
            time_left: start_time,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(60.0)
    }
}
