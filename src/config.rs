//! Item configuration, loadable from TOML

use std::path::Path;
use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;
use crate::item::components::ItemType;
use crate::item::error::ItemError;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid item types in `{field}`: {source}")]
    Types {
        field: &'static str,
        #[source]
        source: ItemError,
    },

    #[error("Pool capacity must be at least 1")]
    ZeroCapacity,

    #[error("`{field}` must be a positive number of seconds, got {value}")]
    SpawnInterval { field: &'static str, value: f32 },

    #[error("`{field}` must be finite and not negative, got {value}")]
    NegativeOrNonFinite { field: &'static str, value: f32 },
}

/// Tunables for every item kind. Missing TOML keys keep their defaults.
#[derive(Resource, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ItemConfig {
    pub clock_types: Vec<ItemType>,
    pub gift_types: Vec<ItemType>,
    /// Seconds granted by a normal clock
    pub time_normal: u32,
    /// Seconds granted by a fast clock
    pub time_fast: u32,
    pub default_sound: String,
    pub clock_sound: String,
    /// Instances preallocated per item kind
    pub pool_capacity: usize,
    pub clock_spawn_interval: f32,
    pub gift_spawn_interval: f32,
    pub spawn_half_width: f32,
    pub spawn_height: f32,
    pub fall_speed: f32,
    /// Seconds on the clock when a game starts
    pub start_time: f32,
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            clock_types: vec![
                ItemType::new("clock", false, 3.0),
                ItemType::new("clock-fast", true, 1.0),
            ],
            gift_types: vec![
                ItemType::new("gift-small", false, 6.0).with_score(10),
                ItemType::new("gift-large", false, 3.0).with_score(25),
                ItemType::new("gift-fast", true, 1.0).with_score(50),
            ],
            time_normal: 5,
            time_fast: 10,
            default_sound: "jetpack_score".to_string(),
            clock_sound: "jetpack_clock".to_string(),
            pool_capacity: 16,
            clock_spawn_interval: 4.0,
            gift_spawn_interval: 1.0,
            spawn_half_width: 400.0,
            spawn_height: 300.0,
            fall_speed: 120.0,
            start_time: 60.0,
        }
    }
}

impl ItemConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Reject configurations the weighted draw or the spawners could never satisfy
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_types(&self.clock_types).map_err(|source| ConfigError::Types {
            field: "clock_types",
            source,
        })?;
        check_types(&self.gift_types).map_err(|source| ConfigError::Types {
            field: "gift_types",
            source,
        })?;
        if self.pool_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        for (field, value) in [
            ("clock_spawn_interval", self.clock_spawn_interval),
            ("gift_spawn_interval", self.gift_spawn_interval),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::SpawnInterval { field, value });
            }
        }
        for (field, value) in [
            ("spawn_half_width", self.spawn_half_width),
            ("spawn_height", self.spawn_height),
            ("fall_speed", self.fall_speed),
            ("start_time", self.start_time),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeOrNonFinite { field, value });
            }
        }
        Ok(())
    }
}

fn check_types(types: &[ItemType]) -> Result<(), ItemError> {
    if types.is_empty() {
        return Err(ItemError::EmptyTypeSet);
    }
    if let Some(bad) = types.iter().find(|t| !t.weight.is_finite() || t.weight < 0.0) {
        return Err(ItemError::InvalidWeight(format!("{} has weight {}", bad.name, bad.weight)));
    }
    if types.iter().all(|t| t.weight == 0.0) {
        return Err(ItemError::ZeroWeights);
    }
    Ok(())
}
