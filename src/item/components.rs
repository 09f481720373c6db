use std::marker::PhantomData;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use crate::item::error::ItemError;
use crate::item::weighted::weighted_choice;

/// Immutable descriptor for one variant of an item kind
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ItemType {
    pub name: String,
    /// Selects the higher reward tier
    #[serde(default)]
    pub fast: bool,
    /// Relative likelihood in the weighted draw
    pub weight: f32,
    /// Score granted on catch (unused by clocks)
    #[serde(default)]
    pub score: u32,
}

impl ItemType {
    pub fn new(name: impl Into<String>, fast: bool, weight: f32) -> Self {
        Self {
            name: name.into(),
            fast,
            weight,
            score: 0,
        }
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }
}

/// What a caught item reports to the owning game
#[derive(Clone, Debug, PartialEq)]
pub struct ItemHit {
    pub score: u32,
    /// Bonus time in seconds
    pub time: u32,
    pub label: String,
    pub sound: String,
}

/// Shared state for every pooled item kind.
///
/// `item_type` is `Some` exactly while the item is out of its pool.
#[derive(Clone, Debug)]
pub struct ItemBase {
    pub types: Vec<ItemType>,
    pub item_type: Option<ItemType>,
    pub sound: String,
    default_sound: String,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Elapsed game time when the item was last spawned
    pub spawned_at: f32,
}

impl ItemBase {
    pub fn new(types: Vec<ItemType>, default_sound: impl Into<String>) -> Self {
        let default_sound = default_sound.into();
        Self {
            types,
            item_type: None,
            sound: default_sound.clone(),
            default_sound,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            spawned_at: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.item_type.is_some()
    }

    /// Clear transient state. The assigned type is left alone.
    pub fn reset(&mut self) {
        self.position = Vec2::ZERO;
        self.velocity = Vec2::ZERO;
        self.spawned_at = 0.0;
        self.sound = self.default_sound.clone();
    }

    /// Draw a type from `types` weighted by each type's weight
    pub fn weighted_random_type<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ItemType, ItemError> {
        weighted_choice(&self.types, |t| t.weight, rng).cloned()
    }

    /// Build the catch notification carrying this item's sound cue
    pub fn trigger_hit(&self, score: u32, time: u32, label: impl Into<String>) -> ItemHit {
        ItemHit {
            score,
            time,
            label: label.into(),
            sound: self.sound.clone(),
        }
    }

    /// Return to the inactive state held inside a pool
    pub fn release(&mut self) {
        self.item_type = None;
        self.reset();
    }
}

/// A catchable item kind layered on [`ItemBase`]
pub trait Collectible {
    fn base(&self) -> &ItemBase;

    fn base_mut(&mut self) -> &mut ItemBase;

    /// Called every time the item leaves its pool
    fn on_init<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ItemError>;

    /// Resolve the catch effect for the current game level
    fn hit(&self, level: u32) -> Result<ItemHit, ItemError>;
}

/// Holds a live pooled item on its entity until it is caught or recycled
#[derive(Component, Debug)]
pub struct Pooled<T: Collectible + Send + Sync + 'static>(pub Option<T>);

impl<T: Collectible + Send + Sync + 'static> Pooled<T> {
    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

/// Shortest spawn interval a spawner accepts
pub const MIN_SPAWN_INTERVAL: f32 = 0.05;

/// Repeating spawn timer for one item kind
#[derive(Resource)]
pub struct ItemSpawner<T: 'static> {
    pub timer: Timer,
    _kind: PhantomData<fn() -> T>,
}

impl<T: 'static> ItemSpawner<T> {
    /// Intervals below [`MIN_SPAWN_INTERVAL`] (and NaN) are raised to it
    pub fn new(interval_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval_secs.max(MIN_SPAWN_INTERVAL), TimerMode::Repeating),
            _kind: PhantomData,
        }
    }
}

/// Random source shared by spawners and type draws
#[derive(Resource)]
pub struct ItemRng(pub StdRng);

impl ItemRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for ItemRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_types() -> Vec<ItemType> {
        vec![
            ItemType::new("clock", false, 3.0),
            ItemType::new("clock-fast", true, 1.0),
        ]
    }

    #[test]
    fn test_new_base_is_inactive() {
        let base = ItemBase::new(clock_types(), "jetpack_score");
        assert!(!base.is_active());
        assert!(base.item_type.is_none());
        assert_eq!(base.sound, "jetpack_score");
    }

    #[test]
    fn test_reset_restores_default_sound_and_keeps_type() {
        let mut base = ItemBase::new(clock_types(), "jetpack_score");
        base.item_type = Some(clock_types()[0].clone());
        base.sound = "jetpack_clock".to_string();
        base.position = Vec2::new(10.0, 20.0);
        base.velocity = Vec2::new(0.0, -5.0);
        base.spawned_at = 3.5;

        base.reset();

        assert_eq!(base.sound, "jetpack_score");
        assert_eq!(base.position, Vec2::ZERO);
        assert_eq!(base.velocity, Vec2::ZERO);
        assert_eq!(base.spawned_at, 0.0);
        assert!(base.is_active());
    }

    #[test]
    fn test_release_clears_type() {
        let mut base = ItemBase::new(clock_types(), "jetpack_score");
        base.item_type = Some(clock_types()[1].clone());
        base.release();
        assert!(!base.is_active());
    }

    #[test]
    fn test_trigger_hit_carries_current_sound() {
        let mut base = ItemBase::new(clock_types(), "jetpack_score");
        base.sound = "jetpack_clock".to_string();
        let hit = base.trigger_hit(0, 5, "+ 00:05");
        assert_eq!(
            hit,
            ItemHit {
                score: 0,
                time: 5,
                label: "+ 00:05".to_string(),
                sound: "jetpack_clock".to_string(),
            }
        );
    }

    #[test]
    fn test_weighted_random_type_on_empty_set_fails() {
        let base = ItemBase::new(Vec::new(), "jetpack_score");
        let mut rng = ItemRng::seeded(3);
        assert_eq!(base.weighted_random_type(&mut rng.0), Err(ItemError::EmptyTypeSet));
    }

    #[test]
    fn test_spawner_clamps_bad_intervals() {
        for interval in [0.0, -1.0, f32::NAN] {
            let spawner = ItemSpawner::<ItemBase>::new(interval);
            let secs = spawner.timer.duration().as_secs_f32();
            assert!((secs - MIN_SPAWN_INTERVAL).abs() < 1e-6, "interval {} was not clamped", secs);
        }
        let spawner = ItemSpawner::<ItemBase>::new(2.0);
        assert_eq!(spawner.timer.duration().as_secs_f32(), 2.0);
    }

    #[test]
    fn test_item_type_deserializes_with_defaults() {
        let item_type: ItemType = toml::from_str("name = \"clock\"\nweight = 2.5").unwrap();
        assert_eq!(item_type, ItemType::new("clock", false, 2.5));
    }
}
