use rand::Rng;
use crate::config::ItemConfig;
use crate::item::components::*;
use crate::item::error::ItemError;

/// Bonus seconds for each clock tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRewards {
    pub normal: u32,
    pub fast: u32,
}

/// Clock item granting bonus time when caught
#[derive(Clone, Debug)]
pub struct TimeItem {
    base: ItemBase,
    rewards: TimeRewards,
    clock_sound: String,
}

impl TimeItem {
    /// Build an inactive clock limited to the configured clock types
    pub fn new(config: &ItemConfig) -> Self {
        Self {
            base: ItemBase::new(config.clock_types.clone(), config.default_sound.clone()),
            rewards: TimeRewards {
                normal: config.time_normal,
                fast: config.time_fast,
            },
            clock_sound: config.clock_sound.clone(),
        }
    }

    pub fn rewards(&self) -> TimeRewards {
        self.rewards
    }
}

impl Collectible for TimeItem {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn on_init<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ItemError> {
        self.base.item_type = Some(self.base.weighted_random_type(rng)?);
        self.base.reset();

        // Override hit sound
        self.base.sound = self.clock_sound.clone();
        Ok(())
    }

    fn hit(&self, level: u32) -> Result<ItemHit, ItemError> {
        let item_type = self.base.item_type.as_ref().ok_or(ItemError::Inactive)?;
        let time = calculate_time(level, item_type, &self.rewards);
        Ok(self.base.trigger_hit(0, time, format_time(time)))
    }
}

/// Seconds granted for catching a clock of `item_type`.
///
/// `level` does not change the reward yet.
pub fn calculate_time(_level: u32, item_type: &ItemType, rewards: &TimeRewards) -> u32 {
    if item_type.fast {
        rewards.fast
    } else {
        rewards.normal
    }
}

/// Format seconds as `+ MM:SS`. Minutes are not wrapped into hours.
pub fn format_time(seconds: u32) -> String {
    format!("+ {:02}:{:02}", seconds / 60, seconds % 60)
}
