use rand::Rng;
use crate::config::ItemConfig;
use crate::item::components::*;
use crate::item::error::ItemError;

/// Present item granting score when caught. Keeps the default hit sound.
#[derive(Clone, Debug)]
pub struct GiftItem {
    base: ItemBase,
}

impl GiftItem {
    pub fn new(config: &ItemConfig) -> Self {
        Self {
            base: ItemBase::new(config.gift_types.clone(), config.default_sound.clone()),
        }
    }
}

impl Collectible for GiftItem {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn on_init<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ItemError> {
        self.base.item_type = Some(self.base.weighted_random_type(rng)?);
        self.base.reset();
        Ok(())
    }

    fn hit(&self, _level: u32) -> Result<ItemHit, ItemError> {
        let item_type = self.base.item_type.as_ref().ok_or(ItemError::Inactive)?;
        let score = item_type.score;
        Ok(self.base.trigger_hit(score, 0, format!("+{}", score)))
    }
}
