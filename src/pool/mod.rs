use bevy::prelude::*;
use rand::Rng;
use thiserror::Error;
use crate::item::components::Collectible;
use crate::item::error::ItemError;

/// Capability required of anything kept in a [`Pool`]
pub trait Poolable {
    /// Prepare the instance for another activation
    fn on_init<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ItemError>;

    /// Return the instance to its inactive state
    fn on_release(&mut self);
}

impl<T: Collectible> Poolable for T {
    fn on_init<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ItemError> {
        Collectible::on_init(self, rng)
    }

    fn on_release(&mut self) {
        self.base_mut().release();
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoolError {
    #[error("pool exhausted: all {capacity} instances are in use")]
    Exhausted { capacity: usize },

    #[error("pool overfull: release would exceed capacity {capacity}")]
    Overfull { capacity: usize },

    #[error("failed to initialize pooled instance: {0}")]
    Init(#[from] ItemError),
}

/// Fixed-capacity store of preallocated instances.
///
/// Instances are built once up front; `acquire` hands one out after running
/// its `on_init` hook and `release` takes it back.
#[derive(Resource)]
pub struct Pool<T: Send + Sync + 'static> {
    free: Vec<T>,
    capacity: usize,
}

impl<T: Poolable + Send + Sync + 'static> Pool<T> {
    pub fn with_capacity(capacity: usize, mut factory: impl FnMut() -> T) -> Self {
        Self {
            free: (0..capacity).map(|_| factory()).collect(),
            capacity,
        }
    }

    pub fn acquire<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<T, PoolError> {
        let mut instance = self.free.pop().ok_or(PoolError::Exhausted {
            capacity: self.capacity,
        })?;

        if let Err(err) = instance.on_init(rng) {
            // Keep the slot so a bad config doesn't leak capacity
            instance.on_release();
            self.free.push(instance);
            return Err(err.into());
        }

        Ok(instance)
    }

    pub fn release(&mut self, mut instance: T) -> Result<(), PoolError> {
        if self.free.len() >= self.capacity {
            return Err(PoolError::Overfull {
                capacity: self.capacity,
            });
        }
        instance.on_release();
        self.free.push(instance);
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Instances ready to be acquired
    pub fn available(&self) -> usize {
        self.free.len()
    }

    pub fn in_use(&self) -> usize {
        self.capacity - self.free.len()
    }
}
