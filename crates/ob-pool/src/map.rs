//! Named, heterogeneous pool registry.
//!
//! # Design
//!
//! Games register arbitrary named pools during init ("obstacles", "coins",
//! "particles", …), each holding its own entity type.  Every pool is stored
//! as a `Box<dyn ErasedPool>` keyed by name and downcast back to
//! `ObjectPool<T>` on access.  A lookup with the wrong `T` simply misses.
//!
//! Names are kept in a `BTreeMap` so iteration order (and therefore anything
//! derived from it, such as debug listings) is deterministic.

use std::any::{Any, type_name};
use std::collections::BTreeMap;

use crate::{ObjectPool, PoolError, PoolResult};

// ── Trait object ──────────────────────────────────────────────────────────────

/// Type-erased interface for an `ObjectPool<T>`.
///
/// Sealed via the private `Sealed` supertrait; only `ObjectPool<T>`
/// implements it.
pub trait ErasedPool: 'static + sealed::Sealed {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Name of the entity type, for diagnostics.
    fn entity_type(&self) -> &'static str;

    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;

    #[doc(hidden)]
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

mod sealed {
    pub trait Sealed {}
}

impl<T: 'static> sealed::Sealed for ObjectPool<T> {}

impl<T: 'static> ErasedPool for ObjectPool<T> {
    fn len(&self) -> usize {
        ObjectPool::len(self)
    }

    fn clear(&mut self) {
        ObjectPool::clear(self);
    }

    fn entity_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ── PoolMap ───────────────────────────────────────────────────────────────────

/// Registry of named object pools, one entity type per name.
#[derive(Default)]
pub struct PoolMap {
    map: BTreeMap<String, Box<dyn ErasedPool>>,
}

impl PoolMap {
    pub fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    /// Register an empty pool of `T` under `name` and return it.
    ///
    /// Registering the same name twice with the same `T` is a no-op that
    /// returns the existing pool.  Reusing a name for a different entity type
    /// is an error.
    pub fn register<T: 'static>(&mut self, name: &str) -> PoolResult<&mut ObjectPool<T>> {
        let slot = self
            .map
            .entry(name.to_owned())
            .or_insert_with(|| Box::new(ObjectPool::<T>::new()));

        let found = slot.entity_type();
        slot.as_any_mut()
            .downcast_mut::<ObjectPool<T>>()
            .ok_or_else(|| PoolError::TypeMismatch {
                name: name.to_owned(),
                requested: type_name::<T>(),
                found,
            })
    }

    /// Append `entity` to the pool `name`, registering the pool on first use.
    pub fn add<T: 'static>(&mut self, name: &str, entity: T) -> PoolResult<&mut T> {
        Ok(self.register::<T>(name)?.add(entity))
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// The pool registered under `name`, if it holds `T`.
    pub fn pool<T: 'static>(&self, name: &str) -> Option<&ObjectPool<T>> {
        self.map
            .get(name)
            .and_then(|p| p.as_any().downcast_ref::<ObjectPool<T>>())
    }

    /// Mutable access to the pool registered under `name`, if it holds `T`.
    pub fn pool_mut<T: 'static>(&mut self, name: &str) -> Option<&mut ObjectPool<T>> {
        self.map
            .get_mut(name)
            .and_then(|p| p.as_any_mut().downcast_mut::<ObjectPool<T>>())
    }

    /// Entity count of pool `name` regardless of its entity type.
    pub fn entity_count(&self, name: &str) -> Option<usize> {
        self.map.get(name).map(|p| p.len())
    }

    // ── Metadata ──────────────────────────────────────────────────────────

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of registered pools.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Registered pool names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }

    // ── Reset ─────────────────────────────────────────────────────────────

    /// Empty every pool but keep the registrations.
    pub fn clear_all(&mut self) {
        for pool in self.map.values_mut() {
            pool.clear();
        }
    }

    /// Drop every pool and registration.
    pub fn reset(&mut self) {
        self.map.clear();
    }
}

impl std::fmt::Debug for PoolMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.map.iter().map(|(k, v)| (k, v.len())))
            .finish()
    }
}
