//! `ob-pool` — entity pools for one-button games.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`pool`]    | `ObjectPool<T>` with reverse visit-then-remove traversal   |
//! | [`map`]     | `PoolMap` — name → `ObjectPool<T>` for any entity type `T` |
//! | [`error`]   | `PoolError`, `PoolResult<T>`                               |
//!
//! # Usage
//!
//! ```rust
//! use ob_pool::PoolMap;
//!
//! struct Rock { x: f64 }
//!
//! let mut pools = PoolMap::new();
//! pools.add("rocks", Rock { x: 100.0 }).unwrap();
//! pools.add("rocks", Rock { x: -5.0 }).unwrap();
//!
//! let rocks = pools.pool_mut::<Rock>("rocks").unwrap();
//! rocks.for_each_and_remove_if(|r, _| r.x -= 1.0, |r, _| r.x < 0.0);
//! assert_eq!(rocks.len(), 1);
//! ```

pub mod error;
pub mod map;
pub mod pool;


pub use error::{PoolError, PoolResult};
pub use map::PoolMap;
pub use pool::ObjectPool;
