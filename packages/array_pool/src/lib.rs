#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! An object pool that recycles arrays and other containers to reduce allocation churn in hot
//! loops, such as the per-frame vector and matrix buffers of a rendering or simulation loop.
//!
//! This crate provides [`ArrayPool`], an unbounded stack of released items with two
//! customization points:
//!
//! * A [factory][Factory] that creates a new item when the pool is empty. By default this is
//!   [`NewEmpty`], which uses [`Default`].
//! * A [reclaim strategy][Reclaim] that resets an item when it is released. By default this is
//!   [`ClearContents`], which truncates the container to zero length while keeping its
//!   allocation.
//!
//! Any closure or function with the right signature works as either strategy.
//!
//! For ad-hoc use there is also a set of [`shared`] pools, one per item type per thread, that
//! need no construction at all.
//!
//! # Examples
//!
//! Recycling scratch buffers with the default strategies:
//!
//! ```
//! use array_pool::ArrayPool;
//!
//! let mut pool = ArrayPool::<Vec<f32>>::new();
//!
//! for frame in 0..3 {
//!     let mut vertices = pool.acquire();
//!     vertices.extend([frame as f32; 64]);
//!
//!     // ... render the frame ...
//!
//!     // The returned number is the count of items now waiting in the pool.
//!     assert_eq!(pool.release(vertices), 1);
//! }
//! ```
//!
//! A pool of fixed-size point vectors that are zeroed rather than emptied:
//!
//! ```
//! use array_pool::ArrayPool;
//!
//! let mut points = ArrayPool::builder()
//!     .factory(|| vec![0.0_f64, 0.0])
//!     .reclaim(|point: &mut Vec<f64>| {
//!         point[0] = 0.0;
//!         point[1] = 0.0;
//!     })
//!     .build();
//!
//! let mut point = points.acquire();
//! point[0] = 3.0;
//! points.release(point);
//!
//! assert_eq!(points.acquire(), [0.0, 0.0]);
//! ```
//!
//! # Ownership
//!
//! [`release()`][ArrayPool::release] takes the item by value, so an item cannot be used after
//! it has been released or be released twice. If the item type is itself a shared handle such
//! as `Rc<RefCell<Vec<T>>>`, the pool does not check whether the same handle is released more
//! than once; that remains the caller's responsibility.

mod builder;
mod pool;
pub mod shared;
mod strategy;

pub use builder::*;
pub use pool::*;
pub use strategy::*;
