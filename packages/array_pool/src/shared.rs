//! Ready-made pools that need no construction.
//!
//! Each thread gets its own default-configured [`ArrayPool`] per item type, created on first
//! use. This is convenient for ad-hoc recycling in code that does not want to thread a pool
//! through its call graph.
//!
//! ```
//! let mut scratch = array_pool::shared::acquire::<Vec<f64>>();
//! scratch.extend([1.0, 2.0, 3.0]);
//!
//! assert_eq!(array_pool::shared::release(scratch), 1);
//! assert_eq!(array_pool::shared::len::<Vec<f64>>(), 1);
//! ```
//!
//! Shared pools always use the default strategies: [`NewEmpty`] creates items and
//! [`ClearContents`] resets them. Use a dedicated [`ArrayPool`] for anything else.
//!
//! Items released on one thread are only handed out again on that same thread. An item may
//! still be moved to another thread and released there, as long as its type allows it.
//!
//! The strategies run outside the pool's bookkeeping, so a `Default` or [`Clear`]
//! implementation may itself use the shared pools, e.g. to recycle nested buffers.

use std::any::{Any, TypeId};
use std::cell::RefCell;

use foldhash::{HashMap, HashMapExt};

use crate::{ArrayPool, Clear, ClearContents, Factory, NewEmpty, Reclaim};

thread_local! {
    // One pool per item type. The values are always `ArrayPool<T>` for the `T` whose
    // `TypeId` is the key.
    static POOLS: RefCell<HashMap<TypeId, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Takes an item from the current thread's shared pool for `T`.
///
/// Returns a new item from [`NewEmpty`] if the pool holds nothing.
///
/// # Examples
///
/// ```
/// let buffer = array_pool::shared::acquire::<Vec<u32>>();
/// assert!(buffer.is_empty());
/// ```
#[must_use]
pub fn acquire<T>() -> T
where
    T: Default + Clear + 'static,
{
    with_pool(ArrayPool::<T>::pop_released).unwrap_or_else(|| NewEmpty.create())
}

/// Empties `item` with [`ClearContents`] and adds it to the current thread's shared pool for
/// `T`.
///
/// Returns the number of items in that pool after the item has been added.
///
/// # Examples
///
/// ```
/// assert_eq!(array_pool::shared::release(vec!['a', 'b']), 1);
/// assert_eq!(array_pool::shared::release(Vec::<char>::new()), 2);
/// ```
pub fn release<T>(mut item: T) -> usize
where
    T: Default + Clear + 'static,
{
    ClearContents.reclaim(&mut item);

    with_pool(|pool: &mut ArrayPool<T>| pool.push_reclaimed(item))
}

/// The number of items in the current thread's shared pool for `T`.
#[must_use]
pub fn len<T>() -> usize
where
    T: Default + Clear + 'static,
{
    POOLS.with_borrow(|pools| {
        pools
            .get(&TypeId::of::<T>())
            .and_then(|pool| pool.downcast_ref::<ArrayPool<T>>())
            .map_or(0, ArrayPool::len)
    })
}

// The borrow is only held for the duration of `f`, which must not call back into user code.
fn with_pool<T, O>(f: impl FnOnce(&mut ArrayPool<T>) -> O) -> O
where
    T: Default + Clear + 'static,
{
    POOLS.with_borrow_mut(|pools| {
        let pool = pools
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ArrayPool::<T>::new()))
            .downcast_mut::<ArrayPool<T>>()
            .expect("shared pools are keyed by the TypeId of their item type");

        f(pool)
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::collections::VecDeque;
    use std::mem;
    use std::thread;

    use super::*;

    /// A container whose vertex buffer is itself recycled through the shared pools.
    #[derive(Debug)]
    struct Mesh {
        vertices: Vec<f32>,
    }

    impl Default for Mesh {
        fn default() -> Self {
            Self {
                vertices: acquire(),
            }
        }
    }

    impl Clear for Mesh {
        fn clear_contents(&mut self) {
            release(mem::take(&mut self.vertices));
        }
    }

    // Each test runs on its own thread, so every test starts with empty shared pools.

    #[test]
    fn acquire_from_fresh_thread_returns_empty_item() {
        let item = acquire::<Vec<u8>>();

        assert!(item.is_empty());
        assert_eq!(len::<Vec<u8>>(), 0);
    }

    #[test]
    fn release_returns_pool_size() {
        assert_eq!(release(Vec::<u8>::new()), 1);
        assert_eq!(release(Vec::<u8>::new()), 2);

        let _item = acquire::<Vec<u8>>();
        assert_eq!(release(Vec::<u8>::new()), 2);
    }

    #[test]
    fn release_clears_and_acquire_reuses() {
        let mut item = acquire::<Vec<u32>>();
        item.extend([1, 2, 3]);
        let address = item.as_ptr();

        release(item);
        let item = acquire::<Vec<u32>>();

        assert!(item.is_empty());
        assert_eq!(item.as_ptr(), address);
    }

    #[test]
    fn item_types_have_separate_pools() {
        release(Vec::<u8>::new());
        release(Vec::<u16>::new());
        release(Vec::<u16>::new());
        release(String::new());

        assert_eq!(len::<Vec<u8>>(), 1);
        assert_eq!(len::<Vec<u16>>(), 2);
        assert_eq!(len::<String>(), 1);
        assert_eq!(len::<Vec<u32>>(), 0);
    }

    #[test]
    fn threads_have_separate_pools() {
        release(Vec::<u8>::new());

        let other_len = thread::spawn(|| {
            assert_eq!(release(Vec::<u8>::new()), 1);
            len::<Vec<u8>>()
        })
        .join()
        .expect("thread completed successfully");

        assert_eq!(other_len, 1);
        assert_eq!(len::<Vec<u8>>(), 1);
    }

    #[test]
    fn shared_pool_is_independent_of_instances() {
        let mut pool = ArrayPool::<Vec<i64>>::new();
        pool.release(Vec::new());
        pool.release(Vec::new());

        assert_eq!(len::<Vec<i64>>(), 0);
        assert_eq!(release(Vec::<i64>::new()), 1);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn strategies_may_use_other_shared_pools() {
        release(Vec::<f32>::with_capacity(16));

        // The mesh takes its vertex buffer from the shared pool.
        let mut mesh = acquire::<Mesh>();
        assert!(mesh.vertices.capacity() >= 16);
        assert_eq!(len::<Vec<f32>>(), 0);
        mesh.vertices.push(1.0);

        // Releasing the mesh hands its vertex buffer back to the shared pool.
        assert_eq!(release(mesh), 1);
        assert_eq!(len::<Vec<f32>>(), 1);
        assert_eq!(len::<Mesh>(), 1);

        // A reused mesh comes back without vertices. A new one takes a buffer from the pool.
        let reused = acquire::<Mesh>();
        let created = acquire::<Mesh>();
        assert!(reused.vertices.is_empty());
        assert!(created.vertices.capacity() >= 16);
        assert_eq!(len::<Vec<f32>>(), 0);
    }

    #[test]
    fn len_does_not_create_pool() {
        assert_eq!(len::<VecDeque<u8>>(), 0);
        assert_eq!(release(VecDeque::<u8>::new()), 1);
    }
}
