use std::any::type_name;
use std::fmt;

use tracing::{debug, trace};

use crate::{ArrayPoolBuilder, Clear, ClearContents, Factory, NewEmpty, Reclaim};

/// An unbounded pool of reusable arrays (or any other item type).
///
/// [`acquire()`][1] hands out the most recently released item, or asks the [factory][Factory]
/// for a new one when the pool is empty. [`release()`][2] resets the item with the
/// [reclaim strategy][Reclaim] and stores it for the next `acquire()`. The pool never creates
/// items ahead of time and never discards them on its own.
///
/// The pool only knows about items that have been released and not yet re-acquired. It does
/// not track items that are checked out, so dropping an acquired item instead of releasing it
/// is fine and simply means the pool has one item fewer to reuse.
///
/// # Examples
///
/// ```
/// use array_pool::ArrayPool;
///
/// let mut pool = ArrayPool::<Vec<f32>>::new();
///
/// // The pool is empty, so this creates a new Vec.
/// let mut buffer = pool.acquire();
/// buffer.extend([1.0, 2.0, 3.0]);
///
/// // Releasing clears the Vec and reports how many items the pool now holds.
/// assert_eq!(pool.release(buffer), 1);
///
/// // The next acquire reuses the same allocation.
/// let buffer = pool.acquire();
/// assert!(buffer.is_empty());
/// assert!(buffer.capacity() >= 3);
/// ```
///
/// # Thread safety
///
/// All operations take `&mut self` and the pool performs no internal locking. The pool is
/// [`Send`] if the items and both strategies are; wrap it in a mutex to share it between
/// threads.
///
/// [1]: Self::acquire
/// [2]: Self::release
pub struct ArrayPool<T, F = NewEmpty, R = ClearContents> {
    /// Released items, used as a stack. The last item released is the first one handed out.
    items: Vec<T>,

    factory: F,
    reclaim: R,
}

impl<T> ArrayPool<T>
where
    T: Default + Clear,
{
    /// Creates a new [`ArrayPool`] with the default strategies.
    ///
    /// New items come from [`Default`] and released items are emptied in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_pool::ArrayPool;
    ///
    /// let pool = ArrayPool::<Vec<u64>>::new();
    ///
    /// assert_eq!(pool.len(), 0);
    /// assert!(pool.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }
}

impl<T> ArrayPool<T> {
    /// Starts building a new [`ArrayPool`].
    ///
    /// Use this when you want a custom factory or reclaim strategy, or want to size the pool's
    /// storage in advance.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_pool::ArrayPool;
    ///
    /// let mut pool = ArrayPool::builder()
    ///     .factory(|| vec![0_u8; 4])
    ///     .build();
    ///
    /// assert_eq!(pool.acquire(), [0, 0, 0, 0]);
    /// ```
    pub fn builder() -> ArrayPoolBuilder<T> {
        ArrayPoolBuilder::new()
    }
}

impl<T, F, R> ArrayPool<T, F, R> {
    pub(crate) fn new_inner(factory: F, reclaim: R, initial_capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(initial_capacity),
            factory,
            reclaim,
        }
    }

    /// The number of released items currently waiting to be reused.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_pool::ArrayPool;
    ///
    /// let mut pool = ArrayPool::<Vec<i32>>::new();
    /// assert_eq!(pool.len(), 0);
    ///
    /// pool.release(Vec::new());
    /// pool.release(Vec::new());
    /// assert_eq!(pool.len(), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool holds no items, meaning the next [`acquire()`][1] will create one.
    ///
    /// [1]: Self::acquire
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many items the pool can hold before its internal storage has to grow.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The factory this pool uses to create new items.
    ///
    /// This is the exact value given to [`ArrayPoolBuilder::factory()`], or [`NewEmpty`] if no
    /// factory was set.
    #[must_use]
    #[inline]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// The reclaim strategy this pool applies to released items.
    ///
    /// This is the exact value given to [`ArrayPoolBuilder::reclaim()`], or [`ClearContents`] if
    /// no reclaim strategy was set.
    #[must_use]
    #[inline]
    pub fn reclaim(&self) -> &R {
        &self.reclaim
    }

    /// Drops all items held by the pool.
    ///
    /// Items that are currently checked out are not affected and may still be released later.
    pub fn clear(&mut self) {
        debug!(
            item_type = type_name::<T>(),
            dropped = self.items.len(),
            "clearing pool"
        );

        self.items.clear();
    }

    /// Releases unused internal storage.
    ///
    /// This only affects the pool's own bookkeeping, not the items it holds. Call
    /// [`clear()`][1] first to also drop the items.
    ///
    /// [1]: Self::clear
    #[cfg_attr(test, mutants::skip)] // Capacity after shrinking is up to the allocator. No API contract.
    pub fn shrink_to_fit(&mut self) {
        debug!(
            item_type = type_name::<T>(),
            len = self.items.len(),
            capacity = self.items.capacity(),
            "shrinking pool storage"
        );

        self.items.shrink_to_fit();
    }

    /// Removes the most recently released item, if any, without involving the factory.
    pub(crate) fn pop_released(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Stores an item that has already been reclaimed and returns the new pool size.
    pub(crate) fn push_reclaimed(&mut self, item: T) -> usize {
        self.items.push(item);

        let len = self.items.len();
        trace!(item_type = type_name::<T>(), len, "item released to pool");

        len
    }
}

impl<T, F, R> ArrayPool<T, F, R>
where
    F: Factory<T>,
    R: Reclaim<T>,
{
    /// Takes an item from the pool, creating a new one if the pool is empty.
    ///
    /// Items come back in reverse release order: the most recently released item is returned
    /// first, as it is the most likely to still be in cache.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_pool::ArrayPool;
    ///
    /// let mut pool = ArrayPool::<Vec<u8>>::new();
    ///
    /// pool.release(Vec::with_capacity(10));
    /// pool.release(Vec::with_capacity(20));
    ///
    /// assert!(pool.acquire().capacity() >= 20);
    /// assert!(pool.acquire().capacity() >= 10);
    /// ```
    ///
    /// # Panics
    ///
    /// If the factory panics, the panic propagates to the caller and the pool is unchanged.
    #[must_use]
    pub fn acquire(&mut self) -> T {
        if let Some(item) = self.pop_released() {
            return item;
        }

        trace!(item_type = type_name::<T>(), "pool empty, creating new item");

        self.factory.create()
    }

    /// Resets an item with the reclaim strategy and adds it to the pool.
    ///
    /// Returns the number of items in the pool after the item has been added.
    ///
    /// The item does not need to have come from this pool. Any value of the right type is
    /// accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_pool::ArrayPool;
    ///
    /// let mut pool = ArrayPool::<Vec<u8>>::new();
    ///
    /// assert_eq!(pool.release(vec![1, 2, 3]), 1);
    /// assert_eq!(pool.release(Vec::new()), 2);
    ///
    /// let _item = pool.acquire();
    /// assert_eq!(pool.release(Vec::new()), 2);
    /// ```
    ///
    /// # Panics
    ///
    /// If the reclaim strategy panics, the panic propagates to the caller. The item is not added
    /// to the pool in that case.
    pub fn release(&mut self, mut item: T) -> usize {
        self.reclaim.reclaim(&mut item);
        self.push_reclaimed(item)
    }
}

impl<T> Default for ArrayPool<T>
where
    T: Default + Clear,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F, R> fmt::Debug for ArrayPool<T, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayPool")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("len", &self.items.len())
            .field("capacity", &self.items.capacity())
            .field("factory", &format_args!("{}", type_name::<F>()))
            .field("reclaim", &format_args!("{}", type_name::<R>()))
            .finish_non_exhaustive()
    }
}
