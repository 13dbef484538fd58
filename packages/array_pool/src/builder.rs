use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::{ArrayPool, ClearContents, NewEmpty};

/// Builder for creating an instance of [`ArrayPool`].
///
/// Both strategies are optional. Whatever you do not set keeps its default: [`NewEmpty`] for the
/// factory and [`ClearContents`] for the reclaim strategy. The default configuration used by
/// [`ArrayPool::new()`][1] is sufficient for pools of plain `Vec`s.
///
/// # Examples
///
/// A pool of 4x4 identity matrices:
///
/// ```
/// use array_pool::ArrayPool;
///
/// fn identity() -> Vec<f32> {
///     let mut m = vec![0.0; 16];
///     m[0] = 1.0;
///     m[5] = 1.0;
///     m[10] = 1.0;
///     m[15] = 1.0;
///     m
/// }
///
/// let mut matrices = ArrayPool::builder()
///     .factory(identity)
///     .reclaim(|m: &mut Vec<f32>| m.copy_from_slice(&identity()))
///     .initial_capacity(64)
///     .build();
///
/// let m = matrices.acquire();
/// assert_eq!(m.len(), 16);
/// ```
///
/// [1]: ArrayPool::new
#[must_use]
pub struct ArrayPoolBuilder<T, F = NewEmpty, R = ClearContents> {
    factory: F,
    reclaim: R,
    initial_capacity: usize,

    _item: PhantomData<fn() -> T>,
}

impl<T, F, R> fmt::Debug for ArrayPoolBuilder<T, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayPoolBuilder")
            .field("item_type", &format_args!("{}", type_name::<T>()))
            .field("factory", &format_args!("{}", type_name::<F>()))
            .field("reclaim", &format_args!("{}", type_name::<R>()))
            .field("initial_capacity", &self.initial_capacity)
            .finish_non_exhaustive()
    }
}

impl<T> ArrayPoolBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            factory: NewEmpty,
            reclaim: ClearContents,
            initial_capacity: 0,
            _item: PhantomData,
        }
    }
}

impl<T, F, R> ArrayPoolBuilder<T, F, R> {
    /// Sets the [factory][crate::Factory] that creates items when the pool is empty.
    ///
    /// The factory is stored as given and can be inspected later via [`ArrayPool::factory()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use array_pool::ArrayPool;
    ///
    /// let mut pool = ArrayPool::builder()
    ///     .factory(|| Vec::<u8>::with_capacity(1024))
    ///     .build();
    ///
    /// assert!(pool.acquire().capacity() >= 1024);
    /// ```
    pub fn factory<F2>(self, factory: F2) -> ArrayPoolBuilder<T, F2, R> {
        ArrayPoolBuilder {
            factory,
            reclaim: self.reclaim,
            initial_capacity: self.initial_capacity,
            _item: PhantomData,
        }
    }

    /// Sets the [reclaim strategy][crate::Reclaim] that resets items when they are released.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_pool::ArrayPool;
    ///
    /// let mut vectors = ArrayPool::builder()
    ///     .factory(|| vec![0_i32; 3])
    ///     .reclaim(|v: &mut Vec<i32>| v.fill(0))
    ///     .build();
    ///
    /// let mut v = vectors.acquire();
    /// v[2] = 9;
    /// vectors.release(v);
    ///
    /// assert_eq!(vectors.acquire(), [0, 0, 0]);
    /// ```
    pub fn reclaim<R2>(self, reclaim: R2) -> ArrayPoolBuilder<T, F, R2> {
        ArrayPoolBuilder {
            factory: self.factory,
            reclaim,
            initial_capacity: self.initial_capacity,
            _item: PhantomData,
        }
    }

    /// Reserves room for `capacity` released items up front.
    ///
    /// This only sizes the pool's internal storage. No items are created.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Builds the pool with the specified configuration.
    #[must_use]
    pub fn build(self) -> ArrayPool<T, F, R> {
        ArrayPool::new_inner(self.factory, self.reclaim, self.initial_capacity)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(ArrayPoolBuilder<Vec<u8>>: Send, Sync, fmt::Debug);

    #[test]
    fn builder_new_uses_default_strategies() {
        let builder = ArrayPoolBuilder::<Vec<u8>>::new();

        assert_eq!(builder.factory, NewEmpty);
        assert_eq!(builder.reclaim, ClearContents);
        assert_eq!(builder.initial_capacity, 0);
    }

    #[test]
    fn omitted_reclaim_keeps_default() {
        let builder = ArrayPoolBuilder::<Vec<u8>>::new().factory(|| vec![1_u8]);

        assert_eq!(builder.reclaim, ClearContents);
    }

    #[test]
    fn omitted_factory_keeps_default() {
        let builder = ArrayPoolBuilder::<Vec<u8>>::new().reclaim(Vec::<u8>::clear);

        assert_eq!(builder.factory, NewEmpty);
    }

    #[test]
    fn settings_survive_strategy_changes() {
        let builder = ArrayPoolBuilder::<Vec<u8>>::new()
            .initial_capacity(32)
            .factory(Vec::<u8>::new)
            .reclaim(Vec::<u8>::clear);

        assert_eq!(builder.initial_capacity, 32);
    }

    #[test]
    fn initial_capacity_reserves_storage() {
        let pool = ArrayPoolBuilder::<Vec<u8>>::new()
            .initial_capacity(16)
            .build();

        assert!(pool.capacity() >= 16);
        assert!(pool.is_empty());
    }

    #[test]
    fn initial_capacity_can_be_overridden() {
        let builder = ArrayPoolBuilder::<Vec<u8>>::new()
            .initial_capacity(8)
            .initial_capacity(2);

        assert_eq!(builder.initial_capacity, 2);
    }

    #[test]
    fn builder_is_debug() {
        let builder = ArrayPoolBuilder::<Vec<u32>>::new();
        let debug_output = format!("{builder:?}");

        assert!(debug_output.contains("ArrayPoolBuilder"));
        assert!(debug_output.contains("Vec<u32>"));
        assert!(debug_output.contains("NewEmpty"));
    }
}
