use std::collections::VecDeque;

use smallvec::{Array, SmallVec};

/// Creates new items when an [`ArrayPool`][crate::ArrayPool] has nothing to hand out.
///
/// Any `FnMut() -> T` closure or function is a factory, so most callers never implement this
/// trait by hand. The pool stores the factory as-is, without boxing or wrapping it.
///
/// # Examples
///
/// ```
/// use array_pool::ArrayPool;
///
/// // A pool of 2D points that start at the origin.
/// let mut points = ArrayPool::builder().factory(|| vec![0.0_f32, 0.0]).build();
///
/// let point = points.acquire();
/// assert_eq!(point, [0.0, 0.0]);
/// ```
pub trait Factory<T> {
    /// Creates and initializes a new item.
    fn create(&mut self) -> T;
}

impl<T, F> Factory<T> for F
where
    F: FnMut() -> T,
{
    #[inline]
    fn create(&mut self) -> T {
        self()
    }
}

/// Resets an item to a reusable state before an [`ArrayPool`][crate::ArrayPool] stores it.
///
/// Any `FnMut(&mut T)` closure or function is a reclaim strategy. The item is modified in place,
/// so its allocation survives the round trip through the pool.
///
/// # Examples
///
/// ```
/// use array_pool::ArrayPool;
///
/// // Points keep their two coordinates, which are zeroed instead of discarded.
/// let mut points = ArrayPool::builder()
///     .factory(|| vec![0.0_f32, 0.0])
///     .reclaim(|point: &mut Vec<f32>| point.fill(0.0))
///     .build();
///
/// let mut point = points.acquire();
/// point[0] = 4.0;
/// point[1] = 2.0;
/// points.release(point);
///
/// assert_eq!(points.acquire(), [0.0, 0.0]);
/// ```
pub trait Reclaim<T> {
    /// Resets `item` in place so it can be handed out again.
    fn reclaim(&mut self, item: &mut T);
}

impl<T, R> Reclaim<T> for R
where
    R: FnMut(&mut T),
{
    #[inline]
    fn reclaim(&mut self, item: &mut T) {
        self(item);
    }
}

/// The default [`Factory`]: a fresh, empty container from [`Default`].
///
/// Every call returns a distinct value with its own storage (for `Vec`, no storage at all
/// until the first push).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct NewEmpty;

impl<T> Factory<T> for NewEmpty
where
    T: Default,
{
    #[inline]
    fn create(&mut self) -> T {
        T::default()
    }
}

/// The default [`Reclaim`] strategy: truncates the container to zero length via [`Clear`].
///
/// The contents are dropped but the container keeps its allocation, which is the whole point
/// of pooling it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct ClearContents;

impl<T> Reclaim<T> for ClearContents
where
    T: Clear,
{
    #[inline]
    fn reclaim(&mut self, item: &mut T) {
        item.clear_contents();
    }
}

/// A container that can be emptied in place without giving up its allocation.
///
/// Implement this for your own container types to use them with the default
/// [`ClearContents`] strategy and with the [`shared`][crate::shared] pools.
pub trait Clear {
    /// Removes all contents, leaving a zero-length container with unchanged capacity.
    fn clear_contents(&mut self);
}

impl<E> Clear for Vec<E> {
    #[inline]
    fn clear_contents(&mut self) {
        self.clear();
    }
}

impl<E> Clear for VecDeque<E> {
    #[inline]
    fn clear_contents(&mut self) {
        self.clear();
    }
}

impl Clear for String {
    #[inline]
    fn clear_contents(&mut self) {
        self.clear();
    }
}

impl<A> Clear for SmallVec<A>
where
    A: Array,
{
    #[inline]
    fn clear_contents(&mut self) {
        self.clear();
    }
}
