//! The operations an array backend must support to build compressed path indices
use core::ops::{Add, RangeBounds};
use num_traits::{One, Zero};

/// Array *kinds*.
/// For example, [`super::vec::VecKind`] is the set of types [`super::vec::VecArray<T>`] for
/// all `T`.
pub trait ArrayKind: Sized {
    /// The type of index *elements*. For [`super::vec::VecKind`], this is [`usize`].
    type I: Clone
        + Copy
        + PartialEq
        + Ord
        + One
        + Zero
        + Add<Output = Self::I>;

    /// Arrays of `I` must implement NaturalArray
    type Index: NaturalArray<Self>;

    /// a `Slice` is a read-only view into another array's data.
    /// For `VecKind` this is `&[T]`.
    type Slice<'a, T: 'a>;
}

/// Arrays of elements T for some [`ArrayKind`] `K`.
///
/// # Panics
///
/// Any operation using an index out of range for the given array will panic.
pub trait Array<K: ArrayKind, T>: Clone + PartialEq<Self> {
    /// The empty array
    fn empty() -> Self;

    /// Length of an array
    fn len(&self) -> K::I;

    /// Test if an array is empty
    fn is_empty(&self) -> bool {
        self.len() == K::I::zero()
    }

    /// Get a contiguous range of the underlying array as a slice.
    fn get_range<R: RangeBounds<K::I>>(&self, rb: R) -> K::Slice<'_, T>;

    /// Gather elements of this array according to the indices.
    /// <https://en.wikipedia.org/wiki/Gather/scatter_(vector_addressing)#Gather>
    /// ```text
    /// x = y.gather(idx)  // x[i] = y[idx[i]]
    /// ```
    fn gather(&self, idx: K::Slice<'_, K::I>) -> Self;
}

/// Arrays of natural numbers.
/// This is used for computing with element *identities*, *degrees*, and *offsets*.
pub trait NaturalArray<K: ArrayKind>: Array<K, K::I> + Sized {
    /// Largest value in the array, or `None` if it is empty.
    fn max(&self) -> Option<K::I>;

    /// An inclusive-and-exclusive cumulative sum
    /// For an input of size `N`, returns an array `x` of size `N+1` where `x[0] = 0` and
    /// `x[-1] = sum(x)`
    fn cumulative_sum(&self) -> Self;

    /// Indices from start to stop
    fn arange(start: &K::I, stop: &K::I) -> Self;

    /// Repeat each element of the given slice.
    /// self and x must be equal lengths.
    fn repeat(&self, x: K::Slice<'_, K::I>) -> Self;

    /// Count occurrences of each value in `0..size`.
    /// Every value of `self` must be less than `size`.
    fn bincount(&self, size: K::I) -> Self;

    /// Indices `i` such that `self[i] != 0`, in ascending order.
    fn nonzero(&self) -> Self;

    /// Stably reorder `self` by the corresponding entries of `key`.
    /// Entries with equal keys keep their relative order.
    fn sort_by(&self, key: &Self) -> Self;

    /// Given an array of *sizes*, compute the segment each position of the flattened array
    /// belongs to.
    /// For example,
    /// `[2 0 3] ⇒ [ 0 0 | | 2 2 2 ]`
    fn segment_ids(&self) -> Self {
        let ids = Self::arange(&K::I::zero(), &self.len());
        self.repeat(ids.get_range(..))
    }
}
