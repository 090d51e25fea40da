//! [`Vec<T>`]-backed arrays
use crate::array::*;
use core::ops::{Bound, Deref, DerefMut, RangeBounds};

/// Arrays backed by a [`Vec<T>`].
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct VecKind {}

impl ArrayKind for VecKind {
    type I = usize;
    type Index = VecArray<usize>;

    // A Slice for Vec is just a rust slice
    type Slice<'a, T: 'a> = &'a [T];
}

/// A newtype wrapper for [`Vec<T>`] allowing whole-array operations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct VecArray<T>(pub Vec<T>);

// VecArray is a newtype wrapper, so we can just treat it like a regular old Vec.
impl<T> Deref for VecArray<T> {
    type Target = Vec<T>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for VecArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Clone + PartialEq> Array<VecKind, T> for VecArray<T> {
    fn empty() -> Self {
        VecArray(Vec::default())
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a contiguous subrange of the array
    ///
    /// ```rust
    /// use graph_paths::array::{*, vec::*};
    /// let v = VecArray(vec![0, 1, 2, 3, 4]);
    /// assert_eq!(v.get_range(..), &[0, 1, 2, 3, 4]);
    /// assert_eq!(v.get_range(1..3), &[1, 2]);
    /// ```
    fn get_range<R: RangeBounds<usize>>(&self, rb: R) -> &[T] {
        let bounds: (Bound<usize>, Bound<usize>) =
            (rb.start_bound().cloned(), rb.end_bound().cloned());
        &self.0[bounds]
    }

    fn gather(&self, idx: &[usize]) -> Self {
        VecArray(idx.iter().map(|i| self.0[*i].clone()).collect())
    }
}

impl NaturalArray<VecKind> for VecArray<usize> {
    fn max(&self) -> Option<usize> {
        self.iter().max().copied()
    }

    /// ```rust
    /// # use graph_paths::array::{*, vec::*};
    /// let input = VecArray(vec![1, 2, 3, 4]);
    /// let expected = VecArray(vec![0, 1, 3, 6, 10]);
    ///
    /// assert_eq!(input.cumulative_sum(), expected);
    /// ```
    fn cumulative_sum(&self) -> Self {
        let mut v = Vec::with_capacity(self.len() + 1);
        let mut a = 0;
        for x in self.iter() {
            v.push(a);
            a += x;
        }
        v.push(a); // don't forget the total sum!
        VecArray(v)
    }

    fn arange(start: &usize, stop: &usize) -> Self {
        assert!(stop >= start, "invalid range [{:?}, {:?})", start, stop);
        VecArray((*start..*stop).collect())
    }

    /// ```rust
    /// # use graph_paths::array::{*, vec::*};
    /// let repeats: VecArray<usize> = VecArray(vec![1, 2, 0, 3]);
    /// let values: &[usize] = &[5, 6, 7, 8];
    /// let actual = repeats.repeat(values);
    /// let expected = VecArray::<usize>(vec![5, 6, 6, 8, 8, 8]);
    /// assert_eq!(actual, expected);
    /// ```
    fn repeat(&self, x: &[usize]) -> VecArray<usize> {
        assert_eq!(self.len(), x.len());
        let mut v: Vec<usize> = Vec::new();
        for (k, xi) in self.iter().zip(x) {
            v.extend(std::iter::repeat(*xi).take(*k))
        }
        VecArray(v)
    }

    fn bincount(&self, size: usize) -> VecArray<usize> {
        let mut counts = vec![0; size];
        for &idx in self.iter() {
            counts[idx] += 1;
        }
        VecArray(counts)
    }

    fn nonzero(&self) -> VecArray<usize> {
        VecArray(
            self.iter()
                .enumerate()
                .filter(|(_, x)| **x != 0)
                .map(|(i, _)| i)
                .collect(),
        )
    }

    /// ```rust
    /// # use graph_paths::array::{*, vec::*};
    /// let values = VecArray(vec![10, 11, 12, 13]);
    /// let key = VecArray(vec![2, 0, 2, 0]);
    /// assert_eq!(values.sort_by(&key), VecArray(vec![11, 13, 10, 12]));
    /// ```
    fn sort_by(&self, key: &VecArray<usize>) -> VecArray<usize> {
        assert_eq!(self.len(), key.len());
        // sort_by_key is stable, which fixes the order within each key
        let mut indices = (0..self.len()).collect::<Vec<_>>();
        indices.sort_by_key(|&i| key[i]);
        self.gather(&indices)
    }
}
