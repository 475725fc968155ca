//! # staged_vec
//!
//! `staged_vec` implements a growable vector that never pays the whole cost of a resize
//! inside a single push.
//!
//! A regular `Vec` doubles its buffer when it runs out of room and moves every element into
//! the new allocation before the push returns. The bigger the vector, the longer that one push
//! takes. This crate instead keeps two generations of storage around while it grows:
//! the *head* holds the elements that were live when the last resize happened, the *tail*
//! is the freshly allocated, larger buffer that receives new elements. Every push then moves a
//! small, fixed batch of `R` elements from the end of the head to the front of the tail, until
//! the head is empty and its memory is released.
//!
//! ## Features
//! - Ordered sequence with index based access, mirroring `Vec`/`VecDeque`.
//! - Worst case cost of a push is `O(R)` plus, once per growth, a single allocation and move.
//! - Same amortized `O(1)` pushes as a conventional dynamic array.
//! - Compile time batch size `R` (between 1 and 8, 5 by default).
//!
//! ## Use Cases
//! `staged_vec` is a good fit when:
//! - The collection keeps growing for the whole lifetime of the program.
//! - Tail latency of individual pushes matters more than raw throughput.
//!
//! ## Example
//! ```rust
//! use staged_vec::Vec;
//!
//! let mut vec: Vec<i64> = Vec::new();
//! vec.push_back(1);
//! vec.push_back(2);
//! vec.push_front(0);
//!
//! assert_eq!(vec.front(), Some(&0));
//! assert_eq!(vec.get(1), Some(&1));
//! assert_eq!(vec.back(), Some(&2));
//!
//! assert_eq!(vec.pop_back(), Some(2));
//! assert_eq!(vec.pop_front(), Some(0));
//! assert_eq!(vec.len(), 1);
//! ```

mod into_iter;
mod iter;
mod iter_mut;
mod sailed;
mod search;

pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Bound, Index, IndexMut, RangeBounds};

pub enum Usize<const N: usize> {}

/// Number of elements moved from the head to the tail on each push.
///
/// Implemented for `Usize<1>` up to `Usize<8>`.
pub trait MigrationBatch: crate::sailed::Sailed {}

/// A growable vector that spreads the cost of resizing over the pushes that follow it.
///
/// # Layout
/// The logical sequence is `head` followed by `tail`.
/// - `head`: the old generation, still draining into `tail`. Empty when no resize is in progress.
/// - `tail`: the active generation, receiving new elements.
///
/// # Type Parameters
/// - `T`: The type of elements stored in the vector.
/// - `R`: The number of elements migrated from `head` to `tail` by each push.
///
/// # Example
/// ```rust
/// use staged_vec::Vec;
///
/// let mut vec: Vec<i64, 2> = Vec::with_capacity(2);
/// vec.push_back(1);
/// vec.push_back(2);
/// vec.push_back(3); // triggers a growth
///
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec, [1, 2, 3]);
/// ```
pub struct Vec<T, const R: usize = 5>
where
    Usize<R>: MigrationBatch,
{
    head: VecDeque<T>,
    tail: VecDeque<T>,
}

impl<T, const R: usize> From<std::vec::Vec<T>> for Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    fn from(values: std::vec::Vec<T>) -> Self {
        Self::from(VecDeque::from(values))
    }
}

impl<T, const R: usize> From<VecDeque<T>> for Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    fn from(values: VecDeque<T>) -> Self {
        Self {
            head: VecDeque::new(),
            tail: values,
        }
    }
}

impl<T, const R: usize, const M: usize> From<[T; M]> for Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    fn from(values: [T; M]) -> Self {
        Self::from(VecDeque::from(values))
    }
}

impl<T, const R: usize> From<Vec<T, R>> for std::vec::Vec<T>
where
    Usize<R>: MigrationBatch,
{
    fn from(values: Vec<T, R>) -> Self {
        let mut out = std::vec::Vec::with_capacity(values.len());
        out.extend(values);
        out
    }
}

impl<T, const R: usize> From<Vec<T, R>> for VecDeque<T>
where
    Usize<R>: MigrationBatch,
{
    fn from(values: Vec<T, R>) -> Self {
        let Vec { mut head, mut tail } = values;
        if head.is_empty() {
            return tail;
        }

        head.append(&mut tail);
        head
    }
}

impl<T, const R: usize> FromIterator<T> for Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<VecDeque<_>>())
    }
}

impl<T, const R: usize> Extend<T> for Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<'a, T, const R: usize> Extend<&'a T> for Vec<T, R>
where
    T: Clone,
    Usize<R>: MigrationBatch,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const R: usize> Default for Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const R: usize> Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    /// Creates a new, empty `Vec` without allocating.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let vec: Vec<i64> = Vec::new();
    ///
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            head: VecDeque::new(),
            tail: VecDeque::new(),
        }
    }

    /// Creates an empty `Vec` with room for at least `capacity` elements.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let vec: Vec<i64> = Vec::with_capacity(10);
    ///
    /// assert!(vec.is_empty());
    /// assert!(vec.capacity() >= 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            head: VecDeque::new(),
            tail: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the `Vec` can hold before the next growth.
    ///
    /// Only the active generation counts: memory still held by a draining head is not
    /// reported.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.tail.capacity()
    }

    /// Returns the number of elements currently stored in the `Vec`.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let mut vec: Vec<i64> = Vec::new();
    /// vec.push_back(1);
    /// vec.push_back(2);
    ///
    /// assert_eq!(vec.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    /// Checks if the `Vec` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.tail.is_empty()
    }

    /// Returns `true` while elements from a previous growth are still being migrated.
    #[inline]
    pub fn is_migrating(&self) -> bool {
        !self.head.is_empty()
    }

    /// Returns a reference to the element at the specified index, if any.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let vec: Vec<i64> = Vec::from([10, 20]);
    ///
    /// assert_eq!(vec.get(0), Some(&10));
    /// assert_eq!(vec.get(1), Some(&20));
    /// assert_eq!(vec.get(2), None); // Out of bounds
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        let head_len = self.head.len();
        if index < head_len {
            return self.head.get(index);
        }

        self.tail.get(index - head_len)
    }

    /// Returns a mutable reference to the element at the specified index, if any.
    ///
    /// The reference borrows the whole `Vec`, so it cannot outlive the next push, pop or
    /// migration step, any of which may move the element.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let mut vec: Vec<i64> = Vec::from([10, 20]);
    ///
    /// if let Some(value) = vec.get_mut(1) {
    ///     *value += 1;
    /// }
    ///
    /// assert_eq!(vec.get(1), Some(&21));
    /// assert_eq!(vec.get_mut(2), None); // Out of bounds
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let head_len = self.head.len();
        if index < head_len {
            return self.head.get_mut(index);
        }

        self.tail.get_mut(index - head_len)
    }

    /// Returns a reference to the first element of the `Vec`, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.front().or_else(|| self.tail.front())
    }

    /// Returns a mutable reference to the first element of the `Vec`, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.head.front_mut() {
            Some(value) => Some(value),
            None => self.tail.front_mut(),
        }
    }

    /// Returns a reference to the last element of the `Vec`, if any.
    pub fn back(&self) -> Option<&T> {
        self.tail.back().or_else(|| self.head.back())
    }

    /// Returns a mutable reference to the last element of the `Vec`, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.tail.back_mut() {
            Some(value) => Some(value),
            None => self.head.back_mut(),
        }
    }

    /// Swaps the elements at indices `i` and `j`.
    ///
    /// # Panics
    /// - Panics if either index is out of bounds.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let mut vec: Vec<i64> = Vec::from([3, 4, 5]);
    /// vec.swap(0, 2);
    ///
    /// assert_eq!(vec, [5, 4, 3]);
    /// ```
    pub fn swap(&mut self, i: usize, j: usize) {
        let len = self.len();
        assert!(i < len, "swap index (is {i}) should be < len (is {len})");
        assert!(j < len, "swap index (is {j}) should be < len (is {len})");

        let head_len = self.head.len();
        match (i < head_len, j < head_len) {
            (true, true) => self.head.swap(i, j),
            (false, false) => self.tail.swap(i - head_len, j - head_len),
            (true, false) => mem::swap(&mut self.head[i], &mut self.tail[j - head_len]),
            (false, true) => mem::swap(&mut self.head[j], &mut self.tail[i - head_len]),
        }
    }

    /// Adds an element to the back of the `Vec`.
    ///
    /// If the tail is full a growth is triggered first; if a previous growth is still
    /// draining, up to `R` elements are migrated afterwards.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let mut vec: Vec<i64> = Vec::new();
    /// vec.push_back(10);
    /// vec.push_back(20);
    ///
    /// assert_eq!(vec.pop_back(), Some(20));
    /// assert_eq!(vec.pop_back(), Some(10));
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.tail.len() == self.tail.capacity() {
            self.grow(1);
        }

        let capacity = self.tail.capacity();
        self.tail.push_back(value);
        debug_assert_eq!(capacity, self.tail.capacity(), "tail reallocated on push");

        self.carry();
    }

    /// Same as [`Vec::push_back`].
    #[inline]
    pub fn push(&mut self, value: T) {
        self.push_back(value)
    }

    /// Adds an element to the front of the `Vec`.
    ///
    /// Without a draining head the element is prepended to the tail. Otherwise it joins
    /// the head, which holds the oldest elements, and a migration step follows.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let mut vec: Vec<i64> = Vec::new();
    /// vec.push_front(10);
    /// vec.push_front(20);
    ///
    /// assert_eq!(vec.pop_front(), Some(20));
    /// assert_eq!(vec.pop_front(), Some(10));
    /// ```
    pub fn push_front(&mut self, value: T) {
        if self.tail.len() == self.tail.capacity() {
            self.grow(1);
        }

        if self.head.is_empty() {
            let capacity = self.tail.capacity();
            self.tail.push_front(value);
            debug_assert_eq!(capacity, self.tail.capacity(), "tail reallocated on push");
            return;
        }

        self.head.push_front(value);
        self.carry();
    }

    /// Removes and returns the first element of the `Vec`, if any.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let mut vec: Vec<i64> = Vec::from([10, 20]);
    ///
    /// assert_eq!(vec.pop_front(), Some(10));
    /// assert_eq!(vec.pop_front(), Some(20));
    /// assert_eq!(vec.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        match self.head.pop_front() {
            Some(value) => {
                self.release_drained_head();
                Some(value)
            }
            None => self.tail.pop_front(),
        }
    }

    /// Removes and returns the last element of the `Vec`, if any.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let mut vec: Vec<i64> = Vec::from([10, 20]);
    ///
    /// assert_eq!(vec.pop_back(), Some(20));
    /// assert_eq!(vec.pop_back(), Some(10));
    /// assert_eq!(vec.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if let Some(value) = self.tail.pop_back() {
            return Some(value);
        }

        let value = self.head.pop_back();
        self.release_drained_head();
        value
    }

    /// Same as [`Vec::pop_back`].
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    /// Moves all elements of `other` to the back of this `Vec`, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        self.extend(mem::take(other));
    }

    /// Reverses the order of the elements in place.
    ///
    /// Any migration in progress is completed as part of the reversal: afterwards all
    /// elements live in the tail.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let mut vec: Vec<i64> = (1..=3).collect();
    /// vec.reverse();
    ///
    /// assert_eq!(vec, [3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        self.tail.make_contiguous().reverse();

        if !self.head.is_empty() {
            let head = mem::take(&mut self.head);
            self.tail.extend(head.into_iter().rev());
        }
    }

    /// Keeps the first `len` elements and drops the rest.
    ///
    /// Does nothing if `len` is greater or equal to the current length.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let mut vec: Vec<i64> = Vec::from([5, 10, 15]);
    /// vec.truncate(1);
    ///
    /// assert_eq!(vec, [5]);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        let head_len = self.head.len();
        if len > head_len {
            self.tail.truncate(len - head_len);
            return;
        }

        if len == head_len && self.tail.is_empty() {
            return;
        }

        self.head.truncate(len);
        mem::swap(&mut self.head, &mut self.tail);
        self.head = VecDeque::new();
    }

    /// Makes sure that at least `additional` more elements can be pushed before the next growth.
    ///
    /// Unlike pushes, a reservation is free to pay the whole cost upfront: any migration in
    /// progress is completed first, then the tail is grown in one go.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let mut vec: Vec<i64> = Vec::from([1]);
    /// vec.reserve(10);
    ///
    /// assert!(vec.capacity() >= 11);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        if self.head.is_empty() && self.tail.capacity() - self.tail.len() >= additional {
            return;
        }

        self.carry_all();

        if self.tail.capacity() - self.tail.len() < additional {
            self.grow(additional);
        }
    }

    /// Shrinking is not supported.
    ///
    /// # Panics
    /// - Always panics.
    pub fn shrink_to_fit(&mut self) {
        self.shrink_to(0);
    }

    /// Shrinking is not supported.
    ///
    /// # Panics
    /// - Always panics.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        unimplemented!("cannot shrink to {min_capacity}: shrinking is not supported")
    }

    /// Removes all elements from the `Vec`.
    ///
    /// The tail keeps its allocation, the head (if any) is released.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let mut vec: Vec<i32> = Vec::from([1, 2, 3]);
    /// vec.clear();
    ///
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.front(), None);
    /// ```
    pub fn clear(&mut self) {
        self.head = VecDeque::new();
        self.tail.clear();
    }

    /// Provides an iterator over the `Vec` elements, front to back.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let vec: Vec<i32> = Vec::from([0, 1, 2]);
    ///
    /// let mut iter = vec.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.iter(), self.tail.iter())
    }

    /// Provides a mutable iterator over the `Vec` elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.iter_mut(), self.tail.iter_mut())
    }

    /// Provides an iterator over the elements in `range`.
    ///
    /// # Panics
    /// - Panics if the start of the range is greater than its end, or if the end is out of bounds.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let vec: Vec<i32> = (0..6).collect();
    ///
    /// assert!(vec.range(2..4).eq(&[2, 3]));
    /// ```
    pub fn range<I>(&self, range: I) -> Iter<'_, T>
    where
        I: RangeBounds<usize>,
    {
        let (start, end) = self.range_start_end(range);
        let head_len = self.head.len();

        Iter::new(
            self.head.range(start.min(head_len)..end.min(head_len)),
            self.tail
                .range(start.saturating_sub(head_len)..end.saturating_sub(head_len)),
        )
    }

    /// Copies the elements in `range` into a new, independent `std::vec::Vec`.
    ///
    /// # Panics
    /// - Panics if the start of the range is greater than its end, or if the end is out of bounds.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let vec: Vec<i32> = (0..6).collect();
    ///
    /// assert_eq!(vec.slice(1..4), vec![1, 2, 3]);
    /// assert_eq!(vec.slice(..), vec![0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn slice<I>(&self, range: I) -> std::vec::Vec<T>
    where
        T: Clone,
        I: RangeBounds<usize>,
    {
        self.range(range).cloned().collect()
    }

    /// Copies all elements into a new `std::vec::Vec`.
    #[inline]
    pub fn to_vec(&self) -> std::vec::Vec<T>
    where
        T: Clone,
    {
        self.slice(..)
    }

    fn range_start_end<I>(&self, range: I) -> (usize, usize)
    where
        I: RangeBounds<usize>,
    {
        let len = self.len();

        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0,
        };

        let end = match range.end_bound() {
            Bound::Included(&n) => n.saturating_add(1),
            Bound::Excluded(&n) => n,
            Bound::Unbounded => len,
        };

        assert!(start <= end, "range starts at {start} but ends at {end}");
        assert!(end <= len, "range end {end} out of range for length {len}");

        (start, end)
    }

    // Moves the live elements into a new head and installs a larger, empty tail.
    //
    // The new tail must fit the `need` elements coming back from the head, the `pushes`
    // that happen while they migrate, and `extra` room for the caller.
    #[cold]
    #[inline(never)]
    fn grow(&mut self, grow_factor: usize) {
        let need = self.len();
        let pushes = need.div_ceil(R);
        let extra = usize::max(pushes, grow_factor);

        let tail_capacity = [extra, pushes, need]
            .into_iter()
            .try_fold(self.tail.capacity(), usize::checked_add)
            .expect("capacity overflow");
        let head_capacity = [extra, pushes, need]
            .into_iter()
            .try_fold(need, usize::checked_add)
            .expect("capacity overflow");

        tracing::trace!(
            need,
            pushes,
            extra,
            tail_capacity,
            head_capacity,
            "growing staged vec"
        );

        let mut head = VecDeque::with_capacity(head_capacity);
        head.append(&mut self.head);
        head.append(&mut self.tail);

        self.head = head;
        self.tail = VecDeque::with_capacity(tail_capacity);
        self.release_drained_head();
    }

    // One migration step: the last `R` head elements move, in order, to the front of the tail.
    #[inline]
    fn carry(&mut self) {
        if self.head.is_empty() {
            return;
        }

        let pending = self.head.len();
        let capacity = self.tail.capacity();
        let spare = capacity - self.tail.len();
        for _ in 0..R.min(spare) {
            match self.head.pop_back() {
                Some(value) => self.tail.push_front(value),
                None => break,
            }
        }

        debug_assert_eq!(capacity, self.tail.capacity(), "tail reallocated on migration");
        debug_assert!(
            spare == 0 || self.head.len() < pending,
            "migration step left the head at {pending} elements"
        );

        self.release_drained_head();
    }

    #[cold]
    #[inline(never)]
    fn carry_all(&mut self) {
        if self.head.is_empty() {
            return;
        }

        tracing::trace!(pending = self.head.len(), "draining staged vec head");

        let mut head = mem::take(&mut self.head);
        self.tail.reserve(head.len());
        while let Some(value) = head.pop_back() {
            self.tail.push_front(value);
        }
    }

    #[inline]
    fn release_drained_head(&mut self) {
        if self.head.is_empty() && self.head.capacity() > 0 {
            self.head = VecDeque::new();
        }
    }
}

impl<T, const R: usize> Index<usize> for Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let len = self.len();
        self.get(index)
            .unwrap_or_else(|| panic!("index out of bounds: the len is {len} but the index is {index}"))
    }
}

impl<T, const R: usize> IndexMut<usize> for Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len();
        self.get_mut(index)
            .unwrap_or_else(|| panic!("index out of bounds: the len is {len} but the index is {index}"))
    }
}

impl<T: Clone, const R: usize> Clone for Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T, const R: usize, const M: usize> PartialEq<[T; M]> for Vec<T, R>
where
    T: PartialEq,
    Usize<R>: MigrationBatch,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const R: usize> PartialEq<&[T]> for Vec<T, R>
where
    T: PartialEq,
    Usize<R>: MigrationBatch,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, const R: usize> PartialEq<[T]> for Vec<T, R>
where
    T: PartialEq,
    Usize<R>: MigrationBatch,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const R: usize> PartialEq<std::vec::Vec<T>> for Vec<T, R>
where
    T: PartialEq,
    Usize<R>: MigrationBatch,
{
    fn eq(&self, other: &std::vec::Vec<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const R: usize> PartialEq for Vec<T, R>
where
    T: PartialEq,
    Usize<R>: MigrationBatch,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T, const R: usize> Eq for Vec<T, R>
where
    T: Eq,
    Usize<R>: MigrationBatch,
{
}

impl<T, const R: usize> PartialOrd for Vec<T, R>
where
    T: PartialOrd,
    Usize<R>: MigrationBatch,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T, const R: usize> Ord for Vec<T, R>
where
    T: Ord,
    Usize<R>: MigrationBatch,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T, const R: usize> Hash for Vec<T, R>
where
    T: Hash,
    Usize<R>: MigrationBatch,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T, const R: usize> std::fmt::Debug for Vec<T, R>
where
    T: std::fmt::Debug,
    Usize<R>: MigrationBatch,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries([&self.head, &self.tail]).finish()
    }
}

impl<T, const R: usize> IntoIterator for Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.head, self.tail)
    }
}

impl<'a, T, const R: usize> IntoIterator for &'a Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const R: usize> IntoIterator for &'a mut Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
