use core::iter::FusedIterator;
use std::collections::{VecDeque, vec_deque};
use std::iter::Chain;

/// An owning iterator over the elements of a Vec.
///
/// This struct is created by Vec::into_iter().
#[derive(Clone)]
pub struct IntoIter<T> {
    delegate: Chain<vec_deque::IntoIter<T>, vec_deque::IntoIter<T>>,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self::new(VecDeque::new(), VecDeque::new())
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn new(head: VecDeque<T>, tail: VecDeque<T>) -> Self {
        Self {
            delegate: head.into_iter().chain(tail),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }

    fn last(self) -> Option<Self::Item> {
        self.delegate.last()
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.delegate.count()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n)
    }

    fn for_each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.delegate.for_each(f);
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth_back(n)
    }

    fn rfold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.rfold(init, f)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> core::fmt::Debug for IntoIter<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.delegate)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use quickcheck_macros::quickcheck;

    use crate::{MigrationBatch, Usize, Vec};

    use super::IntoIter;

    #[test]
    fn test_default_iterator_yields_nothing() {
        let mut sut: IntoIter<i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn test_iter_forward() {
        let seed = [];
        let vec = Vec::<usize, 2>::from(seed);
        assert!(seed.into_iter().eq(vec.into_iter()));

        let seed = [0, 1, 2, 3, 4];
        let vec = Vec::<usize, 2>::from(seed);
        assert!(seed.into_iter().eq(vec.into_iter()));
    }

    #[test]
    fn test_iter_backward() {
        let seed = [];
        let vec = Vec::<usize, 2>::from(seed);
        assert!(seed.into_iter().rev().eq(vec.into_iter().rev()));

        let seed = [0, 1, 2, 3, 4];
        let vec = Vec::<usize, 2>::from(seed);
        assert!(seed.into_iter().rev().eq(vec.into_iter().rev()));
    }

    #[test]
    fn test_double_ended_iterator_works_correctly() {
        let vec = Vec::<usize, 2>::from([0, 1, 2, 3, 4]);

        let mut sut = vec.into_iter();
        assert_eq!(sut.len(), 5);
        assert_eq!(sut.next(), Some(0));
        assert_eq!(sut.next_back(), Some(4));
        assert_eq!(sut.next(), Some(1));
        assert_eq!(sut.next_back(), Some(3));
        assert_eq!(sut.next(), Some(2));
        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn test_last_works_correctly() {
        let vec = Vec::<usize, 2>::from([0, 1, 2, 3, 4]);
        assert_eq!(vec.into_iter().last(), Some(4));
    }

    #[test]
    fn test_clone_works_correctly() {
        let vec = Vec::<usize, 2>::from([0, 1, 2, 3, 4]);

        let mut base = vec.into_iter();

        let sut = base.clone();
        assert_eq!(&sut.collect::<std::vec::Vec<_>>(), &[0, 1, 2, 3, 4]);

        base.next();

        let sut = base.clone();
        assert_eq!(&sut.collect::<std::vec::Vec<_>>(), &[1, 2, 3, 4]);

        base.next_back();

        let sut = base.clone();
        assert_eq!(&sut.collect::<std::vec::Vec<_>>(), &[1, 2, 3]);
    }

    #[quickcheck]
    fn test_into_iter_behavioural(seed: std::vec::Vec<i32>) {
        fn _test<const R: usize>(expected: &[i32])
        where
            Usize<R>: MigrationBatch,
        {
            // built through pushes so that part of the elements may still sit in the head
            let mut actual = Vec::<_, R>::with_capacity(1);
            actual.extend(expected.iter().copied());

            assert!(actual.clone().into_iter().eq(expected.iter().copied()));
            assert!(
                actual
                    .clone()
                    .into_iter()
                    .rev()
                    .eq(expected.iter().copied().rev())
            );
            assert_eq!(
                actual
                    .clone()
                    .into_iter()
                    .partial_cmp(expected.iter().copied()),
                Some(Ordering::Equal)
            );
            assert_eq!(actual.clone().into_iter().count(), expected.len());
            assert_eq!(
                actual.clone().into_iter().max(),
                expected.iter().copied().max()
            );
            assert_eq!(
                actual.clone().into_iter().min(),
                expected.iter().copied().min()
            );
            assert_eq!(
                actual.clone().into_iter().collect::<Vec<_, R>>(),
                actual
            );

            let mut sut = actual.into_iter();
            let mut remaining = expected.len();
            while sut.next().is_some() {
                remaining -= 1;
                assert_eq!(sut.len(), remaining);
            }
        }

        _test::<1>(&seed);
        _test::<2>(&seed);
        _test::<3>(&seed);
        _test::<4>(&seed);
        _test::<5>(&seed);
        _test::<6>(&seed);
        _test::<7>(&seed);
        _test::<8>(&seed);
    }
}
