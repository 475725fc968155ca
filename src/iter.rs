use std::collections::vec_deque;
use std::iter::{Chain, FusedIterator};

/// An iterator over the elements of a Vec.
///
/// This struct is created by Vec::iter() and Vec::range().
#[derive(Default)]
pub struct Iter<'a, T> {
    delegate: Chain<vec_deque::Iter<'a, T>, vec_deque::Iter<'a, T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: vec_deque::Iter<'a, T>, tail: vec_deque::Iter<'a, T>) -> Self {
        Self {
            delegate: head.chain(tail),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

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

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }

    fn find<P>(&mut self, predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.delegate.find(predicate)
    }

    fn position<P>(&mut self, predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        self.delegate.position(predicate)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
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

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let remaining: std::vec::Vec<_> = self.clone().collect();
        f.debug_tuple("Iter")
            .field(&remaining)
            .field(&remaining.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Vec;

    use super::Iter;

    #[test]
    fn default_iterator_yields_nothing() {
        let mut sut: Iter<'_, i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn iter_forward() {
        let mut vec = Vec::<usize, 2>::from([0, 1, 2, 3, 4]);
        let sut = vec.iter();
        assert_eq!(&sut.copied().collect::<std::vec::Vec<_>>(), &[0, 1, 2, 3, 4]);

        vec.clear();
        let sut = vec.iter();
        assert_eq!(sut.copied().collect::<std::vec::Vec<_>>(), []);
    }

    #[test]
    fn iter_backward() {
        let mut vec = Vec::<usize, 2>::from([0, 1, 2, 3, 4]);
        let sut = vec.iter().rev();
        assert_eq!(&sut.copied().collect::<std::vec::Vec<_>>(), &[4, 3, 2, 1, 0]);

        vec.clear();
        let sut = vec.iter().rev();
        assert_eq!(sut.copied().collect::<std::vec::Vec<_>>(), []);
    }

    #[test]
    fn iter_walks_head_then_tail() {
        let mut vec = Vec::<usize, 1>::with_capacity(4);
        while vec.len() < vec.capacity() {
            vec.push_back(vec.len());
        }
        vec.push_back(vec.len());
        assert!(vec.is_migrating());

        let expected: std::vec::Vec<_> = (0..vec.len()).collect();

        let sut = vec.iter();
        assert_eq!(sut.len(), expected.len());
        assert!(sut.eq(expected.iter()));

        let sut = vec.iter().rev();
        assert!(sut.eq(expected.iter().rev()));
    }

    #[test]
    fn iter_is_restartable() {
        let vec = Vec::<usize, 2>::from([0, 1, 2]);
        assert!(vec.iter().eq(vec.iter()));
        assert_eq!(vec.iter().count(), 3);
        assert_eq!(vec.iter().count(), 3);
    }

    #[test]
    fn double_ended_iterator_works_correctly() {
        let vec = Vec::<usize, 2>::from([0, 1, 2, 3, 4]);

        let mut sut = vec.iter();
        assert_eq!(sut.len(), 5);

        assert_eq!(sut.next(), Some(&0));
        assert_eq!(sut.len(), 4);

        assert_eq!(sut.next_back(), Some(&4));
        assert_eq!(sut.len(), 3);

        assert_eq!(sut.next(), Some(&1));
        assert_eq!(sut.len(), 2);

        assert_eq!(sut.next_back(), Some(&3));
        assert_eq!(sut.len(), 1);

        assert_eq!(sut.next(), Some(&2));
        assert_eq!(sut.len(), 0);

        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn last_works_correctly() {
        let vec = Vec::<usize, 2>::from([0, 1, 2, 3, 4]);
        assert_eq!(vec.iter().last(), Some(&4));
    }

    #[test]
    fn clone_works_correctly() {
        let vec = Vec::<usize, 2>::from([0, 1, 2, 3, 4]);

        let mut base = vec.iter();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<std::vec::Vec<_>>(), &[0, 1, 2, 3, 4]);

        base.next();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<std::vec::Vec<_>>(), &[1, 2, 3, 4]);

        base.next_back();

        let sut = base.clone();
        assert_eq!(&sut.copied().collect::<std::vec::Vec<_>>(), &[1, 2, 3]);
    }

    #[test]
    fn debug_works_correctly() {
        let array = [0, 1, 2, 3, 4];
        let vec = Vec::<usize, 2>::from(array);
        let sut = vec.iter();
        assert_eq!(
            format!("{sut:?}"),
            format!("Iter({:?}, {})", array, array.len())
        );
    }
}
