use std::sync::mpsc;
use std::thread;

use crate::{MigrationBatch, Usize, Vec};

impl<T, const R: usize> Vec<T, R>
where
    Usize<R>: MigrationBatch,
{
    /// Returns the index of the first element matching `predicate`, if any.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let vec: Vec<i32> = Vec::from([1, 2, 3, 2]);
    ///
    /// assert_eq!(vec.position(|v| *v == 2), Some(1));
    /// assert_eq!(vec.position(|v| *v == 4), None);
    /// ```
    pub fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(|value| predicate(value))
    }

    /// Same as [`Vec::position`], but walks head and tail side by side.
    ///
    /// Both halves are visited in lock-step for as long as the longer one lasts.
    /// The result is always the lowest matching index, exactly as with [`Vec::position`].
    pub fn position_interleaved<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let head_len = self.head.len();
        let steps = usize::max(head_len, self.tail.len());

        let mut tail_match = None;
        for step in 0..steps {
            match self.head.get(step) {
                Some(value) => {
                    if predicate(value) {
                        return Some(step);
                    }
                }
                None if tail_match.is_some() => break,
                None => {}
            }

            if tail_match.is_none() {
                if let Some(value) = self.tail.get(step) {
                    if predicate(value) {
                        tail_match = Some(head_len + step);
                    }
                }
            }
        }

        tail_match
    }

    /// Looks for an element matching `predicate`, scanning head and tail on two threads.
    ///
    /// Whichever scan reports a match first wins, so the returned index is *a* matching
    /// index, not necessarily the lowest one. Both scans always run to completion or to
    /// their first match before this method returns.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let vec: Vec<i32> = (0..100).collect();
    ///
    /// assert_eq!(vec.par_position(|v| *v == 42), Some(42));
    /// assert_eq!(vec.par_position(|v| *v == 100), None);
    /// ```
    pub fn par_position<P>(&self, predicate: P) -> Option<usize>
    where
        T: Sync,
        P: Fn(&T) -> bool + Sync,
    {
        if self.head.is_empty() {
            return self.tail.iter().position(&predicate);
        }

        let (sender, receiver) = mpsc::channel();
        let segments = [(0, &self.head), (self.head.len(), &self.tail)];

        thread::scope(|scope| {
            for (offset, segment) in segments {
                let sender = sender.clone();
                let predicate = &predicate;
                scope.spawn(move || {
                    let found = segment.iter().position(predicate).map(|i| offset + i);
                    sender.send(found).ok();
                });
            }

            drop(sender);
            receiver.iter().flatten().next()
        })
    }

    /// Returns `true` if the `Vec` contains an element equal to `value`.
    ///
    /// # Example
    /// ```rust
    /// use staged_vec::Vec;
    ///
    /// let vec: Vec<i32> = Vec::from([1, 2, 3]);
    ///
    /// assert!(vec.contains(&2));
    /// assert!(!vec.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.head.contains(value) || self.tail.contains(value)
    }

    /// Returns `true` if any element matches `predicate`.
    pub fn contains_by<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.position(predicate).is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use quickcheck_macros::quickcheck;

    use crate::{MigrationBatch, Usize, Vec};

    fn staged<const R: usize>(head: &[i32], tail: &[i32]) -> Vec<i32, R>
    where
        Usize<R>: MigrationBatch,
    {
        Vec {
            head: head.iter().copied().collect::<VecDeque<_>>(),
            tail: tail.iter().copied().collect::<VecDeque<_>>(),
        }
    }

    #[test]
    fn test_position_on_empty_vec() {
        let sut: Vec<i32> = Vec::new();
        assert_eq!(sut.position(|_| true), None);
        assert_eq!(sut.position_interleaved(|_| true), None);
        assert_eq!(sut.par_position(|_| true), None);
        assert!(!sut.contains(&0));
        assert!(!sut.contains_by(|_| true));
    }

    #[test]
    fn test_position_returns_lowest_index() {
        let sut = staged::<5>(&[7, 1, 7], &[7, 2, 7, 3]);
        assert_eq!(sut.position(|v| *v == 7), Some(0));
        assert_eq!(sut.position(|v| *v == 2), Some(4));
        assert_eq!(sut.position(|v| *v == 3), Some(6));
        assert_eq!(sut.position(|v| *v == 9), None);
    }

    #[test]
    fn test_position_interleaved_prefers_head_matches() {
        // the tail match at step 0 is seen before the head match at step 2
        let sut = staged::<5>(&[0, 0, 1, 0], &[1, 0]);
        assert_eq!(sut.position_interleaved(|v| *v == 1), Some(2));

        let sut = staged::<5>(&[0, 0], &[0, 0, 0, 1, 1]);
        assert_eq!(sut.position_interleaved(|v| *v == 1), Some(5));

        let sut = staged::<5>(&[0, 0, 0, 0, 1], &[1]);
        assert_eq!(sut.position_interleaved(|v| *v == 1), Some(4));

        let sut = staged::<5>(&[0, 0, 0, 0, 0], &[0, 1]);
        assert_eq!(sut.position_interleaved(|v| *v == 1), Some(6));
    }

    #[test]
    fn test_par_position_finds_elements_in_both_halves() {
        let sut = staged::<5>(&[0, 1, 2], &[3, 4, 5]);
        assert_eq!(sut.par_position(|v| *v == 1), Some(1));
        assert_eq!(sut.par_position(|v| *v == 5), Some(5));
        assert_eq!(sut.par_position(|v| *v == 6), None);

        let sut = staged::<5>(&[9, 0], &[9, 1]);
        let found = sut.par_position(|v| *v == 9);
        assert!(found == Some(0) || found == Some(2), "{found:?}");
    }

    #[test]
    fn test_contains_looks_in_head_and_tail() {
        let sut = staged::<5>(&[1, 2], &[3]);
        assert!(sut.contains(&1));
        assert!(sut.contains(&3));
        assert!(!sut.contains(&4));
        assert!(sut.contains_by(|v| *v > 2));
        assert!(!sut.contains_by(|v| *v > 3));
    }

    #[quickcheck]
    fn test_search_strategies_agree(head: std::vec::Vec<i8>, tail: std::vec::Vec<i8>, needle: i8) {
        let head: std::vec::Vec<i32> = head.into_iter().map(i32::from).collect();
        let tail: std::vec::Vec<i32> = tail.into_iter().map(i32::from).collect();
        let needle = i32::from(needle);

        let sut = staged::<3>(&head, &tail);
        let expected = head.iter().chain(&tail).position(|v| *v == needle);

        assert_eq!(sut.position(|v| *v == needle), expected);
        assert_eq!(sut.position_interleaved(|v| *v == needle), expected);
        assert_eq!(sut.contains(&needle), expected.is_some());

        match sut.par_position(|v| *v == needle) {
            Some(index) => assert_eq!(sut.get(index), Some(&needle)),
            None => assert_eq!(expected, None),
        }
    }
}
