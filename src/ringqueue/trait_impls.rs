use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::{Index, IndexMut};

use super::RingQueue;

impl<T> Default for RingQueue<T> {
    #[inline]
    fn default() -> Self {
        RingQueue::new()
    }
}

impl<T> PartialEq for RingQueue<T>
    where T: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
impl<'a, T> PartialEq<&'a [T]> for RingQueue<T> where T: PartialEq {
    fn eq(&self, other: &&'a [T]) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}

#[cfg(test)]
impl<T> PartialEq<Vec<T>> for RingQueue<T> where T: PartialEq {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == &other[..]
    }
}

impl<T> Eq for RingQueue<T> where T: Eq {}

impl<T> PartialOrd for RingQueue<T>
    where T: PartialOrd
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for RingQueue<T>
    where T: Ord
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for RingQueue<T>
    where T: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for RingQueue<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(element) => element,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

impl<T> IndexMut<usize> for RingQueue<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

/// Builds a queue whose backing store holds exactly the given elements, front
/// first. An empty vector gives an empty queue with a single slot.
impl<T> From<Vec<T>> for RingQueue<T> {
    fn from(elements: Vec<T>) -> Self {
        if elements.is_empty() {
            return RingQueue::with_slots(1);
        }
        let len = elements.len();
        RingQueue {
            buf: elements.into_iter().map(Some).collect(),
            front: 0,
            back: len - 1,
            len,
        }
    }
}

impl<T> iter::FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        RingQueue::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Extend the `RingQueue` with an iterator, growing as needed.
impl<T> Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> fmt::Debug for RingQueue<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
