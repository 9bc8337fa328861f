use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter;
use std::ops::{Index, Range};

use rustc_hash::FxHashMap;

use crate::error::CapacityError;
use crate::ringqueue::{Drain, Iter, RingQueue, Shift};
use crate::RangeArgument;

/// A `RingQueue` that also knows where each of its elements is.
///
/// Every element is mapped to a key by `key_fn`, and the queue keeps a map
/// from key to the backing store slot currently holding that element. This
/// makes `position` and `remove_item` average `O(1)` lookups instead of scans.
///
/// Keys of the live elements must be pairwise distinct. This is not checked in
/// release builds: pushing an element whose key is already present overwrites
/// the earlier entry, and the earlier element can no longer be found by key.
///
/// Elements are only reachable through shared references, since changing an
/// element in place could change its key.
///
/// # Examples
///
/// ```
/// use ringqueue::TrackedQueue;
///
/// #[derive(Debug)]
/// struct Job { id: u32, name: &'static str }
///
/// let mut jobs = TrackedQueue::new(|job: &Job| job.id);
/// jobs.push_back(Job { id: 7, name: "fetch" });
/// jobs.push_back(Job { id: 3, name: "parse" });
/// jobs.push_back(Job { id: 9, name: "store" });
///
/// assert_eq!(jobs.position_of_key(&9), Some(2));
/// assert_eq!(jobs.remove_key(&3).map(|job| job.name), Some("parse"));
/// assert_eq!(jobs.position_of_key(&9), Some(1));
/// ```
pub struct TrackedQueue<T, K, F> {
    queue: RingQueue<T>,
    index: FxHashMap<K, usize>,
    key_fn: F,
}

/// A `TrackedQueue` keyed by the elements themselves.
pub type IdentityQueue<T> = TrackedQueue<T, T, fn(&T) -> T>;

impl<T, K, F> TrackedQueue<T, K, F>
    where K: Hash + Eq,
          F: Fn(&T) -> K
{
    /// Creates an empty `TrackedQueue` with `ringqueue::DEFAULT_CAPACITY` slots.
    pub fn new(key_fn: F) -> Self {
        Self::from_queue(RingQueue::new(), key_fn)
    }

    /// Creates an empty `TrackedQueue` with room for `capacity` elements
    /// before it has to grow.
    ///
    /// Fails with `CapacityError::Zero` if `capacity` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::{CapacityError, TrackedQueue};
    ///
    /// let queue = TrackedQueue::with_capacity(4, |s: &String| s.len()).unwrap();
    /// assert_eq!(queue.capacity(), 4);
    ///
    /// let err = TrackedQueue::with_capacity(0, |s: &String| s.len()).err();
    /// assert_eq!(err, Some(CapacityError::Zero));
    /// ```
    pub fn with_capacity(capacity: usize, key_fn: F) -> Result<Self, CapacityError> {
        let queue = RingQueue::with_capacity(capacity)?;
        Ok(Self::from_queue(queue, key_fn))
    }

    /// Creates a `TrackedQueue` holding the elements of `iter` in order, the
    /// first becoming the front.
    pub fn from_iter_keyed<I>(iter: I, key_fn: F) -> Self
        where I: IntoIterator<Item = T>
    {
        Self::from_queue(iter.into_iter().collect(), key_fn)
    }

    /// Starts tracking the elements of an existing queue.
    pub fn from_queue(queue: RingQueue<T>, key_fn: F) -> Self {
        let mut tracked = TrackedQueue {
            index: FxHashMap::with_capacity_and_hasher(queue.capacity(), Default::default()),
            queue,
            key_fn,
        };
        tracked.rebuild_index();
        tracked
    }

    /// Recomputes every index entry from the live slots.
    fn rebuild_index(&mut self) {
        self.index.clear();
        for position in 0..self.queue.len() {
            let slot = self.queue.slot(position);
            if let Some(element) = self.queue.slot_ref(slot) {
                self.index.insert((self.key_fn)(element), slot);
            }
        }
        debug_assert_eq!(self.index.len(), self.queue.len(), "duplicate keys in tracked queue");
        log::trace!("rebuilt position index over {} elements", self.index.len());
    }

    /// Rewrites the index entries of the elements at logical `positions`.
    fn reindex(&mut self, positions: Range<usize>) {
        for position in positions {
            let slot = self.queue.slot(position);
            if let Some(element) = self.queue.slot_ref(slot) {
                self.index.insert((self.key_fn)(element), slot);
            }
        }
    }

    fn key_of(&self, element: &T) -> K {
        (self.key_fn)(element)
    }

    /// Adds an element to the back of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::TrackedQueue;
    ///
    /// let mut queue = TrackedQueue::with_capacity(1, |x: &char| *x).unwrap();
    /// queue.push_back('a');
    /// queue.push_back('b');
    /// assert_eq!(queue.position(&'b'), Some(1));
    /// ```
    pub fn push_back(&mut self, element: T) {
        let key = self.key_of(&element);
        debug_assert!(!self.index.contains_key(&key), "duplicate key pushed to tracked queue");
        let grows = self.queue.is_full();
        self.queue.push_back(element);
        if grows {
            self.rebuild_index();
        } else {
            self.index.insert(key, self.queue.back_slot());
        }
    }

    /// Adds an element to the front of the queue.
    pub fn push_front(&mut self, element: T) {
        let key = self.key_of(&element);
        debug_assert!(!self.index.contains_key(&key), "duplicate key pushed to tracked queue");
        let grows = self.queue.is_full();
        self.queue.push_front(element);
        if grows {
            self.rebuild_index();
        } else {
            self.index.insert(key, self.queue.front_slot());
        }
    }

    /// Removes and returns the element from the front of the queue.
    pub fn pop_front(&mut self) -> Option<T> {
        let element = self.queue.pop_front()?;
        let key = self.key_of(&element);
        self.index.remove(&key);
        Some(element)
    }

    /// Removes and returns the element from the back of the queue.
    pub fn pop_back(&mut self) -> Option<T> {
        let element = self.queue.pop_back()?;
        let key = self.key_of(&element);
        self.index.remove(&key);
        Some(element)
    }

    /// Removes and returns the element at `index`, or `None` if `index` is out
    /// of bounds.
    ///
    /// Element at index 0 is the front of the queue.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let (element, shift) = self.queue.remove_shifting(index)?;
        let key = self.key_of(&element);
        self.index.remove(&key);
        match shift {
            Shift::Front => self.reindex(0..index),
            Shift::Back => {
                let len = self.queue.len();
                self.reindex(index..len)
            }
        }
        Some(element)
    }

    /// Removes the element with the same key as `element`.
    ///
    /// Returns `true` if such an element was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::TrackedQueue;
    ///
    /// let mut queue = TrackedQueue::from_iter_keyed(vec![10, 20, 30], |x: &i32| *x);
    /// assert!(queue.remove_item(&20));
    /// assert!(!queue.remove_item(&20));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn remove_item(&mut self, element: &T) -> bool {
        self.take_item(element).is_some()
    }

    /// Removes and returns the element with the same key as `element`.
    pub fn take_item(&mut self, element: &T) -> Option<T> {
        let position = self.position(element)?;
        self.remove(position)
    }

    /// Removes and returns the element whose key is `key`.
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<T>
        where K: Borrow<Q>,
              Q: Hash + Eq + ?Sized
    {
        let position = self.position_of_key(key)?;
        self.remove(position)
    }

    /// Returns the current logical position of the element with the same key
    /// as `element`, or `None` if no such element is queued.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::TrackedQueue;
    ///
    /// let mut queue = TrackedQueue::from_iter_keyed(vec![10, 20, 30], |x: &i32| *x);
    /// assert_eq!(queue.position(&20), Some(1));
    /// queue.pop_front();
    /// assert_eq!(queue.position(&20), Some(0));
    /// assert_eq!(queue.position(&10), None);
    /// ```
    pub fn position(&self, element: &T) -> Option<usize> {
        self.position_of_key(&self.key_of(element))
    }

    /// Returns the current logical position of the element whose key is `key`.
    pub fn position_of_key<Q>(&self, key: &Q) -> Option<usize>
        where K: Borrow<Q>,
              Q: Hash + Eq + ?Sized
    {
        let slot = *self.index.get(key)?;
        self.queue.position_of_slot(slot)
    }

    /// Returns `true` if an element with the same key as `element` is queued.
    pub fn contains_item(&self, element: &T) -> bool {
        self.index.contains_key(&self.key_of(element))
    }

    /// Returns `true` if an element whose key is `key` is queued.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Hash + Eq + ?Sized
    {
        self.index.contains_key(key)
    }

    /// Retains only the elements specified by the predicate, preserving order.
    pub fn retain<P>(&mut self, f: P)
        where P: FnMut(&T) -> bool
    {
        self.queue.retain(f);
        self.rebuild_index();
    }

    /// Removes the specified range from the queue and returns the removed
    /// elements in order.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the queue.
    pub fn drain<R>(&mut self, range: R) -> Drain<T>
        where R: RangeArgument<usize>
    {
        let drained = self.queue.drain(range);
        self.rebuild_index();
        drained
    }

    /// Grows the backing store until at least `additional` more elements fit
    /// without another growth.
    pub fn reserve(&mut self, additional: usize) -> Result<(), CapacityError> {
        let capacity = self.queue.capacity();
        self.queue.reserve(additional)?;
        if self.queue.capacity() != capacity {
            self.rebuild_index();
        }
        Ok(())
    }

    /// Clears the queue and its index.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.index.clear();
    }
}

impl<T, K, F> TrackedQueue<T, K, F> {
    /// Retrieves an element by index. Element at index 0 is the front.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.queue.get(index)
    }

    /// Provides a reference to the front element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.queue.front()
    }

    /// Provides a reference to the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.queue.back()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if the queue contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of slots in the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Returns a front-to-back iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.queue.iter()
    }

    /// Read-only view of the underlying queue.
    #[inline]
    pub fn as_queue(&self) -> &RingQueue<T> {
        &self.queue
    }

    /// Drops the index and returns the underlying queue.
    pub fn into_queue(self) -> RingQueue<T> {
        self.queue
    }
}

impl<T> TrackedQueue<T, T, fn(&T) -> T>
    where T: Clone + Hash + Eq
{
    /// Creates an empty queue keyed by the elements themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::IdentityQueue;
    ///
    /// let mut queue = IdentityQueue::identity();
    /// queue.push_back("a");
    /// queue.push_back("b");
    /// assert_eq!(queue.position(&"b"), Some(1));
    /// ```
    pub fn identity() -> Self {
        TrackedQueue::new(T::clone as fn(&T) -> T)
    }
}

impl<T> iter::FromIterator<T> for TrackedQueue<T, T, fn(&T) -> T>
    where T: Clone + Hash + Eq
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TrackedQueue::from_iter_keyed(iter, T::clone as fn(&T) -> T)
    }
}

impl<T, K, F> Clone for TrackedQueue<T, K, F>
    where T: Clone,
          K: Clone,
          F: Clone
{
    fn clone(&self) -> Self {
        TrackedQueue {
            queue: self.queue.clone(),
            index: self.index.clone(),
            key_fn: self.key_fn.clone(),
        }
    }
}

impl<T, K, F> Extend<T> for TrackedQueue<T, K, F>
    where K: Hash + Eq,
          F: Fn(&T) -> K
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<'a, T, K, F> IntoIterator for &'a TrackedQueue<T, K, F> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, K, F> IntoIterator for TrackedQueue<T, K, F> {
    type Item = T;
    type IntoIter = crate::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.queue.into_iter()
    }
}

impl<T, K, F> Index<usize> for TrackedQueue<T, K, F> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.queue[index]
    }
}

impl<T, K, F> PartialEq for TrackedQueue<T, K, F>
    where T: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        self.queue == other.queue
    }
}

impl<T, K, F> fmt::Debug for TrackedQueue<T, K, F>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Tracked = TrackedQueue<usize, usize, fn(&usize) -> usize>;

    fn identity(x: &usize) -> usize {
        *x
    }

    fn tracked_at(capacity: usize, padding: usize) -> Tracked {
        let mut queue = RingQueue::with_capacity(capacity).unwrap();
        queue.reset_to_slot(padding);
        TrackedQueue::from_queue(queue, identity as fn(&usize) -> usize)
    }

    /// Asserts the index agrees with the queue contents everywhere.
    fn assert_consistent<T, K, F>(queue: &TrackedQueue<T, K, F>)
        where K: Hash + Eq,
              F: Fn(&T) -> K
    {
        assert_eq!(queue.index.len(), queue.len());
        for (position, element) in queue.iter().enumerate() {
            assert_eq!(queue.position(element), Some(position));
        }
    }

    #[test]
    fn position_and_remove_item() {
        let mut queue: IdentityQueue<_> = vec![10, 20, 30].into_iter().collect();
        assert_eq!(queue.position(&20), Some(1));
        assert!(queue.remove_item(&20));
        assert_eq!(queue.position(&20), None);
        assert_eq!(queue.iter().cloned().collect::<Vec<_>>(), vec![10, 30]);
        assert!(!queue.remove_item(&20));
        assert_eq!(queue.len(), 2);
        assert_consistent(&queue);
    }

    #[test]
    fn missing_item() {
        let mut queue: IdentityQueue<u8> = IdentityQueue::identity();
        assert_eq!(queue.position(&1), None);
        assert!(!queue.remove_item(&1));
        assert_eq!(queue.pop_front(), None);
        assert_eq!(queue.remove(0), None);
    }

    #[test]
    fn zero_capacity() {
        let err = TrackedQueue::with_capacity(0, identity as fn(&usize) -> usize).err();
        assert_eq!(err, Some(CapacityError::Zero));
    }

    #[test]
    fn push_pop() {
        let mut queue = tracked_at(4, 3);
        queue.push_back(1);
        queue.push_back(2);
        queue.push_front(0);
        assert_consistent(&queue);
        assert_eq!(queue.pop_front(), Some(0));
        assert_eq!(queue.pop_back(), Some(2));
        assert_eq!(queue.position(&0), None);
        assert_eq!(queue.position(&2), None);
        assert_eq!(queue.position(&1), Some(0));
        assert_consistent(&queue);
    }

    #[test]
    fn growth_rebuilds_index() {
        const CAP: usize = 8;
        for padding in 0..CAP {
            let mut queue = tracked_at(CAP, padding);
            for i in 0..CAP * 2 + 1 {
                queue.push_back(i);
                assert_consistent(&queue);
            }
            assert_eq!(queue.capacity(), CAP * 4);

            let mut queue = tracked_at(CAP, padding);
            for i in 0..CAP + 1 {
                queue.push_front(i);
                assert_consistent(&queue);
            }
            assert_eq!(queue.position(&CAP), Some(0));
        }
    }

    #[test]
    fn remove_every_position() {
        const CAP: usize = 12;
        for len in 1..CAP + 1 {
            for padding in 0..CAP {
                for to_remove in 0..len {
                    let mut queue = tracked_at(CAP, padding);
                    queue.extend(0..len);
                    assert_eq!(queue.remove(to_remove), Some(to_remove));
                    assert_eq!(queue.position(&to_remove), None);
                    assert_consistent(&queue);
                    for i in 0..len {
                        let expected = match i {
                            i if i < to_remove => Some(i),
                            i if i == to_remove => None,
                            i => Some(i - 1),
                        };
                        assert_eq!(queue.position(&i), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn remove_by_key() {
        #[derive(Debug, PartialEq)]
        struct Job {
            id: u32,
            name: String,
        }

        let mut jobs = TrackedQueue::new(|job: &Job| job.id);
        for (id, name) in vec![(4, "a"), (8, "b"), (15, "c"), (16, "d")] {
            jobs.push_back(Job { id, name: name.to_owned() });
        }
        assert!(jobs.contains_key(&15));
        assert_eq!(jobs.remove_key(&15).map(|job| job.name), Some("c".to_owned()));
        assert!(!jobs.contains_key(&15));
        assert_eq!(jobs.remove_key(&15), None);
        assert_eq!(jobs.position_of_key(&16), Some(2));
        assert!(jobs.contains_item(&Job { id: 4, name: String::new() }));
        let taken = jobs.take_item(&Job { id: 8, name: String::new() });
        assert_eq!(taken.map(|job| job.name), Some("b".to_owned()));
        assert_consistent(&jobs);
    }

    #[test]
    fn string_keys_borrowed_lookup() {
        let mut queue = TrackedQueue::new(|s: &String| s.clone());
        queue.push_back("x".to_owned());
        queue.push_back("y".to_owned());
        assert_eq!(queue.position_of_key("y"), Some(1));
        assert_eq!(queue.remove_key("x"), Some("x".to_owned()));
        assert_eq!(queue.position_of_key("y"), Some(0));
    }

    #[test]
    fn clear() {
        let mut queue = tracked_at(4, 2);
        queue.extend(0..6);
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.index.is_empty());
        assert_eq!(queue.position(&3), None);
        queue.push_back(3);
        assert_eq!(queue.position(&3), Some(0));
    }

    #[test]
    fn retain_and_drain() {
        for padding in 0..8 {
            let mut queue = tracked_at(8, padding);
            queue.extend(0..8);
            queue.retain(|&x| x % 2 == 1);
            assert_eq!(queue.iter().cloned().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
            assert_consistent(&queue);

            let drained: Vec<_> = queue.drain(1..3).collect();
            assert_eq!(drained, vec![3, 5]);
            assert_eq!(queue.position(&3), None);
            assert_eq!(queue.position(&7), Some(1));
            assert_consistent(&queue);
        }
    }

    #[test]
    fn reserve() {
        let mut queue = tracked_at(2, 1);
        queue.extend(0..2);
        queue.reserve(5).unwrap();
        assert_eq!(queue.capacity(), 8);
        assert_consistent(&queue);
    }

    #[test]
    fn views() {
        let queue: IdentityQueue<_> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.back(), Some(&3));
        assert_eq!(queue[1], 2);
        assert_eq!(format!("{:?}", queue), "[1, 2, 3]");
        assert_eq!(queue.clone(), queue);
        assert_eq!(queue.as_queue().len(), 3);
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::VecDeque;

        #[derive(Debug, Clone)]
        enum Op {
            PushBack,
            PushFront,
            PopFront,
            PopBack,
            Remove(usize),
            RemoveItem(usize),
            Clear,
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => Just(Op::PushBack),
                2 => Just(Op::PushFront),
                1 => Just(Op::PopFront),
                1 => Just(Op::PopBack),
                2 => (0usize..40).prop_map(Op::Remove),
                2 => (0usize..80).prop_map(Op::RemoveItem),
                1 => Just(Op::Clear),
            ]
        }

        proptest! {
            /// Positions agree with a `VecDeque` model after every operation.
            #[test]
            fn prop_positions_always_hold(
                capacity in 1usize..10,
                padding in 0usize..10,
                ops in prop::collection::vec(op_strategy(), 0..120)
            ) {
                let mut queue = tracked_at(capacity, padding % capacity);
                let mut model = VecDeque::new();
                let mut next = 0usize;

                for op in ops {
                    match op {
                        Op::PushBack => { queue.push_back(next); model.push_back(next); next += 1; }
                        Op::PushFront => { queue.push_front(next); model.push_front(next); next += 1; }
                        Op::PopFront => { prop_assert_eq!(queue.pop_front(), model.pop_front()); }
                        Op::PopBack => { prop_assert_eq!(queue.pop_back(), model.pop_back()); }
                        Op::Remove(i) => { prop_assert_eq!(queue.remove(i), model.remove(i)); }
                        Op::RemoveItem(v) => {
                            let expected = model.iter().position(|&x| x == v);
                            if let Some(i) = expected {
                                model.remove(i);
                            }
                            prop_assert_eq!(queue.remove_item(&v), expected.is_some());
                        }
                        Op::Clear => { queue.clear(); model.clear(); }
                    }

                    prop_assert_eq!(queue.len(), model.len());
                    prop_assert_eq!(queue.index.len(), model.len());
                    for (i, v) in model.iter().enumerate() {
                        prop_assert_eq!(queue.position(v), Some(i));
                    }
                }
            }
        }
    }
}
