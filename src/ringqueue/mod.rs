use crate::error::CapacityError;
use crate::utils::*;
use crate::RangeArgument;

mod iterator_impls;
mod trait_impls;

/// Number of slots allocated by `RingQueue::new()`.
pub const DEFAULT_CAPACITY: usize = 8;

/// `RingQueue` is a growable ring buffer.
///
/// The "default" usage of this type as a queue is to use `push_back` to add to
/// the queue, and `pop_front` to remove from the queue. `extend` pushes onto the
/// back in this manner, and iterating over `RingQueue` goes front to back.
///
/// Elements live in a backing store of `capacity()` slots. The live window
/// starts at the front slot and may wrap around the end of the store. When the
/// store is full the next push doubles it.
///
/// # Examples
///
/// ```
/// use ringqueue::RingQueue;
///
/// let mut queue = RingQueue::with_capacity(2).unwrap();
/// queue.push_back(1);
/// queue.push_back(2);
/// queue.push_back(3);
///
/// assert_eq!(queue.capacity(), 4);
/// assert_eq!(queue.remove(1), Some(2));
/// assert_eq!(queue.pop_front(), Some(1));
/// assert_eq!(queue.pop_front(), Some(3));
/// assert_eq!(queue.pop_front(), None);
/// ```
#[derive(Clone)]
pub struct RingQueue<T> {
    buf: Vec<Option<T>>,
    front: usize,
    back: usize,
    len: usize,
}

/// `RingQueue` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: &'a [Option<T>],
    front: usize,
    remaining: usize,
}

/// `RingQueue` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    first: std::slice::IterMut<'a, Option<T>>,
    second: std::slice::IterMut<'a, Option<T>>,
}

/// A by-value `RingQueue` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: RingQueue<T>,
}

/// A draining `RingQueue` iterator
///
/// The drained range is removed from the queue when `drain` returns, whether or
/// not the iterator is consumed.
pub struct Drain<T> {
    iter: std::vec::IntoIter<T>,
}

/// Which end of the window moved to close the gap left by a removal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Shift {
    /// Elements before the removed one moved one slot back; `front` advanced.
    Front,
    /// Elements after the removed one moved one slot forward; `back` retreated.
    Back,
}

impl<T> RingQueue<T> {
    #[inline]
    fn cap(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.cap())
    }

    #[inline]
    fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.cap())
    }

    /// Whether the live window ends before the end of the backing store.
    #[inline]
    fn is_contiguous(&self) -> bool {
        self.is_contiguous_in(self.cap())
    }

    /// Backing store slot of logical position `index`.
    #[inline]
    pub(crate) fn slot(&self, index: usize) -> usize {
        self.wrap_add(self.front, index)
    }

    #[inline]
    pub(crate) fn front_slot(&self) -> usize {
        self.front
    }

    #[inline]
    pub(crate) fn back_slot(&self) -> usize {
        self.back
    }

    /// Logical position of a backing store slot, if the slot is live.
    #[inline]
    pub(crate) fn position_of_slot(&self, slot: usize) -> Option<usize> {
        if slot >= self.cap() {
            return None;
        }
        let position = wrap_distance(self.front, slot, self.cap());
        if position < self.len {
            Some(position)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn slot_ref(&self, slot: usize) -> Option<&T> {
        self.buf.get(slot).and_then(Option::as_ref)
    }

    #[cfg(test)]
    pub(crate) fn reset_to_slot(&mut self, slot: usize) {
        assert!(self.is_empty(), "only an empty queue can be moved");
        assert!(slot < self.cap());
        self.front = slot;
        self.back = slot;
    }

    /// Moves a contiguous block of `len` slots from `src` to `dst`. The blocks
    /// may overlap. Source slots that are not overwritten are left empty.
    fn copy(&mut self, dst: usize, src: usize, len: usize) {
        debug_assert!(dst + len <= self.cap(),
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.cap());
        debug_assert!(src + len <= self.cap(),
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.cap());
        if dst == src || len == 0 {
            return;
        }
        if dst < src {
            for i in 0..len {
                self.buf[dst + i] = self.buf[src + i].take();
            }
        } else {
            for i in (0..len).rev() {
                self.buf[dst + i] = self.buf[src + i].take();
            }
        }
    }

    /// Doubles the backing store.
    #[inline]
    fn grow(&mut self) {
        let new_cap = self.cap() * 2;
        self.grow_to(new_cap);
    }

    /// Resizes the backing store to `new_cap` slots, at least twice the
    /// current count, and re-linearizes a wrapped window.
    fn grow_to(&mut self, new_cap: usize) {
        let old_cap = self.cap();
        debug_assert!(new_cap / 2 >= old_cap);
        self.buf.resize_with(new_cap, || None);

        if !self.is_contiguous_in(old_cap) {
            // Move whichever wrapped run is shorter into the new space. The
            // head run always ends at the last slot.
            //
            //         B F                      F             B
            //      [o o o o o o o o]  =>  [. . o o o o o o o o . . . . . .]
            //                                              M M
            //
            //                 B F                    B                 F
            //      [o o o o o o o o]  =>  [o o o o o o . . . . . . . . o o]
            //                                                          M M
            let tail_len = self.back + 1;
            let head_len = old_cap - self.front;
            if tail_len < head_len {
                self.copy(old_cap, 0, tail_len);
                self.back += old_cap;
            } else {
                let front = self.front;
                let added = new_cap - old_cap;
                self.copy(front + added, front, head_len);
                self.front += added;
            }
        }

        log::trace!("ring queue grew from {} to {} slots (len {}, front {}, back {})",
                    old_cap,
                    new_cap,
                    self.len,
                    self.front,
                    self.back);
    }

    #[inline]
    fn is_contiguous_in(&self, cap: usize) -> bool {
        self.front + self.len <= cap
    }

    /// Pairs of (first, second) slot runs holding the window, in order.
    fn window_slices_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let contiguous = self.is_contiguous();
        let (front, back, len) = (self.front, self.back, self.len);
        let (left, right) = self.buf.split_at_mut(front);
        if contiguous {
            (&mut right[..len], &mut left[..0])
        } else {
            (right, &mut left[..back + 1])
        }
    }

    /// Refills an empty queue from slot 0. `items` must fit the store.
    fn refill(&mut self, items: Vec<T>) {
        debug_assert!(self.is_empty());
        debug_assert!(items.len() <= self.cap());
        let len = items.len();
        for (slot, item) in self.buf.iter_mut().zip(items) {
            *slot = Some(item);
        }
        self.front = 0;
        self.back = len.saturating_sub(1);
        self.len = len;
    }
}

impl<T> RingQueue<T> {
    /// Creates an empty `RingQueue` with `DEFAULT_CAPACITY` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::{RingQueue, DEFAULT_CAPACITY};
    ///
    /// let queue: RingQueue<u32> = RingQueue::new();
    /// assert_eq!(queue.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_slots(DEFAULT_CAPACITY)
    }

    /// Creates an empty `RingQueue` with room for `capacity` elements before
    /// it has to grow.
    ///
    /// Fails with `CapacityError::Zero` if `capacity` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::{CapacityError, RingQueue};
    ///
    /// let queue: RingQueue<u32> = RingQueue::with_capacity(3).unwrap();
    /// assert_eq!(queue.capacity(), 3);
    ///
    /// assert_eq!(RingQueue::<u32>::with_capacity(0).unwrap_err(), CapacityError::Zero);
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            log::debug!("rejected ring queue capacity of 0");
            return Err(CapacityError::Zero);
        }
        Ok(Self::with_slots(capacity))
    }

    fn with_slots(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        RingQueue {
            buf,
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// Retrieves an element in the `RingQueue` by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push_back(3);
    /// queue.push_back(4);
    /// queue.push_back(5);
    /// assert_eq!(queue.get(1), Some(&4));
    /// assert_eq!(queue.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.buf[self.slot(index)].as_ref()
        } else {
            None
        }
    }

    /// Retrieves an element in the `RingQueue` mutably by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push_back(3);
    /// queue.push_back(4);
    /// if let Some(elem) = queue.get_mut(1) {
    ///     *elem = 7;
    /// }
    ///
    /// assert_eq!(queue[1], 7);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let slot = self.slot(index);
            self.buf[slot].as_mut()
        } else {
            None
        }
    }

    /// Swaps elements at indices `i` and `j`.
    ///
    /// `i` and `j` may be equal.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue: RingQueue<_> = vec![3, 4, 5].into();
    /// queue.swap(0, 2);
    /// assert_eq!(queue[0], 5);
    /// assert_eq!(queue[2], 3);
    /// ```
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        assert!(i < self.len());
        assert!(j < self.len());
        let ri = self.slot(i);
        let rj = self.slot(j);
        self.buf.swap(ri, rj);
    }

    /// Returns the number of slots in the backing store.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let queue: RingQueue<u8> = RingQueue::with_capacity(4).unwrap();
    /// assert_eq!(queue.capacity(), 4);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap()
    }

    /// Grows the backing store, doubling it as many times as needed, until at
    /// least `additional` more elements fit without another growth.
    ///
    /// Fails with `CapacityError::Overflow`, leaving the queue untouched, if
    /// the grown store could not be addressed or allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue: RingQueue<u8> = RingQueue::with_capacity(2).unwrap();
    /// queue.push_back(1);
    /// queue.reserve(4).unwrap();
    /// assert_eq!(queue.capacity(), 8);
    /// ```
    pub fn reserve(&mut self, additional: usize) -> Result<(), CapacityError> {
        let overflow = CapacityError::Overflow {
            len: self.len,
            additional,
        };
        let needed = self.len.checked_add(additional).ok_or(overflow)?;
        let old_cap = self.cap();
        if old_cap >= needed {
            return Ok(());
        }

        let mut new_cap = old_cap;
        while new_cap < needed {
            new_cap = new_cap.checked_mul(2).ok_or(overflow)?;
        }
        if self.buf.try_reserve_exact(new_cap - old_cap).is_err() {
            log::debug!("rejected reservation of {} more slots ({} wanted)",
                        additional,
                        new_cap);
            return Err(overflow);
        }
        self.grow_to(new_cap);
        Ok(())
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push_back(5);
    /// queue.push_back(3);
    /// queue.push_back(4);
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = queue.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: &self.buf,
            front: self.front,
            remaining: self.len,
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue: RingQueue<_> = vec![5, 3, 4].into();
    /// for num in queue.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// let b: &[_] = &[&mut 3, &mut 1, &mut 2];
    /// assert_eq!(&queue.iter_mut().collect::<Vec<&mut i32>>()[..], b);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.window_slices_mut();
        IterMut {
            first: first.iter_mut(),
            second: second.iter_mut(),
        }
    }

    /// Returns the number of elements in the `RingQueue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut v = RingQueue::new();
    /// assert_eq!(v.len(), 0);
    /// v.push_back(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue contains no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next push will grow the backing store.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::with_capacity(1).unwrap();
    /// assert!(!queue.is_full());
    /// queue.push_back(1);
    /// assert!(queue.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Removes the specified range from the queue and returns the removed
    /// elements in order.
    ///
    /// The range is removed even if the iterator is not consumed until the end.
    /// The capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue: RingQueue<_> = vec![1, 2, 3].into();
    /// let drain1: Vec<_> = queue.drain(2..).collect();
    /// assert_eq!(drain1, vec![3]);
    ///
    /// // A full range clears all contents
    /// let drain2: Vec<_> = queue.drain(..).collect();
    /// assert_eq!(drain2, vec![1, 2]);
    /// assert!(queue.is_empty());
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<T>
        where R: RangeArgument<usize>
    {
        let len = self.len();
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "drain lower bound was too large");
        assert!(end <= len, "drain upper bound was too large");

        let mut kept = self.take_vec();
        let after = kept.split_off(end);
        let drained = kept.split_off(start);
        kept.extend(after);
        self.refill(kept);

        Drain { iter: drained.into_iter() }
    }

    /// Clears the queue, dropping all values. The capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut v = RingQueue::new();
    /// v.push_back(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    pub fn clear(&mut self) {
        for i in 0..self.len {
            let slot = self.slot(i);
            self.buf[slot] = None;
        }
        self.front = 0;
        self.back = 0;
        self.len = 0;
    }

    /// Returns `true` if the `RingQueue` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let queue: RingQueue<_> = vec![0, 1].into();
    ///
    /// assert_eq!(queue.contains(&1), true);
    /// assert_eq!(queue.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq<T>
    {
        self.iter().any(|e| e == x)
    }

    /// Provides a reference to the front element, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// assert_eq!(queue.front(), None);
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// assert_eq!(queue.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// queue is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// assert_eq!(queue.back(), None);
    ///
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// assert_eq!(queue.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.get(self.len - 1)
        }
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue: RingQueue<_> = vec![1, 2].into();
    /// if let Some(x) = queue.back_mut() {
    ///     *x = 9;
    /// }
    /// assert_eq!(queue.back(), Some(&9));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            let len = self.len;
            self.get_mut(len - 1)
        }
    }

    /// Adds an element to the back of the queue, growing the backing store
    /// first if it is full.
    ///
    /// # Examples
    ///
    /// ```text
    /// [1, 2, _] <-(+)- 3 => [1, 2, 3]
    /// [1, 2, 3] <-(+)- 4 => [1, 2, 3, 4, _, _]
    /// ```
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::with_capacity(3).unwrap();
    /// queue.push_back(1);
    /// queue.push_back(2);
    /// queue.push_back(3);
    /// queue.push_back(4);
    ///
    /// assert_eq!(queue.back(), Some(&4));
    /// assert_eq!(queue.capacity(), 6);
    /// ```
    pub fn push_back(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        if self.is_empty() {
            // Reuse the slot the back index already points at.
            self.front = self.back;
        } else {
            self.back = self.wrap_add(self.back, 1);
        }
        self.buf[self.back] = Some(element);
        self.len += 1;
    }

    /// Adds an element to the front of the queue, growing the backing store
    /// first if it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push_front(1);
    /// queue.push_front(2);
    ///
    /// assert_eq!(queue.front(), Some(&2));
    /// assert_eq!(queue.back(), Some(&1));
    /// ```
    pub fn push_front(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        if self.is_empty() {
            self.front = self.back;
        } else {
            self.front = self.wrap_sub(self.front, 1);
        }
        self.buf[self.front] = Some(element);
        self.len += 1;
    }

    /// Removes and returns the element from the front of the queue.
    ///
    /// Returns the element, or `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push_back(1);
    /// queue.push_back(2);
    ///
    /// assert_eq!(queue.pop_front(), Some(1));
    /// assert_eq!(queue.pop_front(), Some(2));
    /// assert_eq!(queue.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let front = self.front;
        let element = self.buf[front].take();
        if self.len > 1 {
            self.front = self.wrap_add(front, 1);
        }
        self.len -= 1;
        element
    }

    /// Removes and returns the element from the back of the queue.
    ///
    /// Returns the element, or `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// assert_eq!(queue.pop_back(), None);
    /// queue.push_back(1);
    /// queue.push_back(3);
    /// assert_eq!(queue.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let back = self.back;
        let element = self.buf[back].take();
        if self.len > 1 {
            self.back = self.wrap_sub(back, 1);
        }
        self.len -= 1;
        element
    }

    /// Removes and returns the element at `index` from the `RingQueue`.
    /// Whichever end is closer to the removal point will be moved to close
    /// the gap, and all the affected elements will be moved to new positions.
    /// Returns `None` if `index` is out of bounds.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue: RingQueue<_> = vec![1, 2, 3, 4].into();
    ///
    /// assert_eq!(queue.remove(1), Some(2));
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), vec![&1, &3, &4]);
    /// assert_eq!(queue.remove(3), None);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.remove_shifting(index).map(|(element, _)| element)
    }

    /// `remove`, also reporting which side of the window was compacted.
    pub(crate) fn remove_shifting(&mut self, index: usize) -> Option<(T, Shift)> {
        if index >= self.len {
            return None;
        }

        // There are three main cases:
        //  Elements are contiguous
        //  Elements are discontiguous and the removal is in the front section
        //  Elements are discontiguous and the removal is in the back section
        //
        // For each of those there are two more cases:
        //  Removal is closer to the front
        //  Removal is closer to the back
        //
        // Key: F - self.front
        //      B - self.back
        //      o - Valid element
        //      x - Element marked for removal
        //      M - Indicates element was moved

        let idx = self.slot(index);
        let element = self.buf[idx].take();

        let distance_to_front = index;
        let distance_to_back = self.len - 1 - index;
        let closer_to_front = distance_to_front <= distance_to_back;

        let cap = self.cap();
        let front = self.front;
        let back = self.back;

        let shift = match (self.is_contiguous(), closer_to_front, idx >= front) {
            (true, true, _) | (false, true, true) => {
                // contiguous, remove closer to front:
                //
                //             F   x       B
                //      [. . . o o x o o o o . . . . . .]
                //
                //               F         B
                //      [. . . . o o o o o o . . . . . .]
                //               M M
                //
                // discontiguous, remove closer to front, front section:
                //
                //                 B         F   x
                //      [o o o o o o . . . . o o x o o o]
                //
                //                 B           F
                //      [o o o o o o . . . . . o o o o o]
                //                             M M

                self.copy(front + 1, front, index);
                self.front = self.wrap_add(front, 1);
                Shift::Front
            }
            (true, false, _) | (false, false, false) => {
                // contiguous, remove closer to back:
                //
                //             F       x   B
                //      [. . . o o o o x o o . . . . . .]
                //
                //             F         B
                //      [. . . o o o o o o . . . . . . .]
                //                     M M
                //
                // discontiguous, remove closer to back, back section:
                //
                //             x   B             F
                //      [o o o x o o . . . . . . o o o o]
                //
                //           B                   F
                //      [o o o o o . . . . . . . o o o o]
                //             M M

                self.copy(idx, idx + 1, back - idx);
                self.back = self.wrap_sub(back, 1);
                Shift::Back
            }
            (false, false, true) => {
                // discontiguous, remove closer to back, front section:
                //
                //             B             F     x
                //      [o o o o . . . . . . o o o x o o]
                //
                //           B               F
                //      [o o o . . . . . . . o o o o o o]
                //       M M M                     M M M

                // draw in elements in the front section
                self.copy(idx, idx + 1, cap - idx - 1);

                // move the first element of the back section into the last slot
                self.copy(cap - 1, 0, 1);

                // move the rest of the back section down
                self.copy(0, 1, back);

                self.back = self.wrap_sub(back, 1);
                Shift::Back
            }
            (false, true, false) => {
                // discontiguous, remove closer to front, back section:
                //
                //         x       B       F
                //      [o o x o o o . . . o o o o o o o]
                //
                //                 B         F
                //      [o o o o o o . . . . o o o o o o]
                //       M M M               M M M M M M

                // draw in elements in the back section up to idx
                self.copy(1, 0, idx);

                // move the last element of the front section into slot 0
                self.copy(0, cap - 1, 1);

                // move the front section up, excluding its last element
                self.copy(front + 1, front, cap - front - 1);

                self.front = self.wrap_add(front, 1);
                Shift::Front
            }
        };

        self.len -= 1;
        element.map(|element| (element, shift))
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` such that `f(&e)` returns false.
    /// This method operates in place and preserves the order of the retained
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.extend(1..5);
    /// queue.retain(|&x| x % 2 == 0);
    ///
    /// let v: Vec<_> = queue.into_iter().collect();
    /// assert_eq!(&v[..], &[2, 4]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
        where F: FnMut(&T) -> bool
    {
        let len = self.len();
        let mut del = 0;
        for i in 0..len {
            if !f(&self[i]) {
                del += 1;
            } else if del > 0 {
                self.swap(i - del, i);
            }
        }
        for _ in 0..del {
            self.pop_back();
        }
    }

    /// Moves all elements out into a `Vec`, front first, leaving the queue
    /// empty with its capacity unchanged.
    pub fn take_vec(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len);
        for i in 0..self.len {
            let slot = self.slot(i);
            if let Some(item) = self.buf[slot].take() {
                items.push(item);
            }
        }
        self.front = 0;
        self.back = 0;
        self.len = 0;
        items
    }
}
