#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

/// Number of steps forward from slot `from` to slot `to`.
#[inline]
pub fn wrap_distance(from: usize, to: usize, capacity: usize) -> usize {
    debug_assert!(from < capacity);
    debug_assert!(to < capacity);
    if to >= from {
        to - from
    } else {
        capacity + to - from
    }
}
