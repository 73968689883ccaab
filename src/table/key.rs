//! Home-slot hashing for probing table keys

/// A key that can be placed in a [`ProbeTable`](super::ProbeTable).
///
/// Implementations must agree across borrowed forms: `String` and `str`
/// hash to the same home slot, otherwise lookups by `&str` would miss.
pub trait TableKey: Eq {
    /// Returns the home slot for this key in a table of `capacity` slots.
    ///
    /// `capacity` is always non-zero.
    fn home_slot(&self, capacity: usize) -> usize;
}

impl TableKey for u64 {
    #[inline]
    fn home_slot(&self, capacity: usize) -> usize {
        (*self % capacity as u64) as usize
    }
}

impl TableKey for str {
    #[inline]
    fn home_slot(&self, capacity: usize) -> usize {
        rolling_hash(self.as_bytes(), capacity)
    }
}

impl TableKey for String {
    #[inline]
    fn home_slot(&self, capacity: usize) -> usize {
        self.as_str().home_slot(capacity)
    }
}

/// Polynomial rolling hash `h = h * 31 + byte`, reduced modulo
/// `capacity` after every byte so the accumulator never overflows.
pub fn rolling_hash(bytes: &[u8], capacity: usize) -> usize {
    let modulus = capacity as u64;
    bytes
        .iter()
        .fold(0u64, |hash, &byte| (hash * 31 + u64::from(byte)) % modulus) as usize
}
