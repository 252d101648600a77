/// A growable sequence with a fixed growth policy.
///
/// When a push doesn't fit, capacity grows to `max(2 * capacity + 1, requested)`,
/// so the capacities seen by repeated pushes run 0, 1, 3, 7, 15, ...
/// and each push is amortized O(1).
///
/// The backing `Vec` does the storage; this type owns the capacity decisions.
#[derive(Debug)]
pub struct Seq<T> {
    items: Vec<T>,
    cap: usize,
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Seq {
            items: Vec::new(),
            cap: 0,
        }
    }
}

impl<T> Seq<T> {
    /// Creates a new, empty sequence. Does not allocate.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements that fit before the next reallocation.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Appends a value, growing first if the sequence is full.
    pub fn push(&mut self, value: T) {
        self.fit(1);
        self.items.push(value);
    }

    /// Makes room for at least `additional` more pushes.
    pub fn reserve(&mut self, additional: usize) {
        self.fit(additional);
    }

    /// Gets the value at the given index.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.items.get(idx)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Frees the backing storage and returns to the empty state.
    /// Releasing an empty sequence is a no-op.
    pub fn release(&mut self) {
        self.items = Vec::new();
        self.cap = 0;
    }

    fn fit(&mut self, n: usize) {
        let want = self.items.len().saturating_add(n);
        if want > self.cap {
            self.grow(want);
        }
    }

    fn grow(&mut self, new_len: usize) {
        let new_cap = std::cmp::max(self.cap.saturating_mul(2).saturating_add(1), new_len);
        debug_assert!(new_len <= new_cap);
        tracing::trace!(from = self.cap, to = new_cap, "growing sequence");
        // Allocation failure aborts here; there's no partial state to recover.
        self.items.reserve_exact(new_cap - self.items.len());
        self.cap = new_cap;
    }
}

impl<T> std::ops::Index<usize> for Seq<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.items[idx]
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for Seq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.push(v);
        }
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Seq::new();
        seq.extend(iter);
        seq
    }
}

#[cfg(test)]
mod tests {
    use super::Seq;

    #[test]
    fn starts_empty() {
        let seq: Seq<i32> = Seq::new();
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.capacity(), 0);
        assert!(seq.is_empty());
        assert_eq!(seq.get(0), None);
    }

    #[test]
    fn push_many() {
        const N: usize = 1024;
        let mut seq = Seq::new();
        for i in 0..N {
            seq.push(i);
            assert!(seq.len() <= seq.capacity());
        }
        assert_eq!(seq.len(), N);
        for i in 0..N {
            assert_eq!(seq[i], i);
        }
    }

    #[test]
    fn capacity_doubles_plus_one() {
        let mut seq = Seq::new();
        let mut caps = Vec::new();
        for i in 0..16 {
            seq.push(i);
            caps.push(seq.capacity());
        }
        assert_eq!(
            &caps,
            &[1, 3, 3, 7, 7, 7, 7, 15, 15, 15, 15, 15, 15, 15, 15, 31]
        );
    }

    #[test]
    fn reserve_takes_requested_when_larger() {
        let mut seq: Seq<u8> = Seq::new();
        seq.push(1);
        seq.reserve(100);
        assert_eq!(seq.capacity(), 101);

        // A small request still grows by the doubling policy.
        let mut seq: Seq<u8> = (0..3).collect();
        assert_eq!(seq.capacity(), 3);
        seq.reserve(1);
        assert_eq!(seq.capacity(), 7);
        // ...and a request that fits doesn't grow.
        seq.reserve(4);
        assert_eq!(seq.capacity(), 7);
    }

    #[test]
    fn release_resets() {
        let mut seq: Seq<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(seq.len(), 2);
        seq.release();
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.capacity(), 0);

        // Again, on the already-empty sequence.
        seq.release();
        assert_eq!(seq.capacity(), 0);

        seq.push("c".to_owned());
        assert_eq!(seq.as_slice(), &["c".to_owned()]);
        assert_eq!(seq.capacity(), 1);
    }
}
