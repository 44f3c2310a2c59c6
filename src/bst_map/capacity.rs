use super::BstMap;
use crate::raw::RawBstMap;

impl<K, V> BstMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before
    /// its node storage reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_catalog::BstMap;
    ///
    /// let map: BstMap<i32, i32> = BstMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BstMap {
            raw: RawBstMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating
    /// its node storage.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
