use alloc::vec::Vec;
use core::borrow::Borrow;

use super::BstMap;
use crate::error::{Error, Result};

/// Accepts a caller-supplied extraction buffer, rejecting absent and
/// zero-capacity buffers.
///
/// A `Vec` of a zero-sized type always reports `usize::MAX` capacity, so such
/// a buffer is never [`Error::EmptyBuffer`].
fn validate_buffer<T>(buffer: Option<Vec<T>>) -> Result<Vec<T>> {
    let buffer = buffer.ok_or(Error::MissingBuffer)?;
    if buffer.capacity() == 0 {
        return Err(Error::EmptyBuffer);
    }
    Ok(buffer)
}

/// Lookups that take a possibly absent key, and ordered extraction into a
/// caller-supplied buffer.
///
/// These are the entry points for callers whose arguments come from somewhere
/// that may not supply them. Every argument is validated before the tree is
/// touched.
impl<K: Ord, V> BstMap<K, V> {
    /// Returns the value for `key`, or `Ok(None)` if the key is not in the map.
    ///
    /// # Errors
    ///
    /// [`Error::MissingKey`] if `key` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_catalog::{BstMap, Error};
    ///
    /// let map = BstMap::from([("A", 1)]);
    /// assert_eq!(map.try_get(Some("A")), Ok(Some(&1)));
    /// assert_eq!(map.try_get(Some("B")), Ok(None));
    /// assert_eq!(map.try_get(None::<&str>), Err(Error::MissingKey));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn try_get<Q>(&self, key: Option<&Q>) -> Result<Option<&V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let key = key.ok_or(Error::MissingKey)?;
        Ok(self.get(key))
    }

    /// Returns whether `key` is in the map.
    ///
    /// # Errors
    ///
    /// [`Error::MissingKey`] if `key` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_catalog::{BstMap, Error};
    ///
    /// let map = BstMap::from([(7, "seven")]);
    /// assert_eq!(map.try_contains_key(Some(&7)), Ok(true));
    /// assert_eq!(map.try_contains_key(None::<&i32>), Err(Error::MissingKey));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn try_contains_key<Q>(&self, key: Option<&Q>) -> Result<bool>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let key = key.ok_or(Error::MissingKey)?;
        Ok(self.contains_key(key))
    }

    /// Copies every key into `buffer`, in ascending order, and returns it.
    ///
    /// `buffer` is only an allocation to reuse: its contents are discarded and
    /// it grows as needed, so the result always holds exactly [`len`] keys
    /// whatever capacity was passed in.
    ///
    /// # Errors
    ///
    /// [`Error::MissingBuffer`] if `buffer` is `None`, [`Error::EmptyBuffer`]
    /// if it has zero capacity. A buffer of a zero-sized key type (such as
    /// `()`) always reports `usize::MAX` capacity and is never rejected as
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_catalog::{BstMap, Error};
    ///
    /// let mut map = BstMap::new();
    /// map.insert("B", 2);
    /// map.insert("A", 1);
    /// map.insert("C", 3);
    ///
    /// assert_eq!(map.to_key_array(Vec::with_capacity(1)), Ok(vec!["A", "B", "C"]));
    /// assert_eq!(map.to_key_array(Vec::new()), Err(Error::EmptyBuffer));
    /// assert_eq!(map.to_key_array(None), Err(Error::MissingBuffer));
    /// ```
    ///
    /// [`len`]: BstMap::len
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn to_key_array(&self, buffer: impl Into<Option<Vec<K>>>) -> Result<Vec<K>>
    where
        K: Clone,
    {
        let mut buffer = validate_buffer(buffer.into())?;
        buffer.clear();
        buffer.reserve(self.len());
        buffer.extend(self.keys().cloned());
        Ok(buffer)
    }

    /// Copies every value into `buffer`, ordered by the values' keys, and
    /// returns it.
    ///
    /// The order is that of the keys, not of the values themselves. `buffer`
    /// is handled as in [`to_key_array`]: the result always holds exactly
    /// [`len`] values.
    ///
    /// # Errors
    ///
    /// [`Error::MissingBuffer`] if `buffer` is `None`, [`Error::EmptyBuffer`]
    /// if it has zero capacity. A buffer of a zero-sized value type (such as
    /// `()`) always reports `usize::MAX` capacity and is never rejected as
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_catalog::BstMap;
    ///
    /// let map = BstMap::from([(3, "c"), (1, "z"), (2, "a")]);
    /// let values = map.to_value_array(Vec::with_capacity(16)).unwrap();
    /// assert_eq!(values, ["z", "a", "c"]);
    /// ```
    ///
    /// [`to_key_array`]: BstMap::to_key_array
    /// [`len`]: BstMap::len
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn to_value_array(&self, buffer: impl Into<Option<Vec<V>>>) -> Result<Vec<V>>
    where
        V: Clone,
    {
        let mut buffer = validate_buffer(buffer.into())?;
        buffer.clear();
        buffer.reserve(self.len());
        buffer.extend(self.values().cloned());
        Ok(buffer)
    }
}
