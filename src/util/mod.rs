//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

/// Maps a buffer length to its size class (`log2(len)`).
///
/// Returns `None` for zero, for lengths that are not an exact power of two,
/// and for lengths above `max_size`. Rent and return share this test so a
/// buffer that was never poolable can never enter a class.
pub(crate) fn size_class_of(len: usize, max_size: usize) -> Option<usize> {
    if len == 0 || !len.is_power_of_two() || len > max_size {
        return None;
    }
    Some(len.trailing_zeros() as usize)
}

/// Simple uppercase mapping of a single scalar.
///
/// Scalars whose uppercase form expands to several scalars (`ß` -> `SS`)
/// are left unchanged so comparison stays one scalar against one scalar.
#[inline]
pub(crate) fn fold_case(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_class_of() {
        let max = 1024 * 1024;
        assert_eq!(size_class_of(0, max), None);
        assert_eq!(size_class_of(1, max), Some(0));
        assert_eq!(size_class_of(4096, max), Some(12));
        assert_eq!(size_class_of(max, max), Some(20));
        assert_eq!(size_class_of(max * 2, max), None);
        assert_eq!(size_class_of(100, max), None);
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case('a'), 'A');
        assert_eq!(fold_case('Z'), 'Z');
        assert_eq!(fold_case('_'), '_');
        assert_eq!(fold_case('é'), 'É');
        assert_eq!(fold_case('ß'), 'ß');
    }
}
