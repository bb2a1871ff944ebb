//! Circular prev/next navigation over an ordered list.
//!
//! The current item is located by catalog key, not by position or reference, so
//! the list may be re-sorted or re-filtered between calls.

/// Finds the position of the item whose key equals `current`.
///
/// # Arguments
///
/// * `current` - Key of the current item, if any
/// * `items` - Ordered list to search
/// * `key` - Extracts the key from an item
///
/// # Returns
///
/// `None` if there is no current item, the list is empty, or the key is absent.
pub fn index_of<T, K, F>(current: Option<&K>, items: &[T], key: F) -> Option<usize>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let current = current?;
    items.iter().position(|item| key(item) == *current)
}

/// Steps forward with wraparound.
///
/// A single-element list maps to itself.
#[must_use]
pub fn next_index(index: Option<usize>, len: usize) -> Option<usize> {
    let index = index?;
    if len == 0 {
        return None;
    }
    Some((index + 1) % len)
}

/// Steps backward with wraparound.
///
/// A single-element list maps to itself.
#[must_use]
pub fn prev_index(index: Option<usize>, len: usize) -> Option<usize> {
    let index = index?;
    if len == 0 {
        return None;
    }
    Some((index % len + len - 1) % len)
}
