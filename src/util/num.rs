/// Converts a host length or count into an interpreter integer.
///
/// Collections never come close to `i64::MAX` elements in practice, so the
/// conversion saturates rather than failing.
///
/// ## Example
/// ```
/// use squid::util::num::len_to_i64;
///
/// assert_eq!(len_to_i64(3), 3);
/// assert_eq!(len_to_i64(usize::MAX), i64::MAX);
/// ```
#[must_use]
pub fn len_to_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Converts an interpreter integer into a position within a collection of
/// length `len`.
///
/// ## Returns
/// - `Some(usize)`: If `0 <= index < len`.
/// - `None`: For negative indices and indices past the end.
///
/// ## Example
/// ```
/// use squid::util::num::index_in_bounds;
///
/// assert_eq!(index_in_bounds(0, 2), Some(0));
/// assert_eq!(index_in_bounds(2, 2), None);
/// assert_eq!(index_in_bounds(-1, 2), None);
/// ```
#[must_use]
pub fn index_in_bounds(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}
