//! In-place lexicographic permutation stepping.

/// Rearranges `items` into the next permutation in lexicographic order.
///
/// Returns `false`, leaving `items` untouched, when `items` is already the
/// last (descending) permutation. Starting from ascending order this visits
/// every permutation exactly once.
///
/// # Examples
///
/// ```
/// use geotour::exact::next_permutation;
///
/// let mut p = [0, 1, 2];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, [0, 2, 1]);
/// let mut last = [2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let n = items.len();
    if n < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `i`.
    let mut i = n - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    // Rightmost element greater than the pivot.
    let mut j = n - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// `n!`, saturating at `u128::MAX`.
pub(crate) fn factorial(n: usize) -> u128 {
    (2..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k)).unwrap_or(u128::MAX)
}
