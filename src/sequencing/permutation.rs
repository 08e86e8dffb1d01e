//! Lexicographic permutation enumeration.
//!
//! # Algorithm
//! Knuth's Algorithm L: find the longest non-increasing suffix, swap its
//! predecessor with the smallest larger element of the suffix, then reverse
//! the suffix. Starting from the sorted arrangement, repeated calls visit
//! every permutation exactly once, in lexicographic order, in place.
//!
//! # Reference
//! Knuth (2011), "The Art of Computer Programming", Vol. 4A, 7.2.1.2

/// Advances `perm` to its lexicographic successor.
///
/// Returns `false` (leaving `perm` unchanged) when `perm` is already the
/// last permutation, i.e. sorted in non-increasing order.
pub fn next_permutation<T: Ord>(perm: &mut [T]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}
