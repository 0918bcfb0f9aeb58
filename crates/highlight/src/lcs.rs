//! Longest common substring.

/// Finds every longest common substring of `a` and `b`.
///
/// Returns the substrings of `a` of maximal common length, one per starting
/// position in `a`, in ascending order of that position. The same text may
/// appear more than once when `a` repeats it. Returns an empty list if either
/// input is empty or they share no character.
///
/// Runs in `O(|a|·|b|)` time over Unicode scalar values, keeping two rows of
/// the table: `row[j]` is the length of the common run starting at `a[i]`
/// and `b[j]`, filled from the end of both strings backward.
pub fn longest_common_substrings(a: &str, b: &str) -> Vec<String> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let m = a.len();
    let n = b.len();

    if m == 0 || n == 0 {
        return Vec::new();
    }

    let mut next = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];
    // Longest run starting at each position of `a`.
    let mut best_at = vec![0usize; m];

    for i in (0..m).rev() {
        let mut row_best = 0;
        for j in (0..n).rev() {
            curr[j] = if a[i] == b[j] { next[j + 1] + 1 } else { 0 };
            row_best = row_best.max(curr[j]);
        }
        best_at[i] = row_best;
        std::mem::swap(&mut next, &mut curr);
    }

    let longest = best_at.iter().copied().max().unwrap_or(0);
    if longest == 0 {
        return Vec::new();
    }

    best_at
        .iter()
        .enumerate()
        .filter(|&(_, &len)| len == longest)
        .map(|(start, _)| a[start..start + longest].iter().collect())
        .collect()
}
