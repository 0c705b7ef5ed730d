//! Lexicographic permutation enumeration.
//!
//! Orderings are produced in place with the classic next-permutation step
//! (find the rightmost ascent, swap with the smallest larger suffix element,
//! reverse the suffix), so no candidate allocates.

/// Streams every ordering of a set of node indices exactly once.
///
/// # Examples
///
/// ```
/// use u_tsp::permutation::LexPermutations;
///
/// let mut perms = LexPermutations::new(vec![1, 2, 3]);
/// let mut seen = Vec::new();
/// while let Some(p) = perms.advance() {
///     seen.push(p.to_vec());
/// }
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen[0], vec![1, 2, 3]);
/// assert_eq!(seen[1], vec![1, 3, 2]);
/// assert_eq!(seen[5], vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct LexPermutations {
    items: Vec<usize>,
    descending: bool,
    started: bool,
    exhausted: bool,
}

impl LexPermutations {
    /// Enumerates in ascending lexicographic order, starting from the sorted
    /// arrangement of `items`.
    pub fn new(mut items: Vec<usize>) -> Self {
        items.sort_unstable();
        Self {
            items,
            descending: false,
            started: false,
            exhausted: false,
        }
    }

    /// Enumerates in descending lexicographic order (the exact reverse of
    /// [`LexPermutations::new`]).
    pub fn reversed(mut items: Vec<usize>) -> Self {
        items.sort_unstable_by(|a, b| b.cmp(a));
        Self {
            items,
            descending: true,
            started: false,
            exhausted: false,
        }
    }

    /// Returns the next ordering, or `None` once all have been produced.
    ///
    /// An empty item set yields exactly one empty ordering.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.items.as_slice());
        }
        if step(&mut self.items, self.descending) {
            Some(self.items.as_slice())
        } else {
            self.exhausted = true;
            None
        }
    }
}

/// Rearranges `a` into its lexicographic successor (or predecessor when
/// `descending`). Returns `false` when `a` is already the last arrangement.
fn step(a: &mut [usize], descending: bool) -> bool {
    let n = a.len();
    if n < 2 {
        return false;
    }
    let precedes = |x: usize, y: usize| if descending { x > y } else { x < y };

    let mut i = n - 1;
    while i > 0 && !precedes(a[i - 1], a[i]) {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let pivot = i - 1;
    let mut j = n - 1;
    while !precedes(a[pivot], a[j]) {
        j -= 1;
    }
    a.swap(pivot, j);
    a[i..].reverse();
    true
}

/// `k!`, saturating at `u64::MAX`.
pub fn factorial(k: usize) -> u64 {
    (1..=k as u64).fold(1u64, |acc, x| acc.saturating_mul(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(mut perms: LexPermutations) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        while let Some(p) = perms.advance() {
            out.push(p.to_vec());
        }
        out
    }

    #[test]
    fn test_empty_yields_one_empty_ordering() {
        let all = collect(LexPermutations::new(Vec::new()));
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_single_item() {
        assert_eq!(collect(LexPermutations::new(vec![4])), vec![vec![4]]);
        assert_eq!(collect(LexPermutations::reversed(vec![4])), vec![vec![4]]);
    }

    #[test]
    fn test_ascending_order() {
        let all = collect(LexPermutations::new(vec![3, 1, 2]));
        assert_eq!(
            all,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_reversed_is_exact_reverse() {
        let items: Vec<usize> = (1..6).collect();
        let mut forward = collect(LexPermutations::new(items.clone()));
        let backward = collect(LexPermutations::reversed(items));
        forward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_count_matches_factorial() {
        for k in 0..7 {
            let all = collect(LexPermutations::new((0..k).collect()));
            assert_eq!(all.len() as u64, factorial(k), "k = {k}");
        }
    }

    #[test]
    fn test_orderings_are_distinct() {
        let mut all = collect(LexPermutations::new((1..6).collect()));
        let n = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), n);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut perms = LexPermutations::new(vec![1, 2]);
        assert!(perms.advance().is_some());
        assert!(perms.advance().is_some());
        assert!(perms.advance().is_none());
        assert!(perms.advance().is_none());
    }

    #[test]
    fn test_factorial_saturates() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
        assert_eq!(factorial(21), u64::MAX);
    }
}
