/// Enumerates every `k`-element combination of `source`.
///
/// Each combination keeps the relative order its elements have in `source`.
/// The order of the combinations themselves is not part of the contract;
/// callers that need randomness shuffle the result.
///
/// Edge cases: `k == 0`, an empty source, and `k > source.len()` all yield no
/// combinations, while `k == source.len()` yields the whole source once.
///
/// ```
/// use setgame_engine::combinations::combinations;
///
/// let combos = combinations(&[1, 2, 3, 4], 2);
/// assert_eq!(combos.len(), 6);
/// assert!(combos.contains(&vec![2, 4]));
/// assert!(combinations(&[1, 2, 3], 0).is_empty());
/// ```
pub fn combinations<T: Clone>(source: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 || k > source.len() {
        return Vec::new();
    }
    if k == source.len() {
        return vec![source.to_vec()];
    }
    if k == 1 {
        return source.iter().map(|x| vec![x.clone()]).collect();
    }

    let (head, rest) = (&source[0], &source[1..]);
    let mut result: Vec<Vec<T>> = combinations(rest, k - 1)
        .into_iter()
        .map(|tail| {
            let mut combo = Vec::with_capacity(k);
            combo.push(head.clone());
            combo.extend(tail);
            combo
        })
        .collect();
    result.extend(combinations(rest, k));
    result
}

/// Number of `k`-combinations of `n` elements.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_matches_known_values() {
        assert_eq!(binomial(15, 3), 455);
        assert_eq!(binomial(12, 3), 220);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(2, 3), 0);
    }

    #[test]
    fn combinations_preserve_source_order() {
        for combo in combinations(&[1, 2, 3, 4, 5], 3) {
            let mut sorted = combo.clone();
            sorted.sort();
            assert_eq!(combo, sorted);
        }
    }
}
