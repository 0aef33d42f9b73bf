use std::fmt::Display;

use thiserror::Error;

pub mod transpositions;

pub use transpositions::{min_adjacent_swaps, SwapSteps};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerationError {
    #[error("invalid parameters: cannot choose {r} elements from a set of {n}")]
    InvalidParameters { n: usize, r: usize },
    #[error("length mismatch: initial sequence has {initial} elements but target has {target}")]
    LengthMismatch { initial: usize, target: usize },
}

/// Positions into the input sequence, strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexTuple(pub Vec<usize>);

impl IndexTuple {
    fn first(r: usize) -> Self {
        Self((0..r).collect())
    }
    /// Advances to the lexicographically next tuple over `0..n`. Returns `false` when there is
    /// none, in which case the tuple is left unchanged.
    fn advance(&mut self, n: usize) -> bool {
        let r = self.0.len();
        for pos in (0..r).rev() {
            // slot `pos` can hold at most n - r + pos without crowding the slots to its right
            if self.0[pos] < n - r + pos {
                self.0[pos] += 1;
                for k in pos + 1..r {
                    self.0[k] = self.0[k - 1] + 1;
                }
                return true;
            }
        }
        false
    }
    fn select<T: Clone>(&self, elements: &[T]) -> Vec<T> {
        self.0.iter().map(|idx| elements[*idx].clone()).collect()
    }
}

impl Display for IndexTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (pos, idx) in self.0.iter().enumerate() {
            if pos != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", idx)?;
        }
        write!(f, ")")
    }
}

/// Iterates over the r-element combinations of a slice in lexicographic order of the selected
/// index tuples.
pub struct Combinations<'a, T> {
    elements: &'a [T],
    indices: IndexTuple,
    remaining: Option<usize>,
    exhausted: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    pub fn new(elements: &'a [T], r: usize) -> Result<Self, EnumerationError> {
        let n = elements.len();
        if r > n {
            return Err(EnumerationError::InvalidParameters { n, r });
        }
        Ok(Self {
            elements,
            indices: IndexTuple::first(r),
            remaining: binomial(n as u64, r as u64).and_then(|it| usize::try_from(it).ok()),
            exhausted: false,
        })
    }
    /// The index tuple of the next combination to be yielded, if any.
    pub fn peek_indices(&self) -> Option<&IndexTuple> {
        if self.exhausted {
            None
        } else {
            Some(&self.indices)
        }
    }
}

impl<'a, T: Clone> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let combination = self.indices.select(self.elements);
        self.exhausted = !self.indices.advance(self.elements.len());
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

/// Materializes every r-element combination of `elements`.
pub fn generate<T: Clone>(elements: &[T], r: usize) -> Result<Vec<Vec<T>>, EnumerationError> {
    Ok(Combinations::new(elements, r)?.collect())
}

/// C(n, r), or `None` if it does not fit in a `u64`.
pub fn binomial(n: u64, r: u64) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    let r = r.min(n - r);
    let mut acc: u64 = 1;
    for i in 0..r {
        // acc == C(n, i) here, and C(n, i) * (n - i) is divisible by i + 1
        let next = acc as u128 * (n - i) as u128 / (i + 1) as u128;
        acc = u64::try_from(next).ok()?;
    }
    Some(acc)
}

#[cfg(test)]
pub mod tests {
    use std::collections::HashSet;

    use expect_test::expect;
    use rand::Rng;

    use super::*;

    fn render(combinations: &[Vec<i64>]) -> String {
        combinations
            .iter()
            .map(|c| {
                c.iter()
                    .map(|it| it.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn smoketest() {
        let four_choose_two = generate(&[1i64, 2, 3, 4], 2).unwrap();
        expect![[r#"1,2 1,3 1,4 2,3 2,4 3,4"#]].assert_eq(&render(&four_choose_two));
        let three_choose_two = generate(&[1i64, 2, 3], 2).unwrap();
        expect![[r#"1,2 1,3 2,3"#]].assert_eq(&render(&three_choose_two));
    }

    #[test]
    fn order_follows_index_tuples_not_values() {
        let combinations = generate(&[30i64, 10, 20], 2).unwrap();
        assert_eq!(combinations, vec![vec![30, 10], vec![30, 20], vec![10, 20]]);
    }

    #[test]
    fn edge_sizes() {
        assert_eq!(generate(&[1i64, 2, 3], 0).unwrap(), vec![Vec::<i64>::new()]);
        assert_eq!(generate::<i64>(&[], 0).unwrap(), vec![Vec::<i64>::new()]);
        assert_eq!(generate(&[5i64, 1, 9], 3).unwrap(), vec![vec![5, 1, 9]]);
        assert_eq!(
            generate(&[1i64, 2], 3),
            Err(EnumerationError::InvalidParameters { n: 2, r: 3 })
        );
        assert_eq!(
            generate::<i64>(&[], 1),
            Err(EnumerationError::InvalidParameters { n: 0, r: 1 })
        );
    }

    #[test]
    fn known_counts() {
        for (n, r, expected) in [(6, 3, 20), (10, 5, 252), (12, 6, 924), (15, 7, 6435)] {
            let elements = (1..=n as i64).collect::<Vec<_>>();
            assert_eq!(generate(&elements, r).unwrap().len(), expected);
            assert_eq!(binomial(n as u64, r as u64), Some(expected as u64));
        }
    }

    #[test]
    fn binomial_limits() {
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(3, 5), Some(0));
        assert_eq!(binomial(64, 32), Some(1_832_624_140_942_590_534));
        assert_eq!(binomial(67, 33), Some(14_226_520_737_620_288_370));
        assert_eq!(binomial(68, 34), None);
        assert_eq!(binomial(u64::MAX, 1), Some(u64::MAX));
    }

    #[test]
    fn size_hint_counts_down() {
        let elements = [1i64, 2, 3, 4, 5];
        let mut it = Combinations::new(&elements, 2).unwrap();
        assert_eq!(it.size_hint(), (10, Some(10)));
        assert_eq!(it.peek_indices().map(|it| it.to_string()), Some("(0, 1)".into()));
        it.next();
        it.next();
        assert_eq!(it.size_hint(), (8, Some(8)));
        assert_eq!(it.peek_indices().map(|it| it.to_string()), Some("(0, 3)".into()));
        assert_eq!(it.by_ref().count(), 8);
        assert!(it.peek_indices().is_none());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn repeated_generation_is_identical() {
        let elements = (1..=9i64).collect::<Vec<_>>();
        assert_eq!(generate(&elements, 4).unwrap(), generate(&elements, 4).unwrap());
    }

    struct NaiveCombinations(Vec<Vec<usize>>);

    impl NaiveCombinations {
        fn new(n: usize, r: usize) -> Self {
            let mut ret = Self(Vec::new());
            ret.extend(&mut Vec::with_capacity(r), 0, n, r);
            ret
        }
        fn extend(&mut self, prefix: &mut Vec<usize>, start: usize, n: usize, r: usize) {
            if prefix.len() == r {
                self.0.push(prefix.clone());
                return;
            }
            for idx in start..n {
                prefix.push(idx);
                self.extend(prefix, idx + 1, n, r);
                prefix.pop();
            }
        }
    }

    #[test]
    fn randomized_test() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let n = rng.gen_range(0..=12);
            let r = rng.gen_range(0..=n);
            let elements = (0..n).collect::<Vec<usize>>();
            let fast = generate(&elements, r).unwrap();
            let naive = NaiveCombinations::new(n, r).0;
            assert_eq!(fast, naive, "n = {n}, r = {r}");
            assert_eq!(fast.len() as u64, binomial(n as u64, r as u64).unwrap());
            let distinct = fast.iter().collect::<HashSet<_>>();
            assert_eq!(distinct.len(), fast.len());
            assert!(fast.iter().all(|c| c.len() == r));
            assert!(fast.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
