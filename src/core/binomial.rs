/// Binomial coefficients `C(n, k)` for every `n` up to a fixed limit.
///
/// This is Pascal's triangle computed once, up front. Building it only ever
/// adds, so no entry can overflow before the table's own largest value
/// does, and `C(128, 64)` still fits in a `u128`. The table is immutable
/// after construction and is passed to whatever needs it rather than living
/// in a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binomials {
    rows: Vec<Vec<u128>>,
}

impl Binomials {
    /// Build every row up to and including `max_n`.
    ///
    /// ```
    /// use hand_odds::core::Binomials;
    ///
    /// let binomials = Binomials::new(52);
    /// assert_eq!(2_598_960, binomials.choose(52, 5));
    /// assert_eq!(0, binomials.choose(4, 5));
    /// ```
    pub fn new(max_n: usize) -> Self {
        let mut rows: Vec<Vec<u128>> = Vec::with_capacity(max_n + 1);
        rows.push(vec![1]);
        for n in 1..=max_n {
            let prev = &rows[n - 1];
            let mut row = Vec::with_capacity(n + 1);
            row.push(1);
            for k in 1..n {
                row.push(prev[k - 1] + prev[k]);
            }
            row.push(1);
            rows.push(row);
        }
        Self { rows }
    }

    /// The largest `n` this table answers for.
    pub fn max_n(&self) -> usize {
        self.rows.len() - 1
    }

    /// Ways to choose `k` items out of `n`. Zero when `k > n`.
    pub fn choose(&self, n: usize, k: usize) -> u128 {
        debug_assert!(n <= self.max_n(), "C({n}, {k}) is past the table");
        if k > n {
            0
        } else {
            self.rows[n][k]
        }
    }

    /// Number of ways to split `n` distinct items into labelled groups of
    /// the given sizes, with whatever is left over forming one more group.
    /// Computed as a product of binomials so that identical groups are
    /// never told apart.
    pub fn multinomial(&self, n: usize, groups: &[usize]) -> u128 {
        let mut left = n;
        let mut ways = 1;
        for &g in groups {
            if g > left {
                return 0;
            }
            ways *= self.choose(left, g);
            left -= g;
        }
        ways
    }
}
