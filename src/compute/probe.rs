//! probe.rs
//! The uniqueness probe: does a partition class hold exactly one live pair?

use crate::store::{BitSet, PairId, PairSpace};

/// Which projection groups pairs into classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Sum,
    Product,
}

impl Partition {
    pub fn opposite(self) -> Self {
        match self {
            Partition::Sum => Partition::Product,
            Partition::Product => Partition::Sum,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Partition::Sum => "sums",
            Partition::Product => "prods",
        }
    }

    /// Probes the class of `id` against the eliminated set.
    ///
    /// Returns the single live member of the class when there is exactly one.
    /// That member need not be `id` itself.
    #[inline]
    pub fn probe(self, space: &PairSpace, visited: &BitSet, id: PairId) -> Option<PairId> {
        match self {
            Partition::Sum => probe_sum(space, visited, space.sum_of(id)),
            Partition::Product => probe_prod(space, visited, space.prod_of(id)),
        }
    }
}

/// Tracks the live members seen so far, stopping at the second one.
#[derive(Default)]
struct LiveCount {
    first: Option<PairId>,
    ambiguous: bool,
}

impl LiveCount {
    /// Returns `false` once a second live member has been seen.
    #[inline(always)]
    fn see(&mut self, id: PairId) -> bool {
        if self.first.is_none() {
            self.first = Some(id);
            true
        } else {
            self.ambiguous = true;
            false
        }
    }

    fn unique(self) -> Option<PairId> {
        if self.ambiguous { None } else { self.first }
    }
}

/// Walks `i + (s - i) = s` with `1 <= i <= s - i <= n`.
pub fn probe_sum(space: &PairSpace, visited: &BitSet, s: u64) -> Option<PairId> {
    let n = space.bound();
    let start = if s > n { s - n } else { 1 };
    let mut live = LiveCount::default();

    let mut i = start;
    while i <= s - i {
        let curr = space.id_of(i, s - i);
        if !visited.contains(curr.raw()) && !live.see(curr) {
            break;
        }
        i += 1;
    }
    live.unique()
}

/// Walks divisor pairs `i · (p / i) = p` with `1 <= i <= p / i <= n`.
pub fn probe_prod(space: &PairSpace, visited: &BitSet, p: u64) -> Option<PairId> {
    let n = space.bound();
    // Smallest i whose cofactor still fits under the bound.
    let start = p.div_ceil(n).max(1);
    let mut live = LiveCount::default();

    let mut i = start;
    while i <= p / i {
        if p % i == 0 {
            let curr = space.id_of(i, p / i);
            if !visited.contains(curr.raw()) && !live.see(curr) {
                break;
            }
        }
        i += 1;
    }
    live.unique()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn setup(n: u64) -> (PairSpace, BitSet) {
        let space = PairSpace::new(n);
        let visited = BitSet::with_len(space.size()).unwrap();
        (space, visited)
    }

    #[test]
    fn test_sum_with_two_live_decompositions_is_ambiguous() {
        // s = 5 under n = 4: (1,4) and (2,3).
        let (space, visited) = setup(4);
        assert_eq!(Partition::Sum.probe(&space, &visited, space.id_of(1, 4)), None);
        assert_eq!(Partition::Sum.probe(&space, &visited, space.id_of(2, 3)), None);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(1, 2)]
    #[case(3, 4)]
    #[case(4, 4)]
    fn test_extremal_sums_are_unique(#[case] a: u64, #[case] b: u64) {
        let (space, visited) = setup(4);
        let id = space.id_of(a, b);
        assert_eq!(Partition::Sum.probe(&space, &visited, id), Some(id));
    }

    #[test]
    fn test_probe_reports_surviving_member_not_input() {
        let (space, mut visited) = setup(4);
        visited.insert(space.id_of(1, 4).raw());

        // (1,4) itself is eliminated, its sum class now only holds (2,3).
        let found = Partition::Sum.probe(&space, &visited, space.id_of(1, 4));
        assert_eq!(found, Some(space.id_of(2, 3)));

        // Product 4 is shared by (1,4) and (2,2).
        let found = Partition::Product.probe(&space, &visited, space.id_of(1, 4));
        assert_eq!(found, Some(space.id_of(2, 2)));
    }

    #[test]
    fn test_fully_eliminated_class_is_not_unique() {
        let (space, mut visited) = setup(4);
        visited.insert(space.id_of(1, 3).raw());
        visited.insert(space.id_of(2, 2).raw());
        assert_eq!(probe_sum(&space, &visited, 4), None);
    }

    #[rstest]
    #[case(12, 6, None)] // (2,6),(3,4)
    #[case(6, 6, None)] // (1,6),(2,3)
    #[case(7, 6, None)] // (1,7) is out of range
    #[case(5, 6, Some((1, 5)))]
    #[case(36, 6, Some((6, 6)))]
    #[case(30, 6, Some((5, 6)))]
    fn test_product_divisor_walk(#[case] p: u64, #[case] n: u64, #[case] expected: Option<(u64, u64)>) {
        let (space, visited) = setup(n);
        let expected = expected.map(|(a, b)| space.id_of(a, b));
        assert_eq!(probe_prod(&space, &visited, p), expected);
    }

    #[test]
    fn test_product_walk_respects_cofactor_bound() {
        // p = 8 under n = 4: (1,8) is out of range, only (2,4) remains.
        let (space, visited) = setup(4);
        assert_eq!(probe_prod(&space, &visited, 8), Some(space.id_of(2, 4)));
    }
}
