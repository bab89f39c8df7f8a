//! preset.rs
//! Initial frontiers, computed once before any declaration has been made.

use crate::store::{BitSet, CapacityError, PairId, PairSpace};

/// Extremal sum classes that hold a single pair for any bound.
pub fn sums_frontier(space: &PairSpace) -> Vec<PairId> {
    let n = space.bound();
    let mut preset = Vec::with_capacity(4);
    preset.push(space.id_of(1, 1));
    if n == 2 {
        preset.push(space.id_of(1, 2));
        preset.push(space.id_of(2, 2));
    } else if n > 2 {
        preset.push(space.id_of(1, 2));
        preset.push(space.id_of(n - 1, n));
        preset.push(space.id_of(n, n));
    }
    preset
}

/// Every pair `a <= b` whose product no other pair in range shares.
///
/// Two O(n²) passes: first mark products seen more than once, then keep the
/// pairs whose product was never marked. Product `p` lives at bit `p - 1`.
pub fn prods_frontier(space: &PairSpace) -> Result<Vec<PairId>, CapacityError> {
    let n = space.bound();
    let mut seen = BitSet::with_len(space.size())?;
    let mut duplicated = BitSet::with_len(space.size())?;

    for a in 1..=n {
        for b in a..=n {
            let slot = a * b - 1;
            if !seen.insert(slot) {
                duplicated.insert(slot);
            }
        }
    }

    let mut preset = Vec::new();
    for a in 1..=n {
        for b in a..=n {
            if !duplicated.contains(a * b - 1) {
                preset.push(space.id_of(a, b));
            }
        }
    }
    Ok(preset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Pair;
    use rstest::rstest;
    use std::collections::HashMap;

    fn pairs(space: &PairSpace, ids: &[PairId]) -> Vec<(u64, u64)> {
        space.pairs_of(ids).into_iter().map(|Pair { a, b }| (a, b)).collect()
    }

    #[rstest]
    #[case(1, vec![(1, 1)])]
    #[case(2, vec![(1, 1), (1, 2), (2, 2)])]
    #[case(4, vec![(1, 1), (1, 2), (3, 4), (4, 4)])]
    #[case(100, vec![(1, 1), (1, 2), (99, 100), (100, 100)])]
    fn test_sums_preset(#[case] n: u64, #[case] expected: Vec<(u64, u64)>) {
        let space = PairSpace::new(n);
        assert_eq!(pairs(&space, &sums_frontier(&space)), expected);
    }

    #[test]
    fn test_prods_preset_for_four_drops_shared_product() {
        // Product 4 comes from (1,4) and (2,2); every other product is unique.
        let space = PairSpace::new(4);
        let preset = prods_frontier(&space).unwrap();
        assert_eq!(
            pairs(&space, &preset),
            vec![(1, 1), (1, 2), (1, 3), (2, 3), (2, 4), (3, 3), (3, 4), (4, 4)]
        );
    }

    #[rstest]
    #[case(1)]
    #[case(6)]
    #[case(25)]
    fn test_prods_preset_matches_counting(#[case] n: u64) {
        let space = PairSpace::new(n);
        let mut counts: HashMap<u64, usize> = HashMap::new();
        for a in 1..=n {
            for b in a..=n {
                *counts.entry(a * b).or_default() += 1;
            }
        }

        let preset = pairs(&space, &prods_frontier(&space).unwrap());
        let mut expected = Vec::new();
        for a in 1..=n {
            for b in a..=n {
                if counts[&(a * b)] == 1 {
                    expected.push((a, b));
                }
            }
        }
        assert_eq!(preset, expected);
    }
}
