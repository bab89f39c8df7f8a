//! frontier.rs
//! Mutable engine state: the eliminated set plus one frontier per partition.

use super::probe::Partition;
use crate::store::{BitSet, PairId};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct EngineState {
    /// Identifiers proven impossible. Only ever grows.
    visited: BitSet,
    /// Candidates awaiting the next sum-based probe.
    sums: Vec<PairId>,
    /// Candidates awaiting the next product-based probe.
    prods: Vec<PairId>,
    /// Set until the first operation of any kind has run.
    first_round: bool,
}

impl EngineState {
    pub fn new(visited: BitSet, sums: Vec<PairId>, prods: Vec<PairId>) -> Self {
        Self { visited, sums, prods, first_round: true }
    }

    #[inline(always)]
    pub fn visited(&self) -> &BitSet { &self.visited }

    pub fn is_first_round(&self) -> bool { self.first_round }

    pub fn end_first_round(&mut self) { self.first_round = false; }

    pub fn frontier(&self, partition: Partition) -> &[PairId] {
        match partition {
            Partition::Sum => &self.sums,
            Partition::Product => &self.prods,
        }
    }

    /// Installs `ids` as the frontier probed by the other party's partition.
    pub fn hand_off(&mut self, from: Partition, ids: Vec<PairId>) {
        match from {
            Partition::Sum => self.prods = ids,
            Partition::Product => self.sums = ids,
        }
    }

    /// Eliminates `ids`, returning the ones that were still live, in order.
    pub fn mark(&mut self, ids: &[PairId]) -> Vec<PairId> {
        let mut fresh = Vec::with_capacity(ids.len());
        for &id in ids {
            if self.visited.insert(id.raw()) {
                fresh.push(id);
            }
        }
        fresh
    }
}

/// Removes repeated identifiers, keeping the first occurrence of each.
pub fn dedup(mut ids: Vec<PairId>) -> Vec<PairId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.retain(|id| seen.insert(*id));
    ids
}
