use crate::compute::error::{EngineError, MAX_UPPER_BOUND};
use crate::compute::frontier::{self, EngineState};
use crate::compute::pool::{EngineConfig, WorkerPool};
use crate::compute::preset;
use crate::compute::probe::Partition;
use crate::store::{BitSet, Pair, PairId, PairSpace};
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;
use tracing::{debug, error, info, trace};

/// Elimination engine for the sum/product deduction game over `1 <= a <= b <= n`.
///
/// The four public operations serialize on an internal lock. Inside one
/// operation the probes run in parallel against a shared borrow of the state,
/// and only after they have all joined does the calling thread take the state
/// mutably to eliminate candidates and swap frontiers.
pub struct Engine {
    space: PairSpace,
    pool: WorkerPool,
    state: Mutex<EngineState>,
}

impl Engine {
    pub fn new(bound: u64) -> Result<Self, EngineError> {
        Self::with_config(bound, EngineConfig::default())
    }

    /// Validates the bound, allocates the candidate space and computes both
    /// preset frontiers. O(n²) in time and memory.
    pub fn with_config(bound: u64, config: EngineConfig) -> Result<Self, EngineError> {
        let start = Instant::now();

        if bound == 0 || bound > MAX_UPPER_BOUND {
            error!(bound, max = MAX_UPPER_BOUND, "upper bound out of range");
            return Err(EngineError::BoundOutOfRange { bound });
        }

        let space = PairSpace::new(bound);
        let visited = BitSet::with_len(space.size())?;

        let sums = preset::sums_frontier(&space);
        debug!(len = sums.len(), "sums preset");
        trace!(front = ?space.pairs_of(&sums), "sums preset");

        let prods = preset::prods_frontier(&space)?;
        debug!(len = prods.len(), "prods preset");
        trace!(front = ?space.pairs_of(&prods), "prods preset");

        let pool = WorkerPool::new(&config)?;

        info!(bound, threads = pool.threads(), elapsed = ?start.elapsed(), "engine created");
        Ok(Self {
            space,
            pool,
            state: Mutex::new(EngineState::new(visited, sums, prods)),
        })
    }

    pub fn upper_bound(&self) -> u64 { self.space.bound() }

    pub fn threads(&self) -> usize { self.pool.threads() }

    /// Number of pairs eliminated so far.
    pub fn eliminated_count(&self) -> Result<u64, EngineError> {
        Ok(self.lock()?.visited().count())
    }

    /// The sum holder does not know the pair: eliminate every pair whose sum
    /// class has a single live member.
    pub fn filter_non_trivial_sums(&self) -> Result<(), EngineError> {
        self.filter(Partition::Sum)
    }

    /// The product holder does not know the pair: eliminate every pair whose
    /// product class has a single live member.
    pub fn filter_non_trivial_prods(&self) -> Result<(), EngineError> {
        self.filter(Partition::Product)
    }

    /// The sum holder knows the pair: report the pairs it can be.
    pub fn pairs_by_sums(&self) -> Result<Vec<Pair>, EngineError> {
        self.resolve(Partition::Sum)
    }

    /// The product holder knows the pair: report the pairs it can be.
    pub fn pairs_by_prods(&self) -> Result<Vec<Pair>, EngineError> {
        self.resolve(Partition::Product)
    }

    fn lock(&self) -> Result<MutexGuard<'_, EngineState>, EngineError> {
        self.state.lock().map_err(|_| EngineError::Poisoned)
    }

    /// Read-only phase: probes every frontier member in parallel.
    ///
    /// Before the first operation nothing is eliminated and the presets already
    /// are the single-member classes, so the frontier is returned as is.
    fn single_member_classes(&self, state: &EngineState, partition: Partition) -> Vec<PairId> {
        let frontier = state.frontier(partition);
        if state.is_first_round() {
            return frontier.to_vec();
        }

        let space = &self.space;
        let visited = state.visited();
        self.pool.fan_out(frontier, |&id| partition.probe(space, visited, id))
    }

    fn filter(&self, partition: Partition) -> Result<(), EngineError> {
        let start = Instant::now();
        let mut state = self.lock()?;

        let unique = self.single_member_classes(&state, partition);
        let fresh = state.mark(&unique);

        // The product preset survives the opening sum filtration.
        if !(partition == Partition::Sum && state.is_first_round()) {
            state.hand_off(partition, fresh);
        }
        state.end_first_round();

        self.log_front(&state, partition.opposite());
        info!(elapsed = ?start.elapsed(), "non trivial {} filtration", partition.name());
        Ok(())
    }

    fn resolve(&self, partition: Partition) -> Result<Vec<Pair>, EngineError> {
        let start = Instant::now();
        let mut state = self.lock()?;

        let unique = frontier::dedup(self.single_member_classes(&state, partition));
        let pairs = self.space.pairs_of(&unique);
        state.hand_off(partition, unique);
        state.end_first_round();

        self.log_front(&state, partition.opposite());
        info!(elapsed = ?start.elapsed(), "computing by {}", partition.name());
        Ok(pairs)
    }

    fn log_front(&self, state: &EngineState, partition: Partition) {
        let front = state.frontier(partition);
        debug!(len = front.len(), eliminated = state.visited().count(), "new {} front", partition.name());
        trace!(front = ?self.space.pairs_of(front), "new {} front", partition.name());
    }
}
