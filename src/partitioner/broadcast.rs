//! Per-source K-hop BFS that claims unclaimed vertices for its source.
//!
//! Each broadcast uses a local FIFO queue — there is no shared frontier
//! across sources (Design Note "BFS with shared frontier across sources"
//! is explicitly rejected: the first-writer-wins correctness argument
//! depends on every source racing independently). The only contention
//! point is the per-shard mutex inside [`ShardedIdMap::try_claim`].

use std::collections::VecDeque;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{PartitionError, Result};
use crate::partitioner::adjacency::AdjacencyIndex;
use crate::partitioner::sharded_map::ShardedIdMap;

/// Seed every role-labeled key to own itself, unconditionally. Must
/// complete before any broadcast starts, or a neighbor's BFS could claim
/// a source before the source claims itself.
pub fn seed_self_ownership<'a>(
    id_map: &ShardedIdMap,
    sources: impl Iterator<Item = &'a str>,
) {
    for source in sources {
        id_map.try_claim(source, source);
    }
}

/// Bounded K-hop BFS from `source`, attempting to claim every vertex it
/// visits. Termination is guaranteed because each dequeue strictly
/// decreases the hop counter.
pub fn broadcast(source: &str, adjacency: &AdjacencyIndex, id_map: &ShardedIdMap, k_hop: usize) {
    let mut queue: VecDeque<(String, usize)> = VecDeque::new();
    queue.push_back((source.to_string(), k_hop));

    while let Some((vertex, hops_remaining)) = queue.pop_front() {
        if id_map.try_claim(&vertex, source) {
            debug!(node = %vertex, owner = %source, "claimed node");
        }
        if hops_remaining == 0 {
            continue;
        }
        for neighbor in adjacency.neighbors(&vertex) {
            queue.push_back((neighbor.clone(), hops_remaining - 1));
        }
    }
}

/// Run one broadcast per source. `worker_count` of `None` uses rayon's
/// default (logical CPU count) global pool; `Some(n)` builds a dedicated
/// `n`-thread pool, with `n == 1` yielding the deterministic
/// single-threaded `Train || Val || Test` order (SPEC_FULL.md §5).
///
/// Building a dedicated pool is fallible (e.g. an unreasonable `--workers`
/// value on a constrained host), so this returns `Result` rather than
/// panicking on a condition a caller can legitimately hit.
pub fn run_broadcasts(
    sources: &[String],
    adjacency: &AdjacencyIndex,
    id_map: &ShardedIdMap,
    k_hop: usize,
    worker_count: Option<usize>,
) -> Result<()> {
    let task = || {
        sources
            .par_iter()
            .for_each(|source| broadcast(source, adjacency, id_map, k_hop));
    };

    match worker_count {
        None => {
            task();
            Ok(())
        }
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| {
                    PartitionError::Internal(format!(
                        "failed to build broadcast thread pool with {n} workers: {e}"
                    ))
                })?;
            pool.install(task);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partitioner::table::Table;

    fn chain_adjacency(edges: &[(&str, &str)]) -> AdjacencyIndex {
        let table = Table {
            header: vec!["src".into(), "dst".into()],
            rows: edges
                .iter()
                .map(|(s, d)| vec![s.to_string(), d.to_string()])
                .collect(),
        };
        AdjacencyIndex::build(&table)
    }

    #[test]
    fn k_hop_zero_claims_only_the_source() {
        let adjacency = chain_adjacency(&[("a", "b")]);
        let id_map = ShardedIdMap::new();
        seed_self_ownership(&id_map, std::iter::once("a"));
        broadcast("a", &adjacency, &id_map, 0);
        assert_eq!(id_map.get("a").as_deref(), Some("a"));
        assert_eq!(id_map.get("b"), None);
    }

    #[test]
    fn k_hop_coverage_stops_at_the_budget() {
        // a -> b -> c -> d, K=2 claims a,b,c but not d (S3 in SPEC_FULL.md §8).
        let adjacency = chain_adjacency(&[("a", "b"), ("b", "c"), ("c", "d")]);
        let id_map = ShardedIdMap::new();
        seed_self_ownership(&id_map, std::iter::once("a"));
        broadcast("a", &adjacency, &id_map, 2);
        assert_eq!(id_map.get("a").as_deref(), Some("a"));
        assert_eq!(id_map.get("b").as_deref(), Some("a"));
        assert_eq!(id_map.get("c").as_deref(), Some("a"));
        assert_eq!(id_map.get("d"), None);
    }

    #[test]
    fn self_seeding_prevents_cross_claim() {
        // a <-> b, both are sources: self-seeding must win the race (S4).
        let adjacency = chain_adjacency(&[("a", "b"), ("b", "a")]);
        let id_map = ShardedIdMap::new();
        let sources = ["a", "b"];
        seed_self_ownership(&id_map, sources.iter().copied());
        for source in sources {
            broadcast(source, &adjacency, &id_map, 1);
        }
        assert_eq!(id_map.get("a").as_deref(), Some("a"));
        assert_eq!(id_map.get("b").as_deref(), Some("b"));
    }

    #[test]
    fn run_broadcasts_single_worker_is_deterministic() {
        let adjacency = chain_adjacency(&[("a", "b"), ("c", "d")]);
        let sources = vec!["a".to_string(), "c".to_string()];
        for _ in 0..5 {
            let id_map = ShardedIdMap::new();
            seed_self_ownership(&id_map, sources.iter().map(String::as_str));
            run_broadcasts(&sources, &adjacency, &id_map, 1, Some(1)).unwrap();
            assert_eq!(id_map.get("b").as_deref(), Some("a"));
            assert_eq!(id_map.get("d").as_deref(), Some("c"));
        }
    }
}
