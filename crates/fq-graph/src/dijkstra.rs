//! Shortest-path engine: `PathEngine` trait and default Dijkstra
//! implementation.
//!
//! # Pluggability
//!
//! `fq-directory` computes paths via the [`PathEngine`] trait, so
//! applications can swap in custom implementations (A*, contraction
//! hierarchies, precomputed tables) without touching the query facade.
//! The default [`DijkstraEngine`] is sufficient at directory scale.
//!
//! # Heap discipline
//!
//! The frontier is a lazy-deletion binary heap: relaxing a node re-pushes
//! it with its new priority and stale entries are skipped at pop time by
//! comparing against the settled distance.  No linear removal ever happens,
//! so relaxation stays O(log n) amortized on graphs of any size.  Ties are
//! broken by `LocationId`, which makes extraction order fully deterministic
//! for a fixed insertion order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fq_core::{GeoPoint, LocationId};

use crate::network::FacilityNetwork;
use crate::{GraphError, GraphResult};

/// Sentinel distance for nodes a query could not reach.
pub const UNREACHED_KM: f64 = f64::INFINITY;

// ── DistanceMap ───────────────────────────────────────────────────────────────

/// The result of one shortest-path computation: per-location accumulated
/// path distance plus a predecessor map for route reconstruction.
///
/// Indexed by `LocationId`; locations the origin cannot reach hold
/// [`UNREACHED_KM`] and an absent predecessor.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    dist: Vec<f64>,
    prev: Vec<LocationId>,
}

impl DistanceMap {
    /// Accumulated path distance to `id`, or [`UNREACHED_KM`].
    #[inline]
    pub fn distance_km(&self, id: LocationId) -> f64 {
        self.dist.get(id.index()).copied().unwrap_or(UNREACHED_KM)
    }

    #[inline]
    pub fn is_reachable(&self, id: LocationId) -> bool {
        self.distance_km(id).is_finite()
    }

    /// The node a shortest path enters `id` from, if any.  Absent for the
    /// origin, for overlay anchors, and for unreached nodes.
    pub fn predecessor(&self, id: LocationId) -> Option<LocationId> {
        match self.prev.get(id.index()) {
            Some(&p) if p != LocationId::INVALID => Some(p),
            _ => None,
        }
    }

    /// Reconstruct the route to `target` as a node sequence ending at
    /// `target`.  The first element is the origin (or, for an overlay
    /// query, the anchor hub the virtual origin attaches to).  Empty if
    /// `target` was not reached.
    pub fn path_to(&self, target: LocationId) -> Vec<LocationId> {
        if !self.is_reachable(target) {
            return Vec::new();
        }
        let mut path = vec![target];
        let mut cur = target;
        while let Some(p) = self.predecessor(cur) {
            path.push(p);
            cur = p;
        }
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }
}

// ── Heap entry ────────────────────────────────────────────────────────────────

/// Frontier entry ordered so `BinaryHeap` (a max-heap) pops the smallest
/// tentative distance first, smallest `LocationId` on ties.
#[derive(Debug, Copy, Clone)]
struct HeapEntry {
    cost: f64,
    node: LocationId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal && self.node == other.node
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

// ── PathEngine trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one engine instance can serve
/// concurrent queries over a shared network.
pub trait PathEngine: Send + Sync {
    /// Shortest paths over the full network from a member origin.
    fn shortest_paths(
        &self,
        network: &FacilityNetwork,
        origin: LocationId,
    ) -> GraphResult<DistanceMap>;

    /// Shortest paths from a virtual query point attached to `anchor` by a
    /// single virtual road, computed without mutating the network.
    fn shortest_paths_overlay(
        &self,
        network: &FacilityNetwork,
        query_pos: GeoPoint,
        anchor: LocationId,
    ) -> GraphResult<DistanceMap>;
}

/// Classic Dijkstra over the adjacency lists.
pub struct DijkstraEngine;

impl PathEngine for DijkstraEngine {
    fn shortest_paths(
        &self,
        network: &FacilityNetwork,
        origin: LocationId,
    ) -> GraphResult<DistanceMap> {
        shortest_paths(network, origin)
    }

    fn shortest_paths_overlay(
        &self,
        network: &FacilityNetwork,
        query_pos: GeoPoint,
        anchor: LocationId,
    ) -> GraphResult<DistanceMap> {
        shortest_paths_overlay(network, query_pos, anchor)
    }
}

// ── Entry points ──────────────────────────────────────────────────────────────

/// Single-source shortest paths from `origin` over the whole network.
///
/// Fails with [`GraphError::UnknownOrigin`] if `origin` is not a member
/// (an empty network rejects every origin).  A single-node network succeeds
/// trivially with distance 0 for that node.
pub fn shortest_paths(
    network: &FacilityNetwork,
    origin: LocationId,
) -> GraphResult<DistanceMap> {
    if !network.contains(origin) {
        return Err(GraphError::UnknownOrigin(origin));
    }
    Ok(run(network, origin, 0.0))
}

/// Shortest paths from an ephemeral query point.
///
/// The query origin and its single connecting road exist only as a local
/// overlay: the search starts at `anchor` with the virtual road's weight
/// (the great-circle distance from `query_pos` to the anchor) already
/// accumulated.  The shared network is never touched, so repeated queries
/// leak nothing into long-lived state.
///
/// The anchor is whatever the caller selected; it is not snapped to the
/// geometrically nearest hub.
pub fn shortest_paths_overlay(
    network: &FacilityNetwork,
    query_pos: GeoPoint,
    anchor: LocationId,
) -> GraphResult<DistanceMap> {
    let anchor_loc = network
        .location(anchor)
        .ok_or(GraphError::UnknownOrigin(anchor))?;
    let link_km = query_pos.distance_km(anchor_loc.pos);
    Ok(run(network, anchor, link_km))
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn run(network: &FacilityNetwork, seed: LocationId, seed_cost: f64) -> DistanceMap {
    let n = network.location_count();
    let mut dist = vec![UNREACHED_KM; n];
    let mut prev = vec![LocationId::INVALID; n];

    dist[seed.index()] = seed_cost;

    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry { cost: seed_cost, node: seed });

    while let Some(HeapEntry { cost, node }) = heap.pop() {
        // Skip stale entries superseded by a cheaper re-push.
        if cost > dist[node.index()] {
            continue;
        }

        for road in network.out_roads(node) {
            let next = cost + road.length_km;
            if next < dist[road.to.index()] {
                dist[road.to.index()] = next;
                prev[road.to.index()] = node;
                heap.push(HeapEntry { cost: next, node: road.to });
            }
        }
    }

    DistanceMap { dist, prev }
}
