//! Facility network representation.
//!
//! # Data layout
//!
//! The graph is an **insert-only adjacency structure**: one `Location`
//! record per node plus one ordered `Vec<RoadEntry>` per node, indexed by
//! `LocationId`.  Roads are undirected; each `add_road` call materializes
//! two directed entries of identical weight.  Adjacency lists (rather than
//! a frozen CSR layout) keep the network open to incremental registration
//! of new facilities after the initial build.
//!
//! # Name index and spatial index
//!
//! Names are identity: a location is distinguished by its unique name, not
//! by coordinate equality — near-duplicate coordinates are legal and common
//! (service centers cluster around their hub).  An `FxHashMap` maps names
//! to IDs; observable behavior is identical to the linear scan it replaces.
//!
//! An R-tree (via `rstar`) indexes **hub** positions only, answering
//! "which hub is geometrically nearest to this point".  It is a helper for
//! callers; the query path never snaps to it on its own.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use fq_core::{Category, GeoPoint, LocationId, RoadId};

use crate::{GraphError, GraphResult};

// ── R-tree hub entry ──────────────────────────────────────────────────────────

/// Entry stored in the hub spatial index: a 2-D `[lat, lon]` point with the
/// associated `LocationId`.
#[derive(Clone, Debug)]
struct HubEntry {
    point: [f64; 2], // [lat, lon]
    id: LocationId,
}

impl RTreeObject for HubEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for HubEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-hub queries at regional scale.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// Display-only metadata carried by a location.  Never read by the
/// shortest-path or selection algorithms.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacilityInfo {
    pub address:  String,
    pub contact:  String,
    pub services: String,
}

impl FacilityInfo {
    /// Empty metadata, for hubs and synthetic points.
    pub fn none() -> Self {
        Self::default()
    }
}

/// A node in the facility network.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Unique within one network instance; this is the node's identity.
    pub name:     String,
    pub pos:      GeoPoint,
    pub category: Category,
    pub info:     FacilityInfo,
}

/// One directed adjacency entry.  Weight is the great-circle distance
/// between the endpoints, computed once at insertion and never recomputed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadEntry {
    pub to:        LocationId,
    pub length_km: f64,
}

// ── FacilityNetwork ───────────────────────────────────────────────────────────

/// Undirected weighted graph of hubs and service centers.
///
/// Mutation is insert-only: locations and roads are added, never removed or
/// updated.  All query entry points take `&self`; see the crate-level notes
/// on thread safety.
#[derive(Debug)]
pub struct FacilityNetwork {
    locations: Vec<Location>,
    adjacency: Vec<Vec<RoadEntry>>,
    /// Undirected road count (each road occupies two adjacency entries).
    road_count: usize,
    name_index: FxHashMap<String, LocationId>,
    hub_idx:    RTree<HubEntry>,
}

impl FacilityNetwork {
    pub fn new() -> Self {
        Self {
            locations:  Vec::new(),
            adjacency:  Vec::new(),
            road_count: 0,
            name_index: FxHashMap::default(),
            hub_idx:    RTree::new(),
        }
    }

    /// Pre-allocate for the expected number of locations when bulk-seeding
    /// from a dataset.
    pub fn with_capacity(locations: usize) -> Self {
        Self {
            locations:  Vec::with_capacity(locations),
            adjacency:  Vec::with_capacity(locations),
            road_count: 0,
            name_index: FxHashMap::default(),
            hub_idx:    RTree::new(),
        }
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Insert a location and return its ID.
    ///
    /// Idempotent by identity: re-adding a name already present is a no-op
    /// that returns the existing ID, never an error.  Hub insertions also
    /// enter the spatial index.
    pub fn add_location(
        &mut self,
        name: impl Into<String>,
        pos: GeoPoint,
        category: Category,
        info: FacilityInfo,
    ) -> LocationId {
        let name = name.into();
        if let Some(&id) = self.name_index.get(&name) {
            return id;
        }

        let id = LocationId(self.locations.len() as u32);
        self.name_index.insert(name.clone(), id);
        if category.is_hub() {
            self.hub_idx.insert(HubEntry { point: [pos.lat, pos.lon], id });
        }
        self.locations.push(Location { name, pos, category, info });
        self.adjacency.push(Vec::new());
        id
    }

    /// Insert an undirected road between two member locations.
    ///
    /// The weight is the haversine distance between the endpoints.  Calling
    /// this twice for the same pair creates a parallel road; nothing is
    /// merged or overwritten, so callers must avoid redundant calls if
    /// parallel roads are undesired.
    pub fn add_road(&mut self, a: LocationId, b: LocationId) -> GraphResult<RoadId> {
        if !self.contains(a) {
            return Err(GraphError::UnknownNode(a));
        }
        if !self.contains(b) {
            return Err(GraphError::UnknownNode(b));
        }

        let length_km = self.locations[a.index()].pos.distance_km(self.locations[b.index()].pos);
        self.adjacency[a.index()].push(RoadEntry { to: b, length_km });
        self.adjacency[b.index()].push(RoadEntry { to: a, length_km });

        let id = RoadId(self.road_count as u32);
        self.road_count += 1;
        Ok(id)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of undirected roads inserted (parallel roads counted each).
    pub fn road_count(&self) -> usize {
        self.road_count
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.locations.len()
    }

    /// Checked access to a location record.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// Resolve a name to its ID.
    pub fn locate(&self, name: &str) -> Option<LocationId> {
        self.name_index.get(name).copied()
    }

    /// Iterate all locations in insertion order with their IDs.  Use this
    /// for arbitrary predicate scans.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (LocationId(i as u32), loc))
    }

    /// Outgoing adjacency entries of `id`, in insertion order.
    ///
    /// Empty for an unknown ID; membership is the caller's concern on this
    /// hot path.
    #[inline]
    pub fn out_roads(&self, id: LocationId) -> &[RoadEntry] {
        self.adjacency.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The hub geometrically nearest to `pos`, or `None` if the network has
    /// no hubs.  A helper only: the query path anchors to the hub the
    /// caller selects, never to this.
    pub fn nearest_hub(&self, pos: GeoPoint) -> Option<LocationId> {
        self.hub_idx.nearest_neighbor(&[pos.lat, pos.lon]).map(|e| e.id)
    }
}

impl Default for FacilityNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<LocationId> for FacilityNetwork {
    type Output = Location;

    /// Direct indexed access for IDs known to be members.  Panics on a
    /// foreign ID; use [`FacilityNetwork::location`] when unsure.
    #[inline]
    fn index(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }
}
