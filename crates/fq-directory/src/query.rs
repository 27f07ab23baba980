//! The query facade: anchor-hub overlay search plus result shaping.
//!
//! # Two distances per match
//!
//! Results are **ranked** by accumulated path distance through the road
//! network (query point → anchor hub → … → facility) but **display** the
//! straight-line great-circle distance from the query point to the
//! facility.  The divergence is deliberate: ranking reflects network
//! topology, the displayed figure reflects proximity as the crow flies.
//! Both are exposed so callers can show either.

use fq_core::{Category, GeoPoint, LocationId};
use fq_graph::{nearest, DijkstraEngine, FacilityNetwork, PathEngine};
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::builder::{FacilitySpec, HubSpec};
use crate::{DirectoryError, DirectoryResult};

// ── Request / response ────────────────────────────────────────────────────────

/// One nearest-facility query.
#[derive(Clone, Debug)]
pub struct QueryRequest {
    /// Query point, signed decimal degrees.  Not range-validated; see
    /// [`GeoPoint`](fq_core::GeoPoint).
    pub lat: f64,
    pub lon: f64,
    /// The hub the query point attaches to.  Caller-selected; the engine
    /// does not substitute the geometrically nearest hub.
    pub anchor_hub: String,
    pub category: Category,
    /// Maximum number of results.  Zero is a valid request for none.
    pub limit: usize,
}

/// One ranked facility, ready for display.
#[derive(Clone, Debug, Serialize)]
pub struct FacilityMatch {
    pub name:     String,
    pub address:  String,
    pub contact:  String,
    pub services: String,
    /// Straight-line great-circle distance from the query point, km.
    pub distance_km: f64,
    /// Path distance used for ranking, km; infinite when the facility is
    /// unreachable through the network from the anchor.
    pub path_km: f64,
}

// ── Directory ─────────────────────────────────────────────────────────────────

/// A facility network plus a path engine, exposed as a query API.
///
/// # Mutation vs. queries
///
/// Queries take `&self` and never touch the network (the ephemeral query
/// origin lives only in the engine's overlay), so many can run in parallel
/// over one shared `Directory`.  Registration takes `&mut self`, which
/// serializes it against every in-flight query.
pub struct Directory<E: PathEngine = DijkstraEngine> {
    network: FacilityNetwork,
    engine:  E,
}

impl Directory<DijkstraEngine> {
    pub fn new(network: FacilityNetwork) -> Self {
        Self { network, engine: DijkstraEngine }
    }
}

impl<E: PathEngine> Directory<E> {
    /// Use a custom shortest-path engine.
    pub fn with_engine(network: FacilityNetwork, engine: E) -> Self {
        Self { network, engine }
    }

    pub fn network(&self) -> &FacilityNetwork {
        &self.network
    }

    // ── Registration (persistent, explicit) ───────────────────────────────

    /// Permanently register a new hub.  Idempotent by name.
    pub fn register_hub(&mut self, spec: &HubSpec) -> LocationId {
        self.network.add_location(
            spec.name.clone(),
            spec.pos(),
            Category::Hub,
            fq_graph::FacilityInfo { address: spec.address.clone(), ..Default::default() },
        )
    }

    /// Permanently register a new facility wired to its owning hub.
    ///
    /// This is the explicit-intent path for adding a point of interest to
    /// the shared network; ephemeral query origins never come through here.
    /// Idempotent by name: re-registering an existing facility returns its
    /// ID without adding a duplicate attachment road.
    pub fn register_facility(&mut self, spec: &FacilitySpec) -> DirectoryResult<LocationId> {
        if let Some(existing) = self.network.locate(&spec.name) {
            return Ok(existing);
        }

        let owner = self
            .network
            .locate(&spec.hub)
            .filter(|&id| self.network[id].category.is_hub())
            .ok_or_else(|| DirectoryError::UnknownHub(spec.hub.clone()))?;

        let id = self.network.add_location(
            spec.name.clone(),
            spec.pos(),
            Category::ServiceCenter,
            fq_graph::FacilityInfo {
                address:  spec.address.clone(),
                contact:  spec.contact.clone(),
                services: spec.services.clone(),
            },
        );
        self.network.add_road(owner, id)?;
        Ok(id)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The `limit` nearest facilities of the requested category, ranked by
    /// path distance through the anchor hub.
    ///
    /// Unreachable facilities are ranked after all reachable ones, never
    /// dropped.  An empty result (zero limit, absent category) is a normal
    /// outcome.  Fails only when `anchor_hub` names no hub in the network.
    pub fn nearest_facilities(
        &self,
        req: &QueryRequest,
    ) -> DirectoryResult<Vec<FacilityMatch>> {
        let anchor = self
            .network
            .locate(&req.anchor_hub)
            .filter(|&id| self.network[id].category.is_hub())
            .ok_or_else(|| DirectoryError::UnknownHub(req.anchor_hub.clone()))?;

        let query_pos = GeoPoint::new(req.lat, req.lon);
        let paths = self
            .engine
            .shortest_paths_overlay(&self.network, query_pos, anchor)?;

        let ranked = nearest(&self.network, &paths, req.category, req.limit);

        Ok(ranked
            .into_iter()
            .map(|hit| {
                let loc = &self.network[hit.id];
                FacilityMatch {
                    name:        loc.name.clone(),
                    address:     loc.info.address.clone(),
                    contact:     loc.info.contact.clone(),
                    services:    loc.info.services.clone(),
                    distance_km: query_pos.distance_km(loc.pos),
                    path_km:     hit.path_km,
                }
            })
            .collect())
    }

    /// Answer many independent queries concurrently over the shared
    /// network.  Results keep request order.
    #[cfg(feature = "parallel")]
    pub fn nearest_facilities_batch(
        &self,
        reqs: &[QueryRequest],
    ) -> Vec<DirectoryResult<Vec<FacilityMatch>>> {
        reqs.par_iter().map(|req| self.nearest_facilities(req)).collect()
    }
}
