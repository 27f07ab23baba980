//! Network assembly from declarative hub/facility specs.
//!
//! # Topology
//!
//! [`build_network`] wires the graph the way regional service directories
//! are laid out in practice:
//!
//! 1. every hub becomes a node;
//! 2. every facility becomes a node with one road to its owning hub;
//! 3. every pair of hubs closer than the link threshold gets a direct road.
//!
//! The result is connected whenever the hub mesh is; isolated hubs (farther
//! than the threshold from every other hub) are legal and their facilities
//! simply rank as unreachable from elsewhere.

use fq_core::{Category, GeoPoint};
use fq_graph::{FacilityInfo, FacilityNetwork};
use serde::{Deserialize, Serialize};

use crate::{DirectoryError, DirectoryResult};

/// Hubs within this great-circle distance of each other get a direct road.
pub const HUB_LINK_THRESHOLD_KM: f64 = 100.0;

// ── Specs ─────────────────────────────────────────────────────────────────────

/// Declarative description of a regional hub.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HubSpec {
    pub name:    String,
    pub lat:     f64,
    pub lon:     f64,
    pub address: String,
}

/// Declarative description of a service center, owned by a named hub.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacilitySpec {
    /// Name of the owning hub; must appear among the hub specs.
    pub hub:      String,
    pub name:     String,
    pub lat:      f64,
    pub lon:      f64,
    pub address:  String,
    pub contact:  String,
    pub services: String,
}

impl HubSpec {
    pub fn pos(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

impl FacilitySpec {
    pub fn pos(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

// ── Assembly ──────────────────────────────────────────────────────────────────

/// Seed a [`FacilityNetwork`] from hub and facility specs.
///
/// Fails with [`DirectoryError::UnknownHub`] if a facility names an owner
/// that is not among `hubs`.  Hub pairs at exactly the threshold are NOT
/// linked (strictly-closer-than semantics).
pub fn build_network(
    hubs: &[HubSpec],
    facilities: &[FacilitySpec],
    link_threshold_km: f64,
) -> DirectoryResult<FacilityNetwork> {
    let mut net = FacilityNetwork::with_capacity(hubs.len() + facilities.len());

    // Insertion is idempotent by name, so a duplicate hub row resolves to
    // the ID it already has; the dedup below keeps it out of the mesh twice.
    let mut hub_ids = Vec::with_capacity(hubs.len());
    for hub in hubs {
        let id = net.add_location(
            hub.name.clone(),
            hub.pos(),
            Category::Hub,
            FacilityInfo { address: hub.address.clone(), ..Default::default() },
        );
        if !hub_ids.contains(&id) {
            hub_ids.push(id);
        }
    }

    for fac in facilities {
        let owner = net
            .locate(&fac.hub)
            .filter(|&id| net[id].category.is_hub())
            .ok_or_else(|| DirectoryError::UnknownHub(fac.hub.clone()))?;

        let id = net.add_location(
            fac.name.clone(),
            fac.pos(),
            Category::ServiceCenter,
            FacilityInfo {
                address:  fac.address.clone(),
                contact:  fac.contact.clone(),
                services: fac.services.clone(),
            },
        );
        net.add_road(owner, id)?;
    }

    // Hub mesh: one road per sufficiently-close distinct pair.
    for i in 0..hub_ids.len() {
        for j in (i + 1)..hub_ids.len() {
            let (a, b) = (hub_ids[i], hub_ids[j]);
            if net[a].pos.distance_km(net[b].pos) < link_threshold_km {
                net.add_road(a, b)?;
            }
        }
    }

    Ok(net)
}
