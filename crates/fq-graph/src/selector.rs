//! Nearest-facility selection over a computed distance map.

use fq_core::{Category, LocationId};

use crate::dijkstra::DistanceMap;
use crate::network::FacilityNetwork;

/// One selector hit: a location and its accumulated path distance from the
/// query origin.  [`UNREACHED_KM`](crate::UNREACHED_KM) marks facilities
/// the origin cannot reach through the network.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedLocation {
    pub id:      LocationId,
    pub path_km: f64,
}

/// The `limit` nearest locations of `category`, ordered by ascending path
/// distance.
///
/// Unreachable qualifying locations are never dropped: they sort after all
/// reachable ones, carrying the infinite sentinel.  Ties break by ID, so
/// the ordering is deterministic for a fixed insertion order.  A zero
/// limit or an absent category yields an empty vector; neither is an
/// error.  The origin itself is included at distance 0 when it qualifies.
pub fn nearest(
    network: &FacilityNetwork,
    paths: &DistanceMap,
    category: Category,
    limit: usize,
) -> Vec<RankedLocation> {
    let mut hits: Vec<RankedLocation> = network
        .locations()
        .filter(|(_, loc)| loc.category == category)
        .map(|(id, _)| RankedLocation { id, path_km: paths.distance_km(id) })
        .collect();

    hits.sort_by(|a, b| {
        a.path_km
            .total_cmp(&b.path_km)
            .then_with(|| a.id.cmp(&b.id))
    });
    hits.truncate(limit);
    hits
}
