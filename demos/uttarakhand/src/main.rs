//! uttarakhand — rust_fq demo over the 13-district service directory.
//!
//! Seeds the full Uttarakhand network (13 hubs, 65 service centers,
//! 100 km hub mesh), answers a nearest-facility query from a field
//! location, and shows how the caller's anchor choice shapes the ranking.
//! Writes the first query's results to `output/uttarakhand/nearest.json`.

mod dataset;

use std::fs;

use anyhow::Result;

use fq_core::{Category, GeoPoint};
use fq_directory::{build_network, Directory, FacilityMatch, QueryRequest, HUB_LINK_THRESHOLD_KM};

// ── Constants ─────────────────────────────────────────────────────────────────

/// A field on the Rishikesh outskirts, between Dehradun and Haridwar.
const FIELD_LAT: f64 = 30.0869;
const FIELD_LON: f64 = 78.2676;
const RESULT_LIMIT: usize = 5;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn print_matches(matches: &[FacilityMatch]) {
    println!(
        "{:<42} {:>9} {:>9}  {}",
        "Facility", "rank km", "line km", "Services"
    );
    println!("{}", "-".repeat(100));
    for m in matches {
        println!(
            "{:<42} {:>9.1} {:>9.1}  {}",
            m.name, m.path_km, m.distance_km, m.services
        );
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== uttarakhand — rust_fq nearest-facility demo ===");
    println!();

    // 1. Seed the network.
    let hubs = dataset::district_hubs()?;
    let facilities = dataset::service_centers(&hubs);
    let net = build_network(&hubs, &facilities, HUB_LINK_THRESHOLD_KM)?;
    println!(
        "Facility network: {} locations, {} roads ({} hubs, {} centers, {:.0} km hub mesh)",
        net.location_count(),
        net.road_count(),
        hubs.len(),
        facilities.len(),
        HUB_LINK_THRESHOLD_KM
    );

    let field = GeoPoint::new(FIELD_LAT, FIELD_LON);
    if let Some(id) = net.nearest_hub(field) {
        println!("Geometrically nearest hub to the field: {}", net[id].name);
    }
    println!();

    let dir = Directory::new(net);

    // 2. Query anchored at Dehradun.
    let request = QueryRequest {
        lat:        FIELD_LAT,
        lon:        FIELD_LON,
        anchor_hub: "Dehradun".to_string(),
        category:   Category::ServiceCenter,
        limit:      RESULT_LIMIT,
    };
    let matches = dir.nearest_facilities(&request)?;
    println!(
        "{} nearest centers from ({FIELD_LAT}, {FIELD_LON}), anchored at Dehradun:",
        matches.len()
    );
    print_matches(&matches);

    // 3. Same field, anchored at Haridwar: the ranking follows the anchor.
    let via_haridwar = dir.nearest_facilities(&QueryRequest {
        anchor_hub: "Haridwar".to_string(),
        ..request.clone()
    })?;
    println!("Same field anchored at Haridwar:");
    print_matches(&via_haridwar);

    // 4. Dump the Dehradun-anchored results for the visualization layer.
    fs::create_dir_all("output/uttarakhand")?;
    let json = serde_json::to_string_pretty(&matches)?;
    fs::write("output/uttarakhand/nearest.json", &json)?;
    println!(
        "Wrote output/uttarakhand/nearest.json ({} results)",
        matches.len()
    );

    Ok(())
}
