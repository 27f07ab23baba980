//! The Uttarakhand district directory dataset.
//!
//! Thirteen district headquarters act as hubs; each carries the five
//! standard agricultural service centers at small, fixed offsets from the
//! district center.  Hub coordinates are the real district HQ positions.

use std::io::Cursor;

use fq_directory::{load_hubs_reader, DirectoryResult, FacilitySpec, HubSpec};

/// District headquarters, one row per hub.
const HUBS_CSV: &str = "\
name,lat,lon,address
Almora,29.5973,79.6609,Almora City
Bageshwar,29.8367,79.7696,Bageshwar City
Chamoli,30.4030,79.3207,Chamoli City
Champawat,29.3355,80.0784,Champawat City
Dehradun,30.3165,78.0322,Dehradun City
Haridwar,29.9457,78.1642,Haridwar City
Nainital,29.3919,79.4542,Nainital City
Pauri Garhwal,30.0856,78.7776,Pauri City
Pithoragarh,29.5820,80.2185,Pithoragarh City
Rudraprayag,30.2847,78.9839,Rudraprayag City
Tehri Garhwal,30.3833,78.4800,Tehri City
Udham Singh Nagar,29.0274,79.5280,USN City
Uttarkashi,30.7292,78.4439,Uttarkashi City
";

/// The five standard service centers every district carries:
/// (name prefix, lat offset, lon offset, address template, services).
const CENTER_TEMPLATES: [(&str, f64, f64, &str, &str); 5] = [
    (
        "Krishi Vigyan Kendra",
        0.01, 0.01,
        "Main Road",
        "Crop Research, Training, Soil Testing",
    ),
    (
        "Agriculture Department",
        -0.01, -0.01,
        "Government Complex",
        "Subsidies, Schemes, Technical Support",
    ),
    (
        "Soil Testing Lab",
        0.02, -0.02,
        "Research Complex",
        "Soil Analysis, Fertilizer Recommendations",
    ),
    (
        "Horticulture Department",
        -0.02, 0.02,
        "Horticulture Complex",
        "Fruit/Vegetable Cultivation, Plant Protection",
    ),
    (
        "Seed Testing Lab",
        0.03, 0.01,
        "Seed Research Center",
        "Seed Quality Testing, Certification",
    ),
];

/// Parse the embedded district hub dataset.
pub fn district_hubs() -> DirectoryResult<Vec<HubSpec>> {
    load_hubs_reader(Cursor::new(HUBS_CSV))
}

/// Generate the five standard service centers for every hub.
pub fn service_centers(hubs: &[HubSpec]) -> Vec<FacilitySpec> {
    hubs.iter()
        .flat_map(|hub| {
            CENTER_TEMPLATES.iter().map(move |(prefix, dlat, dlon, addr, services)| {
                FacilitySpec {
                    hub:      hub.name.clone(),
                    name:     format!("{prefix} - {}", hub.name),
                    lat:      hub.lat + dlat,
                    lon:      hub.lon + dlon,
                    address:  format!("{addr}, {}", hub.name),
                    contact:  "1800-180-2311".to_string(),
                    services: services.to_string(),
                }
            })
        })
        .collect()
}
