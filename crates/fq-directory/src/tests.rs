//! Unit tests for fq-directory.
//!
//! Fixtures reuse the meridian trick from fq-graph: hubs placed along one
//! line of longitude so inter-hub distances come out to round kilometre
//! figures.

#[cfg(test)]
mod helpers {
    use crate::{FacilitySpec, HubSpec};

    /// Degrees of latitude giving ≈50.0 km along a meridian.
    pub const FIFTY_KM_DEG: f64 = 0.449663;
    /// Degrees of latitude giving ≈40.0 km along a meridian.
    pub const FORTY_KM_DEG: f64 = 0.359730;

    pub fn hub(name: &str, lat: f64, lon: f64) -> HubSpec {
        HubSpec {
            name:    name.to_string(),
            lat,
            lon,
            address: format!("{name} City"),
        }
    }

    pub fn facility(hub: &str, name: &str, lat: f64, lon: f64) -> FacilitySpec {
        FacilitySpec {
            hub:      hub.to_string(),
            name:     name.to_string(),
            lat,
            lon,
            address:  format!("Main Road, {hub}"),
            contact:  "1800-180-2311".to_string(),
            services: "Soil Analysis, Training".to_string(),
        }
    }

    /// Two hubs ≈96.3 km apart (inside the default 100 km threshold) with
    /// one facility owned by the first.
    pub fn two_hub_dataset() -> (Vec<HubSpec>, Vec<FacilitySpec>) {
        let hubs = vec![hub("H1", 30.0, 78.0), hub("H2", 30.0, 79.0)];
        let facilities = vec![facility("H1", "Soil Lab - H1", 30.01, 78.01)];
        (hubs, facilities)
    }

    /// Spec chain: A–B ≈50 km, B–C ≈40 km, A–C ≈90 km, two facilities on C.
    /// With a 60 km threshold the mesh links A–B and B–C but not A–C.
    pub fn chain_dataset() -> (Vec<HubSpec>, Vec<FacilitySpec>) {
        let a_lat = 29.0;
        let b_lat = a_lat + FIFTY_KM_DEG;
        let c_lat = b_lat + FORTY_KM_DEG;

        let hubs = vec![
            hub("A", a_lat, 79.0),
            hub("B", b_lat, 79.0),
            hub("C", c_lat, 79.0),
        ];
        let facilities = vec![
            facility("C", "Agri Office - C", c_lat + 0.01, 79.01),
            facility("C", "Seed Lab - C", c_lat - 0.01, 78.99),
        ];
        (hubs, facilities)
    }
}

// ── Network assembly ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use crate::{build_network, DirectoryError, HUB_LINK_THRESHOLD_KM};
    use super::helpers::{facility, hub, two_hub_dataset};

    #[test]
    fn attaches_facilities_and_meshes_close_hubs() {
        let (hubs, facilities) = two_hub_dataset();
        let net = build_network(&hubs, &facilities, HUB_LINK_THRESHOLD_KM).unwrap();

        assert_eq!(net.location_count(), 3);
        // One facility attachment plus one hub-mesh road.
        assert_eq!(net.road_count(), 2);
    }

    #[test]
    fn threshold_excludes_far_pairs() {
        let (hubs, facilities) = two_hub_dataset();
        let net = build_network(&hubs, &facilities, 50.0).unwrap();

        assert_eq!(net.location_count(), 3);
        assert_eq!(net.road_count(), 1); // attachment only
    }

    #[test]
    fn chain_links_only_adjacent_hubs() {
        let (hubs, facilities) = super::helpers::chain_dataset();
        let net = build_network(&hubs, &facilities, 60.0).unwrap();

        // 3 hubs + 2 facilities; roads: 2 attachments + A–B + B–C.
        assert_eq!(net.location_count(), 5);
        assert_eq!(net.road_count(), 4);
    }

    #[test]
    fn unknown_owner_is_rejected() {
        let hubs = vec![hub("H1", 30.0, 78.0)];
        let facilities = vec![facility("Nowhere", "Orphan Lab", 30.0, 78.0)];

        let err = build_network(&hubs, &facilities, HUB_LINK_THRESHOLD_KM).unwrap_err();
        assert!(matches!(err, DirectoryError::UnknownHub(name) if name == "Nowhere"));
    }

    #[test]
    fn facility_cannot_own_a_facility() {
        let hubs = vec![hub("H1", 30.0, 78.0)];
        let facilities = vec![
            facility("H1", "Lab One", 30.01, 78.01),
            facility("Lab One", "Lab Two", 30.02, 78.02),
        ];

        let err = build_network(&hubs, &facilities, HUB_LINK_THRESHOLD_KM).unwrap_err();
        assert!(matches!(err, DirectoryError::UnknownHub(name) if name == "Lab One"));
    }

    #[test]
    fn duplicate_hub_rows_mesh_once() {
        let hubs = vec![
            hub("H1", 30.0, 78.0),
            hub("H1", 30.0, 78.0),
            hub("H2", 30.0, 79.0),
        ];
        let net = build_network(&hubs, &[], HUB_LINK_THRESHOLD_KM).unwrap();

        assert_eq!(net.location_count(), 2);
        assert_eq!(net.road_count(), 1); // no self-loop, no parallel mesh road
    }
}

// ── Path-distance semantics ───────────────────────────────────────────────────

#[cfg(test)]
mod paths {
    use fq_graph::shortest_paths;
    use crate::{build_network, HUB_LINK_THRESHOLD_KM};

    #[test]
    fn facility_is_closer_to_its_own_hub() {
        let (hubs, facilities) = super::helpers::two_hub_dataset();
        let net = build_network(&hubs, &facilities, HUB_LINK_THRESHOLD_KM).unwrap();

        let h1 = net.locate("H1").unwrap();
        let h2 = net.locate("H2").unwrap();
        let f = net.locate("Soil Lab - H1").unwrap();

        let from_h1 = shortest_paths(&net, h1).unwrap();
        let from_h2 = shortest_paths(&net, h2).unwrap();
        assert!(from_h1.distance_km(f) < from_h2.distance_km(f));
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod query {
    use fq_core::Category;
    use crate::{build_network, Directory, DirectoryError, QueryRequest};
    use super::helpers::{facility, hub};

    fn chain_directory() -> Directory {
        let (hubs, facilities) = super::helpers::chain_dataset();
        Directory::new(build_network(&hubs, &facilities, 60.0).unwrap())
    }

    fn request(lat: f64, lon: f64, anchor: &str, limit: usize) -> QueryRequest {
        QueryRequest {
            lat,
            lon,
            anchor_hub: anchor.to_string(),
            category: Category::ServiceCenter,
            limit,
        }
    }

    #[test]
    fn reaches_facilities_through_the_hub_chain() {
        let dir = chain_directory();
        // Query from hub A's own coordinates: no direct A–C road exists,
        // so both facilities are ≈90 km away through B.
        let matches = dir.nearest_facilities(&request(29.0, 79.0, "A", 5)).unwrap();

        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert!((89.0..93.0).contains(&m.path_km), "got {}", m.path_km);
        }
        assert!(matches[0].path_km <= matches[1].path_km);
    }

    #[test]
    fn display_distance_is_straight_line_not_path() {
        let dir = chain_directory();
        let c_lat = 29.0
            + super::helpers::FIFTY_KM_DEG
            + super::helpers::FORTY_KM_DEG;

        // Standing next to hub C but anchored (per caller choice) at A:
        // the ranking walks ≈180 km of road while the facilities are only a
        // couple of kilometres away as the crow flies.
        let matches = dir.nearest_facilities(&request(c_lat, 79.0, "A", 5)).unwrap();

        for m in &matches {
            assert!(m.path_km > 150.0, "ranking distance {}", m.path_km);
            assert!(m.distance_km < 5.0, "display distance {}", m.distance_km);
        }
    }

    #[test]
    fn unreachable_facilities_rank_last_with_infinite_path() {
        let (mut hubs, mut facilities) = super::helpers::chain_dataset();
        hubs.push(hub("Island", 35.0, 85.0));
        facilities.push(facility("Island", "Island Clinic", 35.01, 85.01));

        let dir = Directory::new(build_network(&hubs, &facilities, 60.0).unwrap());
        let matches = dir.nearest_facilities(&request(29.0, 79.0, "A", 10)).unwrap();

        assert_eq!(matches.len(), 3);
        let last = matches.last().unwrap();
        assert_eq!(last.name, "Island Clinic");
        assert!(last.path_km.is_infinite());
        assert!(last.distance_km.is_finite());
    }

    #[test]
    fn zero_limit_and_absent_category_are_empty() {
        let dir = chain_directory();
        assert!(dir.nearest_facilities(&request(29.0, 79.0, "A", 0)).unwrap().is_empty());

        let mut req = request(29.0, 79.0, "A", 5);
        req.category = Category::QueryPoint;
        assert!(dir.nearest_facilities(&req).unwrap().is_empty());
    }

    #[test]
    fn unknown_anchor_is_rejected() {
        let dir = chain_directory();
        let err = dir.nearest_facilities(&request(29.0, 79.0, "Nowhere", 5)).unwrap_err();
        assert!(matches!(err, DirectoryError::UnknownHub(_)));

        // A facility name is not a valid anchor either.
        let err = dir
            .nearest_facilities(&request(29.0, 79.0, "Agri Office - C", 5))
            .unwrap_err();
        assert!(matches!(err, DirectoryError::UnknownHub(_)));
    }

    #[test]
    fn queries_leave_the_network_unchanged() {
        let dir = chain_directory();
        let locations = dir.network().location_count();
        let roads = dir.network().road_count();

        for _ in 0..3 {
            dir.nearest_facilities(&request(28.5, 79.2, "A", 5)).unwrap();
        }

        assert_eq!(dir.network().location_count(), locations);
        assert_eq!(dir.network().road_count(), roads);
    }

    #[test]
    fn registration_is_persistent_and_idempotent() {
        let mut dir = chain_directory();
        let spec = facility("B", "New Clinic - B", 29.46, 79.01);

        let id = dir.register_facility(&spec).unwrap();
        let roads = dir.network().road_count();

        // Visible to subsequent queries, close to B.
        let matches = dir
            .nearest_facilities(&request(29.449663, 79.0, "B", 1))
            .unwrap();
        assert_eq!(matches[0].name, "New Clinic - B");

        // Re-registering neither duplicates the node nor its road.
        assert_eq!(dir.register_facility(&spec).unwrap(), id);
        assert_eq!(dir.network().road_count(), roads);
    }

    #[test]
    fn register_facility_requires_known_hub() {
        let mut dir = chain_directory();
        let err = dir
            .register_facility(&facility("Nowhere", "Orphan", 29.0, 79.0))
            .unwrap_err();
        assert!(matches!(err, DirectoryError::UnknownHub(_)));
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;
    use std::path::Path;

    use crate::{load_facilities_reader, load_hubs_csv, load_hubs_reader, DirectoryError};

    const HUBS_CSV: &str = "\
name,lat,lon,address
Dehradun,30.3165,78.0322,Dehradun City
Haridwar,29.9457,78.1642,Haridwar City
";

    const FACILITIES_CSV: &str = "\
hub,name,lat,lon,address,contact,services
Dehradun,Soil Testing Lab - Dehradun,30.3365,78.0122,Research Complex,1800-180-2311,Soil Analysis
";

    #[test]
    fn hubs_parse() {
        let hubs = load_hubs_reader(Cursor::new(HUBS_CSV)).unwrap();
        assert_eq!(hubs.len(), 2);
        assert_eq!(hubs[0].name, "Dehradun");
        assert_eq!(hubs[0].lat, 30.3165);
        assert_eq!(hubs[1].address, "Haridwar City");
    }

    #[test]
    fn facilities_parse() {
        let facilities = load_facilities_reader(Cursor::new(FACILITIES_CSV)).unwrap();
        assert_eq!(facilities.len(), 1);
        assert_eq!(facilities[0].hub, "Dehradun");
        assert_eq!(facilities[0].services, "Soil Analysis");
    }

    #[test]
    fn malformed_coordinate_is_a_parse_error() {
        let bad = "name,lat,lon,address\nDehradun,not-a-number,78.03,Dehradun City\n";
        let err = load_hubs_reader(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, DirectoryError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_hubs_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DirectoryError::Io(_)));
    }
}

// ── Batch queries ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod batch {
    use fq_core::Category;
    use crate::{build_network, Directory, QueryRequest};

    #[test]
    fn batch_matches_sequential() {
        let (hubs, facilities) = super::helpers::chain_dataset();
        let dir = Directory::new(build_network(&hubs, &facilities, 60.0).unwrap());

        let reqs: Vec<QueryRequest> = ["A", "B", "C"]
            .iter()
            .map(|anchor| QueryRequest {
                lat: 29.0,
                lon: 79.0,
                anchor_hub: anchor.to_string(),
                category: Category::ServiceCenter,
                limit: 5,
            })
            .collect();

        let parallel = dir.nearest_facilities_batch(&reqs);
        assert_eq!(parallel.len(), reqs.len());
        for (req, batch_result) in reqs.iter().zip(&parallel) {
            let sequential = dir.nearest_facilities(req).unwrap();
            let batch = batch_result.as_ref().unwrap();
            assert_eq!(batch.len(), sequential.len());
            for (b, s) in batch.iter().zip(&sequential) {
                assert_eq!(b.name, s.name);
                assert_eq!(b.path_km.to_bits(), s.path_km.to_bits());
            }
        }
    }
}
