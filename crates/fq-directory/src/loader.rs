//! CSV dataset loaders.
//!
//! # CSV formats
//!
//! Hubs, one row per hub:
//!
//! ```csv
//! name,lat,lon,address
//! Dehradun,30.3165,78.0322,Dehradun City
//! Haridwar,29.9457,78.1642,Haridwar City
//! ```
//!
//! Facilities, one row per service center (the `hub` column names the
//! owning hub, which must appear in the hub dataset):
//!
//! ```csv
//! hub,name,lat,lon,address,contact,services
//! Dehradun,Soil Testing Lab - Dehradun,30.3365,78.0122,Research Complex,1800-180-2311,Soil Analysis
//! ```
//!
//! Malformed rows (non-numeric coordinates, missing columns) surface as
//! [`DirectoryError::Parse`] here, at the boundary; the graph and engine
//! never see text.

use std::io::Read;
use std::path::Path;

use crate::builder::{FacilitySpec, HubSpec};
use crate::{DirectoryError, DirectoryResult};

/// Load hub specs from a CSV file.
pub fn load_hubs_csv(path: &Path) -> DirectoryResult<Vec<HubSpec>> {
    let file = std::fs::File::open(path).map_err(DirectoryError::Io)?;
    load_hubs_reader(file)
}

/// Like [`load_hubs_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded datasets.
pub fn load_hubs_reader<R: Read>(reader: R) -> DirectoryResult<Vec<HubSpec>> {
    csv::Reader::from_reader(reader)
        .deserialize::<HubSpec>()
        .map(|row| row.map_err(|e| DirectoryError::Parse(e.to_string())))
        .collect()
}

/// Load facility specs from a CSV file.
pub fn load_facilities_csv(path: &Path) -> DirectoryResult<Vec<FacilitySpec>> {
    let file = std::fs::File::open(path).map_err(DirectoryError::Io)?;
    load_facilities_reader(file)
}

/// Like [`load_facilities_csv`] but accepts any `Read` source.
pub fn load_facilities_reader<R: Read>(reader: R) -> DirectoryResult<Vec<FacilitySpec>> {
    csv::Reader::from_reader(reader)
        .deserialize::<FacilitySpec>()
        .map(|row| row.map_err(|e| DirectoryError::Parse(e.to_string())))
        .collect()
}
