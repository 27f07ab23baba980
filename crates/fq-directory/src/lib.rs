//! `fq-directory` — from raw hub/facility datasets to answered queries.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`builder`] | `HubSpec`, `FacilitySpec`, `build_network`                 |
//! | [`loader`]  | CSV loaders for hub and facility datasets                  |
//! | [`query`]   | `Directory` facade, `QueryRequest`, `FacilityMatch`        |
//! | [`error`]   | `DirectoryError`, `DirectoryResult<T>`                     |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `serde`    | Propagates derives to `fq-core`/`fq-graph` types.       |
//! | `parallel` | `Directory::nearest_facilities_batch` via rayon.        |

pub mod builder;
pub mod error;
pub mod loader;
pub mod query;

#[cfg(test)]
mod tests;

pub use builder::{build_network, FacilitySpec, HubSpec, HUB_LINK_THRESHOLD_KM};
pub use error::{DirectoryError, DirectoryResult};
pub use loader::{load_facilities_csv, load_facilities_reader, load_hubs_csv, load_hubs_reader};
pub use query::{Directory, FacilityMatch, QueryRequest};
