//! `fq-graph` — facility network, shortest paths, and nearest-facility
//! selection.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`network`]  | `FacilityNetwork` (adjacency lists + name index + hub R-tree) |
//! | [`dijkstra`] | `PathEngine` trait, `DijkstraEngine`, `DistanceMap`        |
//! | [`selector`] | `nearest` top-K filter, `RankedLocation`                   |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |
//!
//! # Thread safety
//!
//! Queries borrow the network immutably and allocate only their own
//! scratch state, so any number of them may run concurrently over one
//! `&FacilityNetwork`.  Insertion takes `&mut` and is therefore serialized
//! against in-flight queries by the borrow checker; no lock is built in.

pub mod dijkstra;
pub mod error;
pub mod network;
pub mod selector;


pub use dijkstra::{
    shortest_paths, shortest_paths_overlay, DijkstraEngine, DistanceMap, PathEngine, UNREACHED_KM,
};
pub use error::{GraphError, GraphResult};
pub use network::{FacilityInfo, FacilityNetwork, Location, RoadEntry};
pub use selector::{nearest, RankedLocation};
