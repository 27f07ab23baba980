//! `fq-core` — foundational types for the `rust_fq` facility query engine.
//!
//! This crate is a dependency of every other `fq-*` crate.  It intentionally
//! has no `fq-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                |
//! |--------------|-----------------------------------------|
//! | [`ids`]      | `LocationId`, `RoadId`                  |
//! | [`geo`]      | `GeoPoint`, haversine distance          |
//! | [`category`] | `Category` enum                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod category;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::Category;
pub use geo::GeoPoint;
pub use ids::{LocationId, RoadId};
