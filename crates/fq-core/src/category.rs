//! Location category enum shared across all `fq-*` crates.
//!
//! The set is deliberately closed (no `#[non_exhaustive]`): the nearest
//! selector filters on category equality, and a closed enum keeps every
//! `match` over categories exhaustive-checkable at compile time.

/// What kind of point a location is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// A regional anchor from which facilities and inter-hub roads radiate.
    Hub,
    /// A category-tagged point of interest queried by proximity.
    ServiceCenter,
    /// An ephemeral query origin.  Never stored in a shared network by the
    /// query path; present so persistent registration of a caller's own
    /// position remains expressible.
    QueryPoint,
}

impl Category {
    /// `true` for locations that anchor roads and carry facilities.
    #[inline]
    pub fn is_hub(self) -> bool {
        matches!(self, Category::Hub)
    }

    /// Human-readable label, useful for CSV/JSON column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Hub           => "hub",
            Category::ServiceCenter => "service_center",
            Category::QueryPoint    => "query_point",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
