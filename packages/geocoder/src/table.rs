//! Static district-to-coordinate table.
//!
//! District names are matched exactly. Keys are upper-case, so a source
//! that spells a district in mixed case will not geocode.

use std::collections::BTreeMap;

use infringement_map_infringement_models::Coordinates;

/// Queensland districts and their representative points.
pub const QUEENSLAND_DISTRICTS: &[(&str, Coordinates)] = &[
    ("BRISBANE", Coordinates::new(-27.4698, 153.0251)),
    ("GOLD COAST", Coordinates::new(-28.0167, 153.4000)),
    ("SUNSHINE COAST", Coordinates::new(-26.6500, 153.0667)),
    ("LOGAN", Coordinates::new(-27.6392, 153.1086)),
    ("IPSWICH", Coordinates::new(-27.6161, 152.7610)),
    ("CAIRNS", Coordinates::new(-16.9186, 145.7781)),
    ("TOWNSVILLE", Coordinates::new(-19.2590, 146.8169)),
    ("TOOWOOMBA", Coordinates::new(-27.5598, 151.9507)),
    ("MACKAY", Coordinates::new(-21.1412, 149.1868)),
    ("ROCKHAMPTON", Coordinates::new(-23.3791, 150.5100)),
    ("BUNDABERG", Coordinates::new(-24.8500, 152.3500)),
    ("HERVEY BAY", Coordinates::new(-25.2882, 152.8730)),
    ("GLADSTONE", Coordinates::new(-23.8430, 151.2583)),
    ("MARYBOROUGH", Coordinates::new(-25.5378, 152.7020)),
    ("MOUNT ISA", Coordinates::new(-20.7256, 139.4927)),
];

/// Immutable lookup from district name to [`Coordinates`].
#[derive(Debug, Clone)]
pub struct GeocodeTable {
    entries: BTreeMap<&'static str, Coordinates>,
}

impl GeocodeTable {
    /// Builds a table from `(district, coordinates)` pairs. Later entries
    /// win when a district is repeated.
    #[must_use]
    pub fn from_entries(entries: &[(&'static str, Coordinates)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    /// The built-in Queensland table.
    #[must_use]
    pub fn queensland() -> Self {
        Self::from_entries(QUEENSLAND_DISTRICTS)
    }

    /// Looks up a district by exact, case-sensitive name.
    #[must_use]
    pub fn lookup(&self, district: &str) -> Option<Coordinates> {
        self.entries.get(district).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known district names in ascending order.
    pub fn districts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for GeocodeTable {
    fn default() -> Self {
        Self::queensland()
    }
}
