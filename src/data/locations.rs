//! Static location data for forecast lookups
//!
//! Locations are keyed by their IANA timezone name, which doubles as the
//! `timezone` query parameter sent to the API. Vilnius is the default and the
//! fallback for unknown keys.

use super::Location;

/// Timezone key of the default location
pub const DEFAULT_LOCATION: &str = "Europe/Vilnius";

/// Static array of supported locations
///
/// The default location sits at index 0 so fallback resolution is a plain
/// array access.
pub static LOCATIONS: [Location; 8] = [
    Location {
        timezone: "Europe/Vilnius",
        city: "Vilnius",
        latitude: 54.72,
        longitude: 25.24,
    },
    Location {
        timezone: "Europe/Riga",
        city: "Riga",
        latitude: 56.95,
        longitude: 24.11,
    },
    Location {
        timezone: "Europe/Tallinn",
        city: "Tallinn",
        latitude: 59.44,
        longitude: 24.75,
    },
    Location {
        timezone: "Europe/Warsaw",
        city: "Warsaw",
        latitude: 52.23,
        longitude: 21.01,
    },
    Location {
        timezone: "Europe/Helsinki",
        city: "Helsinki",
        latitude: 60.17,
        longitude: 24.94,
    },
    Location {
        timezone: "Europe/Berlin",
        city: "Berlin",
        latitude: 52.52,
        longitude: 13.40,
    },
    Location {
        timezone: "Europe/Stockholm",
        city: "Stockholm",
        latitude: 59.33,
        longitude: 18.07,
    },
    Location {
        timezone: "Europe/London",
        city: "London",
        latitude: 51.51,
        longitude: -0.13,
    },
];

/// Get a location by its timezone key
///
/// # Arguments
///
/// * `timezone` - IANA timezone name (e.g. "Europe/Vilnius")
///
/// # Returns
///
/// Returns `Some(&Location)` if found, `None` otherwise
pub fn get_location(timezone: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|loc| loc.timezone == timezone)
}

/// Resolve a timezone key to a location, falling back to the default
///
/// Unknown keys resolve to the default location's coordinates; callers keep
/// using the requested key for the `timezone` query parameter.
pub fn resolve_location(timezone: &str) -> &'static Location {
    get_location(timezone).unwrap_or(&LOCATIONS[0])
}

/// Get all supported locations
pub fn all_locations() -> &'static [Location] {
    &LOCATIONS
}
