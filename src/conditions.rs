//! Weather code classification
//!
//! Open-Meteo reports weather as WMO codes. Each known code expands into a
//! [`WeatherCondition`] bitset combining a phenomenon category with intensity
//! and freezing/hail modifiers; the bitset then drives icon and description
//! selection through two priority-ordered matches.

use bitflags::bitflags;

bitflags! {
    /// Orthogonal weather condition flags composed from a WMO code
    ///
    /// Category flags describe the phenomenon, intensity flags qualify it,
    /// and FREEZING/HAIL mark the corresponding precipitation variants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WeatherCondition: u16 {
        const CLEAR        = 1 << 0;
        const CLOUDS       = 1 << 1;
        const FOG          = 1 << 2;
        const DRIZZLE      = 1 << 3;
        const RAIN         = 1 << 4;
        const SNOW         = 1 << 5;
        const SHOWERS      = 1 << 6;
        const THUNDERSTORM = 1 << 7;
        const LIGHT        = 1 << 8;
        const MODERATE     = 1 << 9;
        const HEAVY        = 1 << 10;
        const FREEZING     = 1 << 11;
        const HAIL         = 1 << 12;
    }
}

/// Icon identifiers returned by [`classify`]
///
/// The values are Font Awesome solid glyph code points, kept verbatim so any
/// front end rendering that font displays the same symbols.
pub mod icons {
    /// Thunderstorm (bolt)
    pub const BOLT: &str = "\u{f0e7}";
    /// Snow (cloud with snowflake)
    pub const CLOUD_SNOW: &str = "\u{f2dc}";
    /// Daytime rain, drizzle or showers
    pub const CLOUD_RAIN: &str = "\u{f73d}";
    /// Nighttime rain, drizzle or showers
    pub const CLOUD_MOON_RAIN: &str = "\u{f73c}";
    /// Fog
    pub const FOG: &str = "\u{f75f}";
    /// Daytime clouds
    pub const SUN_CLOUD: &str = "\u{f6c4}";
    /// Nighttime clouds
    pub const MOON_CLOUD: &str = "\u{f6c3}";
    /// Clear day fallback
    pub const SUN: &str = "\u{f185}";
    /// Clear night fallback
    pub const MOON: &str = "\u{f186}";
}

/// The composite bitset produced by code 1 ("mainly clear")
///
/// Checked as an exact match before the general CLOUDS branch so it does not
/// read as partly cloudy.
const MAINLY_CLEAR: WeatherCondition = WeatherCondition::CLEAR
    .union(WeatherCondition::LIGHT)
    .union(WeatherCondition::CLOUDS);

/// Expands a WMO weather code into its condition bitset
///
/// Codes outside the fixed table yield the empty bitset, which downstream
/// matching resolves to the unknown description and a plain day/night icon.
pub fn condition_for_code(code: i32) -> WeatherCondition {
    use WeatherCondition as C;
    match code {
        0 => C::CLEAR,
        1 => C::CLEAR | C::LIGHT | C::CLOUDS,
        2 => C::CLOUDS | C::MODERATE,
        3 => C::CLOUDS | C::HEAVY,
        45 => C::FOG,
        48 => C::FOG | C::FREEZING,
        51 => C::DRIZZLE | C::LIGHT,
        53 => C::DRIZZLE | C::MODERATE,
        55 => C::DRIZZLE | C::HEAVY,
        56 => C::DRIZZLE | C::LIGHT | C::FREEZING,
        57 => C::DRIZZLE | C::HEAVY | C::FREEZING,
        61 => C::RAIN | C::LIGHT,
        63 => C::RAIN | C::MODERATE,
        65 => C::RAIN | C::HEAVY,
        66 => C::RAIN | C::LIGHT | C::FREEZING,
        67 => C::RAIN | C::HEAVY | C::FREEZING,
        71 => C::SNOW | C::LIGHT,
        73 => C::SNOW | C::MODERATE,
        75 => C::SNOW | C::HEAVY,
        77 => C::SNOW, // snow grains
        80 => C::RAIN | C::SHOWERS | C::LIGHT,
        81 => C::RAIN | C::SHOWERS | C::MODERATE,
        82 => C::RAIN | C::SHOWERS | C::HEAVY,
        85 => C::SNOW | C::SHOWERS | C::LIGHT,
        86 => C::SNOW | C::SHOWERS | C::HEAVY,
        95 => C::THUNDERSTORM,
        96 => C::THUNDERSTORM | C::HAIL | C::LIGHT,
        99 => C::THUNDERSTORM | C::HAIL | C::HEAVY,
        _ => C::empty(),
    }
}

/// Maps a weather code and day/night flag to an icon id and description key
///
/// # Arguments
/// * `code` - WMO weather code from the API
/// * `is_day` - Whether the sample falls in daylight hours
///
/// # Returns
/// A `(icon, description_key)` pair; the key resolves to display text via
/// [`crate::strings::localize`].
pub fn classify(code: i32, is_day: bool) -> (&'static str, &'static str) {
    let condition = condition_for_code(code);
    (icon_for(condition, is_day), description_key_for(condition))
}

/// Selects an icon for a condition bitset, first match wins
fn icon_for(condition: WeatherCondition, is_day: bool) -> &'static str {
    use WeatherCondition as C;

    let wet = C::RAIN | C::DRIZZLE | C::SHOWERS;

    if condition.intersects(C::THUNDERSTORM) {
        icons::BOLT
    } else if condition.intersects(C::SNOW) {
        icons::CLOUD_SNOW
    } else if condition.intersects(wet) {
        if is_day {
            icons::CLOUD_RAIN
        } else {
            icons::CLOUD_MOON_RAIN
        }
    } else if condition.intersects(C::FOG) {
        icons::FOG
    } else if condition.intersects(C::CLOUDS) {
        if is_day {
            icons::SUN_CLOUD
        } else {
            icons::MOON_CLOUD
        }
    } else if is_day {
        icons::SUN
    } else {
        icons::MOON
    }
}

/// Selects a description key for a condition bitset, first match wins
///
/// The exact MAINLY_CLEAR composite is tested before the general CLOUDS
/// branch; everything else follows category-then-intensity priority.
fn description_key_for(condition: WeatherCondition) -> &'static str {
    use WeatherCondition as C;

    if condition.contains(C::THUNDERSTORM) {
        "weather_thunderstorm"
    } else if condition.contains(C::SNOW | C::HEAVY) {
        "weather_snow_heavy"
    } else if condition.contains(C::SNOW) {
        "weather_snow"
    } else if condition.contains(C::RAIN | C::HEAVY) {
        "weather_rain_heavy"
    } else if condition.contains(C::RAIN) {
        "weather_rain"
    } else if condition.contains(C::DRIZZLE) {
        "weather_drizzle"
    } else if condition.contains(C::FOG) {
        "weather_fog"
    } else if condition.contains(C::CLOUDS | C::HEAVY) {
        "weather_overcast"
    } else if condition == MAINLY_CLEAR {
        "weather_mainly_clear"
    } else if condition.contains(C::CLOUDS) {
        "weather_partly_cloudy"
    } else if condition.contains(C::CLEAR) {
        "weather_clear"
    } else {
        "weather_unknown"
    }
}
