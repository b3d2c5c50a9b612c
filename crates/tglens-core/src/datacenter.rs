//! Datacenter id → location name mapping.

/// Location strings for Telegram datacenter ids 1..=15.
const DC_LOCATIONS: [&str; 15] = [
    "MIA, Miami, USA, US",
    "AMS, Amsterdam, Netherlands, NL",
    "MBA, Mumbai, India, IN",
    "STO, Stockholm, Sweden, SE",
    "SIN, Singapore, SG",
    "LHR, London, United Kingdom, GB",
    "FRA, Frankfurt, Germany, DE",
    "JFK, New York, USA, US",
    "HKG, Hong Kong, HK",
    "TYO, Tokyo, Japan, JP",
    "SYD, Sydney, Australia, AU",
    "GRU, São Paulo, Brazil, BR",
    "DXB, Dubai, UAE, AE",
    "CDG, Paris, France, FR",
    "ICN, Seoul, South Korea, KR",
];

/// Map a datacenter id to its descriptive location string.
///
/// Unknown or missing ids map to `"Unknown"`. Pure lookup, no network access.
pub fn dc_location(dc_id: Option<i32>) -> &'static str {
    match dc_id {
        Some(id @ 1..=15) => DC_LOCATIONS[(id - 1) as usize],
        _ => "Unknown",
    }
}
