//! The built-in site network shown when no registry file is supplied.

use crate::types::site::{LatLon, Site};

pub(crate) fn default_sites() -> Vec<Site> {
    vec![
        Site::new(
            "Amsterdam",
            LatLon(52.3676, 4.9041),
            &["Haarlem", "Utrecht", "Amersfoort"],
        ),
        Site::new("Haarlem", LatLon(52.3874, 4.6462), &["Amsterdam", "Leiden"]),
        Site::new(
            "Leiden",
            LatLon(52.1601, 4.4970),
            &["Haarlem", "Den Haag", "Utrecht"],
        ),
        Site::new("Den Haag", LatLon(52.0705, 4.3007), &["Leiden", "Rotterdam"]),
        Site::new(
            "Rotterdam",
            LatLon(51.9244, 4.4777),
            &["Den Haag", "Utrecht", "Den Bosch"],
        ),
        Site::new(
            "Utrecht",
            LatLon(52.0907, 5.1214),
            &["Amsterdam", "Rotterdam", "Amersfoort", "Den Bosch", "Arnhem"],
        ),
        Site::new("Amersfoort", LatLon(52.1561, 5.3878), &["Utrecht", "Zwolle"]),
        Site::new(
            "Arnhem",
            LatLon(51.9851, 5.8987),
            &["Utrecht", "Zwolle", "Eindhoven"],
        ),
        Site::new("Eindhoven", LatLon(51.4416, 5.4697), &["Den Bosch", "Arnhem"]),
        // Rotterdam lists Den Bosch, but not the other way round.
        Site::new("Den Bosch", LatLon(51.6978, 5.3037), &["Utrecht", "Eindhoven"]),
        Site::new(
            "Zwolle",
            LatLon(52.5168, 6.0830),
            &["Amersfoort", "Arnhem", "Groningen"],
        ),
        Site::new("Groningen", LatLon(53.2194, 6.5665), &["Zwolle"]),
    ]
}
