//! demos/dashboard.rs
//!
//! Loads today's irradiance for the built-in site network from Open-Meteo and prints
//! what the map and chart layers would draw.
//!
//! To run this demo:
//! cargo run --example dashboard -- [hour] [site]

use solarnet::{legend, SelectionState, SolarMap};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let hour: u8 = args.next().map(|h| h.parse()).transpose()?.unwrap_or(12);
    let site = args.next().unwrap_or_else(|| "Utrecht".to_string());

    let map = SolarMap::new()?;
    println!(
        "{} sites, {} edges. Fetching irradiance...",
        map.registry().len(),
        map.graph().len()
    );
    let series = map.load().call().await;
    let window = series.window();
    println!("Window {} .. {}", window.start, window.end);
    for failed in series.fallback_sites() {
        println!("  no data for {failed}, showing zeros");
    }

    let mut selection = SelectionState::new();
    selection.set_current_hour(hour)?;
    selection.select(site.as_str());

    println!("\nMarkers at hour {hour}:");
    for marker in map.markers(&series, &selection) {
        println!(
            "  {:<12} {:>7.1} W/m²  {} {}  size {:>5.2}",
            marker.site,
            marker.value.unwrap_or(0.0),
            marker.bucket,
            marker.color,
            marker.magnitude
        );
    }

    println!("\nLegend:");
    for entry in legend() {
        println!("  {} {} {}", entry.bucket, entry.color, entry.label);
    }

    println!("\nDaily curve for {site}:");
    for record in map.chart(&series, &selection) {
        let marker = if record.is_current_hour { "<" } else { "" };
        println!("  {:02}h {:>7.1} {}", record.hour, record.irradiance, marker);
    }
    if let Some(summary) = map.summary(&series, &selection) {
        println!(
            "Peak {:.1} W/m² at index {}, {:.0} Wh/m² over the window",
            summary.peak, summary.peak_hour, summary.insolation_wh_m2
        );
    }

    println!("\nEdges GeoJSON:\n{}", serde_json::to_string_pretty(&map.graph().to_geojson())?);
    Ok(())
}
