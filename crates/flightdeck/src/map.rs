//! Route map rendering.
//!
//! Produces a self-contained Leaflet HTML document with a single weighted
//! polyline between the two airports of a route, labelled with the delay
//! percentage. The artifact is a plain file; opening it in a browser shows
//! the map.

use std::path::Path;

use serde_json::json;
use tracing::info;

use crate::error::{Error, Result};
use crate::flight::Airport;

/// Initial map center: the continental USA.
const MAP_CENTER: (f64, f64) = (39.8283, -98.5795);

/// Initial zoom level.
const MAP_ZOOM: u8 = 4;

/// Polyline stroke weight is the delay percentage divided by this factor.
const WEIGHT_DIVISOR: f64 = 5.0;

/// Render the route map artifact to the given path.
///
/// The line's visual weight scales with the delay percentage, and the
/// tooltip identifies the route and the percentage.
///
/// # Errors
///
/// Returns [`Error::MapWrite`] if the file cannot be written.
pub fn render_route_map(
    path: impl AsRef<Path>,
    origin: &Airport,
    destination: &Airport,
    percent_delayed: f64,
) -> Result<()> {
    let path = path.as_ref();
    let html = route_map_html(origin, destination, percent_delayed);

    std::fs::write(path, html).map_err(|source| Error::MapWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Route map for {} <-> {} written to {}",
        origin.code,
        destination.code,
        path.display()
    );
    Ok(())
}

/// Build the HTML document for a route.
///
/// Coordinates and the tooltip text go through JSON serialization so codes
/// and numbers land in the script block correctly escaped.
#[must_use]
pub fn route_map_html(origin: &Airport, destination: &Airport, percent_delayed: f64) -> String {
    let locations = json!([
        [origin.latitude, origin.longitude],
        [destination.latitude, destination.longitude],
    ]);
    let tooltip = json!(format!(
        "{} <-> {} ({percent_delayed}% delayed)",
        origin.code, destination.code
    ));
    let center = json!([MAP_CENTER.0, MAP_CENTER.1]);
    let weight = percent_delayed / WEIGHT_DIVISOR;

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Flight delays: {origin_code} &lt;-&gt; {destination_code}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map("map").setView({center}, {zoom});
L.tileLayer("https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
    attribution: "&copy; OpenStreetMap contributors"
}}).addTo(map);
L.polyline({locations}, {{
    color: "green",
    weight: {weight}
}}).bindTooltip({tooltip}).addTo(map);
</script>
</body>
</html>
"#,
        origin_code = origin.code,
        destination_code = destination.code,
        zoom = MAP_ZOOM,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::IataCode;

    fn airport(code: &str, latitude: f64, longitude: f64) -> Airport {
        Airport {
            code: IataCode::parse(code).unwrap(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_html_contains_tooltip() {
        let html = route_map_html(
            &airport("JFK", 40.6398, -73.7789),
            &airport("LAX", 33.9425, -118.408),
            58.5,
        );
        assert!(html.contains("JFK <-> LAX (58.5% delayed)"));
    }

    #[test]
    fn test_html_contains_both_coordinate_pairs() {
        let html = route_map_html(
            &airport("JFK", 40.6398, -73.7789),
            &airport("LAX", 33.9425, -118.408),
            50.0,
        );
        assert!(html.contains("40.6398"));
        assert!(html.contains("-73.7789"));
        assert!(html.contains("33.9425"));
        assert!(html.contains("-118.408"));
    }

    #[test]
    fn test_weight_scales_with_percentage() {
        let html = route_map_html(
            &airport("JFK", 40.0, -73.0),
            &airport("LAX", 33.0, -118.0),
            45.0,
        );
        assert!(html.contains("weight: 9"));
    }

    #[test]
    fn test_html_centers_on_usa() {
        let html = route_map_html(
            &airport("JFK", 40.0, -73.0),
            &airport("LAX", 33.0, -118.0),
            10.0,
        );
        assert!(html.contains("39.8283"));
        assert!(html.contains("-98.5795"));
    }

    #[test]
    fn test_render_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "flightdeck_map_test_{}.html",
            std::process::id()
        ));

        render_route_map(
            &path,
            &airport("JFK", 40.6398, -73.7789),
            &airport("LAX", 33.9425, -118.408),
            58.5,
        )
        .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("JFK <-> LAX"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_render_to_bad_path_fails() {
        let result = render_route_map(
            "/nonexistent/dir/map.html",
            &airport("JFK", 40.0, -73.0),
            &airport("LAX", 33.0, -118.0),
            10.0,
        );
        assert!(matches!(result, Err(Error::MapWrite { .. })));
    }
}
