use anyhow::Result;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use geom::Pt2D;

use crate::{from_web_mercator, FlightMap};

impl FlightMap {
    /// The origin, every arc, and whatever part of each trail is currently visible, in WGS84.
    pub fn to_geojson(&self) -> GeoJson {
        let mut features = Vec::new();

        let mut feature = new_feature(Value::Point(position(self.origin())));
        feature.set_property("type", "origin");
        feature.set_property("name", self.config().origin.name.clone());
        features.push(feature);

        for flight in self.flights() {
            let mut feature = new_feature(line_string(flight.arc.points()));
            feature.set_property("type", "arc");
            feature.set_property("destination", flight.destination.name.clone());
            features.push(feature);

            let trail = flight.trail.visible_pts();
            // A LineString needs at least 2 points
            if trail.len() >= 2 {
                let mut feature = new_feature(line_string(trail));
                feature.set_property("type", "trail");
                feature.set_property("destination", flight.destination.name.clone());
                feature.set_property("done", flight.trail.is_done());
                features.push(feature);
            }
        }

        GeoJson::FeatureCollection(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn export_to_geojson(&self, path: String) -> Result<()> {
        let gj = self.to_geojson();
        std::fs::write(&path, serde_json::to_string_pretty(&gj)?)?;
        info!("Wrote {}", path);
        Ok(())
    }
}

fn new_feature(value: Value) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: None,
        foreign_members: None,
    }
}

fn position(pt: Pt2D) -> Vec<f64> {
    let gps = from_web_mercator(pt);
    vec![gps.x(), gps.y()]
}

fn line_string(pts: &[Pt2D]) -> Value {
    Value::LineString(pts.iter().map(|pt| position(*pt)).collect())
}
