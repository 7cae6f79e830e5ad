use anyhow::Result;
use geom::{Duration, LonLat, Pt2D};
use serde::{Deserialize, Serialize};

use crate::to_web_mercator;

/// Everything needed to build a `FlightMap`. The defaults are purely visual tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub origin: Place,
    pub destinations: Vec<Place>,
    /// Each arc has this many segments, so one more point
    pub sample_count: usize,
    /// How far above the chord's midpoint the Bezier control point sits, in projected meters
    pub vertical_offset_meters: f64,
    /// How long trails take to draw
    pub animation_secs: f64,
    pub origin_zoom: f64,
    /// How long the camera takes to return to the origin
    pub recenter_secs: f64,
    pub fit_padding_px: f64,
}

/// A named WGS84 position
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

impl Place {
    pub fn new(name: &str, lon: f64, lat: f64) -> Self {
        Self {
            name: name.to_string(),
            lon,
            lat,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.lon.is_finite() || !self.lat.is_finite() {
            bail!("{} has a non-finite position ({}, {})", self.name, self.lon, self.lat);
        }
        if self.lat.abs() > 90.0 {
            bail!("{} has latitude {} outside [-90, 90]", self.name, self.lat);
        }
        Ok(())
    }

    pub fn to_pt(&self) -> Result<Pt2D> {
        self.validate()?;
        Ok(to_web_mercator(LonLat::new(self.lon, self.lat)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: Place::new("Chennai", 80.2707, 13.0827),
            destinations: vec![
                Place::new("Bangalore", 77.5946, 12.9716),
                Place::new("Thiruvananthapuram", 76.9366, 8.5241),
                Place::new("Pune", 73.8567, 18.5204),
                Place::new("London", -0.1278, 51.5074),
            ],
            sample_count: 100,
            vertical_offset_meters: 500_000.0,
            animation_secs: 5.0,
            origin_zoom: 5.0,
            recenter_secs: 1.0,
            fit_padding_px: 50.0,
        }
    }
}

impl Config {
    /// Catch bad input before anything gets wired up, instead of failing mid-animation.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            bail!("sample_count must be at least 1");
        }
        if !self.vertical_offset_meters.is_finite() {
            bail!(
                "vertical_offset_meters must be finite, not {}",
                self.vertical_offset_meters
            );
        }
        for (name, secs) in [
            ("animation_secs", self.animation_secs),
            ("recenter_secs", self.recenter_secs),
        ] {
            if !secs.is_finite() || secs < 0.0 {
                bail!("{} must be a non-negative number, not {}", name, secs);
            }
        }
        if !self.origin_zoom.is_finite() {
            bail!("origin_zoom must be finite, not {}", self.origin_zoom);
        }
        if !self.fit_padding_px.is_finite() || self.fit_padding_px < 0.0 {
            bail!(
                "fit_padding_px must be a non-negative number, not {}",
                self.fit_padding_px
            );
        }
        self.origin.validate()?;
        for place in &self.destinations {
            place.validate()?;
        }
        if self.destinations.is_empty() {
            warn!("No destinations configured; there won't be any flight paths");
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::seconds(self.animation_secs)
    }

    pub fn recenter_duration(&self) -> Duration {
        Duration::seconds(self.recenter_secs)
    }
}
