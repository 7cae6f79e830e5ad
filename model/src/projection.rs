use std::f64::consts::PI;

use geom::{LonLat, Pt2D};

/// Spherical Web Mercator (EPSG:3857), the projection web map tiles use.
const RADIUS: f64 = 6378137.0;
const HALF_SIZE: f64 = PI * RADIUS;

/// Projects WGS84 to planar Web Mercator meters. Latitudes near the poles are clamped to the
/// edge of the square world.
pub fn to_web_mercator(gps: LonLat) -> Pt2D {
    let x = RADIUS * gps.x().to_radians();
    let mut y = RADIUS * (PI / 4.0 + gps.y().to_radians() / 2.0).tan().ln();
    // ln(tan(..)) is infinite at exactly +/-90
    if !y.is_finite() || y.abs() > HALF_SIZE {
        y = HALF_SIZE.copysign(gps.y());
    }
    Pt2D::new(x, y)
}

pub fn from_web_mercator(pt: Pt2D) -> LonLat {
    let lon = (pt.x() / RADIUS).to_degrees();
    let lat = (2.0 * (pt.y() / RADIUS).exp().atan() - PI / 2.0).to_degrees();
    LonLat::new(lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_origin() {
        let pt = to_web_mercator(LonLat::new(0.0, 0.0));
        assert_eq!(pt.x(), 0.0);
        assert_eq!(pt.y(), 0.0);
    }

    #[test]
    fn antimeridian_is_half_the_world() {
        let pt = to_web_mercator(LonLat::new(180.0, 0.0));
        assert!((pt.x() - HALF_SIZE).abs() < 0.001);
    }

    #[test]
    fn poles_are_clamped() {
        let north = to_web_mercator(LonLat::new(10.0, 90.0));
        let south = to_web_mercator(LonLat::new(10.0, -90.0));
        assert!((north.y() - HALF_SIZE).abs() < 0.001);
        assert!((south.y() + HALF_SIZE).abs() < 0.001);
    }

    #[test]
    fn inverse_recovers_chennai() {
        let gps = from_web_mercator(to_web_mercator(LonLat::new(80.2707, 13.0827)));
        assert!((gps.x() - 80.2707).abs() < 1e-6);
        assert!((gps.y() - 13.0827).abs() < 1e-6);
    }
}
