use anyhow::Result;
use geom::{Bounds, Pt2D};

/// A curved flight path between two points, sampled along a quadratic Bezier curve. The
/// control point sits above the midpoint of the chord, so the path bulges upwards. This is a
/// visual effect, not a geodesic.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightArc {
    // Never empty; sample_count + 1 points
    pts: Vec<Pt2D>,
}

impl FlightArc {
    pub fn new(start: Pt2D, end: Pt2D, sample_count: usize, vertical_offset: f64) -> Result<Self> {
        if sample_count == 0 {
            bail!("An arc needs at least 1 sample, not 0");
        }
        if !vertical_offset.is_finite() {
            bail!("Arc vertical offset must be finite, not {}", vertical_offset);
        }

        let control = (
            start.x() + (end.x() - start.x()) / 2.0,
            start.y() + (end.y() - start.y()) / 2.0 + vertical_offset,
        );

        let mut pts = Vec::with_capacity(sample_count + 1);
        for i in 0..=sample_count {
            let t = i as f64 / sample_count as f64;
            let a = (1.0 - t) * (1.0 - t);
            let b = 2.0 * (1.0 - t) * t;
            let c = t * t;
            pts.push(Pt2D::new(
                a * start.x() + b * control.0 + c * end.x(),
                a * start.y() + b * control.1 + c * end.y(),
            ));
        }
        Ok(Self { pts })
    }

    pub fn points(&self) -> &[Pt2D] {
        &self.pts
    }

    pub fn len(&self) -> usize {
        self.pts.len()
    }

    pub fn first_pt(&self) -> Pt2D {
        self.pts[0]
    }

    pub fn last_pt(&self) -> Pt2D {
        self.pts[self.pts.len() - 1]
    }

    /// The first `n` points, capped to the whole arc.
    pub fn prefix(&self, n: usize) -> &[Pt2D] {
        &self.pts[..n.min(self.pts.len())]
    }

    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        for pt in &self.pts {
            bounds.update(*pt);
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let start = Pt2D::new(8935991.2, 1467807.5);
        let end = Pt2D::new(-14226.6, 6711542.4);
        let arc = FlightArc::new(start, end, 100, 500000.0).unwrap();
        assert_eq!(arc.len(), 101);
        assert_eq!(arc.first_pt(), start);
        assert_eq!(arc.last_pt(), end);
    }

    #[test]
    fn midpoint_blends_the_control_point() {
        let arc = FlightArc::new(Pt2D::new(0.0, 0.0), Pt2D::new(10.0, 0.0), 2, 4.0).unwrap();
        // control is (5, 4), so t=0.5 is 0.25*start + 0.5*control + 0.25*end
        assert_eq!(
            arc.points(),
            &[Pt2D::new(0.0, 0.0), Pt2D::new(5.0, 2.0), Pt2D::new(10.0, 0.0)]
        );
    }

    #[test]
    fn single_sample_is_just_the_endpoints() {
        let arc = FlightArc::new(Pt2D::new(1.0, 2.0), Pt2D::new(3.0, 4.0), 1, 100.0).unwrap();
        assert_eq!(arc.points(), &[Pt2D::new(1.0, 2.0), Pt2D::new(3.0, 4.0)]);
    }

    #[test]
    fn arc_rises_above_the_chord() {
        let arc = FlightArc::new(Pt2D::new(0.0, 0.0), Pt2D::new(100.0, 0.0), 10, 50.0).unwrap();
        for pt in &arc.points()[1..arc.len() - 1] {
            assert!(pt.y() > 0.0);
        }
    }

    #[test]
    fn zero_samples_rejected() {
        assert!(FlightArc::new(Pt2D::new(0.0, 0.0), Pt2D::new(1.0, 1.0), 0, 1.0).is_err());
    }

    #[test]
    fn infinite_offset_rejected() {
        assert!(
            FlightArc::new(Pt2D::new(0.0, 0.0), Pt2D::new(1.0, 1.0), 5, f64::INFINITY).is_err()
        );
    }

    #[test]
    fn degenerate_arc_without_offset() {
        let pt = Pt2D::new(7.0, -3.0);
        let arc = FlightArc::new(pt, pt, 10, 0.0).unwrap();
        assert_eq!(arc.len(), 11);
        assert!(arc.points().iter().all(|x| *x == pt));
    }

    #[test]
    fn degenerate_arc_with_offset_returns_home() {
        let pt = Pt2D::new(7.0, -3.0);
        let arc = FlightArc::new(pt, pt, 4, 8.0).unwrap();
        assert_eq!(arc.len(), 5);
        assert_eq!(arc.first_pt(), pt);
        assert_eq!(arc.last_pt(), pt);
        assert!(arc.points().iter().all(|x| x.x() == 7.0));
        // Peaks halfway to the control point
        assert_eq!(arc.points()[2], Pt2D::new(7.0, 1.0));
    }

    #[test]
    fn bounds_cover_the_bulge() {
        let arc = FlightArc::new(Pt2D::new(0.0, 0.0), Pt2D::new(10.0, 0.0), 2, 4.0).unwrap();
        let bounds = arc.bounds();
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 10.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 2.0);
    }

    #[test]
    fn prefix_is_capped() {
        let arc = FlightArc::new(Pt2D::new(0.0, 0.0), Pt2D::new(10.0, 0.0), 2, 4.0).unwrap();
        assert_eq!(arc.prefix(0).len(), 0);
        assert_eq!(arc.prefix(2).len(), 2);
        assert_eq!(arc.prefix(50).len(), 3);
    }
}
