use geom::{Bounds, Duration, Pt2D};

/// The two views the map can be toggled between
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    /// Just the marker at the origin
    Origin,
    /// Animated trails from the origin to every destination
    FlightPaths,
}

/// What the host should do after the view mode changes
#[derive(Clone, Debug, PartialEq)]
pub struct ViewChange {
    pub mode: ViewMode,
    pub show_origin_layer: bool,
    pub show_trails_layer: bool,
    pub camera: CameraMove,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CameraMove {
    CenterOn {
        center: Pt2D,
        zoom: f64,
        duration: Duration,
    },
    /// Zoom to show everything in the bounds, leaving some screen padding on every side
    Fit {
        bounds: Bounds,
        padding_px: f64,
        duration: Duration,
    },
    /// Nothing to look at
    Stay,
}

impl ViewMode {
    pub fn describe(self) -> &'static str {
        match self {
            ViewMode::Origin => "origin",
            ViewMode::FlightPaths => "flight paths",
        }
    }
}
