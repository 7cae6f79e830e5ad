use std::rc::Rc;

use abstutil::Timer;
use anyhow::Result;
use geom::{Bounds, Pt2D, Time};

use crate::{CameraMove, Config, FlightArc, Place, Trail, ViewChange, ViewMode};

/// Owns all of the state for one map: the origin, one arc and trail per destination, and
/// which view is active. Hosts drive it by switching modes and forwarding frame times.
pub struct FlightMap {
    config: Config,
    origin: Pt2D,
    flights: Vec<Flight>,
    mode: ViewMode,
}

pub struct Flight {
    pub destination: Place,
    pub pos: Pt2D,
    pub arc: Rc<FlightArc>,
    pub trail: Trail,
}

/// The result of advancing every trail for one frame
pub struct FrameUpdate<'a> {
    pub trails: Vec<(&'a str, &'a [Pt2D])>,
    /// Every trail is complete, so the host can stop sending frames
    pub done: bool,
}

impl FlightMap {
    pub fn new(config: Config, timer: &mut Timer) -> Result<Self> {
        config.validate()?;
        let origin = config.origin.to_pt()?;

        timer.start("generate arcs");
        let mut flights = Vec::new();
        for destination in &config.destinations {
            let pos = destination.to_pt()?;
            let arc = Rc::new(FlightArc::new(
                origin,
                pos,
                config.sample_count,
                config.vertical_offset_meters,
            )?);
            let trail = Trail::new(arc.clone(), config.animation_duration())?;
            flights.push(Flight {
                destination: destination.clone(),
                pos,
                arc,
                trail,
            });
        }
        timer.stop("generate arcs");
        info!(
            "Built {} flight paths from {}",
            flights.len(),
            config.origin.name
        );

        Ok(Self {
            config,
            origin,
            flights,
            mode: ViewMode::Origin,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn origin(&self) -> Pt2D {
        self.origin
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// None if the map is already in this mode.
    pub fn set_mode(&mut self, mode: ViewMode, now: Time) -> Option<ViewChange> {
        if self.mode == mode {
            return None;
        }
        self.mode = mode;
        info!("Switching to the {} view at {}", mode.describe(), now);

        let camera = match mode {
            ViewMode::Origin => CameraMove::CenterOn {
                center: self.origin,
                zoom: self.config.origin_zoom,
                duration: self.config.recenter_duration(),
            },
            ViewMode::FlightPaths => {
                self.restart(now);
                match self.extent() {
                    Some(bounds) => CameraMove::Fit {
                        bounds,
                        padding_px: self.config.fit_padding_px,
                        duration: self.config.animation_duration(),
                    },
                    None => CameraMove::Stay,
                }
            }
        };

        Some(ViewChange {
            mode,
            show_origin_layer: mode == ViewMode::Origin,
            show_trails_layer: mode == ViewMode::FlightPaths,
            camera,
        })
    }

    /// Clears every trail and starts them all from the same moment, so they animate together.
    pub fn restart(&mut self, now: Time) {
        for flight in &mut self.flights {
            flight.trail.start(Some(now));
        }
    }

    /// Should the host keep calling `on_frame`?
    pub fn wants_frames(&self) -> bool {
        self.mode == ViewMode::FlightPaths && self.flights.iter().any(|f| !f.trail.is_done())
    }

    pub fn on_frame(&mut self, now: Time) -> FrameUpdate {
        let mut done = true;
        let mut trails = Vec::new();
        for flight in &mut self.flights {
            let frame = flight.trail.advance(now);
            done &= frame.done;
            trails.push((flight.destination.name.as_str(), frame.pts));
        }
        FrameUpdate { trails, done }
    }

    /// The union of every arc's bounding box. None if there are no destinations.
    pub fn extent(&self) -> Option<Bounds> {
        if self.flights.is_empty() {
            return None;
        }
        let mut extent = Bounds::new();
        for flight in &self.flights {
            let bounds = flight.arc.bounds();
            extent.update(Pt2D::new(bounds.min_x, bounds.min_y));
            extent.update(Pt2D::new(bounds.max_x, bounds.max_y));
        }
        Some(extent)
    }
}
