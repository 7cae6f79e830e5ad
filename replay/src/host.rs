use geom::{Duration, Time};

use model::{CameraMove, FlightMap, ViewChange, ViewMode};

/// Stands in for a map's render loop, producing one timestamp per frame.
pub struct FrameClock {
    time: Time,
    step: Duration,
}

impl FrameClock {
    pub fn new(start: Time, fps: f64) -> anyhow::Result<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            bail!("Frames per second must be positive, not {}", fps);
        }
        Ok(Self {
            time: start,
            step: Duration::seconds(1.0 / fps),
        })
    }

    pub fn now(&self) -> Time {
        self.time
    }

    pub fn tick(&mut self) -> Time {
        self.time += self.step;
        self.time
    }
}

/// Headless replacement for the map surface. It subscribes to frames only while the map wants
/// them, and "draws" by logging.
pub struct Host {
    clock: FrameClock,
    subscribed: bool,
    max_frames: usize,
    pub frames_rendered: usize,
    pub origin_layer_visible: bool,
    pub trails_layer_visible: bool,
}

impl Host {
    pub fn new(clock: FrameClock, max_frames: usize) -> Self {
        Self {
            clock,
            subscribed: false,
            max_frames,
            frames_rendered: 0,
            origin_layer_visible: true,
            trails_layer_visible: false,
        }
    }

    pub fn now(&self) -> Time {
        self.clock.now()
    }

    /// Like clicking one of the radio buttons
    pub fn select(&mut self, map: &mut FlightMap, mode: ViewMode) {
        let now = self.clock.now();
        if let Some(change) = map.set_mode(mode, now) {
            self.apply(change);
        }
        self.subscribed = map.wants_frames();
    }

    fn apply(&mut self, change: ViewChange) {
        self.origin_layer_visible = change.show_origin_layer;
        self.trails_layer_visible = change.show_trails_layer;
        match change.camera {
            CameraMove::CenterOn {
                center,
                zoom,
                duration,
            } => {
                info!(
                    "Camera: center on ({}, {}) at zoom {} over {}",
                    center.x(),
                    center.y(),
                    zoom,
                    duration
                );
            }
            CameraMove::Fit {
                bounds,
                padding_px,
                duration,
            } => {
                info!(
                    "Camera: fit ({}, {}) to ({}, {}) with {}px padding over {}",
                    bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y, padding_px, duration
                );
            }
            CameraMove::Stay => {
                info!("Camera: nothing to fit");
            }
        }
    }

    /// Renders frames until every trail is done, or the map stops wanting frames. Returns true
    /// if the animation finished.
    pub fn run_until_idle(&mut self, map: &mut FlightMap) -> bool {
        let mut frames = 0;
        while self.subscribed {
            if frames == self.max_frames {
                warn!("Giving up after {} frames", frames);
                self.subscribed = false;
                return false;
            }
            let now = if frames == 0 {
                self.clock.now()
            } else {
                self.clock.tick()
            };
            let update = map.on_frame(now);
            frames += 1;
            self.frames_rendered += 1;

            let total: usize = update.trails.iter().map(|(_, pts)| pts.len()).sum();
            debug!("Frame at {}: {} trail points visible", now, total);
            if update.done {
                info!("All trails drawn after {} frames, at {}", frames, now);
                self.subscribed = false;
                return true;
            }
            if !map.wants_frames() {
                self.subscribed = false;
            }
        }
        !map.wants_frames()
    }
}
