use std::rc::Rc;

use anyhow::Result;
use geom::{Duration, Pt2D, Time};

use crate::FlightArc;

/// Gradually reveals a prefix of an arc as time passes. The host calls `advance` once per
/// rendered frame and stops once the trail reports it's done.
pub struct Trail {
    arc: Rc<FlightArc>,
    duration: Duration,
    state: State,
    // How many points of the arc are currently visible. Never shrinks within one run.
    visible: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    /// The start time gets recorded on the first frame
    Idle,
    Running { start: Time },
    Complete,
}

/// What to draw for one trail on one frame
pub struct TrailFrame<'a> {
    pub pts: &'a [Pt2D],
    pub done: bool,
}

impl Trail {
    pub fn new(arc: Rc<FlightArc>, duration: Duration) -> Result<Self> {
        if duration < Duration::ZERO {
            bail!("Trail duration can't be negative: {}", duration);
        }
        Ok(Self {
            arc,
            duration,
            state: State::Idle,
            visible: 0,
        })
    }

    /// Clears whatever's visible and begins a new run. Trails that should animate together
    /// share a reference time; without one, the first frame starts the clock.
    pub fn start(&mut self, reference: Option<Time>) {
        self.reset();
        if let Some(start) = reference {
            self.state = State::Running { start };
        }
    }

    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.visible = 0;
    }

    pub fn advance(&mut self, now: Time) -> TrailFrame {
        let start = match self.state {
            State::Complete => {
                return self.frame();
            }
            State::Idle => {
                self.state = State::Running { start: now };
                now
            }
            State::Running { start } => start,
        };

        let fraction = self.fraction_since(start, now);
        if fraction >= 1.0 {
            self.visible = self.arc.len();
            self.state = State::Complete;
            debug!("Trail finished after {}", now - start);
        } else {
            let idx = (fraction * (self.arc.len() - 1) as f64).floor() as usize;
            self.visible = self.visible.max(idx + 1);
        }
        self.frame()
    }

    /// How far along the animation is at some time, not clamped. None if the trail hasn't
    /// started yet.
    pub fn fraction(&self, now: Time) -> Option<f64> {
        match self.state {
            State::Idle => None,
            State::Running { start } => Some(self.fraction_since(start, now)),
            State::Complete => Some(1.0),
        }
    }

    fn fraction_since(&self, start: Time, now: Time) -> f64 {
        if self.duration == Duration::ZERO {
            return 1.0;
        }
        let elapsed = now - start;
        if elapsed < Duration::ZERO {
            // The host shouldn't go backwards in time, but don't extrapolate before the start
            return 0.0;
        }
        elapsed / self.duration
    }

    fn frame(&self) -> TrailFrame {
        TrailFrame {
            pts: self.visible_pts(),
            done: self.is_done(),
        }
    }

    pub fn visible_pts(&self) -> &[Pt2D] {
        self.arc.prefix(self.visible)
    }

    pub fn is_done(&self) -> bool {
        self.state == State::Complete
    }

    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    pub fn arc(&self) -> &FlightArc {
        &self.arc
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
